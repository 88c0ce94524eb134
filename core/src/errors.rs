use thiserror::Error;

/// Feiltaksonomi for dispatch og konstruksjon.
/// Alt feiler der det oppdages og propageres til kaller; ingen retries,
/// ingen delvis gjenoppretting.
#[derive(Debug, Error, PartialEq)]
pub enum TrackerError {
    #[error("ukjent treningskode: {0}")]
    UnknownWorkoutCode(String),

    #[error("{code}: forventet {expected} verdier, fikk {got}")]
    ArityMismatch {
        code: String,
        expected: usize,
        got: usize,
    },

    #[error("ugyldig argument: {0}")]
    InvalidArgument(String),

    #[error("kaloriberegning er ikke definert for basistypen")]
    UnsupportedOperation,
}
