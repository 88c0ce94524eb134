use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

use crate::cli::format_report;
use crate::errors::TrackerError;
use crate::models::{Running, SportsWalking, Swimming, Workout};

/// Variant-id for sensorprotokollens korte koder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Swimming,
    Running,
    Walking,
}

impl WorkoutKind {
    /// Antall råverdier variantens konstruktør krever.
    pub fn expected_arity(self) -> usize {
        match self {
            WorkoutKind::Swimming => 5,
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
        }
    }
}

/// Fast kode→variant-tabell fra sensorprotokollen.
static WORKOUT_CODES: Lazy<HashMap<&'static str, WorkoutKind>> = Lazy::new(|| {
    HashMap::from([
        ("SWM", WorkoutKind::Swimming),
        ("RUN", WorkoutKind::Running),
        ("WLK", WorkoutKind::Walking),
    ])
});

/// Les én sensorpakke: kort kode pluss flat verdiliste i
/// deklarasjonsrekkefølge. Arity sjekkes her, verdigrenser i konstruktørene.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, TrackerError> {
    let kind = *WORKOUT_CODES
        .get(code)
        .ok_or_else(|| TrackerError::UnknownWorkoutCode(code.to_string()))?;

    let expected = kind.expected_arity();
    if data.len() != expected {
        return Err(TrackerError::ArityMismatch {
            code: code.to_string(),
            expected,
            got: data.len(),
        });
    }
    debug!("pakke {code}: {data:?}");

    let workout = match kind {
        WorkoutKind::Swimming => Workout::Swimming(Swimming::new(
            data[0] as u32,
            data[1],
            data[2],
            data[3],
            data[4] as u32,
        )?),
        WorkoutKind::Running => {
            Workout::Running(Running::new(data[0] as u32, data[1], data[2])?)
        }
        WorkoutKind::Walking => Workout::SportsWalking(SportsWalking::new(
            data[0] as u32,
            data[1],
            data[2],
            data[3],
        )?),
    };
    Ok(workout)
}

/// Kjør én pakke: les → rapport → formater. Hva som skjer med resten av
/// batchen ved feil, bestemmer kalleren.
pub fn run_package(code: &str, data: &[f64]) -> Result<String, TrackerError> {
    let workout = read_package(code, data)?;
    Ok(format_report(&workout.report()))
}
