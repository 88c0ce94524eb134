//! FitTrack core: avledede treningsmetrikker (distanse, snittfart, kalorier)
//! fra råverdier, pluss fast formatert rapportlinje per økt.

pub mod cli;
pub mod dispatch;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod types;

pub use cli::{format_report, print_report};
pub use dispatch::{read_package, run_package, WorkoutKind};
pub use errors::TrackerError;
pub use models::{Running, SportsWalking, Swimming, TrainingBase, Workout};
pub use types::WorkoutReport;
