use serde::{Deserialize, Serialize};

/// Ferdig beregnet sammendrag for én treningsøkt.
/// Full presisjon beholdes her; avrunding til tusendeler skjer først i formatteren.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutReport {
    pub training_type: String, // "Swimming" | "Running" | "SportsWalking"
    pub duration_h: f64,       // timer
    pub distance_km: f64,      // km
    pub speed_kmh: f64,        // km/t
    pub calories_kcal: f64,    // kcal
}
