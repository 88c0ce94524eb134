//! Ren formelsamling: (råverdier, konstanter) → distanse, snittfart, kalorier.

/// Meter per skritt (løping og gange).
pub const LEN_STEP_M: f64 = 0.65;
/// Meter per svømmetak.
pub const LEN_STROKE_M: f64 = 1.38;
/// Meter i en kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutter i en time.
pub const MIN_IN_H: f64 = 60.0;

const RUN_SPEED_COEFF: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;
const WLK_WEIGHT_COEFF: f64 = 0.035;
const WLK_SPEED_COEFF: f64 = 0.029;
const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_COEFF: f64 = 2.0;

/// Distanse i km fra antall bevegelser og lengde per bevegelse.
pub fn distance_km(action: u32, unit_len_m: f64) -> f64 {
    f64::from(action) * unit_len_m / M_IN_KM
}

/// Snittfart i km/t: distanse delt på varighet.
pub fn mean_speed_kmh(distance_km: f64, duration_h: f64) -> f64 {
    distance_km / duration_h
}

/// Snittfart for svømming fra bassenggeometri. Uavhengig av antall tak.
pub fn pool_speed_kmh(length_pool_m: f64, count_pool: u32, duration_h: f64) -> f64 {
    length_pool_m * f64::from(count_pool) / M_IN_KM / duration_h
}

/// Kalorier for løping.
pub fn running_calories(speed_kmh: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (RUN_SPEED_COEFF * speed_kmh - RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
        * (duration_h * MIN_IN_H)
}

/// Kalorier for sportsgange. `fart² / høyde` gulvdivideres som i referansen,
/// og høyden brukes rå som divisor (ingen enhetskonvertering).
pub fn walking_calories(speed_kmh: f64, weight_kg: f64, height_cm: f64, duration_h: f64) -> f64 {
    let speed_sq_per_height = (speed_kmh.powi(2) / height_cm).floor();
    (WLK_WEIGHT_COEFF * weight_kg + speed_sq_per_height * WLK_SPEED_COEFF * weight_kg)
        * (duration_h * MIN_IN_H)
}

/// Kalorier for svømming. Ingen varighetsfaktor i referanseformelen.
pub fn swimming_calories(speed_kmh: f64, weight_kg: f64) -> f64 {
    (speed_kmh + SWM_SPEED_SHIFT) * SWM_WEIGHT_COEFF * weight_kg
}
