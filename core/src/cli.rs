use crate::types::WorkoutReport;

/// Avrund til tusendeler for visning.
fn value_format(number: f64) -> String {
    format!("{number:.3}")
}

/// Fast visningsformat for ferdig rapport; tre desimaler per tallfelt,
/// hvert felt avrundes uavhengig.
pub fn format_report(report: &WorkoutReport) -> String {
    format!(
        "Тип тренировки: {}; Длительность: {} ч.; Дистанция: {} км; Ср. скорость: {} км/ч; Потрачено ккал: {}.",
        report.training_type,
        value_format(report.duration_h),
        value_format(report.distance_km),
        value_format(report.speed_kmh),
        value_format(report.calories_kcal),
    )
}

/// Skriv én ferdig rapportlinje til stdout.
pub fn print_report(report: &WorkoutReport) {
    println!("{}", format_report(report));
}
