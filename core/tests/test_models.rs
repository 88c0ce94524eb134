use fittrack_core::models::{Running, SportsWalking, Swimming, TrainingBase, Workout};
use fittrack_core::TrackerError;

#[test]
fn swimming_speed_is_independent_of_stroke_count() {
    let a = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
    let b = Swimming::new(1, 1.0, 80.0, 25.0, 40).unwrap();
    assert_eq!(a.mean_speed_kmh(), b.mean_speed_kmh());
}

#[test]
fn swimming_distance_keeps_stroke_formula() {
    // referansens arvede formel: 720 tak × 1,38 m, ikke bassenggeometri
    let swm = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
    assert!((swm.distance_km() - 0.9936).abs() < 1e-9);
}

#[test]
fn report_is_idempotent() {
    let w = Workout::Running(Running::new(15000, 1.0, 75.0).unwrap());
    assert_eq!(w.report(), w.report());
}

#[test]
fn construction_rejects_nonpositive_duration() {
    assert!(matches!(
        Running::new(100, 0.0, 75.0),
        Err(TrackerError::InvalidArgument(_))
    ));
    assert!(matches!(
        Swimming::new(10, -1.0, 80.0, 25.0, 4),
        Err(TrackerError::InvalidArgument(_))
    ));
}

#[test]
fn construction_rejects_nonpositive_weight() {
    assert!(matches!(
        Running::new(100, 1.0, 0.0),
        Err(TrackerError::InvalidArgument(_))
    ));
}

#[test]
fn walking_rejects_nonpositive_height() {
    assert!(matches!(
        SportsWalking::new(9000, 1.0, 75.0, 0.0),
        Err(TrackerError::InvalidArgument(_))
    ));
}

#[test]
fn swimming_rejects_nonpositive_pool_length() {
    assert!(matches!(
        Swimming::new(720, 1.0, 80.0, -25.0, 40),
        Err(TrackerError::InvalidArgument(_))
    ));
}

#[test]
fn base_has_no_calorie_formula() {
    let base = TrainingBase::new(100, 1.0, 70.0).unwrap();
    assert_eq!(base.spent_calories(), Err(TrackerError::UnsupportedOperation));
}

#[test]
fn labels_are_fixed_constants() {
    assert_eq!(Running::LABEL, "Running");
    assert_eq!(SportsWalking::LABEL, "SportsWalking");
    assert_eq!(Swimming::LABEL, "Swimming");
}
