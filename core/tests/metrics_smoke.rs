use fittrack_core::run_package;
use fittrack_core::types::WorkoutReport;
use serde_json::json;

#[test]
fn smoke_packages_via_json() {
    // samme batch som referanseprogrammet, matet inn via JSON
    let packages = json!([
        ["SWM", [720, 1, 80, 25, 40]],
        ["RUN", [15000, 1, 75]],
        ["WLK", [9000, 1, 75, 180]],
    ]);

    for entry in packages.as_array().unwrap() {
        let code = entry[0].as_str().unwrap();
        let data: Vec<f64> = entry[1]
            .as_array()
            .unwrap()
            .iter()
            .map(|x| x.as_f64().unwrap())
            .collect();

        let line = run_package(code, &data).unwrap();
        assert!(line.starts_with("Тип тренировки: "));
        assert!(line.ends_with('.'));
    }
}

#[test]
fn smoke_report_serializes() {
    let w = fittrack_core::read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    let out = serde_json::to_string(&w.report()).unwrap();

    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["training_type"], "Running");
    assert!((v["distance_km"].as_f64().unwrap() - 9.75).abs() < 1e-9);
    assert!((v["calories_kcal"].as_f64().unwrap() - 699.75).abs() < 1e-9);

    let back: WorkoutReport = serde_json::from_str(&out).unwrap();
    assert_eq!(back, w.report());
}
