use anyhow::Result;

use fittrack_core::cli::print_report;
use fittrack_core::dispatch::read_package;

fn main() -> Result<()> {
    // Referansebatch fra sensorene: (kode, råverdier i deklarasjonsrekkefølge).
    let packages: Vec<(&str, Vec<f64>)> = vec![
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];

    // Én linje per pakke, i inputrekkefølge. Første ubehandlede feil
    // stopper kjøringen med nonzero exit via anyhow.
    for (code, data) in &packages {
        let workout = read_package(code, data)?;
        print_report(&workout.report());
    }

    Ok(())
}
