/// Output formatting: terminal report and JSON.
use serde::Serialize;
use sigrank_core::DimensionReport;

#[derive(Serialize)]
struct JsonInterval {
    name: String,
    low: f64,
    high: f64,
}

#[derive(Serialize)]
struct JsonDimension {
    dimension: String,
    intervals: Vec<JsonInterval>,
    clusters: Vec<Vec<String>>,
    differing_pairs: Vec<(String, String)>,
}

/// Print one dimension's report as a formatted terminal block.
pub fn print_dimension(dimension: &str, report: &DimensionReport) {
    println!("{dimension}:");

    // Find the widest system name for padding
    let name_width = report
        .intervals
        .iter()
        .map(|interval| interval.name.len())
        .max()
        .unwrap_or(6)
        .max(6); // at least "System"

    println!("  {:<name_width$} | 95% CI Low | 95% CI High", "System");
    println!("  {}-|------------|------------", "-".repeat(name_width));
    for interval in &report.intervals {
        println!(
            "  {:<name_width$} | {:>10.3} | {:>11.3}",
            interval.name, interval.low, interval.high,
        );
    }

    println!("  Clusters:");
    for cluster in &report.clusters {
        println!("    {{{}}}", cluster.join(", "));
    }

    for (a, b) in &report.differing_pairs {
        println!("  {a} differs from {b}");
    }
    println!();
}

/// Print every dimension's report as JSON.
pub fn print_json(reports: &[(String, DimensionReport)]) {
    let dimensions: Vec<JsonDimension> = reports
        .iter()
        .map(|(dimension, report)| JsonDimension {
            dimension: dimension.clone(),
            intervals: report
                .intervals
                .iter()
                .map(|interval| JsonInterval {
                    name: interval.name.clone(),
                    low: interval.low,
                    high: interval.high,
                })
                .collect(),
            clusters: report.clusters.clone(),
            differing_pairs: report.differing_pairs.clone(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&dimensions).unwrap());
}
