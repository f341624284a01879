/// CSV ingestion for judgment records.
///
/// A CSV file belongs to a dimension when its filename contains the
/// dimension name; a dimension may span several batch files. Rows are
/// validated here, at load time, so the core only ever sees well-typed
/// records — field positions come from the [columns] config instead of
/// living as magic indices in the pipeline.
use std::path::Path;

use sigrank_core::{JudgmentRecord, Side};

use crate::bail;
use crate::config::Columns;

/// Parse a best/worst side token: "A" = first shown, "B" = second shown.
fn parse_side(token: &str) -> Option<Side> {
    match token.trim() {
        "A" => Some(Side::First),
        "B" => Some(Side::Second),
        _ => None,
    }
}

/// Load every record for one dimension from the data directory.
///
/// Files are read in sorted path order so the record sequence is stable
/// across runs.
pub fn load_dimension(data_dir: &Path, dimension: &str, columns: &Columns) -> Vec<JudgmentRecord> {
    let entries = std::fs::read_dir(data_dir)
        .unwrap_or_else(|e| bail(format!("Failed to read {}: {e}", data_dir.display())));

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.contains(dimension))
        })
        .collect();
    paths.sort();

    let mut records = Vec::new();
    for path in &paths {
        read_file(path, columns, &mut records);
    }
    records
}

fn read_file(path: &Path, columns: &Columns, records: &mut Vec<JudgmentRecord>) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .unwrap_or_else(|e| bail(format!("Failed to open {}: {e}", path.display())));

    for (idx, row) in reader.records().enumerate() {
        let line = idx + 2; // header is line 1
        let row =
            row.unwrap_or_else(|e| bail(format!("{}, row {line}: {e}", path.display())));

        let first_shown = field(&row, columns.first_shown, "first-shown", path, line);
        let second_shown = field(&row, columns.second_shown, "second-shown", path, line);
        let best_token = field(&row, columns.best, "best-side", path, line);
        let worst_token = field(&row, columns.worst, "worst-side", path, line);

        let best = parse_side(best_token).unwrap_or_else(|| {
            bail(format!(
                "{}, row {line}: unrecognized best-side token \"{best_token}\"",
                path.display()
            ))
        });
        let worst = parse_side(worst_token).unwrap_or_else(|| {
            bail(format!(
                "{}, row {line}: unrecognized worst-side token \"{worst_token}\"",
                path.display()
            ))
        });

        records.push(JudgmentRecord {
            first_shown: first_shown.to_string(),
            second_shown: second_shown.to_string(),
            best,
            worst,
        });
    }
}

fn field<'a>(
    row: &'a csv::StringRecord,
    idx: usize,
    what: &str,
    path: &Path,
    line: usize,
) -> &'a str {
    row.get(idx).unwrap_or_else(|| {
        bail(format!(
            "{}, row {line}: missing {what} column {idx}",
            path.display()
        ))
    })
}
