use std::path::Path;

use hortonmap_ingest::ParseReport;

/// Parse the export at `path` and print its documents as a JSON array.
///
/// The summary goes to stderr so stdout stays valid JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or serialization fails.
pub(crate) fn run_parse(path: &Path, pretty: bool) -> anyhow::Result<()> {
    let report = hortonmap_ingest::parse_source(path)?;
    eprintln!("{}", summary_line(&report));
    crate::print_json(&report.documents, pretty)
}

/// One-line human summary of a pipeline run.
pub(crate) fn summary_line(report: &ParseReport) -> String {
    let mut line = format!(
        "{} rows, {} documents, {} anomalies",
        report.rows_seen,
        report.document_count(),
        report.anomalies.len()
    );
    let defaulted = report.defaulted_coordinates();
    if defaulted > 0 {
        line.push_str(&format!(" ({defaulted} at 0,0)"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_rows_documents_and_anomalies() {
        let report = hortonmap_ingest::parse_text("header\n1,a,b\n2,c,d\n");
        let line = summary_line(&report);
        assert!(line.starts_with("2 rows, 2 documents, "), "{line}");
        assert!(line.ends_with("(2 at 0,0)"), "{line}");
    }

    #[test]
    fn summary_of_empty_export_has_no_origin_note() {
        let report = hortonmap_ingest::parse_text("header\n");
        assert_eq!(summary_line(&report), "0 rows, 0 documents, 0 anomalies");
    }
}
