//! Pipeline driver: one source in, a [`ParseReport`] out.

use std::io::Read;
use std::path::Path;

use crate::document::build_document;
use crate::error::IngestError;
use crate::extract::extract_fields;
use crate::report::{AnomalyKind, ParseReport, RowAnomaly};
use crate::tokenize::{has_unbalanced_quotes, tokenize_line};

/// Read the export at `path` once and parse it.
///
/// # Errors
///
/// Returns [`IngestError::Read`] if the file cannot be read. Problems with
/// individual rows are reported in [`ParseReport::anomalies`] instead.
pub fn parse_source(path: impl AsRef<Path>) -> Result<ParseReport, IngestError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let report = parse_text(&text);
    tracing::info!(
        path = %path.display(),
        rows = report.rows_seen,
        documents = report.document_count(),
        anomalies = report.anomalies.len(),
        "parsed location source"
    );
    Ok(report)
}

/// Read everything from `reader` and parse it.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if reading fails or the input is not UTF-8.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<ParseReport, IngestError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_text(&text))
}

/// Parse an already-loaded export.
///
/// Blank lines are skipped. The first remaining line is the header and is
/// dropped whatever it contains. Every other line yields exactly one
/// document.
#[must_use]
pub fn parse_text(text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    let lines = text
        .split('\n')
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    for (line_number, line) in lines {
        report.lines_seen += 1;
        if report.lines_seen == 1 {
            tracing::debug!(line = line_number, "skipping header line");
            continue;
        }
        report.rows_seen += 1;

        let row = tokenize_line(line);
        let extraction = extract_fields(&row);
        let built = build_document(&extraction.fields);

        let unbalanced = has_unbalanced_quotes(line).then_some(AnomalyKind::UnbalancedQuotes);
        for kind in unbalanced
            .into_iter()
            .chain(extraction.anomalies)
            .chain(built.anomalies)
        {
            tracing::warn!(
                line = line_number,
                row_id = %extraction.fields.id,
                kind = %kind,
                "row anomaly"
            );
            report.anomalies.push(RowAnomaly {
                line: line_number,
                row_id: extraction.fields.id.clone(),
                kind,
            });
        }

        report.documents.push(built.document);
    }

    tracing::debug!(
        rows = report.rows_seen,
        documents = report.document_count(),
        "pipeline finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "_id,diningRoomHours,driveThruHours,latitude,longitude,name,phoneNumber";

    #[test]
    fn header_only_yields_nothing() {
        let report = parse_text(&format!("{HEADER}\n"));
        assert_eq!(report.lines_seen, 1);
        assert_eq!(report.rows_seen, 0);
        assert!(report.documents.is_empty());
    }

    #[test]
    fn header_is_dropped_even_when_it_looks_like_data() {
        let text = "1,a,b\n2,c,d\n";
        let report = parse_text(text);
        assert_eq!(report.rows_seen, 1);
        assert_eq!(report.document_count(), 1);
        assert!(report.anomalies.iter().all(|a| a.row_id == "2"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = format!("\n{HEADER}\r\n\r\n1,a,b\n\n2,c,d\n   \n");
        let report = parse_text(&text);
        assert_eq!(report.lines_seen, 3);
        assert_eq!(report.rows_seen, 2);
        assert_eq!(report.document_count(), 2);
    }

    #[test]
    fn anomalies_carry_line_numbers() {
        let text = format!("{HEADER}\n\n7,a,b\n");
        let report = parse_text(&text);
        let first = &report.anomalies[0];
        assert_eq!(first.line, 3);
        assert_eq!(first.row_id, "7");
    }

    #[test]
    fn unbalanced_quotes_are_reported_not_fatal() {
        let text = format!("{HEADER}\n1,\"open,b\n");
        let report = parse_text(&text);
        assert_eq!(report.document_count(), 1);
        assert_eq!(
            report.count_anomalies(|k| matches!(k, AnomalyKind::UnbalancedQuotes)),
            1
        );
    }

    #[test]
    fn reader_and_text_agree() {
        let text = format!("{HEADER}\n1,a,b\n");
        let from_reader = parse_reader(text.as_bytes()).unwrap();
        assert_eq!(from_reader.documents, parse_text(&text).documents);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = parse_source("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, IngestError::Read { ref path, .. } if path.ends_with("here.csv")));
    }
}
