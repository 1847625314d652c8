//! CSV input for the import pipeline.
//!
//! The source sheet has a header row; one named column holds a video URL per
//! row. Every other column is ignored.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;
use videoimport_common::InputRow;

/// Failure reading the source file. Always fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to open input file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column {column:?} not found in CSV header (found: {found})")]
    MissingColumn { column: String, found: String },
}

/// Read every row of the CSV file at `path`, taking URLs from `column`.
pub fn read_rows(path: &Path, column: &str) -> Result<Vec<InputRow>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = read_rows_from_reader(file, column)?;
    debug!(path = %path.display(), rows = rows.len(), "Read CSV input");
    Ok(rows)
}

/// Read rows from any CSV source.
///
/// Cells are trimmed. Blank URL cells are kept so the extractor can report
/// them against their line number.
pub fn read_rows_from_reader<R: Read>(reader: R, column: &str) -> Result<Vec<InputRow>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| InputError::MissingColumn {
            column: column.to_string(),
            found: headers.iter().collect::<Vec<_>>().join(", "),
        })?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let url = record.get(index).unwrap_or_default();
        rows.push(InputRow::new(url, line));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn rows(csv: &str, column: &str) -> Result<Vec<InputRow>, InputError> {
        read_rows_from_reader(csv.as_bytes(), column)
    }

    #[test]
    fn test_reads_single_column() {
        let result = rows(
            "youtubeUrl\nhttps://www.youtube.com/watch?v=AAA111\nhttps://youtu.be/BBB222?t=5\n",
            "youtubeUrl",
        )
        .unwrap();

        assert_eq!(
            result,
            vec![
                InputRow::new("https://www.youtube.com/watch?v=AAA111", 2),
                InputRow::new("https://youtu.be/BBB222?t=5", 3),
            ]
        );
    }

    #[test]
    fn test_picks_named_column() {
        let result = rows(
            "title,url,notes\nFirst,https://youtu.be/one,x\nSecond,https://youtu.be/two,y\n",
            "url",
        )
        .unwrap();

        let urls: Vec<_> = result.iter().map(|r| r.source_url.as_str()).collect();
        assert_eq!(urls, vec!["https://youtu.be/one", "https://youtu.be/two"]);
    }

    #[test]
    fn test_query_string_with_commas_quoted() {
        let result = rows(
            "youtubeUrl\n\"https://www.youtube.com/watch?v=W-6v7IkfYKE&list=PL1,2\"\n",
            "youtubeUrl",
        )
        .unwrap();
        assert_eq!(
            result[0].source_url,
            "https://www.youtube.com/watch?v=W-6v7IkfYKE&list=PL1,2"
        );
    }

    #[test]
    fn test_trims_cells() {
        let result = rows("youtubeUrl\n  https://youtu.be/abc  \n", "youtubeUrl").unwrap();
        assert_eq!(result[0].source_url, "https://youtu.be/abc");
    }

    #[test]
    fn test_keeps_blank_cells() {
        let result = rows("id,youtubeUrl\n1,\n2,https://youtu.be/abc\n", "youtubeUrl").unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].source_url, "");
        assert_eq!(result[0].line, 2);
    }

    #[test]
    fn test_header_only() {
        assert!(rows("youtubeUrl\n", "youtubeUrl").unwrap().is_empty());
    }

    #[test]
    fn test_missing_column() {
        let err = rows("url\nhttps://youtu.be/abc\n", "youtubeUrl").unwrap_err();
        match err {
            InputError::MissingColumn { column, found } => {
                assert_eq!(column, "youtubeUrl");
                assert_eq!(found, "url");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_row_is_error() {
        let err = rows("a,youtubeUrl\n1,https://youtu.be/abc,extra\n", "youtubeUrl").unwrap_err();
        assert!(matches!(err, InputError::Csv(_)));
    }

    #[test]
    fn test_read_rows_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "youtubeUrl").unwrap();
        writeln!(file, "https://youtu.be/abc").unwrap();

        let result = read_rows(file.path(), "youtubeUrl").unwrap();
        assert_eq!(result, vec![InputRow::new("https://youtu.be/abc", 2)]);
    }

    #[test]
    fn test_missing_file() {
        let err = read_rows(Path::new("/nonexistent/data.csv"), "youtubeUrl").unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }
}
