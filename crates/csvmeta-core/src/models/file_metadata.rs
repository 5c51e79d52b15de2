//! Metadata derived from one tabular file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use std::io;

use crate::constants::TIMESTAMP_FORMAT;

/// Structural description of a processed CSV object.
///
/// `filename` is the object key and the record's primary key in the metadata
/// table. `column_count` always equals `column_names.len()`; build values through
/// [`FileMetadata::new`] to keep that true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub filename: String,
    /// Processing time (not the original upload time), `%Y-%m-%d %H:%M:%S` UTC.
    pub upload_timestamp: String,
    pub file_size_bytes: u64,
    /// Data rows, header excluded.
    pub row_count: u64,
    pub column_count: u64,
    /// Header cells in file order. Duplicates are kept as-is.
    pub column_names: Vec<String>,
}

impl FileMetadata {
    pub fn new(
        filename: impl Into<String>,
        processed_at: DateTime<Utc>,
        file_size_bytes: u64,
        row_count: u64,
        column_names: Vec<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            upload_timestamp: processed_at.format(TIMESTAMP_FORMAT).to_string(),
            file_size_bytes,
            row_count,
            column_count: column_names.len() as u64,
            column_names,
        }
    }

    /// Single-line JSON, as returned in a successful response body.
    ///
    /// Separators are `", "` and `": "` and every non-ASCII character is
    /// written as a `\uXXXX` escape, so the body is byte-identical to what
    /// Python's `json.dumps` produces for the same record.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiLineFormatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Four-space indented JSON, as published in the completion notification.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

struct AsciiLineFormatter;

impl Formatter for AsciiLineFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sales() -> FileMetadata {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        FileMetadata::new(
            "sales.csv",
            at,
            128,
            3,
            vec!["id".to_string(), "amount".to_string(), "date".to_string()],
        )
    }

    #[test]
    fn test_new_derives_column_count_and_timestamp() {
        let metadata = sales();
        assert_eq!(metadata.column_count, 3);
        assert_eq!(metadata.column_count as usize, metadata.column_names.len());
        assert_eq!(metadata.upload_timestamp, "2024-03-09 14:05:07");
    }

    #[test]
    fn test_duplicate_column_names_are_kept() {
        let metadata = FileMetadata::new(
            "dup.csv",
            Utc::now(),
            10,
            0,
            vec!["a".to_string(), "a".to_string()],
        );
        assert_eq!(metadata.column_count, 2);
        assert_eq!(metadata.column_names, vec!["a", "a"]);
    }

    #[test]
    fn test_json_field_order() {
        let json = sales().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"filename": "sales.csv", "upload_timestamp": "2024-03-09 14:05:07", "file_size_bytes": 128, "row_count": 3, "column_count": 3, "column_names": ["id", "amount", "date"]}"#
        );
    }

    #[test]
    fn test_json_escapes_non_ascii() {
        let metadata = FileMetadata::new(
            "ventes.csv",
            Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
            64,
            1,
            vec!["prix €".to_string(), "tendance 📈".to_string(), "a\"b".to_string()],
        );

        let json = metadata.to_json().unwrap();
        assert!(json.is_ascii());
        assert!(json.ends_with(
            r#""column_names": ["prix \u20ac", "tendance \ud83d\udcc8", "a\"b"]}"#
        ));

        let parsed: FileMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, metadata);
    }

    #[test]
    fn test_pretty_json_uses_four_space_indent() {
        let pretty = sales().to_pretty_json().unwrap();
        assert!(pretty.starts_with("{\n    \"filename\": \"sales.csv\""));
        let parsed: FileMetadata = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed, sales());
    }
}
