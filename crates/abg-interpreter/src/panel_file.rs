//! Panel file reader.
//!
//! Reads delimited text files with one panel per row, for interpreting a
//! set of panels in one go:
//!
//! ```text
//! pH,paCO2,hco3,paO2,spO2
//! 7.25,55,24,55,88
//! 7.38,50,28,90,96
//! ```
//!
//! Column names and order are fixed. Each row goes through the same field
//! validation as form input.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use abg_types::{AbgValues, Field, RawPanel};
use csv::{Reader, ReaderBuilder, StringRecord};

use crate::types::{PanelConfig, PanelError, PanelResult};
use crate::validate::validate_panel;

/// A streaming reader over panel rows.
///
/// Yields one `Result` per non-blank row. A row with invalid values yields
/// [`PanelError::InvalidRow`] and reading continues with the next row.
pub struct PanelReader<R: Read> {
    reader: Reader<R>,
    records_read: usize,
}

impl PanelReader<BufReader<File>> {
    /// Opens a panel file.
    ///
    /// # Errors
    /// Returns an error if the file does not exist, cannot be opened, or has
    /// an invalid header.
    pub fn from_path<P: AsRef<Path>>(path: P, config: PanelConfig) -> PanelResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PanelError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), config)
    }
}

impl<R: Read> PanelReader<R> {
    /// Creates a reader and validates the header row.
    pub fn from_reader(reader: R, config: PanelConfig) -> PanelResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(config.delimiter)
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        Self::validate_headers(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            records_read: 0,
        })
    }

    fn validate_headers(reader: &mut Reader<R>) -> PanelResult<()> {
        let headers = reader.headers()?;

        if headers.len() != Field::ALL.len() {
            return Err(PanelError::InvalidHeader {
                expected: Field::ALL.len(),
                found: headers.len(),
            });
        }

        for (i, field) in Field::ALL.iter().enumerate() {
            let found = headers.get(i).unwrap_or("");
            // Handle UTF-8 BOM at start of file
            let found = found.trim_start_matches('\u{feff}');
            if found != field.key() {
                return Err(PanelError::UnexpectedColumn {
                    position: i,
                    expected: field.key().to_string(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns the number of data rows read so far, blank rows included.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Reads every row, splitting valid panels from row errors.
    pub fn read_all(self) -> (Vec<AbgValues>, Vec<PanelError>) {
        let mut panels = Vec::new();
        let mut errors = Vec::new();
        for row in self {
            match row {
                Ok(values) => panels.push(values),
                Err(error) => errors.push(error),
            }
        }
        (panels, errors)
    }

    fn parse_record(record: &StringRecord) -> PanelResult<AbgValues> {
        let mut raw = RawPanel::default();
        for (i, field) in Field::ALL.into_iter().enumerate() {
            raw.set(field, record.get(i).unwrap_or(""));
        }

        validate_panel(&raw).map_err(|errors| PanelError::InvalidRow {
            line: record.position().map_or(0, |position| position.line()),
            errors,
        })
    }
}

impl<R: Read> Iterator for PanelReader<R> {
    type Item = PanelResult<AbgValues>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    self.records_read += 1;

                    // Skip empty records
                    if record.iter().all(|f| f.is_empty()) {
                        continue;
                    }

                    return Some(Self::parse_record(&record));
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(text: &str) -> PanelResult<PanelReader<&[u8]>> {
        PanelReader::from_reader(text.as_bytes(), PanelConfig::default())
    }

    #[test]
    fn test_reads_panels() {
        let text = "pH,paCO2,hco3,paO2,spO2\n7.25,55,24,55,88\n 7.38 , 50 , 28 , 90 , 96 \n";
        let panels: Vec<AbgValues> = reader(text).unwrap().map(|row| row.unwrap()).collect();

        assert_eq!(
            panels,
            vec![
                AbgValues::new(7.25, 55.0, 24.0, 55.0, 88.0),
                AbgValues::new(7.38, 50.0, 28.0, 90.0, 96.0),
            ]
        );
    }

    #[test]
    fn test_tolerates_bom() {
        let text = "\u{feff}pH,paCO2,hco3,paO2,spO2\n7.40,40,24,95,98\n";
        let (panels, errors) = reader(text).unwrap().read_all();
        assert_eq!(panels.len(), 1);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_rejects_wrong_header() {
        let err = reader("pH,paCO2,hco3,spO2,paO2\n").err().unwrap();
        assert!(matches!(
            err,
            PanelError::UnexpectedColumn { position: 3, .. }
        ));

        let err = reader("pH,paCO2,hco3\n").err().unwrap();
        assert!(matches!(
            err,
            PanelError::InvalidHeader {
                expected: 5,
                found: 3
            }
        ));
    }

    #[test]
    fn test_invalid_row_reports_line_and_continues() {
        let text = "pH,paCO2,hco3,paO2,spO2\n7.40,40,24,95,98\n9.0,40,,95,98\n7.30,50,18,95,97\n";
        let mut rows = reader(text).unwrap();

        assert!(rows.next().unwrap().is_ok());
        match rows.next().unwrap() {
            Err(PanelError::InvalidRow { line, errors }) => {
                assert_eq!(line, 3);
                assert_eq!(errors.fields(), vec![Field::Ph, Field::Hco3]);
            }
            other => panic!("expected invalid row, got {:?}", other),
        }
        assert!(rows.next().unwrap().is_ok());
        assert!(rows.next().is_none());
        assert_eq!(rows.records_read(), 3);
    }

    #[test]
    fn test_tab_separated() {
        let text = "pH\tpaCO2\thco3\tpaO2\tspO2\n7.40\t40\t24\t95\t98\n";
        let rows = PanelReader::from_reader(text.as_bytes(), PanelConfig::tab_separated()).unwrap();
        let (panels, errors) = rows.read_all();
        assert_eq!(panels.len(), 1);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = PanelReader::from_path("/nonexistent/panels.csv", PanelConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, PanelError::FileNotFound { .. }));
    }
}
