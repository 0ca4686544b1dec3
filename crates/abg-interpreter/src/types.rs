//! Error and configuration types for interpretation, validation and panel files.

use std::fmt;

use abg_types::Field;
use thiserror::Error;

use crate::locale::Locale;

/// A single form field that failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The field was empty or whitespace.
    #[error("{field}: value is required")]
    Missing {
        /// The empty field.
        field: Field,
    },

    /// The field text is not a finite number.
    #[error("{field}: '{value}' is not a valid number")]
    NotANumber {
        /// The offending field.
        field: Field,
        /// The text that failed to parse.
        value: String,
    },

    /// The number lies outside the field's plausible range.
    #[error("{field}: {value} is outside the accepted range {min}-{max}")]
    OutOfRange {
        /// The offending field.
        field: Field,
        /// The parsed value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
}

impl FieldError {
    /// Returns the field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::Missing { field } | Self::NotANumber { field, .. } | Self::OutOfRange { field, .. } => {
                *field
            }
        }
    }

    /// Returns the user-facing message for this error in the given locale.
    pub fn message(&self, locale: Locale) -> String {
        match self {
            Self::Missing { .. } => locale.required_message().to_string(),
            Self::NotANumber { .. } => locale.not_a_number_message().to_string(),
            Self::OutOfRange { field, .. } => locale.range_message(*field),
        }
    }
}

/// All field errors found while validating a panel, in panel order.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{} field(s) failed validation: {}", .errors.len(), ErrorList(.errors))]
pub struct ValidationErrors {
    /// One entry per failing field.
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Returns the error for a given field, if that field failed.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field() == field)
    }

    /// Returns the failing fields in panel order.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(FieldError::field).collect()
    }
}

struct ErrorList<'a>(&'a [FieldError]);

impl fmt::Display for ErrorList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

/// Errors raised by the guarded interpretation entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    /// A panel value is NaN or infinite.
    #[error("{field} is not a finite number")]
    NonFinite {
        /// The first non-finite field.
        field: Field,
    },
}

/// Result type for guarded interpretation.
pub type InterpretResult<T> = Result<T, InterpretError>;

/// Errors that can occur while reading a panel file.
#[derive(Error, Debug)]
pub enum PanelError {
    /// I/O error reading the panel file.
    #[error("IO error reading panel file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },

    /// A row whose values failed field validation.
    #[error("Invalid panel on line {line}: {errors}")]
    InvalidRow {
        /// 1-based line number in the file.
        line: u64,
        /// The field errors for the row.
        #[source]
        errors: ValidationErrors,
    },
}

/// Result type for panel file operations.
pub type PanelResult<T> = Result<T, PanelError>;

/// Configuration for an [`Interpreter`](crate::Interpreter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterpretConfig {
    /// Language of labels, conclusion and report.
    pub locale: Locale,
}

/// Configuration for reading panel files.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl PanelConfig {
    /// Creates a config for tab-separated panel files.
    pub fn tab_separated() -> Self {
        Self { delimiter: b'\t' }
    }
}
