//! # abg-interpreter
//!
//! Rule-based interpretation of arterial blood gas (ABG) panels.
//!
//! This crate maps the five panel values (pH, PaCO₂, HCO₃⁻, PaO₂, SpO₂) to a
//! structured [`AbgResult`](abg_types::AbgResult): acid-base status, primary
//! disorder, compensation, oxygenation, and a one-sentence conclusion. It
//! also renders a plain-text report, validates raw form text, and reads
//! panel files for batch interpretation.
//!
//! Interpretation is a decision-support aid built on a fixed rule set. It is
//! not a diagnosis.
//!
//! ## Usage
//!
//! ```rust
//! use abg_interpreter::{format_report, interpret};
//! use abg_types::{AbgValues, CompensationKind, DisorderKind};
//!
//! let values = AbgValues::new(7.25, 55.0, 24.0, 55.0, 88.0);
//! let result = interpret(&values);
//!
//! assert_eq!(result.disorder_kind(), DisorderKind::RespiratoryAcidosis);
//! assert_eq!(result.compensation.kind, CompensationKind::Absent);
//! assert!(result.is_hypoxemic());
//!
//! let report = format_report(&result, &values);
//! assert!(report.contains(&result.conclusion));
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): Interprets batches on the rayon thread pool.

#![warn(missing_docs)]

pub mod batch;
pub mod classify;
pub mod guide;
mod interpreter;
mod labels;
mod locale;
pub mod panel_file;
mod report;
mod types;
pub mod validate;

// Re-export abg-types for convenience
pub use abg_types;

pub use batch::{interpret_all, BatchStats};
pub use guide::render_guide;
pub use interpreter::{interpret, Interpreter};
pub use locale::{Locale, LocaleError};
pub use panel_file::PanelReader;
pub use report::{format_report, format_report_in};
pub use types::{
    FieldError, InterpretConfig, InterpretError, InterpretResult, PanelConfig, PanelError,
    PanelResult, ValidationErrors,
};
pub use validate::{parse_field, validate_panel};
