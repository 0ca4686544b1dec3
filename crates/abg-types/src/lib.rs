//! # abg-types
//!
//! Type definitions for arterial blood gas (ABG) interpretation.
//!
//! This crate provides the plain data types shared by the interpreter and its
//! callers: the five panel values, the typed findings produced for each
//! interpretation stage, and the clinical reference thresholds.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use abg_types::{AbgValues, DisorderCategory, DisorderKind, Field};
//! use abg_types::reference;
//!
//! let values = AbgValues::new(7.25, 55.0, 24.0, 55.0, 88.0);
//! assert_eq!(values.get(Field::PaCo2), 55.0);
//!
//! assert_eq!(DisorderKind::RespiratoryAcidosis.tag(), "respiratory_acidosis");
//! assert_eq!(
//!     DisorderKind::RespiratoryAcidosis.category(),
//!     DisorderCategory::Respiratory
//! );
//!
//! assert_eq!(reference::PH_NORMAL_LOW, 7.35);
//! ```
//!
//! ## Without Serde
//!
//! ```toml
//! [dependencies]
//! abg-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod acid_base;
mod finding;
mod oxygenation;
pub mod reference;
mod result;
mod values;

// Re-export all public types at crate root
pub use acid_base::{
    AcidBaseFlags, CompensatingSystem, CompensationKind, Disorder, DisorderCategory,
    DisorderKind, PhBand, Polarity,
};
pub use finding::{Finding, Status};
pub use oxygenation::{Oxygenation, Severity};
pub use result::{AbgResult, ResultTags};
pub use values::{AbgValues, Field, RawPanel};
