//! Interpretation findings.
//!
//! Every stage of an interpretation produces a [`Finding`]: a human-readable
//! label, a severity [`Status`], and a typed `kind` that later stages and
//! callers can match on instead of parsing the label.

/// Severity attached to a finding.
///
/// # Examples
///
/// ```
/// use abg_types::Status;
///
/// assert_eq!(Status::Warning.as_str(), "warning");
/// assert!(Status::Abnormal > Status::Normal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// Within normal limits.
    Normal,
    /// Needs attention or further evaluation.
    Warning,
    /// Outside normal limits.
    Abnormal,
}

impl Status {
    /// Returns the lowercase identifier for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Abnormal => "abnormal",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled, graded result of one interpretation stage.
///
/// # Examples
///
/// ```
/// use abg_types::{Finding, PhBand, Status};
///
/// let finding = Finding::new("Acidosis", Status::Abnormal, PhBand::Acidemia);
/// assert!(finding.is_abnormal());
/// assert_eq!(finding.kind, PhBand::Acidemia);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Finding<K> {
    /// Human-readable label in the interpretation locale.
    pub label: String,
    /// Severity of the finding.
    pub status: Status,
    /// Machine-readable classification.
    pub kind: K,
}

impl<K> Finding<K> {
    /// Creates a finding.
    pub fn new(label: impl Into<String>, status: Status, kind: K) -> Self {
        Self {
            label: label.into(),
            status,
            kind,
        }
    }

    /// Returns true if the status is [`Status::Normal`].
    pub fn is_normal(&self) -> bool {
        self.status == Status::Normal
    }

    /// Returns true if the status is [`Status::Abnormal`].
    pub fn is_abnormal(&self) -> bool {
        self.status == Status::Abnormal
    }
}
