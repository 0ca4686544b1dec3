//! Oxygenation classification types.

/// Severity of hypoxemia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Severity {
    /// PaO₂ 60–79 mmHg and SpO₂ 90–93 %, or one of them normal.
    MildToModerate,
    /// PaO₂ below 60 mmHg or SpO₂ below 90 %.
    Severe,
}

/// Oxygenation state derived from PaO₂ and SpO₂ alone.
///
/// # Examples
///
/// ```
/// use abg_types::{Oxygenation, Severity};
///
/// assert!(Oxygenation::Hypoxemia(Severity::Severe).is_hypoxemic());
/// assert_eq!(Oxygenation::Adequate.severity(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Oxygenation {
    /// PaO₂ ≥ 80 mmHg and SpO₂ ≥ 94 %.
    Adequate,
    /// PaO₂ below 80 mmHg or SpO₂ below 94 %.
    Hypoxemia(Severity),
}

impl Oxygenation {
    /// Returns true if hypoxemia is present.
    pub fn is_hypoxemic(self) -> bool {
        matches!(self, Self::Hypoxemia(_))
    }

    /// Returns the hypoxemia severity, if any.
    pub fn severity(self) -> Option<Severity> {
        match self {
            Self::Adequate => None,
            Self::Hypoxemia(severity) => Some(severity),
        }
    }
}
