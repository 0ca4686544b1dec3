//! The complete interpretation of one panel.

use crate::{AbgValues, CompensationKind, Disorder, DisorderKind, Finding, Oxygenation, PhBand};

/// Structured interpretation of an arterial blood gas panel.
///
/// Produced in a single call and never mutated afterwards. The four
/// findings follow the interpretation order: acid-base status, primary
/// disorder, compensation, oxygenation.
///
/// # Examples
///
/// ```
/// use abg_types::*;
///
/// let values = AbgValues::new(7.40, 40.0, 24.0, 95.0, 98.0);
/// let result = AbgResult {
///     values,
///     ph_status: Finding::new("Normal", Status::Normal, PhBand::Normal),
///     primary_disorder: Finding::new(
///         "No primary disorder",
///         Status::Normal,
///         Disorder { kind: DisorderKind::Normal, flags: AcidBaseFlags::default() },
///     ),
///     compensation: Finding::new("Not needed", Status::Normal, CompensationKind::NotNeeded),
///     oxygenation: Finding::new("Adequate oxygenation", Status::Normal, Oxygenation::Adequate),
///     conclusion: "Blood gas analysis is within normal limits with adequate oxygenation.".into(),
/// };
///
/// assert!(result.is_normal());
/// assert!(!result.is_hypoxemic());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AbgResult {
    /// The panel that was interpreted.
    pub values: AbgValues,
    /// Acid-base status from pH alone.
    pub ph_status: Finding<PhBand>,
    /// Primary acid-base disorder.
    pub primary_disorder: Finding<Disorder>,
    /// Compensation of the primary disorder.
    pub compensation: Finding<CompensationKind>,
    /// Oxygenation status.
    pub oxygenation: Finding<Oxygenation>,
    /// One-sentence summary.
    pub conclusion: String,
}

impl AbgResult {
    /// Returns the classified primary disorder.
    pub fn disorder_kind(&self) -> DisorderKind {
        self.primary_disorder.kind.kind
    }

    /// Returns true if hypoxemia was found.
    pub fn is_hypoxemic(&self) -> bool {
        self.oxygenation.kind.is_hypoxemic()
    }

    /// Returns true if there is no primary disorder and oxygenation is adequate.
    pub fn is_normal(&self) -> bool {
        self.disorder_kind() == DisorderKind::Normal && !self.is_hypoxemic()
    }

    /// Returns the external type tags of the disorder and compensation.
    pub fn tags(&self) -> ResultTags {
        let kind = self.disorder_kind();
        ResultTags {
            disorder: kind.tag(),
            category: kind.category().tag(),
            compensation: self.compensation.kind.tag(),
        }
    }
}

/// Flat string tags of a result, for consumers keyed on the external names.
///
/// Several typed kinds share one tag: both [`CompensationKind::NotNeeded`]
/// and [`CompensationKind::Absent`] are `none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResultTags {
    /// Disorder-kind tag, e.g. `respiratory_acidosis`.
    pub disorder: &'static str,
    /// Disorder category: `respiratory`, `metabolic`, `mixed`, `unknown` or `none`.
    pub category: &'static str,
    /// Compensation tag: `none`, `mixed`, `full`, `partial` or `unknown`.
    pub compensation: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AcidBaseFlags, Status};

    fn result_with(kind: DisorderKind, compensation: CompensationKind) -> AbgResult {
        AbgResult {
            values: AbgValues::new(7.25, 55.0, 24.0, 95.0, 98.0),
            ph_status: Finding::new("Acidosis", Status::Abnormal, PhBand::Acidemia),
            primary_disorder: Finding::new(
                "Respiratory Acidosis",
                Status::Abnormal,
                Disorder { kind, flags: AcidBaseFlags::default() },
            ),
            compensation: Finding::new("No compensation yet", Status::Abnormal, compensation),
            oxygenation: Finding::new("Adequate oxygenation", Status::Normal, Oxygenation::Adequate),
            conclusion: String::new(),
        }
    }

    #[test]
    fn test_tags_collapse_to_external_names() {
        let result = result_with(DisorderKind::RespiratoryAcidosis, CompensationKind::Absent);
        assert_eq!(
            result.tags(),
            ResultTags {
                disorder: "respiratory_acidosis",
                category: "respiratory",
                compensation: "none",
            }
        );

        let result = result_with(DisorderKind::Normal, CompensationKind::NotNeeded);
        assert_eq!(result.tags().compensation, "none");
        assert_eq!(result.tags().category, "none");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_tags_serialize() {
        let result = result_with(DisorderKind::MixedAcidosis, CompensationKind::Mixed);
        let json = serde_json::to_value(result.tags()).unwrap();
        assert_eq!(json["disorder"], "mixed_acidosis");
        assert_eq!(json["category"], "mixed");
        assert_eq!(json["compensation"], "mixed");
    }
}
