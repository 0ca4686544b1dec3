//! Acid-base classification types.
//!
//! This module provides the typed vocabulary for the acid-base stages of an
//! interpretation: the pH band, the four threshold flags, the primary
//! disorder, and the compensation state.

/// Position of the arterial pH relative to the normal band 7.35–7.45.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PhBand {
    /// pH below 7.35.
    Acidemia,
    /// pH within 7.35–7.45 inclusive.
    Normal,
    /// pH above 7.45.
    Alkalemia,
}

impl PhBand {
    /// Returns the band condition as written on a report, e.g. `pH < 7.35`.
    pub fn condition(self) -> &'static str {
        match self {
            Self::Acidemia => "pH < 7.35",
            Self::Normal => "pH 7.35-7.45",
            Self::Alkalemia => "pH > 7.45",
        }
    }
}

/// Direction of an acid-base disturbance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Polarity {
    /// Acid excess or base loss.
    Acidosis,
    /// Base excess or acid loss.
    Alkalosis,
}

/// The four independent threshold tests on PaCO₂ and HCO₃⁻.
///
/// # Examples
///
/// ```
/// use abg_types::AcidBaseFlags;
///
/// let flags = AcidBaseFlags {
///     respiratory_acidosis: true,
///     metabolic_acidosis: true,
///     ..Default::default()
/// };
/// assert!(flags.any());
/// assert_eq!(flags.count(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcidBaseFlags {
    /// PaCO₂ above 45 mmHg.
    pub respiratory_acidosis: bool,
    /// PaCO₂ below 35 mmHg.
    pub respiratory_alkalosis: bool,
    /// HCO₃⁻ below 22 mEq/L.
    pub metabolic_acidosis: bool,
    /// HCO₃⁻ above 26 mEq/L.
    pub metabolic_alkalosis: bool,
}

impl AcidBaseFlags {
    /// Returns true if any flag is raised.
    pub fn any(&self) -> bool {
        self.count() > 0
    }

    /// Returns the number of raised flags.
    pub fn count(&self) -> usize {
        [
            self.respiratory_acidosis,
            self.respiratory_alkalosis,
            self.metabolic_acidosis,
            self.metabolic_alkalosis,
        ]
        .into_iter()
        .filter(|&flag| flag)
        .count()
    }
}

/// Broad category of a primary disorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DisorderCategory {
    /// Driven by PaCO₂.
    Respiratory,
    /// Driven by HCO₃⁻.
    Metabolic,
    /// Both systems deranged in the same direction.
    Mixed,
    /// Abnormal pH without a driver crossing its threshold.
    Unknown,
    /// No primary disorder.
    None,
}

impl DisorderCategory {
    /// Returns the snake_case identifier for this category.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Respiratory => "respiratory",
            Self::Metabolic => "metabolic",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
            Self::None => "none",
        }
    }
}

/// Primary acid-base disorder.
///
/// # Examples
///
/// ```
/// use abg_types::{DisorderCategory, DisorderKind, Polarity};
///
/// let kind = DisorderKind::CompensatedRespiratoryAcidosis;
/// assert_eq!(kind.tag(), "compensated_respiratory_acidosis");
/// assert_eq!(kind.category(), DisorderCategory::Respiratory);
/// assert_eq!(kind.polarity(), Some(Polarity::Acidosis));
/// assert!(kind.is_compensated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DisorderKind {
    /// No primary disorder.
    Normal,
    /// Acidemia with raised PaCO₂ only.
    RespiratoryAcidosis,
    /// Acidemia with low HCO₃⁻ only.
    MetabolicAcidosis,
    /// Acidemia with both raised PaCO₂ and low HCO₃⁻.
    MixedAcidosis,
    /// Acidemia without either driver crossing its threshold.
    UncompensatedAcidosis,
    /// Alkalemia with low PaCO₂ only.
    RespiratoryAlkalosis,
    /// Alkalemia with raised HCO₃⁻ only.
    MetabolicAlkalosis,
    /// Alkalemia with both low PaCO₂ and raised HCO₃⁻.
    MixedAlkalosis,
    /// Alkalemia without either driver crossing its threshold.
    UncompensatedAlkalosis,
    /// Normal pH, raised PaCO₂ balanced by raised HCO₃⁻.
    CompensatedRespiratoryAcidosis,
    /// Normal pH, low PaCO₂ balanced by low HCO₃⁻.
    CompensatedRespiratoryAlkalosis,
    /// Normal pH, low HCO₃⁻ balanced by low PaCO₂.
    CompensatedMetabolicAcidosis,
    /// Normal pH, raised HCO₃⁻ balanced by raised PaCO₂.
    CompensatedMetabolicAlkalosis,
}

impl DisorderKind {
    /// Returns the snake_case identifier for this disorder.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::RespiratoryAcidosis => "respiratory_acidosis",
            Self::MetabolicAcidosis => "metabolic_acidosis",
            Self::MixedAcidosis => "mixed_acidosis",
            Self::UncompensatedAcidosis => "uncompensated_acidosis",
            Self::RespiratoryAlkalosis => "respiratory_alkalosis",
            Self::MetabolicAlkalosis => "metabolic_alkalosis",
            Self::MixedAlkalosis => "mixed_alkalosis",
            Self::UncompensatedAlkalosis => "uncompensated_alkalosis",
            Self::CompensatedRespiratoryAcidosis => "compensated_respiratory_acidosis",
            Self::CompensatedRespiratoryAlkalosis => "compensated_respiratory_alkalosis",
            Self::CompensatedMetabolicAcidosis => "compensated_metabolic_acidosis",
            Self::CompensatedMetabolicAlkalosis => "compensated_metabolic_alkalosis",
        }
    }

    /// Returns the broad category of this disorder.
    pub fn category(self) -> DisorderCategory {
        match self {
            Self::Normal => DisorderCategory::None,
            Self::RespiratoryAcidosis
            | Self::RespiratoryAlkalosis
            | Self::CompensatedRespiratoryAcidosis
            | Self::CompensatedRespiratoryAlkalosis => DisorderCategory::Respiratory,
            Self::MetabolicAcidosis
            | Self::MetabolicAlkalosis
            | Self::CompensatedMetabolicAcidosis
            | Self::CompensatedMetabolicAlkalosis => DisorderCategory::Metabolic,
            Self::MixedAcidosis | Self::MixedAlkalosis => DisorderCategory::Mixed,
            Self::UncompensatedAcidosis | Self::UncompensatedAlkalosis => DisorderCategory::Unknown,
        }
    }

    /// Returns the direction of the disorder, `None` for [`DisorderKind::Normal`].
    pub fn polarity(self) -> Option<Polarity> {
        match self {
            Self::Normal => None,
            Self::RespiratoryAcidosis
            | Self::MetabolicAcidosis
            | Self::MixedAcidosis
            | Self::UncompensatedAcidosis
            | Self::CompensatedRespiratoryAcidosis
            | Self::CompensatedMetabolicAcidosis => Some(Polarity::Acidosis),
            Self::RespiratoryAlkalosis
            | Self::MetabolicAlkalosis
            | Self::MixedAlkalosis
            | Self::UncompensatedAlkalosis
            | Self::CompensatedRespiratoryAlkalosis
            | Self::CompensatedMetabolicAlkalosis => Some(Polarity::Alkalosis),
        }
    }

    /// Returns true for the four fully compensated disorders (normal pH).
    pub fn is_compensated(self) -> bool {
        matches!(
            self,
            Self::CompensatedRespiratoryAcidosis
                | Self::CompensatedRespiratoryAlkalosis
                | Self::CompensatedMetabolicAcidosis
                | Self::CompensatedMetabolicAlkalosis
        )
    }
}

impl std::fmt::Display for DisorderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A classified primary disorder together with the flags that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disorder {
    /// The classified disorder.
    pub kind: DisorderKind,
    /// The threshold flags raised by the panel.
    pub flags: AcidBaseFlags,
}

impl Disorder {
    /// Returns the broad category of the disorder.
    pub fn category(&self) -> DisorderCategory {
        self.kind.category()
    }
}

/// The system providing compensation for a primary disorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CompensatingSystem {
    /// Renal adjustment of HCO₃⁻ (compensates respiratory disorders).
    Metabolic,
    /// Ventilatory adjustment of PaCO₂ (compensates metabolic disorders).
    Respiratory,
}

/// Compensation state of a primary disorder.
///
/// # Examples
///
/// ```
/// use abg_types::{CompensatingSystem, CompensationKind};
///
/// assert_eq!(CompensationKind::Partial(CompensatingSystem::Metabolic).tag(), "partial");
/// assert_eq!(CompensationKind::Absent.tag(), "none");
/// assert_eq!(CompensationKind::NotNeeded.tag(), "none");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CompensationKind {
    /// No primary disorder, so nothing to compensate.
    NotNeeded,
    /// Mixed disorder; compensation cannot be assessed.
    Mixed,
    /// pH returned to the normal band.
    Full,
    /// The other system has started moving in the compensating direction.
    Partial(CompensatingSystem),
    /// A single disorder with no compensating movement yet.
    Absent,
    /// The primary disorder could not be attributed to either system.
    Unknown,
}

impl CompensationKind {
    /// Returns the external type tag: `none`, `mixed`, `full`, `partial` or `unknown`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::NotNeeded | Self::Absent => "none",
            Self::Mixed => "mixed",
            Self::Full => "full",
            Self::Partial(_) => "partial",
            Self::Unknown => "unknown",
        }
    }
}
