//! Label and sentence vocabularies for each [`Locale`].
//!
//! English strings are the default vocabulary. Indonesian strings reproduce
//! the wording clinicians using the Indonesian form are familiar with.

use abg_types::{
    CompensatingSystem, CompensationKind, DisorderKind, Field, Oxygenation, PhBand, Severity,
    Status,
};

use crate::locale::Locale;

impl Locale {
    /// Label for the acid-base status.
    pub fn ph_label(self, band: PhBand) -> &'static str {
        match (self, band) {
            (Self::English, PhBand::Acidemia) => "Acidosis",
            (Self::English, PhBand::Alkalemia) => "Alkalosis",
            (Self::Indonesian, PhBand::Acidemia) => "Asidosis",
            (Self::Indonesian, PhBand::Alkalemia) => "Alkalosis",
            (_, PhBand::Normal) => "Normal",
        }
    }

    /// Label for a primary disorder.
    pub fn disorder_label(self, kind: DisorderKind) -> &'static str {
        use DisorderKind::*;

        match self {
            Self::English => match kind {
                Normal => "No primary disorder",
                RespiratoryAcidosis => "Respiratory Acidosis",
                MetabolicAcidosis => "Metabolic Acidosis",
                MixedAcidosis => "Mixed Acidosis (Respiratory + Metabolic)",
                UncompensatedAcidosis => "Acidosis (needs further evaluation)",
                RespiratoryAlkalosis => "Respiratory Alkalosis",
                MetabolicAlkalosis => "Metabolic Alkalosis",
                MixedAlkalosis => "Mixed Alkalosis (Respiratory + Metabolic)",
                UncompensatedAlkalosis => "Alkalosis (needs further evaluation)",
                CompensatedRespiratoryAcidosis => "Compensated Respiratory Acidosis",
                CompensatedRespiratoryAlkalosis => "Compensated Respiratory Alkalosis",
                CompensatedMetabolicAcidosis => "Compensated Metabolic Acidosis",
                CompensatedMetabolicAlkalosis => "Compensated Metabolic Alkalosis",
            },
            Self::Indonesian => match kind {
                Normal => "Tidak ada gangguan primer",
                RespiratoryAcidosis => "Asidosis Respiratorik",
                MetabolicAcidosis => "Asidosis Metabolik",
                MixedAcidosis => "Asidosis Campuran (Respiratorik + Metabolik)",
                UncompensatedAcidosis => "Asidosis (evaluasi lebih lanjut diperlukan)",
                RespiratoryAlkalosis => "Alkalosis Respiratorik",
                MetabolicAlkalosis => "Alkalosis Metabolik",
                MixedAlkalosis => "Alkalosis Campuran (Respiratorik + Metabolik)",
                UncompensatedAlkalosis => "Alkalosis (evaluasi lebih lanjut diperlukan)",
                CompensatedRespiratoryAcidosis => "Asidosis Respiratorik Terkompensasi",
                CompensatedRespiratoryAlkalosis => "Alkalosis Respiratorik Terkompensasi",
                CompensatedMetabolicAcidosis => "Asidosis Metabolik Terkompensasi",
                CompensatedMetabolicAlkalosis => "Alkalosis Metabolik Terkompensasi",
            },
        }
    }

    /// Label for a compensation state.
    pub fn compensation_label(self, kind: CompensationKind) -> &'static str {
        use CompensationKind::*;

        match self {
            Self::English => match kind {
                NotNeeded => "Not needed",
                Mixed => "Cannot be assessed (mixed disorder)",
                Full => "Full compensation",
                Partial(CompensatingSystem::Metabolic) => "Partial compensation by metabolic system",
                Partial(CompensatingSystem::Respiratory) => {
                    "Partial compensation by respiratory system"
                }
                Absent => "No compensation yet",
                Unknown => "Cannot be assessed",
            },
            Self::Indonesian => match kind {
                NotNeeded => "Tidak diperlukan",
                Mixed => "Tidak dapat dinilai (gangguan campuran)",
                Full => "Kompensasi penuh",
                Partial(CompensatingSystem::Metabolic) => "Kompensasi parsial oleh metabolik",
                Partial(CompensatingSystem::Respiratory) => "Kompensasi parsial oleh respiratorik",
                Absent => "Belum ada kompensasi",
                Unknown => "Tidak dapat dinilai",
            },
        }
    }

    /// Label for the oxygenation state.
    pub fn oxygenation_label(self, oxygenation: Oxygenation) -> String {
        match oxygenation {
            Oxygenation::Adequate => match self {
                Self::English => "Adequate oxygenation".to_string(),
                Self::Indonesian => "Oksigenasi adekuat".to_string(),
            },
            Oxygenation::Hypoxemia(severity) => {
                format!("{} {}", self.hypoxemia_word(), self.severity_word(severity))
            }
        }
    }

    /// The bare word for hypoxemia.
    pub fn hypoxemia_word(self) -> &'static str {
        match self {
            Self::English => "Hypoxemia",
            Self::Indonesian => "Hipoksemia",
        }
    }

    fn severity_word(self, severity: Severity) -> &'static str {
        match (self, severity) {
            (Self::English, Severity::Severe) => "severe",
            (Self::English, Severity::MildToModerate) => "mild-to-moderate",
            (Self::Indonesian, Severity::Severe) => "berat",
            (Self::Indonesian, Severity::MildToModerate) => "ringan-sedang",
        }
    }

    /// Badge text for a finding status.
    pub fn status_label(self, status: Status) -> &'static str {
        match (self, status) {
            (_, Status::Normal) => "Normal",
            (_, Status::Abnormal) => "Abnormal",
            (Self::English, Status::Warning) => "Attention",
            (Self::Indonesian, Status::Warning) => "Perhatian",
        }
    }

    // =========================================================================
    // Conclusion
    // =========================================================================

    /// Conclusion used when the whole panel is within normal limits.
    pub fn normal_conclusion(self) -> &'static str {
        match self {
            Self::English => "Blood gas analysis is within normal limits with adequate oxygenation.",
            Self::Indonesian => {
                "Hasil analisa gas darah dalam batas normal dengan oksigenasi yang adekuat."
            }
        }
    }

    /// Conclusion used when no clause could be composed.
    pub fn fallback_conclusion(self) -> &'static str {
        match self {
            Self::English => "Further clinical evaluation required.",
            Self::Indonesian => "Evaluasi klinis lebih lanjut diperlukan.",
        }
    }

    /// Wraps joined clauses into the conclusion sentence.
    pub fn conclusion_sentence(self, clauses: &str) -> String {
        match self {
            Self::English => format!("Patient has {}.", clauses),
            Self::Indonesian => format!("Pasien mengalami {}.", clauses),
        }
    }

    /// Conclusion clause for a compensation state, if it contributes one.
    pub fn compensation_clause(self, kind: CompensationKind) -> Option<&'static str> {
        let clause = match (self, kind) {
            (Self::English, CompensationKind::Partial(_)) => "with partial compensation",
            (Self::English, CompensationKind::Full) => "with full compensation",
            (Self::English, CompensationKind::Absent) => "without compensation",
            (Self::Indonesian, CompensationKind::Partial(_)) => "dengan kompensasi parsial",
            (Self::Indonesian, CompensationKind::Full) => "dengan kompensasi penuh",
            (Self::Indonesian, CompensationKind::Absent) => "tanpa kompensasi",
            (_, CompensationKind::NotNeeded | CompensationKind::Mixed | CompensationKind::Unknown) => {
                return None
            }
        };
        Some(clause)
    }

    /// Conclusion clause introducing an oxygenation finding.
    pub fn accompanied_by(self, oxygenation_label: &str) -> String {
        match self {
            Self::English => format!("accompanied by {}", oxygenation_label.to_lowercase()),
            Self::Indonesian => format!("disertai {}", oxygenation_label.to_lowercase()),
        }
    }

    // =========================================================================
    // Validation messages
    // =========================================================================

    /// Message for an empty field.
    pub fn required_message(self) -> &'static str {
        match self {
            Self::English => "Value is required",
            Self::Indonesian => "Nilai harus diisi",
        }
    }

    /// Message for text that is not a number.
    pub fn not_a_number_message(self) -> &'static str {
        match self {
            Self::English => "Enter a valid number",
            Self::Indonesian => "Masukkan angka yang valid",
        }
    }

    /// Message for a value outside the field's plausible range.
    pub fn range_message(self, field: Field) -> String {
        let (min, max) = field.plausible_range();
        let range = match field {
            Field::Ph => format!("{:.2}-{:.2}", min, max),
            _ => format!("{}-{}", min, max),
        };
        let unit = match field.unit() {
            "" => String::new(),
            "%" => "%".to_string(),
            unit => format!(" {}", unit),
        };
        match self {
            Self::English => format!("{} must be between {}{}", field.display_name(), range, unit),
            Self::Indonesian => format!("{} harus antara {}{}", field.display_name(), range, unit),
        }
    }

    // =========================================================================
    // Report headings
    // =========================================================================

    pub(crate) fn report_title(self) -> &'static str {
        match self {
            Self::English => "ARTERIAL BLOOD GAS (ABG) INTERPRETATION",
            Self::Indonesian => "INTERPRETASI ANALISA GAS DARAH (AGD)",
        }
    }

    pub(crate) fn input_heading(self) -> &'static str {
        match self {
            Self::English => "INPUT VALUES:",
            Self::Indonesian => "NILAI INPUT:",
        }
    }

    pub(crate) fn results_heading(self) -> &'static str {
        match self {
            Self::English => "INTERPRETATION RESULTS:",
            Self::Indonesian => "HASIL INTERPRETASI:",
        }
    }

    pub(crate) fn conclusion_heading(self) -> &'static str {
        match self {
            Self::English => "CONCLUSION:",
            Self::Indonesian => "KESIMPULAN:",
        }
    }

    /// Titles of the four findings, in report order.
    pub fn finding_titles(self) -> [&'static str; 4] {
        match self {
            Self::English => ["Acid-Base Status", "Primary Disorder", "Compensation", "Oxygenation"],
            Self::Indonesian => ["Status Asam-Basa", "Gangguan Primer", "Kompensasi", "Oksigenasi"],
        }
    }

    /// Closing disclaimer for reports and the guide.
    pub fn disclaimer(self) -> &'static str {
        match self {
            Self::English => {
                "Note: This interpretation is a guide and must be confirmed against the patient's clinical condition."
            }
            Self::Indonesian => {
                "Catatan: Interpretasi ini bersifat panduan dan harus dikonfirmasi dengan kondisi klinis pasien."
            }
        }
    }
}
