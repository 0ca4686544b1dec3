//! Panel interpretation.
//!
//! Runs the four stages (acid-base status, primary disorder, compensation,
//! oxygenation) and composes the conclusion sentence.

use abg_types::{
    AbgResult, AbgValues, CompensationKind, Disorder, DisorderCategory, DisorderKind, Finding,
    Oxygenation, PhBand, Status,
};

use crate::classify::{
    acid_base_flags, assess_compensation, assess_oxygenation, classify_disorder, ph_band,
};
use crate::locale::Locale;
use crate::report;
use crate::types::{InterpretConfig, InterpretError, InterpretResult};

/// Rule-based arterial blood gas interpreter.
///
/// An interpreter holds only its configuration. Interpretation is pure and
/// deterministic, so a single instance can be shared freely across threads.
///
/// # Example
///
/// ```
/// use abg_interpreter::{Interpreter, Locale};
/// use abg_types::{AbgValues, DisorderKind, Status};
///
/// let interpreter = Interpreter::with_locale(Locale::English);
/// let values = AbgValues::new(7.38, 50.0, 28.0, 90.0, 96.0);
/// let result = interpreter.interpret(&values);
///
/// assert_eq!(result.disorder_kind(), DisorderKind::CompensatedRespiratoryAcidosis);
/// assert_eq!(result.primary_disorder.status, Status::Warning);
/// assert_eq!(result.conclusion, "Patient has compensated respiratory acidosis with full compensation.");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Interpreter {
    config: InterpretConfig,
}

impl Interpreter {
    /// Creates an interpreter with the given configuration.
    pub fn new(config: InterpretConfig) -> Self {
        Self { config }
    }

    /// Creates an interpreter producing text in the given locale.
    pub fn with_locale(locale: Locale) -> Self {
        Self::new(InterpretConfig { locale })
    }

    /// Returns the interpreter configuration.
    pub fn config(&self) -> &InterpretConfig {
        &self.config
    }

    /// Returns the output locale.
    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    /// Interprets a panel.
    ///
    /// Values are assumed finite. Any finite input is classified, including
    /// values outside the clinically plausible ranges.
    pub fn interpret(&self, values: &AbgValues) -> AbgResult {
        let locale = self.config.locale;

        let band = ph_band(values.ph);
        let ph_status = Finding::new(locale.ph_label(band), ph_status(band), band);

        let flags = acid_base_flags(values.pa_co2, values.hco3);
        let disorder = Disorder {
            kind: classify_disorder(band, flags),
            flags,
        };
        let primary_disorder = Finding::new(
            locale.disorder_label(disorder.kind),
            disorder_status(disorder.kind),
            disorder,
        );

        let compensation_kind = assess_compensation(disorder.kind, values);
        let compensation = Finding::new(
            locale.compensation_label(compensation_kind),
            compensation_status(compensation_kind),
            compensation_kind,
        );

        let oxygenation_kind = assess_oxygenation(values.pa_o2, values.sp_o2);
        let oxygenation = Finding::new(
            locale.oxygenation_label(oxygenation_kind),
            oxygenation_status(oxygenation_kind),
            oxygenation_kind,
        );

        let conclusion = compose_conclusion(locale, &primary_disorder, &compensation, &oxygenation);

        AbgResult {
            values: *values,
            ph_status,
            primary_disorder,
            compensation,
            oxygenation,
            conclusion,
        }
    }

    /// Interprets a panel after checking that every value is finite.
    ///
    /// # Errors
    /// Returns [`InterpretError::NonFinite`] naming the first NaN or
    /// infinite field.
    pub fn try_interpret(&self, values: &AbgValues) -> InterpretResult<AbgResult> {
        if let Some(field) = values.first_non_finite() {
            return Err(InterpretError::NonFinite { field });
        }
        Ok(self.interpret(values))
    }

    /// Renders a plain-text report in this interpreter's locale.
    pub fn format_report(&self, result: &AbgResult, values: &AbgValues) -> String {
        report::format_report_in(self.config.locale, result, values)
    }
}

fn ph_status(band: PhBand) -> Status {
    match band {
        PhBand::Normal => Status::Normal,
        PhBand::Acidemia | PhBand::Alkalemia => Status::Abnormal,
    }
}

fn disorder_status(kind: DisorderKind) -> Status {
    if kind.is_compensated() {
        return Status::Warning;
    }
    match kind.category() {
        DisorderCategory::None => Status::Normal,
        DisorderCategory::Unknown => Status::Warning,
        DisorderCategory::Respiratory | DisorderCategory::Metabolic | DisorderCategory::Mixed => {
            Status::Abnormal
        }
    }
}

fn compensation_status(kind: CompensationKind) -> Status {
    match kind {
        CompensationKind::NotNeeded | CompensationKind::Full => Status::Normal,
        CompensationKind::Mixed | CompensationKind::Partial(_) | CompensationKind::Unknown => {
            Status::Warning
        }
        CompensationKind::Absent => Status::Abnormal,
    }
}

fn oxygenation_status(oxygenation: Oxygenation) -> Status {
    match oxygenation {
        Oxygenation::Adequate => Status::Normal,
        Oxygenation::Hypoxemia(_) => Status::Abnormal,
    }
}

/// Builds the conclusion from the disorder, compensation and oxygenation.
///
/// Clauses appear in a fixed order: the disorder label, the compensation
/// clause, then the hypoxemia clause.
fn compose_conclusion(
    locale: Locale,
    disorder: &Finding<Disorder>,
    compensation: &Finding<CompensationKind>,
    oxygenation: &Finding<Oxygenation>,
) -> String {
    let has_disorder = disorder.kind.kind != DisorderKind::Normal;
    let hypoxemic = oxygenation.kind.is_hypoxemic();

    if !has_disorder && !hypoxemic {
        return locale.normal_conclusion().to_string();
    }

    let mut clauses = Vec::with_capacity(3);

    if has_disorder {
        clauses.push(disorder.label.to_lowercase());
    }

    if let Some(clause) = locale.compensation_clause(compensation.kind) {
        clauses.push(clause.to_string());
    }

    if hypoxemic {
        clauses.push(locale.accompanied_by(&oxygenation.label));
    }

    if clauses.is_empty() {
        locale.fallback_conclusion().to_string()
    } else {
        locale.conclusion_sentence(&clauses.join(" "))
    }
}

/// Interprets a panel with the default (English) interpreter.
///
/// # Example
///
/// ```
/// use abg_interpreter::interpret;
/// use abg_types::AbgValues;
///
/// let result = interpret(&AbgValues::new(7.40, 40.0, 24.0, 95.0, 98.0));
/// assert!(result.is_normal());
/// ```
pub fn interpret(values: &AbgValues) -> AbgResult {
    Interpreter::default().interpret(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use abg_types::{CompensatingSystem, Severity};

    fn run(ph: f64, pa_co2: f64, hco3: f64, pa_o2: f64, sp_o2: f64) -> AbgResult {
        interpret(&AbgValues::new(ph, pa_co2, hco3, pa_o2, sp_o2))
    }

    #[test]
    fn test_fully_normal_panel() {
        let result = run(7.40, 40.0, 24.0, 95.0, 98.0);

        assert_eq!(result.ph_status.label, "Normal");
        assert_eq!(result.ph_status.status, Status::Normal);
        assert_eq!(result.disorder_kind(), DisorderKind::Normal);
        assert_eq!(result.primary_disorder.label, "No primary disorder");
        assert_eq!(result.compensation.kind, CompensationKind::NotNeeded);
        assert_eq!(result.compensation.label, "Not needed");
        assert_eq!(result.oxygenation.label, "Adequate oxygenation");
        assert_eq!(
            result.conclusion,
            "Blood gas analysis is within normal limits with adequate oxygenation."
        );
    }

    #[test]
    fn test_uncompensated_respiratory_acidosis_with_severe_hypoxemia() {
        let result = run(7.25, 55.0, 24.0, 55.0, 88.0);

        assert_eq!(result.ph_status.label, "Acidosis");
        assert_eq!(result.ph_status.status, Status::Abnormal);
        assert_eq!(result.disorder_kind(), DisorderKind::RespiratoryAcidosis);
        assert_eq!(result.primary_disorder.status, Status::Abnormal);
        assert!(result.primary_disorder.kind.flags.respiratory_acidosis);
        assert!(!result.primary_disorder.kind.flags.metabolic_acidosis);
        assert_eq!(result.compensation.kind, CompensationKind::Absent);
        assert_eq!(result.compensation.label, "No compensation yet");
        assert_eq!(result.compensation.status, Status::Abnormal);
        assert_eq!(
            result.oxygenation.kind,
            Oxygenation::Hypoxemia(Severity::Severe)
        );
        assert_eq!(result.oxygenation.status, Status::Abnormal);
        assert_eq!(
            result.conclusion,
            "Patient has respiratory acidosis without compensation accompanied by hypoxemia severe."
        );
    }

    #[test]
    fn test_compensated_respiratory_acidosis() {
        let result = run(7.38, 50.0, 28.0, 90.0, 96.0);

        assert_eq!(result.ph_status.status, Status::Normal);
        assert_eq!(
            result.disorder_kind(),
            DisorderKind::CompensatedRespiratoryAcidosis
        );
        assert_eq!(result.primary_disorder.status, Status::Warning);
        assert_eq!(result.compensation.kind, CompensationKind::Full);
        assert_eq!(result.compensation.kind.tag(), "full");
        assert_eq!(result.compensation.status, Status::Normal);
        assert_eq!(result.oxygenation.status, Status::Normal);
        assert!(result.conclusion.contains("with full compensation"));
        assert!(!result.conclusion.contains("accompanied by"));
    }

    #[test]
    fn test_mixed_acidosis() {
        let result = run(7.30, 50.0, 18.0, 95.0, 97.0);

        assert_eq!(result.disorder_kind(), DisorderKind::MixedAcidosis);
        assert_eq!(result.primary_disorder.kind.category(), DisorderCategory::Mixed);
        assert_eq!(result.compensation.kind, CompensationKind::Mixed);
        assert_eq!(result.compensation.label, "Cannot be assessed (mixed disorder)");
        assert_eq!(result.compensation.status, Status::Warning);
        assert_eq!(result.oxygenation.kind, Oxygenation::Adequate);
        assert_eq!(
            result.conclusion,
            "Patient has mixed acidosis (respiratory + metabolic)."
        );
    }

    #[test]
    fn test_unresolved_acidemia() {
        let result = run(7.30, 40.0, 24.0, 95.0, 98.0);

        assert_eq!(result.disorder_kind(), DisorderKind::UncompensatedAcidosis);
        assert_eq!(result.primary_disorder.status, Status::Warning);
        assert_eq!(result.primary_disorder.kind.category(), DisorderCategory::Unknown);
        assert_eq!(result.compensation.kind, CompensationKind::Unknown);
        assert_eq!(result.compensation.label, "Cannot be assessed");
        assert_eq!(
            result.conclusion,
            "Patient has acidosis (needs further evaluation)."
        );
    }

    #[test]
    fn test_partial_compensation_clause() {
        let result = run(7.28, 32.0, 15.0, 70.0, 95.0);

        assert_eq!(result.disorder_kind(), DisorderKind::MetabolicAcidosis);
        assert_eq!(
            result.compensation.kind,
            CompensationKind::Partial(CompensatingSystem::Respiratory)
        );
        assert_eq!(
            result.conclusion,
            "Patient has metabolic acidosis with partial compensation accompanied by hypoxemia mild-to-moderate."
        );
    }

    #[test]
    fn test_hypoxemia_only() {
        let result = run(7.40, 40.0, 24.0, 70.0, 95.0);

        assert_eq!(result.disorder_kind(), DisorderKind::Normal);
        assert!(result.is_hypoxemic());
        assert!(!result.is_normal());
        assert_eq!(
            result.conclusion,
            "Patient has accompanied by hypoxemia mild-to-moderate."
        );
    }

    #[test]
    fn test_indonesian_locale() {
        let interpreter = Interpreter::with_locale(Locale::Indonesian);
        let result = interpreter.interpret(&AbgValues::new(7.25, 55.0, 24.0, 55.0, 88.0));

        assert_eq!(result.ph_status.label, "Asidosis");
        assert_eq!(result.primary_disorder.label, "Asidosis Respiratorik");
        assert_eq!(result.compensation.label, "Belum ada kompensasi");
        assert_eq!(result.oxygenation.label, "Hipoksemia berat");
        assert_eq!(
            result.conclusion,
            "Pasien mengalami asidosis respiratorik tanpa kompensasi disertai hipoksemia berat."
        );
    }

    #[test]
    fn test_interpret_is_deterministic() {
        let values = AbgValues::new(7.48, 30.0, 23.0, 78.0, 93.0);
        let interpreter = Interpreter::default();
        assert_eq!(interpreter.interpret(&values), interpreter.interpret(&values));
    }

    #[test]
    fn test_oxygenation_ignores_acid_base_values() {
        let grid = [
            (7.20, 60.0, 15.0),
            (7.40, 40.0, 24.0),
            (7.55, 28.0, 34.0),
            (7.38, 50.0, 28.0),
        ];
        for (pa_o2, sp_o2) in [(95.0, 98.0), (75.0, 95.0), (50.0, 85.0)] {
            let expected = run(7.40, 40.0, 24.0, pa_o2, sp_o2).oxygenation;
            for (ph, pa_co2, hco3) in grid {
                assert_eq!(run(ph, pa_co2, hco3, pa_o2, sp_o2).oxygenation, expected);
            }
        }
    }

    #[test]
    fn test_ph_status_over_range() {
        for ph in [7.35, 7.37, 7.40, 7.43, 7.45] {
            assert_eq!(run(ph, 40.0, 24.0, 95.0, 98.0).ph_status.status, Status::Normal);
        }
        assert_eq!(run(7.10, 40.0, 24.0, 95.0, 98.0).ph_status.label, "Acidosis");
        assert_eq!(run(7.60, 40.0, 24.0, 95.0, 98.0).ph_status.label, "Alkalosis");
    }

    #[test]
    fn test_try_interpret_rejects_non_finite() {
        let interpreter = Interpreter::default();
        let values = AbgValues::new(7.40, f64::NAN, 24.0, 95.0, 98.0);
        assert_eq!(
            interpreter.try_interpret(&values),
            Err(InterpretError::NonFinite {
                field: abg_types::Field::PaCo2
            })
        );

        let values = AbgValues::new(7.40, 40.0, 24.0, 95.0, 98.0);
        assert!(interpreter.try_interpret(&values).is_ok());
    }

    #[test]
    fn test_out_of_range_input_is_still_classified() {
        let result = run(6.5, 150.0, 2.0, 10.0, 30.0);
        assert_eq!(result.disorder_kind(), DisorderKind::MixedAcidosis);
        assert_eq!(result.oxygenation.kind, Oxygenation::Hypoxemia(Severity::Severe));
    }

    #[test]
    fn test_result_serializes_with_tags() {
        let result = run(7.25, 55.0, 24.0, 55.0, 88.0);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["phStatus"]["label"], "Acidosis");
        assert_eq!(json["phStatus"]["status"], "abnormal");
        assert_eq!(json["primaryDisorder"]["kind"]["kind"], "respiratory_acidosis");
        assert_eq!(json["compensation"]["kind"], "absent");
        assert_eq!(json["oxygenation"]["kind"]["hypoxemia"], "severe");
        assert_eq!(json["values"]["pH"], 7.25);
        assert_eq!(json["conclusion"], result.conclusion.as_str());
    }
}
