//! Threshold rules for each interpretation stage.
//!
//! These functions are locale-free and operate on plain numbers and enums.
//! [`Interpreter`](crate::Interpreter) composes them and attaches labels.

use abg_types::reference::{
    HCO3_HIGH, HCO3_LOW, HCO3_MIDLINE, PACO2_HIGH, PACO2_LOW, PACO2_MIDLINE, PAO2_HYPOXEMIA,
    PAO2_SEVERE, PH_NORMAL_HIGH, PH_NORMAL_LOW, SPO2_HYPOXEMIA, SPO2_SEVERE,
};
use abg_types::{
    AbgValues, AcidBaseFlags, CompensatingSystem, CompensationKind, DisorderKind, Oxygenation,
    PhBand, Severity,
};

/// Places a pH value in its band. Both band edges count as normal.
pub fn ph_band(ph: f64) -> PhBand {
    if ph < PH_NORMAL_LOW {
        PhBand::Acidemia
    } else if ph > PH_NORMAL_HIGH {
        PhBand::Alkalemia
    } else {
        PhBand::Normal
    }
}

/// Evaluates the four independent PaCO₂ and HCO₃⁻ threshold tests.
pub fn acid_base_flags(pa_co2: f64, hco3: f64) -> AcidBaseFlags {
    AcidBaseFlags {
        respiratory_acidosis: pa_co2 > PACO2_HIGH,
        respiratory_alkalosis: pa_co2 < PACO2_LOW,
        metabolic_acidosis: hco3 < HCO3_LOW,
        metabolic_alkalosis: hco3 > HCO3_HIGH,
    }
}

/// Classifies the primary disorder from the pH band and the threshold flags.
///
/// In acidemia only the acidosis flags are considered, in alkalemia only the
/// alkalosis flags. With a normal pH the panel is checked for a compensated
/// disorder, which needs one flag from each system pointing in opposite
/// directions.
///
/// The four compensated pairings are tested first-match-wins. A high PaCO₂
/// with a high HCO₃⁻ is a compensated respiratory acidosis, and a low PaCO₂
/// with a low HCO₃⁻ is a compensated respiratory alkalosis. The metabolic
/// pairings repeat these two conditions, so the compensated metabolic kinds
/// are never returned.
pub fn classify_disorder(band: PhBand, flags: AcidBaseFlags) -> DisorderKind {
    match band {
        PhBand::Acidemia => match (flags.respiratory_acidosis, flags.metabolic_acidosis) {
            (true, false) => DisorderKind::RespiratoryAcidosis,
            (false, true) => DisorderKind::MetabolicAcidosis,
            (true, true) => DisorderKind::MixedAcidosis,
            (false, false) => DisorderKind::UncompensatedAcidosis,
        },
        PhBand::Alkalemia => match (flags.respiratory_alkalosis, flags.metabolic_alkalosis) {
            (true, false) => DisorderKind::RespiratoryAlkalosis,
            (false, true) => DisorderKind::MetabolicAlkalosis,
            (true, true) => DisorderKind::MixedAlkalosis,
            (false, false) => DisorderKind::UncompensatedAlkalosis,
        },
        PhBand::Normal => {
            if flags.respiratory_acidosis && flags.metabolic_alkalosis {
                DisorderKind::CompensatedRespiratoryAcidosis
            } else if flags.respiratory_alkalosis && flags.metabolic_acidosis {
                DisorderKind::CompensatedRespiratoryAlkalosis
            } else {
                DisorderKind::Normal
            }
        }
    }
}

/// Assesses compensation of a primary disorder.
///
/// Single uncompensated disorders are re-tested against the midline of the
/// other system: HCO₃⁻ against 24 mEq/L for a respiratory primary, PaCO₂
/// against 40 mmHg for a metabolic primary.
pub fn assess_compensation(kind: DisorderKind, values: &AbgValues) -> CompensationKind {
    use DisorderKind::*;

    match kind {
        Normal => CompensationKind::NotNeeded,
        MixedAcidosis | MixedAlkalosis => CompensationKind::Mixed,
        CompensatedRespiratoryAcidosis
        | CompensatedRespiratoryAlkalosis
        | CompensatedMetabolicAcidosis
        | CompensatedMetabolicAlkalosis => CompensationKind::Full,
        RespiratoryAcidosis if values.hco3 > HCO3_MIDLINE => {
            CompensationKind::Partial(CompensatingSystem::Metabolic)
        }
        RespiratoryAlkalosis if values.hco3 < HCO3_MIDLINE => {
            CompensationKind::Partial(CompensatingSystem::Metabolic)
        }
        MetabolicAcidosis if values.pa_co2 < PACO2_MIDLINE => {
            CompensationKind::Partial(CompensatingSystem::Respiratory)
        }
        MetabolicAlkalosis if values.pa_co2 > PACO2_MIDLINE => {
            CompensationKind::Partial(CompensatingSystem::Respiratory)
        }
        RespiratoryAcidosis | RespiratoryAlkalosis | MetabolicAcidosis | MetabolicAlkalosis => {
            CompensationKind::Absent
        }
        UncompensatedAcidosis | UncompensatedAlkalosis => CompensationKind::Unknown,
    }
}

/// Assesses oxygenation from PaO₂ and SpO₂ alone.
pub fn assess_oxygenation(pa_o2: f64, sp_o2: f64) -> Oxygenation {
    let hypoxemic = pa_o2 < PAO2_HYPOXEMIA || sp_o2 < SPO2_HYPOXEMIA;
    if !hypoxemic {
        return Oxygenation::Adequate;
    }

    if pa_o2 < PAO2_SEVERE || sp_o2 < SPO2_SEVERE {
        Oxygenation::Hypoxemia(Severity::Severe)
    } else {
        Oxygenation::Hypoxemia(Severity::MildToModerate)
    }
}
