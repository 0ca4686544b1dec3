//! Step-by-step interpretation guide.
//!
//! The guide is rendered from the same reference values and labels the
//! interpreter uses, and its example conclusions are produced by running the
//! interpreter on sample panels, so the guide cannot drift from the rules.

use abg_types::reference::{
    HCO3_HIGH, HCO3_LOW, PACO2_HIGH, PACO2_LOW, PAO2_HYPOXEMIA, PAO2_SEVERE, SPO2_HYPOXEMIA,
    SPO2_SEVERE,
};
use abg_types::{AbgValues, DisorderKind, PhBand};

use crate::interpreter::Interpreter;
use crate::locale::Locale;

/// Sample panels whose conclusions illustrate the final step.
const EXAMPLE_PANELS: [AbgValues; 3] = [
    AbgValues::new(7.25, 55.0, 24.0, 55.0, 88.0),
    AbgValues::new(7.48, 44.0, 32.0, 92.0, 97.0),
    AbgValues::new(7.28, 40.0, 15.0, 95.0, 98.0),
];

struct GuideText {
    title: &'static str,
    steps: [&'static str; 6],
    order: &'static str,
    respiratory: &'static str,
    metabolic: &'static str,
    compensation_levels: [&'static str; 3],
    oxygenation_normal: &'static str,
    oxygenation_rule: &'static str,
    severe_rule: &'static str,
}

fn text(locale: Locale) -> GuideText {
    match locale {
        Locale::English => GuideText {
            title: "ABG INTERPRETATION GUIDE",
            steps: [
                "Interpretation Order",
                "pH Status",
                "Primary Disorder",
                "Compensation",
                "Oxygenation Status",
                "Example Conclusions",
            ],
            order: "pH -> primary disorder (PaCO₂, HCO₃⁻) -> compensation -> oxygenation -> conclusion",
            respiratory: "Respiratory (PaCO₂)",
            metabolic: "Metabolic (HCO₃⁻)",
            compensation_levels: [
                "None: pH abnormal, compensating value normal",
                "Partial: pH abnormal, compensating value shifting",
                "Full: pH normal, both values abnormal",
            ],
            oxygenation_normal: "Normal",
            oxygenation_rule: "If either or both are met -> hypoxemia",
            severe_rule: "Severe when",
        },
        Locale::Indonesian => GuideText {
            title: "PETUNJUK INTERPRETASI AGD",
            steps: [
                "Urutan Interpretasi",
                "Status pH",
                "Gangguan Primer",
                "Kompensasi",
                "Status Oksigenasi",
                "Contoh Kesimpulan",
            ],
            order: "pH -> gangguan primer (PaCO₂, HCO₃⁻) -> kompensasi -> oksigenasi -> kesimpulan",
            respiratory: "Respiratorik (PaCO₂)",
            metabolic: "Metabolik (HCO₃⁻)",
            compensation_levels: [
                "Tidak ada: pH abnormal, kompensator normal",
                "Parsial: pH abnormal, kompensator berubah",
                "Penuh: pH normal, kedua parameter abnormal",
            ],
            oxygenation_normal: "Normal",
            oxygenation_rule: "Jika salah satu atau keduanya terpenuhi -> hipoksemia",
            severe_rule: "Berat bila",
        },
    }
}

/// Renders the interpretation guide in the given locale.
pub fn render_guide(locale: Locale) -> String {
    let t = text(locale);
    let interpreter = Interpreter::with_locale(locale);
    let heading = |n: usize| format!("{}. {}", n + 1, t.steps[n]);
    let row = |condition: String, result: &str| format!("   {:<18} -> {}", condition, result);

    let mut lines = vec![t.title.to_string(), String::new()];

    lines.push(heading(0));
    lines.push(format!("   {}", t.order));
    lines.push(String::new());

    lines.push(heading(1));
    for band in [PhBand::Acidemia, PhBand::Alkalemia, PhBand::Normal] {
        lines.push(row(band.condition().to_string(), locale.ph_label(band)));
    }
    lines.push(String::new());

    lines.push(heading(2));
    lines.push(format!("   {}", t.respiratory));
    lines.push(row(
        format!("PaCO₂ > {}", PACO2_HIGH),
        locale.disorder_label(DisorderKind::RespiratoryAcidosis),
    ));
    lines.push(row(
        format!("PaCO₂ < {}", PACO2_LOW),
        locale.disorder_label(DisorderKind::RespiratoryAlkalosis),
    ));
    lines.push(format!("   {}", t.metabolic));
    lines.push(row(
        format!("HCO₃⁻ < {}", HCO3_LOW),
        locale.disorder_label(DisorderKind::MetabolicAcidosis),
    ));
    lines.push(row(
        format!("HCO₃⁻ > {}", HCO3_HIGH),
        locale.disorder_label(DisorderKind::MetabolicAlkalosis),
    ));
    lines.push(String::new());

    lines.push(heading(3));
    lines.extend(t.compensation_levels.iter().map(|level| format!("   - {}", level)));
    lines.push(String::new());

    lines.push(heading(4));
    lines.push(format!(
        "   {}: PaO₂ ≥ {} mmHg, SpO₂ ≥ {}%",
        t.oxygenation_normal, PAO2_HYPOXEMIA, SPO2_HYPOXEMIA
    ));
    lines.push(row(format!("PaO₂ < {} mmHg", PAO2_HYPOXEMIA), locale.hypoxemia_word()));
    lines.push(row(format!("SpO₂ < {}%", SPO2_HYPOXEMIA), locale.hypoxemia_word()));
    lines.push(format!("   {}", t.oxygenation_rule));
    lines.push(format!(
        "   {}: PaO₂ < {} mmHg / SpO₂ < {}%",
        t.severe_rule, PAO2_SEVERE, SPO2_SEVERE
    ));
    lines.push(String::new());

    lines.push(heading(5));
    for values in &EXAMPLE_PANELS {
        lines.push(format!("   \"{}\"", interpreter.interpret(values).conclusion));
    }
    lines.push(String::new());

    lines.push(locale.disclaimer().to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_lists_thresholds() {
        let guide = render_guide(Locale::English);

        assert!(guide.starts_with("ABG INTERPRETATION GUIDE"));
        assert!(guide.contains("pH < 7.35"));
        assert!(guide.contains("-> Acidosis"));
        assert!(guide.contains("PaCO₂ > 45"));
        assert!(guide.contains("-> Respiratory Acidosis"));
        assert!(guide.contains("HCO₃⁻ > 26"));
        assert!(guide.contains("PaO₂ ≥ 80 mmHg, SpO₂ ≥ 94%"));
    }

    #[test]
    fn test_guide_examples_come_from_interpreter() {
        let guide = render_guide(Locale::English);
        for values in &EXAMPLE_PANELS {
            let conclusion = Interpreter::default().interpret(values).conclusion;
            assert!(guide.contains(&conclusion));
        }
    }

    #[test]
    fn test_guide_has_six_steps_in_order() {
        let guide = render_guide(Locale::Indonesian);
        let positions: Vec<usize> = (1..=6)
            .map(|n| guide.find(&format!("\n{}. ", n)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(guide.contains("Asidosis Respiratorik"));
    }
}
