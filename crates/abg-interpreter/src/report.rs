//! Plain-text interpretation report.
//!
//! The report layout is fixed: title, input values, the four findings in
//! interpretation order, and the conclusion. It is meant for copying into
//! clinical notes.

use abg_types::{AbgResult, AbgValues, Field};

use crate::classify::ph_band;
use crate::locale::Locale;

const RULE_WIDTH: usize = 35;

/// Renders an English report for a result and the values it came from.
///
/// pH is printed with two decimals; the other values are printed as given.
///
/// # Example
///
/// ```
/// use abg_interpreter::{format_report, interpret};
/// use abg_types::AbgValues;
///
/// let values = AbgValues::new(7.4, 40.0, 24.5, 95.0, 98.0);
/// let report = format_report(&interpret(&values), &values);
///
/// assert!(report.contains("• pH: 7.40"));
/// assert!(report.contains("• HCO₃⁻: 24.5 mEq/L"));
/// ```
pub fn format_report(result: &AbgResult, values: &AbgValues) -> String {
    format_report_in(Locale::English, result, values)
}

/// Renders a report in the given locale.
pub fn format_report_in(locale: Locale, result: &AbgResult, values: &AbgValues) -> String {
    let rule = "═".repeat(RULE_WIDTH);
    let [ph_title, disorder_title, compensation_title, oxygenation_title] = locale.finding_titles();

    let mut lines = vec![
        locale.report_title().to_string(),
        rule.clone(),
        String::new(),
        locale.input_heading().to_string(),
    ];
    lines.extend(Field::ALL.into_iter().map(|field| format!("• {}", value_line(field, values))));

    lines.extend([
        String::new(),
        locale.results_heading().to_string(),
        String::new(),
        format!("1. {}: {}", ph_title, result.ph_status.label),
        format!("   ({})", ph_band(values.ph).condition()),
        String::new(),
        format!("2. {}: {}", disorder_title, result.primary_disorder.label),
        String::new(),
        format!("3. {}: {}", compensation_title, result.compensation.label),
        String::new(),
        format!("4. {}: {}", oxygenation_title, result.oxygenation.label),
        format!(
            "   ({}, {})",
            value_line(Field::PaO2, values),
            value_line(Field::SpO2, values)
        ),
        String::new(),
        rule.clone(),
        locale.conclusion_heading().to_string(),
        result.conclusion.clone(),
        rule,
        String::new(),
        locale.disclaimer().to_string(),
    ]);

    lines.join("\n")
}

/// Formats `name: value unit` for one field.
fn value_line(field: Field, values: &AbgValues) -> String {
    let value = values.get(field);
    match field {
        Field::Ph => format!("{}: {}", field.display_name(), two_decimals(value)),
        Field::SpO2 => format!("{}: {}{}", field.display_name(), value, field.unit()),
        _ => format!("{}: {} {}", field.display_name(), value, field.unit()),
    }
}

/// Formats with two decimals, rounding exact ties away from zero.
///
/// `{:.2}` rounds a value sitting exactly on a half-hundredth (7.125) to
/// even. A value merely printed as a tie (7.345, stored just below it) is
/// left to `{:.2}`.
fn two_decimals(value: f64) -> String {
    let scaled = value * 100.0;
    let exact_tie = scaled.fract().abs() == 0.5 && value.mul_add(100.0, -scaled) == 0.0;
    if exact_tie {
        format!("{:.2}", scaled.round() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}
