//! Validation of raw form text into panel values.
//!
//! The interpreter trusts its input. Callers collecting text from a user or
//! a file run it through these checks first, so that every value handed to
//! the interpreter is a finite number within its field's plausible range.

use abg_types::{AbgValues, Field, RawPanel};

use crate::types::{FieldError, ValidationErrors};

/// Parses and range-checks the raw text of one field.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are rejected as
/// not a number. Range bounds are inclusive.
///
/// # Example
///
/// ```
/// use abg_interpreter::validate::parse_field;
/// use abg_interpreter::FieldError;
/// use abg_types::Field;
///
/// assert_eq!(parse_field(Field::Ph, " 7.35 "), Ok(7.35));
/// assert_eq!(parse_field(Field::Ph, ""), Err(FieldError::Missing { field: Field::Ph }));
/// assert!(parse_field(Field::SpO2, "101").is_err());
/// ```
pub fn parse_field(field: Field, raw: &str) -> Result<f64, FieldError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(FieldError::Missing { field });
    }

    let value = match text.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            return Err(FieldError::NotANumber {
                field,
                value: text.to_string(),
            })
        }
    };

    let (min, max) = field.plausible_range();
    if value < min || value > max {
        return Err(FieldError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }

    Ok(value)
}

/// Validates all five fields of a raw panel.
///
/// Every field is checked; the error lists all failing fields in panel
/// order rather than stopping at the first.
pub fn validate_panel(raw: &RawPanel) -> Result<AbgValues, ValidationErrors> {
    let mut parsed = [0.0; 5];
    let mut errors = Vec::new();

    for (slot, field) in parsed.iter_mut().zip(Field::ALL) {
        match parse_field(field, raw.get(field)) {
            Ok(value) => *slot = value,
            Err(error) => errors.push(error),
        }
    }

    if !errors.is_empty() {
        return Err(ValidationErrors { errors });
    }

    let [ph, pa_co2, hco3, pa_o2, sp_o2] = parsed;
    Ok(AbgValues::new(ph, pa_co2, hco3, pa_o2, sp_o2))
}
