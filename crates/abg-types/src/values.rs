//! Arterial blood gas panel inputs.
//!
//! This module provides [`AbgValues`], the five validated numbers the
//! interpreter consumes, [`RawPanel`], the unvalidated text a form collects
//! before validation, and [`Field`], which names each of the five inputs.

/// One of the five inputs of an arterial blood gas panel.
///
/// # Examples
///
/// ```
/// use abg_types::Field;
///
/// assert_eq!(Field::from_key("paCO2"), Some(Field::PaCo2));
/// assert_eq!(Field::Hco3.unit(), "mEq/L");
/// assert_eq!(Field::Ph.plausible_range(), (6.8, 7.8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// Arterial pH.
    Ph,
    /// Partial pressure of carbon dioxide (mmHg).
    PaCo2,
    /// Bicarbonate (mEq/L).
    Hco3,
    /// Partial pressure of oxygen (mmHg).
    PaO2,
    /// Peripheral oxygen saturation (%).
    SpO2,
}

impl Field {
    /// All fields in panel order.
    pub const ALL: [Field; 5] = [Field::Ph, Field::PaCo2, Field::Hco3, Field::PaO2, Field::SpO2];

    /// Returns the machine key used in persisted drafts and panel files.
    pub fn key(self) -> &'static str {
        match self {
            Self::Ph => "pH",
            Self::PaCo2 => "paCO2",
            Self::Hco3 => "hco3",
            Self::PaO2 => "paO2",
            Self::SpO2 => "spO2",
        }
    }

    /// Looks up a field by its machine key.
    ///
    /// Returns `None` if the key doesn't name a panel field.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Returns the clinical display name (with sub/superscripts).
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Ph => "pH",
            Self::PaCo2 => "PaCO₂",
            Self::Hco3 => "HCO₃⁻",
            Self::PaO2 => "PaO₂",
            Self::SpO2 => "SpO₂",
        }
    }

    /// Returns the measurement unit, empty for pH.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Ph => "",
            Self::PaCo2 | Self::PaO2 => "mmHg",
            Self::Hco3 => "mEq/L",
            Self::SpO2 => "%",
        }
    }

    /// Returns the inclusive range a caller should accept for this field.
    ///
    /// The interpreter itself never checks these bounds.
    pub fn plausible_range(self) -> (f64, f64) {
        match self {
            Self::Ph => (6.8, 7.8),
            Self::PaCo2 => (10.0, 100.0),
            Self::Hco3 => (5.0, 50.0),
            Self::PaO2 => (20.0, 500.0),
            Self::SpO2 => (50.0, 100.0),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The five numeric values of an arterial blood gas panel.
///
/// Values are expected to be finite and within each field's
/// [plausible range](Field::plausible_range); the interpreter classifies
/// any finite input regardless.
///
/// # Examples
///
/// ```
/// use abg_types::{AbgValues, Field};
///
/// let values = AbgValues::new(7.40, 40.0, 24.0, 95.0, 98.0);
/// assert_eq!(values.get(Field::Ph), 7.40);
/// assert_eq!(values.first_non_finite(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbgValues {
    /// Arterial pH.
    #[cfg_attr(feature = "serde", serde(rename = "pH"))]
    pub ph: f64,
    /// PaCO₂ in mmHg.
    #[cfg_attr(feature = "serde", serde(rename = "paCO2"))]
    pub pa_co2: f64,
    /// HCO₃⁻ in mEq/L.
    pub hco3: f64,
    /// PaO₂ in mmHg.
    #[cfg_attr(feature = "serde", serde(rename = "paO2"))]
    pub pa_o2: f64,
    /// SpO₂ in percent.
    #[cfg_attr(feature = "serde", serde(rename = "spO2"))]
    pub sp_o2: f64,
}

impl AbgValues {
    /// Creates a panel from its five values in panel order.
    pub const fn new(ph: f64, pa_co2: f64, hco3: f64, pa_o2: f64, sp_o2: f64) -> Self {
        Self {
            ph,
            pa_co2,
            hco3,
            pa_o2,
            sp_o2,
        }
    }

    /// Returns the value of a single field.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Ph => self.ph,
            Field::PaCo2 => self.pa_co2,
            Field::Hco3 => self.hco3,
            Field::PaO2 => self.pa_o2,
            Field::SpO2 => self.sp_o2,
        }
    }

    /// Returns the first field (in panel order) holding NaN or an infinity.
    pub fn first_non_finite(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|&field| !self.get(field).is_finite())
    }
}

/// Unvalidated panel text as typed into a form.
///
/// This is also the persisted shape of a form draft: a JSON object with the
/// string fields `pH`, `paCO2`, `hco3`, `paO2` and `spO2`. Missing fields
/// deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawPanel {
    /// Raw pH text.
    #[cfg_attr(feature = "serde", serde(rename = "pH"))]
    pub ph: String,
    /// Raw PaCO₂ text.
    #[cfg_attr(feature = "serde", serde(rename = "paCO2"))]
    pub pa_co2: String,
    /// Raw HCO₃⁻ text.
    pub hco3: String,
    /// Raw PaO₂ text.
    #[cfg_attr(feature = "serde", serde(rename = "paO2"))]
    pub pa_o2: String,
    /// Raw SpO₂ text.
    #[cfg_attr(feature = "serde", serde(rename = "spO2"))]
    pub sp_o2: String,
}

impl RawPanel {
    /// Returns the raw text of a single field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Ph => &self.ph,
            Field::PaCo2 => &self.pa_co2,
            Field::Hco3 => &self.hco3,
            Field::PaO2 => &self.pa_o2,
            Field::SpO2 => &self.sp_o2,
        }
    }

    /// Replaces the raw text of a single field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Ph => &mut self.ph,
            Field::PaCo2 => &mut self.pa_co2,
            Field::Hco3 => &mut self.hco3,
            Field::PaO2 => &mut self.pa_o2,
            Field::SpO2 => &mut self.sp_o2,
        };
        *slot = value.into();
    }

    /// Returns true if every field is blank.
    pub fn is_blank(&self) -> bool {
        Field::ALL
            .into_iter()
            .all(|field| self.get(field).trim().is_empty())
    }
}

impl From<&AbgValues> for RawPanel {
    fn from(values: &AbgValues) -> Self {
        let mut raw = RawPanel::default();
        for field in Field::ALL {
            raw.set(field, values.get(field).to_string());
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_roundtrip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("PaCO2"), None);
        assert_eq!(Field::from_key(""), None);
    }

    #[test]
    fn test_plausible_ranges() {
        assert_eq!(Field::PaCo2.plausible_range(), (10.0, 100.0));
        assert_eq!(Field::Hco3.plausible_range(), (5.0, 50.0));
        assert_eq!(Field::PaO2.plausible_range(), (20.0, 500.0));
        assert_eq!(Field::SpO2.plausible_range(), (50.0, 100.0));
    }

    #[test]
    fn test_first_non_finite() {
        let mut values = AbgValues::new(7.40, 40.0, 24.0, 95.0, 98.0);
        assert_eq!(values.first_non_finite(), None);

        values.pa_o2 = f64::NAN;
        values.sp_o2 = f64::INFINITY;
        assert_eq!(values.first_non_finite(), Some(Field::PaO2));
    }

    #[test]
    fn test_raw_panel_set_and_blank() {
        let mut raw = RawPanel::default();
        assert!(raw.is_blank());

        raw.set(Field::Hco3, "24");
        assert_eq!(raw.get(Field::Hco3), "24");
        assert_eq!(raw.hco3, "24");
        assert!(!raw.is_blank());
    }

    #[test]
    fn test_raw_panel_from_values() {
        let values = AbgValues::new(7.25, 55.0, 24.5, 55.0, 88.0);
        let raw = RawPanel::from(&values);
        assert_eq!(raw.ph, "7.25");
        assert_eq!(raw.pa_co2, "55");
        assert_eq!(raw.hco3, "24.5");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_raw_panel_draft_shape() {
        let json = r#"{"pH":"7.4","paCO2":"40","hco3":"","paO2":"95"}"#;
        let raw: RawPanel = serde_json::from_str(json).unwrap();
        assert_eq!(raw.ph, "7.4");
        assert_eq!(raw.pa_co2, "40");
        assert_eq!(raw.hco3, "");
        assert_eq!(raw.sp_o2, "");

        let out = serde_json::to_value(&raw).unwrap();
        assert_eq!(out["paO2"], "95");
        assert_eq!(out["spO2"], "");
    }
}
