//! Output language selection.

use std::str::FromStr;

use thiserror::Error;

/// Language used for labels, conclusions, reports and validation messages.
///
/// # Examples
///
/// ```
/// use abg_interpreter::Locale;
///
/// assert_eq!("id".parse::<Locale>().unwrap(), Locale::Indonesian);
/// assert_eq!("English".parse::<Locale>().unwrap(), Locale::English);
/// assert!("fr".parse::<Locale>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English.
    #[default]
    English,
    /// Bahasa Indonesia.
    Indonesian,
}

impl Locale {
    /// Returns the short language code.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Indonesian => "id",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Unrecognised locale name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown locale '{value}' (expected 'en' or 'id')")]
pub struct LocaleError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "id" | "indonesian" | "bahasa" => Ok(Self::Indonesian),
            _ => Err(LocaleError {
                value: s.to_string(),
            }),
        }
    }
}
