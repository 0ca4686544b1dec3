//! Clinical reference values used by the interpretation rules.
//!
//! All thresholds are strict: a value equal to a boundary is inside the
//! normal band. For example a pH of exactly 7.35 is normal, and a PaCO₂ of
//! exactly 45 mmHg does not raise the respiratory acidosis flag.
//!
//! # Examples
//!
//! ```
//! use abg_types::reference;
//!
//! let ph = 7.35;
//! assert!(!(ph < reference::PH_NORMAL_LOW));
//! assert!(reference::PACO2_HIGH > reference::PACO2_LOW);
//! ```

// =============================================================================
// Acid-base status
// =============================================================================

/// Lower bound of the normal arterial pH band (7.35).
pub const PH_NORMAL_LOW: f64 = 7.35;

/// Upper bound of the normal arterial pH band (7.45).
pub const PH_NORMAL_HIGH: f64 = 7.45;

// =============================================================================
// Primary disorder thresholds
// =============================================================================

/// PaCO₂ above this value (mmHg) raises the respiratory acidosis flag.
pub const PACO2_HIGH: f64 = 45.0;

/// PaCO₂ below this value (mmHg) raises the respiratory alkalosis flag.
pub const PACO2_LOW: f64 = 35.0;

/// HCO₃⁻ below this value (mEq/L) raises the metabolic acidosis flag.
pub const HCO3_LOW: f64 = 22.0;

/// HCO₃⁻ above this value (mEq/L) raises the metabolic alkalosis flag.
pub const HCO3_HIGH: f64 = 26.0;

// =============================================================================
// Compensation midlines
// =============================================================================

/// HCO₃⁻ midline (mEq/L) used to detect metabolic compensation of a
/// respiratory disorder.
pub const HCO3_MIDLINE: f64 = 24.0;

/// PaCO₂ midline (mmHg) used to detect respiratory compensation of a
/// metabolic disorder.
pub const PACO2_MIDLINE: f64 = 40.0;

// =============================================================================
// Oxygenation
// =============================================================================

/// PaO₂ below this value (mmHg) indicates hypoxemia.
pub const PAO2_HYPOXEMIA: f64 = 80.0;

/// SpO₂ below this value (%) indicates hypoxemia.
pub const SPO2_HYPOXEMIA: f64 = 94.0;

/// PaO₂ below this value (mmHg) makes hypoxemia severe.
pub const PAO2_SEVERE: f64 = 60.0;

/// SpO₂ below this value (%) makes hypoxemia severe.
pub const SPO2_SEVERE: f64 = 90.0;
