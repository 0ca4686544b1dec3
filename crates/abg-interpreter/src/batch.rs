//! Interpretation of many panels at once.
//!
//! Interpretation is pure, so panels are independent. With the `parallel`
//! feature (default) they are interpreted on the rayon thread pool; result
//! order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use abg_types::{AbgResult, AbgValues, DisorderCategory, Status};

use crate::interpreter::Interpreter;

/// Interprets every panel, preserving input order.
pub fn interpret_all(interpreter: &Interpreter, panels: &[AbgValues]) -> Vec<AbgResult> {
    #[cfg(feature = "parallel")]
    {
        panels
            .par_iter()
            .map(|values| interpreter.interpret(values))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        panels
            .iter()
            .map(|values| interpreter.interpret(values))
            .collect()
    }
}

/// Counts over a set of interpretation results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Number of results.
    pub total: usize,
    /// Results with no primary disorder and adequate oxygenation.
    pub normal: usize,
    /// Results with an abnormal pH.
    pub abnormal_ph: usize,
    /// Results with a respiratory primary disorder.
    pub respiratory: usize,
    /// Results with a metabolic primary disorder.
    pub metabolic: usize,
    /// Results with a mixed disorder.
    pub mixed: usize,
    /// Results whose primary disorder could not be attributed.
    pub unresolved: usize,
    /// Results with hypoxemia.
    pub hypoxemic: usize,
}

impl BatchStats {
    /// Tallies a set of results.
    pub fn from_results(results: &[AbgResult]) -> Self {
        let mut stats = Self {
            total: results.len(),
            ..Default::default()
        };

        for result in results {
            if result.is_normal() {
                stats.normal += 1;
            }
            if result.ph_status.status != Status::Normal {
                stats.abnormal_ph += 1;
            }
            if result.is_hypoxemic() {
                stats.hypoxemic += 1;
            }
            match result.primary_disorder.kind.category() {
                DisorderCategory::Respiratory => stats.respiratory += 1,
                DisorderCategory::Metabolic => stats.metabolic += 1,
                DisorderCategory::Mixed => stats.mixed += 1,
                DisorderCategory::Unknown => stats.unresolved += 1,
                DisorderCategory::None => {}
            }
        }

        stats
    }

    /// Returns the percentage of fully normal results.
    pub fn normal_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.normal as f64 / self.total as f64) * 100.0
        }
    }
}
