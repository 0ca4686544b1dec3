//! Command line definition.

use std::path::PathBuf;

use abg_interpreter::Locale;
use abg_types::Field;
use clap::{Args, Parser, Subcommand};

/// Arterial blood gas interpretation.
#[derive(Parser, Debug)]
#[command(name = "abg", version, about)]
pub struct Cli {
    /// Output language: `en` or `id`.
    #[arg(long, global = true, env = "ABG_LOCALE", default_value = "en")]
    pub locale: Locale,

    /// Directory holding the saved form draft.
    #[arg(long, global = true, env = "ABG_DRAFT_DIR")]
    pub draft_dir: Option<PathBuf>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interpret a single panel.
    Interpret(InterpretArgs),
    /// Interpret every panel in a delimited file.
    Batch(BatchArgs),
    /// Print the step-by-step interpretation guide.
    Guide,
    /// Inspect or clear the saved form draft.
    Draft {
        /// Draft operation.
        #[command(subcommand)]
        action: DraftAction,
    },
}

/// Arguments for `abg interpret`.
///
/// Fields left out are taken from the saved draft.
#[derive(Args, Debug, Default)]
pub struct InterpretArgs {
    /// Arterial pH (6.8-7.8).
    #[arg(long = "ph", allow_hyphen_values = true)]
    pub ph: Option<String>,

    /// PaCO₂ in mmHg (10-100).
    #[arg(long = "paco2", allow_hyphen_values = true)]
    pub pa_co2: Option<String>,

    /// HCO₃⁻ in mEq/L (5-50).
    #[arg(long = "hco3", allow_hyphen_values = true)]
    pub hco3: Option<String>,

    /// PaO₂ in mmHg (20-500).
    #[arg(long = "pao2", allow_hyphen_values = true)]
    pub pa_o2: Option<String>,

    /// SpO₂ in percent (50-100).
    #[arg(long = "spo2", allow_hyphen_values = true)]
    pub sp_o2: Option<String>,

    /// Print the result and report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Neither read nor update the saved draft.
    #[arg(long)]
    pub no_draft: bool,
}

impl InterpretArgs {
    /// Returns the fields given on the command line.
    pub fn given_fields(&self) -> Vec<(Field, &str)> {
        Field::ALL
            .into_iter()
            .zip([&self.ph, &self.pa_co2, &self.hco3, &self.pa_o2, &self.sp_o2])
            .filter_map(|(field, value)| value.as_deref().map(|value| (field, value)))
            .collect()
    }
}

/// Arguments for `abg batch`.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// File with a `pH,paCO2,hco3,paO2,spO2` header and one panel per row.
    pub file: PathBuf,

    /// Field delimiter (a single ASCII character).
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Print the results as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Draft operations.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftAction {
    /// Print the saved draft.
    Show,
    /// Delete the saved draft.
    Clear,
}
