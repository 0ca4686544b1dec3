//! Command execution.

use std::io::Write;
use std::path::PathBuf;

use abg_interpreter::{
    interpret_all, render_guide, validate_panel, BatchStats, InterpretError, Interpreter, Locale,
    PanelConfig, PanelError, PanelReader,
};
use abg_types::{AbgResult, RawPanel, ResultTags};
use serde::Serialize;
use thiserror::Error;

use crate::cli::{BatchArgs, Command, DraftAction, InterpretArgs};
use crate::draft::DraftStore;

/// Errors surfaced to the user by a command.
#[derive(Error, Debug)]
pub enum AppError {
    /// One or more panel fields failed validation.
    #[error("invalid input:\n{}", .messages.join("\n"))]
    InvalidInput {
        /// One localized line per failing field.
        messages: Vec<String>,
    },

    /// Interpretation refused the panel.
    #[error(transparent)]
    Interpret(#[from] InterpretError),

    /// The panel file could not be read.
    #[error(transparent)]
    Panel(#[from] PanelError),

    /// The batch delimiter is not a single ASCII character.
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A result with its external tags alongside the typed kinds.
#[derive(Serialize)]
struct TaggedResult<'a> {
    #[serde(flatten)]
    result: &'a AbgResult,
    tags: ResultTags,
}

impl<'a> From<&'a AbgResult> for TaggedResult<'a> {
    fn from(result: &'a AbgResult) -> Self {
        Self {
            result,
            tags: result.tags(),
        }
    }
}

#[derive(Serialize)]
struct InterpretOutput<'a> {
    result: TaggedResult<'a>,
    report: &'a str,
}

/// Runs commands against a configured interpreter and draft store.
#[derive(Debug, Clone)]
pub struct App {
    interpreter: Interpreter,
    drafts: DraftStore,
}

impl App {
    /// Creates an app rendering in `locale` and keeping its draft in `draft_dir`.
    pub fn new(locale: Locale, draft_dir: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: Interpreter::with_locale(locale),
            drafts: DraftStore::in_dir(draft_dir.into()),
        }
    }

    /// Returns the draft store.
    pub fn drafts(&self) -> &DraftStore {
        &self.drafts
    }

    /// Runs a command, writing its output to `out`.
    pub fn run<W: Write>(&self, command: &Command, out: &mut W) -> Result<(), AppError> {
        match command {
            Command::Interpret(args) => self.interpret(args, out),
            Command::Batch(args) => self.batch(args, out),
            Command::Guide => {
                writeln!(out, "{}", render_guide(self.interpreter.locale()))?;
                Ok(())
            }
            Command::Draft { action } => self.draft(*action, out),
        }
    }

    fn interpret<W: Write>(&self, args: &InterpretArgs, out: &mut W) -> Result<(), AppError> {
        let mut raw = if args.no_draft {
            RawPanel::default()
        } else {
            self.drafts.load().unwrap_or_default()
        };
        for (field, value) in args.given_fields() {
            raw.set(field, value);
        }
        if !args.no_draft {
            self.drafts.save(&raw);
        }

        let locale = self.interpreter.locale();
        let values = validate_panel(&raw).map_err(|errors| AppError::InvalidInput {
            messages: errors
                .errors
                .iter()
                .map(|error| format!("  {}: {}", error.field(), error.message(locale)))
                .collect(),
        })?;

        let result = self.interpreter.try_interpret(&values)?;
        let report = self.interpreter.format_report(&result, &values);
        tracing::debug!(disorder = %result.disorder_kind(), "panel interpreted");

        if args.json {
            let output = InterpretOutput {
                result: TaggedResult::from(&result),
                report: &report,
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", report)?;
        }
        Ok(())
    }

    fn batch<W: Write>(&self, args: &BatchArgs, out: &mut W) -> Result<(), AppError> {
        let delimiter = u8::try_from(args.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(AppError::InvalidDelimiter(args.delimiter))?;

        let reader = PanelReader::from_path(&args.file, PanelConfig { delimiter })?;
        let (panels, errors) = reader.read_all();
        for error in &errors {
            tracing::warn!("Skipping panel: {}", error);
        }

        let results = interpret_all(&self.interpreter, &panels);
        let stats = BatchStats::from_results(&results);
        tracing::info!(
            "Interpreted {} panels ({} skipped), {:.1}% normal",
            stats.total,
            errors.len(),
            stats.normal_rate()
        );

        if args.json {
            let tagged: Vec<TaggedResult<'_>> = results.iter().map(TaggedResult::from).collect();
            serde_json::to_writer_pretty(&mut *out, &tagged)?;
            writeln!(out)?;
            return Ok(());
        }

        for (i, result) in results.iter().enumerate() {
            writeln!(
                out,
                "{:>4}  pH {:.2}  {}",
                i + 1,
                result.values.ph,
                result.conclusion
            )?;
        }
        writeln!(
            out,
            "\n{} panels: {} normal, {} respiratory, {} metabolic, {} mixed, {} unresolved, {} hypoxemic, {} skipped",
            stats.total,
            stats.normal,
            stats.respiratory,
            stats.metabolic,
            stats.mixed,
            stats.unresolved,
            stats.hypoxemic,
            errors.len()
        )?;
        Ok(())
    }

    fn draft<W: Write>(&self, action: DraftAction, out: &mut W) -> Result<(), AppError> {
        match action {
            DraftAction::Show => match self.drafts.load() {
                Some(draft) => {
                    serde_json::to_writer_pretty(&mut *out, &draft)?;
                    writeln!(out)?;
                }
                None => writeln!(out, "No saved draft.")?,
            },
            DraftAction::Clear => {
                self.drafts.clear();
                writeln!(out, "Draft cleared.")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abg_types::Field;
    use std::fs;

    fn interpret_args(values: [&str; 5]) -> InterpretArgs {
        let [ph, pa_co2, hco3, pa_o2, sp_o2] = values.map(|v| Some(v.to_string()));
        InterpretArgs {
            ph,
            pa_co2,
            hco3,
            pa_o2,
            sp_o2,
            ..Default::default()
        }
    }

    fn run(app: &App, command: Command) -> Result<String, AppError> {
        let mut out = Vec::new();
        app.run(&command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_interpret_prints_report() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Locale::English, dir.path());

        let args = interpret_args(["7.25", "55", "24", "55", "88"]);
        let output = run(&app, Command::Interpret(args)).unwrap();

        assert!(output.contains("Respiratory Acidosis"));
        assert!(output.contains("Hypoxemia severe"));
    }

    #[test]
    fn test_interpret_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Locale::English, dir.path());

        let mut args = interpret_args(["7.40", "40", "24", "95", "98"]);
        args.json = true;
        let output = run(&app, Command::Interpret(args)).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            json["result"]["conclusion"],
            "Blood gas analysis is within normal limits with adequate oxygenation."
        );
        assert!(json["report"].as_str().unwrap().contains("pH: 7.40"));
        assert_eq!(json["result"]["tags"]["compensation"], "none");
        assert_eq!(json["result"]["compensation"]["kind"], "not_needed");
    }

    #[test]
    fn test_interpret_reports_every_invalid_field() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Locale::English, dir.path());

        let mut args = interpret_args(["7.25", "abc", "24", "55", "120"]);
        args.no_draft = true;
        let error = run(&app, Command::Interpret(args)).unwrap_err();

        match error {
            AppError::InvalidInput { messages } => {
                assert_eq!(messages.len(), 2);
                assert!(messages[0].contains("PaCO₂"));
                assert!(messages[1].contains("SpO₂"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_invalid_input_is_localized() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Locale::Indonesian, dir.path());

        let args = InterpretArgs {
            no_draft: true,
            ..Default::default()
        };
        let error = run(&app, Command::Interpret(args)).unwrap_err();

        match error {
            AppError::InvalidInput { messages } => {
                assert_eq!(messages.len(), 5);
                assert!(messages[0].contains("Nilai harus diisi"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_draft_carries_fields_between_runs() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Locale::English, dir.path());

        let first = InterpretArgs {
            ph: Some("7.50".to_string()),
            pa_co2: Some("30".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            run(&app, Command::Interpret(first)),
            Err(AppError::InvalidInput { .. })
        ));

        let draft = app.drafts().load().unwrap();
        assert_eq!(draft.get(Field::Ph), "7.50");
        assert_eq!(draft.get(Field::PaCo2), "30");

        let second = InterpretArgs {
            hco3: Some("24".to_string()),
            pa_o2: Some("95".to_string()),
            sp_o2: Some("98".to_string()),
            ..Default::default()
        };
        let output = run(&app, Command::Interpret(second)).unwrap();
        assert!(output.contains("Respiratory Alkalosis"));
    }

    #[test]
    fn test_no_draft_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Locale::English, dir.path());

        let mut args = interpret_args(["7.40", "40", "24", "95", "98"]);
        args.no_draft = true;
        run(&app, Command::Interpret(args)).unwrap();

        assert!(app.drafts().load().is_none());
    }

    #[test]
    fn test_draft_show_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Locale::English, dir.path());

        let show = || Command::Draft {
            action: DraftAction::Show,
        };
        assert_eq!(run(&app, show()).unwrap(), "No saved draft.\n");

        let args = interpret_args(["7.40", "40", "24", "95", "98"]);
        run(&app, Command::Interpret(args)).unwrap();
        assert!(run(&app, show()).unwrap().contains("\"pH\": \"7.40\""));

        let clear = Command::Draft {
            action: DraftAction::Clear,
        };
        assert_eq!(run(&app, clear).unwrap(), "Draft cleared.\n");
        assert_eq!(run(&app, show()).unwrap(), "No saved draft.\n");
    }

    #[test]
    fn test_batch_summarizes_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("panels.csv");
        fs::write(
            &file,
            "pH,paCO2,hco3,paO2,spO2\n\
             7.40,40,24,95,98\n\
             7.25,55,24,55,88\n\
             7.30,40,18,95,98\n\
             abc,40,24,95,98\n",
        )
        .unwrap();
        let app = App::new(Locale::English, dir.path());

        let args = BatchArgs {
            file,
            delimiter: ',',
            json: false,
        };
        let output = run(&app, Command::Batch(args)).unwrap();

        assert!(output.contains("   1  pH 7.40  Blood gas analysis is within normal limits"));
        assert!(output.contains("   2  pH 7.25  Patient has respiratory acidosis without compensation"));
        assert!(output.contains("3 panels: 1 normal, 1 respiratory, 1 metabolic"));
        assert!(output.contains("1 skipped"));
    }

    #[test]
    fn test_batch_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("panels.tsv");
        fs::write(&file, "pH\tpaCO2\thco3\tpaO2\tspO2\n7.50\t30\t24\t95\t98\n").unwrap();
        let app = App::new(Locale::English, dir.path());

        let args = BatchArgs {
            file,
            delimiter: '\t',
            json: true,
        };
        let output = run(&app, Command::Batch(args)).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(
            json[0]["primaryDisorder"]["kind"]["kind"],
            "respiratory_alkalosis"
        );
        assert_eq!(json[0]["tags"]["disorder"], "respiratory_alkalosis");
        assert_eq!(json[0]["tags"]["category"], "respiratory");
        assert_eq!(json[0]["tags"]["compensation"], "none");
    }

    #[test]
    fn test_batch_rejects_non_ascii_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Locale::English, dir.path());

        let args = BatchArgs {
            file: dir.path().join("panels.csv"),
            delimiter: '¦',
            json: false,
        };
        assert!(matches!(
            run(&app, Command::Batch(args)),
            Err(AppError::InvalidDelimiter('¦'))
        ));
    }

    #[test]
    fn test_batch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Locale::English, dir.path());

        let args = BatchArgs {
            file: dir.path().join("missing.csv"),
            delimiter: ',',
            json: false,
        };
        assert!(matches!(
            run(&app, Command::Batch(args)),
            Err(AppError::Panel(PanelError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_guide() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Locale::English, dir.path());

        let output = run(&app, Command::Guide).unwrap();
        assert!(!output.trim().is_empty());
    }
}
