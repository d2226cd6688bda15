use anyhow::{anyhow, Context, Result};
use ldedit_core::prelude::*;
use serde::Serialize;

use crate::args::{Cli, Command};
use crate::io::{export, input};
use crate::output;

mod edit;
mod export_cmd;
mod new;
mod types;
mod validate;

pub async fn dispatch(cli: Cli) -> Result<()> {
    let setup = Setup::from_cli(&cli).await?;
    match cli.command {
        Command::Types { name } => types::run(&setup, name.as_deref()),
        Command::New { type_name, set, out } => new::run(&setup, &type_name, &set, out.as_deref()).await,
        Command::Validate { file, type_name } => validate::run(&setup, &file, type_name.as_deref()).await,
        Command::Edit { file, set, unset, raw, out } => {
            edit::run(&setup, &file, &set, &unset, raw.as_deref(), out.as_deref()).await
        }
        Command::Export { file, format, out_dir } => export_cmd::run(&setup, &file, format, &out_dir).await,
    }
}

/// Catalog and editor config resolved from global flags.
pub struct Setup {
    pub catalog: Catalog,
    pub config: EditorConfig,
}

impl Setup {
    async fn from_cli(cli: &Cli) -> Result<Self> {
        let catalog = input::load_catalog(cli.catalog.as_deref()).await?;

        let mut config = EditorConfig::default();
        if let Some(t) = &cli.default_type {
            config = config.with_default_type(t.as_str());
        }
        if let Some(n) = cli.max_import_bytes {
            config.limits.max_import_bytes = n;
        }
        validate_config_for(&config, &catalog).context("invalid editor configuration")?;

        Ok(Self { catalog, config })
    }

    pub fn session(&self) -> Result<EditorSession<'_>> {
        Ok(EditorSession::new(&self.catalog, self.config.clone())?)
    }
}

/// Read `file` and import it into `session`. Fails when nothing was adopted.
pub async fn import_file(session: &mut EditorSession<'_>, file: &str) -> Result<ImportReport> {
    let raw = input::read_text(file, session.config().limits.max_import_bytes).await?;
    let report = session.import_text(&raw);

    if let Some(w) = &report.warning {
        if !output::is_json() {
            output::print_warning(w);
        }
    }
    if !report.applied {
        let reason = report
            .warning
            .as_ref()
            .map(|w| w.to_string())
            .unwrap_or_else(|| "nothing imported".to_string());
        return Err(anyhow!("{file}: {reason}"));
    }
    Ok(report)
}

/// Split a `key=value` form edit.
pub fn parse_assignment(s: &str) -> Result<(&str, &str)> {
    match s.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() => Ok((k.trim(), v)),
        _ => Err(anyhow!("expected KEY=VALUE, got {s:?}")),
    }
}

pub fn apply_assignments(session: &mut EditorSession<'_>, set: &[String]) -> Result<()> {
    for s in set {
        let (key, value) = parse_assignment(s)?;
        session.set_property_value(key, value);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct VerdictOut {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl From<&ValidationVerdict> for VerdictOut {
    fn from(v: &ValidationVerdict) -> Self {
        Self {
            valid: v.is_valid,
            errors: v.messages(),
        }
    }
}

/// Turn an invalid verdict into a non-zero exit.
pub fn require_valid(verdict: &ValidationVerdict) -> Result<()> {
    if verdict.is_valid {
        Ok(())
    } else {
        Err(anyhow!("document is invalid: {}", verdict.summary()))
    }
}

#[derive(Debug, Serialize)]
struct DocumentOut<'a> {
    #[serde(rename = "type")]
    type_name: &'a str,
    document: &'a Document,
    verdict: VerdictOut,
    #[serde(skip_serializing_if = "Option::is_none")]
    written: Option<export::WrittenFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

/// Print or write the session's document, then report its verdict.
pub async fn emit_document(
    session: &EditorSession<'_>,
    out: Option<&str>,
    warning: Option<&ImportWarning>,
) -> Result<()> {
    let written = match out {
        Some(path) => Some(export::write_document(path.into(), session.document()).await?),
        None => None,
    };

    let report = DocumentOut {
        type_name: session.active_type(),
        document: session.document(),
        verdict: session.verdict().into(),
        written,
        warning: warning.map(|w| w.to_string()),
    };

    output::emit(&report, |r| {
        match &r.written {
            Some(w) => println!("wrote {} ({} bytes, sha256 {})", w.path, w.bytes, w.sha256),
            None => println!("{}", to_pretty_json(session.document())),
        }
        // Keep stdout pure JSON-LD when the document goes there.
        if r.written.is_some() {
            output::print_verdict(&mut output::stdout(), session.verdict())
        } else {
            output::print_verdict(&mut output::stderr(), session.verdict())
        }
    })?;

    require_valid(session.verdict())
}
