use anyhow::{anyhow, Result};
use ldedit_core::prelude::*;
use serde::Serialize;

use super::{import_file, require_valid, Setup, VerdictOut};
use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
struct ValidateOut {
    file: String,
    #[serde(rename = "type")]
    type_name: String,
    verdict: VerdictOut,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

pub async fn run(setup: &Setup, file: &str, type_name: Option<&str>) -> Result<()> {
    match type_name {
        Some(t) => against_type(setup, file, t).await,
        None => against_import(setup, file).await,
    }
}

/// Validate against the imported document's own type. A type the catalog
/// does not know fails, since the fallback document says nothing about the
/// file.
async fn against_import(setup: &Setup, file: &str) -> Result<()> {
    let mut session = setup.session()?;
    let report = import_file(&mut session, file).await?;

    report_verdict(file, session.active_type(), session.verdict(), report.warning.as_ref())?;

    if let Some(w @ ImportWarning::UnrecognizedType { .. }) = &report.warning {
        return Err(anyhow!("{file}: {w}"));
    }
    require_valid(session.verdict())
}

/// Validate the document exactly as found in the file against `type_name`.
async fn against_type(setup: &Setup, file: &str, type_name: &str) -> Result<()> {
    if !setup.catalog.contains(type_name) {
        return Err(LdError::unknown_type(type_name).into());
    }

    let raw = input::read_text(file, setup.config.limits.max_import_bytes).await?;
    let resolution = resolve_import_with_limit(&raw, setup.config.limits.max_import_bytes);
    let Some(document) = resolution.document else {
        let reason = resolution
            .warning
            .map(|w| w.to_string())
            .unwrap_or_else(|| "nothing imported".to_string());
        return Err(anyhow!("{file}: {reason}"));
    };

    let verdict = validate(&document, type_name, &setup.catalog);
    report_verdict(file, type_name, &verdict, None)?;
    require_valid(&verdict)
}

fn report_verdict(
    file: &str,
    type_name: &str,
    verdict: &ValidationVerdict,
    warning: Option<&ImportWarning>,
) -> Result<()> {
    let out = ValidateOut {
        file: file.to_string(),
        type_name: type_name.to_string(),
        verdict: verdict.into(),
        warning: warning.map(|w| w.to_string()),
    };
    output::emit(&out, |_| {
        output::print_verdict(&mut output::stdout(), verdict)
    })
}
