use anyhow::{anyhow, Result};
use ldedit_core::prelude::*;

use super::{apply_assignments, emit_document, import_file, Setup};
use crate::io::input;

pub async fn run(
    setup: &Setup,
    file: &str,
    set: &[String],
    unset: &[String],
    raw: Option<&str>,
    out: Option<&str>,
) -> Result<()> {
    let mut session = setup.session()?;
    let report = import_file(&mut session, file).await?;

    if let Some(path) = raw {
        let text = input::read_text(path, session.config().limits.max_raw_text_bytes).await?;
        if let RawTextOutcome::Rejected { reason } = session.edit_raw_text(text) {
            return Err(anyhow!("{path}: {reason}"));
        }
    }

    for key in unset {
        session.set_property_value(key, "");
    }
    apply_assignments(&mut session, set)?;

    emit_document(&session, out, report.warning.as_ref()).await
}
