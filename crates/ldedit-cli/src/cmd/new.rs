use anyhow::Result;

use super::{apply_assignments, emit_document, Setup};

pub async fn run(setup: &Setup, type_name: &str, set: &[String], out: Option<&str>) -> Result<()> {
    let mut session = setup.session()?;
    session.set_active_type(type_name)?;
    apply_assignments(&mut session, set)?;

    emit_document(&session, out, None).await
}
