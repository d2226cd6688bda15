use anyhow::Result;
use ldedit_core::prelude::*;
use serde::Serialize;

use super::{import_file, Setup};
use crate::args::ExportFormat;
use crate::io::export;
use crate::output;

#[derive(Debug, Serialize)]
struct SnippetOut {
    mime_type: &'static str,
    snippet: String,
}

/// Export never looks at the verdict.
pub async fn run(setup: &Setup, file: &str, format: ExportFormat, out_dir: &str) -> Result<()> {
    let mut session = setup.session()?;
    import_file(&mut session, file).await?;

    match format {
        ExportFormat::Jsonld => {
            let written = export::write_download(out_dir, session.document()).await?;
            tracing::debug!(path = %written.path, bytes = written.bytes, "exported document");
            output::emit(&written, |w| {
                println!("wrote {} ({} bytes, sha256 {})", w.path, w.bytes, w.sha256);
                Ok(())
            })
        }
        ExportFormat::Script => {
            let out = SnippetOut {
                mime_type: EXPORT_MIME_TYPE,
                snippet: to_script_tag(session.document()),
            };
            output::emit(&out, |o| {
                println!("{}", o.snippet);
                Ok(())
            })
        }
    }
}
