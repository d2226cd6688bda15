use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ldedit_core::prelude::{suggested_filename, to_pretty_json, Document};
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Serialize)]
pub struct WrittenFile {
    pub path: String,
    pub bytes: usize,
    pub sha256: String,
}

/// Write `<type>.jsonld` into `out_dir`, creating it if needed.
pub async fn write_download<P: AsRef<Path>>(out_dir: P, document: &Document) -> Result<WrittenFile> {
    let out_dir = out_dir.as_ref();
    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("cannot create {}", out_dir.display()))?;

    write_document(out_dir.join(suggested_filename(document)), document).await
}

/// Write the pretty JSON of `document` to `path`, followed by a newline.
pub async fn write_document(path: PathBuf, document: &Document) -> Result<WrittenFile> {
    let mut body = to_pretty_json(document);
    body.push('\n');

    tokio::fs::write(&path, body.as_bytes())
        .await
        .with_context(|| format!("cannot write {}", path.display()))?;

    Ok(WrittenFile {
        path: path.display().to_string(),
        bytes: body.len(),
        sha256: sha256_hex(body.as_bytes()),
    })
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}
