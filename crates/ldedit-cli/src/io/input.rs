use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ldedit_core::prelude::Catalog;

/// Read a whole text file, refusing anything over `max_bytes`.
///
/// Bytes that are not UTF-8 are replaced with U+FFFD, so pages in legacy
/// encodings still import.
pub async fn read_text<P: AsRef<Path>>(path: P, max_bytes: usize) -> Result<String> {
    let path = path.as_ref();
    let meta = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("cannot stat {}", path.display()))?;
    if meta.len() > max_bytes as u64 {
        return Err(anyhow!(
            "{} is too large ({} bytes > limit {max_bytes})",
            path.display(),
            meta.len()
        ));
    }

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(decode_lossy(bytes))
}

fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            let valid_up_to = e.utf8_error().valid_up_to();
            tracing::debug!(valid_up_to, "input is not UTF-8; decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Built-in catalog, or the one stored at `path`.
pub async fn load_catalog(path: Option<&str>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("cannot read catalog {path}"))?;
    let catalog = Catalog::from_json_str(&raw).with_context(|| format!("invalid catalog {path}"))?;
    tracing::debug!(path, types = catalog.len(), "loaded catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passes_through() {
        assert_eq!(decode_lossy("café".as_bytes().to_vec()), "café");
    }

    #[test]
    fn latin1_is_replaced_not_rejected() {
        assert_eq!(decode_lossy(b"Caf\xe9 {}".to_vec()), "Caf\u{fffd} {}");
    }
}
