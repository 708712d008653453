//! Document I/O for proofs

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Load a PDF document (used to inspect written proofs)
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let bytes = tokio::fs::read(path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Serialize a proof on the blocking pool and write it to `path`
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ImposeError>(writer)
    })
    .await??;
    log::info!("Writing proof ({} bytes) to {}", bytes.len(), path.display());
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}
