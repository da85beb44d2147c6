use std::fs::File;
use std::io::{self, BufWriter, Write};

use vocab_types::ChunkManifest;

use crate::{ChunkStore, PipelineError};

/// Concatenate the per-chunk exports, in manifest order, into one file.
/// Contents are copied verbatim, header rows included.
pub fn merge_exports(store: &ChunkStore, manifest: &ChunkManifest) -> Result<u64, PipelineError> {
    let out_path = store.merged_path();
    let out = File::create(&out_path).map_err(PipelineError::io(&out_path))?;
    let mut out = BufWriter::new(out);

    let mut written = 0;
    for id in &manifest.chunks {
        let path = store.export_path(*id);
        let mut input = File::open(&path).map_err(PipelineError::io(&path))?;
        written += io::copy(&mut input, &mut out).map_err(PipelineError::io(&out_path))?;
    }
    out.flush().map_err(PipelineError::io(&out_path))?;

    tracing::info!(
        "Merged {} exports into {}",
        manifest.len(),
        out_path.display()
    );
    Ok(written)
}
