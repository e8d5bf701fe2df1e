//! Extract command: run the pipeline and save the image.

use anyhow::Result;
use imgextract_core::extract::{extract_image, ExtractOptions};
use std::io;

pub fn run_extract(opts: &ExtractOptions) -> Result<()> {
    tracing::info!(
        "extract input={} output={}",
        opts.input.display(),
        opts.output.display()
    );
    let report = extract_image(opts, &mut io::stdout().lock())?;
    println!("Image extracted and saved to {}", report.output.display());
    Ok(())
}
