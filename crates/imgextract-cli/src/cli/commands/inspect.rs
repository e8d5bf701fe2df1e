//! Inspect command: decode the payload and describe it without writing.

use anyhow::Result;
use imgextract_core::extract::{inspect_image, ExtractOptions};
use std::io;

pub fn run_inspect(opts: &ExtractOptions) -> Result<()> {
    let inspection = inspect_image(opts, &mut io::stdout().lock())?;
    println!("Padding appended: {}", inspection.padding_added);
    println!("Decoded size: {} bytes", inspection.decoded_len);
    println!(
        "PNG signature: {}",
        if inspection.png_signature { "yes" } else { "no" }
    );
    Ok(())
}
