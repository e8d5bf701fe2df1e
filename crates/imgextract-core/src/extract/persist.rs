//! Write decoded bytes to the destination file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::ExtractError;

/// Create or truncate `path` and write `bytes`. Parent directories must exist.
/// The handle is dropped on every return path.
pub fn persist(path: &Path, bytes: &[u8]) -> Result<(), ExtractError> {
    let write_err = |source| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut f = File::create(path).map_err(write_err)?;
    f.write_all(bytes).map_err(write_err)?;
    f.flush().map_err(write_err)?;
    Ok(())
}
