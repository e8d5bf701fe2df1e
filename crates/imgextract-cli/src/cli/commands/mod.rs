//! CLI command handlers, one per file.

mod checksum;
mod extract;
mod inspect;

pub use checksum::run_checksum;
pub use extract::run_extract;
pub use inspect::run_inspect;
