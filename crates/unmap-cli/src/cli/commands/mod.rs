//! CLI command handlers. Each command is in its own file for clarity.

mod extract;
mod sources;
mod unpack;

pub use extract::run_extract;
pub use sources::run_sources;
pub use unpack::run_unpack;
