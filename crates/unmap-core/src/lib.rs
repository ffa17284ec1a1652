pub mod config;
pub mod logging;

pub mod decode;
pub mod directive;
pub mod entrypoint;
pub mod error;
pub mod fetch;
pub mod materialize;
pub mod outdir;
pub mod pipeline;
pub mod sanitize;
