//! Command-line surface: lenient argument parsing and usage text.
//!
//! Parsing never fails. Hook scripts pass whatever they have, so unknown
//! flags are skipped and a flag missing its value keeps the default.

pub mod args;
pub mod usage;

pub use args::parse_args;
pub use usage::usage;
