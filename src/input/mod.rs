//! Input loading
//!
//! File-to-domain glue for boards and dictionaries, with abort-on-error
//! diagnostics.

pub mod loader;

pub use loader::{LoadError, load_board, load_dictionary, parse_dictionary};
