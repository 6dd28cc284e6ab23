pub mod args;
pub mod cleaner;
pub mod domain;
pub mod error;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use cleaner::{clean_all, read_domains, run, write_results};
pub use domain::{clean_domain, is_known_suffix, CleanOptions, KNOWN_SUFFIXES};
pub use error::CleanError;
pub use stats::{CleanReport, CleanStats};
