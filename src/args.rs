use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::domain::CleanOptions;

pub const USAGE: &str = "Usage: domclean -file=<filename> [-add=<string>] [-output=<outputfile>] [-removecount=<count>] [-force=true] [-verbose=true]";

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "domclean",
    about = "Deduplicate and normalize a list of domains or subdomains",
    version,
    long_about = None,
    args_override_self = true
)]
pub struct Args {
    /// File containing domains or subdomains, one per line
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// String to add to the cleaned domain if missing
    #[arg(long)]
    pub add: Option<String>,

    /// File to write only the cleaned domains
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Number of labels to remove from the end (recommended: 2)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub removecount: i64,

    /// Remove labels even if they look like valid TLDs
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub force: bool,

    /// Print cleaned domains to the console even when writing an output file
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub verbose: bool,
}

impl Args {
    /// Parses the process arguments, accepting `-name` as well as `--name`.
    pub fn parse_flags() -> Self {
        Self::parse_from(normalize_flags(std::env::args_os()))
    }

    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions {
            add_on: self.add.clone().filter(|s| !s.is_empty()),
            remove_count: self.removecount,
            force: self.force,
        }
    }
}

/// Rewrites single-dash long flags (`-file=x`) into the `--file=x` form clap expects.
///
/// The program name, double-dash flags, single-character flags, negative numbers
/// and everything after a bare `--` pass through unchanged.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut rest_is_literal = false;

    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || rest_is_literal {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                rest_is_literal = true;
                return arg;
            }
            if is_single_dash_long(text) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(body) = arg.strip_prefix('-') else {
        return false;
    };
    if body.starts_with('-') {
        return false;
    }
    let name = body.split('=').next().unwrap_or_default();
    name.len() > 1 && name.chars().all(|c| c.is_ascii_alphabetic())
}
