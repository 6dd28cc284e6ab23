use anyhow::Result;
use std::io::Write;
use tracing::error;

use domclean::{run, utils::setup_logging, Args};

fn main() -> Result<()> {
    let args = Args::parse_flags();
    setup_logging(args.verbose)?;

    let stdout = std::io::stdout();
    let mut console = stdout.lock();

    // I/O failures are reported, not propagated: the process still exits cleanly.
    if let Err(e) = run(&args, &mut console) {
        error!(action = "abort", component = "cleaner", error = %e, "Domain cleaning failed");
        writeln!(console, "{}", e)?;
    }

    Ok(())
}
