use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::args::{Args, USAGE};
use crate::domain::CleanOptions;
use crate::error::CleanError;
use crate::stats::{CleanReport, CleanStats};
use crate::utils::format_number;

/// Reads every line of `path` into memory.
///
/// `\n` and `\r\n` terminators are removed, including a lone `\r` ending the last line.
/// Nothing else is trimmed. Bytes that are not valid UTF-8 become U+FFFD instead of
/// failing the read.
pub fn read_domains(path: &Path) -> Result<Vec<String>, CleanError> {
    let start_time = Instant::now();
    info!(action = "start", component = "input_reader", file_path = ?path, "Reading input file");

    let file = File::open(path).map_err(|source| CleanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).split(b'\n') {
        let mut line = line.map_err(|source| CleanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        lines.push(String::from_utf8_lossy(&line).into_owned());
    }

    info!(
        action = "complete",
        component = "input_reader",
        line_count = lines.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Input file read"
    );
    Ok(lines)
}

/// Cleans each line, then deduplicates and sorts the results.
pub fn clean_all<S: AsRef<str>>(lines: &[S], options: &CleanOptions) -> CleanReport {
    let mut unique = BTreeSet::new();

    for line in lines {
        let original = line.as_ref();
        let cleaned = options.clean(original);
        debug!(component = "cleaner", original = original, cleaned = %cleaned, "Cleaned domain");
        unique.insert(cleaned);
    }

    let stats = CleanStats {
        lines_read: lines.len(),
        unique_domains: unique.len(),
        duplicates_dropped: lines.len() - unique.len(),
    };

    CleanReport {
        domains: unique.into_iter().collect(),
        stats,
    }
}

/// Writes `domains` to `file` one per line and, when `echo` is set, to `console`.
///
/// `file` pairs the writer with the path used in error messages.
pub fn write_results<C, F>(
    domains: &[String],
    console: &mut C,
    mut file: Option<(&Path, &mut F)>,
    echo: bool,
) -> Result<(), CleanError>
where
    C: Write + ?Sized,
    F: Write + ?Sized,
{
    for domain in domains {
        if let Some((path, writer)) = file.as_mut() {
            writeln!(writer, "{}", domain).map_err(|source| CleanError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        if echo {
            writeln!(console, "Cleaned: {}", domain).map_err(CleanError::Console)?;
        }
    }

    if let Some((path, writer)) = file.as_mut() {
        writer.flush().map_err(|source| CleanError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    console.flush().map_err(CleanError::Console)?;

    Ok(())
}

/// Runs the full pipeline for `args`, printing to `console`.
///
/// Returns `Ok(None)` when no input file was given; the usage line is printed instead.
pub fn run<C: Write + ?Sized>(args: &Args, console: &mut C) -> Result<Option<CleanReport>, CleanError> {
    let Some(input_path) = args.file.as_deref() else {
        writeln!(console, "{}", USAGE).map_err(CleanError::Console)?;
        return Ok(None);
    };

    let total_start_time = Instant::now();
    let options = args.clean_options();
    info!(
        action = "start",
        component = "cleaner",
        add_on = ?options.add_on,
        remove_count = options.remove_count,
        force = options.force,
        "Starting domain cleaning"
    );

    let lines = read_domains(input_path)?;
    let report = clean_all(&lines, &options);

    let echo = args.verbose || args.output.is_none();
    match args.output.as_deref() {
        Some(output_path) => {
            let file = File::create(output_path).map_err(|source| CleanError::Create {
                path: output_path.to_path_buf(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            write_results(&report.domains, console, Some((output_path, &mut writer)), echo)?;
            info!(action = "write", component = "output_writer", file_path = ?output_path, domain_count = report.domains.len(), "Wrote output file");
        }
        None => write_results::<C, File>(&report.domains, console, None, echo)?,
    }

    info!(
        action = "complete",
        component = "cleaner",
        lines_read = %format_number(report.stats.lines_read),
        unique_domains = %format_number(report.stats.unique_domains),
        duplicates_dropped = %format_number(report.stats.duplicates_dropped),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Domain cleaning completed"
    );

    Ok(Some(report))
}
