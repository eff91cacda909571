//! Report module: emits one tab-separated line per trial.

use crate::trial::TrialResult;
use std::io::{self, Write};

/// Render a single `<label>\t<seconds>` line, without a trailing newline.
pub fn format_line(result: &TrialResult) -> String {
    format!("{}\t{:.6}", result.label, result.elapsed_secs())
}

/// Write one line per trial to the given sink.
pub fn print_report(out: &mut impl Write, results: &[TrialResult]) -> io::Result<()> {
    for result in results {
        writeln!(out, "{}", format_line(result))?;
    }
    Ok(())
}
