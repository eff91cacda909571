//! Single-shot benchmark runner.
//!
//! Fills the nested layout, then the inline layout, and prints one
//! `<label>\t<seconds>` line per variant to stdout. Diagnostics go to
//! stderr through the logger (enable with `RUST_LOG=info`).
//!
//! Usage:
//!   cargo run --release

use anyhow::{Context, Result};
use layout_bench::layout::{fill_inline, fill_nested, RECORD_COUNT, RECORD_WIDTH};
use layout_bench::report::print_report;
use layout_bench::trial::time_trial;
use std::io;

fn main() -> Result<()> {
    env_logger::init();

    log::info!(
        "Timing coordinate storage layouts: {} records x {} components",
        RECORD_COUNT,
        RECORD_WIDTH
    );

    let nested = time_trial("nested vec", || fill_nested(RECORD_COUNT, RECORD_WIDTH));
    log::info!("nested vec done in {:.6}s", nested.elapsed_secs());

    let inline = time_trial("inline array", || fill_inline(RECORD_COUNT));
    log::info!("inline array done in {:.6}s", inline.elapsed_secs());

    let mut stdout = io::stdout().lock();
    print_report(&mut stdout, &[nested, inline]).context("write benchmark report")?;

    Ok(())
}
