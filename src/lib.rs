//! Coordinate Storage Latency Benchmark
//!
//! Times two ways of holding 10,000 coordinate records of 3 doubles each:
//! - **Nested vec**: `Vec<Vec<f64>>`, every record is its own heap allocation
//! - **Inline array**: `Vec<[f64; 3]>`, records are fixed-width blocks inside
//!   the outer allocation
//!
//! Run the single-shot runner: `cargo run --release`
//! Run benchmarks: `cargo bench`
//! Run tests: `cargo test`

pub mod layout;
pub mod report;
pub mod trial;
