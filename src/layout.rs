//! The two storage layouts under test and their fill routines.
//!
//! Both produce the same logical dataset: record `i`, component `j` holds
//! `(i + j)` as a double. Only the memory layout differs.

/// Number of records in the reference run.
pub const RECORD_COUNT: usize = 10_000;

/// Components per record. Fixed for the inline layout by the array type.
pub const RECORD_WIDTH: usize = 3;

/// Fill the nested layout: an outer `Vec` of independently-allocated rows.
///
/// Each row starts empty and is resized to `width` before its components
/// are written, so the row length is enforced by the resize, not by the
/// type.
pub fn fill_nested(records: usize, width: usize) -> Vec<Vec<f64>> {
    let mut rows: Vec<Vec<f64>> = vec![Vec::new(); records];
    for (i, row) in rows.iter_mut().enumerate() {
        row.resize(width, 0.0);
        for j in 0..width {
            row[j] = (i + j) as f64;
        }
    }
    rows
}

/// Fill the inline layout: the outer allocation already holds every
/// fixed-width block, so the loop performs no per-record allocation.
pub fn fill_inline(records: usize) -> Vec<[f64; RECORD_WIDTH]> {
    let mut rows = vec![[0.0; RECORD_WIDTH]; records];
    for (i, row) in rows.iter_mut().enumerate() {
        for j in 0..RECORD_WIDTH {
            row[j] = (i + j) as f64;
        }
    }
    rows
}
