//! Raw binary matrix dumps for offline inspection.
//!
//! Layout (little-endian): `i32 rows`, `i32 cols`, then `rows * cols` `f64`
//! values in row-major order.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use ndarray::Array2;

use crate::error::{DrtError, Result};

fn dim_to_i32(what: &str, value: usize) -> Result<i32> {
    i32::try_from(value).map_err(|_| DrtError::InvalidDump(format!("{what} {value} does not fit in i32")))
}

pub fn write_matrix<W: Write>(mut w: W, a: &Array2<f64>) -> Result<()> {
    let (rows, cols) = a.dim();
    w.write_all(&dim_to_i32("rows", rows)?.to_le_bytes())?;
    w.write_all(&dim_to_i32("cols", cols)?.to_le_bytes())?;
    // iter() walks logical row-major order regardless of memory layout
    for v in a.iter() {
        w.write_all(&v.to_le_bytes())?;
    }
    w.flush()?;
    Ok(())
}

fn read_exact_or_invalid<R: Read>(r: &mut R, buf: &mut [u8], what: &str) -> Result<()> {
    r.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => DrtError::InvalidDump(format!("truncated {what}")),
        _ => DrtError::Io(e),
    })
}

pub fn read_matrix<R: Read>(mut r: R) -> Result<Array2<f64>> {
    let mut header = [0u8; 4];
    read_exact_or_invalid(&mut r, &mut header, "header")?;
    let rows = i32::from_le_bytes(header);
    read_exact_or_invalid(&mut r, &mut header, "header")?;
    let cols = i32::from_le_bytes(header);
    if rows < 0 || cols < 0 {
        return Err(DrtError::InvalidDump(format!("negative shape {rows}x{cols}")));
    }
    let (rows, cols) = (rows as usize, cols as usize);
    let len = rows
        .checked_mul(cols)
        .ok_or_else(|| DrtError::InvalidDump(format!("shape {rows}x{cols} overflows")))?;

    // the header is untrusted; grow as the payload actually arrives
    let mut data = Vec::with_capacity(len.min(1 << 16));
    let mut value = [0u8; 8];
    for _ in 0..len {
        read_exact_or_invalid(&mut r, &mut value, "payload")?;
        data.push(f64::from_le_bytes(value));
    }
    Array2::from_shape_vec((rows, cols), data).map_err(|e| DrtError::InvalidDump(e.to_string()))
}

pub fn save_matrix(path: &Path, a: &Array2<f64>) -> Result<()> {
    let file = File::create(path)?;
    write_matrix(BufWriter::new(file), a)
}

pub fn load_matrix(path: &Path) -> Result<Array2<f64>> {
    let file = File::open(path)?;
    read_matrix(BufReader::new(file))
}
