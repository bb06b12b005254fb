//! Parsing of raw per-cell form input.

use seidel_core::LinearSystem;

use super::parse_number;
use crate::error::{Error, Result};

/// Parse a matrix and right-hand side given as raw cell strings.
///
/// Cells are trimmed before parsing. The first cell that is not a finite
/// number is reported with its position, scanning row by row and checking
/// each row's right-hand side after its coefficients.
pub fn parse_entries(rows: &[Vec<&str>], rhs: &[&str]) -> Result<LinearSystem> {
    if rows.is_empty() {
        return Err(Error::Empty);
    }

    let mut a = Vec::with_capacity(rows.len());
    let mut b = Vec::with_capacity(rhs.len());

    for (i, row) in rows.iter().enumerate() {
        let parsed = row
            .iter()
            .enumerate()
            .map(|(j, cell)| {
                parse_number(cell).ok_or_else(|| Error::InvalidCoefficient {
                    row: i,
                    col: j,
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        a.push(parsed);

        if let Some(cell) = rhs.get(i) {
            let value = parse_number(cell).ok_or_else(|| Error::InvalidRhs {
                row: i,
                value: cell.to_string(),
            })?;
            b.push(value);
        }
    }

    // Extra right-hand side cells still have to be numbers
    for (i, cell) in rhs.iter().enumerate().skip(rows.len()) {
        let value = parse_number(cell).ok_or_else(|| Error::InvalidRhs {
            row: i,
            value: cell.to_string(),
        })?;
        b.push(value);
    }

    Ok(LinearSystem::from_rows(&a, &b)?)
}
