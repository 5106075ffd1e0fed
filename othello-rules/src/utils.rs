//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

const COLUMN_HEADER: &str = "   A B C D E F G H";

/// Format 64 characters, given in row-major order, into a labelled grid.
/// Fails if `pieces` does not yield exactly 64 items.
pub fn format_grid<T: Iterator<Item = char>>(mut pieces: T, f: &mut Formatter) -> fmt::Result {
    f.write_str(COLUMN_HEADER)?;

    for row in 1..=EDGE_LENGTH {
        write!(f, "\n {} ", row)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, "{} ", pieces.next().ok_or(fmt::Error)?)?;
        }
    }

    if pieces.next().is_some() {
        return Err(fmt::Error);
    }
    Ok(())
}
