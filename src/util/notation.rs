//! Small text formats used to write down positions, mostly in tests.
use itertools::Itertools;

/// Error returned when parsing a textual board fails.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid board notation '{input}': {reason}")]
pub struct InvalidNotation {
    pub input: String,
    pub reason: &'static str,
}

impl InvalidNotation {
    pub fn new(input: impl Into<String>, reason: &'static str) -> Self {
        InvalidNotation {
            input: input.into(),
            reason,
        }
    }
}

/// Parse `rows` top to bottom into a row-major vector of cells, mapping each character with `tile`.
/// Whitespace inside a row is ignored so boards can be laid out with spaces.
pub fn parse_rows<T>(
    rows: &[&str],
    row_count: usize,
    col_count: usize,
    tile: impl Fn(char) -> Option<T>,
) -> Result<Vec<T>, InvalidNotation> {
    let input = || rows.iter().join("/");

    if rows.len() != row_count {
        return Err(InvalidNotation::new(input(), "wrong number of rows"));
    }

    let mut cells = Vec::with_capacity(row_count * col_count);
    for row in rows {
        let before = cells.len();
        for c in row.chars().filter(|c| !c.is_whitespace()) {
            match tile(c) {
                Some(t) => cells.push(t),
                None => return Err(InvalidNotation::new(input(), "invalid character")),
            }
        }
        if cells.len() - before != col_count {
            return Err(InvalidNotation::new(input(), "wrong number of columns"));
        }
    }

    Ok(cells)
}
