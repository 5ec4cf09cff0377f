//! Delimited-text parsing and rendering for matrices.

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;

/// Standard delimiter between columns.
pub const STD_COL_DELIMITER: char = ' ';
/// Standard delimiter between rows.
pub const STD_ROW_DELIMITER: char = ';';

/// Parses matrices from delimited text and renders them back.
///
/// The column count of the first row sets the expected width; any later row
/// with a different element count is rejected. Trailing delimiters are
/// ignored, so `"1;2;3;"` parses the same as `"1;2;3"`.
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// let codec = TextCodec::new(',', '|');
/// let m = codec.parse("0,1|2,3").expect("well-formed text");
/// assert_eq!(m.size(), (2, 2));
/// assert_eq!(codec.render(&m), "0,1|2,3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCodec {
    col_delim: char,
    row_delim: char,
}

impl Default for TextCodec {
    fn default() -> Self {
        Self::new(STD_COL_DELIMITER, STD_ROW_DELIMITER)
    }
}

impl TextCodec {
    /// Creates a codec with the given column and row delimiters.
    #[must_use]
    pub fn new(col_delim: char, row_delim: char) -> Self {
        Self {
            col_delim,
            row_delim,
        }
    }

    /// Parses a matrix from delimited text.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::Parse`] on empty input, on a row whose element
    /// count differs from the first row's, or on an unparseable element.
    pub fn parse(&self, text: &str) -> Result<Matrix> {
        if text.is_empty() {
            return Err(MatrizError::Parse {
                message: "empty input".to_string(),
            });
        }

        let rows = split_ignoring_trailing(text, self.row_delim);
        let cols = split_ignoring_trailing(rows[0], self.col_delim).len();

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let elements = split_ignoring_trailing(row, self.col_delim);
            if elements.len() != cols {
                return Err(MatrizError::Parse {
                    message: format!(
                        "mismatching columns: {cols} in first row, {} in row {i}",
                        elements.len()
                    ),
                });
            }
            for element in elements {
                let value = element.parse::<f32>().map_err(|_| MatrizError::Parse {
                    message: format!("invalid element '{element}' in row {i}"),
                })?;
                data.push(value);
            }
        }

        Matrix::from_vec(rows.len(), cols, data)
    }

    /// Renders a matrix row-major with this codec's delimiters, without a
    /// trailing delimiter on the last element or row.
    #[must_use]
    pub fn render(&self, matrix: &Matrix) -> String {
        matrix.to_delimited(self.col_delim, self.row_delim)
    }
}

// Split on the delimiter with trailing empty segments dropped.
fn split_ignoring_trailing(text: &str, delim: char) -> Vec<&str> {
    let mut segments: Vec<&str> = text.split(delim).collect();
    while segments.len() > 1 && segments.last() == Some(&"") {
        segments.pop();
    }
    segments
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
