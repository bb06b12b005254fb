//! Line-oriented parser for plain-text linear systems.
//!
//! Each equation occupies one line:
//!
//! ```text
//! # 2x1 + x2 = 5
//! 2  1 | 5
//! 1, 3 | 6   # commas are accepted too
//! ```
//!
//! Lines that are blank or start with `#` or `*` are skipped, and anything
//! after a `#` is dropped.

mod entries;

pub use entries::parse_entries;

use std::path::Path;

use seidel_core::LinearSystem;

use crate::error::{Error, Result};

/// Parse a plain-text system.
pub fn parse_system(input: &str) -> Result<LinearSystem> {
    Parser::new(input).parse()
}

/// Read and parse a plain-text system file.
pub fn parse_system_file(path: impl AsRef<Path>) -> Result<LinearSystem> {
    let content = std::fs::read_to_string(path)?;
    parse_system(&content)
}

/// Parse a single numeric token, rejecting NaN and infinities.
pub(crate) fn parse_number(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

struct Parser<'a> {
    input: &'a str,
    rows: Vec<Vec<f64>>,
    rhs: Vec<f64>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            rows: Vec::new(),
            rhs: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<LinearSystem> {
        for (idx, raw) in self.input.lines().enumerate() {
            let line = idx + 1;
            let content = strip_comment(raw).trim();
            if content.is_empty() || content.starts_with('*') {
                continue;
            }
            self.parse_equation(content, line)?;
        }

        if self.rows.is_empty() {
            return Err(Error::Empty);
        }

        Ok(LinearSystem::from_rows(&self.rows, &self.rhs)?)
    }

    fn parse_equation(&mut self, content: &str, line: usize) -> Result<()> {
        let mut parts = content.split('|');
        let lhs = parts.next().unwrap_or_default();
        let rhs = parts.next().ok_or(Error::MissingRhs { line })?;
        if parts.next().is_some() {
            return Err(Error::ParseError {
                line,
                message: "expected a single '|'".to_string(),
            });
        }

        let coefficients = tokens(lhs)
            .map(|tok| expect_number(tok, line))
            .collect::<Result<Vec<_>>>()?;
        if coefficients.is_empty() {
            return Err(Error::ParseError {
                line,
                message: "expected coefficients before '|'".to_string(),
            });
        }

        if let Some(first) = self.rows.first() {
            if first.len() != coefficients.len() {
                return Err(Error::RowLength {
                    line,
                    expected: first.len(),
                    actual: coefficients.len(),
                });
            }
        }

        let rhs_tokens: Vec<&str> = tokens(rhs).collect();
        let value = match rhs_tokens.as_slice() {
            [tok] => expect_number(tok, line)?,
            [] => {
                return Err(Error::ParseError {
                    line,
                    message: "expected a right-hand side value after '|'".to_string(),
                });
            }
            _ => {
                return Err(Error::ParseError {
                    line,
                    message: format!(
                        "expected one right-hand side value, found {}",
                        rhs_tokens.len()
                    ),
                });
            }
        };

        self.rows.push(coefficients);
        self.rhs.push(value);
        Ok(())
    }
}

fn strip_comment(raw: &str) -> &str {
    match raw.find('#') {
        Some(pos) => &raw[..pos],
        None => raw,
    }
}

fn tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

fn expect_number(token: &str, line: usize) -> Result<f64> {
    parse_number(token).ok_or_else(|| Error::ParseError {
        line,
        message: format!("invalid number '{}'", token),
    })
}
