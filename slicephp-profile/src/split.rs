//! Shell-style argument splitting.
//!
//! Used for the `options` and `slice` settings, which are written as a
//! single string but consumed as argument lists.

use thiserror::Error;

/// Error type for argument splitting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// A quoted argument was not closed.
    #[error("unterminated {quote} quote in `{input}'")]
    UnterminatedQuote {
        /// The opening quote character.
        quote: char,
        /// The full input.
        input: String,
    },
}

/// Splits a string into arguments.
///
/// Arguments are separated by unquoted whitespace. Single quotes preserve
/// their content literally; inside double quotes a backslash escapes `"`
/// and `\`; outside quotes a backslash escapes any character.
///
/// # Errors
/// Returns `SplitError::UnterminatedQuote` if a quote is left open.
pub fn split_args(input: &str) -> Result<Vec<String>, SplitError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            '\'' => {
                in_arg = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => return Err(unterminated('\'', input)),
                    }
                }
            }
            '"' => {
                in_arg = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.peek().copied() {
                            Some(next) if next == '"' || next == '\\' => {
                                current.push(next);
                                chars.next();
                            }
                            _ => current.push('\\'),
                        },
                        Some(c) => current.push(c),
                        None => return Err(unterminated('"', input)),
                    }
                }
            }
            '\\' => {
                in_arg = true;
                current.push(chars.next().unwrap_or('\\'));
            }
            c => {
                in_arg = true;
                current.push(c);
            }
        }
    }

    if in_arg {
        args.push(current);
    }
    Ok(args)
}

fn unterminated(quote: char, input: &str) -> SplitError {
    SplitError::UnterminatedQuote {
        quote,
        input: input.to_string(),
    }
}
