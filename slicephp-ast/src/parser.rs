//! Parser contract.
//!
//! The Slice preprocessor and parser live outside this workspace; they are
//! reached through [`IdlParser`]. [`JsonUnitParser`] is a reference
//! implementation that loads pre-parsed trees serialized as JSON arrays of
//! [`Definition`] nodes.

use crate::args::{PreprocessorOptions, SliceArgs};
use crate::error::ParseError;
use crate::types::Definition;
use crate::unit::{BuiltinSet, Unit, UnitOptions};
use std::path::{Path, PathBuf};

/// A Slice preprocessor and parser.
pub trait IdlParser {
    /// Preprocesses and parses one file, adding its definitions to `unit`.
    ///
    /// # Errors
    /// Returns `ParseError` if the file is missing or fails to preprocess or
    /// parse.
    fn parse_file(
        &self,
        unit: &mut Unit,
        path: &Path,
        options: &PreprocessorOptions,
    ) -> Result<(), ParseError>;

    /// Releases a parse tree produced by this parser.
    ///
    /// # Errors
    /// Returns `ParseError::Release` if the tree could not be destroyed.
    fn release(&self, unit: Unit) -> Result<(), ParseError> {
        drop(unit);
        Ok(())
    }
}

/// Parses every file of a `slice` argument list into one unit.
///
/// Files are parsed in order; the first failure aborts the whole parse and
/// the partial unit is handed back to [`IdlParser::release`].
///
/// # Errors
/// Returns the error of the first file that fails.
pub fn parse_slice<P: IdlParser + ?Sized>(
    parser: &P,
    args: &SliceArgs,
) -> Result<Unit, ParseError> {
    let mut unit = Unit::new(UnitOptions {
        case_sensitive: args.options.case_sensitive,
        builtins: BuiltinSet::Full,
    });

    for file in &args.files {
        tracing::debug!(
            "parsing {} with preprocessor args '{}'",
            file.display(),
            args.options.command_line().trim_start()
        );
        if let Err(err) = parser.parse_file(&mut unit, file, &args.options) {
            if let Err(release) = parser.release(unit) {
                tracing::error!("{}", release);
            }
            return Err(err);
        }
    }

    Ok(unit)
}

/// Reference parser reading JSON-serialized parse trees.
///
/// Relative paths that do not exist are searched for in the `-I`
/// directories, in order. `-D` and `-U` have no effect on a pre-parsed tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonUnitParser;

impl JsonUnitParser {
    /// Creates a new JSON parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn resolve(path: &Path, options: &PreprocessorOptions) -> Result<PathBuf, ParseError> {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        if path.is_relative() {
            for dir in options.include_dirs() {
                let candidate = dir.join(path);
                if candidate.is_file() {
                    return Ok(candidate);
                }
            }
        }
        Err(ParseError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

impl IdlParser for JsonUnitParser {
    fn parse_file(
        &self,
        unit: &mut Unit,
        path: &Path,
        options: &PreprocessorOptions,
    ) -> Result<(), ParseError> {
        let resolved = Self::resolve(path, options)?;
        let text = std::fs::read_to_string(&resolved).map_err(|source| ParseError::Io {
            path: resolved.clone(),
            source,
        })?;
        let definitions: Vec<Definition> =
            serde_json::from_str(&text).map_err(|source| ParseError::Json {
                path: resolved.clone(),
                source,
            })?;
        unit.extend(definitions);
        Ok(())
    }
}
