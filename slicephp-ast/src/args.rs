//! Slice argument handling.
//!
//! A profile's `slice` setting is an argument list mixing preprocessor
//! flags and file names, e.g. `-I/usr/share/slice -DDEBUG Hello.ice`.

use crate::error::ParseError;
use std::path::PathBuf;

/// Options forwarded to the preprocessor and parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreprocessorOptions {
    /// `-I`, `-D` and `-U` arguments, in order.
    pub cpp_args: Vec<String>,
    /// Whether the parser should treat identifiers case-sensitively.
    pub case_sensitive: bool,
}

impl PreprocessorOptions {
    /// Renders the preprocessor arguments as a single command-line string.
    ///
    /// Arguments containing spaces are single-quoted.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut out = String::new();
        for arg in &self.cpp_args {
            out.push(' ');
            if arg.contains(' ') {
                out.push('\'');
                out.push_str(arg);
                out.push('\'');
            } else {
                out.push_str(arg);
            }
        }
        out
    }

    /// Iterates over the include directories given with `-I`.
    pub fn include_dirs(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.cpp_args
            .iter()
            .filter_map(|arg| arg.strip_prefix("-I"))
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
    }
}

/// A parsed `slice` argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceArgs {
    /// Preprocessor and parser options.
    pub options: PreprocessorOptions,
    /// Slice files in the order given.
    pub files: Vec<PathBuf>,
}

impl SliceArgs {
    /// Classifies already tokenized arguments.
    ///
    /// # Errors
    /// Returns `ParseError::UnknownOption` for an unrecognized `-` option and
    /// `ParseError::NoFiles` if no file names remain.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, ParseError> {
        let mut parsed = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            if arg.starts_with("-I") || arg.starts_with("-D") || arg.starts_with("-U") {
                parsed.options.cpp_args.push(arg.to_string());
            } else if arg == "--case-sensitive" {
                parsed.options.case_sensitive = true;
            } else if arg.starts_with('-') {
                return Err(ParseError::UnknownOption {
                    option: arg.to_string(),
                });
            } else {
                parsed.files.push(PathBuf::from(arg));
            }
        }

        if parsed.files.is_empty() {
            return Err(ParseError::NoFiles);
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_arguments() {
        let args = SliceArgs::parse(&[
            "-I/usr/share/slice",
            "-DDEBUG",
            "Hello.ice",
            "--case-sensitive",
            "-UNDEBUG",
            "Types.ice",
        ])
        .unwrap();

        assert_eq!(
            args.options.cpp_args,
            vec!["-I/usr/share/slice", "-DDEBUG", "-UNDEBUG"]
        );
        assert!(args.options.case_sensitive);
        assert_eq!(
            args.files,
            vec![PathBuf::from("Hello.ice"), PathBuf::from("Types.ice")]
        );
    }

    #[test]
    fn test_unknown_option() {
        let err = SliceArgs::parse(&["-x", "Hello.ice"]).unwrap_err();
        assert!(matches!(err, ParseError::UnknownOption { ref option } if option == "-x"));
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_no_files() {
        let err = SliceArgs::parse(&["-I."]).unwrap_err();
        assert!(matches!(err, ParseError::NoFiles));
    }

    #[test]
    fn test_command_line_quotes_spaces() {
        let options = PreprocessorOptions {
            cpp_args: vec!["-I/opt/my slice".to_string(), "-DX".to_string()],
            case_sensitive: false,
        };
        assert_eq!(options.command_line(), " '-I/opt/my slice' -DX");
    }

    #[test]
    fn test_include_dirs() {
        let options = PreprocessorOptions {
            cpp_args: vec!["-Ia".to_string(), "-DX".to_string(), "-Ib".to_string()],
            case_sensitive: false,
        };
        let dirs: Vec<_> = options.include_dirs().collect();
        assert_eq!(dirs, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }
}
