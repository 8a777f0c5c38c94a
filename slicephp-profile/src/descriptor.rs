//! Profile descriptor files.
//!
//! A descriptor declares several profiles at once:
//!
//! ```text
//! ; comment
//! [Hello]
//! config  = /etc/hello.cfg
//! options = "--Ice.Trace.Network=1"
//! slice   = -I/usr/share/slice /usr/share/hello/Hello.ice
//! ```
//!
//! Each section names one profile. Recognized keys are `config`, `options`
//! and `slice`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for descriptor parsing.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Descriptor file could not be read.
    #[error("unable to open profile file {}: {source}", path.display())]
    Io {
        /// Descriptor file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Malformed section header.
    #[error("invalid profile section in file {file}:{line}:\n{text}")]
    InvalidSection {
        /// Descriptor name.
        file: String,
        /// One-based line number.
        line: usize,
        /// Offending line.
        text: String,
    },

    /// Key line without `=`.
    #[error("invalid profile entry in file {file}:{line}:\n{text}")]
    InvalidEntry {
        /// Descriptor name.
        file: String,
        /// One-based line number.
        line: usize,
        /// Offending line.
        text: String,
    },

    /// Key other than `config`, `options` or `slice`.
    #[error("unknown profile entry in file {file}:{line}:\n{text}")]
    UnknownEntry {
        /// Descriptor name.
        file: String,
        /// One-based line number.
        line: usize,
        /// Offending line.
        text: String,
    },

    /// Entry before any section header.
    #[error("no section for profile entry in file {file}:{line}:\n{text}")]
    NoSection {
        /// Descriptor name.
        file: String,
        /// One-based line number.
        line: usize,
        /// Offending line.
        text: String,
    },
}

/// One profile declared by a descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileRequest {
    /// Profile name.
    pub name: String,
    /// Configuration file path, or empty.
    pub config: String,
    /// Command-line style options, or empty.
    pub options: String,
    /// IDL argument string, or empty.
    pub slice: String,
}

impl ProfileRequest {
    /// Creates a request with no settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Loads and parses a descriptor file.
///
/// # Errors
/// Returns `DescriptorError::Io` if the file cannot be read, or the first
/// syntax error.
pub fn load_descriptor(path: impl AsRef<Path>) -> Result<Vec<ProfileRequest>, DescriptorError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DescriptorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_descriptor(&text, &path.display().to_string())
}

/// Parses descriptor text.
///
/// `source_name` identifies the input in error messages. Sections are
/// returned in file order, one request per section.
///
/// # Errors
/// Returns the first syntax error, with its line.
pub fn parse_descriptor(
    text: &str,
    source_name: &str,
) -> Result<Vec<ProfileRequest>, DescriptorError> {
    let mut requests = Vec::new();
    let mut current: Option<ProfileRequest> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = match raw.find(';') {
            Some(comment) => &raw[..comment],
            None => raw,
        }
        .trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name: String = header
                .chars()
                .take_while(|c| !c.is_whitespace() && *c != ']')
                .collect();
            if !line.ends_with(']') || name.is_empty() {
                return Err(DescriptorError::InvalidSection {
                    file: source_name.to_string(),
                    line: line_number,
                    text: raw.to_string(),
                });
            }
            requests.extend(current.replace(ProfileRequest::new(name)));
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(DescriptorError::InvalidEntry {
                file: source_name.to_string(),
                line: line_number,
                text: raw.to_string(),
            });
        };
        let value = value.trim().to_string();

        let slot = match key.trim() {
            "config" | "options" | "slice" => current.as_mut(),
            _ => {
                return Err(DescriptorError::UnknownEntry {
                    file: source_name.to_string(),
                    line: line_number,
                    text: raw.to_string(),
                });
            }
        };
        let Some(request) = slot else {
            return Err(DescriptorError::NoSection {
                file: source_name.to_string(),
                line: line_number,
                text: raw.to_string(),
            });
        };

        match key.trim() {
            "config" => request.config = value,
            "options" => request.options = value,
            _ => request.slice = value,
        }
    }

    requests.extend(current);
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_two_sections() {
        let requests = parse_descriptor("[a]\nconfig=c1\n[b]\noptions=o2", "test").unwrap();
        assert_eq!(
            requests,
            vec![
                ProfileRequest {
                    name: "a".into(),
                    config: "c1".into(),
                    options: String::new(),
                    slice: String::new(),
                },
                ProfileRequest {
                    name: "b".into(),
                    config: String::new(),
                    options: "o2".into(),
                    slice: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_comments_and_whitespace() {
        let text = "\
; profiles for the demo
   [Hello extra]   ; trailing comment

  slice =  -I/opt/slice  Hello.ice
options = --Ice.Trace=1 ; inline
";
        let requests = parse_descriptor(text, "test").unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].name, "Hello");
        assert_eq!(requests[0].slice, "-I/opt/slice  Hello.ice");
        assert_eq!(requests[0].options, "--Ice.Trace=1");
        assert!(requests[0].config.is_empty());
    }

    #[test]
    fn test_empty_section_still_declares_profile() {
        let requests = parse_descriptor("[empty]\n[full]\nconfig=x", "test").unwrap();
        let names: Vec<_> = requests.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["empty", "full"]);
    }

    #[test]
    fn test_later_value_wins() {
        let requests = parse_descriptor("[a]\nconfig=one\nconfig=two", "test").unwrap();
        assert_eq!(requests[0].config, "two");
    }

    #[test]
    fn test_malformed_section() {
        let err = parse_descriptor("[a\nconfig=x", "profiles.ini").unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::InvalidSection { line: 1, .. }
        ));

        let err = parse_descriptor("[]", "profiles.ini").unwrap_err();
        assert!(matches!(err, DescriptorError::InvalidSection { .. }));
    }

    #[test]
    fn test_unknown_key() {
        let err = parse_descriptor("[a]\n\nlocale = C", "profiles.ini").unwrap_err();
        match err {
            DescriptorError::UnknownEntry { file, line, text } => {
                assert_eq!(file, "profiles.ini");
                assert_eq!(line, 3);
                assert_eq!(text, "locale = C");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_entry_without_section() {
        let err = parse_descriptor("config = x\n[a]", "test").unwrap_err();
        assert!(matches!(err, DescriptorError::NoSection { line: 1, .. }));

        // Unknown keys are reported even before a section.
        let err = parse_descriptor("bogus = x", "test").unwrap_err();
        assert!(matches!(err, DescriptorError::UnknownEntry { .. }));
    }

    #[test]
    fn test_entry_without_equals() {
        let err = parse_descriptor("[a]\nconfig", "test").unwrap_err();
        assert!(matches!(err, DescriptorError::InvalidEntry { line: 2, .. }));
        assert!(err.to_string().contains("test:2"));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[Hello]").unwrap();
        writeln!(file, "config = hello.cfg").unwrap();

        let requests = load_descriptor(file.path()).unwrap();
        assert_eq!(requests[0].config, "hello.cfg");

        let err = load_descriptor("/nonexistent/profiles.ini").unwrap_err();
        assert!(matches!(err, DescriptorError::Io { .. }));
    }
}
