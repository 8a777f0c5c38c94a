//! Host runtime contract.

use thiserror::Error;

/// Failure reported by the host runtime while compiling source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HostError {
    /// Error message.
    pub message: String,
}

impl HostError {
    /// Creates a host error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The scripting runtime that generated source is submitted to.
pub trait HostRuntime {
    /// Compiles a block of source into the running environment.
    ///
    /// `label` names the block in host diagnostics.
    ///
    /// # Errors
    /// Returns `HostError` if the source does not compile.
    fn eval(&mut self, source: &str, label: &str) -> Result<(), HostError>;
}

impl<F> HostRuntime for F
where
    F: FnMut(&str, &str) -> Result<(), HostError>,
{
    fn eval(&mut self, source: &str, label: &str) -> Result<(), HostError> {
        self(source, label)
    }
}

/// Host that accepts every block and keeps it, in submission order.
#[derive(Debug, Clone, Default)]
pub struct CollectingHost {
    blocks: Vec<(String, String)>,
}

impl CollectingHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the submitted `(label, source)` pairs.
    #[must_use]
    pub fn blocks(&self) -> &[(String, String)] {
        &self.blocks
    }

    /// Returns the source submitted under `label`.
    #[must_use]
    pub fn source(&self, label: &str) -> Option<&str> {
        self.blocks
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, source)| source.as_str())
    }
}

impl HostRuntime for CollectingHost {
    fn eval(&mut self, source: &str, label: &str) -> Result<(), HostError> {
        self.blocks.push((label.to_string(), source.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_host_order() {
        let mut host = CollectingHost::new();
        host.eval("class A {}", "first").unwrap();
        host.eval("class B {}", "second").unwrap();

        let labels: Vec<_> = host.blocks().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
        assert_eq!(host.source("second"), Some("class B {}"));
        assert_eq!(host.source("third"), None);
    }

    #[test]
    fn test_closure_host() {
        let mut host = |_: &str, label: &str| {
            if label == "bad" {
                Err(HostError::new("syntax error"))
            } else {
                Ok(())
            }
        };
        assert!(host.eval("", "good").is_ok());
        assert_eq!(host.eval("", "bad").unwrap_err().message, "syntax error");
    }
}
