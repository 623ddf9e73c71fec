//! Non-fatal findings collected while extracting operations.

use std::fmt;

use tracing::warn;

use super::api::HttpMethod;

/// A data defect that was skipped or tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The operation had no `operationId` and was dropped.
    MissingOperationId {
        /// HTTP method of the dropped operation
        method: HttpMethod,
        /// Path of the dropped operation
        path: String,
    },
    /// The `operationId` was already used by another operation; both are kept.
    DuplicateOperationId {
        /// The repeated id
        id: String,
        /// HTTP method of the later occurrence
        method: HttpMethod,
        /// Path of the later occurrence
        path: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingOperationId { method, path } => {
                write!(f, "missing operation id for {method} {path}")
            }
            Diagnostic::DuplicateOperationId { id, method, path } => {
                write!(f, "duplicate operation id '{id}' for {method} {path}")
            }
        }
    }
}

/// Collector passed through extraction and returned with the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    /// Recorded diagnostics, in the order they were found.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
