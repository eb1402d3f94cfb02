//! Required-options bookkeeping for a single parse.

use optline_core::{Options, Requirement};

use crate::error::ParseError;

/// Working set of requirements that have not been satisfied yet.
///
/// Seeded from the registry when a parse starts; each entry is removed the
/// first time the option or group appears. Whatever is left when the input
/// runs out is reported by [`finish`](Self::finish).
#[derive(Debug, Clone)]
pub(crate) struct RequiredTracker {
    outstanding: Vec<Requirement>,
}

impl RequiredTracker {
    pub(crate) fn seed(options: &Options) -> Self {
        Self {
            outstanding: options.required_options(),
        }
    }

    /// Removes `requirement`; a no-op when already satisfied.
    pub(crate) fn satisfy(&mut self, requirement: Requirement) {
        if let Some(position) = self.outstanding.iter().position(|r| *r == requirement) {
            self.outstanding.remove(position);
        }
    }

    pub(crate) fn finish(self, options: &Options) -> Result<(), ParseError> {
        if self.outstanding.is_empty() {
            return Ok(());
        }
        let names = self
            .outstanding
            .into_iter()
            .map(|requirement| options.requirement_name(requirement))
            .collect();
        Err(ParseError::MissingOption(names))
    }
}
