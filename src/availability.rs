//! Availability probing for a configured tool set.

use log::debug;

use crate::locator::{SearchResult, ToolLocator};
use crate::tool::{ToolKind, ToolSet};

/// Accumulates the reasons a tool chain cannot be used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolChainAvailability {
    reasons: Vec<String>,
}

impl ToolChainAvailability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }

    /// Record the search failure, if any.
    pub fn must_be_available(&mut self, result: &SearchResult) {
        if let Some(reason) = result.reason() {
            self.unavailable(reason);
        }
    }

    pub fn is_available(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn into_reasons(self) -> Vec<String> {
        self.reasons
    }
}

/// Decide whether `tools` is usable on this host.
///
/// The tool chain counts as installed when at least one of its tools can be
/// found; a GCC install without an Objective-C compiler is still fine for C
/// and C++. Only when nothing at all is found is the C compiler looked up
/// again and its failure recorded as the explanation.
pub fn probe(
    tools: &ToolSet,
    locator: &dyn ToolLocator,
    availability: &mut ToolChainAvailability,
) {
    let mut found = false;
    for (kind, tool) in tools.iter() {
        let result = locator.locate(kind, &tool.executable);
        match result.path() {
            Some(path) => debug!("Found {} at {}", kind, path.display()),
            None => debug!("{} '{}' not found", kind, tool.executable),
        }
        found |= result.is_available();
    }
    if found {
        return;
    }

    match tools.get(ToolKind::CCompiler) {
        Some(c_compiler) => availability
            .must_be_available(&locator.locate(ToolKind::CCompiler, &c_compiler.executable)),
        None => availability.unavailable(format!(
            "No {} is configured for this tool chain.",
            ToolKind::CCompiler.display_name()
        )),
    }
}
