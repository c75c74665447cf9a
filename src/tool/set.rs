use log::debug;
use std::collections::BTreeMap;
use std::fmt;

use super::{ToolChainFamily, ToolKind};

/// Command line of a single tool: the executable plus the arguments
/// accumulated while configuring it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfiguration {
    pub executable: String,
    pub arguments: Vec<String>,
}

impl ToolConfiguration {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            arguments: Vec::new(),
        }
    }

    /// Run `action` against the argument list. Arguments keep the order in
    /// which they were added.
    pub fn with_arguments<F>(&mut self, action: F)
    where
        F: FnOnce(&mut Vec<String>),
    {
        action(&mut self.arguments);
    }
}

impl fmt::Display for ToolConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable)?;
        for arg in &self.arguments {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// The tools configured for one selection attempt.
///
/// A `ToolSet` is built fresh by every call to select a platform and is
/// handed back by value, so nothing configured for one platform can leak
/// into another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolSet {
    tools: BTreeMap<ToolKind, ToolConfiguration>,
}

impl ToolSet {
    /// Every known tool kind with the family's executable and no arguments.
    pub fn defaults(family: ToolChainFamily) -> Self {
        let tools = ToolKind::ALL
            .into_iter()
            .map(|kind| {
                (
                    kind,
                    ToolConfiguration::new(family.default_executable(kind)),
                )
            })
            .collect();
        Self { tools }
    }

    pub fn get(&self, kind: ToolKind) -> Option<&ToolConfiguration> {
        self.tools.get(&kind)
    }

    /// Replace the executable of `kind`, keeping its arguments.
    pub fn set_executable(&mut self, kind: ToolKind, executable: impl Into<String>) {
        match self.tools.get_mut(&kind) {
            Some(tool) => tool.executable = executable.into(),
            None => {
                self.tools.insert(kind, ToolConfiguration::new(executable));
            }
        }
    }

    /// Apply `action` to the arguments of `kind`. Absent tools are skipped.
    pub fn with_arguments<F>(&mut self, kind: ToolKind, action: F)
    where
        F: FnOnce(&mut Vec<String>),
    {
        match self.tools.get_mut(&kind) {
            Some(tool) => tool.with_arguments(action),
            None => debug!("Tool {} is not part of this tool set, skipping", kind),
        }
    }

    pub fn arguments(&self, kind: ToolKind) -> &[String] {
        self.tools
            .get(&kind)
            .map(|tool| tool.arguments.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (ToolKind, &ToolConfiguration)> {
        self.tools.iter().map(|(kind, tool)| (*kind, tool))
    }
}
