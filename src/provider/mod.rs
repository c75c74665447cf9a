//! Result of selecting a tool chain for a platform.

use std::fmt;

use crate::platform::Platform;
use crate::tool::{ToolConfiguration, ToolKind, ToolSet};

/// Tools ready to build for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformToolProvider {
    pub platform: Platform,
    pub tool_set: ToolSet,
    /// `.obj` for Windows targets, `.o` everywhere else.
    pub object_file_suffix: &'static str,
    /// Whether long argument lists may be passed through an options file.
    pub supports_command_file: bool,
}

impl PlatformToolProvider {
    pub fn new(platform: Platform, tool_set: ToolSet, supports_command_file: bool) -> Self {
        let object_file_suffix = if platform.operating_system.is_windows() {
            ".obj"
        } else {
            ".o"
        };
        Self {
            platform,
            tool_set,
            object_file_suffix,
            supports_command_file,
        }
    }

    pub fn tool(&self, kind: ToolKind) -> Option<&ToolConfiguration> {
        self.tool_set.get(kind)
    }
}

/// Outcome of a single tool chain selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolProvider {
    Available(PlatformToolProvider),
    Unavailable { reasons: Vec<String> },
}

impl ToolProvider {
    pub fn unavailable(reasons: Vec<String>) -> Self {
        ToolProvider::Unavailable { reasons }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ToolProvider::Available(_))
    }

    pub fn available(&self) -> Option<&PlatformToolProvider> {
        match self {
            ToolProvider::Available(provider) => Some(provider),
            ToolProvider::Unavailable { .. } => None,
        }
    }

    pub fn reasons(&self) -> &[String] {
        match self {
            ToolProvider::Available(_) => &[],
            ToolProvider::Unavailable { reasons } => reasons,
        }
    }

    /// All reasons joined into one message, or `None` when available.
    pub fn unavailable_message(&self) -> Option<String> {
        match self {
            ToolProvider::Available(_) => None,
            ToolProvider::Unavailable { reasons } => Some(reasons.join("\n")),
        }
    }
}

impl fmt::Display for ToolProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolProvider::Available(provider) => {
                writeln!(f, "platform: {}", provider.platform)?;
                for (kind, tool) in provider.tool_set.iter() {
                    writeln!(f, "{}: {}", kind, tool)?;
                }
                writeln!(f, "object file suffix: {}", provider.object_file_suffix)?;
                write!(f, "command file: {}", provider.supports_command_file)
            }
            ToolProvider::Unavailable { reasons } => {
                write!(f, "unavailable:")?;
                for reason in reasons {
                    write!(f, "\n{}", reason)?;
                }
                Ok(())
            }
        }
    }
}
