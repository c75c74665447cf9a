//! Platform strategies
//!
//! A strategy decides whether it knows how to build for a target platform
//! and, if chosen, adjusts a freshly built [`ToolSet`] for it. The set of
//! variants is closed: three built-in architecture strategies plus any
//! number of strategies targeting platforms by name.

use std::fmt;
use std::sync::Arc;

use crate::platform::{Architecture, Host, Platform};
use crate::tool::{ArchitectureFlags, ArgumentConfigurator, ToolSet};

/// User supplied configuration applied to the tool set of a named target.
pub type TargetAction = Arc<dyn Fn(&mut ToolSet) + Send + Sync>;

#[derive(Clone)]
pub enum PlatformStrategy {
    /// Host operating system, tool chain default architecture. Leaves the tools untouched.
    ToolChainDefault,
    /// Host operating system, 32-bit x86.
    Intel32,
    /// Host operating system, x86-64. Never matches on a Windows host.
    Intel64,
    /// Platforms listed by name, configured by a user action.
    Named {
        names: Vec<String>,
        action: TargetAction,
    },
}

impl PlatformStrategy {
    pub fn named<I, S, F>(names: I, action: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&mut ToolSet) + Send + Sync + 'static,
    {
        PlatformStrategy::Named {
            names: names.into_iter().map(Into::into).collect(),
            action: Arc::new(action),
        }
    }

    /// The built-ins, in the order they are seeded into a registry.
    pub fn built_ins() -> [PlatformStrategy; 3] {
        [
            PlatformStrategy::ToolChainDefault,
            PlatformStrategy::Intel32,
            PlatformStrategy::Intel64,
        ]
    }

    pub fn matches(&self, platform: &Platform, host: &Host) -> bool {
        let native = platform.operating_system == host.os;
        match self {
            PlatformStrategy::ToolChainDefault => {
                native && platform.architecture == Architecture::ToolChainDefault
            }
            PlatformStrategy::Intel32 => native && platform.architecture.is_i386(),
            // 64-bit binaries are not supported by GCC-compatible tool chains on Windows hosts
            PlatformStrategy::Intel64 => {
                native && !host.is_windows() && platform.architecture.is_amd64()
            }
            PlatformStrategy::Named { names, .. } => names.contains(&platform.name),
        }
    }

    pub fn configure(&self, mut tools: ToolSet, host: &Host) -> ToolSet {
        match self {
            PlatformStrategy::ToolChainDefault => tools,
            PlatformStrategy::Intel32 => ArchitectureFlags::I386.apply(tools, host),
            PlatformStrategy::Intel64 => ArchitectureFlags::AMD64.apply(tools, host),
            PlatformStrategy::Named { action, .. } => {
                action(&mut tools);
                tools
            }
        }
    }
}

impl fmt::Display for PlatformStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformStrategy::ToolChainDefault => write!(f, "tool chain default architecture"),
            PlatformStrategy::Intel32 => write!(f, "x86"),
            PlatformStrategy::Intel64 => write!(f, "x86-64"),
            PlatformStrategy::Named { names, .. } => {
                write!(f, "platforms named [{}]", names.join(", "))
            }
        }
    }
}

impl fmt::Debug for PlatformStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformStrategy::ToolChainDefault => write!(f, "ToolChainDefault"),
            PlatformStrategy::Intel32 => write!(f, "Intel32"),
            PlatformStrategy::Intel64 => write!(f, "Intel64"),
            PlatformStrategy::Named { names, .. } => {
                f.debug_struct("Named").field("names", names).finish_non_exhaustive()
            }
        }
    }
}
