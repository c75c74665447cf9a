//! Platform model
//!
//! A [`Platform`] is the build target a tool chain is selected for: a name
//! plus an operating system family and a CPU architecture. [`Host`]
//! describes the machine doing the selection.

mod arch;
mod detection;
mod os;

pub use arch::Architecture;
pub use detection::Host;
pub use os::OperatingSystemFamily;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target platform for a native build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    pub operating_system: OperatingSystemFamily,
    #[serde(default)]
    pub architecture: Architecture,
}

impl Platform {
    pub fn new(
        name: impl Into<String>,
        operating_system: OperatingSystemFamily,
        architecture: Architecture,
    ) -> Self {
        Self {
            name: name.into(),
            operating_system,
            architecture,
        }
    }

    /// A platform for the host's operating system with the tool chain's
    /// default architecture.
    pub fn host_default(host: &Host) -> Self {
        Self::new("current", host.os.clone(), Architecture::ToolChainDefault)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.name, self.operating_system, self.architecture
        )
    }
}
