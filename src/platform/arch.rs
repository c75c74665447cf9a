use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CPU architecture requested for a build target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Architecture {
    /// Whatever the tool chain produces when no architecture flags are given.
    #[default]
    ToolChainDefault,
    I386,
    Amd64,
    Other(String),
}

impl Architecture {
    pub fn is_i386(&self) -> bool {
        matches!(self, Architecture::I386)
    }

    pub fn is_amd64(&self) -> bool {
        matches!(self, Architecture::Amd64)
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Architecture::ToolChainDefault => write!(f, "default"),
            Architecture::I386 => write!(f, "x86"),
            Architecture::Amd64 => write!(f, "x86-64"),
            Architecture::Other(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for Architecture {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Ok(match normalized.as_str() {
            "" | "default" => Architecture::ToolChainDefault,
            "x86" | "i386" | "ia-32" | "i686" => Architecture::I386,
            "x86-64" | "x86_64" | "amd64" | "x64" => Architecture::Amd64,
            _ => Architecture::Other(normalized),
        })
    }
}

impl From<String> for Architecture {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(arch) => arch,
            Err(never) => match never {},
        }
    }
}

impl From<Architecture> for String {
    fn from(value: Architecture) -> Self {
        value.to_string()
    }
}
