use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ToolKind;

/// Flavour of GCC-compatible tool chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolChainFamily {
    #[default]
    Gcc,
    Clang,
}

impl ToolChainFamily {
    /// Executable name a freshly built tool set starts with.
    pub fn default_executable(self, kind: ToolKind) -> &'static str {
        match (self, kind) {
            (ToolChainFamily::Gcc, ToolKind::CCompiler | ToolKind::ObjcCompiler) => "gcc",
            (
                ToolChainFamily::Gcc,
                ToolKind::CppCompiler | ToolKind::ObjcppCompiler | ToolKind::Linker,
            ) => "g++",
            (ToolChainFamily::Clang, ToolKind::CCompiler | ToolKind::ObjcCompiler) => "clang",
            (
                ToolChainFamily::Clang,
                ToolKind::CppCompiler | ToolKind::ObjcppCompiler | ToolKind::Linker,
            ) => "clang++",
            (_, ToolKind::Assembler) => "as",
            (_, ToolKind::StaticLibArchiver) => "ar",
        }
    }

    /// Whether long argument lists may be passed through an options file.
    pub fn can_use_command_file(self) -> bool {
        match self {
            ToolChainFamily::Gcc | ToolChainFamily::Clang => true,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ToolChainFamily::Gcc => "GNU GCC",
            ToolChainFamily::Clang => "Clang",
        }
    }
}

impl fmt::Display for ToolChainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolChainFamily::Gcc => write!(f, "gcc"),
            ToolChainFamily::Clang => write!(f, "clang"),
        }
    }
}

impl FromStr for ToolChainFamily {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gcc" => Ok(ToolChainFamily::Gcc),
            "clang" => Ok(ToolChainFamily::Clang),
            _ => anyhow::bail!("Unknown tool chain family: {}. Expected gcc or clang.", s),
        }
    }
}
