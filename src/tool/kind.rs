use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A command line tool a GCC-compatible tool chain is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    #[serde(rename = "cCompiler")]
    CCompiler,
    #[serde(rename = "cppCompiler")]
    CppCompiler,
    #[serde(rename = "objcCompiler")]
    ObjcCompiler,
    #[serde(rename = "objcppCompiler")]
    ObjcppCompiler,
    #[serde(rename = "linker")]
    Linker,
    #[serde(rename = "assembler")]
    Assembler,
    #[serde(rename = "staticLibArchiver")]
    StaticLibArchiver,
}

impl ToolKind {
    pub const ALL: [ToolKind; 7] = [
        ToolKind::CCompiler,
        ToolKind::CppCompiler,
        ToolKind::ObjcCompiler,
        ToolKind::ObjcppCompiler,
        ToolKind::Linker,
        ToolKind::Assembler,
        ToolKind::StaticLibArchiver,
    ];

    /// Stable identifier used in configuration files and logs.
    pub fn id(self) -> &'static str {
        match self {
            ToolKind::CCompiler => "cCompiler",
            ToolKind::CppCompiler => "cppCompiler",
            ToolKind::ObjcCompiler => "objcCompiler",
            ToolKind::ObjcppCompiler => "objcppCompiler",
            ToolKind::Linker => "linker",
            ToolKind::Assembler => "assembler",
            ToolKind::StaticLibArchiver => "staticLibArchiver",
        }
    }

    /// Human readable name used in error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            ToolKind::CCompiler => "C compiler",
            ToolKind::CppCompiler => "C++ compiler",
            ToolKind::ObjcCompiler => "Objective-C compiler",
            ToolKind::ObjcppCompiler => "Objective-C++ compiler",
            ToolKind::Linker => "Linker",
            ToolKind::Assembler => "Assembler",
            ToolKind::StaticLibArchiver => "Static library archiver",
        }
    }

    /// Compilers and the linker share the `-m32`/`-m64` style flags.
    pub fn is_compiler_or_linker(self) -> bool {
        !matches!(self, ToolKind::Assembler | ToolKind::StaticLibArchiver)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ToolKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = ToolKind::ALL.iter().map(|k| k.id()).collect();
                anyhow::anyhow!("Unknown tool kind: {}. Expected one of: {}", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_kind_parse() {
        assert_eq!("cCompiler".parse::<ToolKind>().unwrap(), ToolKind::CCompiler);
        assert_eq!("LINKER".parse::<ToolKind>().unwrap(), ToolKind::Linker);
        assert_eq!(
            "staticLibArchiver".parse::<ToolKind>().unwrap(),
            ToolKind::StaticLibArchiver
        );

        let err = "fortranCompiler".parse::<ToolKind>().unwrap_err();
        assert!(err.to_string().contains("Unknown tool kind"));
    }

    #[test]
    fn test_tool_kind_display_matches_serde() {
        for kind in ToolKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_compiler_or_linker() {
        assert!(ToolKind::CCompiler.is_compiler_or_linker());
        assert!(ToolKind::ObjcppCompiler.is_compiler_or_linker());
        assert!(ToolKind::Linker.is_compiler_or_linker());
        assert!(!ToolKind::Assembler.is_compiler_or_linker());
        assert!(!ToolKind::StaticLibArchiver.is_compiler_or_linker());
    }
}
