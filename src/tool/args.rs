//! Argument configurators: pure functions from a tool kind and its argument
//! list to an extended argument list.

use std::collections::BTreeMap;

use super::{ToolKind, ToolSet};
use crate::platform::Host;

/// Appends arguments to the tools of a [`ToolSet`].
pub trait ArgumentConfigurator: Send + Sync {
    /// Arguments to append for `kind`, in order. Empty when the tool is left alone.
    fn arguments_for(&self, kind: ToolKind, host: &Host) -> Vec<String>;

    /// Append [`arguments_for`](Self::arguments_for) to every tool present in `tools`.
    fn apply(&self, mut tools: ToolSet, host: &Host) -> ToolSet {
        let kinds: Vec<ToolKind> = tools.iter().map(|(kind, _)| kind).collect();
        for kind in kinds {
            let extra = self.arguments_for(kind, host);
            if !extra.is_empty() {
                tools.with_arguments(kind, |args| args.extend(extra));
            }
        }
        tools
    }
}

/// Flags that switch GCC-style tools to a specific CPU word size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchitectureFlags {
    compiler: &'static [&'static str],
    gnu_assembler: &'static [&'static str],
    apple_assembler: &'static [&'static str],
}

impl ArchitectureFlags {
    pub const I386: ArchitectureFlags = ArchitectureFlags {
        compiler: &["-m32"],
        gnu_assembler: &["--32"],
        apple_assembler: &["-arch", "i386"],
    };

    pub const AMD64: ArchitectureFlags = ArchitectureFlags {
        compiler: &["-m64"],
        gnu_assembler: &["--64"],
        apple_assembler: &["-arch", "x86_64"],
    };
}

impl ArgumentConfigurator for ArchitectureFlags {
    fn arguments_for(&self, kind: ToolKind, host: &Host) -> Vec<String> {
        let flags: &[&str] = match kind {
            _ if kind.is_compiler_or_linker() => self.compiler,
            ToolKind::Assembler if host.is_macos() => self.apple_assembler,
            ToolKind::Assembler => self.gnu_assembler,
            _ => &[],
        };
        flags.iter().map(|flag| flag.to_string()).collect()
    }
}

/// Fixed per-tool arguments, as declared in a tool chain configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolArguments {
    args: BTreeMap<ToolKind, Vec<String>>,
}

impl ToolArguments {
    pub fn new(args: BTreeMap<ToolKind, Vec<String>>) -> Self {
        Self { args }
    }
}

impl ArgumentConfigurator for ToolArguments {
    fn arguments_for(&self, kind: ToolKind, _host: &Host) -> Vec<String> {
        self.args.get(&kind).cloned().unwrap_or_default()
    }
}
