//! Tool chain configuration file.
//!
//! ```json
//! {
//!   "name": "gcc",
//!   "family": "gcc",
//!   "path": ["/opt/gcc/bin"],
//!   "executables": { "cCompiler": "gcc-13" },
//!   "targets": [
//!     { "names": ["custom-os"], "args": { "cCompiler": ["-DCUSTOM"] } }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::locator::{ToolLocator, ToolSearchPath};
use crate::platform::Host;
use crate::runtime::Runtime;
use crate::tool::{ArgumentConfigurator, ToolArguments, ToolChainFamily, ToolKind};
use crate::toolchain::GccCompatibleToolChain;

/// A platform target declared in the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    pub names: Vec<String>,
    /// Arguments appended per tool kind.
    pub args: BTreeMap<String, Vec<String>>,
    /// Executable overrides per tool kind.
    pub executables: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolChainConfig {
    /// Tool chain name; the family name when empty.
    pub name: String,
    pub family: ToolChainFamily,
    pub path: Vec<PathBuf>,
    /// Executable overrides applied to every platform.
    pub executables: BTreeMap<String, String>,
    /// Targets, registered in file order.
    pub targets: Vec<TargetConfig>,
}

impl ToolChainConfig {
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime.read_to_string(path)?;
        Self::parse(&content)
            .with_context(|| format!("Invalid tool chain configuration in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: ToolChainConfig =
            serde_json::from_str(content).context("Failed to parse tool chain configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/ntc/toolchain.json`
    pub fn default_path<R: Runtime>(runtime: &R) -> Option<PathBuf> {
        runtime
            .config_dir()
            .map(|dir| dir.join("ntc").join("toolchain.json"))
    }

    fn validate(&self) -> Result<()> {
        parse_kinds(&self.executables)?;
        for target in &self.targets {
            if target.names.is_empty() {
                anyhow::bail!("Every target must name at least one platform.");
            }
            parse_kinds(&target.args)?;
            parse_kinds(&target.executables)?;
        }
        Ok(())
    }

    pub fn tool_chain_name(&self) -> String {
        if self.name.is_empty() {
            self.family.to_string()
        } else {
            self.name.clone()
        }
    }

    /// Apply this configuration to `tool_chain`: search path, default
    /// executables, then targets.
    pub fn apply<L: ToolLocator>(
        &self,
        tool_chain: &mut GccCompatibleToolChain<L>,
    ) -> Result<()> {
        tool_chain.path(self.path.iter().cloned());

        for target in &self.targets {
            let args = ToolArguments::new(parse_kinds(&target.args)?);
            let executables = parse_kinds(&target.executables)?;
            let host = tool_chain.host().clone();
            debug!("Adding target {:?}", target.names);
            tool_chain.target_with(target.names.iter().cloned(), move |tools| {
                for (kind, executable) in &executables {
                    tools.set_executable(*kind, executable.clone());
                }
                let configured = args.apply(std::mem::take(tools), &host);
                *tools = configured;
            });
        }

        for (kind, executable) in parse_kinds(&self.executables)? {
            tool_chain.set_default_executable(kind, executable);
        }
        Ok(())
    }

    /// Build a file system backed tool chain from this configuration.
    pub fn build<R: Runtime>(
        &self,
        runtime: R,
        host: Host,
    ) -> Result<GccCompatibleToolChain<ToolSearchPath<R>>> {
        let mut tool_chain = GccCompatibleToolChain::with_search_path(
            self.tool_chain_name(),
            self.family,
            runtime,
            host,
        );
        self.apply(&mut tool_chain)?;
        Ok(tool_chain)
    }
}

fn parse_kinds<V: Clone>(entries: &BTreeMap<String, V>) -> Result<BTreeMap<ToolKind, V>> {
    entries
        .iter()
        .map(|(key, value)| key.parse::<ToolKind>().map(|kind| (kind, value.clone())))
        .collect()
}
