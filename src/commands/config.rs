use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::{
    config::ToolChainConfig, locator::ToolSearchPath, platform::Host, runtime::Runtime,
    tool::ToolChainFamily, toolchain::GccCompatibleToolChain,
};

/// Everything a command needs to build the tool chain it works on.
pub struct Config<R: Runtime> {
    pub runtime: R,
    pub host: Host,
    pub tool_chain: ToolChainConfig,
}

impl<R: Runtime> Config<R> {
    /// Load the configuration file and apply command line overrides.
    ///
    /// An explicit `config_path` must exist. Without one, the default location
    /// is used when present and built-in defaults otherwise.
    pub fn new(
        runtime: R,
        host: Host,
        config_path: Option<PathBuf>,
        family: Option<ToolChainFamily>,
        extra_path: Vec<PathBuf>,
    ) -> Result<Self> {
        let mut tool_chain = match config_path {
            Some(path) => ToolChainConfig::load(&runtime, &path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?,
            None => match ToolChainConfig::default_path(&runtime) {
                Some(path) if runtime.exists(&path) => {
                    debug!("Using configuration from {}", path.display());
                    ToolChainConfig::load(&runtime, &path)?
                }
                _ => {
                    debug!("No configuration file found, using defaults");
                    ToolChainConfig::default()
                }
            },
        };

        if let Some(family) = family {
            tool_chain.family = family;
        }
        tool_chain.path.extend(extra_path);

        Ok(Self {
            runtime,
            host,
            tool_chain,
        })
    }

    pub fn build_tool_chain(self) -> Result<GccCompatibleToolChain<ToolSearchPath<R>>> {
        self.tool_chain.build(self.runtime, self.host)
    }
}
