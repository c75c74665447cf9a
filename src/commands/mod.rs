use anyhow::Result;
use log::debug;

use crate::{
    platform::{Architecture, OperatingSystemFamily, Platform},
    provider::ToolProvider,
    runtime::Runtime,
};

pub mod config;

use config::Config;

/// Resolve the tool chain for a single platform.
///
/// `os` defaults to the host's operating system family.
#[tracing::instrument(skip(config))]
pub fn select<R: Runtime>(
    config: Config<R>,
    platform_name: &str,
    os: Option<OperatingSystemFamily>,
    arch: Architecture,
) -> Result<ToolProvider> {
    let mut platform = Platform::host_default(&config.host);
    platform.name = platform_name.to_string();
    platform.architecture = arch;
    if let Some(os) = os {
        platform.operating_system = os;
    }
    let tool_chain = config.build_tool_chain()?;

    debug!("Selecting {} for {}", tool_chain.display_name(), platform);
    Ok(tool_chain.select(&platform))
}

/// Platform strategies of the configured tool chain, highest priority first.
#[tracing::instrument(skip(config))]
pub fn strategies<R: Runtime>(config: Config<R>) -> Result<Vec<String>> {
    let tool_chain = config.build_tool_chain()?;
    Ok(tool_chain.strategies().map(|s| s.to_string()).collect())
}
