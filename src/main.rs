use anyhow::Result;
use clap::Parser;
use native_toolchain::{
    Architecture, Host, OperatingSystemFamily, ToolChainFamily,
    commands::{self, config::Config},
};
use std::{path::PathBuf, process::ExitCode};

/// ntc - native tool chain selector
///
/// Resolve the GCC compatible tools used to build for a target platform.
///
/// Without --config, the configuration is read from
/// <config dir>/ntc/toolchain.json when that file exists.
///
/// Examples:
///   ntc select                          # Tools for the host platform
///   ntc select --arch x86 linux32       # 32-bit tools on the host OS
///   ntc strategies                      # Platform strategies by priority
#[derive(Parser, Debug)]
#[command(name = "ntc", author, version = env!("NTC_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tool chain configuration file (also via NTC_CONFIG)
    #[arg(
        long = "config",
        short = 'c',
        env = "NTC_CONFIG",
        value_name = "FILE",
        global = true
    )]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub search: SearchPathArgs,

    /// Tool chain family: gcc or clang
    #[arg(long = "family", value_name = "FAMILY", global = true)]
    pub family: Option<ToolChainFamily>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Select the tools for a target platform
    Select(SelectArgs),

    /// List platform strategies, highest priority first
    Strategies(StrategiesArgs),
}

impl Commands {
    fn search(&self) -> &SearchPathArgs {
        match self {
            Commands::Select(args) => &args.search,
            Commands::Strategies(args) => &args.search,
        }
    }
}

// Accepted on both sides of the subcommand; all occurrences are searched,
// top-level ones first.
#[derive(clap::Args, Debug, Default)]
pub struct SearchPathArgs {
    /// Directory to search for tools, instead of PATH (repeatable)
    #[arg(long = "path", short = 'p', value_name = "DIR")]
    pub path: Vec<PathBuf>,
}

impl Cli {
    fn search_path(&self) -> Vec<PathBuf> {
        self.search
            .path
            .iter()
            .chain(&self.command.search().path)
            .cloned()
            .collect()
    }
}

#[derive(clap::Args, Debug)]
pub struct SelectArgs {
    /// Target platform name
    #[arg(value_name = "PLATFORM", default_value = "current")]
    pub platform: String,

    /// Operating system family (defaults to the host)
    #[arg(long = "os", value_name = "OS")]
    pub os: Option<OperatingSystemFamily>,

    /// Architecture: default, x86 or x86-64
    #[arg(long = "arch", value_name = "ARCH", default_value = "default")]
    pub arch: Architecture,

    #[command(flatten)]
    pub search: SearchPathArgs,
}

#[derive(clap::Args, Debug)]
pub struct StrategiesArgs {
    #[command(flatten)]
    pub search: SearchPathArgs,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = native_toolchain::runtime::RealRuntime;
    let search_path = cli.search_path();
    let config = Config::new(runtime, Host::detect(), cli.config, cli.family, search_path)?;

    match cli.command {
        Commands::Select(args) => {
            let provider = commands::select(config, &args.platform, args.os, args.arch)?;
            if provider.is_available() {
                println!("{}", provider);
            } else {
                eprintln!("{}", provider);
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Strategies(_) => {
            for strategy in commands::strategies(config)? {
                println!("{}", strategy);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
