//! GCC-compatible tool chains.
//!
//! A tool chain with GCC semantics produces every platform variant by
//! varying tool arguments. Selecting a platform runs one linear pass:
//! match a strategy, build and configure a fresh [`ToolSet`], probe the
//! host for the tools, and report the outcome as a [`ToolProvider`].

use log::{debug, info};
use std::path::PathBuf;
use std::sync::Arc;

use crate::availability::{ToolChainAvailability, probe};
use crate::locator::{ToolLocator, ToolSearchPath};
use crate::platform::{Host, Platform};
use crate::provider::{PlatformToolProvider, ToolProvider};
use crate::registry::StrategyRegistry;
use crate::runtime::Runtime;
use crate::strategy::PlatformStrategy;
use crate::tool::{ToolChainFamily, ToolKind, ToolSet};

/// Runs against every configured tool set, after the platform strategy.
pub type ConfigureHook = Arc<dyn Fn(&Platform, &mut ToolSet) + Send + Sync>;

/// A tool chain whose platform variants differ only in tool arguments.
///
/// Registration (`target*`, `path`, `each_platform`) needs `&mut self` while
/// [`select`](Self::select) takes `&self`, so all configuration is finished
/// before the tool chain is shared for selection.
pub struct GccCompatibleToolChain<L: ToolLocator> {
    name: String,
    family: ToolChainFamily,
    host: Host,
    locator: L,
    registry: StrategyRegistry,
    default_tools: ToolSet,
    configure_hooks: Vec<ConfigureHook>,
    can_use_command_file: bool,
}

impl<R: Runtime> GccCompatibleToolChain<ToolSearchPath<R>> {
    /// A tool chain that looks for its tools on the file system of `host`.
    pub fn with_search_path(
        name: impl Into<String>,
        family: ToolChainFamily,
        runtime: R,
        host: Host,
    ) -> Self {
        let locator = ToolSearchPath::new(runtime, host.clone());
        Self::new(name, family, host, locator)
    }
}

impl<L: ToolLocator> GccCompatibleToolChain<L> {
    pub fn new(name: impl Into<String>, family: ToolChainFamily, host: Host, locator: L) -> Self {
        Self {
            name: name.into(),
            family,
            host,
            locator,
            registry: StrategyRegistry::new(),
            default_tools: ToolSet::defaults(family),
            configure_hooks: Vec::new(),
            can_use_command_file: family.can_use_command_file(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> String {
        format!("Tool chain '{}' ({})", self.name, self.family.display_name())
    }

    pub fn family(&self) -> ToolChainFamily {
        self.family
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Append directories to search for tools.
    pub fn path<I>(&mut self, dirs: I)
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        for dir in dirs {
            self.locator.add_path(dir.into());
        }
    }

    /// Directories searched for tools, in order.
    pub fn search_path(&self) -> Vec<PathBuf> {
        self.locator.path()
    }

    /// Support the named platform with the default tools.
    pub fn target(&mut self, platform_name: impl Into<String>) {
        self.target_with([platform_name.into()], |_| {});
    }

    /// Support the named platforms, configuring their tools with `action`.
    ///
    /// Takes priority over every platform registered before it.
    pub fn target_with<I, S, F>(&mut self, platform_names: I, action: F)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&mut ToolSet) + Send + Sync + 'static,
    {
        self.registry
            .register_with_priority(PlatformStrategy::named(platform_names, action));
    }

    /// Replace the executable every selection starts from.
    ///
    /// Platform strategies and hooks run afterwards and may override it.
    pub fn set_default_executable(&mut self, kind: ToolKind, executable: impl Into<String>) {
        self.default_tools.set_executable(kind, executable);
    }

    /// Run `hook` on the tool set of every selected platform.
    pub fn each_platform<F>(&mut self, hook: F)
    where
        F: Fn(&Platform, &mut ToolSet) + Send + Sync + 'static,
    {
        self.configure_hooks.push(Arc::new(hook));
    }

    pub fn set_can_use_command_file(&mut self, enabled: bool) {
        self.can_use_command_file = enabled;
    }

    /// Platform strategies in the order they are tried.
    pub fn strategies(&self) -> impl Iterator<Item = &PlatformStrategy> {
        self.registry.iter()
    }

    #[tracing::instrument(
        skip(self, platform),
        fields(toolchain = %self.name, platform = %platform.name)
    )]
    pub fn select(&self, platform: &Platform) -> ToolProvider {
        let Some(strategy) = self.registry.find_match(platform, &self.host) else {
            debug!("No platform strategy matches {}", platform);
            return ToolProvider::unavailable(vec![format!(
                "Don't know how to build for platform '{}'.",
                platform.name
            )]);
        };
        debug!("Configuring {} using strategy: {}", platform, strategy);

        let mut tools = strategy.configure(self.default_tools.clone(), &self.host);
        for hook in &self.configure_hooks {
            hook(platform, &mut tools);
        }

        let mut availability = ToolChainAvailability::new();
        probe(&tools, &self.locator, &mut availability);
        if !availability.is_available() {
            info!(
                "{} is not available for {}",
                self.display_name(),
                platform.name
            );
            return ToolProvider::unavailable(availability.into_reasons());
        }

        ToolProvider::Available(PlatformToolProvider::new(
            platform.clone(),
            tools,
            self.can_use_command_file,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::{MockToolLocator, SearchResult};
    use crate::platform::{Architecture, OperatingSystemFamily};
    use crate::runtime::RealRuntime;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn all_found() -> MockToolLocator {
        let mut locator = MockToolLocator::new();
        locator
            .expect_locate()
            .returning(|_, exe| SearchResult::Found(PathBuf::from("/usr/bin").join(exe)));
        locator
    }

    fn none_found() -> MockToolLocator {
        let mut locator = MockToolLocator::new();
        locator.expect_locate().returning(|kind, exe| {
            SearchResult::NotFound(format!(
                "Could not find {} '{}' in system path.",
                kind.display_name(),
                exe
            ))
        });
        locator
    }

    fn gcc_on(
        os: OperatingSystemFamily,
        locator: MockToolLocator,
    ) -> GccCompatibleToolChain<MockToolLocator> {
        GccCompatibleToolChain::new("gcc", ToolChainFamily::Gcc, Host::new(os), locator)
    }

    fn platform(os: OperatingSystemFamily, arch: Architecture) -> Platform {
        Platform::new("target", os, arch)
    }

    fn arguments(provider: &ToolProvider, kind: ToolKind) -> Vec<String> {
        provider.available().unwrap().tool_set.arguments(kind).to_vec()
    }

    #[test_log::test]
    fn test_foreign_os_is_structural_mismatch() {
        let families = [
            OperatingSystemFamily::Windows,
            OperatingSystemFamily::MacOs,
            OperatingSystemFamily::FreeBsd,
            OperatingSystemFamily::Solaris,
            OperatingSystemFamily::Other("haiku".into()),
        ];
        let architectures = [
            Architecture::ToolChainDefault,
            Architecture::I386,
            Architecture::Amd64,
            Architecture::Other("arm64".into()),
        ];

        let mut locator = MockToolLocator::new();
        locator.expect_locate().never();
        let tool_chain = gcc_on(OperatingSystemFamily::Linux, locator);

        for os in &families {
            for arch in &architectures {
                let target = Platform::new("foreign", os.clone(), arch.clone());
                let provider = tool_chain.select(&target);
                assert_eq!(
                    provider.reasons(),
                    ["Don't know how to build for platform 'foreign'."]
                );
            }
        }
    }

    #[test]
    fn test_amd64_flags_on_linux_host() {
        let tool_chain = gcc_on(OperatingSystemFamily::Linux, all_found());
        let provider = tool_chain.select(&platform(
            OperatingSystemFamily::Linux,
            Architecture::Amd64,
        ));

        for kind in [
            ToolKind::CCompiler,
            ToolKind::CppCompiler,
            ToolKind::ObjcCompiler,
            ToolKind::ObjcppCompiler,
            ToolKind::Linker,
        ] {
            assert_eq!(arguments(&provider, kind), ["-m64"], "{kind}");
        }
        assert_eq!(arguments(&provider, ToolKind::Assembler), ["--64"]);
        assert!(arguments(&provider, ToolKind::StaticLibArchiver).is_empty());
    }

    #[test]
    fn test_amd64_assembler_on_macos_host() {
        let tool_chain = gcc_on(OperatingSystemFamily::MacOs, all_found());
        let provider = tool_chain.select(&platform(
            OperatingSystemFamily::MacOs,
            Architecture::Amd64,
        ));

        let assembler = arguments(&provider, ToolKind::Assembler);
        assert_eq!(assembler, ["-arch", "x86_64"]);
        assert_eq!(arguments(&provider, ToolKind::Linker), ["-m64"]);
    }

    #[test]
    fn test_hook_arguments_follow_architecture_flags() {
        let mut tool_chain = gcc_on(OperatingSystemFamily::Linux, all_found());
        tool_chain.each_platform(|_, tools| {
            tools.with_arguments(ToolKind::CCompiler, |args| args.push("-g".into()));
        });

        let provider = tool_chain.select(&platform(
            OperatingSystemFamily::Linux,
            Architecture::Amd64,
        ));
        let c_args = arguments(&provider, ToolKind::CCompiler);
        assert_eq!(c_args, ["-m64", "-g"]);
        assert_eq!(c_args.iter().filter(|a| *a == "-m64").count(), 1);
    }

    #[test]
    fn test_i386_on_windows_host_but_not_amd64() {
        let tool_chain = gcc_on(OperatingSystemFamily::Windows, all_found());

        let x86 = tool_chain.select(&platform(OperatingSystemFamily::Windows, Architecture::I386));
        assert!(x86.is_available());
        assert_eq!(arguments(&x86, ToolKind::CCompiler), ["-m32"]);
        assert_eq!(arguments(&x86, ToolKind::Assembler), ["--32"]);

        let x64 = tool_chain.select(&platform(OperatingSystemFamily::Windows, Architecture::Amd64));
        assert_eq!(
            x64.unavailable_message().as_deref(),
            Some("Don't know how to build for platform 'target'.")
        );
    }

    #[test]
    fn test_custom_target_takes_priority_over_built_ins() {
        let mut tool_chain = gcc_on(OperatingSystemFamily::Linux, all_found());
        tool_chain.target_with(["custom-os"], |tools| {
            tools.with_arguments(ToolKind::CCompiler, |args| args.push("-DCUSTOM".into()));
        });

        let custom = Platform::new("custom-os", OperatingSystemFamily::Linux, Architecture::Amd64);
        let provider = tool_chain.select(&custom);

        assert_eq!(arguments(&provider, ToolKind::CCompiler), ["-DCUSTOM"]);
        assert!(arguments(&provider, ToolKind::Assembler).is_empty());
    }

    #[test]
    fn test_later_target_wins_over_earlier_target() {
        let mut tool_chain = gcc_on(OperatingSystemFamily::Linux, all_found());
        tool_chain.target_with(["arm"], |tools| {
            tools.set_executable(ToolKind::CCompiler, "old-gcc");
        });
        tool_chain.target_with(["arm"], |tools| {
            tools.set_executable(ToolKind::CCompiler, "new-gcc");
        });

        let arm = Platform::new(
            "arm",
            OperatingSystemFamily::Other("none".into()),
            Architecture::Other("arm".into()),
        );
        let provider = tool_chain.select(&arm);
        assert_eq!(
            provider.available().unwrap().tool(ToolKind::CCompiler).unwrap().executable,
            "new-gcc"
        );
    }

    #[test]
    fn test_target_without_action_uses_defaults() {
        let mut tool_chain = gcc_on(OperatingSystemFamily::Linux, all_found());
        tool_chain.target("embedded");

        let embedded = Platform::new(
            "embedded",
            OperatingSystemFamily::Other("none".into()),
            Architecture::ToolChainDefault,
        );
        let provider = tool_chain.select(&embedded);
        assert_eq!(
            provider.available().unwrap().tool_set,
            ToolSet::defaults(ToolChainFamily::Gcc)
        );
    }

    #[test_log::test]
    fn test_nothing_found_names_c_compiler() {
        let tool_chain = gcc_on(OperatingSystemFamily::Linux, none_found());
        let provider = tool_chain.select(&platform(
            OperatingSystemFamily::Linux,
            Architecture::ToolChainDefault,
        ));

        assert!(!provider.is_available());
        assert_eq!(
            provider.reasons(),
            ["Could not find C compiler 'gcc' in system path."]
        );
    }

    #[test]
    fn test_default_executable_yields_to_target_override() {
        let mut tool_chain = gcc_on(OperatingSystemFamily::Linux, all_found());
        tool_chain.set_default_executable(ToolKind::CCompiler, "gcc-13");
        tool_chain.target_with(["arm"], |tools| {
            tools.set_executable(ToolKind::CCompiler, "arm-none-eabi-gcc");
        });

        let arm = Platform::new(
            "arm",
            OperatingSystemFamily::Other("none".into()),
            Architecture::ToolChainDefault,
        );
        let provider = tool_chain.select(&arm);
        let tools = &provider.available().unwrap().tool_set;
        assert_eq!(tools.get(ToolKind::CCompiler).unwrap().executable, "arm-none-eabi-gcc");

        let native = tool_chain.select(&platform(OperatingSystemFamily::Linux, Architecture::I386));
        let tools = &native.available().unwrap().tool_set;
        assert_eq!(tools.get(ToolKind::CCompiler).unwrap().to_string(), "gcc-13 -m32");
    }

    #[test]
    fn test_hook_changes_reported_executable() {
        let mut tool_chain = gcc_on(OperatingSystemFamily::Linux, none_found());
        tool_chain.each_platform(|_, tools| tools.set_executable(ToolKind::CCompiler, "gcc-13"));

        let provider = tool_chain.select(&platform(
            OperatingSystemFamily::Linux,
            Architecture::ToolChainDefault,
        ));
        assert_eq!(
            provider.unavailable_message().as_deref(),
            Some("Could not find C compiler 'gcc-13' in system path.")
        );
    }

    #[test]
    fn test_only_c_compiler_found_is_available() {
        let mut locator = MockToolLocator::new();
        locator.expect_locate().returning(|kind, exe| match kind {
            ToolKind::CCompiler => SearchResult::Found(PathBuf::from("/usr/bin/gcc")),
            _ => SearchResult::NotFound(format!("missing {}", exe)),
        });
        let tool_chain = gcc_on(OperatingSystemFamily::Linux, locator);

        let provider = tool_chain.select(&platform(
            OperatingSystemFamily::Linux,
            Architecture::I386,
        ));
        assert!(provider.is_available());
    }

    #[test]
    fn test_object_file_suffix_follows_target_os() {
        let tool_chain = gcc_on(OperatingSystemFamily::Windows, all_found());
        let windows = tool_chain.select(&platform(
            OperatingSystemFamily::Windows,
            Architecture::ToolChainDefault,
        ));
        assert_eq!(windows.available().unwrap().object_file_suffix, ".obj");

        let mut tool_chain = gcc_on(OperatingSystemFamily::Linux, all_found());
        tool_chain.target("mingw-cross");
        let cross = Platform::new("mingw-cross", OperatingSystemFamily::Windows, Architecture::I386);
        assert_eq!(tool_chain.select(&cross).available().unwrap().object_file_suffix, ".obj");

        let linux = tool_chain.select(&platform(OperatingSystemFamily::Linux, Architecture::I386));
        assert_eq!(linux.available().unwrap().object_file_suffix, ".o");
    }

    #[test]
    fn test_command_file_flag() {
        let mut tool_chain = gcc_on(OperatingSystemFamily::Linux, all_found());
        let target = platform(OperatingSystemFamily::Linux, Architecture::ToolChainDefault);
        assert!(tool_chain.select(&target).available().unwrap().supports_command_file);

        tool_chain.set_can_use_command_file(false);
        assert!(!tool_chain.select(&target).available().unwrap().supports_command_file);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut tool_chain = gcc_on(OperatingSystemFamily::Linux, all_found());
        tool_chain.each_platform(|_, tools| {
            tools.with_arguments(ToolKind::Linker, |args| args.push("-lm".into()));
        });
        let target = platform(OperatingSystemFamily::Linux, Architecture::I386);

        let first = tool_chain.select(&target);
        let second = tool_chain.select(&target);

        assert_eq!(first, second);
        assert_eq!(arguments(&second, ToolKind::Linker), ["-m32", "-lm"]);
    }

    #[test]
    fn test_select_from_concurrent_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GccCompatibleToolChain<ToolSearchPath<RealRuntime>>>();

        let mut tool_chain = gcc_on(OperatingSystemFamily::Linux, all_found());
        tool_chain.each_platform(|_, tools| {
            tools.with_arguments(ToolKind::CCompiler, |args| args.push("-O2".into()));
        });
        let target = platform(OperatingSystemFamily::Linux, Architecture::Amd64);

        let providers: Vec<ToolProvider> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| tool_chain.select(&target)))
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        for provider in &providers {
            assert_eq!(arguments(provider, ToolKind::CCompiler), ["-m64", "-O2"]);
        }
    }

    #[test]
    fn test_hooks_run_in_registration_order_with_platform() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut tool_chain = gcc_on(OperatingSystemFamily::Linux, all_found());
        tool_chain.each_platform(move |platform, tools| {
            counter.fetch_add(1, Ordering::SeqCst);
            let define = format!("-DPLATFORM={}", platform.name);
            tools.with_arguments(ToolKind::CppCompiler, |args| args.push(define));
        });
        tool_chain.each_platform(|_, tools| {
            tools.with_arguments(ToolKind::CppCompiler, |args| args.push("-O2".into()));
        });

        let provider = tool_chain.select(&platform(
            OperatingSystemFamily::Linux,
            Architecture::ToolChainDefault,
        ));
        assert_eq!(
            arguments(&provider, ToolKind::CppCompiler),
            ["-DPLATFORM=target", "-O2"]
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_path_and_display_name() {
        let mut locator = MockToolLocator::new();
        locator.expect_add_path().times(2).return_const(());
        locator
            .expect_path()
            .returning(|| vec![PathBuf::from("/opt/a"), PathBuf::from("/opt/b")]);

        let mut tool_chain = GccCompatibleToolChain::new(
            "clang",
            ToolChainFamily::Clang,
            Host::new(OperatingSystemFamily::Linux),
            locator,
        );
        tool_chain.path(["/opt/a", "/opt/b"]);

        assert_eq!(tool_chain.search_path().len(), 2);
        assert_eq!(tool_chain.name(), "clang");
        assert_eq!(tool_chain.display_name(), "Tool chain 'clang' (Clang)");
        assert_eq!(tool_chain.family(), ToolChainFamily::Clang);
        assert!(tool_chain.host().os == OperatingSystemFamily::Linux);
    }

    #[test]
    fn test_strategies_listing() {
        let mut tool_chain = gcc_on(OperatingSystemFamily::Linux, all_found());
        tool_chain.target("custom-os");

        let listed: Vec<String> = tool_chain.strategies().map(|s| s.to_string()).collect();
        assert_eq!(
            listed,
            [
                "platforms named [custom-os]",
                "tool chain default architecture",
                "x86",
                "x86-64"
            ]
        );
    }
}
