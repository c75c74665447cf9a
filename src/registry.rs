//! Strategy registry for resolving a target platform to a platform strategy.

use log::debug;

use crate::platform::{Host, Platform};
use crate::strategy::PlatformStrategy;

/// Ordered list of platform strategies.
///
/// Insertion policy:
/// - the built-ins are seeded once, in the order
///   `[ToolChainDefault, Intel32, Intel64]`;
/// - every later registration is placed ahead of everything already
///   present, so the most recently registered strategy has the highest
///   priority and the built-ins always stay at the back as fallback.
///
/// Lookup scans front to back and returns the first match, so overlapping
/// strategies are resolved purely by this order.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    strategies: Vec<PlatformStrategy>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self {
            strategies: PlatformStrategy::built_ins().into_iter().collect(),
        }
    }

    /// Register a strategy ahead of every strategy registered so far.
    pub fn register_with_priority(&mut self, strategy: PlatformStrategy) {
        debug!("Registering platform strategy: {}", strategy);
        self.strategies.insert(0, strategy);
    }

    /// The first strategy, in priority order, that matches `platform`.
    pub fn find_match(&self, platform: &Platform, host: &Host) -> Option<&PlatformStrategy> {
        self.strategies
            .iter()
            .find(|strategy| strategy.matches(platform, host))
    }

    /// Strategies in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &PlatformStrategy> {
        self.strategies.iter()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
