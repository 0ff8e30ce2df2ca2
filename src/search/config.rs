//! Solver configuration.

use crate::error::ConfigError;
use crate::heuristics::TieBreak;

/// Configuration for [`CspRunner`](super::CspRunner).
///
/// The defaults run the full pipeline (AC-3, MRV with registration-order
/// ties, LCV, forward checking) with no budget.
///
/// # Examples
///
/// ```
/// use u_csp::heuristics::TieBreak;
/// use u_csp::search::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_tie_break(TieBreak::Degree)
///     .with_max_nodes(10_000)
///     .with_time_limit_ms(500);
/// assert!(config.use_ac3);
/// assert_eq!(config.max_nodes, 10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Run AC-3 before search. Disabling it never changes which
    /// assignments are valid, only how much of the tree is explored.
    pub use_ac3: bool,

    /// Order values by least-constraining-value. When off, values are
    /// tried in domain order.
    pub use_lcv: bool,

    /// How MRV breaks ties between equally small domains.
    pub tie_break: TieBreak,

    /// Maximum tentative assignments before aborting. 0 = no limit.
    pub max_nodes: usize,

    /// Wall-clock budget in milliseconds. 0 = no limit.
    pub time_limit_ms: i64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            use_ac3: true,
            use_lcv: true,
            tie_break: TieBreak::default(),
            max_nodes: 0,
            time_limit_ms: 0,
        }
    }
}

impl SolverConfig {
    /// Enables or disables AC-3 preprocessing.
    pub fn with_ac3(mut self, enabled: bool) -> Self {
        self.use_ac3 = enabled;
        self
    }

    /// Enables or disables LCV value ordering.
    pub fn with_lcv(mut self, enabled: bool) -> Self {
        self.use_lcv = enabled;
        self
    }

    /// Sets the MRV tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the node budget.
    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = n;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit_ms(mut self, ms: i64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_limit_ms < 0 {
            return Err(ConfigError::NegativeTimeLimit(self.time_limit_ms));
        }
        Ok(())
    }
}
