/*!
Configuration of a prover.

All configuration for a prover is contained within a [Config], which is copied into the context of each query.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The default limit on the depth of a derivation.
pub const DEPTH_LIMIT: usize = 512;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum depth of recursion during a single query.
    ///
    /// Each atom whose proof by rules is in progress is one level, and operators are not counted.
    /// So, an acyclic derivation never exceeds twenty six levels.
    pub depth_limit: ConfigOption<usize>,

    /// Fail a query when some goal is required during its own derivation.
    ///
    /// Without this, a cycle is only noticed on reaching the depth limit.
    pub cycle_check: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            depth_limit: ConfigOption {
                name: "depth_limit",
                min: 1,
                max: 4_096,
                value: DEPTH_LIMIT,
            },

            cycle_check: ConfigOption {
                name: "cycle_check",
                min: false,
                max: true,
                value: false,
            },
        }
    }
}
