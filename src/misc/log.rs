/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library, mostly at the trace level, and mostly during a derivation.

Note, no log implementation is provided.
The `horn_cli` binary installs one when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to parsing [expressions](crate::structures::expression)
    pub const PARSE: &str = "parse";

    /// Logs related to the [knowledge base](crate::knowledge_base)
    pub const KNOWLEDGE_BASE: &str = "knowledge_base";

    /// Logs related to [backward chaining](crate::prover)
    pub const PROOF: &str = "proof";

    /// Logs related to the per-query proof cache
    pub const CACHE: &str = "cache";
}
