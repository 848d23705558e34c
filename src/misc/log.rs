/*!
Miscellaneous items related to [logging](log).

Calls to the log macros are made throughout the library, narrowed by target so
output can be filtered to relevant parts.

Note, no log implementation is provided. For more details, see [log].

For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
- Logs related to the encoder can be filtered with `RUST_LOG=encoder …`, or
- Logs of the search without per-flip detail with `RUST_LOG=search=debug …`
*/

/// Targets to be used within a [log] macro.
pub mod targets {
    /// Logs related to the [atom database](crate::db::atom)
    pub const ATOM_DB: &str = "atom_db";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to rule completion
    pub const COMPLETION: &str = "completion";

    /// Logs related to the [constraint constructors](crate::builder)
    pub const ENCODER: &str = "encoder";

    /// Logs related to the [search](crate::procedures)
    pub const SEARCH: &str = "search";
}
