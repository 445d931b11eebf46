//! crates/messaging/src/config.rs
//! Initialization mapping applied to a message handler.

use std::num::NonZeroUsize;

/// Settings recognised by [`MessageHandler::initialize`](crate::MessageHandler::initialize).
///
/// Every field is optional; an absent field resets the corresponding handler
/// setting to its documented default rather than leaving it untouched.
/// Values arrive as loosely typed text because the mapping is usually read
/// straight out of a simulation input file.
///
/// With the `serde` feature enabled the mapping deserializes from the
/// camelCase keys used by input files (`verbosity`, `callerLength`,
/// `tagLength`, `suppressErrs`), and unknown keys are ignored.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct InitOptions {
    /// Global verbosity level name. Defaults to `all`.
    ///
    /// The name is kept as supplied and validated lazily, at the first
    /// routing attempt that consults it.
    pub verbosity: Option<String>,
    /// Width of the caller column, in characters. Defaults to 25.
    pub caller_length: Option<NonZeroUsize>,
    /// Width of the tag column, in characters. Defaults to 15.
    pub tag_length: Option<NonZeroUsize>,
    /// Whether faults are demoted to printed lines. Defaults to off.
    ///
    /// The value is matched against [`strings::TRUTHY`](crate::strings::TRUTHY);
    /// anything else, including `None`, leaves faults enabled.
    pub suppress_errs: Option<String>,
}
