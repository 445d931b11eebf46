//! crates/messaging/src/verbosity.rs
//! Verbosity levels and the rank comparison that decides whether a
//! diagnostic is shown.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Verbosity level recognised by the Caldera diagnostic router.
///
/// Levels order a strict hierarchy: each level shows everything the levels
/// below it show. [`Verbosity::Silent`] admits only errors while
/// [`Verbosity::Debug`] admits every diagnostic produced by a run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Verbosity {
    /// Errors only.
    Silent,
    /// Errors and warnings.
    Quiet,
    /// Errors, warnings, and standard messages.
    All,
    /// Everything, including debug output.
    Debug,
}

impl Verbosity {
    /// All levels in ascending rank order.
    ///
    /// The ordering matches the numeric ranks returned by [`Verbosity::rank`],
    /// so callers that need to enumerate the hierarchy (input validation,
    /// documentation generation, exhaustive tests) can iterate this constant
    /// instead of re-specifying the sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use messaging::Verbosity;
    ///
    /// let names: Vec<&str> = Verbosity::LEVELS
    ///     .into_iter()
    ///     .map(|level| level.as_str())
    ///     .collect();
    ///
    /// assert_eq!(names, ["silent", "quiet", "all", "debug"]);
    /// ```
    #[doc(alias = "verbosity levels")]
    pub const LEVELS: [Self; 4] = [Self::Silent, Self::Quiet, Self::All, Self::Debug];

    /// Returns the lowercase name used in configuration files and call sites.
    ///
    /// This is the canonical spelling accepted back by the [`FromStr`]
    /// implementation, so values obtained here always round-trip.
    ///
    /// # Examples
    ///
    /// ```
    /// use messaging::Verbosity;
    ///
    /// assert_eq!(Verbosity::Silent.as_str(), "silent");
    /// assert_eq!(Verbosity::Debug.as_str(), "debug");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Silent => "silent",
            Self::Quiet => "quiet",
            Self::All => "all",
            Self::Debug => "debug",
        }
    }

    /// Returns the numeric rank of this level.
    ///
    /// Ranks grow with permissiveness: `silent` is 0, `quiet` is 1, `all`
    /// is 2, and `debug` is 3. A diagnostic is shown when its own rank does
    /// not exceed the threshold rank in effect, see
    /// [`Verbosity::is_permitted`].
    ///
    /// # Examples
    ///
    /// ```
    /// use messaging::Verbosity;
    ///
    /// assert_eq!(Verbosity::Silent.rank(), 0);
    /// assert_eq!(Verbosity::Quiet.rank(), 1);
    /// assert_eq!(Verbosity::All.rank(), 2);
    /// assert_eq!(Verbosity::Debug.rank(), 3);
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Silent => 0,
            Self::Quiet => 1,
            Self::All => 2,
            Self::Debug => 3,
        }
    }

    /// Parses `value` as a level name and returns its rank.
    ///
    /// Accepts the same spellings as the [`FromStr`] implementation:
    /// surrounding whitespace is ignored and letter case is irrelevant.
    ///
    /// # Examples
    ///
    /// ```
    /// use messaging::Verbosity;
    ///
    /// assert_eq!(Verbosity::rank_of("quiet"), Ok(1));
    /// assert_eq!(Verbosity::rank_of(" Debug "), Ok(3));
    /// assert!(Verbosity::rank_of("urgent").is_err());
    /// ```
    pub fn rank_of(value: &str) -> Result<u8, ParseVerbosityError> {
        value.parse::<Self>().map(Self::rank)
    }

    /// Resolves the threshold rank for a caller.
    ///
    /// A caller-local level takes precedence over the global one; `None` or
    /// a blank string defers to `global`. Whichever level is selected is
    /// parsed with [`Verbosity::rank_of`], so a stale or misspelled setting
    /// surfaces as an error at the first routing attempt that consults it.
    ///
    /// # Examples
    ///
    /// ```
    /// use messaging::Verbosity;
    ///
    /// assert_eq!(Verbosity::effective_threshold(None, "all"), Ok(2));
    /// assert_eq!(Verbosity::effective_threshold(Some("silent"), "all"), Ok(0));
    /// assert_eq!(Verbosity::effective_threshold(Some("  "), "quiet"), Ok(1));
    /// ```
    pub fn effective_threshold(
        local: Option<&str>,
        global: &str,
    ) -> Result<u8, ParseVerbosityError> {
        match local {
            Some(level) if !level.trim().is_empty() => Self::rank_of(level),
            _ => Self::rank_of(global),
        }
    }

    /// Reports whether a diagnostic of rank `priority` is shown under a
    /// threshold of rank `threshold`.
    ///
    /// # Examples
    ///
    /// ```
    /// use messaging::Verbosity;
    ///
    /// // A warning (quiet, rank 1) under the default threshold (all, rank 2).
    /// assert!(Verbosity::is_permitted(1, 2));
    /// // Debug output stays hidden until the threshold reaches debug.
    /// assert!(!Verbosity::is_permitted(3, 2));
    /// ```
    #[must_use]
    pub const fn is_permitted(priority: u8, threshold: u8) -> bool {
        priority <= threshold
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Verbosity> for Cow<'static, str> {
    fn from(level: Verbosity) -> Self {
        Cow::Borrowed(level.as_str())
    }
}

/// Error returned when a string does not name a [`Verbosity`] level.
///
/// The offending value is preserved so configuration errors can be reported
/// back to the user verbatim.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("verbosity key '{value}' is not recognized; options are silent, quiet, all, debug")]
pub struct ParseVerbosityError {
    value: String,
}

impl ParseVerbosityError {
    /// Returns the string that failed to parse, exactly as supplied.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "quiet" => Ok(Self::Quiet),
            "all" => Ok(Self::All),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseVerbosityError {
                value: input.to_owned(),
            }),
        }
    }
}
