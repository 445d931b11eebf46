//! crates/messaging/src/caller.rs
//! Capability trait identifying the component a diagnostic speaks for.

use std::borrow::Cow;
use std::fmt;

/// A simulation component that emits diagnostics through a
/// [`MessageHandler`](crate::MessageHandler).
///
/// The trait is a capability, not a base class: any type that can display
/// itself qualifies, and both methods have defaults. Implementors override
/// [`Caller::print_tag`] when the label shown in the caller column should
/// differ from the [`Display`](fmt::Display) rendering, and
/// [`Caller::local_verbosity`] when the component carries its own verbosity
/// setting that overrides the global one.
///
/// Plain `&str` and `String` labels implement the trait, so ad-hoc call
/// sites need no wrapper type.
///
/// # Examples
///
/// ```
/// use std::fmt;
///
/// use messaging::Caller;
///
/// struct Sampler {
///     verbosity: Option<String>,
/// }
///
/// impl fmt::Display for Sampler {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("MonteCarlo")
///     }
/// }
///
/// impl Caller for Sampler {
///     fn local_verbosity(&self) -> Option<&str> {
///         self.verbosity.as_deref()
///     }
/// }
///
/// let sampler = Sampler { verbosity: Some("debug".to_owned()) };
/// assert_eq!(sampler.print_tag(), "MonteCarlo");
/// assert_eq!(sampler.local_verbosity(), Some("debug"));
/// ```
pub trait Caller: fmt::Display {
    /// Returns the label printed in the caller column.
    ///
    /// Defaults to the [`Display`](fmt::Display) rendering of the value.
    fn print_tag(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    /// Returns this caller's verbosity override, if it has one.
    ///
    /// `None` (the default) and blank strings defer to the handler's global
    /// level. The returned name is validated when a message is routed, not
    /// here.
    fn local_verbosity(&self) -> Option<&str> {
        None
    }
}

impl Caller for str {
    fn print_tag(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Caller for String {
    fn print_tag(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}
