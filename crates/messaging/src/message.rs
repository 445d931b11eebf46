//! crates/messaging/src/message.rs
//! Diagnostic payloads and the fault kinds error diagnostics carry.

use std::borrow::Cow;
use std::fmt;

use crate::verbosity::Verbosity;

/// Names the abnormal condition an error diagnostic signals.
///
/// Kinds are opaque to the router: it never branches on the name, it only
/// carries the kind through to the resulting
/// [`SignaledFault`](crate::SignaledFault) so the code that catches the
/// fault can tell conditions apart.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FaultKind(Cow<'static, str>);

impl FaultKind {
    /// Raised by sampling components once no further samples are required,
    /// so the surrounding loop can wind down instead of treating the stop
    /// as a failure.
    pub const NO_MORE_SAMPLES: Self = Self(Cow::Borrowed("NoMoreSamplesNeeded"));

    /// Creates a fault kind with the given name.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the kind's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for FaultKind {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

/// A single diagnostic awaiting routing.
///
/// A message pairs the text a caller wants shown with the tag printed next
/// to it and the priority level that decides visibility: the message is
/// shown only when its priority's rank does not exceed the threshold in
/// effect for the caller. The four constructors produce the canonical
/// shapes, and the priority is stored as the level's name so call sites
/// can supply it the same way configuration does.
///
/// # Examples
///
/// ```
/// use messaging::{Message, Verbosity};
///
/// let plain = Message::warning("low disk");
/// assert_eq!(plain.tag(), "Warning");
/// assert_eq!(plain.priority(), "quiet");
///
/// let promoted = Message::debug("step rejected").with_priority(Verbosity::Quiet);
/// assert_eq!(promoted.tag(), "DEBUG");
/// assert_eq!(promoted.priority(), "quiet");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use = "constructed messages must be routed to reach users"]
pub struct Message {
    pub(crate) fault: Option<FaultKind>,
    pub(crate) tag: Cow<'static, str>,
    pub(crate) text: Cow<'static, str>,
    pub(crate) priority: Cow<'static, str>,
}

impl Message {
    /// Creates an error diagnostic that signals a fault of kind `kind` when
    /// routed, unless the handler suppresses faults.
    ///
    /// Defaults to tag `ERROR` and priority `silent` (rank 0), so errors
    /// clear every threshold. Overriding the priority upward makes the
    /// error subject to dropping like any other diagnostic.
    #[inline]
    pub fn error<T: Into<Cow<'static, str>>>(kind: FaultKind, text: T) -> Self {
        Self {
            fault: Some(kind),
            tag: Cow::Borrowed("ERROR"),
            text: text.into(),
            priority: Cow::Borrowed(Verbosity::Silent.as_str()),
        }
    }

    /// Creates a warning diagnostic with tag `Warning` and priority `quiet`.
    #[inline]
    pub fn warning<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self {
            fault: None,
            tag: Cow::Borrowed("Warning"),
            text: text.into(),
            priority: Cow::Borrowed(Verbosity::Quiet.as_str()),
        }
    }

    /// Creates a standard diagnostic with tag `Message` and priority `all`.
    #[inline]
    pub fn info<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self {
            fault: None,
            tag: Cow::Borrowed("Message"),
            text: text.into(),
            priority: Cow::Borrowed(Verbosity::All.as_str()),
        }
    }

    /// Creates a debug diagnostic with tag `DEBUG` and priority `debug`.
    #[inline]
    pub fn debug<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self {
            fault: None,
            tag: Cow::Borrowed("DEBUG"),
            text: text.into(),
            priority: Cow::Borrowed(Verbosity::Debug.as_str()),
        }
    }

    /// Replaces the tag shown next to the caller label.
    #[must_use = "with_tag returns the modified message"]
    pub fn with_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Replaces the priority level that decides this message's visibility.
    ///
    /// Accepts a [`Verbosity`] value or any string; strings are validated
    /// when the message is routed, matching how configured levels are
    /// handled.
    #[must_use = "with_priority returns the modified message"]
    pub fn with_priority(mut self, priority: impl Into<Cow<'static, str>>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Returns the fault kind this message signals, if it is an error.
    #[must_use]
    pub fn fault_kind(&self) -> Option<&FaultKind> {
        self.fault.as_ref()
    }

    /// Reports whether routing this message can signal a fault.
    #[must_use]
    pub fn is_fault(&self) -> bool {
        self.fault.is_some()
    }

    /// Returns the tag printed in the tag column.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the diagnostic text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the name of the priority level.
    #[must_use]
    pub fn priority(&self) -> &str {
        &self.priority
    }
}
