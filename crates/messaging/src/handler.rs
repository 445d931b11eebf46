//! crates/messaging/src/handler.rs
//! The routing chokepoint that filters, formats, and dispatches diagnostics.

use std::io::{self, Write};
use std::num::NonZeroUsize;

use thiserror::Error;

use crate::caller::Caller;
use crate::config::InitOptions;
use crate::message::{FaultKind, Message};
use crate::strings;
use crate::verbosity::{ParseVerbosityError, Verbosity};

const DEFAULT_CALLER_LENGTH: usize = 25;
const DEFAULT_TAG_LENGTH: usize = 15;

/// Routes every diagnostic a simulation run produces to one sink.
///
/// The handler owns the output stream together with the run-wide settings:
/// the global verbosity level, the two column widths used by
/// [`format_line`](Self::format_line), and the fault-suppression flag. A
/// freshly constructed handler behaves exactly like one initialized from an
/// empty mapping: verbosity `all`, caller column 25, tag column 15, faults
/// enabled.
///
/// The global verbosity is stored as the configured text and validated
/// lazily, at the first [`route`](Self::route) call that consults it, so
/// initialization itself never fails.
///
/// # Examples
///
/// Collect diagnostics into an in-memory buffer and inspect the output:
///
/// ```
/// use messaging::{Message, MessageHandler};
///
/// let mut handler = MessageHandler::new(Vec::<u8>::new());
///
/// handler.route("Simulation", Message::warning("low disk"))?;
/// handler.route("Simulation", Message::debug("not shown under all"))?;
///
/// let output = String::from_utf8(handler.into_inner()).unwrap();
/// assert_eq!(
///     output,
///     format!("{:<25}: {:<15} -> low disk\n", "Simulation", "Warning"),
/// );
/// # Ok::<(), messaging::RouteError>(())
/// ```
///
/// Errors signal a fault instead of printing:
///
/// ```
/// use messaging::{FaultKind, Message, MessageHandler, RouteError};
///
/// let mut handler = MessageHandler::new(Vec::<u8>::new());
/// let err = handler
///     .route("Sampler", Message::error(FaultKind::NO_MORE_SAMPLES, "exhausted"))
///     .unwrap_err();
///
/// match err {
///     RouteError::Fault(fault) => {
///         assert_eq!(fault.kind(), &FaultKind::NO_MORE_SAMPLES);
///         assert!(fault.line().ends_with("-> exhausted"));
///     }
///     other => panic!("expected a fault, got {other}"),
/// }
///
/// // Nothing reaches the sink on the fault path.
/// assert!(handler.into_inner().is_empty());
/// ```
#[derive(Debug)]
pub struct MessageHandler<W> {
    sink: W,
    verbosity: String,
    caller_length: usize,
    tag_length: usize,
    suppress_errs: bool,
}

impl<W> MessageHandler<W> {
    /// Creates a handler with default settings writing to `sink`.
    #[must_use]
    pub fn new(sink: W) -> Self {
        let mut handler = Self {
            sink,
            verbosity: String::new(),
            caller_length: 0,
            tag_length: 0,
            suppress_errs: false,
        };
        handler.initialize(&InitOptions::default());
        handler
    }

    /// Applies an initialization mapping.
    ///
    /// Every setting is overwritten: a field present in `options` takes its
    /// supplied value and an absent field reverts to its default. Calling
    /// this with an empty mapping therefore resets the handler. The
    /// verbosity name is accepted as-is here and validated on the next
    /// [`route`](Self::route) call.
    pub fn initialize(&mut self, options: &InitOptions) {
        self.verbosity = options
            .verbosity
            .clone()
            .unwrap_or_else(|| Verbosity::All.as_str().to_owned());
        self.caller_length = options
            .caller_length
            .map_or(DEFAULT_CALLER_LENGTH, NonZeroUsize::get);
        self.tag_length = options
            .tag_length
            .map_or(DEFAULT_TAG_LENGTH, NonZeroUsize::get);
        self.suppress_errs = options
            .suppress_errs
            .as_deref()
            .is_some_and(strings::means_true);
    }

    /// Returns the configured global verbosity name.
    #[must_use]
    pub fn verbosity(&self) -> &str {
        &self.verbosity
    }

    /// Returns the width of the caller column, in characters.
    #[must_use]
    pub const fn caller_length(&self) -> usize {
        self.caller_length
    }

    /// Returns the width of the tag column, in characters.
    #[must_use]
    pub const fn tag_length(&self) -> usize {
        self.tag_length
    }

    /// Reports whether faults are demoted to printed lines.
    #[must_use]
    pub const fn suppress_errs(&self) -> bool {
        self.suppress_errs
    }

    /// Formats one diagnostic line without emitting it.
    ///
    /// The layout is fixed: `label` left-justified into the caller column,
    /// `": "`, `tag` left-justified into the tag column, `" -> "`, then
    /// `body` verbatim. Both columns pad or truncate to exactly their
    /// configured width, counted in characters; the body is never touched,
    /// so embedded newlines pass through unescaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use messaging::MessageHandler;
    ///
    /// let handler = MessageHandler::new(Vec::<u8>::new());
    /// let line = handler.format_line("a-very-long-component-name-here", "Warning", "x");
    ///
    /// assert!(line.starts_with("a-very-long-component-nam: "));
    /// assert_eq!(line.len(), 25 + 2 + 15 + 4 + 1);
    /// ```
    #[must_use]
    pub fn format_line(&self, label: &str, tag: &str, body: &str) -> String {
        let mut line =
            String::with_capacity(self.caller_length + self.tag_length + body.len() + 6);
        push_column(&mut line, label, self.caller_length);
        line.push_str(": ");
        push_column(&mut line, tag, self.tag_length);
        line.push_str(" -> ");
        line.push_str(body);
        line
    }

    /// Borrows the underlying sink.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Mutably borrows the underlying sink.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Consumes the handler and returns the sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl MessageHandler<io::Stdout> {
    /// Creates a handler with default settings writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> Default for MessageHandler<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> MessageHandler<W>
where
    W: Write,
{
    /// Routes one diagnostic on behalf of `caller`.
    ///
    /// The pipeline is linear: rank the message's priority, resolve the
    /// caller's threshold (its local level when set and non-blank, the
    /// global level otherwise), and compare. A message whose priority rank
    /// exceeds the threshold rank is dropped without a trace and the call
    /// returns `Ok(())`, errors included. Dropping unshown errors is
    /// deliberate: the default `silent` priority on
    /// [`Message::error`] is what keeps faults visible under every level,
    /// and a caller that raises the priority of an error accepts that it
    /// can vanish.
    ///
    /// A permitted message is formatted with
    /// [`format_line`](Self::format_line) and then dispatched. Non-error
    /// messages are written to the sink with a trailing newline. An error
    /// message signals [`RouteError::Fault`] carrying the formatted line
    /// and the message's [`FaultKind`]; with
    /// [`suppress_errs`](Self::suppress_errs) set, it is written like any
    /// other line instead.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InvalidVerbosity`] when the message priority, the
    ///   caller-local level, or the configured global level is not one of
    ///   the four level names. This always propagates, it is never
    ///   suppressed.
    /// - [`RouteError::Fault`] for a permitted, unsuppressed error message.
    /// - [`RouteError::Io`] when the sink rejects the write.
    pub fn route<C>(&mut self, caller: &C, message: Message) -> Result<(), RouteError>
    where
        C: Caller + ?Sized,
    {
        let priority = Verbosity::rank_of(&message.priority)?;
        let threshold =
            Verbosity::effective_threshold(caller.local_verbosity(), &self.verbosity)?;
        if !Verbosity::is_permitted(priority, threshold) {
            return Ok(());
        }

        let label = caller.print_tag();
        let line = self.format_line(&label, &message.tag, &message.text);

        match message.fault {
            Some(kind) if !self.suppress_errs => Err(SignaledFault { kind, line }.into()),
            _ => {
                writeln!(self.sink, "{line}")?;
                Ok(())
            }
        }
    }

    /// Flushes the underlying sink.
    ///
    /// # Errors
    ///
    /// Propagates the [`io::Error`] reported by the sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

/// Pads or truncates `value` to exactly `width` characters.
fn push_column(line: &mut String, value: &str, width: usize) {
    let mut written = 0;
    for ch in value.chars().take(width) {
        line.push(ch);
        written += 1;
    }
    for _ in written..width {
        line.push(' ');
    }
}

/// The deliberate hard-stop raised by routing an unsuppressed error.
///
/// Carries the fault kind chosen by the caller and the fully formatted
/// diagnostic line; displaying the fault shows the line, so propagating it
/// up an error chain loses nothing over printing.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{line}")]
pub struct SignaledFault {
    kind: FaultKind,
    line: String,
}

impl SignaledFault {
    /// Returns the fault kind named by the caller that raised the error.
    #[must_use]
    pub fn kind(&self) -> &FaultKind {
        &self.kind
    }

    /// Returns the formatted diagnostic line.
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Consumes the fault and returns the kind and line.
    #[must_use]
    pub fn into_parts(self) -> (FaultKind, String) {
        (self.kind, self.line)
    }
}

/// Failure surface of [`MessageHandler::route`].
#[derive(Debug, Error)]
pub enum RouteError {
    /// A verbosity name did not parse, whether it arrived from
    /// configuration, a caller-local override, or a call-site priority.
    #[error(transparent)]
    InvalidVerbosity(#[from] ParseVerbosityError),
    /// A permitted error message signaled its fault.
    #[error(transparent)]
    Fault(#[from] SignaledFault),
    /// The sink rejected the formatted line.
    #[error("failed to write diagnostic line: {0}")]
    Io(#[from] io::Error),
}

impl RouteError {
    /// Returns the signaled fault when this error is the deliberate
    /// hard-stop path rather than a configuration or I/O problem.
    #[must_use]
    pub fn as_fault(&self) -> Option<&SignaledFault> {
        match self {
            Self::Fault(fault) => Some(fault),
            _ => None,
        }
    }
}
