#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `messaging` is the diagnostic chokepoint of the Caldera simulation
//! framework. Every component reports through one [`MessageHandler`], which
//! decides visibility from a four-level verbosity policy, renders the
//! fixed-width line layout shared by all Caldera output, and either prints
//! the line or, for errors, signals a fault the host can catch.
//!
//! # Design
//!
//! [`Verbosity`] is the pure policy: the symbolic levels `silent`, `quiet`,
//! `all`, and `debug` map to ranks 0 through 3, and a diagnostic is shown
//! when its priority rank does not exceed the threshold rank in effect.
//! [`Message`] pairs the text with a tag and a priority; its four
//! constructors produce the canonical error, warning, standard, and debug
//! shapes. [`Caller`] is the capability components implement to identify
//! themselves, with optional per-component verbosity overrides.
//! [`MessageHandler`] ties these together around an
//! [`io::Write`](std::io::Write) sink and carries the run-wide settings
//! applied by [`MessageHandler::initialize`].
//!
//! Faults are values, not unwinding: routing an unsuppressed error returns
//! [`RouteError::Fault`] carrying a [`SignaledFault`], and the caller
//! decides whether that stops the run.
//!
//! # Invariants
//!
//! - A diagnostic is shown iff its priority rank does not exceed the
//!   effective threshold rank; everything else is dropped without a trace,
//!   errors included.
//! - Every permitted, non-fault dispatch writes exactly one formatted line
//!   followed by a newline; nothing else reaches the sink.
//! - Column widths are counted in characters, and the body is appended
//!   verbatim after the `" -> "` separator.
//! - Initialization overwrites every setting: absent fields revert to their
//!   defaults rather than keeping previous values.
//!
//! # Errors
//!
//! Routing surfaces three failures through [`RouteError`]: an unrecognised
//! verbosity name (from configuration, a caller override, or a call-site
//! priority), the deliberate [`SignaledFault`] raised by an error message,
//! and I/O errors from the sink. Misconfigured verbosity always propagates;
//! it is never downgraded to output.
//!
//! # Examples
//!
//! Route diagnostics for a component under a quiet global level:
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use messaging::{InitOptions, Message, MessageHandler};
//!
//! let mut handler = MessageHandler::new(Vec::new());
//! handler.initialize(&InitOptions {
//!     verbosity: Some("quiet".to_owned()),
//!     caller_length: NonZeroUsize::new(12),
//!     ..InitOptions::default()
//! });
//!
//! handler.route("Simulation", Message::warning("low disk"))?;
//! handler.route("Simulation", Message::info("hidden under quiet"))?;
//!
//! let output = String::from_utf8(handler.into_inner()).unwrap();
//! assert_eq!(
//!     output,
//!     format!("{:<12}: {:<15} -> low disk\n", "Simulation", "Warning"),
//! );
//! # Ok::<(), messaging::RouteError>(())
//! ```
//!
//! A component with its own verbosity override and a fault that stops it:
//!
//! ```
//! use std::fmt;
//!
//! use messaging::{Caller, FaultKind, Message, MessageHandler};
//!
//! struct Sampler;
//!
//! impl fmt::Display for Sampler {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("MonteCarlo")
//!     }
//! }
//!
//! impl Caller for Sampler {
//!     fn local_verbosity(&self) -> Option<&str> {
//!         Some("debug")
//!     }
//! }
//!
//! let mut handler = MessageHandler::new(Vec::new());
//!
//! // The local override admits debug output the global `all` would drop.
//! handler.route(&Sampler, Message::debug("step accepted"))?;
//!
//! let err = handler
//!     .route(&Sampler, Message::error(FaultKind::NO_MORE_SAMPLES, "budget spent"))
//!     .unwrap_err();
//! let fault = err.as_fault().expect("errors signal faults");
//! assert_eq!(fault.kind(), &FaultKind::NO_MORE_SAMPLES);
//! # Ok::<(), messaging::RouteError>(())
//! ```
//!
//! # See also
//!
//! - [`strings`] for the truthy-string table used when reading boolean
//!   configuration attributes.
//! - [`MessageHandler::format_line`] for the exact line layout.

mod caller;
mod config;
mod handler;
mod message;
pub mod strings;
mod verbosity;

pub use caller::Caller;
pub use config::InitOptions;
pub use handler::{MessageHandler, RouteError, SignaledFault};
pub use message::{FaultKind, Message};
pub use verbosity::{ParseVerbosityError, Verbosity};
