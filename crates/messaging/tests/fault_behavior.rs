//! Integration tests for fault signaling and suppression.
//!
//! These tests verify that routing an error message signals a fault
//! carrying the formatted line, that the suppression flag demotes faults
//! to printed lines, and that the threshold drops unshown errors entirely
//! instead of raising them.

use messaging::{FaultKind, InitOptions, Message, MessageHandler, RouteError};

fn suppressing() -> InitOptions {
    InitOptions {
        suppress_errs: Some("yes".to_owned()),
        ..InitOptions::default()
    }
}

// ============================================================================
// Signaling Tests
// ============================================================================

/// Verifies a permitted error signals a fault instead of printing.
#[test]
fn permitted_error_signals_fault() {
    let mut handler = MessageHandler::new(Vec::<u8>::new());
    let err = handler
        .route("Sampler", Message::error(FaultKind::new("BadInput"), "bad input"))
        .unwrap_err();

    assert!(matches!(err, RouteError::Fault(_)));
    assert!(handler.into_inner().is_empty());
}

/// Verifies the fault carries the caller-chosen kind.
#[test]
fn fault_carries_the_callers_kind() {
    let mut handler = MessageHandler::new(Vec::<u8>::new());
    let err = handler
        .route("Sampler", Message::error(FaultKind::NO_MORE_SAMPLES, "exhausted"))
        .unwrap_err();

    let fault = err.as_fault().expect("errors signal faults");
    assert_eq!(fault.kind(), &FaultKind::NO_MORE_SAMPLES);
    assert_eq!(fault.kind().as_str(), "NoMoreSamplesNeeded");
}

/// Verifies the fault carries the same line format_line would produce.
#[test]
fn fault_line_matches_format_line() {
    let mut handler = MessageHandler::new(Vec::<u8>::new());
    let expected = handler.format_line("Sampler", "ERROR", "exhausted");

    let err = handler
        .route("Sampler", Message::error(FaultKind::new("Stop"), "exhausted"))
        .unwrap_err();

    assert_eq!(err.as_fault().expect("fault").line(), expected);
}

/// Verifies displaying the fault shows the formatted line.
#[test]
fn fault_displays_as_the_line() {
    let mut handler = MessageHandler::new(Vec::<u8>::new());
    let err = handler
        .route("Sampler", Message::error(FaultKind::new("Stop"), "done"))
        .unwrap_err();

    let line = err.as_fault().expect("fault").line().to_owned();
    assert_eq!(err.to_string(), line);
}

/// Verifies into_parts hands back both the kind and the line.
#[test]
fn fault_into_parts_returns_kind_and_line() {
    let mut handler = MessageHandler::new(Vec::<u8>::new());
    let err = handler
        .route("Driver", Message::error(FaultKind::NO_MORE_SAMPLES, "budget spent"))
        .unwrap_err();

    let RouteError::Fault(fault) = err else {
        panic!("expected a fault");
    };
    let (kind, line) = fault.into_parts();
    assert_eq!(kind, FaultKind::NO_MORE_SAMPLES);
    assert!(line.ends_with("-> budget spent"));
}

/// Verifies distinct fault kinds stay distinguishable to the host.
#[test]
fn fault_kinds_remain_distinguishable() {
    let mut handler = MessageHandler::new(Vec::<u8>::new());

    let first = handler
        .route("A", Message::error(FaultKind::new("ConvergenceFailure"), "diverged"))
        .unwrap_err();
    let second = handler
        .route("B", Message::error(FaultKind::NO_MORE_SAMPLES, "done"))
        .unwrap_err();

    let first_kind = first.as_fault().expect("fault").kind().clone();
    let second_kind = second.as_fault().expect("fault").kind().clone();
    assert_ne!(first_kind, second_kind);
    assert_eq!(second_kind, FaultKind::NO_MORE_SAMPLES);
}

// ============================================================================
// Suppression Tests
// ============================================================================

/// Verifies suppression prints the line instead of signaling.
#[test]
fn suppressed_error_prints_instead_of_signaling() {
    let mut handler = MessageHandler::new(Vec::<u8>::new());
    handler.initialize(&suppressing());

    handler
        .route("Sampler", Message::error(FaultKind::new("BadInput"), "bad input"))
        .expect("suppressed faults do not raise");

    let output = String::from_utf8(handler.into_inner()).expect("utf-8");
    assert_eq!(
        output,
        format!("{:<25}: {:<15} -> bad input\n", "Sampler", "ERROR"),
    );
}

/// Verifies a suppressed error line keeps the ERROR tag.
#[test]
fn suppressed_error_is_tagged_like_an_error() {
    let mut handler = MessageHandler::new(Vec::<u8>::new());
    handler.initialize(&suppressing());

    handler
        .route("Sampler", Message::error(FaultKind::new("BadInput"), "oops"))
        .expect("suppressed faults do not raise");
    handler
        .route("Sampler", Message::warning("oops"))
        .expect("warnings never raise");

    let output = String::from_utf8(handler.into_inner()).expect("utf-8");
    let mut lines = output.lines();
    let error_line = lines.next().expect("error line");
    let warning_line = lines.next().expect("warning line");

    assert!(error_line.contains("ERROR"));
    assert!(warning_line.contains("Warning"));
    // Apart from the tag column the two lines agree.
    assert_eq!(error_line.len(), warning_line.len());
}

/// Verifies suppression does not rescue invalid verbosity strings.
#[test]
fn suppression_never_absorbs_invalid_verbosity() {
    let mut handler = MessageHandler::new(Vec::<u8>::new());
    handler.initialize(&InitOptions {
        verbosity: Some("loud".to_owned()),
        suppress_errs: Some("yes".to_owned()),
        ..InitOptions::default()
    });

    let err = handler
        .route("Sim", Message::info("probe"))
        .unwrap_err();
    assert!(matches!(err, RouteError::InvalidVerbosity(_)));
}

// ============================================================================
// Invalid Priority Tests
// ============================================================================

/// Verifies an unrecognized call-site priority fails naming the value and
/// the valid options.
#[test]
fn unrecognized_priority_names_value_and_options() {
    let mut handler = MessageHandler::new(Vec::<u8>::new());
    let err = handler
        .route(
            "Sampler",
            Message::error(FaultKind::new("BadInput"), "bad input").with_priority("urgent"),
        )
        .unwrap_err();

    let RouteError::InvalidVerbosity(parse_err) = err else {
        panic!("expected an invalid-verbosity error");
    };
    assert_eq!(parse_err.value(), "urgent");
    let msg = parse_err.to_string();
    assert!(msg.contains("urgent"));
    for option in ["silent", "quiet", "all", "debug"] {
        assert!(msg.contains(option), "{msg:?} should list {option}");
    }
}

/// Verifies an invalid priority fails even when the threshold would have
/// dropped the message anyway.
#[test]
fn invalid_priority_fails_before_the_threshold_drop() {
    let mut handler = MessageHandler::new(Vec::<u8>::new());
    handler.initialize(&InitOptions {
        verbosity: Some("silent".to_owned()),
        ..InitOptions::default()
    });

    let err = handler
        .route("Sim", Message::info("never shown").with_priority("urgent"))
        .unwrap_err();
    assert!(matches!(err, RouteError::InvalidVerbosity(_)));
    assert!(handler.into_inner().is_empty());
}

// ============================================================================
// Threshold Interaction Tests
// ============================================================================

/// Verifies an error below the threshold is dropped, not raised.
#[test]
fn unpermitted_error_is_dropped_entirely() {
    let mut handler = MessageHandler::new(Vec::<u8>::new());
    handler.initialize(&InitOptions {
        verbosity: Some("quiet".to_owned()),
        ..InitOptions::default()
    });

    // Raising the priority to `all` makes the error subject to the
    // threshold like any other message.
    handler
        .route(
            "Sampler",
            Message::error(FaultKind::new("Ignorable"), "never seen").with_priority("all"),
        )
        .expect("unpermitted errors vanish");

    assert!(handler.into_inner().is_empty());
}

/// Verifies default-priority errors surface under every level.
#[test]
fn default_priority_error_signals_under_every_level() {
    for level in ["silent", "quiet", "all", "debug"] {
        let mut handler = MessageHandler::new(Vec::<u8>::new());
        handler.initialize(&InitOptions {
            verbosity: Some(level.to_owned()),
            ..InitOptions::default()
        });

        let result = handler.route("Sim", Message::error(FaultKind::new("Hard"), "stop"));
        assert!(result.is_err(), "error must surface under {level}");
    }
}

/// Verifies non-error messages never signal faults regardless of priority.
#[test]
fn non_error_messages_never_signal() {
    let mut handler = MessageHandler::new(Vec::<u8>::new());

    handler
        .route("Sim", Message::warning("urgent-ish").with_priority("silent"))
        .expect("warnings print");
    handler
        .route("Sim", Message::info("plain").with_priority("silent"))
        .expect("messages print");
    handler
        .route("Sim", Message::debug("detail").with_priority("silent"))
        .expect("debug prints");

    let output = String::from_utf8(handler.into_inner()).expect("utf-8");
    assert_eq!(output.lines().count(), 3);
}
