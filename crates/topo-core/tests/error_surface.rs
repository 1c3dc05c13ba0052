use topo_core::errors::{ErrorInfo, TopoError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("node", 3)
        .with_context("reason", "example")
}

#[test]
fn invalid_parameters_surface() {
    let err = TopoError::InvalidParameters(sample_info("degree-too-large", "degree >= n"));
    assert_eq!(err.info().code, "degree-too-large");
    assert_eq!(err.info().context.get("node"), Some(&"3".to_string()));
}

#[test]
fn malformed_input_surface() {
    let err = TopoError::MalformedInput(sample_info("self-loop", "edge 4-4"));
    assert_eq!(err.info().code, "self-loop");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn swap_rejection_is_recoverable() {
    let rejected = TopoError::SwapRejected(sample_info("would-duplicate", "edge exists"));
    let exhausted = TopoError::NoValidSwapFound(sample_info("swap-attempts", "gave up"));
    assert!(rejected.is_swap_rejection());
    assert!(!exhausted.is_swap_rejection());
}

#[test]
fn display_includes_context_and_hint() {
    let err = TopoError::Partitioner(
        ErrorInfo::new("edgecut-missing", "no edge cut in output")
            .with_context("program", "gpmetis")
            .with_hint("is gpmetis on PATH?"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("partitioner error: no edge cut in output"));
    assert!(rendered.contains("program=gpmetis"));
    assert!(rendered.contains("hint: is gpmetis on PATH?"));
}

#[test]
fn errors_round_trip_json() {
    let err = TopoError::Io(sample_info("read", "missing file"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Io\""));
    let decoded: TopoError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
