use test_case::test_case;

use crate::{OpKind, Operation};

// =============================================================================
// Declared arities
// =============================================================================

#[test_case(Operation::parameter(0), 0, 1; "parameter")]
#[test_case(Operation::result(0), 1, 0; "result")]
#[test_case(Operation::perf_count_begin(), 0, 1; "perf_count_begin")]
#[test_case(Operation::perf_count_end("span"), 1, 0; "perf_count_end")]
#[test_case(Operation::opaque("add", 2, 1), 2, 1; "opaque_add")]
#[test_case(Operation::opaque("store", 2, 0), 2, 0; "opaque_store")]
#[test_case(Operation::opaque("nop", 0, 0), 0, 0; "opaque_nop")]
fn test_declared_arities(op: Operation, inputs: usize, outputs: usize) {
    assert_eq!(op.input_count(), inputs);
    assert_eq!(op.output_count(), outputs);
}

// =============================================================================
// Predicates and kind dispatch
// =============================================================================

#[test]
fn test_boundary_predicates() {
    assert!(Operation::parameter(2).is_parameter());
    assert!(!Operation::parameter(2).is_result());
    assert!(Operation::result(1).is_result());
    assert!(!Operation::result(1).is_parameter());
    assert!(!Operation::opaque("add", 2, 1).is_parameter());
    assert!(!Operation::opaque("add", 2, 1).is_result());
}

#[test]
fn test_marker_predicate() {
    assert!(Operation::perf_count_begin().is_perf_count_marker());
    assert!(Operation::perf_count_end("span").is_perf_count_marker());
    assert!(!Operation::parameter(0).is_perf_count_marker());
    assert!(!Operation::opaque("mul", 2, 1).is_perf_count_marker());
}

#[test]
fn test_kind_dispatch() {
    assert_eq!(Operation::parameter(3).kind(), OpKind::Parameter);
    assert_eq!(Operation::result(0).kind(), OpKind::Result);
    assert_eq!(Operation::perf_count_begin().kind(), OpKind::PerfCountBegin);
    assert_eq!(Operation::perf_count_end("span").kind(), OpKind::PerfCountEnd);
    assert_eq!(Operation::opaque("add", 2, 1).kind(), OpKind::Opaque);
}

#[test]
fn test_label_only_on_end_marker() {
    assert_eq!(Operation::perf_count_end("span").label(), Some("span"));
    assert_eq!(Operation::perf_count_begin().label(), None);
    assert_eq!(Operation::opaque("add", 2, 1).label(), None);
}

// =============================================================================
// Display
// =============================================================================

#[test_case(Operation::parameter(1), "parameter.1"; "parameter")]
#[test_case(Operation::result(0), "result.0"; "result")]
#[test_case(Operation::perf_count_begin(), "perf_count_begin"; "begin_marker")]
#[test_case(Operation::perf_count_end("span"), "perf_count_end[span]"; "end_marker")]
#[test_case(Operation::opaque("add", 2, 1), "add"; "opaque")]
fn test_display(op: Operation, rendered: &str) {
    assert_eq!(op.to_string(), rendered);
}
