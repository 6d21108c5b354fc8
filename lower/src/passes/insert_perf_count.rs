//! Performance-counter bracketing of the kernel body.

use seam_ir::{LinearIr, Operation};

use crate::error::Result;
use crate::pass::Pass;

/// Span label carried by the closing marker. The runtime's counter reporting
/// matches spans by this name.
pub const SPAN_LABEL: &str = "last_parameter_to_first_result";

/// Brackets the kernel body with a `PerfCountBegin`/`PerfCountEnd` pair: the
/// begin marker goes right after the last `Parameter`, the end marker right
/// before the first `Result`.
///
/// Placement quirks of the scan are part of the contract:
/// - without any `Parameter`, the begin marker lands one position after the
///   first expression rather than at the front;
/// - without any `Result`, the end marker is inserted at the very front,
///   ahead of its paired begin marker.
///
/// Each run inserts a fresh pair; running twice brackets the body twice.
pub struct InsertPerfCount;

impl Pass for InsertPerfCount {
    fn name(&self) -> &'static str {
        "insert-perf-count"
    }

    fn run(&self, ir: &mut LinearIr) -> Result<bool> {
        if ir.is_empty() {
            return Ok(false);
        }

        // mark the begin and end positions in one forward scan
        let mut begin_pos = ir.begin();
        let mut end_pos = begin_pos;
        let mut first_result_marked = false;
        let mut cursor = ir.begin();
        while let Some(expr) = ir.expr_at(cursor) {
            if expr.op().is_parameter() {
                begin_pos = cursor;
            }
            if expr.op().is_result() && !first_result_marked {
                end_pos = cursor;
                first_result_marked = true;
            }
            cursor = ir.position_after(cursor);
        }

        // insertion is insert-before, so step past the last parameter
        let begin_pos = ir.position_after(begin_pos);
        let begin = ir.create_expression(Operation::perf_count_begin(), &[]);
        ir.insert_before(begin_pos, begin);

        // the end marker consumes the begin marker's output to record the
        // pairing; end_pos was captured before that insert and still names
        // the same expression
        let pairing = ir.expr(begin).output(0);
        let end = ir.create_expression(Operation::perf_count_end(SPAN_LABEL), &[pairing]);
        ir.insert_before(end_pos, end);

        Ok(true)
    }
}
