//! The pass contract every lowering transformation implements.

use seam_ir::LinearIr;

use crate::error::Result;

/// One in-place transformation of a lowered kernel sequence.
///
/// Passes are stateless and independent: a pass may not assume it runs
/// exactly once, and may rely on prior passes only through its own
/// documented preconditions. Input validity is trusted, not re-checked.
///
/// `run` returns whether the sequence was mutated. An error is fatal for the
/// whole pipeline and leaves the sequence in an unspecified state.
pub trait Pass {
    /// Stable name used for logging and error reporting.
    fn name(&self) -> &'static str;

    /// Transform `ir` in place.
    fn run(&self, ir: &mut LinearIr) -> Result<bool>;
}
