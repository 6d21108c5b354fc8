//! Ordered, fail-fast execution of lowering passes.

use seam_ir::LinearIr;

use crate::error::Result;
use crate::pass::Pass;

/// An ordered list of passes applied to one sequence in registration order.
///
/// Execution is fail-fast: the first pass error aborts the run and is
/// propagated unmodified, with later passes never entered. The aggregate
/// changed flag reports whether any pass mutated the sequence.
#[derive(Default)]
pub struct Pipeline {
    passes: Vec<Box<dyn Pass>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pass; passes run in registration order.
    pub fn register(&mut self, pass: impl Pass + 'static) -> &mut Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Number of registered passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Run every registered pass over `ir`, in order.
    #[tracing::instrument(skip_all, fields(passes = self.passes.len(), ir.len = ir.len()))]
    pub fn run(&self, ir: &mut LinearIr) -> Result<bool> {
        let mut changed = false;
        for pass in &self.passes {
            let span = tracing::debug_span!("pass", name = pass.name());
            let _enter = span.enter();

            let modified = pass.run(ir)?;
            changed |= modified;

            tracing::debug!(modified, ir.len = ir.len(), "pass finished");
            tracing::trace!(ir.dump = %ir, "sequence after pass");
        }
        Ok(changed)
    }
}
