//! Expression node: an operation plus its realized input/output edges.

use smallvec::SmallVec;

use crate::op::Operation;
use crate::port::PortId;

/// Identifier of an [`Expression`] inside its owning
/// [`LinearIr`](crate::LinearIr).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprId(pub(crate) u32);

impl ExprId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One node of the lowered sequence.
///
/// An expression belongs to exactly one `LinearIr`, which owns it by value;
/// its input and output connectors are held as arena ids, in port order.
/// Expressions are created through
/// [`LinearIr::create_expression`](crate::LinearIr::create_expression) and
/// positioned with [`LinearIr::insert_before`](crate::LinearIr::insert_before).
#[derive(Debug, Clone)]
pub struct Expression {
    id: ExprId,
    op: Operation,
    inputs: SmallVec<[PortId; 2]>,
    outputs: SmallVec<[PortId; 1]>,
}

impl Expression {
    pub(crate) fn new(
        id: ExprId,
        op: Operation,
        inputs: SmallVec<[PortId; 2]>,
        outputs: SmallVec<[PortId; 1]>,
    ) -> Self {
        Self { id, op, inputs, outputs }
    }

    pub fn id(&self) -> ExprId {
        self.id
    }

    pub fn op(&self) -> &Operation {
        &self.op
    }

    /// Input connector ids, in port order.
    pub fn inputs(&self) -> &[PortId] {
        &self.inputs
    }

    /// Output connector ids, in port order.
    pub fn outputs(&self) -> &[PortId] {
        &self.outputs
    }

    /// Connector feeding input port `port`.
    ///
    /// # Panics
    ///
    /// Panics if the expression has no such input port.
    pub fn input(&self, port: usize) -> PortId {
        self.inputs[port]
    }

    /// Connector written by output port `port`.
    ///
    /// # Panics
    ///
    /// Panics if the expression has no such output port.
    pub fn output(&self, port: usize) -> PortId {
        self.outputs[port]
    }
}
