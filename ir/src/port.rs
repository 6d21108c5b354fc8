//! Data-dependency edges between expressions.
//!
//! A [`PortConnector`] is the realized edge of the sequence's dataflow: one
//! producing output port, zero or more consuming input ports. Connectors are
//! owned by the [`LinearIr`](crate::LinearIr) arena and referenced everywhere
//! by [`PortId`].

use std::fmt;

use smallvec::SmallVec;

use crate::expr::ExprId;

/// Identifier of a [`PortConnector`] inside its owning
/// [`LinearIr`](crate::LinearIr).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortId(pub(crate) u32);

impl PortId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// One endpoint of an edge: an expression plus a port slot on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprPort {
    pub expr: ExprId,
    pub port: usize,
}

impl ExprPort {
    pub fn new(expr: ExprId, port: usize) -> Self {
        Self { expr, port }
    }
}

/// A directed data edge with exactly one producer.
///
/// An empty consumer list is legal: boundary outputs and informational edges
/// (such as the perf-marker pairing) may never be read inside the sequence.
#[derive(Debug, Clone)]
pub struct PortConnector {
    id: PortId,
    source: ExprPort,
    consumers: SmallVec<[ExprPort; 2]>,
}

impl PortConnector {
    pub(crate) fn new(id: PortId, source: ExprPort) -> Self {
        Self { id, source, consumers: SmallVec::new() }
    }

    pub fn id(&self) -> PortId {
        self.id
    }

    /// The output port that writes this edge.
    pub fn source(&self) -> ExprPort {
        self.source
    }

    /// Input ports that read this edge, in registration order.
    pub fn consumers(&self) -> &[ExprPort] {
        &self.consumers
    }

    pub(crate) fn add_consumer(&mut self, consumer: ExprPort) {
        self.consumers.push(consumer);
    }
}
