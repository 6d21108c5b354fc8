//! Linear Intermediate Representation for the seam kernel-fusion backend.
//!
//! This crate defines the straight-line IR a fused kernel is lowered into
//! before machine-code emission, and the container the lowering passes
//! mutate in place.
//!
//! # Module Organization
//!
//! - [`op`] - Operation enum defining the node kinds of the sequence
//! - [`expr`] - Expression nodes and their arena ids
//! - [`port`] - PortConnector data edges between expressions
//! - [`linear_ir`] - The ordered mutable sequence and its position handles
//! - [`prelude`] - Convenient bulk import of the common types

pub mod expr;
pub mod linear_ir;
pub mod op;
pub mod port;
pub mod prelude;

#[cfg(test)]
pub mod test;

// All core types remain accessible at the crate root
pub use expr::{ExprId, Expression};
pub use linear_ir::{Exprs, LinearIr, Position};
pub use op::{OpKind, Operation};
pub use port::{ExprPort, PortConnector, PortId};
