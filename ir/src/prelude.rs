//! Common imports for working with lowered kernel sequences.
//!
//! This module provides a convenient way to import the most commonly used
//! types when working with the IR:
//!
//! ```rust,ignore
//! use seam_ir::prelude::*;
//! ```

// Core types
pub use crate::expr::{ExprId, Expression};
pub use crate::linear_ir::{LinearIr, Position};
pub use crate::op::{OpKind, Operation};
pub use crate::port::{ExprPort, PortConnector, PortId};
