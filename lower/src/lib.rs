//! Lowering pass framework for the seam kernel-fusion backend.
//!
//! This crate applies independent, in-place transformation passes to the
//! straight-line form of a fused kernel (`seam_ir::LinearIr`) between graph
//! construction and machine-code emission.
//!
//! # Module Organization
//!
//! - [`pass`] - The pass contract every transformation implements
//! - [`pipeline`] - Ordered, fail-fast pass execution
//! - [`passes`] - Concrete passes (performance-counter bracketing)
//! - [`config`] - Pipeline configuration and assembly
//! - [`error`] - Error types and result handling

pub mod config;
pub mod error;
pub mod pass;
pub mod passes;
pub mod pipeline;


// Re-export main types
pub use config::{LowerConfig, build_pipeline};
pub use error::{Error, Result};
pub use pass::Pass;
pub use passes::InsertPerfCount;
pub use pipeline::Pipeline;
