//! Concrete lowering passes.
//!
//! # Passes
//!
//! - [`insert_perf_count`] - Performance-counter bracketing of the kernel body
//!
//! Passes mutate the sequence in place and are assembled into a
//! [`Pipeline`](crate::Pipeline) by [`build_pipeline`](crate::build_pipeline).

pub mod insert_perf_count;

pub use insert_perf_count::InsertPerfCount;
