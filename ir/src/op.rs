//! Operation enum and implementation.
//!
//! The [`Operation`] enum defines the node kinds a lowered kernel sequence can
//! contain. Lowering passes dispatch on it through [`OpKind`] and the
//! predicate helpers; everything the lowering does not introspect travels as
//! [`Operation::Opaque`].

use std::fmt;

/// Operation carried by one [`Expression`](crate::Expression).
///
/// Each variant encodes its port structure directly:
/// - `Parameter` / `Result` mark the kernel's input/output boundary and carry
///   the boundary slot index.
/// - `PerfCountBegin` / `PerfCountEnd` are zero-effect instrumentation
///   markers; the runtime pairs them by the end marker's label.
/// - `Opaque` stands in for the arithmetic and memory operations whose
///   semantics live outside the lowering framework. Its arities are declared
///   by the builder and trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(strum::EnumDiscriminants)]
#[strum_discriminants(name(OpKind))]
#[strum_discriminants(derive(Hash, strum::Display))]
pub enum Operation {
    /// Kernel input boundary: produces one externally-provided value.
    Parameter { index: usize },
    /// Kernel output boundary: consumes one value computed by the body.
    Result { index: usize },
    /// Opens a latency measurement window. Produces a single pairing output.
    PerfCountBegin,
    /// Closes a latency measurement window. Consumes the paired begin
    /// marker's output; the label names the measured span for the runtime.
    PerfCountEnd { label: String },
    /// Any operation the lowering treats as a black box.
    Opaque { name: String, inputs: usize, outputs: usize },
}

impl Operation {
    pub fn parameter(index: usize) -> Self {
        Self::Parameter { index }
    }

    pub fn result(index: usize) -> Self {
        Self::Result { index }
    }

    pub fn perf_count_begin() -> Self {
        Self::PerfCountBegin
    }

    pub fn perf_count_end(label: impl Into<String>) -> Self {
        Self::PerfCountEnd { label: label.into() }
    }

    pub fn opaque(name: impl Into<String>, inputs: usize, outputs: usize) -> Self {
        Self::Opaque { name: name.into(), inputs, outputs }
    }

    /// Type tag for dispatch without matching on payload.
    pub fn kind(&self) -> OpKind {
        self.into()
    }

    /// Number of input ports this operation declares.
    pub fn input_count(&self) -> usize {
        match self {
            Self::Parameter { .. } | Self::PerfCountBegin => 0,
            Self::Result { .. } | Self::PerfCountEnd { .. } => 1,
            Self::Opaque { inputs, .. } => *inputs,
        }
    }

    /// Number of output ports this operation declares.
    pub fn output_count(&self) -> usize {
        match self {
            Self::Parameter { .. } | Self::PerfCountBegin => 1,
            Self::Result { .. } | Self::PerfCountEnd { .. } => 0,
            Self::Opaque { outputs, .. } => *outputs,
        }
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self, Self::Parameter { .. })
    }

    pub fn is_result(&self) -> bool {
        matches!(self, Self::Result { .. })
    }

    pub fn is_perf_count_marker(&self) -> bool {
        matches!(self, Self::PerfCountBegin | Self::PerfCountEnd { .. })
    }

    /// Span label of a `PerfCountEnd`, `None` for every other operation.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::PerfCountEnd { label } => Some(label),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter { index } => write!(f, "parameter.{index}"),
            Self::Result { index } => write!(f, "result.{index}"),
            Self::PerfCountBegin => write!(f, "perf_count_begin"),
            Self::PerfCountEnd { label } => write!(f, "perf_count_end[{label}]"),
            Self::Opaque { name, .. } => write!(f, "{name}"),
        }
    }
}
