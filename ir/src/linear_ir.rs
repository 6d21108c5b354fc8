//! Ordered mutable sequence of expressions.
//!
//! [`LinearIr`] is the unit of work every lowering pass transforms in place:
//! the straight-line form of one fused kernel between graph construction and
//! machine-code emission. Storage is arena-style (the container owns every
//! [`Expression`] and [`PortConnector`] by value, referenced by id), while
//! order is kept as doubly-linked neighbor ids so that captured [`Position`]s
//! survive insertion.

use std::fmt;

use crate::expr::{ExprId, Expression};
use crate::op::Operation;
use crate::port::{ExprPort, PortConnector, PortId};

/// A stable location in the sequence: a linked expression, or one past the
/// last element.
///
/// Positions are copyable handles, not cursors into memory: inserting new
/// expressions never moves or invalidates a position captured earlier. A
/// position is only meaningful for the `LinearIr` that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(Option<ExprId>);

impl Position {
    /// Expression this position points at, `None` for the end position.
    pub fn expr(self) -> Option<ExprId> {
        self.0
    }

    pub fn is_end(self) -> bool {
        self.0.is_none()
    }
}

#[derive(Debug, Clone)]
struct Slot {
    expr: Expression,
    prev: Option<ExprId>,
    next: Option<ExprId>,
    linked: bool,
}

/// The lowered form of one fused kernel.
///
/// Expected shape of a well-formed sequence: dependency edges point from
/// earlier to later positions, `Parameter`s sit near the front and `Result`s
/// near the back. None of this is validated; passes trust their input, and
/// the container re-checks nothing beyond debug assertions on link
/// discipline. A sequence has a single owner and is mutated exclusively
/// through `&mut` borrows.
#[derive(Debug, Clone, Default)]
pub struct LinearIr {
    slots: Vec<Slot>,
    ports: Vec<PortConnector>,
    head: Option<ExprId>,
    tail: Option<ExprId>,
    len: usize,
}

impl LinearIr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of linked expressions.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of the first expression; equals [`end`](Self::end) when empty.
    pub fn begin(&self) -> Position {
        Position(self.head)
    }

    /// The one-past-the-last position.
    pub fn end(&self) -> Position {
        Position(None)
    }

    /// One step forward. Stepping the end position yields the end position.
    pub fn position_after(&self, pos: Position) -> Position {
        match pos.0 {
            Some(id) => Position(self.slot(id).next),
            None => Position(None),
        }
    }

    /// Expression at `pos`, `None` at the end position.
    pub fn expr_at(&self, pos: Position) -> Option<&Expression> {
        pos.0.map(|id| &self.slot(id).expr)
    }

    pub fn expr(&self, id: ExprId) -> &Expression {
        &self.slot(id).expr
    }

    pub fn port(&self, id: PortId) -> &PortConnector {
        &self.ports[id.index()]
    }

    /// Allocates a new, unlinked expression.
    ///
    /// Fresh output connectors are allocated to match the operation's
    /// declared output arity, each with the new expression as producer. The
    /// new expression is registered as a consumer on every connector in
    /// `inputs`, in port order. Input arity against the operation is the
    /// caller's responsibility.
    ///
    /// The expression takes no place in the sequence until
    /// [`insert_before`](Self::insert_before) or [`push_back`](Self::push_back)
    /// links it.
    pub fn create_expression(&mut self, op: Operation, inputs: &[PortId]) -> ExprId {
        let id = ExprId(self.slots.len() as u32);

        for (port, &connector) in inputs.iter().enumerate() {
            self.ports[connector.index()].add_consumer(ExprPort::new(id, port));
        }

        let mut outputs = smallvec::SmallVec::new();
        for port in 0..op.output_count() {
            let connector = PortId(self.ports.len() as u32);
            self.ports.push(PortConnector::new(connector, ExprPort::new(id, port)));
            outputs.push(connector);
        }

        self.slots.push(Slot {
            expr: Expression::new(id, op, inputs.iter().copied().collect(), outputs),
            prev: None,
            next: None,
            linked: false,
        });
        id
    }

    /// Links `id` immediately before `pos`; the end position appends.
    ///
    /// The expression must have been created by this container and not be
    /// linked yet. Every position captured before the call still points at
    /// the same element afterwards.
    pub fn insert_before(&mut self, pos: Position, id: ExprId) {
        debug_assert!(!self.slot(id).linked, "expression is already linked");
        if let Some(at) = pos.0 {
            debug_assert!(self.slot(at).linked, "insertion point is not linked");
        }

        let prev = match pos.0 {
            Some(at) => {
                let prev = self.slot(at).prev;
                self.slot_mut(at).prev = Some(id);
                prev
            }
            None => self.tail.replace(id),
        };
        match prev {
            Some(before) => self.slot_mut(before).next = Some(id),
            None => self.head = Some(id),
        }

        let slot = self.slot_mut(id);
        slot.prev = prev;
        slot.next = pos.0;
        slot.linked = true;
        self.len += 1;
    }

    /// Appends at the back; shorthand for inserting before [`end`](Self::end).
    pub fn push_back(&mut self, id: ExprId) {
        self.insert_before(self.end(), id);
    }

    /// Front-to-back walk of the linked sequence.
    pub fn iter(&self) -> Exprs<'_> {
        Exprs { ir: self, next: self.head }
    }

    fn slot(&self, id: ExprId) -> &Slot {
        &self.slots[id.index()]
    }

    fn slot_mut(&mut self, id: ExprId) -> &mut Slot {
        &mut self.slots[id.index()]
    }
}

impl<'a> IntoIterator for &'a LinearIr {
    type Item = &'a Expression;
    type IntoIter = Exprs<'a>;

    fn into_iter(self) -> Exprs<'a> {
        self.iter()
    }
}

/// Iterator over linked expressions in sequence order.
pub struct Exprs<'a> {
    ir: &'a LinearIr,
    next: Option<ExprId>,
}

impl<'a> Iterator for Exprs<'a> {
    type Item = &'a Expression;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let slot = self.ir.slot(id);
        self.next = slot.next;
        Some(&slot.expr)
    }
}

impl fmt::Display for LinearIr {
    /// Numbered one-line-per-expression dump, for trace logging and test
    /// failure output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, expr) in self.iter().enumerate() {
            let inputs = expr.inputs().iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ");
            let outputs = expr.outputs().iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ");
            writeln!(f, "[{index}] {} ({inputs}) -> ({outputs})", expr.op())?;
        }
        Ok(())
    }
}
