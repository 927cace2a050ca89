use crate::{colour::Colour, math::Vec2};

/// A stateful 2D drawing surface
///
/// A surface holds a current stroke colour and a pending path. The colour set
/// last applies to every later stroke-commit until it is changed again.
/// Geometry accumulates through [move_to](Surface::move_to) and
/// [line_to](Surface::line_to) and only becomes visible on
/// [stroke](Surface::stroke).
pub trait Surface {
    /// Set the colour used for subsequent strokes
    fn set_stroke_colour(&mut self, colour: Colour);
    /// Start a new path, discarding any uncommitted geometry
    fn begin_path(&mut self);
    /// Move the pen to `point` without drawing
    fn move_to(&mut self, point: Vec2);
    /// Extend the pending path with a straight segment from the pen to
    /// `point`
    fn line_to(&mut self, point: Vec2);
    /// Render the pending path in the current stroke colour and clear it
    fn stroke(&mut self);
}

/// One operation issued to a [Recorder]
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// The stroke colour was set
    SetStrokeColour(Colour),
    /// A new path was started
    BeginPath,
    /// The pen moved without drawing
    MoveTo(Vec2),
    /// A segment was appended to the pending path
    LineTo(Vec2),
    /// The pending path was committed
    Stroke,
}

/// A [Surface] that records every operation instead of rendering anything
///
/// Substituting a recorder for a real canvas makes drawing code assertable:
/// tests check the exact sequence of operations that was issued.
#[derive(Debug, Default)]
pub struct Recorder {
    ops: Vec<Op>,
}

impl Recorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }
    /// The operations recorded so far, in issue order
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }
    /// Consume the recorder, returning the recorded operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }
}

impl Surface for Recorder {
    fn set_stroke_colour(&mut self, colour: Colour) {
        self.ops.push(Op::SetStrokeColour(colour));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, point: Vec2) {
        self.ops.push(Op::MoveTo(point));
    }
    fn line_to(&mut self, point: Vec2) {
        self.ops.push(Op::LineTo(point));
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
}
