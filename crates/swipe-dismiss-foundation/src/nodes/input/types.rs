use std::cell::Cell;
use std::rc::Rc;
use swipe_dismiss_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    /// Up and Cancel both end the current touch stream.
    pub fn ends_stream(self) -> bool {
        matches!(self, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}

/// Pointer event with consumption tracking.
///
/// `position` is local to the receiving surface and moves with it while the
/// panel is translated. Gesture math uses `global_position`, the raw screen
/// coordinate, so the panel's own movement never feeds back into the drag.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub global_position: Point,
    /// Shared so consumption is visible across copies of the event.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, global_position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            global_position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Event whose local and raw coordinates coincide (an untranslated root).
    pub fn at(kind: PointerEventKind, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        Self::new(kind, point, point)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn kind(&self) -> PointerEventKind {
        self.kind
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn global_position(&self) -> Point {
        self.global_position
    }

    /// Mark this event as consumed so other handlers skip it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }

    /// Copy of this event with a different kind and fresh consumption state.
    ///
    /// Used to tell a descendant its stream was taken away (`Cancel`).
    pub fn copy_with_kind(&self, kind: PointerEventKind) -> Self {
        Self::new(kind, self.position, self.global_position).with_id(self.id)
    }
}
