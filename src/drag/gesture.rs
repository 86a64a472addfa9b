//! Turns raw press/move/release pointer input into drag gestures.

use crate::types::EntityRef;

pub const DEFAULT_ACTIVATION_DISTANCE: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerPosition {
    pub column: u16,
    pub row: u16,
}

impl PointerPosition {
    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

/// Minimum travel, in cells, before a press on a draggable turns into a
/// drag. Anything shorter is a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationConstraint {
    pub distance: u16,
}

impl Default for ActivationConstraint {
    fn default() -> Self {
        Self {
            distance: DEFAULT_ACTIVATION_DISTANCE,
        }
    }
}

impl ActivationConstraint {
    pub fn is_satisfied(self, origin: PointerPosition, current: PointerPosition) -> bool {
        let dx = u32::from(origin.column.abs_diff(current.column));
        let dy = u32::from(origin.row.abs_diff(current.row));
        let distance = u32::from(self.distance);
        dx * dx + dy * dy >= distance * distance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    DragStarted {
        source: EntityRef,
        at: PointerPosition,
    },
    DragMoved(PointerPosition),
    DragEnded(PointerPosition),
    Click(PointerPosition),
    DragCancelled,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum GestureState {
    #[default]
    Released,
    Pressed {
        origin: PointerPosition,
        source: Option<EntityRef>,
    },
    Dragging,
}

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    constraint: ActivationConstraint,
    state: GestureState,
}

impl PointerTracker {
    pub fn new(constraint: ActivationConstraint) -> Self {
        Self {
            constraint,
            state: GestureState::Released,
        }
    }

    pub fn constraint(&self) -> ActivationConstraint {
        self.constraint
    }

    pub fn is_dragging(&self) -> bool {
        self.state == GestureState::Dragging
    }

    /// Records a press. `source` is the draggable under the pointer, if any;
    /// presses without one can only ever become clicks.
    pub fn press(&mut self, at: PointerPosition, source: Option<EntityRef>) {
        self.state = GestureState::Pressed { origin: at, source };
    }

    pub fn moved(&mut self, at: PointerPosition) -> Option<GestureEvent> {
        match self.state {
            GestureState::Released => None,
            GestureState::Dragging => Some(GestureEvent::DragMoved(at)),
            GestureState::Pressed { origin, source } => {
                let source = source?;
                if !self.constraint.is_satisfied(origin, at) {
                    return None;
                }
                self.state = GestureState::Dragging;
                Some(GestureEvent::DragStarted { source, at })
            }
        }
    }

    pub fn release(&mut self, at: PointerPosition) -> Option<GestureEvent> {
        match std::mem::take(&mut self.state) {
            GestureState::Released => None,
            GestureState::Pressed { .. } => Some(GestureEvent::Click(at)),
            GestureState::Dragging => Some(GestureEvent::DragEnded(at)),
        }
    }

    /// Abandons the current gesture. Only an active drag reports anything.
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        match std::mem::take(&mut self.state) {
            GestureState::Dragging => Some(GestureEvent::DragCancelled),
            _ => None,
        }
    }
}
