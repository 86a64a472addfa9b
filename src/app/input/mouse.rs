use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::app::interaction::{HitTarget, InteractionKind};
use crate::app::{App, EditState, EditTarget};
use crate::drag::{GestureEvent, PointerPosition};
use crate::engine::Intent;
use crate::types::EntityRef;

impl App {
    pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = PointerPosition::new(mouse.column, mouse.row);
        self.pointer_position = Some(position);

        let gesture = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let target = self.interaction_map.resolve_target(
                    mouse.column,
                    mouse.row,
                    InteractionKind::Press,
                );
                let source = target.as_ref().and_then(HitTarget::draggable);
                self.pressed = target;
                self.pointer.press(position, source);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                self.pointer.moved(position)
            }
            MouseEventKind::Up(MouseButton::Left) => self.pointer.release(position),
            _ => None,
        };

        if let Some(gesture) = gesture {
            self.handle_gesture(gesture);
        }
    }

    fn handle_gesture(&mut self, gesture: GestureEvent) {
        match gesture {
            GestureEvent::DragStarted { source, at } => {
                self.editing = None;
                self.pressed = None;
                self.hovered = None;
                self.dispatch(Intent::DragStart { source });
                self.sync_hover(at);
            }
            GestureEvent::DragMoved(at) => self.sync_hover(at),
            GestureEvent::DragEnded(at) => {
                // Re-submitting the last reconciled target against a layout
                // that has not been redrawn yet would undo the move.
                let target = self.drop_target_at(at).filter(|t| Some(*t) != self.hovered);
                self.hovered = None;
                self.dispatch(Intent::DragEnd { target });
            }
            GestureEvent::Click(_) => match self.pressed.take() {
                Some(target) => self.handle_click(target),
                None => self.editing = None,
            },
            GestureEvent::DragCancelled => {
                self.hovered = None;
                self.dispatch(Intent::DragCancel);
            }
        }
    }

    fn drop_target_at(&self, at: PointerPosition) -> Option<EntityRef> {
        let kind = self.engine.session().active_kind()?;
        self.interaction_map
            .resolve_target(at.column, at.row, InteractionKind::Drop)?
            .drop_target(kind)
    }

    /// Hands the hover target to the engine only when it changes.
    fn sync_hover(&mut self, at: PointerPosition) {
        let target = self.drop_target_at(at);
        if target == self.hovered {
            return;
        }
        self.hovered = target;
        self.dispatch(Intent::DragOver { target });
    }

    fn handle_click(&mut self, target: HitTarget) {
        self.editing = None;
        match target {
            HitTarget::Control(intent) => {
                self.dispatch(intent);
            }
            HitTarget::Column(id) => {
                if let Some(column) = self.engine.board().column(id) {
                    self.editing = Some(EditState::new(
                        EditTarget::ColumnTitle(id),
                        column.title.clone(),
                    ));
                }
            }
            HitTarget::Task { id, .. } => {
                if let Some(task) = self.engine.board().task(id) {
                    self.editing = Some(EditState::new(
                        EditTarget::TaskContent(id),
                        task.content.clone(),
                    ));
                }
            }
            HitTarget::ColumnBody(_) => {}
        }
        debug!(editing = ?self.editing.as_ref().map(|e| e.target), "click handled");
    }

    pub(crate) fn cancel_gesture(&mut self) {
        self.pointer.cancel();
        self.pressed = None;
        self.hovered = None;
        if !self.engine.session().is_idle() {
            self.dispatch(Intent::DragCancel);
        }
    }
}
