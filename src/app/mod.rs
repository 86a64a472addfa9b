pub mod input;
pub mod interaction;
pub mod messages;
pub mod state;
pub mod update;

use tracing::debug;

use crate::drag::{ActivationConstraint, PointerPosition, PointerTracker};
use crate::engine::{Engine, Intent, Outcome};
use crate::settings::Settings;
use crate::types::EntityRef;

use self::interaction::{HitTarget, InteractionMap};
pub use self::messages::Message;
pub use self::state::{EditState, EditTarget};

const DEFAULT_FOOTER_HINTS: &str = "drag cards or column headers  click: edit  a: add column  Esc: cancel drag  q: quit";

pub struct App {
    pub engine: Engine,
    pub settings: Settings,
    pub viewport: (u16, u16),
    pub interaction_map: InteractionMap,
    pub pointer: PointerTracker,
    pub pointer_position: Option<PointerPosition>,
    pub editing: Option<EditState>,
    pub footer_notice: Option<String>,
    pressed: Option<HitTarget>,
    hovered: Option<EntityRef>,
    should_quit: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let pointer = PointerTracker::new(ActivationConstraint {
            distance: settings.drag_activation_distance,
        });
        Self {
            engine: Engine::new(),
            settings,
            viewport: (0, 0),
            interaction_map: InteractionMap::default(),
            pointer,
            pointer_position: None,
            editing: None,
            footer_notice: None,
            pressed: None,
            hovered: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn footer_text(&self) -> &str {
        self.footer_notice.as_deref().unwrap_or(DEFAULT_FOOTER_HINTS)
    }

    /// Last drop target handed to the engine during the current drag.
    pub fn hovered(&self) -> Option<EntityRef> {
        self.hovered
    }

    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        debug!(?intent, "dispatching intent");
        let outcome = self.engine.dispatch(intent);
        if outcome.is_visible() {
            self.close_stale_editor();
            self.footer_notice = self
                .engine
                .session()
                .active()
                .map(|active| format!("dragging {active}  release: drop  Esc: cancel"));
        }
        outcome
    }

    fn close_stale_editor(&mut self) {
        let Some(editing) = self.editing.as_ref() else {
            return;
        };
        let board = self.engine.board();
        let alive = match editing.target {
            EditTarget::ColumnTitle(id) => board.column(id).is_some(),
            EditTarget::TaskContent(id) => board.task(id).is_some(),
        };
        if !alive {
            self.editing = None;
        }
    }
}
