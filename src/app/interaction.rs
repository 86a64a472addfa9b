use tuirealm::ratatui::layout::Rect;

use crate::engine::Intent;
use crate::types::{ColumnId, EntityKind, EntityRef, TaskId};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InteractionLayer {
    Base,
    Control,
}

impl InteractionLayer {
    fn priority(self) -> u8 {
        match self {
            Self::Base => 0,
            Self::Control => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InteractionKind {
    Press,
    Drop,
}

/// What sits under a screen rectangle.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum HitTarget {
    /// Column header: drag handle, click-to-rename.
    Column(ColumnId),
    /// Task list area of a column; only a drop target.
    ColumnBody(ColumnId),
    Task { id: TaskId, column: ColumnId },
    Control(Intent),
}

impl HitTarget {
    pub fn draggable(&self) -> Option<EntityRef> {
        match self {
            Self::Column(id) => Some(EntityRef::Column(*id)),
            Self::Task { id, .. } => Some(EntityRef::Task(*id)),
            Self::ColumnBody(_) | Self::Control(_) => None,
        }
    }

    /// Drop target this hit stands for while an entity of `dragging` kind is
    /// in flight. Columns only ever land on columns, so any part of a column
    /// resolves to the column itself.
    pub fn drop_target(&self, dragging: EntityKind) -> Option<EntityRef> {
        match (self, dragging) {
            (Self::Column(id) | Self::ColumnBody(id), _) => Some(EntityRef::Column(*id)),
            (Self::Task { column, .. }, EntityKind::Column) => Some(EntityRef::Column(*column)),
            (Self::Task { id, .. }, EntityKind::Task) => Some(EntityRef::Task(*id)),
            (Self::Control(_), _) => None,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InteractionNode {
    pub rect: Rect,
    pub target: HitTarget,
    pub layer: InteractionLayer,
    pub pressable: bool,
    pub droppable: bool,
}

impl InteractionNode {
    pub fn entity(rect: Rect, target: HitTarget) -> Self {
        Self {
            rect,
            target,
            layer: InteractionLayer::Base,
            pressable: true,
            droppable: true,
        }
    }

    pub fn drop_zone(rect: Rect, column: ColumnId) -> Self {
        Self {
            rect,
            target: HitTarget::ColumnBody(column),
            layer: InteractionLayer::Base,
            pressable: true,
            droppable: true,
        }
    }

    pub fn control(rect: Rect, intent: Intent) -> Self {
        Self {
            rect,
            target: HitTarget::Control(intent),
            layer: InteractionLayer::Control,
            pressable: true,
            droppable: false,
        }
    }

    fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.rect.x
            && col < self.rect.x + self.rect.width
            && row >= self.rect.y
            && row < self.rect.y + self.rect.height
    }

    fn supports(&self, kind: InteractionKind) -> bool {
        match kind {
            InteractionKind::Press => self.pressable,
            InteractionKind::Drop => self.droppable,
        }
    }
}

/// Screen regions registered by the last render, resolved against pointer
/// coordinates.
#[derive(Debug, Default, Clone)]
pub struct InteractionMap {
    nodes: Vec<InteractionNode>,
}

impl InteractionMap {
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn register(&mut self, node: InteractionNode) {
        self.nodes.push(node);
    }

    pub fn resolve_target(&self, col: u16, row: u16, kind: InteractionKind) -> Option<HitTarget> {
        self.resolve_node(col, row, kind)
            .map(|node| node.target.clone())
    }

    /// Highest layer wins; within a layer, the latest registration wins.
    pub fn resolve_node(
        &self,
        col: u16,
        row: u16,
        kind: InteractionKind,
    ) -> Option<&InteractionNode> {
        let mut best: Option<(usize, &InteractionNode)> = None;
        for (idx, node) in self.nodes.iter().enumerate() {
            if !node.contains(col, row) || !node.supports(kind) {
                continue;
            }
            match best {
                None => best = Some((idx, node)),
                Some((best_idx, best_node)) => {
                    let has_higher_layer = node.layer.priority() > best_node.layer.priority();
                    let same_layer_later_registration =
                        node.layer.priority() == best_node.layer.priority() && idx > best_idx;
                    if has_higher_layer || same_layer_later_registration {
                        best = Some((idx, node));
                    }
                }
            }
        }
        best.map(|(_, node)| node)
    }
}
