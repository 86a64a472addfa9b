use tuirealm::ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::interaction::{HitTarget, InteractionMap, InteractionNode};
use crate::app::{App, EditState};
use crate::drag::PointerPosition;
use crate::engine::Intent;
use crate::projection::{BoardView, ColumnView, Overlay};
use crate::settings::Settings;

const ADD_COLUMN_LABEL: &str = "[+ column]";
const DELETE_LABEL: &str = "[x]";
const ADD_TASK_LABEL: &str = "+ Add task";
const CURSOR: char = '▏';

pub fn render(frame: &mut Frame<'_>, app: &mut App) {
    let footer = app.footer_text().to_owned();
    let App {
        engine,
        settings,
        interaction_map,
        pointer_position,
        editing,
        ..
    } = app;
    interaction_map.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let view = engine.view();
    // Card controls follow the pointer, but not while something is in flight.
    let hover = (*pointer_position).filter(|_| !view.is_dragging());
    render_header(frame, chunks[0], &view, interaction_map);
    let column_width = render_columns(
        frame,
        chunks[1],
        &view,
        settings,
        CardState { editing: editing.as_ref(), hover },
        interaction_map,
    );
    if let (Some(overlay), Some(anchor)) = (view.overlay.as_ref(), *pointer_position) {
        render_overlay(frame, chunks[1], overlay, anchor, column_width, settings);
    }
    render_footer(frame, chunks[2], &footer);
}

fn render_header(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &BoardView<'_>,
    interaction_map: &mut InteractionMap,
) {
    let task_count: usize = view.columns.iter().map(|column| column.tasks.len()).sum();
    let header = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .title(" kanban-dnd ")
        .title_alignment(Alignment::Left);
    let summary = Block::default()
        .title(format!(
            " {} columns - {} tasks ",
            view.columns.len(),
            task_count
        ))
        .title_alignment(Alignment::Center);
    frame.render_widget(header, area);
    frame.render_widget(summary, area);

    let label_width = ADD_COLUMN_LABEL.chars().count() as u16;
    if area.width > label_width + 2 {
        let rect = Rect::new(area.x + area.width - label_width - 2, area.y, label_width, 1);
        frame.render_widget(
            Paragraph::new(ADD_COLUMN_LABEL).style(Style::default().fg(Color::Green)),
            rect,
        );
        interaction_map.register(InteractionNode::control(rect, Intent::AddColumn));
    }
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, notice: &str) {
    let footer = Block::default()
        .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
        .title(format!(" {notice} "))
        .title_alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Shell state that changes how a card is drawn.
#[derive(Clone, Copy)]
struct CardState<'a> {
    editing: Option<&'a EditState>,
    hover: Option<PointerPosition>,
}

/// Renders every column and returns the width given to each one.
fn render_columns(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &BoardView<'_>,
    settings: &Settings,
    cards: CardState<'_>,
    interaction_map: &mut InteractionMap,
) -> u16 {
    if view.columns.is_empty() {
        let msg = Paragraph::new("No columns yet. Press a or click [+ column] to add one.")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(msg, area);
        return area.width;
    }

    let count = view.columns.len() as u16;
    let required = count.saturating_mul(settings.min_column_width);
    if area.width < required {
        let msg = Paragraph::new(format!(
            "Terminal too narrow for {count} columns. Increase width to at least {required} cells."
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(" Resize Needed "),
        );
        frame.render_widget(msg, area);
        return area.width;
    }

    let constraints: Vec<Constraint> = (0..view.columns.len())
        .map(|_| Constraint::Ratio(1, view.columns.len() as u32))
        .collect();
    let column_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (column_view, rect) in view.columns.iter().zip(column_chunks.iter()) {
        render_column(frame, *rect, column_view, settings, cards, interaction_map);
    }

    column_chunks.first().map_or(area.width, |rect| rect.width)
}

fn render_column(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &ColumnView<'_>,
    settings: &Settings,
    cards: CardState<'_>,
    interaction_map: &mut InteractionMap,
) {
    let column = view.column;
    let editing = cards.editing;
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);

    // Hit regions stay registered on the ghost so hovering the origin slot
    // still resolves.
    interaction_map.register(InteractionNode::drop_zone(inner, column.id));
    interaction_map.register(InteractionNode::entity(
        Rect::new(area.x, area.y, area.width, 1),
        HitTarget::Column(column.id),
    ));

    if view.placeholder {
        frame.render_widget(
            block
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let title = match editing {
        Some(state) if state.is_editing_column(column.id) => format!(" {}{CURSOR} ", state.buffer),
        _ => format!(" {} ({}) ", column.title, view.tasks.len()),
    };
    frame.render_widget(
        block
            .border_type(BorderType::Rounded)
            .title(title)
            .title_alignment(Alignment::Left),
        area,
    );

    render_delete_control(
        frame,
        area,
        Intent::DeleteColumn { id: column.id },
        interaction_map,
    );

    if inner.height == 0 {
        return;
    }

    // Last inner row is reserved for the add-task control.
    let card_space = inner.height - 1;
    let mut y_offset = 0;
    for slot in &view.tasks {
        if y_offset + settings.card_height > card_space {
            break;
        }
        let rect = Rect::new(inner.x, inner.y + y_offset, inner.width, settings.card_height);
        interaction_map.register(InteractionNode::entity(
            rect,
            HitTarget::Task {
                id: slot.task.id,
                column: column.id,
            },
        ));
        y_offset += settings.card_height;

        if slot.placeholder {
            frame.render_widget(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Plain)
                    .border_style(Style::default().fg(Color::DarkGray)),
                rect,
            );
            continue;
        }

        let content = match editing {
            Some(state) if state.is_editing_task(slot.task.id) => {
                format!("{}{CURSOR}", state.buffer)
            }
            _ => slot.task.content.clone(),
        };
        frame.render_widget(
            Paragraph::new(content).wrap(Wrap { trim: false }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            ),
            rect,
        );
        if cards.hover.is_some_and(|at| covers(rect, at)) {
            render_delete_control(
                frame,
                rect,
                Intent::DeleteTask { id: slot.task.id },
                interaction_map,
            );
        }
    }

    let add_rect = Rect::new(inner.x, inner.y + card_space, inner.width, 1);
    frame.render_widget(
        Paragraph::new(ADD_TASK_LABEL)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green)),
        add_rect,
    );
    interaction_map.register(InteractionNode::control(
        add_rect,
        Intent::AddTask { column: column.id },
    ));
}

/// `[x]` on the top border of `area`, right-aligned.
fn render_delete_control(
    frame: &mut Frame<'_>,
    area: Rect,
    intent: Intent,
    interaction_map: &mut InteractionMap,
) {
    let width = DELETE_LABEL.len() as u16;
    if area.width <= width + 2 {
        return;
    }
    let rect = Rect::new(area.x + area.width - width - 1, area.y, width, 1);
    frame.render_widget(
        Paragraph::new(DELETE_LABEL).style(Style::default().fg(Color::Red)),
        rect,
    );
    interaction_map.register(InteractionNode::control(rect, intent));
}

fn covers(rect: Rect, at: PointerPosition) -> bool {
    at.column >= rect.x
        && at.column < rect.x + rect.width
        && at.row >= rect.y
        && at.row < rect.y + rect.height
}

/// Full copy of the dragged entity, drawn on top of the board at the
/// pointer. Not registered: drop resolution looks through it.
fn render_overlay(
    frame: &mut Frame<'_>,
    bounds: Rect,
    overlay: &Overlay<'_>,
    anchor: PointerPosition,
    column_width: u16,
    settings: &Settings,
) {
    let highlight = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    match overlay {
        Overlay::Task(task) => {
            let rect = anchored_rect(anchor, column_width, settings.card_height, bounds);
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(task.content.as_str())
                    .wrap(Wrap { trim: false })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Double)
                            .border_style(highlight),
                    ),
                rect,
            );
        }
        Overlay::Column { column, tasks } => {
            let height = (tasks.len() as u16 + 2).max(3);
            let rect = anchored_rect(anchor, column_width, height, bounds);
            let lines: Vec<Line<'_>> = tasks
                .iter()
                .map(|task| {
                    let first_line = task.content.lines().next().unwrap_or_default();
                    Line::from(vec![Span::raw("- "), Span::raw(first_line)])
                })
                .collect();
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(lines).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .border_style(highlight)
                        .title(format!(" {} ({}) ", column.title, tasks.len())),
                ),
                rect,
            );
        }
    }
}

/// Rectangle of the given size with its top-left corner at the pointer,
/// shifted back inside `bounds` when it would overflow.
fn anchored_rect(anchor: PointerPosition, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let max_x = bounds.x + bounds.width - width;
    let max_y = bounds.y + bounds.height - height;
    Rect::new(
        anchor.column.clamp(bounds.x, max_x),
        anchor.row.clamp(bounds.y, max_y),
        width,
        height,
    )
}
