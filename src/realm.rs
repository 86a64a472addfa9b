use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use crossterm::event::{
    KeyCode as CrosstermKeyCode, KeyEvent as CrosstermKeyEvent,
    KeyModifiers as CrosstermKeyModifiers, MouseButton as CrosstermMouseButton,
    MouseEvent as CrosstermMouseEvent, MouseEventKind as CrosstermMouseEventKind,
};
use tuirealm::{
    Application, AttrValue, Attribute, Component, Event, EventListenerCfg, Frame, MockComponent,
    NoUserEvent, Props, State,
    command::{Cmd, CmdResult},
    event::{
        Key as RealmKey, KeyEvent as RealmKeyEvent, KeyModifiers as RealmKeyModifiers,
        MouseButton as RealmMouseButton, MouseEvent as RealmMouseEvent,
        MouseEventKind as RealmMouseEventKind,
    },
    ratatui::layout::Rect,
};

use crate::{
    app::{App, Message},
    ui,
};

pub type SharedApp = Arc<Mutex<App>>;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum RootId {
    Board,
}

pub fn init_application(app: SharedApp) -> Result<Application<RootId, Message, NoUserEvent>> {
    // Drag feedback needs a short poll interval; ticks only keep the loop alive.
    let mut application: Application<RootId, Message, NoUserEvent> = Application::init(
        EventListenerCfg::default()
            .crossterm_input_listener(Duration::from_millis(10), 8)
            .poll_timeout(Duration::from_millis(10))
            .tick_interval(Duration::from_millis(500)),
    );

    application
        .mount(RootId::Board, Box::new(BoardComponent::new(app)), Vec::new())
        .context("failed to mount board component")?;

    application
        .active(&RootId::Board)
        .context("failed to activate board component")?;

    Ok(application)
}

pub fn apply_message(shared_app: &SharedApp, message: Message) -> Result<()> {
    let mut app = lock_app(shared_app)?;
    app.update(message);
    Ok(())
}

pub fn should_quit(shared_app: &SharedApp) -> Result<bool> {
    let app = lock_app(shared_app)?;
    Ok(app.should_quit())
}

fn lock_app(shared_app: &SharedApp) -> Result<MutexGuard<'_, App>> {
    shared_app
        .lock()
        .map_err(|_| anyhow!("failed to lock app state"))
}

struct BoardComponent {
    props: Props,
    app: SharedApp,
}

impl BoardComponent {
    fn new(app: SharedApp) -> Self {
        Self {
            props: Props::default(),
            app,
        }
    }
}

impl MockComponent for BoardComponent {
    fn view(&mut self, frame: &mut Frame, _area: Rect) {
        if let Ok(mut app) = self.app.lock() {
            ui::render(frame, &mut app);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Message, NoUserEvent> for BoardComponent {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Message> {
        match ev {
            Event::Keyboard(key) => Some(Message::Key(convert_key_event(key))),
            Event::Mouse(mouse) => convert_mouse_event(mouse).map(Message::Mouse),
            Event::WindowResize(width, height) => Some(Message::Resize(width, height)),
            Event::Tick => Some(Message::Tick),
            _ => None,
        }
    }
}

fn convert_key_event(key: RealmKeyEvent) -> CrosstermKeyEvent {
    CrosstermKeyEvent::new(
        convert_key_code(key.code),
        convert_key_modifiers(key.modifiers),
    )
}

/// Only the keys the board reacts to; everything else maps to `Null`.
fn convert_key_code(key: RealmKey) -> CrosstermKeyCode {
    match key {
        RealmKey::Backspace => CrosstermKeyCode::Backspace,
        RealmKey::Enter => CrosstermKeyCode::Enter,
        RealmKey::Char(ch) => CrosstermKeyCode::Char(ch),
        RealmKey::Esc => CrosstermKeyCode::Esc,
        _ => CrosstermKeyCode::Null,
    }
}

fn convert_key_modifiers(modifiers: RealmKeyModifiers) -> CrosstermKeyModifiers {
    let mut converted = CrosstermKeyModifiers::empty();
    if modifiers.contains(RealmKeyModifiers::SHIFT) {
        converted.insert(CrosstermKeyModifiers::SHIFT);
    }
    if modifiers.contains(RealmKeyModifiers::CONTROL) {
        converted.insert(CrosstermKeyModifiers::CONTROL);
    }
    if modifiers.contains(RealmKeyModifiers::ALT) {
        converted.insert(CrosstermKeyModifiers::ALT);
    }
    converted
}

/// Pointer events that can take part in a gesture. Scrolling is dropped.
fn convert_mouse_event(mouse: RealmMouseEvent) -> Option<CrosstermMouseEvent> {
    Some(CrosstermMouseEvent {
        kind: convert_mouse_kind(mouse.kind)?,
        column: mouse.column,
        row: mouse.row,
        modifiers: convert_key_modifiers(mouse.modifiers),
    })
}

fn convert_mouse_kind(kind: RealmMouseEventKind) -> Option<CrosstermMouseEventKind> {
    match kind {
        RealmMouseEventKind::Down(button) => {
            Some(CrosstermMouseEventKind::Down(convert_button(button)))
        }
        RealmMouseEventKind::Up(button) => {
            Some(CrosstermMouseEventKind::Up(convert_button(button)))
        }
        RealmMouseEventKind::Drag(button) => {
            Some(CrosstermMouseEventKind::Drag(convert_button(button)))
        }
        RealmMouseEventKind::Moved => Some(CrosstermMouseEventKind::Moved),
        _ => None,
    }
}

fn convert_button(button: RealmMouseButton) -> CrosstermMouseButton {
    match button {
        RealmMouseButton::Left => CrosstermMouseButton::Left,
        RealmMouseButton::Right => CrosstermMouseButton::Right,
        RealmMouseButton::Middle => CrosstermMouseButton::Middle,
    }
}
