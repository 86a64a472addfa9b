use crossterm::event::{KeyEvent, MouseEvent};

use crate::engine::Intent;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Message {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Intent(Intent),
    Quit,
}
