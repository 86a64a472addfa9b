use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, EditTarget};
use crate::engine::Intent;

impl App {
    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.editing.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Esc => self.cancel_gesture(),
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') => {
                self.dispatch(Intent::AddColumn);
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(editing) = self.editing.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.editing = None;
                return;
            }
            KeyCode::Enter
                if editing.accepts_newlines() && !key.modifiers.contains(KeyModifiers::SHIFT) =>
            {
                editing.buffer.push('\n');
            }
            KeyCode::Enter => {
                self.editing = None;
                return;
            }
            KeyCode::Backspace => {
                editing.buffer.pop();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                editing.buffer.push(ch);
            }
            _ => return,
        }

        let intent = match editing.target {
            EditTarget::ColumnTitle(id) => Intent::RenameColumn {
                id,
                title: editing.buffer.clone(),
            },
            EditTarget::TaskContent(id) => Intent::EditTask {
                id,
                content: editing.buffer.clone(),
            },
        };
        self.dispatch(intent);
    }
}
