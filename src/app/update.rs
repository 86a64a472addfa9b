use crate::app::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Key(key) => self.handle_key(key),
            Message::Mouse(mouse) => self.handle_mouse(mouse),
            Message::Resize(width, height) => {
                self.viewport = (width, height);
                // Layout under the pointer is gone; treat as a lost pointer.
                self.cancel_gesture();
            }
            Message::Tick => {}
            Message::Intent(intent) => {
                self.dispatch(intent);
            }
            Message::Quit => self.should_quit = true,
        }
    }
}
