use std::collections::HashMap;
use std::sync::Mutex;

use super::presets::Mode;

/// Last selected mode per chat. Lives for the process lifetime, last write
/// wins.
#[derive(Default)]
pub struct Sessions {
    modes: Mutex<HashMap<i64, Mode>>,
}

impl Sessions {
    pub fn set_mode(&self, chat_id: i64, mode: Mode) {
        self.modes.lock().unwrap().insert(chat_id, mode);
    }

    pub fn mode(&self, chat_id: i64) -> Option<Mode> {
        self.modes.lock().unwrap().get(&chat_id).copied()
    }

    pub fn reset(&self, chat_id: i64) {
        self.modes.lock().unwrap().remove(&chat_id);
    }
}
