/// Translation of raw terminal events into game commands.
///
/// Input model: movement keys are not acted on per event.  Instead a
/// `key_frame` map records the frame of the last press/repeat for every key,
/// and each frame the controller asks which movement keys are still "fresh".
///
/// * Terminals with keyboard enhancement send `Release`, which drops the key
///   at once.
/// * Classic terminals only send `Press` (OS key-repeat shows up as more
///   presses).  Keys expire after `HOLD_WINDOW` frames of silence, which is
///   shorter than any OS repeat interval at 30 FPS.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::settings::Difficulty;
use crate::viewport::Viewport;

/// Frames a key stays held after its last press/repeat event.
pub const HOLD_WINDOW: u64 = 4;

/// One-shot actions.  Movement is sampled separately through `Movement`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Fire,
    Quit,
    Restart,
    Select(Difficulty),
    /// Left click, already converted to world coordinates.
    Click { x: f32, y: f32 },
}

/// Movement intent for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Movement {
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Default)]
pub struct InputMapper {
    key_frame: HashMap<KeyCode, u64>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: &Event, frame: u64, viewport: &Viewport) -> Option<Command> {
        match event {
            Event::Key(key) => self.handle_key(key, frame),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let (x, y) = viewport.to_world(*column, *row);
                Some(Command::Click { x, y })
            }
            _ => None,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, frame: u64) -> Option<Command> {
        match key.kind {
            KeyEventKind::Press => {
                self.key_frame.insert(key.code, frame);
                command_for(key)
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(key.code, frame);
                None
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&key.code);
                None
            }
        }
    }

    fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn movement(&self, frame: u64) -> Movement {
        let held = |keys: &[KeyCode]| keys.iter().any(|&k| self.is_held(k, frame));
        Movement {
            left: held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
            right: held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
        }
    }
}

fn command_for(key: &KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(' ') => Some(Command::Fire),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Restart),
        KeyCode::Char('1') => Some(Command::Select(Difficulty::Easy)),
        KeyCode::Char('2') => Some(Command::Select(Difficulty::Medium)),
        KeyCode::Char('3') => Some(Command::Select(Difficulty::Hard)),
        _ => None,
    }
}
