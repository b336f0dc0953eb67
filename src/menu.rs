/// The three difficulty buttons shown while no run is in progress.

use crate::entities::Rect;
use crate::settings::{BaseSettings, Difficulty};

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyButton {
    pub difficulty: Difficulty,
    pub rect: Rect,
}

impl DifficultyButton {
    /// Buttons sit on the vertical midline, offset from the horizontal centre:
    /// Easy two widths left, Medium two heights left, Hard four heights right.
    pub fn new(difficulty: Difficulty, base: &BaseSettings) -> Self {
        let mid_x = base.screen_width / 2.0;
        let x = match difficulty {
            Difficulty::Easy => mid_x - 2.0 * BUTTON_WIDTH,
            Difficulty::Medium => mid_x - 2.0 * BUTTON_HEIGHT,
            Difficulty::Hard => mid_x + 4.0 * BUTTON_HEIGHT,
        };
        DifficultyButton {
            difficulty,
            rect: Rect::new(x, base.screen_height / 2.0, BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }

    pub fn hit(&self, x: f32, y: f32) -> bool {
        self.rect.contains_point(x, y)
    }
}

pub fn difficulty_buttons(base: &BaseSettings) -> [DifficultyButton; 3] {
    Difficulty::ALL.map(|difficulty| DifficultyButton::new(difficulty, base))
}

/// The first button containing the point, in menu order.
pub fn button_at(buttons: &[DifficultyButton], x: f32, y: f32) -> Option<Difficulty> {
    buttons
        .iter()
        .find(|button| button.hit(x, y))
        .map(|button| button.difficulty)
}
