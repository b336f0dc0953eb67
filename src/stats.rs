/// Per-run counters plus the high score, which survives every reset.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub score: u32,
    pub level: u32,
    pub ships_left: u32,
    pub high_score: u32,
}

impl GameStats {
    pub fn new(ship_limit: u32, high_score: u32) -> Self {
        let mut stats = GameStats {
            score: 0,
            level: 1,
            ships_left: ship_limit,
            high_score,
        };
        stats.reset(ship_limit);
        stats
    }

    /// Reset everything except the high score.
    pub fn reset(&mut self, ship_limit: u32) {
        self.ships_left = ship_limit;
        self.score = 0;
        self.level = 1;
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Raise the high score to the current score.  Returns `true` if it moved.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
