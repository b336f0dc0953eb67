/// Game settings: fixed base values plus the per-run speeds derived from them.
///
/// Dynamic speeds are never stored directly.  They are always computed as
/// `base speed × speed factor`, where the factor is reset when a run starts
/// and multiplied by the difficulty's speed-up scale at every level clear.

use serde::Deserialize;

// ── Difficulty ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Menu order, left to right.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn speedup_scale(self) -> f32 {
        match self {
            Difficulty::Easy => 1.1,
            Difficulty::Medium => 1.2,
            Difficulty::Hard => 1.3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

// ── Base values ───────────────────────────────────────────────────────────────

/// Values that stay fixed for the whole process.  Sizes and speeds are in
/// world units; speeds are per frame.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BaseSettings {
    pub screen_width: f32,
    pub screen_height: f32,

    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_speed: f32,
    pub ship_limit: u32,

    pub projectile_width: f32,
    pub projectile_height: f32,
    pub projectile_speed: f32,
    pub projectiles_allowed: usize,

    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_speed: f32,
    pub fleet_drop_speed: f32,
    pub enemy_points: u32,
}

impl Default for BaseSettings {
    fn default() -> Self {
        Self {
            screen_width: 1200.0,
            screen_height: 800.0,
            ship_width: 60.0,
            ship_height: 40.0,
            ship_speed: 12.0,
            ship_limit: 3,
            projectile_width: 3.0,
            projectile_height: 15.0,
            projectile_speed: 20.0,
            projectiles_allowed: 3,
            enemy_width: 60.0,
            enemy_height: 40.0,
            enemy_speed: 3.0,
            fleet_drop_speed: 20.0,
            enemy_points: 50,
        }
    }
}

// ── Settings ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub base: BaseSettings,
    pub difficulty: Difficulty,
    /// +1.0 moves the fleet right, -1.0 moves it left.
    pub fleet_direction: f32,
    speed_factor: f32,
}

impl Settings {
    pub fn new(base: BaseSettings, difficulty: Difficulty) -> Self {
        let mut settings = Self {
            base,
            difficulty,
            fleet_direction: 1.0,
            speed_factor: 1.0,
        };
        settings.initialize_dynamic_settings();
        settings
    }

    /// Switch difficulty and re-derive every dynamic value from the base.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.initialize_dynamic_settings();
    }

    pub fn initialize_dynamic_settings(&mut self) {
        self.speed_factor = self.speedup_scale();
        self.fleet_direction = 1.0;
    }

    /// Speed ramp applied when a level is cleared.
    pub fn increase_speed(&mut self) {
        self.speed_factor *= self.speedup_scale();
        log::debug!("speed factor raised to {:.3}", self.speed_factor);
    }

    pub fn change_fleet_direction(&mut self) {
        self.fleet_direction = -self.fleet_direction;
    }

    pub fn speedup_scale(&self) -> f32 {
        self.difficulty.speedup_scale()
    }

    pub fn speed_factor(&self) -> f32 {
        self.speed_factor
    }

    pub fn ship_speed(&self) -> f32 {
        self.base.ship_speed * self.speed_factor
    }

    pub fn projectile_speed(&self) -> f32 {
        self.base.projectile_speed * self.speed_factor
    }

    pub fn fleet_speed(&self) -> f32 {
        self.base.enemy_speed * self.speed_factor
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(BaseSettings::default(), Difficulty::Easy)
    }
}
