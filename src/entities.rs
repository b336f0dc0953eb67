/// All game entity types and the master game state.
///
/// Entities carry their own geometry but no game rules; movement, collision
/// and scoring live in `compute` and `fleet`.

use crate::menu::DifficultyButton;
use crate::settings::{BaseSettings, Settings};
use crate::stats::GameStats;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in world units.  `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Interiors intersect.  Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open on the right and bottom edges.
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

// ── Player ship ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    /// Exact horizontal position; the renderer rounds it.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    /// A ship parked at the bottom centre of the screen.
    pub fn new(base: &BaseSettings) -> Self {
        let mut ship = Ship {
            x: 0.0,
            y: 0.0,
            width: base.ship_width,
            height: base.ship_height,
            moving_right: false,
            moving_left: false,
        };
        ship.center(base.screen_width, base.screen_height);
        ship
    }

    pub fn center(&mut self, screen_width: f32, screen_height: f32) {
        self.x = (screen_width - self.width) / 2.0;
        self.y = screen_height - self.height;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn render_x(&self) -> i32 {
        self.x.round() as i32
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Projectile {
    /// A projectile whose top edge sits on the ship's nose.
    pub fn from_ship(ship: &Ship, base: &BaseSettings) -> Self {
        Projectile {
            x: ship.rect().center_x() - base.projectile_width / 2.0,
            y: ship.y,
            width: base.projectile_width,
            height: base.projectile_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// True when the unit touches either side of the screen.
    pub fn check_edges(&self, screen_width: f32) -> bool {
        self.rect().right() >= screen_width || self.rect().left() <= 0.0
    }
}

// ── Run state ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Menu shown, no simulation.
    Inactive,
    Active,
    /// Frozen after a life loss; returns to `Active` when `frames_left` hits 0.
    Paused { frames_left: u32 },
}

/// How the controller waits after a life is lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseMode {
    /// The caller blocks the whole frame loop.
    Stall,
    /// The run enters `RunState::Paused` for this many frames.
    Frozen { frames: u32 },
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the controller owns.  Settings and stats are plain fields so
/// every operation receives them explicitly through `&mut GameState`.
#[derive(Clone, Debug)]
pub struct GameState {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    /// Fleet members in creation order (row-major).
    pub enemies: Vec<Enemy>,
    pub buttons: [DifficultyButton; 3],
    pub run: RunState,
    pub pause: PauseMode,
    /// Mirrors whether the mouse pointer should be usable (menu shown).
    pub pointer_visible: bool,
    /// Simulation frames advanced since the process started.
    pub frame: u64,
}

impl GameState {
    /// Active or paused: a run is in progress.
    pub fn in_run(&self) -> bool {
        self.run != RunState::Inactive
    }
}
