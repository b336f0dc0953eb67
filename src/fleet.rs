/// Fleet layout and fleet-wide movement.
///
/// The fleet is a plain `Vec<Enemy>` owned by `GameState`; every function here
/// operates on a slice of it.

use crate::entities::Enemy;
use crate::settings::{BaseSettings, Settings};

// ── Layout ────────────────────────────────────────────────────────────────────

/// Grid dimensions for one enemy footprint on one screen.
///
/// A unit-width margin is left on each side and every unit is followed by a
/// gutter of its own size, so a unit occupies a `2w × 2h` cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FleetLayout {
    pub columns: u32,
    pub rows: u32,
    pub enemy_width: f32,
    pub enemy_height: f32,
}

impl FleetLayout {
    pub fn compute(
        screen_width: f32,
        screen_height: f32,
        enemy_width: f32,
        enemy_height: f32,
        ship_height: f32,
    ) -> Self {
        let available_x = screen_width - 2.0 * enemy_width;
        let available_y = screen_height - 3.0 * enemy_height - ship_height;
        FleetLayout {
            columns: floor_div(available_x, 2.0 * enemy_width),
            rows: floor_div(available_y, 2.0 * enemy_height),
            enemy_width,
            enemy_height,
        }
    }

    pub fn from_settings(base: &BaseSettings) -> Self {
        Self::compute(
            base.screen_width,
            base.screen_height,
            base.enemy_width,
            base.enemy_height,
            base.ship_height,
        )
    }

    /// Top-left corner of the unit at `(row, column)`.
    pub fn position(&self, row: u32, column: u32) -> (f32, f32) {
        let x = self.enemy_width + 2.0 * self.enemy_width * column as f32;
        let y = self.enemy_height + 2.0 * self.enemy_height * row as f32;
        (x, y)
    }

    pub fn len(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major units: row 0 left to right, then row 1, and so on.
    pub fn build(&self) -> Vec<Enemy> {
        let mut enemies = Vec::with_capacity(self.len());
        for row in 0..self.rows {
            for column in 0..self.columns {
                let (x, y) = self.position(row, column);
                enemies.push(Enemy {
                    x,
                    y,
                    width: self.enemy_width,
                    height: self.enemy_height,
                });
            }
        }
        enemies
    }
}

/// Floor division clamped at zero; a non-positive divisor yields zero.
fn floor_div(available: f32, cell: f32) -> u32 {
    if cell <= 0.0 || available <= 0.0 {
        return 0;
    }
    (available / cell).floor() as u32
}

pub fn create_fleet(base: &BaseSettings) -> Vec<Enemy> {
    let layout = FleetLayout::from_settings(base);
    log::debug!(
        "building fleet: {} columns x {} rows",
        layout.columns,
        layout.rows
    );
    layout.build()
}

// ── Movement ──────────────────────────────────────────────────────────────────

pub fn advance_fleet(enemies: &mut [Enemy], settings: &Settings) {
    let dx = settings.fleet_speed() * settings.fleet_direction;
    for enemy in enemies.iter_mut() {
        enemy.x += dx;
    }
}

pub fn check_fleet_edges(enemies: &[Enemy], screen_width: f32) -> bool {
    enemies.iter().any(|e| e.check_edges(screen_width))
}

/// Drop every unit by the fixed increment and reverse the shared direction.
pub fn change_fleet_direction(enemies: &mut [Enemy], settings: &mut Settings) {
    let drop = settings.base.fleet_drop_speed;
    for enemy in enemies.iter_mut() {
        enemy.y += drop;
    }
    settings.change_fleet_direction();
}

/// Edge check followed by a direction change if needed.  Returns `true` when
/// the fleet turned.
pub fn update_fleet_edges(enemies: &mut [Enemy], settings: &mut Settings) -> bool {
    if check_fleet_edges(enemies, settings.base.screen_width) {
        change_fleet_direction(enemies, settings);
        true
    } else {
        false
    }
}

pub fn any_reached_bottom(enemies: &[Enemy], screen_height: f32) -> bool {
    enemies.iter().any(|e| e.rect().bottom() >= screen_height)
}
