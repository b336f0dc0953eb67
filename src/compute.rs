/// Game rules.
///
/// Every public function takes the `GameState` (or the part of it it needs)
/// by mutable reference and applies one rule.  Nothing here performs I/O; the
/// binary handles the terminal, the clock and the high-score file.

use crate::entities::{Enemy, GameState, PauseMode, Projectile, RunState, Ship};
use crate::fleet;
use crate::input::{Command, Movement};
use crate::menu::{self, difficulty_buttons};
use crate::settings::{Difficulty, Settings};
use crate::stats::GameStats;

/// Whether the frame loop should keep going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What happened during one `tick`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub enemies_destroyed: u32,
    pub new_high_score: bool,
    pub level_cleared: bool,
    pub fleet_turned: bool,
    /// A life was spent and the field was reset.
    pub life_lost: bool,
    /// The last life was already gone; the run ended.
    pub game_over: bool,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Initial state: menu shown, fleet laid out behind it.
pub fn init_state(settings: Settings, high_score: u32, pause: PauseMode) -> GameState {
    let stats = GameStats::new(settings.base.ship_limit, high_score);
    let ship = Ship::new(&settings.base);
    let enemies = fleet::create_fleet(&settings.base);
    let buttons = difficulty_buttons(&settings.base);
    GameState {
        settings,
        stats,
        ship,
        projectiles: Vec::new(),
        enemies,
        buttons,
        run: RunState::Inactive,
        pause,
        pointer_visible: true,
        frame: 0,
    }
}

// ── Input-driven state transitions ──────────────────────────────────────────

pub fn apply_command(state: &mut GameState, command: Command) -> Flow {
    if command == Command::Quit {
        return Flow::Quit;
    }
    // A frozen pause swallows everything but quit.
    if matches!(state.run, RunState::Paused { .. }) {
        return Flow::Continue;
    }
    match command {
        Command::Fire => {
            fire_projectile(state);
        }
        Command::Restart => restart_run(state),
        Command::Select(difficulty) => {
            select_difficulty(state, difficulty);
        }
        Command::Click { x, y } => {
            click(state, x, y);
        }
        Command::Quit => {}
    }
    Flow::Continue
}

pub fn set_movement(state: &mut GameState, movement: Movement) {
    state.ship.moving_left = movement.left;
    state.ship.moving_right = movement.right;
}

/// Mouse click in world coordinates.  Returns `true` if it started a run.
pub fn click(state: &mut GameState, x: f32, y: f32) -> bool {
    match menu::button_at(&state.buttons, x, y) {
        Some(difficulty) => select_difficulty(state, difficulty),
        None => false,
    }
}

/// Ignored while a run is in progress.  Returns `true` if a run started.
pub fn select_difficulty(state: &mut GameState, difficulty: Difficulty) -> bool {
    if state.in_run() {
        return false;
    }
    state.settings.select_difficulty(difficulty);
    start_run(state);
    true
}

/// Unconditional restart on the current difficulty.
pub fn restart_run(state: &mut GameState) {
    state.settings.initialize_dynamic_settings();
    start_run(state);
}

fn start_run(state: &mut GameState) {
    state.stats.reset(state.settings.base.ship_limit);
    state.run = RunState::Active;
    reset_field(state);
    state.pointer_visible = false;
    log::info!(
        "run started on {} (speed factor {:.2})",
        state.settings.difficulty.label(),
        state.settings.speed_factor()
    );
}

/// Fresh fleet, no projectiles, ship back in the middle.
fn reset_field(state: &mut GameState) {
    state.projectiles.clear();
    state.enemies = fleet::create_fleet(&state.settings.base);
    let base = &state.settings.base;
    state.ship.center(base.screen_width, base.screen_height);
}

/// Fire from the ship's nose, capped at `projectiles_allowed` live shots.
pub fn fire_projectile(state: &mut GameState) -> bool {
    if state.run != RunState::Active {
        return false;
    }
    if state.projectiles.len() >= state.settings.base.projectiles_allowed {
        return false;
    }
    let projectile = Projectile::from_ship(&state.ship, &state.settings.base);
    state.projectiles.push(projectile);
    true
}

// ── Movement rules ───────────────────────────────────────────────────────────

/// Apply both intent flags, clamping the ship inside the screen.
pub fn update_ship(ship: &mut Ship, settings: &Settings) {
    let speed = settings.ship_speed();
    let max_x = (settings.base.screen_width - ship.width).max(0.0);
    if ship.moving_right {
        ship.x = (ship.x + speed).min(max_x);
    }
    if ship.moving_left {
        ship.x = (ship.x - speed).max(0.0);
    }
}

/// Move every projectile up and drop those that have left the top.
pub fn update_projectiles(projectiles: &mut Vec<Projectile>, settings: &Settings) {
    let speed = settings.projectile_speed();
    for projectile in projectiles.iter_mut() {
        projectile.y -= speed;
    }
    projectiles.retain(|p| p.rect().bottom() > 0.0);
}

// ── Collisions ───────────────────────────────────────────────────────────────

/// Remove every colliding projectile/enemy pair and return the number of
/// enemies destroyed.
///
/// Projectiles are visited in order; each takes the first enemy (fleet order)
/// that overlaps it and has not already been taken this pass.
pub fn resolve_collisions(projectiles: &mut Vec<Projectile>, enemies: &mut Vec<Enemy>) -> u32 {
    let mut destroyed = vec![false; enemies.len()];
    let mut spent = vec![false; projectiles.len()];

    for (pi, projectile) in projectiles.iter().enumerate() {
        let rect = projectile.rect();
        let hit = enemies
            .iter()
            .enumerate()
            .find(|(ei, enemy)| !destroyed[*ei] && enemy.rect().overlaps(&rect))
            .map(|(ei, _)| ei);
        if let Some(ei) = hit {
            destroyed[ei] = true;
            spent[pi] = true;
        }
    }

    let mut index = 0;
    enemies.retain(|_| {
        let keep = !destroyed[index];
        index += 1;
        keep
    });
    let mut index = 0;
    projectiles.retain(|_| {
        let keep = !spent[index];
        index += 1;
        keep
    });

    destroyed.iter().filter(|&&d| d).count() as u32
}

/// Collision pass plus scoring and the level-clear check.
pub fn check_projectile_enemy_collisions(state: &mut GameState, report: &mut FrameReport) {
    let had_enemies = !state.enemies.is_empty();
    let destroyed = resolve_collisions(&mut state.projectiles, &mut state.enemies);

    if destroyed > 0 {
        let points = state.settings.base.enemy_points.saturating_mul(destroyed);
        state.stats.add_points(points);
        report.new_high_score |= state.stats.check_high_score();
        log::debug!("{} enemies destroyed (+{})", destroyed, points);
    }
    report.enemies_destroyed += destroyed;

    if had_enemies && state.enemies.is_empty() {
        start_new_level(state);
        report.level_cleared = true;
    }
}

fn start_new_level(state: &mut GameState) {
    state.projectiles.clear();
    state.enemies = fleet::create_fleet(&state.settings.base);
    state.settings.increase_speed();
    state.stats.level += 1;
    log::info!("level cleared, now on level {}", state.stats.level);
}

// ── Life loss ────────────────────────────────────────────────────────────────

/// Spend a life, or end the run if none are left.  Returns `true` on game over.
pub fn ship_hit(state: &mut GameState) -> bool {
    if state.stats.ships_left > 0 {
        state.stats.ships_left -= 1;
        reset_field(state);
        if let PauseMode::Frozen { frames } = state.pause {
            if frames > 0 {
                state.run = RunState::Paused { frames_left: frames };
            }
        }
        log::info!("ship hit, {} left", state.stats.ships_left);
        false
    } else {
        state.run = RunState::Inactive;
        state.pointer_visible = true;
        log::info!(
            "game over on level {} with score {}",
            state.stats.level,
            state.stats.score
        );
        true
    }
}

fn update_enemies(state: &mut GameState, report: &mut FrameReport) {
    fleet::advance_fleet(&mut state.enemies, &state.settings);
    report.fleet_turned = fleet::update_fleet_edges(&mut state.enemies, &mut state.settings);

    let ship_rect = state.ship.rect();
    let rammed = state.enemies.iter().any(|e| e.rect().overlaps(&ship_rect));
    let landed = fleet::any_reached_bottom(&state.enemies, state.settings.base.screen_height);

    if rammed || landed {
        if ship_hit(state) {
            report.game_over = true;
        } else {
            report.life_lost = true;
        }
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  Does nothing while inactive; counts
/// down a frozen pause without simulating.
pub fn tick(state: &mut GameState) -> FrameReport {
    let mut report = FrameReport::default();

    match state.run {
        RunState::Inactive => return report,
        RunState::Paused { frames_left } => {
            state.run = if frames_left <= 1 {
                RunState::Active
            } else {
                RunState::Paused {
                    frames_left: frames_left - 1,
                }
            };
            return report;
        }
        RunState::Active => {}
    }

    state.frame += 1;

    update_ship(&mut state.ship, &state.settings);
    update_projectiles(&mut state.projectiles, &state.settings);
    check_projectile_enemy_collisions(state, &mut report);
    update_enemies(state, &mut report);

    report
}
