use alien_invasion::entities::Enemy;
use alien_invasion::fleet::*;
use alien_invasion::settings::*;

fn expected_columns(w: f32, ew: f32) -> u32 {
    ((w - 2.0 * ew) / (2.0 * ew)).floor() as u32
}

fn expected_rows(h: f32, eh: f32, sh: f32) -> u32 {
    ((h - 3.0 * eh - sh) / (2.0 * eh)).floor() as u32
}

fn enemy_at(x: f32, y: f32) -> Enemy {
    Enemy { x, y, width: 20.0, height: 20.0 }
}

// ── Layout ────────────────────────────────────────────────────────────────────

#[test]
fn layout_matches_floor_division_formula() {
    let layout = FleetLayout::compute(1200.0, 800.0, 40.0, 30.0, 60.0);
    assert_eq!(layout.columns, expected_columns(1200.0, 40.0));
    assert_eq!(layout.rows, expected_rows(800.0, 30.0, 60.0));
    // ⌊1120 / 80⌋ and ⌊620 / 60⌋
    assert_eq!(layout.columns, 14);
    assert_eq!(layout.rows, 10);
    assert_eq!(layout.len(), 140);
}

#[test]
fn layout_for_default_settings() {
    let base = BaseSettings::default();
    let layout = FleetLayout::from_settings(&base);
    assert_eq!(layout.columns, expected_columns(base.screen_width, base.enemy_width));
    assert_eq!(
        layout.rows,
        expected_rows(base.screen_height, base.enemy_height, base.ship_height)
    );
}

#[test]
fn layout_floors_partial_cells() {
    // 1000 − 120 = 880 → 880 / 120 = 7.33 → 7 columns
    // 600 − 150 − 40 = 410 → 410 / 100 = 4.1 → 4 rows
    let layout = FleetLayout::compute(1000.0, 600.0, 60.0, 50.0, 40.0);
    assert_eq!(layout.columns, 7);
    assert_eq!(layout.rows, 4);
}

#[test]
fn units_sit_on_the_gutter_grid_in_row_major_order() {
    let layout = FleetLayout::compute(1200.0, 800.0, 40.0, 30.0, 60.0);
    let fleet = layout.build();
    assert_eq!(fleet.len(), layout.len());

    for row in 0..layout.rows {
        for column in 0..layout.columns {
            let unit = &fleet[(row * layout.columns + column) as usize];
            assert_eq!(unit.x, 40.0 + 2.0 * 40.0 * column as f32);
            assert_eq!(unit.y, 30.0 + 2.0 * 30.0 * row as f32);
            assert_eq!(unit.width, 40.0);
            assert_eq!(unit.height, 30.0);
        }
    }
}

#[test]
fn fleet_leaves_one_unit_margin_on_the_right() {
    let layout = FleetLayout::compute(1200.0, 800.0, 40.0, 30.0, 60.0);
    let fleet = layout.build();
    let rightmost = fleet
        .iter()
        .map(|e| e.rect().right())
        .fold(f32::MIN, f32::max);
    assert!(rightmost <= 1200.0 - 40.0);
}

#[test]
fn too_small_a_screen_gives_an_empty_fleet() {
    let layout = FleetLayout::compute(100.0, 100.0, 60.0, 50.0, 40.0);
    assert_eq!(layout.columns, 0);
    assert_eq!(layout.rows, 0);
    assert!(layout.is_empty());
    assert!(layout.build().is_empty());
}

#[test]
fn zero_sized_enemies_give_an_empty_fleet() {
    let layout = FleetLayout::compute(1200.0, 800.0, 0.0, 0.0, 40.0);
    assert!(layout.is_empty());
}

#[test]
fn create_fleet_uses_settings() {
    let base = BaseSettings::default();
    assert_eq!(create_fleet(&base).len(), FleetLayout::from_settings(&base).len());
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[test]
fn advance_moves_every_unit_by_fleet_speed_and_direction() {
    let mut settings = Settings::default();
    let mut fleet = vec![enemy_at(100.0, 50.0), enemy_at(200.0, 50.0)];

    advance_fleet(&mut fleet, &settings);
    let step = settings.fleet_speed();
    assert!((fleet[0].x - (100.0 + step)).abs() < 1e-4);
    assert!((fleet[1].x - (200.0 + step)).abs() < 1e-4);

    settings.change_fleet_direction();
    advance_fleet(&mut fleet, &settings);
    assert!((fleet[0].x - 100.0).abs() < 1e-4);
    assert_eq!(fleet[0].y, 50.0);
}

#[test]
fn edge_check_fires_on_either_side() {
    let width = 400.0;
    assert!(!check_fleet_edges(&[enemy_at(100.0, 0.0)], width));
    assert!(check_fleet_edges(&[enemy_at(100.0, 0.0), enemy_at(380.0, 0.0)], width));
    assert!(check_fleet_edges(&[enemy_at(0.0, 0.0)], width));
    assert!(!check_fleet_edges(&[], width));
}

#[test]
fn direction_change_drops_whole_fleet_and_flips() {
    let mut settings = Settings::default();
    let drop = settings.base.fleet_drop_speed;
    let mut fleet = vec![enemy_at(10.0, 40.0), enemy_at(500.0, 100.0)];

    change_fleet_direction(&mut fleet, &mut settings);

    assert_eq!(settings.fleet_direction, -1.0);
    assert_eq!(fleet[0].y, 40.0 + drop);
    assert_eq!(fleet[1].y, 100.0 + drop);
    assert_eq!(fleet[0].x, 10.0);

    change_fleet_direction(&mut fleet, &mut settings);
    assert_eq!(settings.fleet_direction, 1.0);
}

#[test]
fn update_edges_only_turns_at_an_edge() {
    let mut settings = Settings::default();
    let mut fleet = vec![enemy_at(500.0, 40.0)];
    assert!(!update_fleet_edges(&mut fleet, &mut settings));
    assert_eq!(fleet[0].y, 40.0);
    assert_eq!(settings.fleet_direction, 1.0);

    fleet.push(enemy_at(settings.base.screen_width - 20.0, 40.0));
    assert!(update_fleet_edges(&mut fleet, &mut settings));
    assert_eq!(settings.fleet_direction, -1.0);
    assert_eq!(fleet[0].y, 40.0 + settings.base.fleet_drop_speed);
}

#[test]
fn bottom_breach_detected_on_any_unit() {
    let fleet = vec![enemy_at(10.0, 100.0), enemy_at(10.0, 780.0)];
    assert!(any_reached_bottom(&fleet, 800.0));
    assert!(!any_reached_bottom(&fleet[..1], 800.0));
    assert!(!any_reached_bottom(&[], 800.0));
}
