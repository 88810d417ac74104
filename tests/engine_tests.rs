use rand::rngs::SmallRng;
use rand::SeedableRng;
use strike::{
    coord_label, FiredEntry, GameEngine, GameError, GameStatus, Mission, ShotOutcome,
};

fn engine_with(grid: Vec<Vec<u8>>, missiles: u32) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(7);
    let catalog = vec![Mission::new("Test Range", "Live-fire exercise", grid, missiles)];
    GameEngine::with_catalog(catalog, &mut rng).unwrap()
}

#[test]
fn test_single_target_win() {
    let mut grid = vec![vec![0u8; 5]; 5];
    grid[1][1] = 1;
    let mut engine = engine_with(grid, 10);

    let (row, col) = engine.parse_coordinates("B2").unwrap();
    assert_eq!((row, col), (2, 2));

    let report = engine.fire(row, col).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Hit);
    assert_eq!(report.message, "\nHIT!!!\n");
    assert_eq!(engine.targets_left(), 0);
    assert_eq!(engine.missiles_left(), 9);
    assert!(engine.game_over());
    assert!(engine.has_won());
    assert_eq!(engine.status(), GameStatus::Won);
}

#[test]
fn test_miss_leaves_targets_untouched() {
    let mut grid = vec![vec![0u8; 5]; 5];
    grid[1][1] = 1;
    let mut engine = engine_with(grid, 10);

    let report = engine.fire(1, 1).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(engine.targets_left(), 1);
    assert_eq!(engine.missiles_left(), 9);
    assert_eq!(
        engine.fired_at(1, 1),
        Some(FiredEntry {
            outcome: ShotOutcome::Miss,
            before: 0,
            after: 0,
        })
    );
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn test_duplicate_miss_costs_nothing() {
    let mut engine = engine_with(vec![vec![1, 0], vec![0, 0]], 5);

    assert_eq!(engine.fire(2, 2).unwrap().outcome, ShotOutcome::Miss);
    let report = engine.fire(2, 2).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Duplicate);
    assert_eq!(engine.missiles_left(), 4);
    assert_eq!(engine.shots_fired(), 1);
}

#[test]
fn test_duplicate_destroyed_costs_nothing() {
    let mut engine = engine_with(vec![vec![1, 1]], 5);

    assert_eq!(engine.fire(1, 1).unwrap().outcome, ShotOutcome::Hit);
    let report = engine.fire(1, 1).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Duplicate);
    assert_eq!(engine.missiles_left(), 4);
    assert_eq!(engine.targets_left(), 1);
    assert_eq!(engine.shots_fired(), 1);
}

#[test]
fn test_armored_cell_stays_targetable() {
    let mut engine = engine_with(vec![vec![2, 1]], 5);

    let first = engine.fire(1, 1).unwrap();
    assert_eq!(first.outcome, ShotOutcome::Armored);
    assert_eq!(
        first.message,
        "\nARMORED TARGET HIT!\nYou need 1 more shot to sink this target\n"
    );
    assert_eq!(
        engine.fired_at(1, 1),
        Some(FiredEntry {
            outcome: ShotOutcome::Armored,
            before: 2,
            after: 1,
        })
    );

    // not a duplicate: the countdown continues
    let second = engine.fire(1, 1).unwrap();
    assert_eq!(second.outcome, ShotOutcome::Hit);
    assert_eq!(engine.targets_left(), 1);
    assert_eq!(engine.missiles_left(), 3);
}

#[test]
fn test_armored_countdown_win_on_last_missile() {
    let mut engine = engine_with(vec![vec![3]], 3);

    let first = engine.fire(1, 1).unwrap();
    assert_eq!(first.outcome, ShotOutcome::Armored);
    assert_eq!(
        first.message,
        "\nARMORED TARGET HIT!\nYou need 2 more shots to sink this target\n"
    );

    let second = engine.fire(1, 1).unwrap();
    assert_eq!(second.outcome, ShotOutcome::Armored);
    assert_eq!(
        second.message,
        "\nANOTHER HIT!\nYou need 1 more shot to sink this target\n"
    );

    // the win check runs before missile exhaustion, so emptying the
    // inventory on the killing blow still wins
    let third = engine.fire(1, 1).unwrap();
    assert_eq!(third.outcome, ShotOutcome::Hit);
    assert_eq!(engine.missiles_left(), 0);
    assert_eq!(engine.targets_left(), 0);
    assert!(engine.game_over());
    assert!(engine.has_won());
}

#[test]
fn test_loss_on_missile_exhaustion() {
    let mut engine = engine_with(vec![vec![1, 0]], 1);

    let report = engine.fire(1, 2).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(engine.missiles_left(), 0);
    assert!(engine.game_over());
    assert!(!engine.has_won());
    assert_eq!(engine.status(), GameStatus::Lost);

    // the session is over; further shots are refused outright
    assert_eq!(engine.fire(1, 1).unwrap_err(), GameError::MissionOver);
}

#[test]
fn test_out_of_bounds_shot() {
    let mut engine = engine_with(vec![vec![1]], 5);

    assert_eq!(
        engine.fire(2, 1).unwrap_err(),
        GameError::OutOfBounds { row: 2, col: 1 }
    );
    assert_eq!(
        engine.fire(0, 1).unwrap_err(),
        GameError::OutOfBounds { row: 0, col: 1 }
    );
    assert_eq!(engine.missiles_left(), 5);
}

#[test]
fn test_parse_coordinates_accepts_valid_forms() {
    let mut grid = vec![vec![0u8; 3]; 12];
    grid[0][0] = 1;
    let engine = engine_with(grid, 5);

    assert_eq!(engine.parse_coordinates("a1"), Some((1, 1)));
    assert_eq!(engine.parse_coordinates("C12"), Some((12, 3)));
    assert_eq!(engine.parse_coordinates(" b7 "), Some((7, 2)));
    assert_eq!(engine.parse_coordinates("b07"), Some((7, 2)));
}

#[test]
fn test_parse_coordinates_rejects_malformed_input() {
    let mut grid = vec![vec![0u8; 3]; 12];
    grid[0][0] = 1;
    let engine = engine_with(grid, 5);

    assert_eq!(engine.parse_coordinates(""), None);
    assert_eq!(engine.parse_coordinates("A"), None);
    assert_eq!(engine.parse_coordinates("7"), None);
    assert_eq!(engine.parse_coordinates("1A"), None);
    assert_eq!(engine.parse_coordinates("A 1"), None);
    assert_eq!(engine.parse_coordinates("A-1"), None);
    assert_eq!(engine.parse_coordinates("A1B"), None);
    // multi-letter columns do not exist
    assert_eq!(engine.parse_coordinates("AA3"), None);
}

#[test]
fn test_parse_coordinates_rejects_out_of_range() {
    let mut grid = vec![vec![0u8; 3]; 12];
    grid[0][0] = 1;
    let engine = engine_with(grid, 5);

    assert_eq!(engine.parse_coordinates("D1"), None);
    assert_eq!(engine.parse_coordinates("A0"), None);
    assert_eq!(engine.parse_coordinates("A13"), None);
    assert_eq!(engine.parse_coordinates("Z1"), None);
}

#[test]
fn test_coord_label_round_trip() {
    let mut grid = vec![vec![0u8; 3]; 12];
    grid[0][0] = 1;
    let engine = engine_with(grid, 5);

    assert_eq!(coord_label(12, 3), "C12");
    assert_eq!(engine.parse_coordinates(&coord_label(12, 3)), Some((12, 3)));
    assert_eq!(engine.parse_coordinates(&coord_label(1, 1)), Some((1, 1)));
}

#[test]
fn test_reset_same_mission_restores_pristine_state() {
    let mut engine = engine_with(vec![vec![1, 0], vec![0, 1]], 6);
    let mut rng = SmallRng::seed_from_u64(3);

    assert_eq!(engine.fire(1, 1).unwrap().outcome, ShotOutcome::Hit);
    assert_eq!(engine.fire(1, 2).unwrap().outcome, ShotOutcome::Miss);
    assert_eq!(engine.missiles_left(), 4);
    assert_eq!(engine.targets_left(), 1);

    engine.reset(false, &mut rng);
    assert_eq!(engine.mission().name(), "Test Range");
    assert_eq!(engine.missiles_left(), 6);
    assert_eq!(engine.targets_left(), 2);
    assert_eq!(engine.shots_fired(), 0);
    assert!(!engine.game_over());

    // the grid came back from the template: the destroyed cell is live again
    assert_eq!(engine.fire(1, 1).unwrap().outcome, ShotOutcome::Hit);
}

#[test]
fn test_reset_new_mission_rolls_from_catalog() {
    let mut rng = SmallRng::seed_from_u64(11);
    let catalog = vec![
        Mission::new("Alpha", "", vec![vec![1]], 3),
        Mission::new("Bravo", "", vec![vec![0, 1], vec![1, 0]], 8),
    ];
    let mut engine = GameEngine::with_catalog(catalog, &mut rng).unwrap();

    let mut seen_alpha = false;
    let mut seen_bravo = false;
    for _ in 0..32 {
        match engine.mission().name() {
            "Alpha" => {
                seen_alpha = true;
                assert_eq!(engine.missiles_left(), 3);
                assert_eq!(engine.targets_left(), 1);
            }
            "Bravo" => {
                seen_bravo = true;
                assert_eq!(engine.missiles_left(), 8);
                assert_eq!(engine.targets_left(), 2);
            }
            other => panic!("unknown mission {}", other),
        }
        assert_eq!(engine.shots_fired(), 0);
        engine.reset(true, &mut rng);
    }
    assert!(seen_alpha && seen_bravo);
}

#[test]
fn test_jagged_rows_read_as_water() {
    let mission = Mission::new("Jagged", "", vec![vec![1], vec![0, 0, 1]], 5);
    assert_eq!(mission.cell(1, 3), 0);
    assert_eq!(mission.cell(2, 3), 1);

    let mut engine = engine_with(vec![vec![1], vec![0, 0, 1]], 5);
    assert_eq!(engine.interior_width(), 3);
    assert_eq!(engine.interior_height(), 2);

    assert_eq!(engine.parse_coordinates("C1"), Some((1, 3)));
    assert_eq!(engine.fire(1, 3).unwrap().outcome, ShotOutcome::Miss);
    assert_eq!(engine.fire(2, 3).unwrap().outcome, ShotOutcome::Hit);
}

#[test]
fn test_intro_message_reports_live_counts() {
    let engine = engine_with(vec![vec![1, 1, 1]], 10);
    let intro = engine.intro_message();
    assert!(intro.contains("there are 3 enemy targets"));
    assert!(intro.contains("We have 10 missiles left"));
    assert!(intro.contains("(yes/no)"));
}

#[test]
fn test_stats_text() {
    let mut engine = engine_with(vec![vec![2, 1], vec![0, 0]], 10);

    assert_eq!(engine.fire(1, 2).unwrap().outcome, ShotOutcome::Hit);
    assert_eq!(engine.fire(2, 1).unwrap().outcome, ShotOutcome::Miss);
    // armored target damaged but standing: counts as missed until destroyed
    assert_eq!(engine.fire(1, 1).unwrap().outcome, ShotOutcome::Armored);

    assert_eq!(
        engine.stats(),
        "\nTargets Hit:     1\nTargets Missed:  2\nTargets Left:    1\nArmored Targets: 1\n"
    );
}

#[test]
fn test_snapshot_reflects_session() {
    let mut engine = engine_with(vec![vec![1, 1]], 4);
    engine.fire(1, 1).unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.mission_name, "Test Range");
    assert_eq!(snapshot.missiles_left, 3);
    assert_eq!(snapshot.targets_left, 1);
    assert_eq!(snapshot.total_targets, 2);
    assert_eq!(snapshot.armored_targets, 0);
    assert_eq!(snapshot.shots_fired, 1);
    assert!(!snapshot.game_over);
    assert!(!snapshot.has_won);
}

#[test]
fn test_with_catalog_rejects_bad_input() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        GameEngine::with_catalog(vec![], &mut rng).unwrap_err(),
        GameError::EmptyCatalog
    );
    assert_eq!(
        GameEngine::with_catalog(vec![Mission::new("Empty", "", vec![vec![0]], 5)], &mut rng)
            .unwrap_err(),
        GameError::NoTargets
    );
    assert_eq!(
        GameEngine::with_catalog(vec![Mission::new("Dry", "", vec![vec![1]], 0)], &mut rng)
            .unwrap_err(),
        GameError::NoMissiles
    );
    let wide = vec![(0..27).map(|i| u8::from(i == 0)).collect::<Vec<u8>>()];
    assert_eq!(
        GameEngine::with_catalog(vec![Mission::new("Wide", "", wide, 5)], &mut rng).unwrap_err(),
        GameError::GridTooWide { width: 27 }
    );
}

#[test]
fn test_builtin_catalog_is_playable() {
    for mission in strike::builtin_catalog() {
        mission.validate().unwrap();
        let metrics = mission.metrics();
        // every built-in mission is winnable on its own allowance
        let required: u32 = mission
            .grid()
            .iter()
            .flatten()
            .map(|&v| u32::from(v))
            .sum();
        assert!(
            mission.missile_allowance() >= required,
            "mission {} cannot be won: {} missiles for {} required hits",
            mission.name(),
            mission.missile_allowance(),
            required
        );
        assert!(metrics.interior_width <= strike::MAX_COLUMNS);
    }
}
