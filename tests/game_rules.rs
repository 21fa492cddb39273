use grid_snake::{
    Cell, Collision, Direction, GameState, GridSize, Phase, ScriptedRng, SessionRng, TickOutcome,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn grid(columns: i32, rows: i32) -> GridSize {
    GridSize::new(columns, rows).unwrap()
}

#[test]
fn random_play_keeps_invariants() {
    let mut game = GameState::new(grid(12, 9), SessionRng::new(2024));
    let mut inputs = StdRng::seed_from_u64(7);
    let mut games_over = 0;

    for _ in 0..5000 {
        if game.phase() == Phase::Over {
            games_over += 1;
            game.reset();
            assert!(!game.body().contains(&game.food()));
            continue;
        }
        if inputs.gen_bool(0.3) {
            game.request_direction(DIRECTIONS[inputs.gen_range(0..4)]);
        }

        let len_before = game.len();
        let score_before = game.score();
        let outcome = game.tick();
        let body = game.body();

        match outcome {
            TickOutcome::Moved => {
                assert_eq!(body.len(), len_before);
                assert_eq!(game.score(), score_before);
            }
            TickOutcome::Ate => {
                assert_eq!(body.len(), len_before + 1);
                assert_eq!(game.score(), score_before + 1);
            }
            TickOutcome::Collided(_) => {
                assert_eq!(body.len(), len_before);
                assert_eq!(game.phase(), Phase::Over);
            }
            TickOutcome::Idle => panic!("running game reported idle"),
        }
        assert!(!body.contains(&game.food()));
        for (i, cell) in body.iter().enumerate() {
            assert!(!body[i + 1..].contains(cell), "duplicate segment {cell:?}");
        }
    }
    assert!(games_over > 0);
}

#[test]
fn game_over_freezes_state() {
    let mut game = GameState::with_layout(
        grid(10, 10),
        [Cell::new(9, 3), Cell::new(8, 3), Cell::new(7, 3)],
        Direction::Right,
        Some(Cell::new(0, 0)),
        ScriptedRng::new([1, 1]),
    )
    .unwrap();
    game.tick();
    let frozen = game.snapshot();
    assert_eq!(frozen.phase, Phase::Over);

    for dir in DIRECTIONS {
        game.request_direction(dir);
        assert_eq!(game.tick(), TickOutcome::Idle);
    }
    assert_eq!(game.snapshot(), frozen);
}

#[test]
fn reversal_request_is_dropped() {
    let mut game = GameState::new(grid(10, 10), ScriptedRng::new([0, 0]));
    let head = game.head();
    game.request_direction(Direction::Left);
    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(game.head(), Cell::new(head.col + 1, head.row));
    assert_eq!(game.direction(), Direction::Right);
}

#[test]
fn hitting_the_right_wall_ends_the_game() {
    let g = grid(10, 8);
    let body = [Cell::new(9, 4), Cell::new(8, 4), Cell::new(7, 4)];
    let mut game = GameState::with_layout(
        g,
        body,
        Direction::Right,
        Some(Cell::new(0, 0)),
        ScriptedRng::default(),
    )
    .unwrap();

    assert_eq!(game.tick(), TickOutcome::Collided(Collision::Wall));
    assert_eq!(game.phase(), Phase::Over);
    assert_eq!(game.collision(), Some(Collision::Wall));
    assert_eq!(game.body(), body.to_vec());
    assert_eq!(game.score(), 0);
}

#[test]
fn hitting_the_top_wall_ends_the_game() {
    let mut game = GameState::with_layout(
        grid(10, 8),
        [Cell::new(4, 0), Cell::new(4, 1)],
        Direction::Up,
        Some(Cell::new(0, 0)),
        ScriptedRng::default(),
    )
    .unwrap();
    assert_eq!(game.tick(), TickOutcome::Collided(Collision::Wall));
}

#[test]
fn hitting_the_left_wall_ends_the_game() {
    let body = [Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2)];
    let mut game = GameState::with_layout(
        grid(10, 8),
        body,
        Direction::Left,
        Some(Cell::new(9, 7)),
        ScriptedRng::default(),
    )
    .unwrap();
    assert_eq!(game.tick(), TickOutcome::Collided(Collision::Wall));
    assert_eq!(game.phase(), Phase::Over);
    assert_eq!(game.body(), body.to_vec());
}

#[test]
fn hitting_the_bottom_wall_ends_the_game() {
    let body = [Cell::new(6, 7), Cell::new(6, 6), Cell::new(6, 5)];
    let mut game = GameState::with_layout(
        grid(10, 8),
        body,
        Direction::Down,
        Some(Cell::new(0, 0)),
        ScriptedRng::default(),
    )
    .unwrap();
    assert_eq!(game.tick(), TickOutcome::Collided(Collision::Wall));
    assert_eq!(game.phase(), Phase::Over);
    assert_eq!(game.body(), body.to_vec());
}

#[test]
fn moving_onto_the_tail_cell_is_fatal() {
    // A closed 2x2 loop: head (1,1) heading left, tail at (1,2) right below it.
    let body = [
        Cell::new(1, 1),
        Cell::new(2, 1),
        Cell::new(2, 2),
        Cell::new(1, 2),
    ];
    let mut game = GameState::with_layout(
        grid(10, 10),
        body,
        Direction::Left,
        Some(Cell::new(7, 7)),
        ScriptedRng::default(),
    )
    .unwrap();

    game.request_direction(Direction::Down);
    assert_eq!(game.tick(), TickOutcome::Collided(Collision::SelfCollision));
    assert_eq!(game.phase(), Phase::Over);
    assert_eq!(game.body(), body.to_vec());
    assert_eq!(game.food(), Cell::new(7, 7));
}

#[test]
fn running_into_the_body_is_fatal() {
    // Head (3,3) heading up, neck (3,4); turning right lands on (4,3).
    let body = [
        Cell::new(3, 3),
        Cell::new(3, 4),
        Cell::new(4, 4),
        Cell::new(4, 3),
        Cell::new(4, 2),
        Cell::new(5, 2),
    ];
    let mut game = GameState::with_layout(
        grid(10, 10),
        body,
        Direction::Up,
        Some(Cell::new(0, 9)),
        ScriptedRng::default(),
    )
    .unwrap();
    game.request_direction(Direction::Right);
    assert_eq!(game.tick(), TickOutcome::Collided(Collision::SelfCollision));
    assert_eq!(game.len(), 6);
}

#[test]
fn eating_grows_and_respawns_food() {
    // First food lands right in front of the head, the next one at (0, 0).
    let mut game = GameState::new(grid(10, 10), ScriptedRng::new([6, 5, 0, 0]));
    assert_eq!(game.len(), 3);
    assert_eq!(game.food(), Cell::new(6, 5));

    assert_eq!(game.tick(), TickOutcome::Ate);
    assert_eq!(game.len(), 4);
    assert_eq!(game.score(), 1);
    assert_eq!(game.head(), Cell::new(6, 5));
    assert_eq!(game.food(), Cell::new(0, 0));
    assert!(!game.body().contains(&game.food()));

    // No food this time: length holds.
    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(game.len(), 4);
    assert_eq!(game.score(), 1);
}

#[test]
fn respawn_avoids_the_grown_body() {
    // The second draw (6, 5) is the new head, so the third (2, 2) is used.
    let mut game = GameState::new(grid(10, 10), ScriptedRng::new([6, 5, 6, 5, 2, 2]));
    assert_eq!(game.tick(), TickOutcome::Ate);
    assert_eq!(game.food(), Cell::new(2, 2));
}

#[test]
fn reset_restores_start_position() {
    let start = vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)];
    let mut game = GameState::new(grid(10, 10), ScriptedRng::new([6, 5, 0, 0, 9, 9]));

    game.tick();
    game.request_direction(Direction::Up);
    game.tick();
    assert_eq!(game.score(), 1);
    game.reset();
    assert_eq!(game.body(), start);
    assert_eq!(game.direction(), Direction::Right);
    assert_eq!(game.score(), 0);
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.collision(), None);
    assert_eq!(game.pending_direction(), None);

    // Also from the over phase.
    for _ in 0..20 {
        game.tick();
    }
    assert_eq!(game.phase(), Phase::Over);
    game.reset();
    assert_eq!(game.body(), start);
    assert_eq!(game.phase(), Phase::Running);
    assert!(!game.body().contains(&game.food()));
}

#[test]
fn reset_clears_pending_direction() {
    let mut game = GameState::new(grid(10, 10), ScriptedRng::new([0, 0]));
    game.request_direction(Direction::Up);
    game.reset();
    game.tick();
    assert_eq!(game.head(), Cell::new(6, 5));
}

#[test]
fn same_seed_same_game() {
    let play = |seed| {
        let mut game = GameState::new(grid(16, 12), SessionRng::new(seed));
        let mut foods = vec![game.food()];
        for step in 0..40 {
            if step % 7 == 3 {
                game.request_direction(Direction::Down);
            }
            if step % 7 == 6 {
                game.request_direction(Direction::Right);
            }
            game.tick();
            foods.push(game.food());
        }
        (game.snapshot(), foods)
    };
    assert_eq!(play(11), play(11));
}
