use macroquad::prelude::*;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

use grid_snake::{Cell, Direction, GameConfig, GameState, Phase, SharedGame, Snapshot, Ticker};

const WINDOW_TITLE: &str = "Snake Game";
const BACKGROUND: Color = Color::new(0.95, 0.95, 0.95, 1.0);

fn load_config() -> (GameConfig, Option<String>) {
    match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => (config, None),
            Err(e) => (GameConfig::default(), Some(format!("{e}, using defaults"))),
        },
        None => (GameConfig::default(), None),
    }
}

fn init_logging(config: &GameConfig) {
    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    if TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("logger already initialised");
    }
}

fn draw_cell(cell: Cell, tile: f32, color: Color) {
    let x = cell.col as f32 * tile;
    let y = cell.row as f32 * tile;
    draw_rectangle(x, y, tile - 1.0, tile - 1.0, color);
}

fn read_direction() -> Option<Direction> {
    let mut dir_press = None;
    if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
        dir_press = Some(Direction::Up);
    }
    if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
        dir_press = Some(Direction::Down);
    }
    if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
        dir_press = Some(Direction::Left);
    }
    if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
        dir_press = Some(Direction::Right);
    }
    dir_press
}

fn draw_board(state: &Snapshot, tile: f32) {
    for (i, cell) in state.body.iter().enumerate() {
        draw_cell(*cell, tile, if i == 0 { DARKGREEN } else { GREEN });
    }
    draw_cell(state.food, tile, RED);
    draw_text(&format!("Score: {}", state.score), 10.0, 20.0, 24.0, BLACK);
}

/// Draws the game over banner and restart button; true when the button is clicked.
fn draw_game_over(screen_w: f32, screen_h: f32) -> bool {
    let text = "Game Over";
    let ts = measure_text(text, None, 40, 1.0);
    draw_text(text, (screen_w - ts.width) / 2.0, screen_h / 2.0 - 30.0, 40.0, BLACK);

    let btn_rect = Rect {
        x: (screen_w - 160.0) / 2.0,
        y: screen_h / 2.0,
        w: 160.0,
        h: 44.0,
    };
    let (mx, my) = mouse_position();
    let hovering = btn_rect.contains(vec2(mx, my));
    draw_rectangle(
        btn_rect.x,
        btn_rect.y,
        btn_rect.w,
        btn_rect.h,
        if hovering { DARKBLUE } else { BLUE },
    );
    let btxt = "Restart";
    let bt = measure_text(btxt, None, 28, 1.0);
    draw_text(
        btxt,
        btn_rect.x + (btn_rect.w - bt.width) / 2.0,
        btn_rect.y + 30.0,
        28.0,
        WHITE,
    );
    hovering && is_mouse_button_pressed(MouseButton::Left)
}

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let (config, config_err) = load_config();
    init_logging(&config);
    if let Some(msg) = config_err {
        log::warn!("{msg}");
    }

    let grid = match config.grid() {
        Ok(grid) => grid,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    let rng = config.rng();
    log::info!(
        "starting {}x{} game, seed {}, tick {} ms",
        grid.columns(),
        grid.rows(),
        rng.seed(),
        config.tick_interval_ms
    );

    let tile = config.tile_size as f32;
    let screen_w = grid.columns() as f32 * tile;
    let screen_h = grid.rows() as f32 * tile;
    request_new_screen_size(screen_w, screen_h);

    let game = SharedGame::new(GameState::new(grid, rng));
    let ticker = Ticker::spawn(game.clone(), config.tick_interval());
    let mut reported_over = false;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if let Some(dir) = read_direction() {
            game.request_direction(dir);
        }

        let state = game.snapshot();
        clear_background(BACKGROUND);
        draw_board(&state, tile);

        if state.phase == Phase::Over {
            if !reported_over {
                if let Ok(json) = serde_json::to_string(&state) {
                    log::debug!("final state: {json}");
                }
                reported_over = true;
            }
            let clicked = draw_game_over(screen_w, screen_h);
            if clicked || is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::R) {
                game.reset();
                reported_over = false;
            }
        }

        next_frame().await;
    }

    ticker.stop();
    log::info!("bye");
}
