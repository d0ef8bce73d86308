use macroquad::prelude::*;

use terrarium::graphics;
use terrarium::simulation::ecosystem::Ecosystem;
use terrarium::simulation::params::Params;
use terrarium::ui;

/// Time-scale factor applied per Up/Down key press
const SPEED_STEP: f32 = 1.5;
/// Food items dropped per spawn-food request
const FOOD_DROP: usize = 10;

fn window_conf() -> Conf {
    Conf {
        window_title: "Terrarium".to_owned(),
        window_width: 800,
        window_height: 600,
        ..Default::default()
    }
}

/// Loads parameters from the file given as the first CLI argument,
/// falling back to defaults when no file is given or loading fails.
fn load_params() -> Params {
    let Some(path) = std::env::args().nth(1) else {
        return Params::default();
    };

    match Params::load_from_file(&path) {
        Ok(params) => {
            println!("Loaded parameters from {path}");
            params
        }
        Err(err) => {
            eprintln!("Failed to load {path}: {err}, using defaults");
            Params::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let params = load_params();

    let mut world = Ecosystem::new(&params);
    world.initialize(
        params.initial_herbivores,
        params.initial_carnivores,
        params.initial_plants,
    );

    let mut ui_state = ui::UIState::new();

    println!("Starting terrarium simulation");

    loop {
        // Keyboard shortcuts mirror the panel buttons
        if is_key_pressed(KeyCode::Space) {
            ui_state.paused = !ui_state.paused;
        }
        if is_key_pressed(KeyCode::R) {
            ui_state.reset_requested = true;
        }
        if is_key_pressed(KeyCode::F) {
            ui_state.spawn_food_requested = true;
        }
        if is_key_pressed(KeyCode::Up) {
            ui_state.simulation_speed = (ui_state.simulation_speed * SPEED_STEP).min(5.0);
        }
        if is_key_pressed(KeyCode::Down) {
            ui_state.simulation_speed = (ui_state.simulation_speed / SPEED_STEP).max(0.1);
        }

        if ui_state.reset_requested {
            ui_state.reset_requested = false;
            world.initialize(
                params.initial_herbivores,
                params.initial_carnivores,
                params.initial_plants,
            );
            ui_state.clear_history();
            ui_state.status_message = Some("Simulation reset".to_string());
        }

        if ui_state.spawn_food_requested {
            ui_state.spawn_food_requested = false;
            world.spawn_food(FOOD_DROP);
            ui_state.status_message = Some(format!("Dropped {FOOD_DROP} food"));
        }

        if !ui_state.paused {
            world.update(get_frame_time() * ui_state.simulation_speed);
            ui_state.update_history(&world);
        }

        clear_background(Color::from_rgba(30, 30, 30, 255));

        graphics::draw_food(&world);
        graphics::draw_entities(&world);

        ui::draw_ui(&mut ui_state, &world);
        ui::process_egui();

        next_frame().await;
    }
}
