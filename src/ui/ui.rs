use crate::simulation::ecosystem::Ecosystem;
use egui_macroquad::egui;
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;

/// UI-side state: pause/speed controls, pending commands for the driver,
/// and the sampled population histories behind the plot.
pub struct UIState {
    /// Herbivore counts over time.
    pub herbivore_history: VecDeque<(f64, f64)>,
    /// Carnivore counts over time.
    pub carnivore_history: VecDeque<(f64, f64)>,
    /// Plant counts over time.
    pub plant_history: VecDeque<(f64, f64)>,
    /// Food counts over time.
    pub food_history: VecDeque<(f64, f64)>,
    last_sample_time: f32,
    sample_interval: f32,
    /// Whether the driver should skip simulation updates.
    pub paused: bool,
    /// Set by the reset button; consumed by the driver.
    pub reset_requested: bool,
    /// Set by the spawn-food button; consumed by the driver.
    pub spawn_food_requested: bool,
    /// One-line status shown in the stats panel.
    pub status_message: Option<String>,
    /// Time-scale multiplier applied to the frame delta.
    pub simulation_speed: f32,
}

impl UIState {
    /// Creates the initial UI state.
    pub fn new() -> Self {
        Self {
            herbivore_history: VecDeque::new(),
            carnivore_history: VecDeque::new(),
            plant_history: VecDeque::new(),
            food_history: VecDeque::new(),
            last_sample_time: 0.0,
            sample_interval: 0.5, // Sample every 0.5 simulated seconds
            paused: false,
            reset_requested: false,
            spawn_food_requested: false,
            status_message: None,
            simulation_speed: 1.0, // Default 1x speed
        }
    }

    /// Drops the plot histories, e.g. after a reset.
    pub fn clear_history(&mut self) {
        self.herbivore_history.clear();
        self.carnivore_history.clear();
        self.plant_history.clear();
        self.food_history.clear();
        self.last_sample_time = 0.0;
    }

    /// Samples the population counts into the plot histories, throttled by
    /// simulated time.
    pub fn update_history(&mut self, world: &Ecosystem) {
        if world.time() - self.last_sample_time >= self.sample_interval {
            self.last_sample_time = world.time();

            let time = f64::from(world.time());
            let stats = world.statistics();

            self.herbivore_history
                .push_back((time, stats.total_herbivores as f64));
            self.carnivore_history
                .push_back((time, stats.total_carnivores as f64));
            self.plant_history
                .push_back((time, stats.total_plants as f64));
            self.food_history.push_back((time, stats.total_food as f64));

            if self.herbivore_history.len() > MAX_HISTORY_POINTS {
                self.herbivore_history.pop_front();
            }
            if self.carnivore_history.len() > MAX_HISTORY_POINTS {
                self.carnivore_history.pop_front();
            }
            if self.plant_history.len() > MAX_HISTORY_POINTS {
                self.plant_history.pop_front();
            }
            if self.food_history.len() > MAX_HISTORY_POINTS {
                self.food_history.pop_front();
            }
        }
    }
}

/// Builds the egui frame: the stats side panel and the event feed.
pub fn draw_ui(state: &mut UIState, world: &Ecosystem) {
    egui_macroquad::ui(|egui_ctx| {
        // Configure brighter text and UI
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        visuals.widgets.noninteractive.fg_stroke.color = egui::Color32::from_rgb(220, 220, 220);
        visuals.widgets.inactive.fg_stroke.color = egui::Color32::from_rgb(200, 200, 200);
        visuals.widgets.hovered.fg_stroke.color = egui::Color32::WHITE;
        visuals.widgets.active.fg_stroke.color = egui::Color32::WHITE;
        egui_ctx.set_visuals(visuals);

        // Right-side stats panel
        super::stats::draw_stats_panel(egui_ctx, state, world);

        // Bottom-left event feed
        super::events::draw_events_panel(egui_ctx, world);
    });
}

/// Flushes the egui frame to the screen.
pub fn process_egui() {
    egui_macroquad::draw();
}
