use crate::simulation::ecosystem::{self, Ecosystem};
use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use std::collections::VecDeque;

use super::ui::UIState;

pub(super) fn draw_stats_panel(egui_ctx: &egui::Context, state: &mut UIState, world: &Ecosystem) {
    egui::SidePanel::right("stats_panel")
        .default_width(300.0)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Ecosystem Stats");
            ui.separator();

            // Pause/Reset/Spawn Food buttons
            ui.horizontal(|ui| {
                let pause_text = if state.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(pause_text).clicked() {
                    state.paused = !state.paused;
                }
                if ui.button("🔄 Reset").clicked() {
                    state.reset_requested = true;
                }
                if ui.button("🌾 Spawn Food").clicked() {
                    state.spawn_food_requested = true;
                }
            });

            // Show status message if any
            if let Some(ref msg) = state.status_message {
                ui.label(msg);
            }

            ui.separator();

            // Simulation speed slider
            ui.label("Simulation Speed");
            ui.add(
                egui::Slider::new(&mut state.simulation_speed, 0.1..=5.0)
                    .text("x")
                    .logarithmic(false),
            );
            ui.label(format!("Speed: {:.1}x", state.simulation_speed));

            ui.separator();

            ui.label(format!("Time: {:.1}s", world.time()));
            ui.label(format!("Tick: {}", world.tick()));
            ui.separator();

            let stats = world.statistics();

            ui.label(format!("Herbivores: {}", stats.total_herbivores));
            ui.label(format!("Carnivores: {}", stats.total_carnivores));
            ui.label(format!("Plants: {}", stats.total_plants));
            ui.label(format!(
                "Entities: {}/{}",
                world.entity_count(),
                world.max_entities()
            ));
            ui.label(format!("Food: {}/{}", world.food_count(), ecosystem::MAX_FOOD));

            ui.separator();

            ui.label(format!("Births this tick: {}", stats.births_today));
            ui.label(format!("Deaths this tick: {}", stats.deaths_today));

            ui.separator();

            // Combined population plot
            ui.heading("Population Over Time");
            draw_population_plot(ui, state);
        });
}

fn draw_population_plot(ui: &mut egui::Ui, state: &UIState) {
    if state.herbivore_history.is_empty() && state.food_history.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("population_plot")
        .height(200.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nTime: {:.1}s\nCount: {:.0}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            plot_line(
                plot_ui,
                &state.herbivore_history,
                egui::Color32::from_rgb(100, 150, 255),
                "Herbivores",
            );
            plot_line(
                plot_ui,
                &state.carnivore_history,
                egui::Color32::from_rgb(255, 100, 100),
                "Carnivores",
            );
            plot_line(
                plot_ui,
                &state.plant_history,
                egui::Color32::from_rgb(100, 255, 100),
                "Plants",
            );
            plot_line(
                plot_ui,
                &state.food_history,
                egui::Color32::from_rgb(255, 200, 100),
                "Food",
            );
        });
}

fn plot_line(
    plot_ui: &mut egui_plot::PlotUi,
    data: &VecDeque<(f64, f64)>,
    color: egui::Color32,
    name: &str,
) {
    if data.is_empty() {
        return;
    }
    let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
    plot_ui.line(Line::new(points).color(color).name(name));
}
