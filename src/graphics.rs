//! Read-only rendering of the world with macroquad primitives.

use crate::simulation::ecosystem::Ecosystem;
use crate::simulation::geometry::Vector2D;
use macroquad::prelude::*;

/// Side length of a food square in world units.
const FOOD_SIDE: f32 = 6.0;

trait ToScreen {
    type Output;
    fn to_screen(&self, world: &Ecosystem) -> Self::Output;
}

impl ToScreen for Vector2D {
    type Output = (f32, f32);
    fn to_screen(&self, world: &Ecosystem) -> (f32, f32) {
        let scale_x = screen_width() / world.width();
        let scale_y = screen_height() / world.height();
        (self.x * scale_x, self.y * scale_y)
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, world: &Ecosystem) -> f32 {
        let scale_x = screen_width() / world.width();
        let scale_y = screen_height() / world.height();
        let scale = scale_x.min(scale_y);
        self * scale
    }
}

/// Draws every food item as a small square.
pub fn draw_food(world: &Ecosystem) {
    for item in world.food() {
        let (x, y) = item.position.to_screen(world);
        let side = FOOD_SIDE.to_screen(world);
        draw_rectangle(
            x - side / 2.0,
            y - side / 2.0,
            side,
            side,
            Color::from_rgba(item.color.r, item.color.g, item.color.b, item.color.a),
        );
    }
}

/// Draws every entity as a circle in its display color, with an energy bar
/// above the mobile kinds.
pub fn draw_entities(world: &Ecosystem) {
    for entity in world.entities() {
        let (x, y) = entity.position.to_screen(world);
        let radius = entity.size.to_screen(world);
        let body = entity.display_color();

        draw_circle(
            x,
            y,
            radius,
            Color::from_rgba(body.r, body.g, body.b, body.a),
        );

        // plants carry no energy bar
        if entity.kind().is_mobile() {
            let bar_width = 20.0;
            let bar_height = 2.0;
            let bar_offset = 2.0;
            let bar_x = x - bar_width / 2.0;
            let bar_y = y - radius - bar_height - bar_offset;
            draw_rectangle(
                bar_x,
                bar_y,
                bar_width,
                bar_height,
                Color::from_rgba(100, 100, 100, 200),
            );
            draw_rectangle(
                bar_x,
                bar_y,
                bar_width * entity.energy_fraction().clamp(0.0, 1.0),
                bar_height,
                Color::from_rgba(0, 255, 0, 255),
            );
        }
    }
}
