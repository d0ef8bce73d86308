//! Food deposits that herbivores consume for energy.

use super::geometry::{Color, Vector2D};

/// Energy a food item grants unless a caller specifies otherwise.
pub const DEFAULT_FOOD_ENERGY: f32 = 25.0;

/// An inert energy deposit.
///
/// Food has no identity beyond its index in the world's collection. A
/// herbivore consumes the whole item, which removes it atomically.
#[derive(Debug, Clone)]
pub struct Food {
    /// Position in world units.
    pub position: Vector2D,
    /// Energy granted to the consumer.
    pub energy_value: f32,
    /// Render color.
    pub color: Color,
}

impl Food {
    /// Creates a food item at the given position.
    pub fn new(position: Vector2D, energy_value: f32) -> Self {
        Self {
            position,
            energy_value,
            color: Color::FOOD,
        }
    }
}
