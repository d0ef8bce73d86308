//! 2D vector and color value types used throughout the simulation.

use std::ops::{Add, Mul};

/// A 2D vector with value semantics.
///
/// Every operation returns a new vector; nothing mutates in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vector2D {
    /// Creates a vector from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Euclidean length of the vector.
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Base color of herbivores.
    pub const HERBIVORE: Self = Self::new(0, 0, 255, 255);
    /// Base color of carnivores.
    pub const CARNIVORE: Self = Self::new(255, 0, 0, 255);
    /// Base color of plants.
    pub const PLANT: Self = Self::new(0, 255, 0, 255);
    /// Color of food deposits.
    pub const FOOD: Self = Self::new(255, 220, 0, 255);

    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}
