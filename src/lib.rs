//! # Terrarium - Artificial Life Simulation
//!
//! A discrete-time simulation of a small ecosystem: plants, herbivores, and
//! carnivores age, wander, eat, reproduce, and die inside a bounded 2D
//! world.
//!
//! ## Features
//!
//! - Three species with fixed per-kind constants (energy, lifespan, size)
//! - Fixed per-tick pipeline: movement and energy economy, foraging and
//!   predation, reproduction, dead-entity sweep, plant growth, statistics
//! - Two-phase delete: interactions flag entities dead, a sweep removes them
//! - Capacity-capped spawning and a hard food ceiling
//! - Seedable world randomness for reproducible runs
//! - Real-time visualization with egui/macroquad
//!
//! ## Core Modules
//!
//! - [`simulation::entity`] - Entity lifecycle and per-species behavior
//! - [`simulation::ecosystem`] - The world and its tick pipeline
//! - [`simulation::food`] - Food deposits herbivores graze on
//! - [`simulation::params`] - Startup configuration
//! - [`simulation::event_log`] - Recent-event feed for the UI

/// Core simulation logic and data structures.
pub mod simulation {
    /// The simulation world and its per-tick update pipeline.
    pub mod ecosystem;
    /// Entity lifecycle, species constants, and reproduction.
    pub mod entity;
    /// Bounded log of notable simulation events.
    pub mod event_log;
    /// Food deposits that herbivores consume.
    pub mod food;
    /// 2D vector and color value types.
    pub mod geometry;
    /// Simulation parameters.
    pub mod params;
}

/// World rendering with macroquad primitives.
pub mod graphics;
/// User interface panels built on egui.
pub mod ui;
