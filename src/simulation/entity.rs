//! Entity behavior, state, and lifecycle management.
//!
//! An entity is one organism: a plant, herbivore, or carnivore. Each tick it
//! drains (or, for plants, gains) energy, ages in whole ticks, wanders, and
//! passes a vitality check. Death only flips the `alive` flag; the ecosystem
//! sweeps flagged entities out after all interactions have run.

use rand::Rng;

use super::geometry::{Color, Vector2D};

/// Probability per update that a mobile entity picks a new direction.
const DIRECTION_CHANGE_CHANCE: f32 = 0.02;
/// World units travelled per second at unit velocity.
const MOVEMENT_SPEED: f32 = 20.0;
/// Energy cost per unit of velocity magnitude per second.
const MOVEMENT_ENERGY_RATE: f32 = 0.05;
/// Energy fraction below which the display color fades toward red.
const LOW_ENERGY_FRACTION: f32 = 0.3;
/// Energy fraction a parent must exceed to qualify for reproduction.
const REPRODUCTION_ENERGY_FRACTION: f32 = 0.8;
/// Age in ticks a parent must exceed to qualify for reproduction.
const REPRODUCTION_MIN_AGE: u32 = 20;
/// Probability that a qualifying entity actually reproduces.
const REPRODUCTION_CHANCE: f32 = 0.25;
/// Fraction of the parent's pre-split energy kept by each side of the split.
const OFFSPRING_ENERGY_FRACTION: f32 = 0.6;
/// Child size relative to the parent.
const OFFSPRING_SIZE_FRACTION: f32 = 0.8;

/// The closed set of species in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Grazing species that eats food deposits.
    Herbivore,
    /// Hunting species that preys on herbivores.
    Carnivore,
    /// Immobile species that gains energy passively.
    Plant,
}

/// Fixed constants of one species.
#[derive(Debug, Clone, Copy)]
pub struct SpeciesProfile {
    /// Energy a fresh spawn starts with.
    pub initial_energy: f32,
    /// Upper energy clamp.
    pub max_energy: f32,
    /// Age in ticks at which the entity dies.
    pub max_age: u32,
    /// Passive energy drain per second. Negative rates gain energy.
    pub base_energy_rate: f32,
    /// Base body color.
    pub color: Color,
    /// Body radius in world units.
    pub size: f32,
}

impl EntityKind {
    /// Returns the fixed constants of this species.
    pub const fn profile(self) -> SpeciesProfile {
        match self {
            Self::Herbivore => SpeciesProfile {
                initial_energy: 80.0,
                max_energy: 150.0,
                max_age: 200,
                base_energy_rate: 1.5,
                color: Color::HERBIVORE,
                size: 8.0,
            },
            Self::Carnivore => SpeciesProfile {
                initial_energy: 100.0,
                max_energy: 200.0,
                max_age: 150,
                base_energy_rate: 2.0,
                color: Color::CARNIVORE,
                size: 12.0,
            },
            Self::Plant => SpeciesProfile {
                initial_energy: 50.0,
                max_energy: 100.0,
                max_age: 300,
                base_energy_rate: -0.2,
                color: Color::PLANT,
                size: 6.0,
            },
        }
    }

    /// Whether this species moves at all.
    pub const fn is_mobile(self) -> bool {
        !matches!(self, Self::Plant)
    }

    /// Species name used in derived entity names.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Herbivore => "Herbivore",
            Self::Carnivore => "Carnivore",
            Self::Plant => "Plant",
        }
    }
}

/// A single simulated organism.
///
/// Entities are owned exclusively by the ecosystem and are never removed
/// mid-tick. Interactions flag them dead; the cleanup sweep removes them
/// once every phase of the tick has run.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Human-readable identifier. Not required to be unique.
    pub name: String,
    kind: EntityKind,
    /// Current energy. Unclamped below; the vitality check handles death.
    pub energy: f32,
    /// Upper energy clamp.
    pub max_energy: f32,
    /// Age in ticks.
    pub age: u32,
    /// Age at which the vitality check kills the entity.
    pub max_age: u32,
    /// Position in world units.
    pub position: Vector2D,
    /// Direction of travel, components in [-1, 1].
    pub velocity: Vector2D,
    /// Base body color.
    pub color: Color,
    /// Body radius in world units.
    pub size: f32,
    alive: bool,
}

fn random_direction(rng: &mut impl Rng) -> Vector2D {
    Vector2D::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0))
}

impl Entity {
    /// Creates a live entity with its species defaults and a random initial
    /// direction.
    ///
    /// # Arguments
    ///
    /// * `kind` - Species, fixed for the entity's lifetime
    /// * `name` - Human-readable identifier
    /// * `position` - Starting position in world units
    /// * `rng` - Source of the initial direction
    pub fn new(kind: EntityKind, name: String, position: Vector2D, rng: &mut impl Rng) -> Self {
        let profile = kind.profile();
        Self {
            name,
            kind,
            energy: profile.initial_energy,
            max_energy: profile.max_energy,
            age: 0,
            max_age: profile.max_age,
            position,
            velocity: random_direction(rng),
            color: profile.color,
            size: profile.size,
            alive: true,
        }
    }

    /// Advances this entity by one tick. Dead entities do not change.
    ///
    /// The steps run in a fixed order: passive energy delta, aging,
    /// movement, then the vitality check.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        if !self.alive {
            return;
        }

        self.energy -= self.kind.profile().base_energy_rate * dt;
        self.age += (dt * 10.0) as u32;
        self.wander(dt, rng);

        if self.energy <= 0.0 || self.age >= self.max_age {
            self.alive = false;
        }
    }

    /// Random-walk movement. Plants stay put.
    fn wander(&mut self, dt: f32, rng: &mut impl Rng) {
        if !self.kind.is_mobile() {
            return;
        }
        if rng.random::<f32>() < DIRECTION_CHANGE_CHANCE {
            self.velocity = random_direction(rng);
        }
        self.position = self.position + self.velocity * (dt * MOVEMENT_SPEED);
        self.energy -= self.velocity.magnitude() * dt * MOVEMENT_ENERGY_RATE;
    }

    /// Adds energy, clamped only at the top.
    ///
    /// Negative amounts are allowed and can drive energy arbitrarily far
    /// below zero; predation passes a large negative amount as its kill
    /// signal.
    pub fn eat(&mut self, amount: f32) {
        self.energy = (self.energy + amount).min(self.max_energy);
    }

    /// Flags the entity dead without waiting for a vitality check.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Whether this entity qualifies for a reproduction attempt.
    pub fn can_reproduce(&self) -> bool {
        self.alive
            && self.energy > self.max_energy * REPRODUCTION_ENERGY_FRACTION
            && self.age > REPRODUCTION_MIN_AGE
    }

    /// Attempts to reproduce. Qualifying entities succeed 25% of the time.
    ///
    /// On success the parent's energy drops to 60% of its pre-call value
    /// and the child starts with that same budget, at age zero and 80% of
    /// the parent's size.
    ///
    /// # Returns
    ///
    /// The child, or `None` when the entity does not qualify or the roll
    /// fails.
    pub fn reproduce(&mut self, rng: &mut impl Rng) -> Option<Self> {
        if !self.can_reproduce() {
            return None;
        }
        if rng.random::<f32>() >= REPRODUCTION_CHANCE {
            return None;
        }

        let offspring_energy = self.energy * OFFSPRING_ENERGY_FRACTION;
        self.energy = offspring_energy;

        let mut child = self.clone();
        child.name = format!("{}_child", self.name);
        child.energy = offspring_energy;
        child.age = 0;
        child.size = self.size * OFFSPRING_SIZE_FRACTION;
        Some(child)
    }

    /// Color to render this entity with.
    ///
    /// Below 30% energy the base color fades toward red so starving
    /// entities stand out. Derived on demand, never stored.
    pub fn display_color(&self) -> Color {
        let fraction = self.energy_fraction();
        if fraction < LOW_ENERGY_FRACTION {
            Color::new(
                255,
                (f32::from(self.color.g) * fraction) as u8,
                (f32::from(self.color.b) * fraction) as u8,
                self.color.a,
            )
        } else {
            self.color
        }
    }

    /// Checks if the entity is alive.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// The species of this entity. Fixed at creation.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Current energy as a fraction of the maximum.
    pub fn energy_fraction(&self) -> f32 {
        if self.max_energy > 0.0 {
            self.energy / self.max_energy
        } else {
            0.0
        }
    }
}
