//! The simulation world and its per-tick update pipeline.
//!
//! The ecosystem owns every entity and food item exclusively. Each call to
//! [`Ecosystem::update`] runs a fixed sequence of phases:
//! - per-entity updates (energy, aging, movement, vitality)
//! - eating (herbivores forage, carnivores hunt)
//! - reproduction
//! - cleanup sweep of dead entities
//! - plant growth
//! - statistics refresh
//!
//! Entities are never removed mid-tick. The interaction phases only flag
//! them dead, and the sweep compacts the collection once all interactions
//! have been applied, so every phase scans a stable list.
//!
//! Neighbor searches are brute-force distance scans over the full
//! collections; there is no spatial index.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::entity::{Entity, EntityKind};
use super::event_log::{EventKind, EventLog};
use super::food::{DEFAULT_FOOD_ENERGY, Food};
use super::geometry::Vector2D;
use super::params::Params;

/// Herbivores eat the nearest food deposit within this distance.
const FORAGE_RADIUS: f32 = 20.0;
/// Carnivores attack the nearest live herbivore within this distance.
const HUNT_RADIUS: f32 = 12.0;
/// Most energy a carnivore can gain from a single kill.
const HUNT_ENERGY_CAP: f32 = 50.0;
/// Bonus energy on top of the victim's remaining energy.
const HUNT_ENERGY_BONUS: f32 = 30.0;
/// Energy delta that definitively kills a predation victim.
const KILL_SIGNAL: f32 = -10_000.0;
/// Probability per tick that a new plant sprouts.
const PLANT_GROWTH_CHANCE: f32 = 0.02;
/// Food items placed when the world is populated.
const INITIAL_FOOD: usize = 20;

/// Hard ceiling on the number of food items in the world.
pub const MAX_FOOD: usize = 200;

/// Aggregate counts refreshed every tick.
///
/// The per-kind and food totals are recomputed from scratch; the birth and
/// death counters are scoped to a single tick and reset at the start of
/// each update.
#[derive(Debug, Clone, Copy, Default)]
pub struct Statistics {
    /// Herbivores in the world.
    pub total_herbivores: usize,
    /// Carnivores in the world.
    pub total_carnivores: usize,
    /// Plants in the world.
    pub total_plants: usize,
    /// Food deposits in the world.
    pub total_food: usize,
    /// Entities removed by this tick's cleanup sweep.
    pub deaths_today: usize,
    /// Children born this tick.
    pub births_today: usize,
}

/// The simulation world.
///
/// Owns all entities and food; external callers interact through the
/// update pipeline, the spawn commands, and the read-only accessors.
#[derive(Debug)]
pub struct Ecosystem {
    entities: Vec<Entity>,
    food: Vec<Food>,
    width: f32,
    height: f32,
    max_entities: usize,
    tick: u64,
    time: f32,
    stats: Statistics,
    event_log: EventLog,
    rng: SmallRng,
    spawn_counter: usize,
}

impl Ecosystem {
    /// Creates an empty world from the given parameters.
    ///
    /// # Panics
    ///
    /// Panics if either world dimension is not a positive finite number.
    pub fn new(params: &Params) -> Self {
        assert!(
            params.width.is_finite() && params.width > 0.0,
            "world width must be positive, got {}",
            params.width
        );
        assert!(
            params.height.is_finite() && params.height > 0.0,
            "world height must be positive, got {}",
            params.height
        );

        let rng = match params.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        Self {
            entities: Vec::new(),
            food: Vec::new(),
            width: params.width,
            height: params.height,
            max_entities: params.max_entities,
            tick: 0,
            time: 0.0,
            stats: Statistics::default(),
            event_log: EventLog::default(),
            rng,
            spawn_counter: 0,
        }
    }

    /// Clears the world and repopulates it.
    ///
    /// Spawns the requested counts at random positions, stopping silently
    /// once the entity cap is reached, then places the starting food.
    pub fn initialize(&mut self, herbivores: usize, carnivores: usize, plants: usize) {
        self.entities.clear();
        self.food.clear();
        self.tick = 0;
        self.time = 0.0;
        self.stats = Statistics::default();
        self.event_log.clear();
        self.spawn_counter = 0;

        for _ in 0..herbivores {
            self.spawn_entity(EntityKind::Herbivore);
        }
        for _ in 0..carnivores {
            self.spawn_entity(EntityKind::Carnivore);
        }
        for _ in 0..plants {
            self.spawn_entity(EntityKind::Plant);
        }

        self.spawn_food(INITIAL_FOOD);
        self.refresh_statistics();
    }

    /// Advances the simulation by one tick.
    ///
    /// `dt` is the elapsed time in seconds since the previous tick. The
    /// phases run in the fixed order described in the module docs.
    pub fn update(&mut self, dt: f32) {
        self.stats.births_today = 0;
        self.stats.deaths_today = 0;

        for entity in &mut self.entities {
            entity.update(dt, &mut self.rng);
        }

        self.handle_eating();
        self.handle_reproduction();
        self.remove_dead();
        self.handle_plant_growth();
        self.refresh_statistics();

        self.tick += 1;
        self.time += dt;
    }

    /// Adds up to `count` food items at random positions, never letting the
    /// total exceed the food ceiling. Requests beyond it drop silently.
    pub fn spawn_food(&mut self, count: usize) {
        for _ in 0..count {
            if self.food.len() >= MAX_FOOD {
                break;
            }
            let position = self.random_position();
            self.food.push(Food::new(position, DEFAULT_FOOD_ENERGY));
        }
    }

    /// Inserts an entity directly, bypassing the population cap.
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Inserts a food item directly, bypassing the food ceiling.
    pub fn add_food(&mut self, position: Vector2D, energy_value: f32) {
        self.food.push(Food::new(position, energy_value));
    }

    /// Number of entities in the world.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of food items in the world.
    pub fn food_count(&self) -> usize {
        self.food.len()
    }

    /// The most recent statistics snapshot.
    pub fn statistics(&self) -> Statistics {
        self.stats
    }

    /// World width in world units.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// World height in world units.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The population cap enforced on internal spawn paths.
    pub fn max_entities(&self) -> usize {
        self.max_entities
    }

    /// Ticks completed since the world was last populated.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds elapsed since the world was last populated.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Read-only view of every entity, in insertion order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Read-only view of every food item.
    pub fn food(&self) -> &[Food] {
        &self.food
    }

    /// Recent notable events, newest first.
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Runs the foraging and hunting interactions, one pass over all
    /// entities in insertion order.
    fn handle_eating(&mut self) {
        for index in 0..self.entities.len() {
            if !self.entities[index].is_alive() {
                continue;
            }
            match self.entities[index].kind() {
                EntityKind::Herbivore => self.forage(index),
                EntityKind::Carnivore => self.hunt(index),
                // plants gain energy passively in their own update
                EntityKind::Plant => {}
            }
        }
    }

    /// Lets the herbivore at `index` eat the nearest food deposit in range.
    /// At most one item per tick; ties go to the earliest item in the scan.
    fn forage(&mut self, index: usize) {
        let position = self.entities[index].position;

        let mut nearest = None;
        let mut nearest_distance = f32::MAX;
        for (food_index, item) in self.food.iter().enumerate() {
            let distance = position.distance(&item.position);
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest = Some(food_index);
            }
        }

        if let Some(food_index) = nearest {
            if nearest_distance < FORAGE_RADIUS {
                let item = self.food.remove(food_index);
                self.entities[index].eat(item.energy_value);

                let description = format!(
                    "{} ate food worth {:.0} energy",
                    self.entities[index].name, item.energy_value
                );
                self.event_log.log(self.time, description, EventKind::Forage);
            }
        }
    }

    /// Lets the carnivore at `index` attack the nearest live herbivore in
    /// range. The victim is flagged dead on the spot, so a later attacker
    /// in the same pass cannot claim it again.
    fn hunt(&mut self, index: usize) {
        let position = self.entities[index].position;

        let mut nearest = None;
        let mut nearest_distance = f32::MAX;
        for (other_index, other) in self.entities.iter().enumerate() {
            if !other.is_alive() || other.kind() != EntityKind::Herbivore {
                continue;
            }
            let distance = position.distance(&other.position);
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest = Some(other_index);
            }
        }

        let Some(victim_index) = nearest else {
            return;
        };
        if nearest_distance >= HUNT_RADIUS {
            return;
        }

        let gained = (self.entities[victim_index].energy + HUNT_ENERGY_BONUS).min(HUNT_ENERGY_CAP);
        self.entities[victim_index].eat(KILL_SIGNAL);
        self.entities[victim_index].kill();
        self.entities[index].eat(gained);

        let description = format!(
            "{} took down {}",
            self.entities[index].name, self.entities[victim_index].name
        );
        self.event_log
            .log(self.time, description, EventKind::Predation);
    }

    /// Gives every qualifying entity a reproduction attempt while the
    /// population stays under the cap. Children join the world at the end
    /// of the phase and do not act this tick.
    fn handle_reproduction(&mut self) {
        let population = self.entities.len();
        let mut newborns: Vec<Entity> = Vec::new();

        for entity in &mut self.entities {
            if population + newborns.len() >= self.max_entities {
                break;
            }
            if let Some(child) = entity.reproduce(&mut self.rng) {
                let description = format!("{} gave birth to {}", entity.name, child.name);
                self.event_log.log(self.time, description, EventKind::Birth);
                newborns.push(child);
            }
        }

        self.stats.births_today += newborns.len();
        self.entities.append(&mut newborns);
    }

    /// Sweeps out every entity flagged dead and counts the removals.
    fn remove_dead(&mut self) {
        let before = self.entities.len();
        self.entities.retain(Entity::is_alive);
        let removed = before - self.entities.len();

        if removed > 0 {
            self.stats.deaths_today += removed;
            let description = format!("{} perished", removed);
            self.event_log.log(self.time, description, EventKind::Death);
        }
    }

    /// Occasionally sprouts a new plant somewhere in the world.
    fn handle_plant_growth(&mut self) {
        if self.rng.random::<f32>() < PLANT_GROWTH_CHANCE && self.entities.len() < self.max_entities
        {
            self.spawn_entity(EntityKind::Plant);
            if let Some(plant) = self.entities.last() {
                let description = format!("{} sprouted", plant.name);
                self.event_log.log(self.time, description, EventKind::Growth);
            }
        }
    }

    /// Recomputes the per-kind and food counts from scratch. The tick-scoped
    /// birth and death counters are left as the phases set them.
    fn refresh_statistics(&mut self) {
        self.stats.total_herbivores = 0;
        self.stats.total_carnivores = 0;
        self.stats.total_plants = 0;

        for entity in &self.entities {
            match entity.kind() {
                EntityKind::Herbivore => self.stats.total_herbivores += 1,
                EntityKind::Carnivore => self.stats.total_carnivores += 1,
                EntityKind::Plant => self.stats.total_plants += 1,
            }
        }

        self.stats.total_food = self.food.len();
    }

    /// Spawns one entity at a random position, unless the world is at
    /// capacity.
    fn spawn_entity(&mut self, kind: EntityKind) {
        if self.entities.len() >= self.max_entities {
            return;
        }
        let position = self.random_position();
        self.spawn_counter += 1;
        let name = format!("{}_{}", kind.label(), self.spawn_counter);
        let entity = Entity::new(kind, name, position, &mut self.rng);
        self.entities.push(entity);
    }

    fn random_position(&mut self) -> Vector2D {
        Vector2D::new(
            self.rng.random_range(0.0..self.width),
            self.rng.random_range(0.0..self.height),
        )
    }
}
