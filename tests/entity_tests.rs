#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;
use terrarium::simulation::entity::{Entity, EntityKind};
use terrarium::simulation::geometry::{Color, Vector2D};

fn test_rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

fn spawn(kind: EntityKind, rng: &mut SmallRng) -> Entity {
    Entity::new(kind, "subject".to_string(), Vector2D::new(100.0, 100.0), rng)
}

#[test]
fn test_species_defaults() {
    let mut rng = test_rng();

    let herbivore = spawn(EntityKind::Herbivore, &mut rng);
    assert_eq!(herbivore.energy, 80.0);
    assert_eq!(herbivore.max_energy, 150.0);
    assert_eq!(herbivore.max_age, 200);
    assert_eq!(herbivore.size, 8.0);
    assert_eq!(herbivore.color, Color::HERBIVORE);

    let carnivore = spawn(EntityKind::Carnivore, &mut rng);
    assert_eq!(carnivore.energy, 100.0);
    assert_eq!(carnivore.max_energy, 200.0);
    assert_eq!(carnivore.max_age, 150);
    assert_eq!(carnivore.size, 12.0);
    assert_eq!(carnivore.color, Color::CARNIVORE);

    let plant = spawn(EntityKind::Plant, &mut rng);
    assert_eq!(plant.energy, 50.0);
    assert_eq!(plant.max_energy, 100.0);
    assert_eq!(plant.max_age, 300);
    assert_eq!(plant.size, 6.0);
    assert_eq!(plant.color, Color::PLANT);

    for entity in [&herbivore, &carnivore, &plant] {
        assert!(entity.is_alive());
        assert_eq!(entity.age, 0);
        assert!((-1.0..1.0).contains(&entity.velocity.x));
        assert!((-1.0..1.0).contains(&entity.velocity.y));
    }
}

#[test]
fn test_mobility_per_kind() {
    assert!(EntityKind::Herbivore.is_mobile());
    assert!(EntityKind::Carnivore.is_mobile());
    assert!(!EntityKind::Plant.is_mobile());
}

#[test]
fn test_herbivore_update_drains_energy_and_moves() {
    let mut rng = test_rng();
    let mut herbivore = spawn(EntityKind::Herbivore, &mut rng);
    let start = herbivore.position;

    herbivore.update(1.0, &mut rng);

    // Base drain is 1.5; movement adds at most sqrt(2) * 0.05 on top
    assert!((78.42..=78.5).contains(&herbivore.energy));
    assert_eq!(herbivore.age, 10);
    assert!(herbivore.position.distance(&start) > 0.0);
    assert!(herbivore.is_alive());
}

#[test]
fn test_plant_gains_energy_and_stays_put() {
    let mut rng = test_rng();
    let mut plant = spawn(EntityKind::Plant, &mut rng);
    let start = plant.position;

    plant.update(1.0, &mut rng);

    // Negative base rate means a passive gain
    assert!((plant.energy - 50.2).abs() < 1e-4);
    assert_eq!(plant.position, start);
}

#[test]
fn test_aging_truncates_to_whole_ticks() {
    let mut rng = test_rng();
    let mut plant = spawn(EntityKind::Plant, &mut rng);

    // 0.016 * 10 = 0.16, truncates to zero ticks
    plant.update(0.016, &mut rng);
    assert_eq!(plant.age, 0);

    plant.update(0.25, &mut rng);
    assert_eq!(plant.age, 2);

    plant.update(0.1, &mut rng);
    assert_eq!(plant.age, 3);
}

#[test]
fn test_energy_exhaustion_kills() {
    let mut rng = test_rng();
    let mut herbivore = spawn(EntityKind::Herbivore, &mut rng);
    herbivore.energy = 0.5;

    herbivore.update(1.0, &mut rng);

    assert!(!herbivore.is_alive());
}

#[test]
fn test_old_age_kills() {
    let mut rng = test_rng();
    let mut herbivore = spawn(EntityKind::Herbivore, &mut rng);
    herbivore.age = 195;

    herbivore.update(1.0, &mut rng);

    assert_eq!(herbivore.age, 205);
    assert!(!herbivore.is_alive());
}

#[test]
fn test_age_at_limit_counts_as_dead() {
    let mut rng = test_rng();
    let mut herbivore = spawn(EntityKind::Herbivore, &mut rng);
    herbivore.age = 200;

    herbivore.update(0.0, &mut rng);

    assert!(!herbivore.is_alive());
}

#[test]
fn test_eat_clamps_at_max_energy() {
    let mut rng = test_rng();
    let mut herbivore = spawn(EntityKind::Herbivore, &mut rng);

    herbivore.eat(100.0);
    assert_eq!(herbivore.energy, 150.0);

    herbivore.eat(10.0);
    assert_eq!(herbivore.energy, 150.0);
}

#[test]
fn test_eat_negative_defers_death_to_update() {
    let mut rng = test_rng();
    let mut herbivore = spawn(EntityKind::Herbivore, &mut rng);

    herbivore.eat(-10_000.0);

    // Energy goes far below zero but the flag only flips on update
    assert!(herbivore.energy < 0.0);
    assert!(herbivore.is_alive());

    herbivore.update(0.016, &mut rng);
    assert!(!herbivore.is_alive());
}

#[test]
fn test_can_reproduce_gates() {
    let mut rng = test_rng();
    let mut herbivore = spawn(EntityKind::Herbivore, &mut rng);

    // Default energy (80) is below the 80% threshold
    herbivore.age = 25;
    assert!(!herbivore.can_reproduce());

    // Age must strictly exceed 20
    herbivore.energy = 135.0;
    herbivore.age = 20;
    assert!(!herbivore.can_reproduce());

    herbivore.age = 21;
    assert!(herbivore.can_reproduce());

    // Energy must strictly exceed the threshold
    herbivore.energy = 120.0;
    herbivore.age = 25;
    assert!(!herbivore.can_reproduce());

    herbivore.energy = 135.0;
    assert!(herbivore.can_reproduce());

    herbivore.kill();
    assert!(!herbivore.can_reproduce());
}

#[test]
fn test_reproduce_splits_energy_with_child() {
    let mut rng = test_rng();
    let mut births = 0;

    for _ in 0..1000 {
        let mut parent = spawn(EntityKind::Herbivore, &mut rng);
        parent.energy = 135.0;
        parent.age = 25;

        if let Some(child) = parent.reproduce(&mut rng) {
            births += 1;

            // Both sides end up with 60% of the pre-split energy
            assert!((child.energy - 81.0).abs() < 1e-3);
            assert_eq!(child.energy, parent.energy);

            assert_eq!(child.age, 0);
            assert_eq!(child.kind(), EntityKind::Herbivore);
            assert_eq!(child.name, "subject_child");
            assert!((child.size - 6.4).abs() < 1e-4);
            assert_eq!(child.position, parent.position);
            assert!(child.is_alive());
        }
    }

    // Wide bounds around the 25% success rate
    assert!(births > 190 && births < 310, "births = {births}");
}

#[test]
fn test_reproduce_requires_qualification() {
    let mut rng = test_rng();
    let mut herbivore = spawn(EntityKind::Herbivore, &mut rng);

    // Underfed parent never reproduces no matter the rolls
    herbivore.age = 25;
    for _ in 0..100 {
        assert!(herbivore.reproduce(&mut rng).is_none());
    }
    assert_eq!(herbivore.energy, 80.0);
}

#[test]
fn test_display_color_fades_when_starving() {
    let mut rng = test_rng();
    let mut herbivore = spawn(EntityKind::Herbivore, &mut rng);

    // 30 / 150 = 0.2, below the fade threshold
    herbivore.energy = 30.0;
    assert_eq!(herbivore.display_color(), Color::new(255, 0, 51, 255));

    // Exactly at the threshold keeps the base color
    herbivore.energy = 45.0;
    assert_eq!(herbivore.display_color(), Color::HERBIVORE);

    herbivore.energy = 80.0;
    assert_eq!(herbivore.display_color(), Color::HERBIVORE);
}

#[test]
fn test_energy_fraction() {
    let mut rng = test_rng();
    let mut herbivore = spawn(EntityKind::Herbivore, &mut rng);

    herbivore.energy = 75.0;
    assert_eq!(herbivore.energy_fraction(), 0.5);

    herbivore.max_energy = 0.0;
    assert_eq!(herbivore.energy_fraction(), 0.0);
}

#[test]
fn test_dead_entity_does_not_change() {
    let mut rng = test_rng();
    let mut herbivore = spawn(EntityKind::Herbivore, &mut rng);
    herbivore.kill();

    let energy = herbivore.energy;
    let age = herbivore.age;
    let position = herbivore.position;

    herbivore.update(1.0, &mut rng);

    assert_eq!(herbivore.energy, energy);
    assert_eq!(herbivore.age, age);
    assert_eq!(herbivore.position, position);
    assert!(!herbivore.is_alive());
}
