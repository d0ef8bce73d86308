#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use terrarium::simulation::geometry::{Color, Vector2D};

#[test]
fn test_vector_addition() {
    let a = Vector2D::new(1.0, 2.0);
    let b = Vector2D::new(3.0, -4.0);

    let sum = a + b;
    assert_eq!(sum.x, 4.0);
    assert_eq!(sum.y, -2.0);

    // Operands are copied, not consumed
    assert_eq!(a.x, 1.0);
    assert_eq!(b.y, -4.0);
}

#[test]
fn test_vector_scalar_multiplication() {
    let v = Vector2D::new(2.0, -3.0);

    let scaled = v * 2.5;
    assert_eq!(scaled.x, 5.0);
    assert_eq!(scaled.y, -7.5);

    let zeroed = v * 0.0;
    assert_eq!(zeroed.x, 0.0);
    assert_eq!(zeroed.y, 0.0);

    // Original vector unchanged
    assert_eq!(v.x, 2.0);
    assert_eq!(v.y, -3.0);
}

#[test]
fn test_vector_distance() {
    let a = Vector2D::new(0.0, 0.0);
    let b = Vector2D::new(3.0, 4.0);

    // Classic 3-4-5 triangle
    assert_eq!(a.distance(&b), 5.0);
    assert_eq!(b.distance(&a), 5.0);

    // Distance to self is zero
    assert_eq!(a.distance(&a), 0.0);
}

#[test]
fn test_vector_magnitude() {
    assert_eq!(Vector2D::new(3.0, 4.0).magnitude(), 5.0);
    assert_eq!(Vector2D::new(0.0, 0.0).magnitude(), 0.0);

    // Magnitude ignores sign
    assert_eq!(Vector2D::new(-3.0, -4.0).magnitude(), 5.0);

    let unit = Vector2D::new(1.0, 0.0);
    assert_eq!(unit.magnitude(), 1.0);
}

#[test]
fn test_vector_chained_operations() {
    let position = Vector2D::new(10.0, 20.0);
    let velocity = Vector2D::new(0.5, -0.5);

    // The movement formula used by entities
    let moved = position + velocity * 2.0;
    assert_eq!(moved.x, 11.0);
    assert_eq!(moved.y, 19.0);
}

#[test]
fn test_color_construction() {
    let color = Color::new(10, 20, 30, 40);
    assert_eq!(color.r, 10);
    assert_eq!(color.g, 20);
    assert_eq!(color.b, 30);
    assert_eq!(color.a, 40);
}

#[test]
fn test_species_color_constants() {
    assert_eq!(Color::HERBIVORE, Color::new(0, 0, 255, 255));
    assert_eq!(Color::CARNIVORE, Color::new(255, 0, 0, 255));
    assert_eq!(Color::PLANT, Color::new(0, 255, 0, 255));
    assert_eq!(Color::FOOD, Color::new(255, 220, 0, 255));
}
