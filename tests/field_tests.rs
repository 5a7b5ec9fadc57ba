// Host-side integration tests for the particle fields.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod theme {
    include!("../src/core/theme.rs");
}
mod field {
    include!("../src/core/field.rs");
}

use field::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use theme::{Palette, Theme};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

const SIZE: Vec2 = Vec2::new(1000.0, 800.0);

#[test]
fn blob_seed_positions_are_within_bounds() {
    let spec = BlobSpec::hero();
    let blobs = BlobField::seed(&spec, SIZE, Theme::Light, &mut rng(42));
    assert!(!blobs.blobs.is_empty());
    for blob in &blobs.blobs {
        assert!(blob.pos.x >= 0.0 && blob.pos.x <= SIZE.x, "x out of bounds");
        assert!(blob.pos.y >= 0.0 && blob.pos.y <= SIZE.y * 1.2, "y out of bounds");
    }
}

#[test]
fn node_seed_positions_are_within_bounds() {
    let spec = NodeSpec::molecule();
    let nodes = NodeField::seed(&spec, SIZE, Theme::Light, &mut rng(42));
    for node in &nodes.nodes {
        assert!(node.pos.x >= 0.0 && node.pos.x <= SIZE.x);
        assert!(node.pos.y >= 0.0 && node.pos.y <= SIZE.y);
    }
}

#[test]
fn blob_count_is_clamped_by_width() {
    let spec = BlobSpec::hero();
    assert_eq!(spec.count(100.0), spec.min_count);
    assert_eq!(spec.count(100_000.0), spec.max_count);
    let mid = spec.count(1500.0);
    assert!(mid >= spec.min_count && mid <= spec.max_count);
}

#[test]
fn node_count_is_clamped_by_area() {
    let spec = NodeSpec::molecule();
    assert_eq!(spec.count(Vec2::new(10.0, 10.0)), spec.min_count);
    assert_eq!(spec.count(Vec2::new(10_000.0, 10_000.0)), spec.max_count);
    let mid = spec.count(SIZE);
    assert!(mid > spec.min_count && mid < spec.max_count);
}

#[test]
fn node_velocity_magnitude_is_invariant_under_advance() {
    let spec = NodeSpec::molecule();
    // Small surface forces many boundary reflections
    let size = Vec2::new(40.0, 30.0);
    let mut field = NodeField::seed(&spec, size, Theme::Dark, &mut rng(7));
    let speeds: Vec<Vec2> = field.nodes.iter().map(|n| n.vel.abs()).collect();

    for _ in 0..2000 {
        field.advance(size);
    }
    for (node, initial) in field.nodes.iter().zip(&speeds) {
        assert_eq!(node.vel.abs(), *initial, "component magnitude changed");
    }
}

#[test]
fn node_reflects_back_into_surface() {
    let spec = NodeSpec::molecule();
    let size = Vec2::new(50.0, 50.0);
    let mut field = NodeField::seed(&spec, size, Theme::Light, &mut rng(3));
    for _ in 0..5000 {
        field.advance(size);
    }
    // A node can overshoot by at most one step past an edge before reflecting
    let max_step = spec.speed;
    for node in &field.nodes {
        assert!(node.pos.x >= -max_step && node.pos.x <= size.x + max_step);
        assert!(node.pos.y >= -max_step && node.pos.y <= size.y + max_step);
    }
}

#[test]
fn blob_wraps_to_opposite_edge_beyond_radius() {
    let blob = field::Blob {
        pos: Vec2::new(-50.5, 100.0),
        vel: Vec2::ZERO,
        radius: 50.0,
        color: theme::HERO_LIGHT[0],
        phase: 0.0,
        amplitude: 0.2,
        frequency: 1.0,
    };
    let mut f = BlobField {
        blobs: vec![blob],
        clock: 0.0,
    };
    f.advance(SIZE);
    // Left exit beyond the radius lands at the right edge plus radius padding
    assert_eq!(f.blobs[0].pos.x, SIZE.x + 50.0);
    assert_eq!(f.blobs[0].pos.y, 100.0);

    f.blobs[0].pos = Vec2::new(200.0, SIZE.y + 51.0);
    f.advance(SIZE);
    assert_eq!(f.blobs[0].pos.y, -50.0);
}

#[test]
fn blob_inside_padding_does_not_wrap() {
    let blob = field::Blob {
        pos: Vec2::new(-10.0, 100.0),
        vel: Vec2::ZERO,
        radius: 50.0,
        color: theme::HERO_LIGHT[0],
        phase: 0.0,
        amplitude: 0.2,
        frequency: 1.0,
    };
    let mut f = BlobField {
        blobs: vec![blob],
        clock: 0.0,
    };
    f.advance(SIZE);
    assert_eq!(f.blobs[0].pos.x, -10.0);
}

#[test]
fn edges_are_unique_symmetric_pairs_with_true_distances() {
    let spec = NodeSpec::molecule();
    let mut field = NodeField::seed(&spec, SIZE, Theme::Dark, &mut rng(11));
    for _ in 0..50 {
        field.advance(SIZE);
    }
    let max_dist = spec.connect_distance(SIZE);
    let edges = field.edges(max_dist);
    assert!(!edges.is_empty(), "expected some connections at this density");

    let mut seen = std::collections::HashSet::new();
    for edge in &edges {
        assert!(edge.a < edge.b, "pairs are ordered");
        assert!(seen.insert((edge.a, edge.b)), "pair recorded twice");
        assert!(edge.dist < max_dist);
        let forward = field.nodes[edge.a].pos.distance(field.nodes[edge.b].pos);
        let reverse = field.nodes[edge.b].pos.distance(field.nodes[edge.a].pos);
        assert!((edge.dist - forward).abs() < 1e-4);
        assert!((forward - reverse).abs() < 1e-4, "distance must be symmetric");
    }

    // Every in-range pair is present, none missing
    let mut expected = 0;
    for a in 0..field.nodes.len() {
        for b in (a + 1)..field.nodes.len() {
            if field.nodes[a].pos.distance(field.nodes[b].pos) < max_dist {
                expected += 1;
            }
        }
    }
    assert_eq!(edges.len(), expected);
}

#[test]
fn reseed_fully_replaces_the_particle_set() {
    let spec = BlobSpec::backdrop();
    let first = BlobField::seed(&spec, SIZE, Theme::Dark, &mut rng(1));
    let second = BlobField::seed(&spec, SIZE, Theme::Dark, &mut rng(2));
    for old in &first.blobs {
        assert!(
            !second.blobs.iter().any(|new| new.pos == old.pos),
            "a particle survived the reseed"
        );
    }
}

#[test]
fn seeding_is_deterministic_for_a_fixed_rng() {
    let spec = BlobSpec::hero();
    let a = BlobField::seed(&spec, SIZE, Theme::Light, &mut rng(99));
    let b = BlobField::seed(&spec, SIZE, Theme::Light, &mut rng(99));
    assert_eq!(a.blobs.len(), b.blobs.len());
    for (x, y) in a.blobs.iter().zip(&b.blobs) {
        assert_eq!(x.pos, y.pos);
        assert_eq!(x.vel, y.vel);
        assert_eq!(x.color, y.color);
    }
}

#[test]
fn light_theme_field_draws_only_light_palette_colors() {
    // Container 1000x800, light theme: count clamped, palette respected
    let spec = BlobSpec::hero();
    let field = BlobField::seed(&spec, SIZE, Theme::Light, &mut rng(5));
    assert!(field.blobs.len() >= spec.min_count && field.blobs.len() <= spec.max_count);
    for blob in &field.blobs {
        assert!(
            Palette::Hero.colors(Theme::Light).contains(&blob.color),
            "color not in the light palette"
        );
        assert!(
            !Palette::Hero.colors(Theme::Dark).contains(&blob.color),
            "dark palette leaked into a light seed"
        );
    }

    let nodes = NodeField::seed(&NodeSpec::molecule(), SIZE, Theme::Light, &mut rng(5));
    for node in &nodes.nodes {
        let allowed = [theme::node_primary(Theme::Light), theme::node_secondary(Theme::Light)];
        assert!(allowed.contains(&node.color));
    }
}

#[test]
fn blob_outline_stays_within_amplitude_envelope() {
    let spec = BlobSpec::hero();
    let field = BlobField::seed(&spec, SIZE, Theme::Dark, &mut rng(13));
    for blob in &field.blobs {
        for point in blob.outline(3.7) {
            let r = point.length();
            assert!(r <= blob.radius * (1.0 + blob.amplitude) + 1e-3);
            assert!(r >= blob.radius * (1.0 - blob.amplitude) - 1e-3);
        }
    }
}
