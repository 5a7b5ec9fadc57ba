use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

use super::theme::{node_primary, node_secondary, Palette, Rgba, Theme};

/// Segments in a blob's outline polygon.
pub const OUTLINE_POINTS: usize = 12;
/// Angular lobes of the outline wobble.
pub const WOBBLE_LOBES: f32 = 3.0;
/// Shared wobble clock increment per frame.
pub const PHASE_STEP: f32 = 0.01;

// Blob wobble sampling ranges
pub const BLOB_AMPLITUDE_MIN: f32 = 0.2;
pub const BLOB_AMPLITUDE_SPAN: f32 = 0.3;
pub const BLOB_FREQUENCY_MIN: f32 = 0.75;
pub const BLOB_FREQUENCY_SPAN: f32 = 0.5;

// Molecule node sampling ranges
pub const NODE_RADIUS_MIN: f32 = 1.5;
pub const NODE_RADIUS_SPAN: f32 = 2.0;

/// One soft gradient blob.
///
/// Velocity, radius, color and the wobble constants (`phase`, `amplitude`,
/// `frequency`) are fixed at creation; only `pos` mutates between reseeds.
#[derive(Clone, Debug)]
pub struct Blob {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
    pub phase: f32,
    pub amplitude: f32,
    pub frequency: f32,
}

impl Blob {
    /// Wobbled outline radius at `angle`, driven by the field's shared clock.
    #[inline]
    pub fn outline_radius(&self, angle: f32, clock: f32) -> f32 {
        let osc = (WOBBLE_LOBES * angle + clock * self.frequency + self.phase).sin();
        self.radius * (1.0 + self.amplitude * osc)
    }

    /// Closed outline polygon in blob-local coordinates (last point repeats the first).
    pub fn outline(&self, clock: f32) -> SmallVec<[Vec2; OUTLINE_POINTS + 1]> {
        let mut points = SmallVec::new();
        for i in 0..=OUTLINE_POINTS {
            let angle = (i as f32 / OUTLINE_POINTS as f32) * std::f32::consts::TAU;
            let r = self.outline_radius(angle, clock);
            points.push(Vec2::new(angle.cos() * r, angle.sin() * r));
        }
        points
    }
}

/// One molecule node. Radius and color are fixed at creation.
#[derive(Clone, Debug)]
pub struct Node {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

/// Undirected connection between two nodes currently within range.
///
/// Invariant: `a < b`, so every pair appears at most once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub dist: f32,
}

/// Per-call-site parameterization of a blob field.
///
/// Fields:
/// - `palette`: which theme-keyed color table to sample
/// - `width_per_blob`: one blob per this many surface pixels of width
/// - `min_count`/`max_count`: clamp applied to the computed count
/// - `radius_frac`: blob radius range as fractions of surface width
/// - `speed`: full spread of each velocity component (sampled centered on zero)
/// - `center_gain`: radial-gradient center alpha multiplier (light, dark)
/// - `stratify_y`: distribute initial y positions down the surface instead of
///   sampling them uniformly (used by the page backdrop so tall surfaces are
///   covered top to bottom)
#[derive(Clone, Copy, Debug)]
pub struct BlobSpec {
    pub palette: Palette,
    pub width_per_blob: f32,
    pub min_count: usize,
    pub max_count: usize,
    pub radius_frac: (f32, f32),
    pub speed: Vec2,
    pub center_gain: (f32, f32),
    pub stratify_y: bool,
}

impl BlobSpec {
    /// Section accent field: few large slow blobs over the hero area.
    pub fn hero() -> Self {
        Self {
            palette: Palette::Hero,
            width_per_blob: 300.0,
            min_count: 3,
            max_count: 8,
            radius_frac: (1.0 / 6.0, 0.5),
            speed: Vec2::new(0.3, 0.3),
            center_gain: (2.0, 2.0),
            stratify_y: false,
        }
    }

    /// Page-wide drift field: more blobs, slow vertical drift, brighter centers
    /// in dark theme.
    pub fn backdrop() -> Self {
        Self {
            palette: Palette::Backdrop,
            width_per_blob: 250.0,
            min_count: 5,
            max_count: 12,
            radius_frac: (0.125, 0.375),
            speed: Vec2::new(0.2, 0.05),
            center_gain: (2.0, 3.0),
            stratify_y: true,
        }
    }

    pub fn count(&self, width: f32) -> usize {
        ((width / self.width_per_blob) as usize).clamp(self.min_count, self.max_count)
    }

    pub fn center_gain_for(&self, theme: Theme) -> f32 {
        if theme.is_dark() {
            self.center_gain.1
        } else {
            self.center_gain.0
        }
    }
}

/// Parameterization of a molecule node field.
///
/// Fields:
/// - `area_per_node`: one node per this many surface pixels of area
/// - `min_count`/`max_count`: clamp applied to the computed count
/// - `connect_frac`: connection threshold as a fraction of surface width
/// - `speed`: full spread of each velocity component
/// - `secondary_weight`: probability a node takes the secondary color
#[derive(Clone, Copy, Debug)]
pub struct NodeSpec {
    pub area_per_node: f32,
    pub min_count: usize,
    pub max_count: usize,
    pub connect_frac: f32,
    pub speed: f32,
    pub secondary_weight: f32,
}

impl NodeSpec {
    pub fn molecule() -> Self {
        Self {
            area_per_node: 12_000.0,
            min_count: 24,
            max_count: 160,
            connect_frac: 0.08,
            speed: 0.4,
            secondary_weight: 0.7,
        }
    }

    pub fn count(&self, size: Vec2) -> usize {
        (((size.x * size.y) / self.area_per_node) as usize).clamp(self.min_count, self.max_count)
    }

    #[inline]
    pub fn connect_distance(&self, size: Vec2) -> f32 {
        size.x * self.connect_frac
    }
}

/// A seeded blob collection plus the shared wobble clock.
#[derive(Clone, Debug, Default)]
pub struct BlobField {
    pub blobs: Vec<Blob>,
    pub clock: f32,
}

impl BlobField {
    /// Discard-and-recreate seeding. Deterministic given a fixed `rng`.
    pub fn seed(spec: &BlobSpec, size: Vec2, theme: Theme, rng: &mut impl Rng) -> Self {
        let count = spec.count(size.x);
        let colors = spec.palette.colors(theme);
        let (r_min, r_max) = spec.radius_frac;
        let blobs = (0..count)
            .map(|i| {
                let y = if spec.stratify_y {
                    (i as f32 / count as f32) * size.y * 1.2
                } else {
                    rng.gen::<f32>() * size.y
                };
                Blob {
                    pos: Vec2::new(rng.gen::<f32>() * size.x, y),
                    vel: Vec2::new(
                        (rng.gen::<f32>() - 0.5) * spec.speed.x,
                        (rng.gen::<f32>() - 0.5) * spec.speed.y,
                    ),
                    radius: size.x * (r_min + rng.gen::<f32>() * (r_max - r_min)),
                    color: colors[rng.gen_range(0..colors.len())],
                    phase: rng.gen::<f32>() * std::f32::consts::TAU,
                    amplitude: BLOB_AMPLITUDE_MIN + rng.gen::<f32>() * BLOB_AMPLITUDE_SPAN,
                    frequency: BLOB_FREQUENCY_MIN + rng.gen::<f32>() * BLOB_FREQUENCY_SPAN,
                }
            })
            .collect();
        Self { blobs, clock: 0.0 }
    }

    /// Advance every blob by its velocity and tick the wobble clock. A blob
    /// that leaves the surface by more than its radius wraps to the opposite
    /// edge; velocities never change.
    pub fn advance(&mut self, size: Vec2) {
        self.clock += PHASE_STEP;
        for blob in &mut self.blobs {
            blob.pos += blob.vel;
            blob.pos.x = wrap(blob.pos.x, size.x, blob.radius);
            blob.pos.y = wrap(blob.pos.y, size.y, blob.radius);
        }
    }
}

/// Toroidal wrap with `pad` of slack beyond each edge.
#[inline]
fn wrap(v: f32, extent: f32, pad: f32) -> f32 {
    if v < -pad {
        extent + pad
    } else if v > extent + pad {
        -pad
    } else {
        v
    }
}

/// A seeded molecule node collection.
#[derive(Clone, Debug, Default)]
pub struct NodeField {
    pub nodes: Vec<Node>,
}

impl NodeField {
    /// Discard-and-recreate seeding. Deterministic given a fixed `rng`.
    pub fn seed(spec: &NodeSpec, size: Vec2, theme: Theme, rng: &mut impl Rng) -> Self {
        let count = spec.count(size);
        let nodes = (0..count)
            .map(|_| {
                let color = if rng.gen::<f32>() > spec.secondary_weight {
                    node_primary(theme)
                } else {
                    node_secondary(theme)
                };
                Node {
                    pos: Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y),
                    vel: Vec2::new(
                        (rng.gen::<f32>() - 0.5) * spec.speed,
                        (rng.gen::<f32>() - 0.5) * spec.speed,
                    ),
                    radius: NODE_RADIUS_MIN + rng.gen::<f32>() * NODE_RADIUS_SPAN,
                    color,
                }
            })
            .collect();
        Self { nodes }
    }

    /// Advance every node by its velocity, reflecting at the surface edges.
    /// Only the sign of a velocity component ever changes.
    pub fn advance(&mut self, size: Vec2) {
        for node in &mut self.nodes {
            node.pos += node.vel;
            if node.pos.x < 0.0 {
                node.vel.x = node.vel.x.abs();
            } else if node.pos.x > size.x {
                node.vel.x = -node.vel.x.abs();
            }
            if node.pos.y < 0.0 {
                node.vel.y = node.vel.y.abs();
            } else if node.pos.y > size.y {
                node.vel.y = -node.vel.y.abs();
            }
        }
    }

    /// Every unordered pair within `max_dist`, recomputed from scratch each
    /// frame. Quadratic, which is fine at the node counts in use.
    pub fn edges(&self, max_dist: f32) -> Vec<Edge> {
        let mut edges = Vec::new();
        for a in 0..self.nodes.len() {
            for b in (a + 1)..self.nodes.len() {
                let dist = self.nodes[a].pos.distance(self.nodes[b].pos);
                if dist < max_dist {
                    edges.push(Edge { a, b, dist });
                }
            }
        }
        edges
    }
}
