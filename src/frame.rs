use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::BACKDROP_HEIGHT_FACTOR;
use crate::core::{BlobField, BlobSpec, NodeField, NodeSpec, Theme};
use crate::{dom, render};

/// Which shape family a surface animates, with its parameterization.
#[derive(Clone, Copy, Debug)]
pub enum FieldSpec {
    Blobs(BlobSpec),
    Nodes(NodeSpec),
}

enum Field {
    Blobs(BlobField),
    Nodes(NodeField),
}

/// How a surface tracks its container.
#[derive(Clone, Copy, Debug)]
pub enum Sizing {
    /// Follow the canvas's parent element.
    Parent,
    /// Follow the viewport, stretched over multiple viewport heights.
    Viewport,
}

/// Owned per-surface animation state: the canvas, its 2D context, the seeded
/// field and the shared theme handle, advanced and repainted once per
/// animation frame. One instance per canvas; surfaces are never shared.
pub struct SurfaceRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    spec: FieldSpec,
    sizing: Sizing,
    theme: Rc<Cell<Theme>>,
    field: Field,
    size: Vec2,
}

impl SurfaceRenderer {
    /// Mount a renderer on the canvas with the given element id. Returns
    /// `None` when the canvas or its 2D context is unavailable; the caller
    /// simply ends up with one fewer decorative layer.
    pub fn mount(
        document: &web::Document,
        canvas_id: &str,
        spec: FieldSpec,
        sizing: Sizing,
        theme: Rc<Cell<Theme>>,
    ) -> Option<Rc<RefCell<Self>>> {
        let canvas = dom::canvas_by_id(document, canvas_id)?;
        let ctx = render::context2d(&canvas)?;
        let size = resize_surface(&canvas, sizing)?;
        let field = seed_field(&spec, size, theme.get());
        log::info!(
            "[surface] mounted #{canvas_id} {}x{} ({} particles)",
            size.x,
            size.y,
            field_len(&field)
        );
        Some(Rc::new(RefCell::new(Self {
            canvas,
            ctx,
            spec,
            sizing,
            theme,
            field,
            size,
        })))
    }

    /// Resize the backing surface to its container and fully reseed the
    /// field. Nothing of the previous particle set survives.
    pub fn reseed(&mut self) {
        if let Some(size) = resize_surface(&self.canvas, self.sizing) {
            self.size = size;
        }
        self.field = seed_field(&self.spec, self.size, self.theme.get());
    }

    /// One animation frame: advance, recompute transient connections, repaint.
    pub fn frame(&mut self) {
        render::clear(&self.ctx, self.size);
        match &mut self.field {
            Field::Blobs(field) => {
                field.advance(self.size);
                let gain = match self.spec {
                    FieldSpec::Blobs(spec) => spec.center_gain_for(self.theme.get()),
                    FieldSpec::Nodes(_) => 1.0,
                };
                render::paint_blob_field(&self.ctx, field, gain);
            }
            Field::Nodes(field) => {
                field.advance(self.size);
                let max_dist = match self.spec {
                    FieldSpec::Nodes(spec) => spec.connect_distance(self.size),
                    FieldSpec::Blobs(_) => 0.0,
                };
                let edges = field.edges(max_dist);
                render::paint_node_field(&self.ctx, field, &edges, max_dist, self.theme.get());
            }
        }
    }
}

fn resize_surface(canvas: &web::HtmlCanvasElement, sizing: Sizing) -> Option<Vec2> {
    match sizing {
        Sizing::Parent => dom::size_canvas_to_parent(canvas),
        Sizing::Viewport => dom::size_canvas_to_viewport(canvas, BACKDROP_HEIGHT_FACTOR),
    }
}

fn seed_field(spec: &FieldSpec, size: Vec2, theme: Theme) -> Field {
    let mut rng = StdRng::from_entropy();
    match spec {
        FieldSpec::Blobs(spec) => Field::Blobs(BlobField::seed(spec, size, theme, &mut rng)),
        FieldSpec::Nodes(spec) => Field::Nodes(NodeField::seed(spec, size, theme, &mut rng)),
    }
}

fn field_len(field: &Field) -> usize {
    match field {
        Field::Blobs(f) => f.blobs.len(),
        Field::Nodes(f) => f.nodes.len(),
    }
}

/// Handle to a running frame loop. `cancel` stops the loop at the next tick;
/// dropping the handle leaves the loop running for the page's lifetime.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.running.set(false);
    }
}

/// Drive a renderer from `requestAnimationFrame`, indefinitely until the
/// returned handle is cancelled. Update-then-draw happens entirely inside one
/// callback, so a frame always paints the state it just produced.
pub fn start_loop(renderer: Rc<RefCell<SurfaceRenderer>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        renderer.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }

    LoopHandle { running }
}
