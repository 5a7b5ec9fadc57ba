#![cfg(target_arch = "wasm32")]
//! Single-page portfolio front-end shell: three canvas particle backdrops, a
//! timed loading splash that gates page visibility, a light/dark theme handle
//! and a contact form delivering through an external email service.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use crate::constants::*;
use crate::core::{BlobSpec, DeliveryConfig, NodeSpec};
use crate::frame::{FieldSpec, Sizing, SurfaceRenderer};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Theme: resolved once here, read by every consumer, written only by the
    // toggle control.
    let theme = Rc::new(Cell::new(dom::initial_theme(&window, THEME_STORAGE_KEY)));
    dom::apply_theme_class(&document, theme.get());
    log::info!("[theme] starting {}", theme.get().as_str());

    // Decorative surfaces. A missing canvas or 2D context skips that layer
    // silently; the page content never depends on them.
    let mounts = [
        (
            BACKDROP_CANVAS_ID,
            FieldSpec::Blobs(BlobSpec::backdrop()),
            Sizing::Viewport,
        ),
        (
            LIQUID_CANVAS_ID,
            FieldSpec::Blobs(BlobSpec::hero()),
            Sizing::Parent,
        ),
        (
            MOLECULE_CANVAS_ID,
            FieldSpec::Nodes(NodeSpec::molecule()),
            Sizing::Parent,
        ),
    ];
    let mut renderers = Vec::new();
    for (canvas_id, spec, sizing) in mounts {
        if let Some(renderer) =
            SurfaceRenderer::mount(&document, canvas_id, spec, sizing, theme.clone())
        {
            renderers.push(renderer);
        }
    }
    let renderers: events::Renderers = Rc::new(renderers);

    for renderer in renderers.iter() {
        // Handles are dropped: these loops run for the page's lifetime.
        let _ = frame::start_loop(renderer.clone());
    }

    events::wire_resize(renderers.clone());
    events::wire_theme_toggle(&document, theme, renderers);
    events::wire_contact_form(&document, DeliveryConfig::from_build_env());

    overlay::run_splash(&document, || log::info!("[splash] page interactive"));

    Ok(())
}
