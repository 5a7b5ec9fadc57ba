use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::{LoadingGate, LOAD_TICK_MS};
use crate::dom;

/// Run the loading splash: scroll is locked and the page root hidden while a
/// fixed-interval pump advances the gate and paints the progress bar. When the
/// gate signals (exactly once), the splash is dismissed, scrolling returns and
/// `on_complete` fires.
pub fn run_splash(document: &web::Document, on_complete: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };

    dom::set_body_scroll_locked(document, true);
    dom::set_style(document, PAGE_ID, "visibility:hidden");
    paint_progress(document, 0);

    let gate = Rc::new(RefCell::new(LoadingGate::default()));
    let interval_handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let mut complete = Some(on_complete);

    let document_tick = document.clone();
    let gate_tick = gate.clone();
    let handle_tick = interval_handle.clone();
    let closure = Closure::wrap(Box::new(move || {
        let fired = gate_tick.borrow_mut().advance(LOAD_TICK_MS);
        paint_progress(&document_tick, gate_tick.borrow().progress());
        if fired {
            if let Some(w) = web::window() {
                if let Some(handle) = interval_take(&handle_tick) {
                    w.clear_interval_with_handle(handle);
                }
            }
            dismiss(&document_tick);
            if let Some(f) = complete.take() {
                f();
            }
        }
    }) as Box<dyn FnMut()>);

    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        LOAD_TICK_MS as i32,
    ) {
        Ok(handle) => {
            *interval_handle.borrow_mut() = Some(handle);
            closure.forget();
        }
        Err(e) => {
            // No timer available: reveal the page immediately rather than gate it forever.
            log::error!("splash interval error: {:?}", e);
            dismiss(document);
        }
    }
}

fn interval_take(handle: &Rc<RefCell<Option<i32>>>) -> Option<i32> {
    handle.borrow_mut().take()
}

fn paint_progress(document: &web::Document, percent: u32) {
    dom::set_style(document, LOAD_BAR_ID, &format!("width:{percent}%"));
    dom::set_text(document, LOAD_PERCENT_ID, &format!("{percent}%"));
}

fn dismiss(document: &web::Document) {
    dom::set_style(document, SPLASH_ID, "display:none");
    dom::set_style(document, PAGE_ID, "");
    dom::set_body_scroll_locked(document, false);
    log::info!("[splash] complete, page revealed");
}
