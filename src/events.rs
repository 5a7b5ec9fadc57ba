use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::constants::*;
use crate::contact;
use crate::core::{ContactMessage, DeliveryConfig, Theme};
use crate::dom;
use crate::frame::SurfaceRenderer;

pub type Renderers = Rc<Vec<Rc<RefCell<SurfaceRenderer>>>>;

/// One window resize listener reseeds every mounted surface: particle sets
/// are discarded and recreated at the new size, never rescaled.
pub fn wire_resize(renderers: Renderers) {
    let closure = Closure::wrap(Box::new(move || {
        for renderer in renderers.iter() {
            renderer.borrow_mut().reseed();
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// The toggle control is the only writer of the shared theme value. Flipping
/// it updates the root element class, persists the preference and reseeds
/// every surface so colors come from the new palette.
pub fn wire_theme_toggle(document: &web::Document, theme: Rc<Cell<Theme>>, renderers: Renderers) {
    let document = document.clone();
    dom::add_click_listener(&document.clone(), THEME_TOGGLE_ID, move || {
        let next = theme.get().toggled();
        theme.set(next);
        dom::apply_theme_class(&document, next);
        if let Some(window) = web::window() {
            dom::store_theme_preference(&window, THEME_STORAGE_KEY, next);
        }
        for renderer in renderers.iter() {
            renderer.borrow_mut().reseed();
        }
        log::info!("[theme] switched to {}", next.as_str());
    });
}

/// Wire the contact form submit path. With no delivery credentials in the
/// build, the form is disabled up front instead of failing at send time.
pub fn wire_contact_form(document: &web::Document, config: Option<DeliveryConfig>) {
    let Some(config) = config else {
        log::warn!("[contact] delivery credentials missing; form disabled");
        dom::set_button_busy(document, CONTACT_SEND_ID, true, "Unavailable");
        return;
    };

    let document = document.clone();
    let in_flight = Rc::new(Cell::new(false));
    dom::add_submit_listener(&document.clone(), CONTACT_FORM_ID, move |ev: web::Event| {
        ev.prevent_default();
        if in_flight.get() {
            return;
        }
        in_flight.set(true);

        let message = ContactMessage {
            from_name: dom::field_value(&document, CONTACT_NAME_ID),
            from_email: dom::field_value(&document, CONTACT_EMAIL_ID),
            message: dom::field_value(&document, CONTACT_MESSAGE_ID),
        };
        dom::set_button_busy(&document, CONTACT_SEND_ID, true, "Sending\u{2026}");

        let document = document.clone();
        let in_flight = in_flight.clone();
        spawn_local(async move {
            match contact::send_message(&config, &message).await {
                Ok(()) => {
                    contact::show_toast(
                        &document,
                        "Message sent!",
                        "Thank you for reaching out. I'll get back to you soon.",
                    );
                    clear_form(&document);
                    show_sent_state(&document);
                }
                Err(e) => {
                    // Field values are left untouched so the visitor can retry.
                    log::error!("[contact] delivery failed: {e:#}");
                    contact::show_toast(
                        &document,
                        "Failed to send message.",
                        "Please try again later or use a different contact method.",
                    );
                }
            }
            dom::set_button_busy(&document, CONTACT_SEND_ID, false, "Send Message");
            in_flight.set(false);
        });
    });
}

fn clear_form(document: &web::Document) {
    dom::set_field_value(document, CONTACT_NAME_ID, "");
    dom::set_field_value(document, CONTACT_EMAIL_ID, "");
    dom::set_field_value(document, CONTACT_MESSAGE_ID, "");
}

/// Swap the form for the sent panel, swapping back after a short interval.
fn show_sent_state(document: &web::Document) {
    dom::set_style(document, CONTACT_FORM_ID, "display:none");
    dom::set_style(document, CONTACT_SENT_ID, "");

    let document = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::set_style(&document, CONTACT_SENT_ID, "display:none");
        dom::set_style(&document, CONTACT_FORM_ID, "");
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            SENT_RESET_MS,
        );
    }
    closure.forget();
}
