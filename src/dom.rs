use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::Theme;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_submit_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(
            Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>,
        );
        let _ = el.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Size a canvas's backing store to its parent element. Returns the new size,
/// or `None` when the canvas has no parent to track.
pub fn size_canvas_to_parent(canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let parent: web::HtmlElement = canvas.parent_element()?.dyn_into().ok()?;
    let w = (parent.offset_width().max(1)) as u32;
    let h = (parent.offset_height().max(1)) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    Some(Vec2::new(w as f32, h as f32))
}

/// Size a canvas to the viewport width and `height_factor` viewport heights
/// (the page backdrop scrolls with content taller than one screen).
pub fn size_canvas_to_viewport(canvas: &web::HtmlCanvasElement, height_factor: f64) -> Option<Vec2> {
    let window = web::window()?;
    let w = window.inner_width().ok()?.as_f64()?.max(1.0) as u32;
    let h = (window.inner_height().ok()?.as_f64()? * height_factor).max(1.0) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    Some(Vec2::new(w as f32, h as f32))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_style(document: &web::Document, element_id: &str, css: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.set_attribute("style", css);
    }
}

/// Read the current value of a text input or textarea; empty when missing.
pub fn field_value(document: &web::Document, element_id: &str) -> String {
    let Some(el) = document.get_element_by_id(element_id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn set_field_value(document: &web::Document, element_id: &str, value: &str) {
    let Some(el) = document.get_element_by_id(element_id) else {
        return;
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

pub fn set_button_busy(document: &web::Document, element_id: &str, busy: bool, label: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Some(button) = el.dyn_ref::<web::HtmlButtonElement>() {
            button.set_disabled(busy);
            button.set_text_content(Some(label));
        }
    }
}

/// Lock or unlock page scrolling while the splash is up.
pub fn set_body_scroll_locked(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

/// Reflect the theme on the root element so stylesheet rules follow.
pub fn apply_theme_class(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
    }
}

pub fn store_theme_preference(window: &web::Window, key: &str, theme: Theme) {
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(key, theme.as_str());
    }
}

/// Stored preference first, then the OS color-scheme query, else light.
pub fn initial_theme(window: &web::Window, key: &str) -> Theme {
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(saved)) = storage.get_item(key) {
            return Theme::from_preference(&saved);
        }
    }
    match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) if query.matches() => Theme::Dark,
        _ => Theme::Light,
    }
}
