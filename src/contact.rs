use anyhow::{anyhow, Context, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::constants::{DELIVERY_ENDPOINT, TOAST_REGION_ID, TOAST_VISIBLE_MS};
use crate::core::{ContactMessage, DeliveryConfig, DeliveryRequest};

/// One outbound delivery call: a single JSON POST to the email service, no
/// timeout, no retry. Any thrown failure or non-2xx status collapses into one
/// error for the caller to surface.
pub async fn send_message(config: &DeliveryConfig, message: &ContactMessage) -> Result<()> {
    let body = DeliveryRequest::new(config, message)
        .to_json()
        .context("encode delivery payload")?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web::RequestMode::Cors);
    init.set_body(&JsValue::from_str(&body));

    let request = web::Request::new_with_str_and_init(DELIVERY_ENDPOINT, &init)
        .map_err(|e| anyhow!("build delivery request: {e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| anyhow!("set delivery headers: {e:?}"))?;

    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow!("delivery fetch failed: {e:?}"))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|e| anyhow!("unexpected fetch result: {e:?}"))?;

    if response.ok() {
        Ok(())
    } else {
        Err(anyhow!(
            "delivery service returned status {}",
            response.status()
        ))
    }
}

/// Append a one-shot notification card to the toast region (falling back to
/// the body) and remove it after a fixed display interval.
pub fn show_toast(document: &web::Document, title: &str, body: &str) {
    let Ok(card) = document.create_element("div") else {
        return;
    };
    card.set_class_name("toast");

    if let Ok(heading) = document.create_element("strong") {
        heading.set_text_content(Some(title));
        let _ = card.append_child(&heading);
    }
    if let Ok(text) = document.create_element("p") {
        text.set_text_content(Some(body));
        let _ = card.append_child(&text);
    }

    let region = document
        .get_element_by_id(TOAST_REGION_ID)
        .or_else(|| document.body().map(web::Element::from));
    let Some(region) = region else {
        return;
    };
    if region.append_child(&card).is_err() {
        return;
    }

    let closure = Closure::wrap(Box::new(move || {
        card.remove();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TOAST_VISIBLE_MS,
        );
    }
    closure.forget();
}
