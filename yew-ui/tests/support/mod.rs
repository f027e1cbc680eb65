// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for tutorials-ui component tests.
//
// Provides mount/cleanup helpers, runtime config injection, and URL/storage
// reset helpers so that individual test files stay focused on assertions
// rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use tutorials_ui::constants::SCROLL_SETTLE_MS;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use yew::platform::time::sleep;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Like [`create_mount_point`], padded well past the viewport on both sides
/// so that any section can be scrolled to the top of the window.
pub fn create_scrollable_mount_point() -> web_sys::Element {
    let div = create_mount_point();
    div.set_attribute("style", "padding-top: 2000px; padding-bottom: 4000px")
        .unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Let effects, state updates and `hashchange` events run.
pub async fn settle() {
    sleep(Duration::from_millis(50)).await;
}

/// Wait out the scroll timer plus a smooth scroll.
pub async fn settle_scroll() {
    sleep(Duration::from_millis(u64::from(SCROLL_SETTLE_MS) + 800)).await;
}

pub fn scroll_y() -> f64 {
    gloo_utils::window().scroll_y().unwrap()
}

pub fn reset_scroll() {
    gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
}

/// Distance from the top of the viewport to the element with `id`.
pub fn viewport_top(id: &str) -> f64 {
    gloo_utils::document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("no element #{id}"))
        .get_bounding_client_rect()
        .top()
}

pub fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

/// Id of the section the content switch is showing.
pub fn rendered_section(mount: &web_sys::Element) -> Option<String> {
    mount
        .query_selector(".tutorial-section")
        .unwrap()
        .map(|section| section.id())
}

// ---------------------------------------------------------------------------
// URL and storage
// ---------------------------------------------------------------------------

/// Replace the current URL's fragment without firing `hashchange`.
pub fn set_fragment(fragment: &str) {
    let window = gloo_utils::window();
    let location = window.location();
    let mut url = format!(
        "{}{}",
        location.pathname().unwrap(),
        location.search().unwrap()
    );
    if !fragment.is_empty() {
        url.push('#');
        url.push_str(fragment);
    }
    window
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        .unwrap();
}

pub fn current_fragment() -> String {
    gloo_utils::window()
        .location()
        .hash()
        .unwrap()
        .trim_start_matches('#')
        .to_string()
}

pub fn current_path() -> String {
    gloo_utils::window().location().pathname().unwrap()
}

pub fn local_storage() -> web_sys::Storage {
    gloo_utils::window().local_storage().unwrap().unwrap()
}

pub fn clear_storage() {
    local_storage().clear().unwrap();
}

/// Unsigned JWT-shaped token whose payload expires `seconds` from now.
pub fn token_expiring_in(seconds: i64) -> String {
    let exp = (js_sys::Date::now() / 1000.0) as i64 + seconds;
    let payload = gloo_utils::window()
        .btoa(&format!(r#"{{"sub":"student@example.com","exp":{exp}}}"#))
        .unwrap();
    format!("eyJhbGciOiJIUzI1NiJ9.{payload}.signature")
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` object. Call this before rendering any
/// component that reads the runtime config (e.g. `AuthGate`, `AppRoot`).
pub fn inject_app_config(auth_enabled: bool) {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("authEnabled", &auth_enabled.to_string().into());
    set("allowRegisteredVisitors", &"true".into());
    set("registerPath", &"/register".into());

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
