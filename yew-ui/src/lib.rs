/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! tutorials-ui library root.
//!
//! Re-exports public modules so that integration tests (under `tests/`) can
//! import components. The binary entry-point lives in `main.rs`.

pub mod auth;
pub mod components;
pub mod constants;
pub mod context;
pub mod courses;
pub mod hooks;
pub mod pages;
pub mod routing;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::config_error::ConfigError;
use crate::constants::app_config;
use crate::routing::{switch, Route};

/// App root: validates the runtime config, then routes.
#[function_component(AppRoot)]
pub fn app_root() -> Html {
    if let Err(e) = app_config() {
        log::error!("{e}");
        return html! { <ConfigError message={e} /> };
    }

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
