// SPDX-License-Identifier: MIT OR Apache-2.0

//! Target of the auth gate's redirect. Sign-up is currently paused, so the
//! page explains that and links back to where the visitor came from.

use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::top_bar::TopBar;
use crate::routing::Route;

#[derive(Debug, Default, Deserialize)]
struct RegisterQuery {
    redirect: Option<String>,
}

#[function_component(Register)]
pub fn register() -> Html {
    let redirect = use_location()
        .and_then(|location| location.query::<RegisterQuery>().ok())
        .and_then(|query| query.redirect)
        .filter(|path| is_local_path(path));

    html! {
        <div class="register-page">
            <TopBar />
            <main class="register-content">
                <h1>{ "Authentication Temporarily Paused" }</h1>
                <p>{ "New registrations are paused while we upgrade our sign-in system. All tutorials stay available in the meantime." }</p>
                if let Some(path) = redirect {
                    <a class="register-continue" href={path}>{ "Continue to your tutorial" }</a>
                }
                <Link<Route> to={Route::Home} classes={classes!("register-home")}>{ "Browse all tutorials" }</Link<Route>>
            </main>
        </div>
    }
}

/// Only same-origin paths are followed.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}
