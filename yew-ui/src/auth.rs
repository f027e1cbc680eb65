// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication gate
//!
//! Wraps gated tutorial pages. The check runs once after mount; until it has
//! run nothing of the page is rendered.

use tutorial_types::auth::{check_access, AuthPolicy, GateDecision, GateState};
use yew::prelude::*;

use crate::components::config_error::ConfigError;
use crate::constants::auth_policy;
use crate::context::{current_path, now_ms, BrowserStorage};

#[derive(Properties, PartialEq)]
pub struct AuthGateProps {
    #[prop_or_default]
    pub children: Html,
    /// Receives the registration URL instead of the browser navigating to
    /// it.
    #[prop_or_default]
    pub on_redirect: Option<Callback<String>>,
}

#[function_component(AuthGate)]
pub fn auth_gate(props: &AuthGateProps) -> Html {
    let gate = use_state(GateState::default);
    let policy = use_memo((), |_| auth_policy());

    {
        let gate = gate.clone();
        let policy = policy.clone();
        let on_redirect = props.on_redirect.clone();
        use_effect_with((), move |_| {
            if let Ok(policy) = &*policy {
                let decision = run_check(policy);
                if let GateDecision::Redirect { location, .. } = &decision {
                    match &on_redirect {
                        Some(on_redirect) => on_redirect.emit(location.clone()),
                        None => redirect_to(location),
                    }
                }
                gate.set(decision.state());
            }
            || ()
        });
    }

    if let Err(e) = &*policy {
        log::error!("Auth gate cannot read its configuration: {e}");
        return html! { <ConfigError message={e.clone()} /> };
    }

    match *gate {
        GateState::Unchecked => html! {
            <div class="auth-gate-placeholder">
                <p>{ "Loading..." }</p>
            </div>
        },
        GateState::Redirecting => html! {
            <div class="auth-gate-placeholder">
                <p>{ "Redirecting..." }</p>
            </div>
        },
        GateState::Authenticated => props.children.clone(),
    }
}

fn run_check(policy: &AuthPolicy) -> GateDecision {
    let path = current_path();
    let decision = check_access(policy, &mut BrowserStorage::local(), &path, now_ms());
    log::debug!("Access check for {path}: {decision:?}");
    decision
}

fn redirect_to(location: &str) {
    if let Err(e) = gloo_utils::window().location().replace(location) {
        log::error!("Failed to redirect to {location}: {e:?}");
    }
}
