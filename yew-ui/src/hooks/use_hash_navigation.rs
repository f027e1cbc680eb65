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

//! Binds a [`HashSynchronizer`] to the browser.
//!
//! The synchronizer lives in a `use_mut_ref` for the lifetime of the page.
//! Every transition publishes a `(state, revision)` snapshot through
//! `use_state`, which re-renders the page; the revision keys the scroll
//! effect so that clicking the active section again still scrolls.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use tutorial_types::navigation::{fragment_of, HashChange, ScrollRequest};
use tutorial_types::{HashSynchronizer, NavigationState, SectionRegistry};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HashChangeEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::constants::SCROLL_SETTLE_MS;
use crate::context::BrowserLocation;

#[derive(Clone, PartialEq)]
pub struct HashNavigation {
    pub state: NavigationState,
    /// Navigate to a section or subsection id from an in-app control.
    pub set_active_section: Callback<String>,
}

#[hook]
pub fn use_hash_navigation(registry: Rc<SectionRegistry>) -> HashNavigation {
    let sync = use_mut_ref(|| HashSynchronizer::new(registry));
    let snapshot = use_state(|| {
        let sync = sync.borrow();
        (sync.state().clone(), sync.revision())
    });

    // Seed from the initial URL and follow back/forward navigation.
    {
        let sync = sync.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let publish = {
                let sync = sync.clone();
                move || {
                    let sync = sync.borrow();
                    snapshot.set((sync.state().clone(), sync.revision()));
                }
            };

            sync.borrow_mut().mount(&mut BrowserLocation);
            publish();

            let listener = {
                let publish = publish.clone();
                Closure::wrap(Box::new(move |event: HashChangeEvent| {
                    let new_url = event.new_url();
                    let change = sync
                        .borrow_mut()
                        .on_hash_change(fragment_of(&new_url), &mut BrowserLocation);
                    if change != HashChange::Echo {
                        publish();
                    }
                }) as Box<dyn FnMut(HashChangeEvent)>)
            };

            let window = gloo_utils::window();
            if let Err(e) = window
                .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
            {
                log::error!("Failed to listen for hashchange: {e:?}");
            }

            move || {
                let _ = window.remove_event_listener_with_callback(
                    "hashchange",
                    listener.as_ref().unchecked_ref(),
                );
                drop(listener);
            }
        });
    }

    {
        let sync = sync.clone();
        use_effect_with(snapshot.1, move |revision| {
            // Effects of one render run together, so the mount effect may
            // already have moved past the revision this render shows.
            let request = sync.borrow_mut().take_scroll_request_at(*revision);
            let timeout = request
                .map(|request| Timeout::new(SCROLL_SETTLE_MS, move || scroll_to(&request)));
            move || drop(timeout)
        });
    }

    let set_active_section = {
        let snapshot = snapshot.clone();
        Callback::from(move |id: String| {
            let mut sync = sync.borrow_mut();
            sync.set_active_section(&id, &mut BrowserLocation);
            snapshot.set((sync.state().clone(), sync.revision()));
        })
    };

    HashNavigation {
        state: snapshot.0.clone(),
        set_active_section,
    }
}

fn scroll_to(request: &ScrollRequest) {
    let window = gloo_utils::window();
    match request {
        ScrollRequest::Top => window.scroll_to_with_x_and_y(0.0, 0.0),
        ScrollRequest::Anchor { id, fallback } => {
            let document = gloo_utils::document();
            let element = document.get_element_by_id(id).or_else(|| {
                fallback
                    .as_deref()
                    .and_then(|fallback| document.get_element_by_id(fallback))
            });
            match element {
                Some(element) => {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
                None => log::debug!("No element #{id} to scroll to"),
            }
        }
    }
}
