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

//! Keeps the active section and the URL fragment in sync.
//!
//! Three things can move the page: in-app controls (sidebar, pager) calling
//! [`HashSynchronizer::set_active_section`], the browser reporting a
//! `hashchange` (back/forward or a hand-edited URL), and the initial load.
//!
//! In-app navigation writes the fragment itself, and depending on how the
//! host applies that write the browser may answer with a `hashchange` of its
//! own. Every write that will produce such an event is recorded as an
//! expected echo tagged with a monotonically increasing sequence number. An
//! incoming event that matches an outstanding echo is swallowed together with
//! any older echoes; everything else is external navigation. No timers are
//! involved, so two clicks in quick succession simply queue two echoes.

use std::collections::VecDeque;
use std::rc::Rc;

use crate::registry::{Resolved, SectionRegistry};

/// Which section (and optionally subsection) is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Always a registered section id.
    pub active_section: String,
    /// When set, a subsection whose parent is `active_section`.
    pub active_subsection: Option<String>,
}

impl NavigationState {
    pub fn at_default(registry: &SectionRegistry) -> Self {
        Self {
            active_section: registry.default_section().id.clone(),
            active_subsection: None,
        }
    }

    /// The id the user actually navigated to.
    pub fn target_id(&self) -> &str {
        self.active_subsection
            .as_deref()
            .unwrap_or(&self.active_section)
    }
}

/// Where to scroll once the new content has rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Jump to the top of the page without animation.
    Top,
    /// Smoothly bring the element with `id` into view, trying `fallback`
    /// when that element is not in the document.
    Anchor { id: String, fallback: Option<String> },
}

/// How a host applied a fragment write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentWrite {
    /// The URL already had that fragment; nothing happened.
    Unchanged,
    /// The URL changed but no `hashchange` event will be dispatched.
    Silent,
    /// The URL changed and a `hashchange` event will follow.
    EventPending,
}

/// Access to the page URL's fragment.
///
/// Writes must not create history entries.
pub trait FragmentHost {
    /// Current fragment without the leading `#`, empty when there is none.
    fn fragment(&self) -> String;

    fn replace_fragment(&mut self, fragment: &str) -> FragmentWrite;

    /// Drop the fragment from the URL entirely.
    fn clear_fragment(&mut self) -> FragmentWrite;
}

/// Outcome of [`HashSynchronizer::set_active_section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Section,
    Subsection,
    /// The id was not navigable; the default section is shown instead.
    Fallback,
}

/// Outcome of [`HashSynchronizer::on_hash_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashChange {
    /// The event was caused by our own fragment write.
    Echo,
    /// The fragment named a section or subsection and the state followed it.
    Navigated,
    /// The fragment was empty, a group id, or unknown; back to the default.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingEcho {
    sequence: u64,
    fragment: String,
}

/// Navigation state machine for one mounted tutorial page.
#[derive(Debug)]
pub struct HashSynchronizer {
    registry: Rc<SectionRegistry>,
    state: NavigationState,
    sequence: u64,
    revision: u64,
    echoes: VecDeque<PendingEcho>,
    scroll: Option<ScrollRequest>,
}

impl HashSynchronizer {
    pub fn new(registry: Rc<SectionRegistry>) -> Self {
        let state = NavigationState::at_default(&registry);
        Self {
            registry,
            state,
            sequence: 0,
            revision: 0,
            echoes: VecDeque::new(),
            scroll: None,
        }
    }

    pub fn registry(&self) -> &Rc<SectionRegistry> {
        &self.registry
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Bumped on every state transition, including ones that land on the
    /// same section, so renderers can tell that a new scroll may be due.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of in-app navigations so far.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn pending_echoes(&self) -> usize {
        self.echoes.len()
    }

    /// Seed the state from the URL the page was loaded with.
    pub fn mount(&mut self, host: &mut impl FragmentHost) -> &NavigationState {
        let fragment = host.fragment();
        if fragment.is_empty() {
            self.commit(NavigationState::at_default(&self.registry), Some(ScrollRequest::Top));
        } else {
            self.apply_external(&fragment, host);
        }
        &self.state
    }

    /// Navigate from an in-app control.
    pub fn set_active_section(&mut self, id: &str, host: &mut impl FragmentHost) -> Landing {
        self.sequence += 1;

        let (state, fragment, landing) = match self.registry.resolve(id) {
            Resolved::Section(section) => (
                NavigationState {
                    active_section: section.id.clone(),
                    active_subsection: None,
                },
                Some(section.id.clone()),
                Landing::Section,
            ),
            Resolved::Subsection(subsection) => (
                NavigationState {
                    active_section: subsection.parent.clone(),
                    active_subsection: Some(subsection.id.clone()),
                },
                Some(subsection.id.clone()),
                Landing::Subsection,
            ),
            Resolved::Group(_) | Resolved::Unknown => {
                log::warn!(
                    "Invalid section id: {id}, defaulting to {}",
                    self.registry.default_section().id
                );
                (
                    NavigationState::at_default(&self.registry),
                    None,
                    Landing::Fallback,
                )
            }
        };

        self.write_fragment(fragment.as_deref(), host);
        let scroll = anchor_for(&state);
        self.commit(state, Some(scroll));
        landing
    }

    /// Handle a native `hashchange`. `fragment` is the new URL's fragment
    /// without the leading `#`.
    pub fn on_hash_change(&mut self, fragment: &str, host: &mut impl FragmentHost) -> HashChange {
        if let Some(pos) = self.echoes.iter().position(|e| e.fragment == fragment) {
            if let Some(echo) = self.echoes.drain(..=pos).last() {
                log::debug!("Ignoring hashchange echo #{} for {:?}", echo.sequence, echo.fragment);
            }
            return HashChange::Echo;
        }
        self.apply_external(fragment, host)
    }

    /// Consume the pending scroll request, if any.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.scroll.take()
    }

    /// Like [`take_scroll_request`](Self::take_scroll_request), but only
    /// for a renderer showing `revision`. A stale revision leaves the
    /// request in place for the render that catches up.
    pub fn take_scroll_request_at(&mut self, revision: u64) -> Option<ScrollRequest> {
        if revision == self.revision {
            self.scroll.take()
        } else {
            None
        }
    }

    fn apply_external(&mut self, fragment: &str, host: &mut impl FragmentHost) -> HashChange {
        let target = match self.registry.resolve(fragment) {
            Resolved::Section(section) => Some(NavigationState {
                active_section: section.id.clone(),
                active_subsection: None,
            }),
            Resolved::Subsection(subsection) => Some(NavigationState {
                active_section: subsection.parent.clone(),
                active_subsection: Some(subsection.id.clone()),
            }),
            Resolved::Group(_) => None,
            Resolved::Unknown => {
                if !fragment.is_empty() {
                    log::warn!("Unknown section in URL: #{fragment}");
                }
                None
            }
        };

        match target {
            Some(state) => {
                let scroll = anchor_for(&state);
                self.commit(state, Some(scroll));
                HashChange::Navigated
            }
            None => {
                if !fragment.is_empty() {
                    self.write_fragment(None, host);
                }
                self.commit(NavigationState::at_default(&self.registry), None);
                HashChange::Reset
            }
        }
    }

    fn write_fragment(&mut self, fragment: Option<&str>, host: &mut impl FragmentHost) {
        let write = match fragment {
            Some(fragment) => host.replace_fragment(fragment),
            None => host.clear_fragment(),
        };
        if write == FragmentWrite::EventPending {
            self.echoes.push_back(PendingEcho {
                sequence: self.sequence,
                fragment: fragment.unwrap_or_default().to_string(),
            });
        }
    }

    fn commit(&mut self, state: NavigationState, scroll: Option<ScrollRequest>) {
        self.state = state;
        self.revision += 1;
        if scroll.is_some() {
            self.scroll = scroll;
        }
    }
}

fn anchor_for(state: &NavigationState) -> ScrollRequest {
    match &state.active_subsection {
        Some(subsection) => ScrollRequest::Anchor {
            id: subsection.clone(),
            fallback: Some(state.active_section.clone()),
        },
        None => ScrollRequest::Anchor {
            id: state.active_section.clone(),
            fallback: None,
        },
    }
}

/// Fragment part of a full URL, without the `#`.
pub fn fragment_of(url: &str) -> &str {
    url.split_once('#').map(|(_, fragment)| fragment).unwrap_or("")
}
