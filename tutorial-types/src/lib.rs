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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Framework-independent building blocks for the tutorials site.
//!
//! Everything in here is plain Rust so it can be unit tested natively; the
//! browser bindings (location, storage, DOM scrolling) live in the UI crate
//! and plug in through the [`navigation::FragmentHost`] and
//! [`auth::TokenStorage`] traits.

pub mod auth;
pub mod content;
pub mod navigation;
pub mod page;
pub mod pager;
pub mod registry;
pub mod slug;

pub use auth::{check_access, validate_token, AuthPolicy, GateDecision, GateState, TokenError};
pub use content::{content_for, ContentBlock, ContentStore, ContentView};
pub use navigation::{FragmentHost, FragmentWrite, HashSynchronizer, NavigationState};
pub use page::{PageError, TutorialPage};
pub use pager::{Pager, PagerLink};
pub use registry::{RegistryError, SectionRegistry};

/// Interpret a configuration string as a boolean flag.
///
/// `"true"` and `"1"` (any case) are truthy; anything else, including a
/// missing value, is false.
pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.trim().to_lowercase())
    } else {
        false
    }
}
