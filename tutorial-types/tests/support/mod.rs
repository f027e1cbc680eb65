// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for tutorial-types integration tests.
//
// Provides an in-memory URL fragment that behaves like a browser location,
// an in-memory local storage, and a small SQL-style page registry so that
// individual test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::collections::HashMap;
use std::rc::Rc;

use tutorial_types::auth::TokenStorage;
use tutorial_types::navigation::{FragmentHost, FragmentWrite};
use tutorial_types::registry::{ModuleLink, SectionRegistry};

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Fragment writes either fire `hashchange` (like `location.replace("#x")`)
/// or stay silent (like `history.replaceState`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Silent,
    Dispatching,
}

/// In-memory location. Dispatching writes queue the event instead of
/// delivering it, mirroring the browser's asynchronous `hashchange`.
#[derive(Debug)]
pub struct MemoryLocation {
    pub fragment: String,
    pub mode: WriteMode,
    pub queued_events: Vec<String>,
    pub writes: usize,
}

impl MemoryLocation {
    pub fn new(fragment: &str, mode: WriteMode) -> Self {
        Self {
            fragment: fragment.to_string(),
            mode,
            queued_events: Vec::new(),
            writes: 0,
        }
    }

    /// Simulate the user pressing back/forward or editing the URL.
    pub fn navigate_externally(&mut self, fragment: &str) -> String {
        self.fragment = fragment.to_string();
        fragment.to_string()
    }

    pub fn drain_events(&mut self) -> Vec<String> {
        std::mem::take(&mut self.queued_events)
    }

    fn write(&mut self, fragment: &str) -> FragmentWrite {
        if self.fragment == fragment {
            return FragmentWrite::Unchanged;
        }
        self.fragment = fragment.to_string();
        self.writes += 1;
        match self.mode {
            WriteMode::Silent => FragmentWrite::Silent,
            WriteMode::Dispatching => {
                self.queued_events.push(fragment.to_string());
                FragmentWrite::EventPending
            }
        }
    }
}

impl FragmentHost for MemoryLocation {
    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn replace_fragment(&mut self, fragment: &str) -> FragmentWrite {
        self.write(fragment)
    }

    fn clear_fragment(&mut self) -> FragmentWrite {
        self.write("")
    }
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn with(items: &[(&str, &str)]) -> Self {
        Self {
            items: items
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl TokenStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// The SQL tutorial's navigation tree, trimmed down.
pub fn sql_registry() -> Rc<SectionRegistry> {
    Rc::new(
        SectionRegistry::builder()
            .group("sql-basics", "SQL Basics", Some("🗄️"))
            .grouped_section("sql-basics", "introduction", "Introduction")
            .grouped_section("sql-basics", "basic-commands", "Basic Commands")
            .group("sql-intermediate", "SQL Intermediate", Some("⚡"))
            .grouped_section("sql-intermediate", "joins", "Joins and Relationships")
            .subsection("joins", "inner-join", "Inner Join")
            .subsection("joins", "outer-joins", "Outer Joins")
            .grouped_section("sql-intermediate", "subqueries", "Subqueries")
            .next_module(Some(ModuleLink {
                title: "Generative AI".into(),
                href: "/tutorials/artificial-intelligence/generative-ai".into(),
            }))
            .build()
            .expect("fixture registry is valid"),
    )
}

/// Build an unsigned JWT-shaped token around `payload`.
pub fn token_with_payload(payload: &str) -> String {
    use base64::Engine;
    format!(
        "eyJhbGciOiJIUzI1NiJ9.{}.signature",
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(payload)
    )
}
