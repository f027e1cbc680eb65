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

//! Tutorial content and the lookup from navigation state to what is shown.
//!
//! Content is authored as JSON blocks and kept in a [`ContentStore`] keyed by
//! section or subsection id. [`content_for`] is a pure function: it never
//! fails, an id with nothing behind it yields [`ContentView::Missing`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::navigation::NavigationState;
use crate::registry::{SectionDescriptor, SectionRegistry, SubsectionDescriptor};

fn default_heading_level() -> u8 {
    2
}

/// One piece of tutorial prose.
///
/// # Example
///
/// ```json
/// { "type": "code", "language": "sql", "source": "SELECT * FROM users;" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Paragraph {
        text: String,
    },
    Heading {
        text: String,
        #[serde(default = "default_heading_level")]
        level: u8,
    },
    /// Sample code, shown as text and never executed.
    Code {
        #[serde(default)]
        language: Option<String>,
        source: String,
    },
    List {
        items: Vec<String>,
        #[serde(default)]
        ordered: bool,
    },
    Table {
        #[serde(default)]
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        #[serde(default)]
        caption: Option<String>,
    },
    Image {
        src: String,
        #[serde(default)]
        alt: Option<String>,
    },
    Callout {
        #[serde(default)]
        title: Option<String>,
        text: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    blocks: HashMap<String, Vec<ContentBlock>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, blocks: Vec<ContentBlock>) {
        self.blocks.insert(id.into(), blocks);
    }

    /// Blocks stored under `id`; empty when nothing was authored.
    pub fn blocks(&self, id: &str) -> &[ContentBlock] {
        self.blocks.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.blocks.contains_key(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsectionView<'a> {
    pub descriptor: &'a SubsectionDescriptor,
    pub blocks: &'a [ContentBlock],
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView<'a> {
    Section {
        section: &'a SectionDescriptor,
        blocks: &'a [ContentBlock],
        subsections: Vec<SubsectionView<'a>>,
    },
    /// Nothing is registered under the active section id.
    Missing { id: &'a str },
}

/// Select the content block for the active section.
pub fn content_for<'a>(
    registry: &'a SectionRegistry,
    store: &'a ContentStore,
    state: &'a NavigationState,
) -> ContentView<'a> {
    let Some(section) = registry.section(&state.active_section) else {
        return ContentView::Missing {
            id: &state.active_section,
        };
    };

    let subsections = registry
        .subsections_of(&section.id)
        .map(|descriptor| SubsectionView {
            descriptor,
            blocks: store.blocks(&descriptor.id),
            active: state.active_subsection.as_deref() == Some(descriptor.id.as_str()),
        })
        .collect();

    ContentView::Section {
        section,
        blocks: store.blocks(&section.id),
        subsections,
    }
}
