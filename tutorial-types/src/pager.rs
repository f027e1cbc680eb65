// SPDX-License-Identifier: MIT OR Apache-2.0

//! Previous/Next links for the section at the bottom of a tutorial page.

use crate::registry::{ModuleLink, SectionDescriptor, SectionRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerLink<'a> {
    /// Another section of the same page.
    Section(&'a SectionDescriptor),
    /// A different course or module, only offered at the boundaries.
    Module(&'a ModuleLink),
}

impl PagerLink<'_> {
    pub fn title(&self) -> &str {
        match self {
            PagerLink::Section(section) => &section.title,
            PagerLink::Module(link) => &link.title,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager<'a> {
    pub previous: Option<PagerLink<'a>>,
    pub next: Option<PagerLink<'a>>,
    /// 1-based position and total number of sections.
    pub position: Option<(usize, usize)>,
}

impl<'a> Pager<'a> {
    pub fn for_section(registry: &'a SectionRegistry, active_section: &str) -> Self {
        let sections = registry.sections();
        let Some(index) = registry.position(active_section) else {
            return Self {
                previous: None,
                next: None,
                position: None,
            };
        };

        let previous = match index.checked_sub(1) {
            Some(prev) => Some(PagerLink::Section(&sections[prev])),
            None => registry.previous_module().map(PagerLink::Module),
        };
        let next = match sections.get(index + 1) {
            Some(section) => Some(PagerLink::Section(section)),
            None => registry.next_module().map(PagerLink::Module),
        };

        Self {
            previous,
            next,
            position: Some((index + 1, sections.len())),
        }
    }
}
