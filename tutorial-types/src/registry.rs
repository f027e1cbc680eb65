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

//! Per-page registry of navigable sections.
//!
//! A tutorial page declares an ordered list of sections, optionally nested
//! subsections, and the sidebar groups that organise them. Section and
//! subsection ids double as URL fragments and DOM anchors, so they must be
//! unique across the whole page. Group ids live in the same namespace but are
//! never a navigation target on their own.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A top-level, independently navigable unit of a tutorial page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    pub id: String,
    pub title: String,
    /// Sidebar group this section is listed under.
    #[serde(default)]
    pub group: Option<String>,
}

/// A navigable unit displayed inside its parent section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsectionDescriptor {
    pub id: String,
    pub title: String,
    /// Id of the section that renders this subsection.
    pub parent: String,
}

/// Sidebar grouping. Its id is valid in the navigation tree but is not a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Link to another course or module, shown by the pager at the boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleLink {
    pub title: String,
    pub href: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a tutorial page needs at least one section")]
    NoSections,

    #[error("navigation ids must not be empty")]
    EmptyId,

    #[error("navigation id {0:?} may only use ASCII letters, digits, '-' and '_'")]
    InvalidId(String),

    #[error("duplicate navigation id: {0}")]
    DuplicateId(String),

    #[error("subsection {subsection} refers to unknown section {parent}")]
    UnknownParent { subsection: String, parent: String },

    #[error("section {section} refers to unknown group {group}")]
    UnknownGroup { section: String, group: String },
}

/// What a navigation id names on this page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Section(&'a SectionDescriptor),
    Subsection(&'a SubsectionDescriptor),
    Group(&'a NavGroup),
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Section(usize),
    Subsection(usize),
    Group(usize),
}

/// Immutable, validated navigation tree for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
    subsections: Vec<SubsectionDescriptor>,
    groups: Vec<NavGroup>,
    index: HashMap<String, Entry>,
    previous_module: Option<ModuleLink>,
    next_module: Option<ModuleLink>,
}

impl SectionRegistry {
    pub fn builder() -> SectionRegistryBuilder {
        SectionRegistryBuilder::default()
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn subsections(&self) -> &[SubsectionDescriptor] {
        &self.subsections
    }

    pub fn groups(&self) -> &[NavGroup] {
        &self.groups
    }

    /// The page's landing section: always the first declared one.
    pub fn default_section(&self) -> &SectionDescriptor {
        // `build` rejects registries without sections.
        &self.sections[0]
    }

    pub fn resolve(&self, id: &str) -> Resolved<'_> {
        match self.index.get(id) {
            Some(Entry::Section(i)) => Resolved::Section(&self.sections[*i]),
            Some(Entry::Subsection(i)) => Resolved::Subsection(&self.subsections[*i]),
            Some(Entry::Group(i)) => Resolved::Group(&self.groups[*i]),
            None => Resolved::Unknown,
        }
    }

    pub fn section(&self, id: &str) -> Option<&SectionDescriptor> {
        match self.resolve(id) {
            Resolved::Section(section) => Some(section),
            _ => None,
        }
    }

    pub fn subsection(&self, id: &str) -> Option<&SubsectionDescriptor> {
        match self.resolve(id) {
            Resolved::Subsection(subsection) => Some(subsection),
            _ => None,
        }
    }

    /// Parent section of a subsection id.
    pub fn parent_of(&self, subsection_id: &str) -> Option<&str> {
        self.subsection(subsection_id).map(|s| s.parent.as_str())
    }

    pub fn is_group(&self, id: &str) -> bool {
        matches!(self.index.get(id), Some(Entry::Group(_)))
    }

    /// Position of a section in the declared order.
    pub fn position(&self, section_id: &str) -> Option<usize> {
        match self.index.get(section_id) {
            Some(Entry::Section(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn subsections_of<'a>(
        &'a self,
        section_id: &'a str,
    ) -> impl Iterator<Item = &'a SubsectionDescriptor> + 'a {
        self.subsections
            .iter()
            .filter(move |s| s.parent == section_id)
    }

    /// Sections listed under `group`, or the ungrouped ones for `None`.
    pub fn sections_in<'a>(
        &'a self,
        group: Option<&'a str>,
    ) -> impl Iterator<Item = &'a SectionDescriptor> + 'a {
        self.sections
            .iter()
            .filter(move |s| s.group.as_deref() == group)
    }

    pub fn previous_module(&self) -> Option<&ModuleLink> {
        self.previous_module.as_ref()
    }

    pub fn next_module(&self) -> Option<&ModuleLink> {
        self.next_module.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct SectionRegistryBuilder {
    sections: Vec<SectionDescriptor>,
    subsections: Vec<SubsectionDescriptor>,
    groups: Vec<NavGroup>,
    previous_module: Option<ModuleLink>,
    next_module: Option<ModuleLink>,
}

impl SectionRegistryBuilder {
    pub fn group(mut self, id: &str, title: &str, icon: Option<&str>) -> Self {
        self.groups.push(NavGroup {
            id: id.to_string(),
            title: title.to_string(),
            icon: icon.map(str::to_string),
        });
        self
    }

    pub fn section(mut self, id: &str, title: &str) -> Self {
        self.sections.push(SectionDescriptor {
            id: id.to_string(),
            title: title.to_string(),
            group: None,
        });
        self
    }

    pub fn grouped_section(mut self, group: &str, id: &str, title: &str) -> Self {
        self.sections.push(SectionDescriptor {
            id: id.to_string(),
            title: title.to_string(),
            group: Some(group.to_string()),
        });
        self
    }

    pub fn subsection(mut self, parent: &str, id: &str, title: &str) -> Self {
        self.subsections.push(SubsectionDescriptor {
            id: id.to_string(),
            title: title.to_string(),
            parent: parent.to_string(),
        });
        self
    }

    pub fn previous_module(mut self, link: Option<ModuleLink>) -> Self {
        self.previous_module = link;
        self
    }

    pub fn next_module(mut self, link: Option<ModuleLink>) -> Self {
        self.next_module = link;
        self
    }

    pub fn build(self) -> Result<SectionRegistry, RegistryError> {
        if self.sections.is_empty() {
            return Err(RegistryError::NoSections);
        }

        let mut index = HashMap::new();
        let entries = self
            .groups
            .iter()
            .enumerate()
            .map(|(i, g)| (g.id.as_str(), Entry::Group(i)))
            .chain(
                self.sections
                    .iter()
                    .enumerate()
                    .map(|(i, s)| (s.id.as_str(), Entry::Section(i))),
            )
            .chain(
                self.subsections
                    .iter()
                    .enumerate()
                    .map(|(i, s)| (s.id.as_str(), Entry::Subsection(i))),
            );
        for (id, entry) in entries {
            if id.is_empty() {
                return Err(RegistryError::EmptyId);
            }
            if !is_fragment_safe(id) {
                return Err(RegistryError::InvalidId(id.to_string()));
            }
            if index.insert(id.to_string(), entry).is_some() {
                return Err(RegistryError::DuplicateId(id.to_string()));
            }
        }

        for section in &self.sections {
            if let Some(group) = &section.group {
                if !matches!(index.get(group), Some(Entry::Group(_))) {
                    return Err(RegistryError::UnknownGroup {
                        section: section.id.clone(),
                        group: group.clone(),
                    });
                }
            }
        }
        for subsection in &self.subsections {
            if !matches!(index.get(&subsection.parent), Some(Entry::Section(_))) {
                return Err(RegistryError::UnknownParent {
                    subsection: subsection.id.clone(),
                    parent: subsection.parent.clone(),
                });
            }
        }

        Ok(SectionRegistry {
            sections: self.sections,
            subsections: self.subsections,
            groups: self.groups,
            index,
            previous_module: self.previous_module,
            next_module: self.next_module,
        })
    }
}

/// Ids travel through `location.hash` unescaped only if they stay inside
/// this set.
fn is_fragment_safe(id: &str) -> bool {
    id.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
