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

//! Tutorial page manifests.
//!
//! A manifest is the JSON file a course page is authored in: its navigation
//! tree and the content of every section in one document. Loading it yields
//! the [`SectionRegistry`] driving navigation and the [`ContentStore`] the
//! content switch reads from.
//!
//! # Example manifest
//!
//! ```json
//! {
//!   "slug": "sql",
//!   "title": "SQL & Databases",
//!   "base_path": "/sql",
//!   "gated": true,
//!   "next_module": { "title": "Generative AI", "href": "/tutorials/artificial-intelligence/generative-ai" },
//!   "groups": [
//!     {
//!       "id": "sql-basics",
//!       "title": "SQL Basics",
//!       "icon": "🗄️",
//!       "sections": [
//!         { "id": "introduction", "title": "Introduction", "blocks": [] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

use crate::content::{ContentBlock, ContentStore};
use crate::registry::{ModuleLink, RegistryError, SectionRegistry};
use crate::slug::{child_id, slugify};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("invalid tutorial manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tutorial navigation: {0}")]
    Registry(#[from] RegistryError),
}

#[derive(Debug, Deserialize)]
struct PageManifest {
    slug: String,
    title: String,
    base_path: String,
    #[serde(default)]
    gated: bool,
    #[serde(default)]
    previous_module: Option<ModuleLink>,
    #[serde(default)]
    next_module: Option<ModuleLink>,
    groups: Vec<GroupManifest>,
}

#[derive(Debug, Deserialize)]
struct GroupManifest {
    id: String,
    title: String,
    #[serde(default)]
    icon: Option<String>,
    sections: Vec<SectionManifest>,
}

#[derive(Debug, Deserialize)]
struct SectionManifest {
    #[serde(default)]
    id: Option<String>,
    title: String,
    #[serde(default)]
    blocks: Vec<ContentBlock>,
    #[serde(default)]
    subsections: Vec<SubsectionManifest>,
}

#[derive(Debug, Deserialize)]
struct SubsectionManifest {
    #[serde(default)]
    id: Option<String>,
    title: String,
    #[serde(default)]
    blocks: Vec<ContentBlock>,
}

/// A loaded course page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialPage {
    pub slug: String,
    pub title: String,
    /// Path the page is served under, e.g. `/sql`.
    pub base_path: String,
    /// Whether the auth gate runs before the page renders.
    pub gated: bool,
    pub registry: Rc<SectionRegistry>,
    pub content: Rc<ContentStore>,
}

impl TutorialPage {
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let manifest: PageManifest = serde_json::from_str(json)?;
        Self::from_manifest(manifest)
    }

    fn from_manifest(manifest: PageManifest) -> Result<Self, PageError> {
        let mut builder = SectionRegistry::builder()
            .previous_module(manifest.previous_module)
            .next_module(manifest.next_module);
        let mut content = ContentStore::new();

        for group in manifest.groups {
            builder = builder.group(&group.id, &group.title, group.icon.as_deref());
            for (index, section) in group.sections.into_iter().enumerate() {
                let section_id = section
                    .id
                    .unwrap_or_else(|| derive_section_id(&group.id, &section.title, index));
                builder = builder.grouped_section(&group.id, &section_id, &section.title);

                for (index, subsection) in section.subsections.into_iter().enumerate() {
                    let subsection_id = subsection
                        .id
                        .unwrap_or_else(|| child_id(&section_id, &subsection.title, index));
                    builder = builder.subsection(&section_id, &subsection_id, &subsection.title);
                    content.insert(subsection_id, subsection.blocks);
                }
                content.insert(section_id, section.blocks);
            }
        }

        let registry = builder.build()?;
        log::debug!(
            "Loaded tutorial page {} with {} sections and {} subsections",
            manifest.slug,
            registry.sections().len(),
            registry.subsections().len()
        );

        Ok(Self {
            slug: manifest.slug,
            title: manifest.title,
            base_path: manifest.base_path,
            gated: manifest.gated,
            registry: Rc::new(registry),
            content: Rc::new(content),
        })
    }

    /// Absolute link to a section or subsection of this page.
    pub fn href(&self, id: &str) -> String {
        format!("{}#{id}", self.base_path)
    }
}

fn derive_section_id(group: &str, title: &str, index: usize) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("{group}-{index}")
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Resolved;

    const MANIFEST: &str = r#"{
        "slug": "medical-coding",
        "title": "Medical Coding",
        "base_path": "/tutorials/medical-coding",
        "gated": true,
        "previous_module": { "title": "All tutorials", "href": "/" },
        "groups": [
            {
                "id": "anatomy",
                "title": "Anatomy & Terminology",
                "sections": [
                    {
                        "title": "Body Systems Overview",
                        "blocks": [{ "type": "paragraph", "text": "Eleven organ systems." }],
                        "subsections": [
                            { "title": "Cardiovascular System" },
                            { "id": "nervous", "title": "Nervous System" }
                        ]
                    },
                    { "id": "prefixes", "title": "Prefixes and Suffixes" }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_manifest_derives_missing_ids() {
        let page = TutorialPage::from_json(MANIFEST).unwrap();
        let ids: Vec<_> = page.registry.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["body-systems-overview", "prefixes"]);
        assert_eq!(
            page.registry.parent_of("body-systems-overview-cardiovascular-system"),
            Some("body-systems-overview")
        );
        assert_eq!(page.registry.parent_of("nervous"), Some("body-systems-overview"));
        assert!(matches!(page.registry.resolve("anatomy"), Resolved::Group(g) if g.title == "Anatomy & Terminology"));
    }

    #[test]
    fn test_manifest_fills_content_store() {
        let page = TutorialPage::from_json(MANIFEST).unwrap();
        assert_eq!(page.content.blocks("body-systems-overview").len(), 1);
        assert!(page.content.contains("prefixes"));
        assert!(page.content.blocks("prefixes").is_empty());
    }

    #[test]
    fn test_manifest_metadata() {
        let page = TutorialPage::from_json(MANIFEST).unwrap();
        assert!(page.gated);
        assert_eq!(page.registry.previous_module().map(|l| l.href.as_str()), Some("/"));
        assert_eq!(page.registry.next_module(), None);
        assert_eq!(page.href("prefixes"), "/tutorials/medical-coding#prefixes");
    }

    #[test]
    fn test_manifest_errors() {
        assert!(matches!(TutorialPage::from_json("{"), Err(PageError::Json(_))));

        let empty = r#"{ "slug": "x", "title": "X", "base_path": "/x", "groups": [] }"#;
        assert!(matches!(
            TutorialPage::from_json(empty),
            Err(PageError::Registry(RegistryError::NoSections))
        ));

        let duplicate = r#"{ "slug": "x", "title": "X", "base_path": "/x", "groups": [
            { "id": "g", "title": "G", "sections": [{ "title": "Same" }, { "title": "Same" }] }
        ] }"#;
        assert!(matches!(
            TutorialPage::from_json(duplicate),
            Err(PageError::Registry(RegistryError::DuplicateId(id))) if id == "same"
        ));
    }
}
