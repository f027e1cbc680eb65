// SPDX-License-Identifier: MIT OR Apache-2.0

//! The course pages shipped with the site. Each one is a JSON manifest
//! embedded at compile time.

use tutorial_types::{PageError, TutorialPage};

use crate::routing::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Course {
    Sql,
    GenerativeAi,
    MedicalCoding,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Sql, Course::GenerativeAi, Course::MedicalCoding];

    pub fn slug(&self) -> &'static str {
        match self {
            Course::Sql => "sql",
            Course::GenerativeAi => "generative-ai",
            Course::MedicalCoding => "medical-coding",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Course::Sql => "SQL & Databases",
            Course::GenerativeAi => "Generative AI",
            Course::MedicalCoding => "Medical Coding",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Course::Sql => "Query, join and model relational data, from SELECT to window functions.",
            Course::GenerativeAi => "How generative models work, from VAEs and GANs to LLMs and RAG.",
            Course::MedicalCoding => "Anatomy, terminology and the ICD-10-CM code set.",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Course::Sql => Route::Sql,
            Course::GenerativeAi => Route::GenerativeAi,
            Course::MedicalCoding => Route::MedicalCoding,
        }
    }

    fn manifest(&self) -> &'static str {
        match self {
            Course::Sql => include_str!("../content/sql.json"),
            Course::GenerativeAi => include_str!("../content/generative_ai.json"),
            Course::MedicalCoding => include_str!("../content/medical_coding.json"),
        }
    }

    pub fn load(&self) -> Result<TutorialPage, PageError> {
        TutorialPage::from_json(self.manifest())
    }
}
