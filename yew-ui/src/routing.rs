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

//! Application route definitions.
//!
//! Extracted into its own module so that both the binary entry-point
//! (`main.rs`) and integration tests can share the same `Route` enum.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::courses::Course;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::register::Register;
use crate::pages::tutorial::TutorialView;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sql")]
    Sql,
    #[at("/tutorials/artificial-intelligence/generative-ai")]
    GenerativeAi,
    #[at("/tutorials/medical-coding")]
    MedicalCoding,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn course(&self) -> Option<Course> {
        match self {
            Route::Sql => Some(Course::Sql),
            Route::GenerativeAi => Some(Course::GenerativeAi),
            Route::MedicalCoding => Some(Course::MedicalCoding),
            Route::Home | Route::Register | Route::NotFound => None,
        }
    }
}

pub fn switch(route: Route) -> Html {
    log::debug!("Routing to {route:?}");
    match route {
        Route::Home => html! { <Home /> },
        Route::Register => html! { <Register /> },
        Route::NotFound => html! { <NotFound /> },
        Route::Sql | Route::GenerativeAi | Route::MedicalCoding => match route.course() {
            // Keyed so that moving between courses remounts the page and its
            // navigation state.
            Some(course) => html! { <TutorialView key={course.slug()} {course} /> },
            None => html! { <NotFound /> },
        },
    }
}
