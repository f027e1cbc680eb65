// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::auth::AuthGate;
use crate::components::config_error::ConfigError;
use crate::components::tech_layout::TechLayout;
use crate::courses::Course;

#[derive(Properties, PartialEq)]
pub struct TutorialViewProps {
    pub course: Course,
    /// Forwarded to the auth gate of gated courses.
    #[prop_or_default]
    pub on_redirect: Option<Callback<String>>,
}

/// A course page, behind the auth gate when its manifest asks for one.
#[function_component(TutorialView)]
pub fn tutorial_view(props: &TutorialViewProps) -> Html {
    let course = props.course;
    let page = use_memo(course, |course| course.load());

    use_effect_with(course, |course| {
        gloo_utils::document().set_title(&format!("{} | Tutorials", course.title()));
        || ()
    });

    match &*page {
        Err(e) => {
            log::error!("Failed to load the {} tutorial: {e}", course.slug());
            html! { <ConfigError message={e.to_string()} /> }
        }
        Ok(page) if page.gated => html! {
            <AuthGate on_redirect={props.on_redirect.clone()}>
                <TechLayout {course} page={page.clone()} />
            </AuthGate>
        },
        Ok(page) => html! { <TechLayout {course} page={page.clone()} /> },
    }
}
