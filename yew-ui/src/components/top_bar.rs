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

use yew::prelude::*;
use yew_router::prelude::*;

use crate::courses::Course;
use crate::routing::Route;

#[derive(Properties, PartialEq)]
pub struct TopBarProps {
    /// Course whose link is highlighted.
    #[prop_or_default]
    pub current: Option<Course>,
}

#[function_component(TopBar)]
pub fn top_bar(props: &TopBarProps) -> Html {
    html! {
        <header class="top-bar">
            <Link<Route> to={Route::Home} classes={classes!("top-bar-brand")}>{ "Tutorials" }</Link<Route>>
            <nav class="top-bar-links">
            {
                for Course::ALL.iter().map(|course| {
                    let classes = classes!(
                        "top-bar-link",
                        (props.current == Some(*course)).then_some("active")
                    );
                    html! {
                        <Link<Route> to={course.route()} {classes}>{ course.title() }</Link<Route>>
                    }
                })
            }
            </nav>
        </header>
    }
}
