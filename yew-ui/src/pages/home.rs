use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::top_bar::TopBar;
use crate::courses::Course;
use crate::routing::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <TopBar />
            <main class="home-content">
                <h1>{ "Tutorials" }</h1>
                <p>{ "Step-by-step courses you can read at your own pace." }</p>
                <ul class="course-list">
                {
                    for Course::ALL.iter().map(|course| html! {
                        <li class="course-card" key={course.slug()}>
                            <Link<Route> to={course.route()} classes={classes!("course-link")}>
                                <h2>{ course.title() }</h2>
                                <p>{ course.summary() }</p>
                            </Link<Route>>
                        </li>
                    })
                }
                </ul>
            </main>
        </div>
    }
}
