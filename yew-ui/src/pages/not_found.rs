use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{ "404" }</h1>
            <p>{ "This page does not exist." }</p>
            <Link<Route> to={Route::Home}>{ "Back to all tutorials" }</Link<Route>>
        </div>
    }
}
