// SPDX-License-Identifier: MIT OR Apache-2.0

//! The content switch: only the active section is rendered.

use std::rc::Rc;

use tutorial_types::{content_for, ContentStore, ContentView, NavigationState, SectionRegistry};
use yew::prelude::*;

use crate::components::content_block::render_block;

#[derive(Properties, PartialEq)]
pub struct SectionContentProps {
    pub registry: Rc<SectionRegistry>,
    pub content: Rc<ContentStore>,
    pub state: NavigationState,
}

#[function_component(SectionContent)]
pub fn section_content(props: &SectionContentProps) -> Html {
    match content_for(&props.registry, &props.content, &props.state) {
        ContentView::Section {
            section,
            blocks,
            subsections,
        } => html! {
            <section id={section.id.clone()} class="tutorial-section" key={section.id.clone()}>
                <h2 class="section-title">{ section.title.clone() }</h2>
                { for blocks.iter().map(render_block) }
                {
                    for subsections.into_iter().map(|subsection| html! {
                        <div
                            id={subsection.descriptor.id.clone()}
                            class={classes!("tutorial-subsection", subsection.active.then_some("active"))}
                        >
                            <h3 class="subsection-title">{ subsection.descriptor.title.clone() }</h3>
                            { for subsection.blocks.iter().map(render_block) }
                        </div>
                    })
                }
            </section>
        },
        ContentView::Missing { id } => {
            log::warn!("No content registered for section {id}");
            html! {
                <section class="tutorial-section missing">
                    <p>{ "This section is not available." }</p>
                </section>
            }
        }
    }
}
