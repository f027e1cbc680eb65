// SPDX-License-Identifier: MIT OR Apache-2.0

//! Page frame for a tutorial: top bar, section sidebar, content and pager.

use tutorial_types::TutorialPage;
use yew::prelude::*;

use crate::components::section_content::SectionContent;
use crate::components::section_pager::SectionPager;
use crate::components::sidebar::Sidebar;
use crate::components::top_bar::TopBar;
use crate::courses::Course;
use crate::hooks::use_hash_navigation;

#[derive(Properties, PartialEq)]
pub struct TechLayoutProps {
    pub course: Course,
    pub page: TutorialPage,
}

#[function_component(TechLayout)]
pub fn tech_layout(props: &TechLayoutProps) -> Html {
    let page = &props.page;
    let nav = use_hash_navigation(page.registry.clone());

    html! {
        <div class="tech-layout">
            <TopBar current={Some(props.course)} />
            <div class="tech-layout-body">
                <Sidebar
                    page={page.clone()}
                    state={nav.state.clone()}
                    on_select={nav.set_active_section.clone()}
                />
                <main class="tech-layout-content">
                    <SectionContent
                        registry={page.registry.clone()}
                        content={page.content.clone()}
                        state={nav.state.clone()}
                    />
                    <SectionPager
                        registry={page.registry.clone()}
                        active_section={nav.state.active_section.clone()}
                        on_select={nav.set_active_section}
                    />
                </main>
            </div>
        </div>
    }
}
