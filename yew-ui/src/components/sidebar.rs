// SPDX-License-Identifier: MIT OR Apache-2.0

//! Section navigation for a tutorial page.

use tutorial_types::registry::SectionDescriptor;
use tutorial_types::{NavigationState, TutorialPage};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub page: TutorialPage,
    pub state: NavigationState,
    pub on_select: Callback<String>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let registry = &props.page.registry;
    let ungrouped: Vec<_> = registry.sections_in(None).collect();

    html! {
        <aside class="tutorial-sidebar">
            <h2 class="sidebar-title">{ props.page.title.clone() }</h2>
            if !ungrouped.is_empty() {
                <ul class="sidebar-sections">
                    { for ungrouped.into_iter().map(|section| section_item(props, section)) }
                </ul>
            }
            {
                for registry.groups().iter().map(|group| html! {
                    <div class="sidebar-group" key={group.id.clone()}>
                        <h3 class="sidebar-group-title">
                            if let Some(icon) = &group.icon {
                                <span class="sidebar-group-icon">{ icon.clone() }</span>
                            }
                            { group.title.clone() }
                        </h3>
                        <ul class="sidebar-sections">
                            {
                                for registry
                                    .sections_in(Some(group.id.as_str()))
                                    .map(|section| section_item(props, section))
                            }
                        </ul>
                    </div>
                })
            }
        </aside>
    }
}

fn section_item(props: &SidebarProps, section: &SectionDescriptor) -> Html {
    let active = props.state.active_section == section.id;
    let subsections: Vec<_> = props.page.registry.subsections_of(&section.id).collect();

    html! {
        <li key={section.id.clone()} class={classes!("sidebar-section", active.then_some("active"))}>
            { nav_link(props, &section.id, &section.title, active && props.state.active_subsection.is_none()) }
            if active && !subsections.is_empty() {
                <ul class="sidebar-subsections">
                {
                    for subsections.into_iter().map(|subsection| {
                        let current = props.state.active_subsection.as_deref() == Some(subsection.id.as_str());
                        html! {
                            <li key={subsection.id.clone()} class="sidebar-subsection">
                                { nav_link(props, &subsection.id, &subsection.title, current) }
                            </li>
                        }
                    })
                }
                </ul>
            }
        </li>
    }
}

fn nav_link(props: &SidebarProps, id: &str, title: &str, current: bool) -> Html {
    let onclick = {
        let id = id.to_string();
        let on_select = props.on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(id.clone());
        })
    };
    html! {
        <a
            href={props.page.href(id)}
            class={classes!("sidebar-link", current.then_some("current"))}
            aria-current={current.then_some("location")}
            data-section={id.to_string()}
            {onclick}
        >
            { title.to_string() }
        </a>
    }
}
