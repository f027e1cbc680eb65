// SPDX-License-Identifier: MIT OR Apache-2.0

use std::rc::Rc;

use tutorial_types::{Pager, PagerLink, SectionRegistry};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionPagerProps {
    pub registry: Rc<SectionRegistry>,
    pub active_section: AttrValue,
    pub on_select: Callback<String>,
}

/// Previous/Next buttons under the content, with an "X of N" indicator.
#[function_component(SectionPager)]
pub fn section_pager(props: &SectionPagerProps) -> Html {
    let pager = Pager::for_section(&props.registry, &props.active_section);

    html! {
        <nav class="section-pager">
            { pager_link(pager.previous, "pager-previous", "Previous", &props.on_select) }
            if let Some((index, total)) = pager.position {
                <span class="pager-position">{ format!("{index} of {total}") }</span>
            }
            { pager_link(pager.next, "pager-next", "Next", &props.on_select) }
        </nav>
    }
}

fn pager_link(
    link: Option<PagerLink<'_>>,
    class: &'static str,
    label: &'static str,
    on_select: &Callback<String>,
) -> Html {
    match link {
        Some(PagerLink::Section(section)) => {
            let onclick = {
                let id = section.id.clone();
                let on_select = on_select.clone();
                Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
            };
            html! {
                <button type="button" class={classes!("pager-link", class)} {onclick}>
                    <span class="pager-label">{ label }</span>
                    <span class="pager-title">{ section.title.clone() }</span>
                </button>
            }
        }
        Some(PagerLink::Module(module)) => html! {
            <a href={module.href.clone()} class={classes!("pager-link", "pager-module", class)}>
                <span class="pager-label">{ label }</span>
                <span class="pager-title">{ module.title.clone() }</span>
            </a>
        },
        None => html! { <span class={classes!("pager-link", "pager-empty", class)} /> },
    }
}
