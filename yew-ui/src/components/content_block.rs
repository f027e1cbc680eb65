// SPDX-License-Identifier: MIT OR Apache-2.0

use tutorial_types::ContentBlock;
use yew::prelude::*;

/// Render one authored block. Code is displayed, never executed.
pub fn render_block(block: &ContentBlock) -> Html {
    match block {
        ContentBlock::Paragraph { text } => html! { <p>{ text.clone() }</p> },
        ContentBlock::Heading { text, level } => {
            let tag = format!("h{}", (*level).clamp(3, 6));
            html! { <@{tag} class="content-heading">{ text.clone() }</@> }
        }
        ContentBlock::Code { language, source } => html! {
            <pre class="content-code">
                <code class={language.as_ref().map(|l| format!("language-{l}"))}>{ source.clone() }</code>
            </pre>
        },
        ContentBlock::List { items, ordered } => {
            let items = items.iter().map(|item| html! { <li>{ item.clone() }</li> });
            if *ordered {
                html! { <ol>{ for items }</ol> }
            } else {
                html! { <ul>{ for items }</ul> }
            }
        }
        ContentBlock::Table {
            headers,
            rows,
            caption,
        } => html! {
            <table class="content-table">
                if let Some(caption) = caption {
                    <caption>{ caption.clone() }</caption>
                }
                if !headers.is_empty() {
                    <thead>
                        <tr>{ for headers.iter().map(|h| html! { <th>{ h.clone() }</th> }) }</tr>
                    </thead>
                }
                <tbody>
                {
                    for rows.iter().map(|row| html! {
                        <tr>{ for row.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }</tr>
                    })
                }
                </tbody>
            </table>
        },
        ContentBlock::Image { src, alt } => html! {
            <img class="content-image" src={src.clone()} alt={alt.clone().unwrap_or_default()} />
        },
        ContentBlock::Callout { title, text } => html! {
            <aside class="content-callout">
                if let Some(title) = title {
                    <strong class="callout-title">{ title.clone() }</strong>
                }
                <p>{ text.clone() }</p>
            </aside>
        },
    }
}
