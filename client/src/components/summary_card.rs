//! Summary card shared by every dashboard.
//!
//! DESIGN
//! ======
//! Dashboards project their rows into `CardModel` values with plain functions,
//! which keeps card content testable without rendering.

use leptos::prelude::*;

/// Display content of one dashboard card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardModel {
    /// Unique key within the dashboard.
    pub key: String,
    pub title: String,
    pub lines: Vec<String>,
    pub footnote: Option<String>,
}

/// A single card with a title, body lines, and an optional footnote.
#[component]
pub fn SummaryCard(card: CardModel) -> impl IntoView {
    let CardModel { key, title, lines, footnote } = card;

    view! {
        <article class="card" data-key=key>
            <h3 class="card__title">{title}</h3>
            {lines
                .into_iter()
                .map(|line| view! { <p class="card__line">{line}</p> })
                .collect::<Vec<_>>()}
            {footnote.map(|text| view! { <small class="card__footnote">{text}</small> })}
        </article>
    }
}
