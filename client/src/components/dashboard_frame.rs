//! Header + card grid used by all role dashboards.

use leptos::prelude::*;

use crate::components::summary_card::{CardModel, SummaryCard};

/// Dashboard section with a heading, a description, an optional highlighted
/// figure, and one card per row.
#[component]
pub fn DashboardFrame(
    title: &'static str,
    description: &'static str,
    #[prop(optional)] highlight: Option<String>,
    cards: Vec<CardModel>,
) -> impl IntoView {
    view! {
        <section class="dashboard">
            <header class="dashboard__header">
                <h2>{title}</h2>
                <p>{description}</p>
                {highlight.map(|text| view! { <strong class="dashboard__highlight">{text}</strong> })}
            </header>
            <div class="dashboard__grid">
                {cards
                    .into_iter()
                    .map(|card| view! { <SummaryCard card=card/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
