//! Live detection status board with game and status filters.

use leptos::prelude::*;

use crate::state::catalog;
use crate::util::format::display_date;

#[component]
pub fn StatusPage() -> impl IntoView {
    let statuses = LocalResource::new(|| crate::net::api::fetch_product_statuses());
    let filter_game = RwSignal::new("all".to_owned());
    let filter_status = RwSignal::new("all".to_owned());

    let summary_card = move |status: &'static str, label: &'static str, count: usize| {
        let card_class = format!("status-summary__card status-summary__card--{status}");
        view! {
            <button
                class=card_class
                on:click=move |_| {
                    filter_status.update(|s| {
                        *s = if s == status { "all".to_owned() } else { status.to_owned() };
                    });
                }
            >
                <span class="status-summary__count">{count}</span>
                <span class="status-summary__label">{label}</span>
            </button>
        }
    };

    view! {
        <div class="status-page">
            <header class="status-page__header">
                <h1>"Product Status"</h1>
                <p>"Live detection status for every product, updated continuously."</p>
            </header>

            <Suspense fallback=move || view! { <p>"Loading status board..."</p> }>
                {move || {
                    statuses.get().map(|rows| {
                        let counts = catalog::status_counts(&rows);
                        let games = catalog::status_games(&rows);
                        view! {
                            <div class="status-summary">
                                {summary_card("undetected", "Undetected", counts.undetected)}
                                {summary_card("testing", "Testing", counts.testing)}
                                {summary_card("updating", "Updating", counts.updating)}
                                {summary_card("detected", "Detected", counts.detected)}
                            </div>

                            <div class="status-page__filters">
                                <button
                                    class="status-page__filter"
                                    class:status-page__filter--active=move || {
                                        filter_game.get() == "all"
                                    }
                                    on:click=move |_| filter_game.set("all".to_owned())
                                >
                                    "All Games"
                                </button>
                                {games
                                    .into_iter()
                                    .map(|game| {
                                        let value = game.clone();
                                        let active = game.clone();
                                        view! {
                                            <button
                                                class="status-page__filter"
                                                class:status-page__filter--active=move || {
                                                    filter_game.get() == active
                                                }
                                                on:click=move |_| filter_game.set(value.clone())
                                            >
                                                {game}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>

                            <div class="status-page__grid">
                                {move || {
                                    catalog::filter_statuses(
                                            &rows,
                                            &filter_game.get(),
                                            &filter_status.get(),
                                        )
                                        .into_iter()
                                        .map(|row| {
                                            let badge = format!(
                                                "status-row__badge status-row__badge--{}",
                                                row.status,
                                            );
                                            view! {
                                                <div class="status-row">
                                                    <div class="status-row__info">
                                                        <span class="status-row__name">
                                                            {row.name.clone()}
                                                        </span>
                                                        <span class="status-row__game">
                                                            {row.game.clone()}
                                                        </span>
                                                    </div>
                                                    <span class=badge>{row.status.clone()}</span>
                                                    <span class="status-row__updated">
                                                        {display_date(&row.last_updated).to_owned()}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
