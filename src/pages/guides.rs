//! Static setup guides and FAQ.

use leptos::prelude::*;

struct Guide {
    title: &'static str,
    steps: &'static [&'static str],
}

const GUIDES: [Guide; 3] = [
    Guide {
        title: "Getting Started",
        steps: &[
            "Purchase a license for your game from the products page.",
            "Open your dashboard and copy the license key.",
            "Download the loader from the link in your purchase email.",
            "Run the loader as administrator and paste your key.",
        ],
    },
    Guide {
        title: "License Activation",
        steps: &[
            "Keys activate on first use and bind to your hardware.",
            "The expiry countdown starts at activation, not at purchase.",
            "One key works on one machine at a time.",
        ],
    },
    Guide {
        title: "HWID Resets",
        steps: &[
            "Changed hardware? Request a reset from support.",
            "Resets are free once per license per week.",
            "Include your license key and order email in the request.",
        ],
    },
];

const FAQ: [(&str, &str); 4] = [
    (
        "Is it safe to use?",
        "Every product is tested against the latest anti-cheat builds before \
         release. Check the status page before each session.",
    ),
    (
        "How fast is delivery?",
        "Instant. Your license key appears in the dashboard as soon as payment \
         is confirmed.",
    ),
    (
        "What payment methods do you accept?",
        "All major cards through our hosted checkout. Crypto on request via \
         support.",
    ),
    (
        "What if a product gets detected?",
        "Detected products are pulled from sale and paused licenses are \
         extended for the downtime once an update ships.",
    ),
];

#[component]
pub fn GuidesPage() -> impl IntoView {
    view! {
        <div class="guides-page">
            <header class="guides-page__header">
                <h1>"Guides"</h1>
                <p>"Everything you need to get set up and stay running."</p>
            </header>

            <div class="guides-page__grid">
                {GUIDES
                    .iter()
                    .map(|guide| {
                        view! {
                            <section class="guide-card">
                                <h2 class="guide-card__title">{guide.title}</h2>
                                <ol class="guide-card__steps">
                                    {guide
                                        .steps
                                        .iter()
                                        .map(|step| view! { <li>{*step}</li> })
                                        .collect::<Vec<_>>()}
                                </ol>
                            </section>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <section class="guides-page__faq">
                <h2>"Frequently Asked Questions"</h2>
                {FAQ
                    .iter()
                    .map(|(question, answer)| {
                        view! {
                            <details class="faq-item">
                                <summary class="faq-item__question">{*question}</summary>
                                <p class="faq-item__answer">{*answer}</p>
                            </details>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
