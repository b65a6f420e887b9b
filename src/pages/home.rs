//! Landing page with the pitch and the entry link into the flow.

use leptos::prelude::*;

/// Home page — static hero copy and a link to the name-entry screen.
#[component]
pub fn HomePage() -> impl IntoView {
    let features = [
        ("📚", "Any Rulebook", "Upload PDFs of any board game"),
        ("💬", "Instant Answers", "Get responses in seconds"),
        ("🎯", "Precise Sources", "References with page numbers"),
    ];

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"🎲 Ask Me Anything About Board Games"</h1>
                <p class="home-page__tagline">
                    "Upload any board game rulebook and start chatting instantly."
                </p>
                <p class="home-page__blurb">
                    "Never get stuck on complicated rules again. The assistant reads \
                     your rulebook and answers questions with precise references."
                </p>
                <a href="/game" class="btn btn--primary home-page__cta">
                    "Start Exploring Rules →"
                </a>
            </section>

            <section class="home-page__features">
                {features
                    .into_iter()
                    .map(|(icon, title, desc)| {
                        view! {
                            <div class="home-page__feature">
                                <div class="home-page__feature-icon">{icon}</div>
                                <h3>{title}</h3>
                                <p>{desc}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <footer class="home-page__footer">
                <p>"Powered by AI • Support for all PDF rulebooks • No registration required"</p>
            </footer>
        </div>
    }
}
