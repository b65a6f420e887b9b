//! Name-entry page: the first real step of the flow.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::flow::Screen;
use crate::state::game::GameState;
use crate::util::validate::validate_game_name;

const POPULAR_GAMES: [&str; 5] = ["Catan", "Monopoly", "Chess", "Scrabble", "Risk"];

/// Name-entry page — stores the trimmed game name and moves on to upload.
/// Empty or whitespace-only input is rejected inline without navigating.
#[component]
pub fn GamePage() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        match validate_game_name(&name.get()) {
            Ok(trimmed) => {
                game.update(|g| g.set_game_name(trimmed));
                navigate(Screen::Upload.path(), NavigateOptions::default());
            }
            Err(e) => error.set(e.to_string()),
        }
    });

    view! {
        <div class="game-page">
            <div class="game-page__card">
                <div class="game-page__icon">"🎲"</div>
                <h1>"Enter the Board Game Name"</h1>
                <p class="game-page__hint">"Tell us which game you'd like to explore"</p>

                <input
                    class="game-page__input"
                    type="text"
                    placeholder="e.g. Catan, Chess, Monopoly..."
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        name.set(event_target_value(&ev));
                        error.set(String::new());
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
                <Show when=move || !error.get().is_empty()>
                    <p class="game-page__error">{move || error.get()}</p>
                </Show>

                <button class="btn btn--primary game-page__continue" on:click=move |_| submit.run(())>
                    "Continue"
                </button>

                <p class="game-page__popular-label">"Popular games:"</p>
                <div class="game-page__popular">
                    {POPULAR_GAMES
                        .into_iter()
                        .map(|g| {
                            view! {
                                <button class="chip" on:click=move |_| name.set(g.to_owned())>
                                    {g}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <a href="/" class="game-page__back">"← Back to home"</a>
            </div>
        </div>
    }
}
