//! Rulebook upload page: file selection, local validation, and the
//! `/upload` call that opens a chat session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_dots::LoadingDots;
use crate::state::flow::{self, Guard, Screen};
use crate::state::game::GameState;
#[cfg(feature = "csr")]
use crate::util::validate::{ValidationError, validate_rulebook_file};

/// Upload page — accepts a single PDF via drag-drop or the file picker,
/// validates it locally, and calls the backend on submit.
///
/// Guarded: without a game name the user is sent back to name entry. On
/// upload failure the error renders inline and the selected file is kept
/// so the user can retry.
#[component]
pub fn UploadPage() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();
    let navigate = use_navigate();

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if let Guard::RedirectTo(target) = flow::check(Screen::Upload, &game.get()) {
                navigate(target.path(), NavigateOptions::default());
            }
        });
    }

    // Display metadata lives apart from the browser file handle so the
    // view renders on every target.
    let file_meta = RwSignal::new(None::<(String, f64)>);
    #[cfg(feature = "csr")]
    let file = RwSignal::new_local(None::<web_sys::File>);
    let is_drag_over = RwSignal::new(false);
    let is_uploading = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    let select_file = move |candidate: web_sys::File| {
        match validate_rulebook_file(&candidate.type_(), candidate.size()) {
            Ok(()) => {
                file_meta.set(Some((candidate.name(), candidate.size())));
                file.set(Some(candidate));
                error.set(String::new());
            }
            Err(e) => error.set(e.to_string()),
        }
    };

    let on_file_input = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(f) = input.files().and_then(|list| list.get(0)) {
                select_file(f);
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        is_drag_over.set(true);
    };

    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        is_drag_over.set(false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        is_drag_over.set(false);
        #[cfg(feature = "csr")]
        {
            if let Some(f) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|list| list.get(0))
            {
                select_file(f);
            }
        }
    };

    let submit = Callback::new(move |()| {
        if is_uploading.get() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let Some(f) = file.get_untracked() else {
                error.set(ValidationError::NotPdf.to_string());
                return;
            };
            let game_name = game.get_untracked().game_name;
            is_uploading.set(true);
            game.update(|g| g.set_loading(true));
            error.set(String::new());

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_rulebook(&f, &game_name).await {
                    Ok(resp) => {
                        if let Some(msg) = resp.message {
                            leptos::logging::log!("upload: {msg}");
                        }
                        game.update(|g| {
                            g.set_session_id(resp.session_id);
                            g.set_loading(false);
                        });
                        is_uploading.set(false);
                        navigate(Screen::Chat.path(), NavigateOptions::default());
                    }
                    Err(e) => {
                        game.update(|g| g.set_loading(false));
                        is_uploading.set(false);
                        error.set(e.to_string());
                    }
                }
            });
        }
    });

    view! {
        <div class="upload-page">
            <div class="upload-page__card">
                <div class="upload-page__icon">"📚"</div>
                <h1>"Upload the Rulebook PDF"</h1>
                <p class="upload-page__hint">"The assistant will read and understand it instantly"</p>
                <span class="upload-page__badge">"📘 " {move || game.get().game_name}</span>

                <div
                    class="upload-page__dropzone"
                    class:upload-page__dropzone--over=move || is_drag_over.get()
                    class:upload-page__dropzone--selected=move || file_meta.get().is_some()
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <input
                        class="upload-page__file-input"
                        type="file"
                        accept=".pdf"
                        on:change=on_file_input
                        disabled=move || is_uploading.get()
                    />
                    {move || {
                        file_meta
                            .get()
                            .map_or_else(
                                || {
                                    view! {
                                        <div class="upload-page__prompt">
                                            <div class="upload-page__prompt-icon">"📄"</div>
                                            <p class="upload-page__prompt-title">"Drop your PDF here"</p>
                                            <p>"or click to browse files"</p>
                                            <p class="upload-page__prompt-note">"PDF files only, max 50MB"</p>
                                        </div>
                                    }
                                        .into_any()
                                },
                                |(name, size)| {
                                    let mb = size / (1024.0 * 1024.0);
                                    view! {
                                        <div class="upload-page__selected">
                                            <div class="upload-page__prompt-icon">"✅"</div>
                                            <p class="upload-page__file-name">{name}</p>
                                            <p>{format!("{mb:.1} MB")}</p>
                                            <p class="upload-page__prompt-note">"Click to change file"</p>
                                        </div>
                                    }
                                        .into_any()
                                },
                            )
                    }}
                </div>

                <Show when=move || !error.get().is_empty()>
                    <p class="upload-page__error">{move || error.get()}</p>
                </Show>

                <button
                    class="btn btn--primary upload-page__submit"
                    disabled=move || file_meta.get().is_none() || is_uploading.get()
                    on:click=move |_| submit.run(())
                >
                    {move || {
                        if is_uploading.get() {
                            view! { <LoadingDots text="Uploading"/> }.into_any()
                        } else {
                            view! { "Start Chatting" }.into_any()
                        }
                    }}
                </button>

                <a href="/game" class="upload-page__back">"← Change game name"</a>
            </div>
        </div>
    }
}
