//! Root application component with routing and the shared state context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{chat::ChatPage, game::GamePage, home::HomePage, upload::UploadPage};
use crate::state::game::GameState;

/// Root application component.
///
/// Provides the shared session store and sets up client-side routing for
/// the name-entry → upload → chat flow.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let game = RwSignal::new(GameState::default());
    provide_context(game);

    view! {
        <Title text="Board Game Rule Assistant"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("game") view=GamePage/>
                <Route path=StaticSegment("upload") view=UploadPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
            </Routes>
        </Router>
    }
}
