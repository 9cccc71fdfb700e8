//! Landing page hosting the Spotify connect button.

use leptos::prelude::*;

use crate::components::login_button::LoginButton;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Harmony Hunt"</h1>
            <p>"Guess the song from your recent listening."</p>
            <LoginButton/>
        </div>
    }
}
