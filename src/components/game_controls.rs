//! Game Controls Component

use leptos::prelude::*;

use crate::context::use_game;
use crate::store::BoardStateStoreFields;

/// Reset, new challenge and hint toggle buttons
#[component]
pub fn GameControls() -> impl IntoView {
    let game = use_game();
    let hints_label = move || {
        if game.board.hints_visible().get() { "💡 Hide Hints" } else { "💡 Show Hints" }
    };

    view! {
        <div class="game-controls">
            <button class="game-btn" on:click=move |_| game.reset()>"🔄 Reset Game"</button>
            <button class="game-btn" on:click=move |_| game.new_challenge()>"🎲 New Challenge"</button>
            <button class="game-btn" on:click=move |_| game.toggle_hints()>{hints_label}</button>
        </div>
    }
}
