//! Score Board Component

use leptos::prelude::*;

use crate::context::use_game;
use crate::store::BoardStateStoreFields;

/// Score, attempts and round progress
#[component]
pub fn ScoreBoard() -> impl IntoView {
    let board = use_game().board;

    view! {
        <div class="game-score">
            <div class="score-info">
                <span class="score-label">"Score: "<strong>{move || board.score().get()}</strong></span>
                <span class="score-label">"Attempts: "<strong>{move || board.attempts().get()}</strong></span>
            </div>
            <div class="progress-track">
                <div
                    class="progress-bar"
                    style:width=move || format!("{}%", board.progress().get())
                />
            </div>
        </div>
    }
}
