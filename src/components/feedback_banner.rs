//! Feedback Components
//!
//! Transient message banner and the end-of-round score card.

use leptos::prelude::*;

use crate::context::use_game;
use crate::store::BoardStateStoreFields;

#[component]
pub fn FeedbackBanner() -> impl IntoView {
    let board = use_game().board;

    view! {
        <div class="feedback-area">
            {move || board.feedback().get().map(|feedback| view! {
                <div class=format!("feedback-message {}", feedback.kind.css_class())>
                    {feedback.message}
                </div>
            })}
        </div>
    }
}

/// Final score card, shown once the round is complete
#[component]
pub fn CompletionCard() -> impl IntoView {
    let game = use_game();
    let board = game.board;

    view! {
        {move || board.summary().get().map(|summary| view! {
            <div class="completion-card">
                <div class="completion-emoji">{summary.rating.emoji()}</div>
                <p class="completion-message">{summary.rating.message()}</p>
                <div class="completion-score">
                    {format!("Final Score: {}/{}", summary.score, summary.total)}
                </div>
                <div class="completion-attempts">
                    {format!("Total Attempts: {} ({}% accuracy)", summary.attempts, summary.percent)}
                </div>
                <button class="game-btn" on:click=move |_| game.new_challenge()>"Play Again"</button>
            </div>
        })}
    }
}
