//! Sort the Waste App
//!
//! Main game board: tray of items above a row of recycling bins.

use leptos::prelude::*;
use leptos_dragdrop::*;
use sorting_engine::{Category, GameConfig, ItemId};

use crate::components::{CompletionCard, FeedbackBanner, GameControls, ItemTray, RecyclingBin, ScoreBoard};
use crate::context::GameContext;

/// Seed for this page load's challenge draws
fn session_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    now ^ (noise << 32)
}

#[component]
pub fn App() -> impl IntoView {
    let game = match GameConfig::builtin().and_then(|config| GameContext::new(config, session_seed())) {
        Ok(game) => game,
        Err(err) => {
            tracing::error!(%err, "sorting game failed to start");
            return view! {
                <p class="game-error">{format!("The sorting game could not start: {}", err)}</p>
            }
            .into_any();
        }
    };

    // Provide the board to all children
    provide_context(game);

    let dnd = create_dnd_signals::<Category>();
    let on_drop = move |drop: DropEvent<Category>| game.place(ItemId(drop.item), drop.target);
    bind_global_mouseup(dnd, on_drop);
    bind_global_touch(dnd, on_drop);

    let bins = game.bin_categories();

    view! {
        <div class="game-container">
            <h1>"Sort the Waste"</h1>
            <ScoreBoard />
            <GameControls />
            <FeedbackBanner />

            <div class="game-area">
                <ItemTray dnd=dnd />
                <div class="bins-container">
                    {bins
                        .into_iter()
                        .map(|category| view! { <RecyclingBin category=category dnd=dnd /> })
                        .collect_view()}
                </div>
            </div>

            <CompletionCard />
        </div>
    }
    .into_any()
}
