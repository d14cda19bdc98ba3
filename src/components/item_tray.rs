//! Item Tray Component
//!
//! Items waiting to be sorted. Each one can be picked up with the mouse or
//! a finger.

use leptos::prelude::*;
use leptos_dragdrop::*;
use sorting_engine::{Category, Item};

use crate::context::use_game;
use crate::store::BoardStateStoreFields;

#[component]
pub fn ItemTray(dnd: DndSignals<Category>) -> impl IntoView {
    let board = use_game().board;
    let is_empty = move || board.unsorted().with(|items| items.is_empty());

    view! {
        <div class="items-container">
            <For
                each=move || board.unsorted().get()
                key=|item: &Item| item.id
                children=move |item: Item| {
                    let id = item.id.0;
                    let on_mousedown = make_on_mousedown(dnd, id);
                    let on_touchstart = make_on_touchstart(dnd, id);

                    let item_class = move || {
                        if dnd.dragging_id() == Some(id) {
                            "sortable-item dragging"
                        } else {
                            "sortable-item"
                        }
                    };

                    view! {
                        <div
                            class=item_class
                            on:mousedown=on_mousedown
                            on:touchstart=on_touchstart
                        >
                            <span class="item-emoji">{item.emoji.clone()}</span>
                            <span class="item-name">{item.name.clone()}</span>
                        </div>
                    }
                }
            />
            <Show when=is_empty>
                <p class="items-empty">"Everything is sorted!"</p>
            </Show>
        </div>
    }
}
