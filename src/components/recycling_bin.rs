//! Recycling Bin Component
//!
//! A drop target for one category, listing what has been sorted into it.

use leptos::prelude::*;
use leptos_dragdrop::*;
use sorting_engine::{Category, Item};

use crate::context::use_game;
use crate::store::BoardStateStoreFields;

#[component]
pub fn RecyclingBin(category: Category, dnd: DndSignals<Category>) -> impl IntoView {
    let board = use_game().board;

    let on_mouseenter = make_on_target_mouseenter(dnd, category);
    let on_mouseleave = make_on_target_mouseleave(dnd, category);

    let sorted_items = move || {
        board.bins().with(|bins| {
            bins.iter()
                .find(|bin| bin.category == category)
                .map(|bin| bin.sorted.clone())
                .unwrap_or_default()
        })
    };

    let bin_class = move || {
        let mut c = format!("bin bin-{}", category);
        if dnd.drop_target() == Some(category) { c.push_str(" drag-over"); }
        board.flashes().with(|flashes| {
            for flash in flashes.iter().filter(|f| f.bin == category) {
                c.push(' ');
                c.push_str(flash.kind.css_class());
            }
        });
        c
    };

    // data-drop-target must match leptos_dragdrop::DROP_TARGET_ATTR for touch drops
    view! {
        <div
            class=bin_class
            data-drop-target=category.as_str()
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <div class="bin-icon">{category.icon()}</div>
            <div class="bin-label">{category.display_name()}</div>
            <div class="bin-items">
                <For
                    each=sorted_items
                    key=|item: &Item| item.id
                    children=|item: Item| view! { <span class="sorted-item">{item.label()}</span> }
                />
            </div>
            <Show when=move || board.hints_visible().get()>
                <div class="bin-hint">{category.hint()}</div>
            </Show>
        </div>
    }
}
