//! Leptos DragDrop Utilities
//!
//! Drag-and-drop for Leptos using mouse and touch events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Gesture state lives in a [`GestureTracker`]; the handlers here only feed
//! it browser events and report finished drops.

mod gesture;

pub use gesture::{DropEvent, GesturePhase, GestureTracker, DRAG_THRESHOLD_PX};

use std::str::FromStr;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Attribute carrying a drop target's key, used for touch hit-testing
pub const DROP_TARGET_ATTR: &str = "data-drop-target";

/// Keys that identify drop targets
pub trait DropKey: Copy + PartialEq + Send + Sync + 'static {}

impl<T: Copy + PartialEq + Send + Sync + 'static> DropKey for T {}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<T: DropKey> {
    pub tracker: RwSignal<GestureTracker<T>>,
}

impl<T: DropKey> DndSignals<T> {
    /// Item being dragged (tracked)
    pub fn dragging_id(&self) -> Option<u32> {
        self.tracker.with(|t| t.dragging_item())
    }

    /// Target under the pointer (tracked)
    pub fn drop_target(&self) -> Option<T> {
        self.tracker.with(|t| t.drop_target())
    }

    fn hover(&self, target: Option<T>) {
        let changed = self.tracker.with_untracked(|t| {
            t.dragging_item().is_some() && t.drop_target() != target
        });
        if changed {
            self.tracker.update(|t| t.hover(target));
        }
    }

    fn move_to(&self, x: i32, y: i32) {
        let pending = self
            .tracker
            .with_untracked(|t| matches!(t.phase(), GesturePhase::Pending { .. }));
        if pending {
            let started = self
                .tracker
                .try_update_untracked(|t| t.move_to(x, y))
                .unwrap_or(false);
            if started {
                self.tracker.notify();
            }
        }
    }

    fn release(&self) -> Option<DropEvent<T>> {
        self.tracker.try_update(|t| t.release()).flatten()
    }
}

pub fn create_dnd_signals<T: DropKey>() -> DndSignals<T> {
    DndSignals {
        tracker: RwSignal::new(GestureTracker::new()),
    }
}

/// End drag operation
pub fn end_drag<T: DropKey>(dnd: &DndSignals<T>) {
    if dnd.tracker.with_untracked(|t| t.is_active()) {
        dnd.tracker.update(|t| t.cancel());
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<T: DropKey>(dnd: DndSignals<T>, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.tracker.update(|t| t.press(item_id, ev.client_x(), ev.client_y()));
        }
    }
}

/// Create touchstart handler for draggable items
pub fn make_on_touchstart<T: DropKey>(dnd: DndSignals<T>, item_id: u32) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if let Some((x, y)) = first_touch(&ev.touches()) {
            dnd.tracker.update(|t| t.press(item_id, x, y));
        }
    }
}

/// Create mouseenter handler for drop targets
pub fn make_on_target_mouseenter<T: DropKey>(dnd: DndSignals<T>, target: T) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        dnd.hover(Some(target));
    }
}

/// Create mouseleave handler for drop targets
pub fn make_on_target_mouseleave<T: DropKey>(dnd: DndSignals<T>, target: T) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.tracker.with_untracked(|t| t.drop_target() == Some(target)) {
            dnd.tracker.update(|t| t.leave(target));
        }
    }
}

/// Bind document mousemove - starts drag if moved enough
fn bind_global_mousemove<T: DropKey>(dnd: DndSignals<T>) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        dnd.move_to(ev.client_x(), ev.client_y());
    });

    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<T, F>(dnd: DndSignals<T>, on_drop: F)
where
    T: DropKey,
    F: Fn(DropEvent<T>) + Clone + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dropped = dnd.release();
        end_drag(&dnd);
        // Click event will fire naturally on the element when nothing dropped
        if let Some(drop) = dropped {
            on_drop(drop);
        }
    });

    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

/// Bind document touch handlers for drop detection.
///
/// Targets are found by hit-testing for the nearest element carrying
/// [`DROP_TARGET_ATTR`] and parsing its value as `T`.
pub fn bind_global_touch<T, F>(dnd: DndSignals<T>, on_drop: F)
where
    T: DropKey + FromStr,
    F: Fn(DropEvent<T>) + Clone + 'static,
{
    let Some(doc) = document() else { return };

    let on_touchmove = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        if !dnd.tracker.with_untracked(|t| t.is_active()) {
            return;
        }
        let Some((x, y)) = first_touch(&ev.touches()) else { return };
        dnd.move_to(x, y);
        if dnd.tracker.with_untracked(|t| t.dragging_item().is_some()) {
            // Keep the page from scrolling under the finger
            ev.prevent_default();
            dnd.hover(target_at::<T>(x, y));
        }
    });

    let on_touchend = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        if !dnd.tracker.with_untracked(|t| t.is_active()) {
            return;
        }
        if let Some((x, y)) = first_touch(&ev.changed_touches()) {
            dnd.hover(target_at::<T>(x, y));
        }
        let dropped = dnd.release();
        end_drag(&dnd);
        if let Some(drop) = dropped {
            on_drop(drop);
        }
    });

    let on_touchcancel = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
        end_drag(&dnd);
    });

    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(false);
    let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        on_touchmove.as_ref().unchecked_ref(),
        &opts,
    );
    let _ = doc.add_event_listener_with_callback("touchend", on_touchend.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("touchcancel", on_touchcancel.as_ref().unchecked_ref());
    on_touchmove.forget();
    on_touchend.forget();
    on_touchcancel.forget();
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}

fn first_touch(list: &web_sys::TouchList) -> Option<(i32, i32)> {
    list.get(0).map(|touch| (touch.client_x(), touch.client_y()))
}

/// Drop target under a viewport point
fn target_at<T: FromStr>(x: i32, y: i32) -> Option<T> {
    let el = document()?.element_from_point(x as f32, y as f32)?;
    let target = el.closest(&format!("[{}]", DROP_TARGET_ATTR)).ok()??;
    target.get_attribute(DROP_TARGET_ATTR)?.parse().ok()
}
