//! Gesture Tracking
//!
//! Pure press / move / hover / release state machine behind the DOM
//! handlers. No browser types, so it can be tested natively.

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// A completed drag: `item` released over `target`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropEvent<T> {
    pub item: u32,
    pub target: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase<T> {
    Idle,
    /// Pressed but not yet moved past the threshold
    Pending { item: u32, start_x: i32, start_y: i32 },
    Dragging { item: u32, over: Option<T> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureTracker<T> {
    phase: GesturePhase<T>,
}

impl<T> Default for GestureTracker<T> {
    fn default() -> Self {
        Self {
            phase: GesturePhase::Idle,
        }
    }
}

impl<T: Copy + PartialEq> GestureTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase<T> {
        self.phase
    }

    /// Records a press on `item`. Ignored while another drag is running.
    pub fn press(&mut self, item: u32, x: i32, y: i32) {
        if matches!(self.phase, GesturePhase::Dragging { .. }) {
            return;
        }
        self.phase = GesturePhase::Pending {
            item,
            start_x: x,
            start_y: y,
        };
    }

    /// Pointer moved; returns true when this move started the drag
    pub fn move_to(&mut self, x: i32, y: i32) -> bool {
        if let GesturePhase::Pending { item, start_x, start_y } = self.phase {
            let dx = (x - start_x).abs();
            let dy = (y - start_y).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                self.phase = GesturePhase::Dragging { item, over: None };
                return true;
            }
        }
        false
    }

    /// Sets the target under the pointer; only meaningful while dragging
    pub fn hover(&mut self, target: Option<T>) {
        if let GesturePhase::Dragging { over, .. } = &mut self.phase {
            *over = target;
        }
    }

    /// Clears `target` if it is the one being hovered
    pub fn leave(&mut self, target: T) {
        if let GesturePhase::Dragging { over, .. } = &mut self.phase {
            if *over == Some(target) {
                *over = None;
            }
        }
    }

    /// Ends the gesture. Yields a drop only for a real drag over a target;
    /// a second release of the same gesture yields nothing.
    pub fn release(&mut self) -> Option<DropEvent<T>> {
        let phase = std::mem::replace(&mut self.phase, GesturePhase::Idle);
        match phase {
            GesturePhase::Dragging { item, over: Some(target) } => Some(DropEvent { item, target }),
            _ => None,
        }
    }

    /// Abandons the gesture without dropping
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    pub fn dragging_item(&self) -> Option<u32> {
        match self.phase {
            GesturePhase::Dragging { item, .. } => Some(item),
            _ => None,
        }
    }

    pub fn drop_target(&self) -> Option<T> {
        match self.phase {
            GesturePhase::Dragging { over, .. } => over,
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, GesturePhase::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging(item: u32) -> GestureTracker<char> {
        let mut tracker = GestureTracker::new();
        tracker.press(item, 10, 10);
        assert!(tracker.move_to(30, 10));
        tracker
    }

    #[test]
    fn test_small_moves_stay_a_click() {
        let mut tracker = GestureTracker::<char>::new();
        tracker.press(1, 100, 100);
        assert!(!tracker.move_to(104, 95));
        assert_eq!(tracker.dragging_item(), None);
        assert_eq!(tracker.release(), None);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_drag_starts_past_threshold_once() {
        let mut tracker = GestureTracker::<char>::new();
        tracker.press(3, 0, 0);
        assert!(tracker.move_to(0, 6));
        assert!(!tracker.move_to(0, 40));
        assert_eq!(tracker.dragging_item(), Some(3));
    }

    #[test]
    fn test_release_over_target_drops() {
        let mut tracker = dragging(7);
        tracker.hover(Some('p'));
        assert_eq!(tracker.drop_target(), Some('p'));
        assert_eq!(tracker.release(), Some(DropEvent { item: 7, target: 'p' }));
        assert_eq!(tracker.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_second_release_yields_nothing() {
        let mut tracker = dragging(7);
        tracker.hover(Some('g'));
        assert!(tracker.release().is_some());
        assert_eq!(tracker.release(), None);
    }

    #[test]
    fn test_release_outside_targets_is_abandoned() {
        let mut tracker = dragging(2);
        tracker.hover(Some('m'));
        tracker.leave('m');
        assert_eq!(tracker.release(), None);
    }

    #[test]
    fn test_leave_ignores_other_targets() {
        let mut tracker = dragging(2);
        tracker.hover(Some('m'));
        tracker.leave('x');
        assert_eq!(tracker.drop_target(), Some('m'));
    }

    #[test]
    fn test_hover_before_drag_is_ignored() {
        let mut tracker = GestureTracker::new();
        tracker.press(1, 0, 0);
        tracker.hover(Some('p'));
        assert_eq!(tracker.drop_target(), None);
    }

    #[test]
    fn test_press_during_drag_keeps_current_item() {
        let mut tracker = dragging(4);
        tracker.press(9, 0, 0);
        assert_eq!(tracker.dragging_item(), Some(4));
        tracker.cancel();
        assert!(!tracker.is_active());
    }
}
