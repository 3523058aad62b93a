use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config::{SWIPE_REVERT_MS, SWIPE_THRESHOLD_PX};
use crate::schedule::Scheduled;

pub const HOVER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
pub const REST_TRANSFORM: &str = "translateY(0) scale(1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
}

impl SwipeDirection {
    pub fn transform(self) -> &'static str {
        match self {
            SwipeDirection::Up => "translateY(-5px)",
            SwipeDirection::Down => "translateY(5px)",
        }
    }
}

/// Classifies a vertical touch. Moves of `SWIPE_THRESHOLD_PX` or less are taps
/// or scroll jitter and yield nothing.
pub fn detect_swipe(start_y: i32, end_y: i32) -> Option<SwipeDirection> {
    let diff = start_y.saturating_sub(end_y);
    if diff.unsigned_abs() <= SWIPE_THRESHOLD_PX.unsigned_abs() {
        None
    } else if diff > 0 {
        Some(SwipeDirection::Up)
    } else {
        Some(SwipeDirection::Down)
    }
}

/// Displacement applied to every card after a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwipeNudge {
    pub offset: Option<SwipeDirection>,
    /// Bumped on every swipe so a repeat swipe in the same direction re-arms
    /// the revert timer.
    seq: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeAction {
    Swipe(SwipeDirection),
    Revert { seq: u32 },
}

impl SwipeNudge {
    pub fn pending_transition(&self) -> Option<Scheduled<NudgeAction>> {
        self.offset
            .map(|_| Scheduled::after(SWIPE_REVERT_MS, NudgeAction::Revert { seq: self.seq }))
    }
}

impl Reducible for SwipeNudge {
    type Action = NudgeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NudgeAction::Swipe(direction) => {
                debug!("Swipe {:?}", direction);
                Rc::new(SwipeNudge {
                    offset: Some(direction),
                    seq: self.seq.wrapping_add(1),
                })
            }
            NudgeAction::Revert { seq } if seq == self.seq && self.offset.is_some() => {
                Rc::new(SwipeNudge { offset: None, seq })
            }
            NudgeAction::Revert { .. } => self,
        }
    }
}

/// Inline transform for a card. A swipe nudge wins over hover.
pub fn card_transform(hovered: bool, nudge: Option<SwipeDirection>) -> &'static str {
    match (nudge, hovered) {
        (Some(direction), _) => direction.transform(),
        (None, true) => HOVER_TRANSFORM,
        (None, false) => REST_TRANSFORM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reduce(nudge: SwipeNudge, action: NudgeAction) -> SwipeNudge {
        *Rc::new(nudge).reduce(action)
    }

    #[test]
    fn test_short_moves_are_not_swipes() {
        assert_eq!(detect_swipe(500, 500), None);
        assert_eq!(detect_swipe(500, 400), None);
        assert_eq!(detect_swipe(400, 500), None);
    }

    #[test]
    fn test_finger_moving_up_is_swipe_up() {
        assert_eq!(detect_swipe(500, 399), Some(SwipeDirection::Up));
    }

    #[test]
    fn test_finger_moving_down_is_swipe_down() {
        assert_eq!(detect_swipe(100, 201), Some(SwipeDirection::Down));
    }

    #[test]
    fn test_swipe_displaces_then_schedules_revert() {
        let nudged = reduce(SwipeNudge::default(), NudgeAction::Swipe(SwipeDirection::Up));
        assert_eq!(nudged.offset, Some(SwipeDirection::Up));

        let task = nudged.pending_transition().expect("revert scheduled");
        assert_eq!(task.delay_ms, 200);

        let reverted = reduce(nudged, task.action);
        assert_eq!(reverted.offset, None);
        assert_eq!(reverted.pending_transition(), None);
    }

    #[test]
    fn test_stale_revert_is_ignored() {
        let first = reduce(SwipeNudge::default(), NudgeAction::Swipe(SwipeDirection::Up));
        let stale = first.pending_transition().unwrap().action;
        let second = reduce(first, NudgeAction::Swipe(SwipeDirection::Up));
        assert_ne!(first.pending_transition(), second.pending_transition());
        assert_eq!(reduce(second, stale).offset, Some(SwipeDirection::Up));
    }

    #[test]
    fn test_repeat_swipe_same_direction_rearms_revert() {
        let first = reduce(SwipeNudge::default(), NudgeAction::Swipe(SwipeDirection::Down));
        let second = reduce(first, NudgeAction::Swipe(SwipeDirection::Down));
        assert_eq!(first.offset, second.offset);

        let first_task = first.pending_transition().unwrap();
        let second_task = second.pending_transition().unwrap();
        assert_eq!(first_task.action, NudgeAction::Revert { seq: first.seq });
        assert_eq!(second_task.action, NudgeAction::Revert { seq: second.seq });
        // A changed task is what makes the timer hook drop and re-arm.
        assert_ne!(first_task, second_task);
    }

    #[test]
    fn test_card_transform_prefers_swipe() {
        assert_eq!(card_transform(false, None), REST_TRANSFORM);
        assert_eq!(card_transform(true, None), HOVER_TRANSFORM);
        assert_eq!(card_transform(true, Some(SwipeDirection::Down)), "translateY(5px)");
    }

    proptest! {
        #[test]
        fn test_swipe_threshold(start in -2000i32..2000, end in -2000i32..2000) {
            let diff = start - end;
            let swipe = detect_swipe(start, end);
            prop_assert_eq!(swipe.is_some(), diff.abs() > 100);
            if let Some(direction) = swipe {
                prop_assert_eq!(direction == SwipeDirection::Up, diff > 0);
            }
        }
    }
}
