//! Player Feedback
//!
//! Banner messages and bin highlights derived from engine results.

use sorting_engine::{Category, Outcome, Placement, RoundReport, RoundSummary};

/// How long a banner message stays up
pub const FEEDBACK_HIDE_MS: u32 = 3_000;
/// Delay between the last drop and the completion card
pub const COMPLETION_DELAY_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Info,
    Success,
    Warning,
    Error,
}

impl FeedbackKind {
    pub fn css_class(self) -> &'static str {
        match self {
            FeedbackKind::Info => "feedback-info",
            FeedbackKind::Success => "feedback-success",
            FeedbackKind::Warning => "feedback-warning",
            FeedbackKind::Error => "feedback-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn new(kind: FeedbackKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FeedbackKind::Info, message)
    }
}

pub fn for_placement(placement: &Placement) -> Feedback {
    let name = &placement.item.name;
    match placement.outcome {
        Outcome::Correct => Feedback::new(
            FeedbackKind::Success,
            format!("✅ Correct! {} belongs in the {} bin!", name, placement.bin.display_name()),
        ),
        Outcome::Incorrect { expected } => Feedback::new(
            FeedbackKind::Error,
            format!("❌ Wrong! {} should go in the {} bin!", name, expected.display_name()),
        ),
    }
}

pub fn for_completion(summary: &RoundSummary) -> Feedback {
    Feedback::new(
        FeedbackKind::Success,
        format!("{} {}", summary.rating.emoji(), summary.rating.message()),
    )
}

/// Warning for a round that can never finish, if any
pub fn for_round_report(report: &RoundReport) -> Option<Feedback> {
    match report.unplaceable.len() {
        0 => None,
        1 => Some(Feedback::new(FeedbackKind::Warning, "⚠️ One item has no matching bin")),
        n => Some(Feedback::new(FeedbackKind::Warning, format!("⚠️ {} items have no matching bin", n))),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Correct,
    Incorrect,
    /// The bin the item should have gone into
    Expected,
}

impl FlashKind {
    pub fn css_class(self) -> &'static str {
        match self {
            FlashKind::Correct => "correct",
            FlashKind::Incorrect => "incorrect",
            FlashKind::Expected => "hint-highlight",
        }
    }

    pub fn duration_ms(self) -> u32 {
        match self {
            FlashKind::Correct | FlashKind::Incorrect => 1_000,
            FlashKind::Expected => 2_000,
        }
    }
}

/// Temporary highlight on a bin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinFlash {
    pub id: u32,
    pub bin: Category,
    pub kind: FlashKind,
}

/// Bins to highlight after a placement
pub fn flashes_for(placement: &Placement) -> Vec<(Category, FlashKind)> {
    match placement.outcome {
        Outcome::Correct => vec![(placement.bin, FlashKind::Correct)],
        Outcome::Incorrect { expected } => vec![
            (placement.bin, FlashKind::Incorrect),
            (expected, FlashKind::Expected),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sorting_engine::{Item, ItemId};

    fn placement(bin: Category, outcome: Outcome) -> Placement {
        Placement {
            item: Item::new(1, "Old Phone", "📱", Category::Electronics),
            bin,
            outcome,
            round_complete: false,
        }
    }

    #[test]
    fn test_correct_message_names_the_bin() {
        let feedback = for_placement(&placement(Category::Electronics, Outcome::Correct));
        assert_eq!(feedback.kind, FeedbackKind::Success);
        assert_eq!(feedback.message, "✅ Correct! Old Phone belongs in the E-Waste bin!");
    }

    #[test]
    fn test_wrong_message_names_expected_bin() {
        let outcome = Outcome::Incorrect { expected: Category::Electronics };
        let feedback = for_placement(&placement(Category::Metal, outcome));
        assert_eq!(feedback.kind, FeedbackKind::Error);
        assert_eq!(feedback.message, "❌ Wrong! Old Phone should go in the E-Waste bin!");
    }

    #[test]
    fn test_wrong_drop_flashes_both_bins() {
        let outcome = Outcome::Incorrect { expected: Category::Electronics };
        let flashes = flashes_for(&placement(Category::Metal, outcome));
        assert_eq!(
            flashes,
            vec![
                (Category::Metal, FlashKind::Incorrect),
                (Category::Electronics, FlashKind::Expected),
            ]
        );
        assert_eq!(FlashKind::Expected.duration_ms(), 2_000);
    }

    #[test]
    fn test_completion_uses_rating_text() {
        let summary = RoundSummary::new(6, 6, 6);
        let feedback = for_completion(&summary);
        assert_eq!(feedback.message, "🎉 Perfect! You're a recycling expert! 🌟");
    }

    #[test]
    fn test_round_report_warning() {
        let clean = RoundReport { size: 2, unplaceable: vec![] };
        assert_eq!(for_round_report(&clean), None);

        let broken = RoundReport { size: 3, unplaceable: vec![ItemId(1), ItemId(3)] };
        let warning = for_round_report(&broken).expect("should warn");
        assert_eq!(warning.kind, FeedbackKind::Warning);
        assert_eq!(warning.message, "⚠️ 2 items have no matching bin");
    }
}
