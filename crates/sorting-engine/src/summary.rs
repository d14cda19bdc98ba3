//! Round Summary
//!
//! Final score card shown once every item has been sorted.
//!
//! A finished round always has `score == total`, so the rating is graded
//! on accuracy: correct placements over all attempts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Perfect,
    Great,
    Good,
    KeepTrying,
}

impl Rating {
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            100.. => Rating::Perfect,
            80..=99 => Rating::Great,
            60..=79 => Rating::Good,
            _ => Rating::KeepTrying,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rating::Perfect => "Perfect! You're a recycling expert! 🌟",
            Rating::Great => "Great job! You're getting the hang of it! 👏",
            Rating::Good => "Good effort! Keep practicing! 👍",
            Rating::KeepTrying => "Keep trying! You'll get better! 💪",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Rating::Perfect => "🎉",
            Rating::Great => "👏",
            Rating::Good => "👍",
            Rating::KeepTrying => "💪",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: u32,
    pub total: usize,
    pub attempts: u32,
    /// Accuracy, `score / attempts`
    pub percent: u32,
    pub rating: Rating,
}

impl RoundSummary {
    pub fn new(score: u32, total: usize, attempts: u32) -> Self {
        let percent = percent_of(score, attempts as usize);
        Self {
            score,
            total,
            attempts,
            percent,
            rating: Rating::from_percent(percent),
        }
    }
}

/// `score / total` as a whole percentage, halves rounded up
pub fn percent_of(score: u32, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(score) / total as f64 * 100.0).round() as u32
}
