//! Round Scenario Tests
//!
//! Whole-round behaviour of the engine, driven through the public API.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{Category, GameConfig, GameError, Item, ItemId, Outcome, ScoreSnapshot, SortingGame};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn paper_plastic_game() -> SortingGame {
        let mut game = SortingGame::seeded([Category::Paper, Category::Plastic], 42);
        game.start_round(vec![
            Item::new(1, "Newspaper", "📰", Category::Paper),
            Item::new(2, "Plastic Bottle", "🥤", Category::Plastic),
        ])
        .expect("round should start");
        game
    }

    fn builtin_game(seed: u64) -> (GameConfig, SortingGame) {
        let config = GameConfig::builtin().expect("builtin catalog");
        let game = SortingGame::from_config(&config, StdRng::seed_from_u64(seed)).expect("starter round");
        (config, game)
    }

    #[test]
    fn test_paper_plastic_walkthrough() {
        let mut game = paper_plastic_game();

        let first = game.attempt_placement(ItemId(1), Category::Plastic).unwrap();
        assert_eq!(first.outcome, Outcome::Incorrect { expected: Category::Paper });
        assert!(!first.round_complete);
        assert_eq!(game.current_score(), ScoreSnapshot { score: 0, attempts: 1 });

        let second = game.attempt_placement(ItemId(1), Category::Paper).unwrap();
        assert_eq!(second.outcome, Outcome::Correct);
        assert!(!second.round_complete);
        assert_eq!(game.current_score(), ScoreSnapshot { score: 1, attempts: 2 });

        let third = game.attempt_placement(ItemId(2), Category::Plastic).unwrap();
        assert_eq!(third.outcome, Outcome::Correct);
        assert!(third.round_complete);
        assert_eq!(game.current_score(), ScoreSnapshot { score: 2, attempts: 3 });
        assert!(game.is_completed());
    }

    #[test]
    fn test_double_fired_drop_scores_once() {
        let mut game = paper_plastic_game();

        assert!(game.attempt_placement(ItemId(1), Category::Paper).unwrap().is_correct());
        assert_eq!(
            game.attempt_placement(ItemId(1), Category::Paper),
            Err(GameError::UnknownItem(ItemId(1)))
        );
        assert_eq!(game.current_score(), ScoreSnapshot { score: 1, attempts: 1 });
        assert_eq!(game.bins()[0].sorted.len(), 1);
    }

    #[test]
    fn test_score_never_exceeds_attempts() {
        let (_, mut game) = builtin_game(5);

        // Each item gets one wrong drop, then the right one
        while !game.is_completed() {
            let item = game.unsorted()[0].clone();
            let wrong = Category::ALL
                .into_iter()
                .find(|c| *c != item.category)
                .unwrap();

            for bin in [wrong, item.category] {
                let before = game.current_score();
                let placement = game.attempt_placement(item.id, bin).unwrap();
                let after = game.current_score();

                assert!(after.score <= after.attempts);
                assert_eq!(after.attempts, before.attempts + 1);
                let still_pending = game.unsorted().iter().any(|i| i.id == item.id);
                if placement.is_correct() {
                    assert_eq!(after.score, before.score + 1);
                    assert!(!still_pending);
                } else {
                    assert_eq!(after.score, before.score);
                    assert!(still_pending);
                }
            }
        }
        assert_eq!(game.current_score(), ScoreSnapshot { score: 6, attempts: 12 });
        assert_eq!(game.summary().map(|s| s.percent), Some(50));
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let (_, mut game) = builtin_game(9);
        let pending: Vec<Item> = game.unsorted().to_vec();
        let total = pending.len();

        let completions: Vec<bool> = pending
            .iter()
            .map(|item| game.attempt_placement(item.id, item.category).unwrap().round_complete)
            .collect();

        assert_eq!(completions.iter().filter(|c| **c).count(), 1);
        assert_eq!(completions.last(), Some(&true));
        assert_eq!(game.current_score(), ScoreSnapshot { score: total as u32, attempts: total as u32 });

        // Late drops after completion are stale
        assert!(matches!(
            game.attempt_placement(pending[0].id, pending[0].category),
            Err(GameError::UnknownItem(_))
        ));
        assert!(game.is_completed());
    }

    #[test]
    fn test_oversized_challenge_leaves_round_untouched() {
        let mut game = paper_plastic_game();
        game.attempt_placement(ItemId(2), Category::Paper).unwrap();
        let pool = vec![Item::new(1, "Glass Jar", "🍶", Category::Glass)];

        let err = game.new_challenge(&pool, 2).unwrap_err();
        assert_eq!(err, GameError::InsufficientPool { requested: 2, available: 1 });
        assert_eq!(game.current_score(), ScoreSnapshot { score: 0, attempts: 1 });
        assert_eq!(game.unsorted().len(), 2);
    }

    #[test]
    fn test_seeded_challenges_are_reproducible() {
        let (config, mut first) = builtin_game(2024);
        let (_, mut second) = builtin_game(2024);

        let a = first.challenge_from_config(&config).unwrap();
        let b = second.challenge_from_config(&config).unwrap();
        assert_eq!(a, b);

        // A challenge is a fresh round
        assert_eq!(first.current_score(), ScoreSnapshot::default());
        assert_eq!(first.round_size(), config.challenge_size);
    }

    #[test]
    fn test_challenge_draws_distinct_pool_items() {
        let (config, mut game) = builtin_game(77);
        let (drawn, _) = game.challenge_from_config(&config).unwrap();

        let mut names: Vec<&str> = drawn.iter().map(|i| i.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), drawn.len());
        assert!(drawn
            .iter()
            .all(|item| config.challenge_pool.iter().any(|spec| spec.name == item.name)));
    }

    #[test]
    fn test_new_round_after_completion_is_playable() {
        let mut game = paper_plastic_game();
        game.attempt_placement(ItemId(1), Category::Paper).unwrap();
        game.attempt_placement(ItemId(2), Category::Plastic).unwrap();
        assert!(game.is_completed());

        game.start_round(vec![Item::new(1, "Milk Jug", "🥛", Category::Plastic)])
            .unwrap();
        assert!(!game.is_completed());
        let placement = game.attempt_placement(ItemId(1), Category::Plastic).unwrap();
        assert!(placement.round_complete);
    }

    #[test]
    fn test_item_ids_are_never_reused_across_rounds() {
        let (config, mut game) = builtin_game(1);
        let mut seen: HashMap<ItemId, Item> = HashMap::new();
        let mut record = |items: &[Item]| {
            for item in items {
                if let Some(previous) = seen.insert(item.id, item.clone()) {
                    assert_eq!(&previous, item, "{} named two different items", item.id);
                }
            }
        };

        record(game.unsorted());
        for _ in 0..3 {
            // mid-round, then straight into the next challenge
            let first = game.unsorted()[0].clone();
            game.attempt_placement(first.id, first.category).unwrap();
            let (drawn, _) = game.challenge_from_config(&config).unwrap();
            record(&drawn);
        }
        game.reset(&config).unwrap();
        record(game.unsorted());

        // starter + three challenges + reset, all with their own ids
        assert_eq!(seen.len(), 6 * 5);
    }
}
