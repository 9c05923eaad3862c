//! Property tests over arbitrary shuffles.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warsim::{Card, DECK_SIZE, Deck, Game, GameOptions, HAND_SIZE, PlayError, Rank, Suit};

fn sort_key(card: &Card) -> (u8, u8) {
    (card.suit as u8, card.rank.ordinal())
}

proptest! {
    #[test]
    fn shuffled_deck_holds_every_card_once(seed in any::<u64>()) {
        let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(deck.len(), DECK_SIZE);

        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        prop_assert_eq!(unique.len(), DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                prop_assert!(deck.contains(&Card::new(rank, suit)));
            }
        }
    }

    #[test]
    fn shuffle_only_reorders(seed in any::<u64>()) {
        let original = Deck::new();
        let mut shuffled = original.clone();
        shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        let mut before = original.cards().to_vec();
        let mut after = shuffled.cards().to_vec();
        before.sort_by_key(sort_key);
        after.sort_by_key(sort_key);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn deal_partitions_the_deck(seed in any::<u64>()) {
        let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(seed));
        let (first, second) = deck.deal();
        prop_assert_eq!(first.len(), HAND_SIZE);
        prop_assert_eq!(second.len(), HAND_SIZE);

        let first_set: HashSet<Card> = first.iter().copied().collect();
        prop_assert!(second.iter().all(|card| !first_set.contains(card)));

        let joined: Vec<Card> = first.iter().chain(second.iter()).copied().collect();
        prop_assert_eq!(joined.as_slice(), deck.cards());
    }

    #[test]
    fn compare_is_antisymmetric_and_follows_rank(a in 0usize..DECK_SIZE, b in 0usize..DECK_SIZE) {
        let deck = Deck::new();
        let x = deck.cards()[a];
        let y = deck.cards()[b];

        prop_assert_eq!(x.compare(&y).signum(), -y.compare(&x).signum());
        prop_assert_eq!(x.compare(&y).signum(), x.rank.cmp(&y.rank) as i8);
    }

    #[test]
    fn rounds_conserve_cards_and_points(seed in any::<u64>()) {
        let mut game = Game::new(GameOptions::default(), seed);
        let mut rounds = 0;

        while !game.is_finished() {
            game.play_round().unwrap();
            rounds += 1;
            prop_assert!(rounds <= HAND_SIZE);

            let left1 = game.player1().cards_remaining();
            let left2 = game.player2().cards_remaining();
            prop_assert_eq!(left1, left2);
            prop_assert_eq!(left1 + left2, DECK_SIZE - 2 * rounds);
            prop_assert_eq!(left1 + left2 + game.cards_played(), DECK_SIZE);
            prop_assert_eq!(
                game.player1().score() + game.player2().score() + game.ties(),
                game.rounds_played()
            );
        }

        prop_assert_eq!(rounds, HAND_SIZE);
        prop_assert_eq!(game.play_round().unwrap_err(), PlayError::GameOver);
    }

    #[test]
    fn final_scores_account_for_every_round(seed in any::<u64>()) {
        let mut game = Game::new(GameOptions::default(), seed);
        let result = game.play_game();

        prop_assert_eq!(result.rounds_played, HAND_SIZE);
        prop_assert_eq!(result.player1.score + result.player2.score + result.ties, HAND_SIZE);
        prop_assert!(result.player1.score <= HAND_SIZE);
        prop_assert!(result.player2.score <= HAND_SIZE);
    }
}
