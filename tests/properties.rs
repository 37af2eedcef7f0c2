//! Round invariants under arbitrary submissions

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use word_scramble::core::LetterCounts;
use word_scramble::dictionary::Dictionary;
use word_scramble::engine::{RoundState, WordGame};
use word_scramble::wordlists::ROOT_WORDS;

/// Accept everything the letter rules allow so the invariants get exercised
fn permissive_dictionary() -> Dictionary {
    let mut words: Vec<String> = Vec::new();
    for root in ROOT_WORDS {
        let chars: Vec<char> = root.chars().collect();
        for start in 0..chars.len() {
            for end in start + 1..=chars.len() {
                words.push(chars[start..end].iter().collect());
            }
        }
    }
    Dictionary::english(words)
}

fn check_invariants(round: &RoundState) {
    let root = LetterCounts::new(round.root_word());

    let total: usize = round.guesses().iter().map(|w| w.chars().count()).sum();
    assert_eq!(round.score(), total);

    let unique: HashSet<&String> = round.guesses().iter().collect();
    assert_eq!(unique.len(), round.guesses().len());

    for word in round.guesses() {
        assert!(word.chars().count() > 2);
        assert_ne!(word, round.root_word());
        assert!(root.can_spell(word));
    }
}

fn candidate() -> impl Strategy<Value = String> {
    prop_oneof![
        // Fragments of the root word, most of them real in the permissive dictionary
        (0usize..8, 1usize..9).prop_map(|(start, len)| {
            let root = "silkworm";
            let end = (start + len).min(root.len());
            root[start..end].to_string()
        }),
        "[a-zA-Z$+ ]{0,10}",
    ]
}

proptest! {
    #[test]
    fn invariants_hold_after_any_sequence(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(candidate(), 0..40),
    ) {
        let dictionary = permissive_dictionary();
        let mut game = WordGame::with_rng(StdRng::seed_from_u64(seed));
        game.start_round(&["silkworm"]);

        for input in &inputs {
            game.submit_word(input, &dictionary).unwrap();
            check_invariants(game.round().unwrap());
        }
    }

    #[test]
    fn rejection_leaves_round_untouched(
        inputs in proptest::collection::vec(candidate(), 1..30),
    ) {
        let dictionary = permissive_dictionary();
        let mut game = WordGame::with_rng(StdRng::seed_from_u64(0));
        game.start_round(&["silkworm"]);

        for input in &inputs {
            let before = game.round().unwrap().clone();
            let result = game.submit_word(input, &dictionary).unwrap();
            if !result.is_accepted() {
                prop_assert_eq!(game.round().unwrap(), &before);
            }
        }
    }

    #[test]
    fn start_round_always_has_a_root(
        seed in any::<u64>(),
        words in proptest::collection::vec("[a-z ]{0,8}", 0..10),
    ) {
        let mut game = WordGame::with_rng(StdRng::seed_from_u64(seed));
        let round = game.start_round(&words);
        prop_assert!(!round.root_word().is_empty());
        prop_assert_eq!(round.score(), 0);
        prop_assert!(round.guesses().is_empty());
    }

    #[test]
    fn can_spell_any_rearrangement_of_a_subset(
        root in "[a-e]{1,10}",
        mask in proptest::collection::vec(any::<bool>(), 10),
    ) {
        let mut picked: Vec<char> = root
            .chars()
            .zip(mask.iter())
            .filter(|&(_, &keep)| keep)
            .map(|(c, _)| c)
            .collect();
        picked.reverse();
        let candidate: String = picked.into_iter().collect();

        prop_assert!(LetterCounts::new(&root).can_spell(&candidate));
    }
}
