//! Round scenarios played through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use word_scramble::dictionary::Dictionary;
use word_scramble::engine::{GameError, Rejection, SubmitResult, WordGame};
use word_scramble::wordlists::{DEFAULT_ROOT_WORD, EmbeddedRoots, ROOT_WORDS, RootWordFile};

fn dictionary() -> Dictionary {
    Dictionary::english(["silk", "worm", "worms", "milk", "mills", "silkworm", "owl", "slow"])
}

fn silkworm_game() -> WordGame<StdRng> {
    let mut game = WordGame::with_rng(StdRng::seed_from_u64(42));
    game.start_round(&["silkworm"]);
    game
}

fn rejected(reason: Rejection, word: &str) -> SubmitResult {
    SubmitResult::Rejected {
        reason,
        word: word.to_string(),
    }
}

#[test]
fn accepts_word_from_root() {
    let mut game = silkworm_game();
    let result = game.submit_word("silk", &dictionary()).unwrap();

    assert_eq!(
        result,
        SubmitResult::Accepted {
            word: "silk".to_string(),
            score: 4
        }
    );
    assert_eq!(game.round().unwrap().guesses(), ["silk"]);
}

#[test]
fn rejects_repeated_word_without_changing_state() {
    let mut game = silkworm_game();
    game.submit_word("silk", &dictionary()).unwrap();
    let before = game.round().unwrap().clone();

    let result = game.submit_word("silk", &dictionary()).unwrap();

    assert_eq!(result, rejected(Rejection::AlreadyUsed, "silk"));
    assert_eq!(game.round().unwrap(), &before);
}

#[test]
fn rejects_word_needing_a_letter_twice() {
    let mut game = silkworm_game();
    let result = game.submit_word("mills", &dictionary()).unwrap();
    assert_eq!(result, rejected(Rejection::NotPossible, "mills"));
}

#[test]
fn accepts_worms_since_root_has_one_s() {
    let mut game = silkworm_game();
    let result = game.submit_word("worms", &dictionary()).unwrap();
    assert!(result.is_accepted());
}

#[test]
fn rejects_letter_missing_from_root() {
    let mut game = silkworm_game();
    let result = game.submit_word("worse", &dictionary()).unwrap();
    assert_eq!(result, rejected(Rejection::NotPossible, "worse"));
}

#[test]
fn rejects_root_word() {
    let mut game = silkworm_game();
    let result = game.submit_word("silkworm", &dictionary()).unwrap();
    assert_eq!(result, rejected(Rejection::IsRootWord, "silkworm"));
}

#[test]
fn rejects_two_letter_word() {
    let mut game = silkworm_game();
    let result = game.submit_word("xq", &dictionary()).unwrap();
    assert_eq!(result, rejected(Rejection::TooShort, "xq"));
}

#[test]
fn rejects_made_up_word() {
    let mut game = silkworm_game();
    let result = game.submit_word("mrow", &dictionary()).unwrap();
    assert_eq!(result, rejected(Rejection::NotReal, "mrow"));
}

#[test]
fn symbols_are_stripped_before_the_rules() {
    let mut game = silkworm_game();

    let result = game.submit_word("silk™", &dictionary()).unwrap();
    assert_eq!(
        result,
        SubmitResult::Accepted {
            word: "silk".to_string(),
            score: 4
        }
    );

    let result = game.submit_word("🇺🇸worm", &dictionary()).unwrap();
    assert!(result.is_accepted());
    assert_eq!(game.round().unwrap().score(), 8);
}

#[test]
fn empty_list_falls_back_to_default_root() {
    let mut game = silkworm_game();
    game.submit_word("silk", &dictionary()).unwrap();

    let empty: Vec<String> = Vec::new();
    let round = game.start_round(&empty);

    assert_eq!(round.root_word(), DEFAULT_ROOT_WORD);
    assert_eq!(round.score(), 0);
    assert!(round.guesses().is_empty());
}

#[test]
fn embedded_roots_start_a_round() {
    let mut game = WordGame::with_rng(StdRng::seed_from_u64(1));
    let round = game.start_round_from(&EmbeddedRoots).unwrap();
    assert!(ROOT_WORDS.contains(&round.root_word()));
}

#[test]
fn missing_root_file_is_recoverable() {
    let mut game = WordGame::with_rng(StdRng::seed_from_u64(1));
    let missing = RootWordFile::new("/nonexistent/word_scramble/start.txt");

    let err = game.start_round_from(&missing).unwrap_err();
    assert!(matches!(err, GameError::ResourceUnavailable(_)));

    // The caller can fall back to another source
    assert!(game.start_round_from(&EmbeddedRoots).is_ok());
    assert!(game.is_active());
}

#[test]
fn full_round_with_embedded_dictionary() {
    let dictionary = Dictionary::embedded();
    let mut game = silkworm_game();

    for word in ["silk", "worm", "milk"] {
        assert!(game.submit_word(word, &dictionary).unwrap().is_accepted());
    }

    let round = game.round().unwrap();
    assert_eq!(round.guesses(), ["milk", "worm", "silk"]);
    assert_eq!(round.score(), 12);
}

#[test]
fn alert_text_for_each_rejection() {
    let mut game = silkworm_game();
    game.submit_word("silk", &dictionary()).unwrap();
    let root = game.round().unwrap().root_word().to_string();

    // One input per rule, in pipeline order
    let inputs = [
        ("xq", "Too short!", "Try again!".to_string()),
        ("silk", "Word already used!", "Oops! Try again".to_string()),
        (
            "worse",
            "Word not possible",
            "You can't spell 'worse' from 'SILKWORM'!".to_string(),
        ),
        ("mrow", "Word not recognized", "You can't just make up a word!".to_string()),
        ("silkworm", "This is the given word", "Think outside the box!".to_string()),
    ];

    for (reason, (input, title, message)) in Rejection::ALL.into_iter().zip(inputs) {
        let result = game.submit_word(input, &dictionary()).unwrap();
        assert_eq!(result.rejection(), Some(reason));
        assert_eq!(reason.title(), title);
        assert_eq!(reason.message(result.word(), &root), message);
    }
}
