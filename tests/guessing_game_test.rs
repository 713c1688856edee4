//! Tests for the guessing game engine.

use strictly_arcade::{DEFAULT_UPPER_BOUND, GuessOutcome, GuessingGame};

/// Finds the secret of a seeded round by bisection on a throwaway copy.
fn find_secret(upper_bound: u32, seed: u64) -> u32 {
    let mut search = GuessingGame::with_seed(upper_bound, seed).unwrap();
    let (mut lo, mut hi) = (1, upper_bound);
    loop {
        let mid = lo + (hi - lo) / 2;
        match search.guess(&mid.to_string()) {
            GuessOutcome::Correct(_) => return mid,
            GuessOutcome::TooSmall(_) => lo = mid + 1,
            GuessOutcome::TooLarge(_) => hi = mid - 1,
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}

#[test]
fn test_new_round_state() {
    let game = GuessingGame::new(DEFAULT_UPPER_BOUND).unwrap();
    assert_eq!(game.upper_bound(), 100);
    assert_eq!(game.attempts(), 0);
    assert_eq!(game.last_outcome(), None);
    assert!(!game.is_solved());
    assert_eq!(game.message(), "I'm thinking of a number between 1 and 100");
    assert_eq!(game.title(), "Guessing Game");
}

#[test]
fn test_zero_bound_is_invalid_argument() {
    let err = GuessingGame::new(0).unwrap_err();
    assert!(err.to_string().contains("Upper bound"));
}

#[test]
fn test_unparsable_guess_does_not_count() {
    let mut game = GuessingGame::new(100).unwrap();
    assert_eq!(game.guess("abc"), GuessOutcome::Invalid("abc".to_string()));
    assert_eq!(game.guess("4.5"), GuessOutcome::Invalid("4.5".to_string()));
    assert_eq!(game.guess(""), GuessOutcome::Invalid(String::new()));
    assert_eq!(game.attempts(), 0);
    assert_eq!(game.message(), "\"\" is not a valid guess");
}

#[test]
fn test_exact_secret_is_correct() {
    let secret = find_secret(100, 11);
    let mut game = GuessingGame::with_seed(100, 11).unwrap();

    let outcome = game.guess(&secret.to_string());
    assert_eq!(outcome, GuessOutcome::Correct(i64::from(secret)));
    assert_eq!(game.attempts(), 1);
    assert!(game.is_solved());
    assert_eq!(game.message(), "Right! You guessed it.");
}

#[test]
fn test_out_of_range_regardless_of_secret() {
    for seed in 0..20 {
        let mut game = GuessingGame::with_seed(10, seed).unwrap();
        for raw in ["15", "0", "-3", "11"] {
            assert!(matches!(
                game.guess(raw),
                GuessOutcome::OutOfRange { upper_bound: 10, .. }
            ));
        }
        assert_eq!(game.attempts(), 4);
        assert_eq!(game.message(), "Impossible! The secret is 1 - 10");
    }
}

#[test]
fn test_hints_point_towards_secret() {
    let secret = find_secret(1000, 5);
    let mut game = GuessingGame::with_seed(1000, 5).unwrap();
    for guess in 1..=1000u32 {
        let outcome = game.guess(&guess.to_string());
        let expected = match guess.cmp(&secret) {
            std::cmp::Ordering::Less => GuessOutcome::TooSmall(i64::from(guess)),
            std::cmp::Ordering::Greater => GuessOutcome::TooLarge(i64::from(guess)),
            std::cmp::Ordering::Equal => GuessOutcome::Correct(i64::from(guess)),
        };
        assert_eq!(outcome, expected);
    }
    assert_eq!(game.attempts(), 1000);
}

#[test]
fn test_whitespace_around_guess_is_ignored() {
    let secret = find_secret(50, 2);
    let mut game = GuessingGame::with_seed(50, 2).unwrap();
    assert!(game.guess(&format!("  {}\n", secret)).is_correct());
}

#[test]
fn test_attempts_only_increase() {
    let mut game = GuessingGame::new(100).unwrap();
    let mut last = 0;
    for raw in ["1", "x", "200", "", "50", "??", "99"] {
        game.guess(raw);
        assert!(game.attempts() >= last);
        last = game.attempts();
    }
    assert_eq!(last, 4);
}

#[test]
fn test_next_round_doubles_bound() {
    let game = GuessingGame::new(100).unwrap();
    let next = GuessingGame::new(game.next_upper_bound()).unwrap();
    assert_eq!(next.upper_bound(), 200);
    assert_eq!(next.attempts(), 0);

    let huge = GuessingGame::new(u32::MAX).unwrap();
    assert_eq!(huge.next_upper_bound(), u32::MAX);
}
