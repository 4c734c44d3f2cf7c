use rand::{rngs::StdRng, Rng, SeedableRng};
use wordsprint::session::{Commit, Phase, Session};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// Apply a seeded random stream of text changes, commits and ticks, checking
/// the session invariants after every single event.
fn fuzz_round(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let list = words(&["cat", "dog", "cat", "bird", "fish", "ox"]);
    let mut session = Session::new(&list, rng.gen_range(1..6));
    let candidates = ["cat", "dog", "bird", "fish", "ox", "cow", " ", ""];

    let mut last_remaining = session.remaining_secs();
    let mut was_finished = false;

    for _ in 0..60 {
        let before = (
            session.score(),
            session.correct_words().to_vec(),
            session.current_index(),
        );
        let target = session.current_word().map(str::to_string);

        match rng.gen_range(0..3) {
            0 => {
                let text = candidates[rng.gen_range(0..candidates.len())];
                session.on_text_change(text);
            }
            1 => {
                let typed = session.typed_buffer().to_string();
                let outcome = session.on_commit_word();
                match outcome {
                    Commit::Correct => {
                        assert_eq!(Some(typed.trim()), target.as_deref().map(str::trim));
                        assert_eq!(session.correct_words().last(), target.as_ref());
                    }
                    Commit::Incorrect => {
                        assert_ne!(Some(typed.trim()), target.as_deref().map(str::trim));
                        assert_eq!(session.correct_words(), before.1.as_slice());
                    }
                    Commit::Ignored => {
                        assert!(was_finished || typed.trim().is_empty());
                    }
                }
            }
            _ => session.on_timer_tick(),
        }

        assert_eq!(session.score(), session.correct_words().len());
        assert!(session.remaining_secs() <= last_remaining);
        last_remaining = session.remaining_secs();

        if !session.has_finished() {
            assert!(session.current_index() < session.total_words());
        }
        if was_finished {
            assert!(session.has_finished());
            assert_eq!(
                (
                    session.score(),
                    session.correct_words().to_vec(),
                    session.current_index()
                ),
                before
            );
        }
        was_finished = session.has_finished();

        let attempted = session.current_index();
        assert_eq!(session.score() + session.wrong_words().len(), attempted);
    }
}

#[test]
fn invariants_hold_for_random_rounds() {
    for seed in 0..200 {
        fuzz_round(seed);
    }
}

#[test]
fn scenario_two_correct_words_exhaust_the_list() {
    let mut session = Session::with_order(words(&["cat", "dog"]), 10);

    session.on_text_change("c");
    session.on_timer_tick();
    session.on_text_change("cat");
    session.on_timer_tick();
    assert_eq!(session.on_commit_word(), Commit::Correct);
    session.on_text_change("dog");
    session.on_timer_tick();
    assert_eq!(session.on_commit_word(), Commit::Correct);

    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(session.score(), 2);
    assert_eq!(session.wpm(), 40);
}

#[test]
fn scenario_wrong_word_advances_without_scoring() {
    let mut session = Session::with_order(words(&["cat", "emu"]), 10);

    session.on_text_change("dog");
    assert_eq!(session.on_commit_word(), Commit::Incorrect);

    assert_eq!(session.score(), 0);
    assert!(session.correct_words().is_empty());
    assert_eq!(session.current_index(), 1);
}

#[test]
fn scenario_space_on_empty_buffer_is_a_no_op() {
    let mut session = Session::with_order(words(&["cat", "emu"]), 10);
    let before = format!("{session:?}");

    assert_eq!(session.on_commit_word(), Commit::Ignored);

    assert_eq!(format!("{session:?}"), before);
}

#[test]
fn restart_yields_a_permutation_of_the_same_multiset() {
    let list = words(&["a", "b", "b", "c", "d", "e", "f"]);
    let mut session = Session::new(&list, 5);
    session.on_text_change("zzz");
    session.on_commit_word();

    for _ in 0..20 {
        session.restart();

        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
        assert!(session.correct_words().is_empty());

        let mut shuffled = session.shuffled_words().to_vec();
        shuffled.sort();
        assert_eq!(shuffled, list);
    }
}
