//! End-to-end runs through the shell, no terminal involved.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use zenmind_games::games::GameId;
use zenmind_games::games::math::{NEXT_DELAY_MS as MATH_DELAY_MS, QUESTION_COUNT};
use zenmind_games::games::memory::{CardState, FlipOutcome, MISMATCH_DELAY_MS};
use zenmind_games::games::word::NEXT_DELAY_MS as WORD_DELAY_MS;
use zenmind_games::shell::{LaunchParams, Panel, Shell};
use zenmind_games::storage::{FileStorage, USER_KEY};
use zenmind_games::words::WORD_ITEMS;

fn shell(seed: u64) -> Shell
{
    Shell::new(StdRng::seed_from_u64(seed))
}

#[test]
fn test_perfect_quiz_shows_eight_of_eight()
{
    let mut shell = shell(1);
    shell.activate("quiz-game");

    let Panel::Quiz(quiz) = shell.panel_mut() else {
        panic!("quiz panel expected");
    };
    while !quiz.is_finished() {
        let answer = quiz.current().answer;
        assert!(quiz.select_answer(answer));
        assert!(!quiz.select_answer(answer));
        assert!(quiz.advance());
    }
    let result = quiz.result_text().unwrap();
    assert!(result.ends_with("8 / 8"), "{result}");
}

#[test]
fn test_memory_game_through_the_shell()
{
    let mut shell = shell(2);
    shell.activate("memory");

    let Panel::Memory(memory) = shell.panel_mut() else {
        panic!("memory panel expected");
    };
    let symbols: Vec<&str> = memory.cards().iter().map(|card| card.symbol).collect();

    // Miss once on purpose, then wait for the cards to turn back.
    let miss = (1..symbols.len()).find(|&i| symbols[i] != symbols[0]).unwrap();
    memory.flip(0);
    assert_eq!(memory.flip(miss), FlipOutcome::Mismatched);
    shell.tick(MISMATCH_DELAY_MS);

    let Panel::Memory(memory) = shell.panel_mut() else {
        unreachable!();
    };
    assert!(memory.cards().iter().all(|card| card.state == CardState::Hidden));

    for first in 0..symbols.len() {
        if memory.cards()[first].state == CardState::Matched {
            continue;
        }
        let second = (first + 1..symbols.len())
            .find(|&i| symbols[i] == symbols[first])
            .unwrap();
        memory.flip(first);
        memory.flip(second);
    }
    assert!(memory.is_complete());
    assert_eq!(memory.matched_pairs(), 8);
}

#[test]
fn test_math_sprint_always_ends_after_ten()
{
    let mut shell = shell(3);
    shell.activate("math");
    for _ in 0..QUESTION_COUNT {
        let Panel::Math(math) = shell.panel_mut() else {
            unreachable!();
        };
        math.submit_answer("0");
        shell.tick(MATH_DELAY_MS);
    }
    let Panel::Math(math) = shell.panel() else {
        unreachable!();
    };
    assert!(math.is_finished());
    assert!(math.score() <= QUESTION_COUNT);
    assert_eq!(math.answered(), QUESTION_COUNT);
}

#[test]
fn test_word_puzzle_accepts_padded_lowercase()
{
    let mut shell = shell(4);
    shell.activate("word");
    for item in &WORD_ITEMS {
        let Panel::Word(word) = shell.panel_mut() else {
            unreachable!();
        };
        word.submit_answer(&format!("  {}  ", item.word.to_lowercase()));
        shell.tick(WORD_DELAY_MS);
    }
    let Panel::Word(word) = shell.panel() else {
        unreachable!();
    };
    assert_eq!(word.score(), 8);
    assert!(word.is_finished());
}

#[test]
fn test_restart_gives_a_fresh_session()
{
    let mut shell = shell(5);
    shell.activate("word");
    if let Panel::Word(word) = shell.panel_mut() {
        word.submit_answer("brain");
    }
    shell.restart();
    assert_eq!(shell.panel().game(), Some(GameId::Word));

    // The old session's pending round change went with it.
    shell.tick(WORD_DELAY_MS);
    let Panel::Word(word) = shell.panel() else {
        unreachable!();
    };
    assert_eq!(word.score(), 0);
    assert_eq!(word.word_number(), 1);
    assert_eq!(word.current().word, "BRAIN");
    assert!(word.feedback().is_none());
}

#[test]
fn test_dashboard_with_stored_user()
{
    let storage = FileStorage::parse(&format!(r#"{{"{USER_KEY}": "sam lee"}}"#)).unwrap();
    let mut shell = shell(6);
    let target = shell.return_to_dashboard("dashboard.html", &LaunchParams::default(), &storage);
    assert_eq!(target, "dashboard.html?user=sam%20lee");

    let empty: HashMap<String, String> = HashMap::new();
    let target = shell.return_to_dashboard("dashboard.html", &LaunchParams::default(), &empty);
    assert_eq!(target, "dashboard.html");
}
