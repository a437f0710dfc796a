//! Word Puzzle: unscramble eight fixed words with the help of a hint.

use crate::games::{Feedback, ScreenCommand, edit_line, exit_command, navigation_command};
use crate::shuffle::shuffle;
use crate::timer::Scheduler;
use crate::words::{WORD_ITEMS, WordItem};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use rand::rngs::StdRng;

pub const NEXT_DELAY_MS: u32 = 950;

/// Shuffles the letters until they differ from `word`. Words whose letters are all
/// the same have no other order and come back unchanged.
pub fn scramble(rng: &mut impl Rng, word: &str) -> String
{
    let mut letters: Vec<char> = word.chars().collect();
    if letters.windows(2).all(|pair| pair[0] == pair[1]) {
        return word.to_string();
    }
    loop {
        shuffle(rng, &mut letters);
        let candidate: String = letters.iter().collect();
        if candidate != word {
            return candidate;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission
{
    Ignored,
    Accepted
    {
        correct: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WordAction
{
    NextRound,
    Finish,
}

#[derive(Debug)]
pub struct WordSession
{
    rng: StdRng,
    items: &'static [WordItem],
    index: usize,
    score: usize,
    scrambled: String,
    feedback: Option<Feedback>,
    finished: bool,
    timer: Scheduler<WordAction>,
}

impl WordSession
{
    pub fn new(rng: StdRng) -> Self
    {
        let mut session = Self {
            rng,
            items: &WORD_ITEMS,
            index: 0,
            score: 0,
            scrambled: String::new(),
            feedback: None,
            finished: false,
            timer: Scheduler::new(),
        };
        session.load_round();
        tracing::debug!(words = WORD_ITEMS.len(), "word puzzle started");
        session
    }

    fn load_round(&mut self)
    {
        let Some(item) = self.items.get(self.index) else {
            return;
        };
        self.scrambled = scramble(&mut self.rng, item.word);
        self.feedback = None;
    }

    pub fn submit_answer(&mut self, raw: &str) -> Submission
    {
        if self.finished || self.timer.is_pending() {
            return Submission::Ignored;
        }
        let typed = raw.trim().to_uppercase();
        if typed.is_empty() {
            return Submission::Ignored;
        }

        let word = self.current().word;
        let correct = typed == word;
        if correct {
            self.score += 1;
            self.feedback = Some(Feedback::correct());
        } else {
            self.feedback = Some(Feedback::wrong(format!("❌ Wrong! It was \"{}\"", word)));
        }
        self.index += 1;

        let action = if self.index >= self.items.len() {
            WordAction::Finish
        } else {
            WordAction::NextRound
        };
        self.timer.schedule(action, NEXT_DELAY_MS);
        Submission::Accepted { correct }
    }

    pub fn tick(&mut self, elapsed_ms: u32)
    {
        match self.timer.tick(elapsed_ms) {
            Some(WordAction::NextRound) => self.load_round(),
            Some(WordAction::Finish) => {
                self.finished = true;
                tracing::info!(score = self.score, "word puzzle finished");
            }
            None => {}
        }
    }

    /// The word on screen. Stays on the answered word while its feedback is showing.
    pub fn current(&self) -> &WordItem
    {
        let shown = if self.timer.is_pending() {
            self.index.saturating_sub(1)
        } else {
            self.index
        };
        &self.items[shown.min(self.items.len().saturating_sub(1))]
    }

    pub fn scrambled(&self) -> &str
    {
        &self.scrambled
    }

    pub fn score(&self) -> usize
    {
        self.score
    }

    pub fn word_number(&self) -> usize
    {
        (self.index + 1).min(self.items.len())
    }

    pub fn total(&self) -> usize
    {
        self.items.len()
    }

    pub fn feedback(&self) -> Option<&Feedback>
    {
        self.feedback.as_ref()
    }

    pub fn is_finished(&self) -> bool
    {
        self.finished
    }

    pub fn result_text(&self) -> Option<String>
    {
        self.finished
            .then(|| format!("🎯 Done!  You scored  {} / {}", self.score, self.items.len()))
    }
}

pub fn handle_key(session: &mut WordSession, input: &mut String, key: KeyEvent) -> ScreenCommand
{
    if session.is_finished() {
        return navigation_command(key);
    }
    if let Some(command) = exit_command(key) {
        return command;
    }
    if key.code == KeyCode::Enter {
        if session.submit_answer(input) != Submission::Ignored {
            input.clear();
        }
        return ScreenCommand::Stay;
    }
    edit_line(input, key, |ch| ch.is_alphabetic() || ch == ' ');
    ScreenCommand::Stay
}

pub fn render(session: &WordSession, input: &str) -> Vec<String>
{
    let mut lines = Vec::new();
    lines.push("ZenMind - Word Puzzle".to_string());
    lines.push(format!(
        "Word {} / {}  Score: {}",
        session.word_number(),
        session.total(),
        session.score()
    ));
    lines.push(String::new());

    if let Some(result) = session.result_text() {
        lines.push(result);
        lines.push(String::new());
        lines.push("R plays again, M or Esc menu, D dashboard.".to_string());
        return lines;
    }

    let spaced: Vec<String> = session.scrambled().chars().map(|ch| ch.to_string()).collect();
    lines.push(spaced.join(" "));
    lines.push(format!("Hint: {}", session.current().hint));
    lines.push(format!("> {}", input));
    lines.push(String::new());
    if let Some(feedback) = session.feedback() {
        lines.push(feedback.message.clone());
    }
    lines.push("Type the word and press Enter. Esc returns to the menu.".to_string());
    lines
}
