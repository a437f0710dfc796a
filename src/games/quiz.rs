//! Quick Quiz: eight fixed multiple-choice questions.

use crate::games::{ScreenCommand, navigation_command};
use crossterm::event::{KeyCode, KeyEvent};

pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizItem
{
    pub question: &'static str,
    pub options: [&'static str; OPTION_COUNT],
    pub answer: usize,
}

pub static QUIZ_ITEMS: [QuizItem; 8] = [
    QuizItem {
        question: "What is the capital of France?",
        options: ["Berlin", "Madrid", "Paris", "Rome"],
        answer: 2,
    },
    QuizItem {
        question: "Which planet is known as the Red Planet?",
        options: ["Earth", "Mars", "Jupiter", "Venus"],
        answer: 1,
    },
    QuizItem {
        question: "How many sides does a hexagon have?",
        options: ["5", "6", "7", "8"],
        answer: 1,
    },
    QuizItem {
        question: "What is 7 × 8?",
        options: ["54", "56", "48", "64"],
        answer: 1,
    },
    QuizItem {
        question: "Which gas do plants absorb from the air?",
        options: ["Oxygen", "Nitrogen", "Carbon Dioxide", "Hydrogen"],
        answer: 2,
    },
    QuizItem {
        question: "What is the largest ocean on Earth?",
        options: ["Atlantic", "Indian", "Arctic", "Pacific"],
        answer: 3,
    },
    QuizItem {
        question: "Who wrote Romeo and Juliet?",
        options: ["Charles Dickens", "William Shakespeare", "Mark Twain", "Jane Austen"],
        answer: 1,
    },
    QuizItem {
        question: "What is the chemical symbol for water?",
        options: ["CO₂", "O₂", "H₂O", "NaCl"],
        answer: 2,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark
{
    Open,
    Disabled,
    Correct,
    Wrong,
}

#[derive(Debug, Clone)]
pub struct QuizSession
{
    items: &'static [QuizItem],
    index: usize,
    score: usize,
    chosen: Option<usize>,
    finished: bool,
}

impl QuizSession
{
    pub fn new() -> Self
    {
        tracing::debug!(questions = QUIZ_ITEMS.len(), "quiz started");
        Self {
            items: &QUIZ_ITEMS,
            index: 0,
            score: 0,
            chosen: None,
            finished: false,
        }
    }

    /// Records the player's pick. Only the first pick per question counts.
    pub fn select_answer(&mut self, choice: usize) -> bool
    {
        if self.finished || self.chosen.is_some() || choice >= OPTION_COUNT {
            return false;
        }
        self.chosen = Some(choice);
        let correct = choice == self.current().answer;
        if correct {
            self.score += 1;
        }
        true
    }

    /// Moves past an answered question, ending the quiz after the last one.
    pub fn advance(&mut self) -> bool
    {
        if self.finished || self.chosen.is_none() {
            return false;
        }
        self.index += 1;
        self.chosen = None;
        if self.index >= self.items.len() {
            self.finished = true;
            tracing::info!(score = self.score, "quiz finished");
        }
        true
    }

    pub fn current(&self) -> &QuizItem
    {
        &self.items[self.index.min(self.items.len().saturating_sub(1))]
    }

    pub fn option_marks(&self) -> [OptionMark; OPTION_COUNT]
    {
        let Some(chosen) = self.chosen else {
            return [OptionMark::Open; OPTION_COUNT];
        };
        let answer = self.current().answer;
        let mut marks = [OptionMark::Disabled; OPTION_COUNT];
        marks[answer] = OptionMark::Correct;
        if chosen != answer {
            marks[chosen] = OptionMark::Wrong;
        }
        marks
    }

    pub fn is_answered(&self) -> bool
    {
        self.chosen.is_some()
    }

    pub fn score(&self) -> usize
    {
        self.score
    }

    pub fn question_number(&self) -> usize
    {
        (self.index + 1).min(self.items.len())
    }

    pub fn total(&self) -> usize
    {
        self.items.len()
    }

    pub fn is_finished(&self) -> bool
    {
        self.finished
    }

    pub fn result_text(&self) -> Option<String>
    {
        self.finished
            .then(|| format!("🏆 Quiz Done!  You scored  {} / {}", self.score, self.items.len()))
    }
}

impl Default for QuizSession
{
    fn default() -> Self
    {
        Self::new()
    }
}

pub fn handle_key(session: &mut QuizSession, key: KeyEvent) -> ScreenCommand
{
    if session.is_finished() {
        return navigation_command(key);
    }
    match key.code {
        KeyCode::Char(ch @ '1'..='4') => {
            session.select_answer(ch as usize - '1' as usize);
            ScreenCommand::Stay
        }
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => {
            session.advance();
            ScreenCommand::Stay
        }
        _ => navigation_command(key),
    }
}

pub fn render(session: &QuizSession) -> Vec<String>
{
    let mut lines = Vec::new();
    lines.push("ZenMind - Quick Quiz".to_string());
    lines.push(format!(
        "Question {} / {}  Score: {}",
        session.question_number(),
        session.total(),
        session.score()
    ));
    lines.push(String::new());

    if let Some(result) = session.result_text() {
        lines.push(result);
        lines.push(String::new());
        lines.push("R plays again, M menu, D dashboard.".to_string());
        return lines;
    }

    let item = session.current();
    lines.push(item.question.to_string());
    lines.push(String::new());
    for (idx, (option, mark)) in item.options.iter().zip(session.option_marks()).enumerate() {
        let text = format!(" {}. {} ", idx + 1, option);
        let line = match mark {
            OptionMark::Open => text,
            OptionMark::Disabled => format!("\x1b[2m{}\x1b[0m", text),
            OptionMark::Correct => format!("\x1b[48;2;0;150;70m{}\x1b[0m", text),
            OptionMark::Wrong => format!("\x1b[48;2;150;20;20m{}\x1b[0m", text),
        };
        lines.push(line);
    }
    lines.push(String::new());
    if session.is_answered() {
        lines.push("Next → press Enter".to_string());
    } else {
        lines.push("Pick 1-4. M or Esc menu, D dashboard.".to_string());
    }
    lines
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn correct_pick_counts_once()
    {
        let mut session = QuizSession::new();
        assert_eq!(session.current().options[2], "Paris");
        assert!(session.select_answer(2));
        assert_eq!(session.score(), 1);
        assert!(!session.select_answer(2));
        assert!(!session.select_answer(0));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn wrong_pick_marks_both_options()
    {
        let mut session = QuizSession::new();
        assert_eq!(session.option_marks(), [OptionMark::Open; 4]);
        session.select_answer(0);
        assert_eq!(
            session.option_marks(),
            [
                OptionMark::Wrong,
                OptionMark::Disabled,
                OptionMark::Correct,
                OptionMark::Disabled
            ]
        );
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn cannot_skip_an_unanswered_question()
    {
        let mut session = QuizSession::new();
        assert!(!session.advance());
        assert_eq!(session.question_number(), 1);
        session.select_answer(1);
        assert!(session.advance());
        assert_eq!(session.question_number(), 2);
        assert!(!session.is_answered());
    }

    #[test]
    fn out_of_range_choice_is_ignored()
    {
        let mut session = QuizSession::new();
        assert!(!session.select_answer(4));
        assert!(!session.is_answered());
    }

    #[test]
    fn perfect_run()
    {
        let mut session = QuizSession::new();
        while !session.is_finished() {
            let answer = session.current().answer;
            session.select_answer(answer);
            session.advance();
        }
        assert_eq!(session.score(), 8);
        assert_eq!(session.result_text().as_deref(), Some("🏆 Quiz Done!  You scored  8 / 8"));
    }

    #[test]
    fn current_question_survives_the_end()
    {
        let mut session = QuizSession::new();
        for _ in 0..QUIZ_ITEMS.len() {
            session.select_answer(0);
            session.advance();
        }
        assert!(session.is_finished());
        assert_eq!(session.current(), &QUIZ_ITEMS[QUIZ_ITEMS.len() - 1]);
        assert_eq!(session.question_number(), QUIZ_ITEMS.len());
    }

    #[test]
    fn every_item_has_a_valid_answer()
    {
        for item in &QUIZ_ITEMS {
            assert!(item.answer < OPTION_COUNT, "{}", item.question);
        }
    }
}
