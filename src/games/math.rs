//! Math Sprint: ten random +, − and × questions, answered by typing.

use crate::games::{Feedback, ScreenCommand, edit_line, exit_command, navigation_command};
use crate::timer::Scheduler;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use rand::rngs::StdRng;
use std::fmt;

pub const QUESTION_COUNT: u32 = 10;
pub const NEXT_DELAY_MS: u32 = 850;
const ADD_SUB_MAX: i64 = 20;
const MUL_MAX: i64 = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator
{
    Add,
    Subtract,
    Multiply,
}

impl Operator
{
    pub fn symbol(self) -> char
    {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '−',
            Operator::Multiply => '×',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question
{
    pub left: i64,
    pub operator: Operator,
    pub right: i64,
    pub answer: i64,
}

impl fmt::Display for Question
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}  {}  {}  = ?", self.left, self.operator.symbol(), self.right)
    }
}

pub fn generate_question(rng: &mut impl Rng) -> Question
{
    let operator = match rng.gen_range(0..3) {
        0 => Operator::Add,
        1 => Operator::Subtract,
        _ => Operator::Multiply,
    };
    let (left, right, answer) = match operator {
        Operator::Add => {
            let a = rng.gen_range(1..=ADD_SUB_MAX);
            let b = rng.gen_range(1..=ADD_SUB_MAX);
            (a, b, a + b)
        }
        Operator::Subtract => {
            let a = rng.gen_range(1..=ADD_SUB_MAX);
            let b = rng.gen_range(1..=a);
            (a, b, a - b)
        }
        Operator::Multiply => {
            let a = rng.gen_range(1..=MUL_MAX);
            let b = rng.gen_range(1..=MUL_MAX);
            (a, b, a * b)
        }
    };
    Question {
        left,
        operator,
        right,
        answer,
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
enum MathAction
{
    NextQuestion,
    Finish,
}

#[derive(Debug)]
pub struct MathSession
{
    rng: StdRng,
    question: Question,
    score: u32,
    answered: u32,
    feedback: Option<Feedback>,
    finished: bool,
    timer: Scheduler<MathAction>,
}

impl MathSession
{
    pub fn new(mut rng: StdRng) -> Self
    {
        let question = generate_question(&mut rng);
        tracing::debug!(%question, "math sprint started");
        Self {
            rng,
            question,
            score: 0,
            answered: 0,
            feedback: None,
            finished: false,
            timer: Scheduler::new(),
        }
    }

    /// Scores a typed answer. Empty or non-integer input, and input arriving while
    /// the next question is still pending, change nothing.
    pub fn submit_answer(&mut self, raw: &str) -> Submission
    {
        if self.answered >= QUESTION_COUNT || self.timer.is_pending() {
            return Submission::Ignored;
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Submission::Ignored;
        }
        let Ok(value) = trimmed.parse::<i64>() else {
            tracing::debug!(input = trimmed, "ignoring non-numeric answer");
            return Submission::Ignored;
        };

        let correct = value == self.question.answer;
        if correct {
            self.score += 1;
            self.feedback = Some(Feedback::correct());
        } else {
            self.feedback = Some(Feedback::wrong(format!(
                "❌ Wrong! Answer was {}",
                self.question.answer
            )));
        }
        self.answered += 1;

        let action = if self.answered >= QUESTION_COUNT {
            MathAction::Finish
        } else {
            MathAction::NextQuestion
        };
        self.timer.schedule(action, NEXT_DELAY_MS);
        Submission::Accepted { correct }
    }

    pub fn tick(&mut self, elapsed_ms: u32)
    {
        match self.timer.tick(elapsed_ms) {
            Some(MathAction::NextQuestion) => {
                self.question = generate_question(&mut self.rng);
                self.feedback = None;
            }
            Some(MathAction::Finish) => {
                self.finished = true;
                tracing::info!(score = self.score, "math sprint finished");
            }
            None => {}
        }
    }

    pub fn question(&self) -> &Question
    {
        &self.question
    }

    pub fn score(&self) -> u32
    {
        self.score
    }

    pub fn answered(&self) -> u32
    {
        self.answered
    }

    /// 1-based number shown next to the question.
    pub fn question_number(&self) -> u32
    {
        (self.answered + 1).min(QUESTION_COUNT)
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
            .then(|| format!("🏁 Done!  You scored  {} / {}", self.score, QUESTION_COUNT))
    }
}

pub fn handle_key(session: &mut MathSession, input: &mut String, key: KeyEvent) -> ScreenCommand
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
    edit_line(input, key, |ch| ch.is_ascii_digit() || ch == '-');
    ScreenCommand::Stay
}

pub fn render(session: &MathSession, input: &str) -> Vec<String>
{
    let mut lines = Vec::new();
    lines.push("ZenMind - Math Sprint".to_string());
    lines.push(format!(
        "Question {} / {}  Score: {}",
        session.question_number(),
        QUESTION_COUNT,
        session.score()
    ));
    lines.push(String::new());

    if let Some(result) = session.result_text() {
        lines.push(result);
        lines.push(String::new());
        lines.push("R plays again, M or Esc menu, D dashboard.".to_string());
        return lines;
    }

    lines.push(session.question().to_string());
    lines.push(format!("> {}", input));
    lines.push(String::new());
    if let Some(feedback) = session.feedback() {
        lines.push(feedback.message.clone());
    }
    lines.push("Type your answer and press Enter. Esc returns to the menu.".to_string());
    lines
}
