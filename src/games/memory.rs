//! Memory Cards: a 4×4 grid of paired symbols. Matching pairs stay open, a
//! mismatched pair flips back after a short delay.

use crate::games::{ScreenCommand, navigation_command};
use crate::shuffle::shuffle;
use crate::timer::Scheduler;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

pub const SYMBOLS: [&str; 8] = ["🍎", "🎮", "🌟", "🎵", "🚀", "🎨", "🌈", "🎭"];
pub const GRID_COLUMNS: usize = 4;
pub const MISMATCH_DELAY_MS: u32 = 900;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardState
{
    Hidden,
    FaceUp,
    Matched,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card
{
    pub symbol: &'static str,
    pub state: CardState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome
{
    Ignored,
    Revealed,
    Matched
    {
        complete: bool,
    },
    Mismatched,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MemoryAction
{
    HidePair(usize, usize),
}

#[derive(Debug)]
pub struct MemorySession
{
    cards: Vec<Card>,
    selected: Vec<usize>,
    matched_pairs: usize,
    locked: bool,
    timer: Scheduler<MemoryAction>,
}

impl MemorySession
{
    pub fn new(rng: &mut impl Rng) -> Self
    {
        let mut deck: Vec<&'static str> = SYMBOLS.iter().chain(SYMBOLS.iter()).copied().collect();
        shuffle(rng, &mut deck);
        let cards = deck
            .into_iter()
            .map(|symbol| Card {
                symbol,
                state: CardState::Hidden,
            })
            .collect();
        tracing::debug!("memory session started");

        Self {
            cards,
            selected: Vec::with_capacity(2),
            matched_pairs: 0,
            locked: false,
            timer: Scheduler::new(),
        }
    }

    pub fn flip(&mut self, index: usize) -> FlipOutcome
    {
        if self.locked {
            return FlipOutcome::Ignored;
        }
        match self.cards.get(index) {
            Some(card) if card.state == CardState::Hidden => {}
            _ => return FlipOutcome::Ignored,
        }

        self.cards[index].state = CardState::FaceUp;
        self.selected.push(index);
        if self.selected.len() < 2 {
            return FlipOutcome::Revealed;
        }

        self.locked = true;
        self.check_match()
    }

    fn check_match(&mut self) -> FlipOutcome
    {
        let (a, b) = (self.selected[0], self.selected[1]);
        if self.cards[a].symbol == self.cards[b].symbol {
            self.cards[a].state = CardState::Matched;
            self.cards[b].state = CardState::Matched;
            self.matched_pairs += 1;
            self.selected.clear();
            self.locked = false;
            let complete = self.is_complete();
            if complete {
                tracing::info!(pairs = self.matched_pairs, "memory board cleared");
            }
            FlipOutcome::Matched { complete }
        } else {
            self.timer
                .schedule(MemoryAction::HidePair(a, b), MISMATCH_DELAY_MS);
            FlipOutcome::Mismatched
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32)
    {
        if let Some(MemoryAction::HidePair(a, b)) = self.timer.tick(elapsed_ms) {
            self.cards[a].state = CardState::Hidden;
            self.cards[b].state = CardState::Hidden;
            self.selected.clear();
            self.locked = false;
        }
    }

    pub fn cards(&self) -> &[Card]
    {
        &self.cards
    }

    pub fn matched_pairs(&self) -> usize
    {
        self.matched_pairs
    }

    /// Pairs needed to clear the board; tied to the symbol list.
    pub fn total_pairs(&self) -> usize
    {
        SYMBOLS.len()
    }

    pub fn is_complete(&self) -> bool
    {
        self.matched_pairs == self.total_pairs()
    }

    pub fn is_locked(&self) -> bool
    {
        self.locked
    }
}

pub fn render(session: &MemorySession, cursor: usize) -> Vec<String>
{
    let mut lines = Vec::new();
    lines.push("ZenMind - Memory Cards".to_string());
    lines.push(format!(
        "Pairs found: {} / {}",
        session.matched_pairs(),
        session.total_pairs()
    ));
    lines.push(String::new());

    for (row_idx, row) in session.cards().chunks(GRID_COLUMNS).enumerate() {
        let mut line = String::new();
        for (col_idx, card) in row.iter().enumerate() {
            let index = row_idx * GRID_COLUMNS + col_idx;
            let face = match card.state {
                CardState::Hidden => "\x1b[48;2;40;40;40m ?? \x1b[0m".to_string(),
                CardState::FaceUp => format!("\x1b[48;2;60;60;140m {} \x1b[0m", card.symbol),
                CardState::Matched => format!("\x1b[48;2;0;150;70m {} \x1b[0m", card.symbol),
            };
            let (open, close) = if index == cursor { ('[', ']') } else { (' ', ' ') };
            line.push(open);
            line.push_str(&face);
            line.push(close);
        }
        lines.push(line);
        lines.push(String::new());
    }

    if session.is_complete() {
        lines.push("🎉 You found all pairs!".to_string());
    }
    lines.push("Arrows move, Space/Enter flips. R restarts, M or Esc menu, D dashboard, Ctrl+C quits.".to_string());
    lines
}

pub fn handle_key(session: &mut MemorySession, cursor: &mut usize, key: KeyEvent) -> ScreenCommand
{
    match key.code {
        KeyCode::Left => *cursor = move_cursor(*cursor, -1, 0),
        KeyCode::Right => *cursor = move_cursor(*cursor, 1, 0),
        KeyCode::Up => *cursor = move_cursor(*cursor, 0, -1),
        KeyCode::Down => *cursor = move_cursor(*cursor, 0, 1),
        KeyCode::Char(' ') | KeyCode::Enter => {
            session.flip(*cursor);
        }
        _ => return navigation_command(key),
    }
    ScreenCommand::Stay
}

/// Moves the grid cursor, clamping at the edges.
pub fn move_cursor(cursor: usize, dx: isize, dy: isize) -> usize
{
    let rows = (SYMBOLS.len() * 2) / GRID_COLUMNS;
    let col = (cursor % GRID_COLUMNS) as isize + dx;
    let row = (cursor / GRID_COLUMNS) as isize + dy;
    let col = col.clamp(0, GRID_COLUMNS as isize - 1) as usize;
    let row = row.clamp(0, rows as isize - 1) as usize;
    row * GRID_COLUMNS + col
}
