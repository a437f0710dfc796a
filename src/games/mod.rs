pub mod math;
pub mod memory;
pub mod quiz;
pub mod word;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameId
{
    Memory,
    Math,
    Quiz,
    Word,
}

impl GameId
{
    pub const ALL: [GameId; 4] = [GameId::Memory, GameId::Math, GameId::Quiz, GameId::Word];

    pub fn name(self) -> &'static str
    {
        match self {
            GameId::Memory => "memory",
            GameId::Math => "math",
            GameId::Quiz => "quiz",
            GameId::Word => "word",
        }
    }
}

impl fmt::Display for GameId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGame(pub String);

impl FromStr for GameId
{
    type Err = UnknownGame;

    /// Accepts the short name or the panel id (`math`, `math-game`), any case.
    fn from_str(value: &str) -> Result<Self, Self::Err>
    {
        let lowered = value.trim().to_ascii_lowercase();
        let name = lowered.strip_suffix("-game").unwrap_or(&lowered);
        GameId::ALL
            .into_iter()
            .find(|id| id.name() == name)
            .ok_or_else(|| UnknownGame(value.to_string()))
    }
}

pub struct GameDescriptor
{
    pub id: GameId,
    pub title: &'static str,
    pub description: &'static str,
}

pub fn registry() -> Vec<GameDescriptor>
{
    vec![
        GameDescriptor {
            id: GameId::Memory,
            title: "Memory Cards",
            description: "Flip cards and find all 8 pairs",
        },
        GameDescriptor {
            id: GameId::Math,
            title: "Math Sprint",
            description: "10 quick sums, differences and products",
        },
        GameDescriptor {
            id: GameId::Quiz,
            title: "Quick Quiz",
            description: "8 multiple-choice questions",
        },
        GameDescriptor {
            id: GameId::Word,
            title: "Word Puzzle",
            description: "Unscramble 8 words with a hint",
        },
    ]
}

/// Result line shared by the scored games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback
{
    pub correct: bool,
    pub message: String,
}

impl Feedback
{
    pub fn correct() -> Self
    {
        Self {
            correct: true,
            message: "✅ Correct!".to_string(),
        }
    }

    pub fn wrong(message: String) -> Self
    {
        Self {
            correct: false,
            message,
        }
    }
}

/// What a game screen asks the app to do after a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenCommand
{
    Stay,
    Restart,
    Menu,
    Dashboard,
    Quit,
}

/// Keys that always mean "leave": Esc goes back to the menu, Ctrl+C quits.
pub fn exit_command(key: KeyEvent) -> Option<ScreenCommand>
{
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(ScreenCommand::Quit)
        }
        KeyCode::Esc => Some(ScreenCommand::Menu),
        _ => None,
    }
}

/// Single-letter shortcuts, for screens that are not taking typed answers.
pub fn navigation_command(key: KeyEvent) -> ScreenCommand
{
    if let Some(command) = exit_command(key) {
        return command;
    }
    match key.code {
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'r' => ScreenCommand::Restart,
            'm' => ScreenCommand::Menu,
            'd' => ScreenCommand::Dashboard,
            _ => ScreenCommand::Stay,
        },
        _ => ScreenCommand::Stay,
    }
}

/// Typed answer buffer for Math Sprint and Word Puzzle.
pub fn edit_line(buffer: &mut String, key: KeyEvent, accept: impl Fn(char) -> bool) -> bool
{
    match key.code {
        KeyCode::Backspace => {
            buffer.pop();
            true
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) && accept(ch) => {
            if buffer.chars().count() < 24 {
                buffer.push(ch);
            }
            true
        }
        _ => false,
    }
}
