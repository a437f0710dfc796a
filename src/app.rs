//! Ties the shell to the terminal: key dispatch, ticking and redraws.

use crate::config::Settings;
use crate::error::Result;
use crate::games::{self, GameId, ScreenCommand, math, memory, quiz, word};
use crate::shell::{LaunchParams, Panel, Shell};
use crate::storage::Storage;
use crate::term::Screen;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

const TICK_MS: u64 = 33;

/// Why the app loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit
{
    Quit,
    Dashboard(String),
}

pub struct App<S: Storage>
{
    shell: Shell,
    settings: Settings,
    storage: S,
    params: LaunchParams,
    cursor: usize,
    input: String,
}

impl<S: Storage> App<S>
{
    pub fn new(shell: Shell, settings: Settings, storage: S, params: LaunchParams) -> Self
    {
        let mut app = Self {
            shell,
            settings,
            storage,
            params,
            cursor: 0,
            input: String::new(),
        };
        let params = app.params.clone();
        app.shell.on_load(&params);
        app
    }

    pub fn run(&mut self, term: &mut Screen) -> Result<Exit>
    {
        let tick = Duration::from_millis(TICK_MS);
        let mut last_tick = Instant::now();

        loop {
            term.draw(&self.render())?;

            let timeout = tick.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(exit) = self.handle_key(key) {
                            return Ok(exit);
                        }
                    }
                    Event::Resize(..) => term.invalidate(),
                    _ => {}
                }
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= tick {
                self.shell.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
                last_tick = Instant::now();
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Exit>
    {
        let command = match self.shell.panel_mut() {
            Panel::Menu => return self.handle_menu_key(key),
            Panel::Memory(session) => memory::handle_key(session, &mut self.cursor, key),
            Panel::Math(session) => math::handle_key(session, &mut self.input, key),
            Panel::Quiz(session) => quiz::handle_key(session, key),
            Panel::Word(session) => word::handle_key(session, &mut self.input, key),
        };

        match command {
            ScreenCommand::Stay => None,
            ScreenCommand::Restart => {
                self.reset_view();
                self.shell.restart();
                None
            }
            ScreenCommand::Menu => {
                self.reset_view();
                self.shell.show_menu();
                None
            }
            ScreenCommand::Dashboard => Some(self.leave()),
            ScreenCommand::Quit => Some(Exit::Quit),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> Option<Exit>
    {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Exit::Quit),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Exit::Quit),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(self.leave()),
            KeyCode::Char(ch) => {
                let index = ch.to_digit(10)? as usize;
                let game = games::registry().into_iter().nth(index.checked_sub(1)?)?;
                self.open(game.id);
                None
            }
            _ => None,
        }
    }

    fn open(&mut self, id: GameId)
    {
        self.reset_view();
        self.shell.activate_game(id);
    }

    fn leave(&mut self) -> Exit
    {
        let target = self
            .shell
            .return_to_dashboard(&self.settings.dashboard, &self.params, &self.storage);
        tracing::info!(%target, "returning to dashboard");
        Exit::Dashboard(target)
    }

    fn reset_view(&mut self)
    {
        self.cursor = 0;
        self.input.clear();
    }

    pub fn shell(&self) -> &Shell
    {
        &self.shell
    }

    pub fn render(&self) -> Vec<String>
    {
        match self.shell.panel() {
            Panel::Menu => render_menu(),
            Panel::Memory(session) => memory::render(session, self.cursor),
            Panel::Math(session) => math::render(session, &self.input),
            Panel::Quiz(session) => quiz::render(session),
            Panel::Word(session) => word::render(session, &self.input),
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32)
    {
        self.shell.tick(elapsed_ms);
    }
}

fn render_menu() -> Vec<String>
{
    let mut lines = Vec::new();
    lines.push("ZenMind - Brain Boost Games".to_string());
    lines.push(String::new());
    lines.push("Select a game:".to_string());
    for (idx, game) in games::registry().iter().enumerate() {
        lines.push(format!("  {}. {:<13} - {}", idx + 1, game.title, game.description));
    }
    lines.push(String::new());
    lines.push("D returns to the dashboard, Q quits.".to_string());
    lines
}
