//! Navigation shell: which panel is on screen, and the way back to the dashboard.

use crate::games::GameId;
use crate::games::math::MathSession;
use crate::games::memory::MemorySession;
use crate::games::quiz::QuizSession;
use crate::games::word::WordSession;
use crate::storage::{Storage, USER_KEY};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Values the page would read from its URL query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchParams
{
    pub game: Option<String>,
    pub user: Option<String>,
}

/// The visible panel. A game panel owns the only live session.
#[derive(Debug)]
pub enum Panel
{
    Menu,
    Memory(MemorySession),
    Math(MathSession),
    Quiz(QuizSession),
    Word(WordSession),
}

impl Panel
{
    pub fn game(&self) -> Option<GameId>
    {
        match self {
            Panel::Menu => None,
            Panel::Memory(_) => Some(GameId::Memory),
            Panel::Math(_) => Some(GameId::Math),
            Panel::Quiz(_) => Some(GameId::Quiz),
            Panel::Word(_) => Some(GameId::Word),
        }
    }
}

pub struct Shell
{
    panel: Panel,
    rng: StdRng,
}

impl Shell
{
    pub fn new(rng: StdRng) -> Self
    {
        Self {
            panel: Panel::Menu,
            rng,
        }
    }

    pub fn from_entropy() -> Self
    {
        Self::new(StdRng::from_entropy())
    }

    /// Startup: jumps straight into the game named by the launch parameters.
    pub fn on_load(&mut self, params: &LaunchParams) -> bool
    {
        match params.game.as_deref() {
            Some(game) => self.activate(game),
            None => false,
        }
    }

    /// Shows the named game with a fresh session. Unknown names leave everything as is.
    pub fn activate(&mut self, game: &str) -> bool
    {
        match game.parse::<GameId>() {
            Ok(id) => {
                self.activate_game(id);
                true
            }
            Err(_) => {
                tracing::debug!(game, "ignoring unknown game id");
                false
            }
        }
    }

    pub fn activate_game(&mut self, id: GameId)
    {
        let mut seed = StdRng::from_rng(&mut self.rng).unwrap_or_else(|_| StdRng::from_entropy());
        self.panel = match id {
            GameId::Memory => Panel::Memory(MemorySession::new(&mut seed)),
            GameId::Math => Panel::Math(MathSession::new(seed)),
            GameId::Quiz => Panel::Quiz(QuizSession::new()),
            GameId::Word => Panel::Word(WordSession::new(seed)),
        };
        tracing::info!(game = %id, "game activated");
    }

    /// Starts the current game over. No effect on the menu.
    pub fn restart(&mut self)
    {
        if let Some(id) = self.panel.game() {
            self.activate_game(id);
        }
    }

    pub fn show_menu(&mut self)
    {
        self.panel = Panel::Menu;
    }

    pub fn tick(&mut self, elapsed_ms: u32)
    {
        match &mut self.panel {
            Panel::Memory(session) => session.tick(elapsed_ms),
            Panel::Math(session) => session.tick(elapsed_ms),
            Panel::Word(session) => session.tick(elapsed_ms),
            Panel::Quiz(_) | Panel::Menu => {}
        }
    }

    pub fn panel(&self) -> &Panel
    {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut Panel
    {
        &mut self.panel
    }

    /// Leaves the games: the session is dropped and the dashboard target returned.
    pub fn return_to_dashboard(
        &mut self,
        dashboard: &str,
        params: &LaunchParams,
        storage: &dyn Storage,
    ) -> String
    {
        self.panel = Panel::Menu;
        let user = resolve_user(params, storage);
        dashboard_url(dashboard, &user)
    }
}

/// Launch parameter first, then the stored name, then nobody.
pub fn resolve_user(params: &LaunchParams, storage: &dyn Storage) -> String
{
    params
        .user
        .clone()
        .filter(|user| !user.is_empty())
        .or_else(|| storage.get(USER_KEY).filter(|user| !user.is_empty()))
        .unwrap_or_default()
}

pub fn dashboard_url(dashboard: &str, user: &str) -> String
{
    if user.is_empty() {
        dashboard.to_string()
    } else {
        format!("{}?user={}", dashboard, urlencoding::encode(user))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use std::collections::HashMap;

    fn shell() -> Shell
    {
        Shell::new(StdRng::seed_from_u64(21))
    }

    fn stored(user: &str) -> HashMap<String, String>
    {
        HashMap::from([(USER_KEY.to_string(), user.to_string())])
    }

    #[test]
    fn starts_on_the_menu()
    {
        assert!(matches!(shell().panel(), Panel::Menu));
    }

    #[test]
    fn activate_switches_panels()
    {
        let mut shell = shell();
        assert!(shell.activate("quiz-game"));
        assert_eq!(shell.panel().game(), Some(GameId::Quiz));
        assert!(shell.activate("math"));
        assert_eq!(shell.panel().game(), Some(GameId::Math));
        shell.show_menu();
        assert_eq!(shell.panel().game(), None);
    }

    #[test]
    fn unknown_game_is_a_no_op()
    {
        let mut shell = shell();
        shell.activate("word");
        assert!(!shell.activate("snake"));
        assert_eq!(shell.panel().game(), Some(GameId::Word));
    }

    #[test]
    fn switching_games_discards_progress()
    {
        let mut shell = shell();
        shell.activate("quiz");
        if let Panel::Quiz(session) = shell.panel_mut() {
            session.select_answer(2);
        }
        shell.activate("memory");
        shell.activate("quiz");
        match shell.panel() {
            Panel::Quiz(session) => {
                assert_eq!(session.score(), 0);
                assert!(!session.is_answered());
            }
            other => panic!("expected quiz, got {other:?}"),
        }
    }

    fn deck(shell: &Shell) -> Vec<&'static str>
    {
        match shell.panel() {
            Panel::Memory(session) => session.cards().iter().map(|card| card.symbol).collect(),
            other => panic!("expected memory, got {other:?}"),
        }
    }

    #[test]
    fn every_game_draws_one_seed_from_the_shell()
    {
        // Opening the quiz uses up a seed just like memory does, so the next
        // memory deck depends only on how many games were opened.
        let mut via_quiz = shell();
        via_quiz.activate_game(GameId::Quiz);
        via_quiz.activate_game(GameId::Memory);

        let mut via_memory = shell();
        via_memory.activate_game(GameId::Memory);
        via_memory.activate_game(GameId::Memory);

        assert_eq!(deck(&via_quiz), deck(&via_memory));
    }

    #[test]
    fn on_load_reads_game_param()
    {
        let mut shell = shell();
        assert!(!shell.on_load(&LaunchParams::default()));
        let params = LaunchParams {
            game: Some("word".to_string()),
            user: None,
        };
        assert!(shell.on_load(&params));
        assert_eq!(shell.panel().game(), Some(GameId::Word));
    }

    #[test]
    fn user_comes_from_params_before_storage()
    {
        let params = LaunchParams {
            game: None,
            user: Some("kai".to_string()),
        };
        assert_eq!(resolve_user(&params, &stored("ana")), "kai");
        assert_eq!(resolve_user(&LaunchParams::default(), &stored("ana")), "ana");
        assert_eq!(resolve_user(&LaunchParams::default(), &HashMap::new()), "");
    }

    #[test]
    fn dashboard_link_only_carries_known_users()
    {
        assert_eq!(dashboard_url("dashboard.html", ""), "dashboard.html");
        assert_eq!(
            dashboard_url("dashboard.html", "Ana María"),
            "dashboard.html?user=Ana%20Mar%C3%ADa"
        );
    }

    #[test]
    fn returning_to_dashboard_leaves_the_game()
    {
        let mut shell = shell();
        shell.activate("memory");
        let target = shell.return_to_dashboard("dashboard.html", &LaunchParams::default(), &stored("ana"));
        assert_eq!(target, "dashboard.html?user=ana");
        assert!(matches!(shell.panel(), Panel::Menu));
    }
}
