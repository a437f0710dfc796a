use clap::Parser;
use zenmind_games::app::{App, Exit};
use zenmind_games::config::Settings;
use zenmind_games::error::Result;
use zenmind_games::games;
use zenmind_games::logging;
use zenmind_games::shell::{LaunchParams, Shell};
use zenmind_games::storage::FileStorage;
use zenmind_games::term::Screen;

#[derive(Parser)]
#[command(name = "zenmind-games", version, about = "ZenMind brain boost mini-games")]
struct Cli
{
    /// Game to start right away (memory, math, quiz, word)
    #[arg(long)]
    game: Option<String>,

    /// Player name carried back to the dashboard
    #[arg(long)]
    user: Option<String>,

    /// List the available games and exit
    #[arg(long)]
    list: bool,
}

fn main()
{
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()>
{
    let cli = Cli::parse();
    if cli.list {
        list_games();
        return Ok(());
    }

    let settings = Settings::from_env()?;
    logging::init(settings.log_path.as_deref())?;
    let storage = FileStorage::load(&settings.storage_path)?;
    let params = LaunchParams {
        game: cli.game,
        user: cli.user,
    };

    let mut app = App::new(Shell::from_entropy(), settings, storage, params);
    let exit = {
        let mut term = Screen::enter()?;
        app.run(&mut term)?
    };

    if let Exit::Dashboard(target) = exit {
        println!("{target}");
    }
    Ok(())
}

fn list_games()
{
    println!("Available games:");
    for game in games::registry() {
        println!("  {:<8} - {}: {}", game.id, game.title, game.description);
    }
}
