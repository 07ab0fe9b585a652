use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use duel_battle::{BattleConfig, Creature, Outcome, run_battle_with_config};
use duel_client::{ConsoleHandler, Handler, RandomHandler, SplitHandler, load_roster, starter_roster};
use duel_protocol::{ActionRequest, Choice, Narration, SideId};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "duel", version, about = "Play a two-sided creature battle in the terminal")]
struct Args {
    /// Player roster (JSON); defaults to the built-in starter roster
    #[arg(long)]
    player: Option<PathBuf>,

    /// Opponent roster (JSON); defaults to the built-in starter roster
    #[arg(long)]
    opponent: Option<PathBuf>,

    /// Seed for speed ties and the computer's choices
    #[arg(long)]
    seed: Option<u64>,

    /// End in a draw after this many turns
    #[arg(long)]
    max_turns: Option<u32>,

    /// Let the computer play both sides
    #[arg(long)]
    auto: bool,

    /// Computer aims for super-effective hits
    #[arg(long)]
    smart: bool,
}

/// Prints narration for one side and passes everything through
struct Spectator<H> {
    inner: H,
    audience: SideId,
}

impl<H: Handler> Handler for Spectator<H> {
    fn request_action(&mut self, request: &ActionRequest) -> Choice {
        self.inner.request_action(request)
    }

    fn notify(&mut self, audience: SideId, narration: &Narration) {
        if audience == self.audience {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", narration).ok();
        }
        self.inner.notify(audience, narration);
    }
}

fn roster(path: Option<&PathBuf>, side: SideId) -> Result<Vec<Creature>> {
    match path {
        Some(path) => load_roster(path).with_context(|| format!("{} roster", side)),
        None => Ok(starter_roster(side)),
    }
}

fn computer(seed: Option<u64>, smart: bool, player: &[Creature], opponent: &[Creature]) -> RandomHandler {
    let handler = RandomHandler::new(seed);
    if smart {
        handler.prefer_effective(player, opponent)
    } else {
        handler
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let player = roster(args.player.as_ref(), SideId::Player)?;
    let opponent = roster(args.opponent.as_ref(), SideId::Opponent)?;

    let mut config = BattleConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(max_turns) = args.max_turns {
        config = config.with_max_turns(max_turns);
    }

    info!(
        player = player.len(),
        opponent = opponent.len(),
        seed = ?args.seed,
        auto = args.auto,
        "Starting battle"
    );

    let opponent_handler = computer(
        args.seed.map(|s| s.wrapping_add(1)),
        args.smart,
        &player,
        &opponent,
    );

    let result = if args.auto {
        let player_handler = Spectator {
            inner: computer(args.seed, args.smart, &player, &opponent),
            audience: SideId::Player,
        };
        let mut handler = SplitHandler::new(player_handler, opponent_handler);
        run_battle_with_config(player, opponent, config, &mut handler)
    } else {
        let mut handler = SplitHandler::new(ConsoleHandler::stdio(), opponent_handler);
        run_battle_with_config(player, opponent, config, &mut handler)
    };
    let outcome = result.context("Battle aborted")?;

    match outcome {
        Outcome::Winner(SideId::Player) => println!("You won!"),
        Outcome::Winner(SideId::Opponent) => println!("You lost."),
        Outcome::Draw => println!("Nobody won."),
    }

    Ok(())
}
