//! uno-sim - headless game runner
//!
//! Plays a game without a window. A scripted stand-in takes the human's
//! seat and clicks the first playable card after a short pause, so the
//! whole turn loop runs end to end.

use clap::{Parser, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use uno_duel::{
    Action, CardId, ColorBalanceOpponent, DrawCall, EngineConfig, Game, GameBuilder, Side, SideMap, TableLayout,
    UniformOpponent, ZoneKind,
};

/// Headless uno-duel simulator
#[derive(Parser)]
#[command(name = "uno-sim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// RNG seed
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Number of frames to run
    #[arg(short, long, default_value = "3600")]
    frames: u64,

    /// Logical milliseconds per frame
    #[arg(short, long, default_value = "16")]
    tick: u64,

    /// Frames the stand-in human waits before acting
    #[arg(long, default_value = "30")]
    human_delay: u64,

    /// Opponent policy
    #[arg(short, long, value_enum, default_value = "color-balance")]
    opponent: OpponentKind,

    /// Viewport width
    #[arg(long, default_value = "1280")]
    width: i32,

    /// Viewport height
    #[arg(long, default_value = "800")]
    height: i32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OpponentKind {
    /// Plays toward the color it holds most of
    ColorBalance,
    /// Uniformly random legal play
    Uniform,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = EngineConfig::default().with_tick_ms(cli.tick);
    let builder = GameBuilder::new()
        .config(config)
        .seed(cli.seed)
        .layout(TableLayout::new(cli.width, cli.height));
    let builder = match cli.opponent {
        OpponentKind::ColorBalance => builder.opponent(ColorBalanceOpponent),
        OpponentKind::Uniform => builder.opponent(UniformOpponent),
    };
    let mut game = builder.build()?;

    let mut waited = 0;
    for _ in 0..cli.frames {
        game.frame_update();

        if game.active_side() != Side::Human {
            waited = 0;
            continue;
        }
        waited += 1;
        if waited < cli.human_delay {
            continue;
        }
        if let Some(card) = pick_card(&game) {
            let outcome = game.activate(card)?;
            if outcome.ended_turn() {
                waited = 0;
            }
        }
    }

    report(&game);
    Ok(())
}

/// Prefer a hand card; fall back to whatever else is playable (the deck).
fn pick_card(game: &Game) -> Option<CardId> {
    let playable = game.playable_cards();
    let state = game.state();
    playable
        .iter()
        .copied()
        .find(|&card| state.zones.is_in_zone(card, ZoneKind::Hand(Side::Human)))
        .or_else(|| playable.first().copied())
}

fn report(game: &Game) {
    let state = game.state();

    let mut plays: SideMap<usize> = SideMap::default();
    let mut draws: SideMap<usize> = SideMap::default();
    for record in state.history() {
        match record.action {
            Action::Play(_) => plays[record.side] += 1,
            Action::Draw => draws[record.side] += 1,
        }
    }

    let mut calls = 0usize;
    game.render(&mut |_: &DrawCall| calls += 1);

    info!(
        frames = game.frame_count(),
        elapsed_ms = game.now_ms(),
        turn = state.turn.turn_number(),
        decks_built = state.decks_built(),
        "simulation finished"
    );

    println!("after {} frames ({} ms):", game.frame_count(), game.now_ms());
    println!("  turn {} ({} to move)", state.turn.turn_number(), game.active_side());
    for (side, hand) in state.hand_sizes().iter() {
        println!(
            "  {:<8} hand {:>2}  plays {:>3}  draws {:>3}",
            side.to_string(),
            hand,
            plays[side],
            draws[side]
        );
    }
    println!(
        "  deck {}  pile {}  decks built {}",
        state.cards_in(ZoneKind::Deck).len(),
        state.cards_in(ZoneKind::Pile).len(),
        state.decks_built()
    );
    if let Some(top) = state.pile_top() {
        println!("  pile top {}", top);
    }
    println!("  {} draw calls in the last frame", calls);
}
