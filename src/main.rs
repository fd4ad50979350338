use anyhow::Result;
use clap::{Parser, ValueEnum};
use path_snake::game::{GameConfig, GameMode};
use path_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "path_snake")]
#[command(version, about = "Terminal Snake with an A*-driven autonomous player")]
struct Cli {
    /// Game mode; omit to pick one from the in-app menu
    #[arg(long)]
    mode: Option<Mode>,

    /// Grid width in cells
    #[arg(long, default_value = "40")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "30")]
    height: usize,

    /// Game speed in ticks per second
    #[arg(long, default_value = "10")]
    tick_hz: u64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
    /// Race the pathfinding snake for the same food
    Versus,
    /// Watch the pathfinding snake play by itself
    Auto,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Human => GameMode::Human,
            Mode::Versus => GameMode::Versus,
            Mode::Auto => GameMode::Auto,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        tick_hz: cli.tick_hz,
        ..Default::default()
    };
    config.validate()?;

    let mut app = PlayMode::new(config, cli.mode.map(GameMode::from));
    app.run().await
}
