#![forbid(unsafe_code)]

mod game;
mod options;
mod ui;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use clap::Parser;
use directories::ProjectDirs;
use sweeper_field::{Field, FieldConfig, Level};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(long, short, default_value = "beginner", value_enum, help = "Board size and mine count to start from.")]
    level: Level,
    #[clap(long, short, help = "Number of rows, overriding the level.")]
    rows: Option<usize>,
    #[clap(long, short, help = "Number of columns, overriding the level.")]
    cols: Option<usize>,
    #[clap(long, short, help = "Number of mines, overriding the level. Must be less than rows times columns.")]
    mines: Option<usize>,
    #[clap(long, help = "Seed for the mine layout, to replay the same boards.")]
    seed: Option<u64>,
    #[clap(long, short, default_value = "frappe", value_enum)]
    theme: options::ThemeChoice,
    #[clap(long, short, default_value = "ascii", value_enum)]
    iconset: options::IconSetChoice,
    #[clap(
        long,
        help = "Where to write the log. Defaults to the value of SWEEPER_LOG if set, or to a reasonable platform-dependent data folder.",
        env = "SWEEPER_LOG",
    )]
    log_file: Option<PathBuf>,
}

impl Args {
    fn field_config(&self) -> FieldConfig {
        let preset = self.level.config();
        FieldConfig::new(
            self.rows.unwrap_or(preset.rows),
            self.cols.unwrap_or(preset.cols),
            self.mines.unwrap_or(preset.mines),
        )
    }
}

fn init_logging(path: Option<PathBuf>) {
    let Some(path) = path.or_else(|| ProjectDirs::from("", "", "sweeper").map(|p| p.data_dir().join("sweeper.log"))) else {
        return;
    };
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    // the terminal is taken over by the board, so the log goes to a file or nowhere
    let Ok(file) = File::create(&path) else { return };
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_file.clone());

    let config = args.field_config();
    let field = match args.seed {
        Some(seed) => Field::with_seed(config, seed),
        None => Field::new(config),
    };
    let field = match field {
        Ok(field) => field,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };
    tracing::info!(?config, seed = ?args.seed, "starting");

    let game = game::Game::new(field);
    if let Err(e) = ui::game_loop(game, args.theme.theme(), args.iconset.iconset()) {
        eprintln!("terminal error: {e}");
        std::process::exit(1);
    }
}
