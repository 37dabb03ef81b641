use cubemaze::{
    error::AppError,
    logging, play,
    render::{render, wall_line},
    settings::Settings,
};
use gridmaze::{difficulty::Difficulty, game::GameState, walls, Algorithm, Generator};

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "cubemaze")]
struct Args {
    #[clap(short, long, help = "Side length of the maze, overrides --difficulty")]
    size: Option<usize>,
    #[clap(short, long, help = "Use the size preset of easy, medium or hard")]
    difficulty: Option<Difficulty>,
    #[clap(short, long, help = "Generator: prim or backtracking")]
    algorithm: Option<Algorithm>,
    #[clap(long, help = "Seed for a reproducible maze")]
    seed: Option<u64>,
    #[clap(short, long, action, help = "Print wall segments instead of the picture")]
    walls: bool,
    #[clap(long, action, help = "Emit each shared wall once")]
    dedup: bool,
    #[clap(long, action, conflicts_with = "dedup", help = "Emit every wall flag of every cell")]
    per_cell: bool,
    #[clap(short, long, action, help = "Walk the maze interactively")]
    play: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More log output, repeatable")]
    verbose: u8,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
}

fn log_level(verbose: u8, settings: &Settings) -> LevelFilter {
    match verbose {
        0 => settings.get_log_level(),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    logging::init(LevelFilter::Warn)?;

    if args.reset_config {
        Settings::reset_config(&Settings::default_path()?)?;
        return Ok(());
    }

    if args.show_config_path {
        let settings_path = Settings::default_path()?;
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.debug_config {
        println!("{:#?}", Settings::load(&Settings::default_path()?));
        return Ok(());
    }

    let settings = match Settings::default_path() {
        Ok(path) => Settings::load(&path)?,
        Err(err) => {
            log::warn!("{}, using default settings", err);
            Settings::default()
        }
    };
    logging::get_logger().set_min_level(log_level(args.verbose, &settings));

    let size = settings.resolve_size(args.size, args.difficulty);
    let algorithm = args.algorithm.unwrap_or_else(|| settings.get_default_algorithm());
    let maze = Generator::new(algorithm).with_seed(args.seed).generate(size)?;
    log::info!("Generated {}x{} maze with {}, seed {}", size, size, algorithm, maze.seed);

    if args.walls {
        let mode = if args.per_cell {
            walls::EmitMode::PerCell
        } else if args.dedup {
            walls::EmitMode::Deduplicated
        } else {
            settings.get_emit_mode()
        };

        for segment in walls::emit(&maze.grid, mode) {
            println!("{}", wall_line(&segment));
        }
        return Ok(());
    }

    if args.play {
        better_panic::install();
        return play::run(GameState::new(maze), &settings);
    }

    for line in render(&maze.grid, None) {
        println!("{}", line);
    }
    println!("{} {}x{}, seed {}", maze.algorithm, size, size, maze.seed);

    Ok(())
}
