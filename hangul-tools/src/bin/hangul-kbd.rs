use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangul_core::{paths, InitStatus, Keyboard, KeyboardRegistry};
use hangul_tools::{describe_code_point, dump_keyboard, parse_number, parse_slot};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect Hangul keyboard layouts", long_about = None)]
struct Args {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in and installed keyboards
    List {
        /// Search path to scan instead of the default directories
        #[arg(long)]
        path: Option<OsString>,
    },
    /// Load a layout file and print everything it defines
    Show {
        file: PathBuf,
    },
    /// Map a key code through one of a keyboard's tables
    Map {
        id: String,
        #[arg(value_parser = parse_slot)]
        slot: usize,
        #[arg(value_parser = parse_number)]
        key: u32,
    },
    /// Combine two code points with one of a keyboard's tables
    Combine {
        id: String,
        #[arg(value_parser = parse_slot)]
        slot: usize,
        #[arg(value_parser = parse_number)]
        first: u32,
        #[arg(value_parser = parse_number)]
        second: u32,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn open_registry(path: Option<&OsString>) -> KeyboardRegistry {
    let registry = KeyboardRegistry::new();
    if registry.init(path.map(OsString::as_os_str)) == InitStatus::NoKeyboardsFound {
        log::info!("No installed keyboards found, using built-ins only");
    }
    registry
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::List { path } => {
            if args.verbose {
                let search_path = path.clone().unwrap_or_else(paths::search_path);
                for dir in paths::split_search_path(&search_path) {
                    println!("# {}", dir.display());
                }
            }
            let registry = open_registry(path.as_ref());
            for keyboard in registry.keyboards() {
                println!(
                    "{:<12} {:<10} {}{}",
                    keyboard.id().unwrap_or("-"),
                    keyboard.keyboard_type(),
                    keyboard.name().unwrap_or("-"),
                    if keyboard.is_builtin() { " (built-in)" } else { "" }
                );
            }
        }
        Command::Show { file } => {
            let keyboard = Keyboard::from_file(&file)
                .with_context(|| format!("Failed to load {}", file.display()))?;
            print!("{}", dump_keyboard(&keyboard));
        }
        Command::Map { id, slot, key } => {
            let registry = open_registry(None);
            let keyboard = registry.get(&id)?;
            let value = keyboard.map_to_char(slot, key);
            if args.verbose {
                println!("{} slot {} key 0x{:02x}", id, slot, key);
            }
            println!("{}", describe_code_point(value));
        }
        Command::Combine {
            id,
            slot,
            first,
            second,
        } => {
            let registry = open_registry(None);
            let keyboard = registry.get(&id)?;
            let value = keyboard.combine(slot, first, second);
            if args.verbose {
                println!(
                    "{} slot {}: {} + {}",
                    id,
                    slot,
                    describe_code_point(first),
                    describe_code_point(second)
                );
            }
            println!("{}", describe_code_point(value));
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
