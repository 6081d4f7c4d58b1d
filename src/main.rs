use std::{fs, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use cube_lib::{
    cube333::{moves::random_sequence, StickerCube},
    reconstruction::{check_all, Record},
};
use log::warn;

/// Checks Rubik's cube reconstructions and generates scrambles
#[derive(Parser)]
#[command(version, about)]
enum Commands {
    /// Check reconstruction blocks and print the valid ones as JSON records
    Check {
        /// Files holding one reconstruction each: the scramble on the first line, the solve after
        files: Vec<PathBuf>,
        /// Write the records here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a random scramble without cube rotations
    Scramble {
        /// How many moves to generate
        #[arg(short, long, default_value_t = 20)]
        moves: usize,
        /// Seed for the generator, for reproducible scrambles
        #[arg(long)]
        seed: Option<u64>,
        /// Also print the quarter turns the scramble expands to
        #[arg(long)]
        canonical: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    match Commands::parse() {
        Commands::Check { files, output } => {
            let blocks = files.iter().filter_map(|file| {
                match fs::read_to_string(file) {
                    Ok(text) => Some((file.display().to_string(), text)),
                    Err(e) => {
                        warn!("Error reading {}: {e}", file.display());
                        None
                    }
                }
            });

            let records: Vec<Record> = check_all::<StickerCube, _, _, _>(blocks)
                .into_iter()
                .flatten()
                .map(|r| r.to_record())
                .collect();
            let json = serde_json::to_string_pretty(&records)?;

            match output {
                Some(path) => fs::write(&path, json)
                    .wrap_err_with(|| format!("could not write {}", path.display()))?,
                None => println!("{json}"),
            }
        }
        Commands::Scramble {
            moves,
            seed,
            canonical,
        } => {
            let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
            let scramble = random_sequence(moves, &mut rng);
            println!("{scramble}");
            if canonical {
                println!("{}", scramble.canonical_string());
            }
        }
    }

    Ok(())
}
