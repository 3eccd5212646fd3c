use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use slide_gen_core::{FIXED_SEED, ModelConfig};

/// Whether the generator draws from the OS or from a fixed seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Different text on every run
    Random,
    /// Same text on every run
    Fixed,
}

/// Train a character model on a corpus and generate text from it.
#[derive(Parser, Debug)]
#[command(name = "slide-gen", version)]
struct Cli {
    /// Number of characters in a window
    window_length: usize,
    /// Text to start from; its last window picks the first distribution
    initial_text: String,
    /// Number of characters to generate
    length: usize,
    /// Random source mode
    #[arg(value_enum)]
    mode: Mode,
    /// Corpus file to train on
    corpus: PathBuf,
    /// Seed used in fixed mode
    #[arg(long, default_value_t = FIXED_SEED)]
    seed: u64,
    /// Print the trained model to stderr
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = ModelConfig {
        window_length: cli.window_length,
        seed: match cli.mode {
            Mode::Random => None,
            Mode::Fixed => Some(cli.seed),
        },
    };
    let mut model = config.build()?;

    let steps = model.train_file(&cli.corpus)?;
    info!("trained on {} ({} steps, {} windows)", cli.corpus.display(), steps, model.len());

    if cli.dump {
        eprint!("{}", model.to_text());
    }

    println!("{}", model.generate(&cli.initial_text, cli.length));
    Ok(())
}
