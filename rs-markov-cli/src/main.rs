use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use rs_markov_core::LanguageModel;

/// Trains a character model on a corpus and prints generated text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of characters in the context window
    window_length: usize,

    /// Text to start generating from (at least `window_length` characters)
    initial_text: String,

    /// Target length of the generated text
    text_length: usize,

    /// Corpus file to train on
    corpus: PathBuf,

    /// Seed for reproducible output; fresh entropy is used when absent
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the trained model before the generated text
    #[arg(long, default_value_t = false)]
    dump: bool,

    /// Log at debug level
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    // A seed makes the whole run reproducible
    let mut model = match cli.seed {
        Some(seed) => LanguageModel::with_seed(cli.window_length, seed)?,
        None => LanguageModel::new(cli.window_length)?,
    };

    info!("Training on {}", cli.corpus.display());
    if let Err(e) = model.train_file(&cli.corpus) {
        error!("Training failed: {}", e);
        return Err(e.into());
    }

    if cli.dump {
        print!("{}", model);
    }

    println!("{}", model.generate(&cli.initial_text, cli.text_length));

    Ok(())
}
