//! Wordle Assistant - CLI
//!
//! Guesses Wordle answers from letter feedback, with TUI and text modes plus
//! batch evaluation against the word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use wordle_assist::{
    GameError,
    commands::{
        print_test_all_statistics, run_benchmark, run_simple, run_test_all, sample_targets,
        solve_word,
    },
    core::Word,
    output::{print_benchmark_result, print_solve_result},
    session::SessionConfig,
    solver::{DEFAULT_MIN_EXPLORATORY_LETTERS, StrategyType},
    wordlists::{WordCatalog, embedded_catalog, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant: guesses the most common word that fits the feedback so far",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: two-tier (default) or greedy
    #[arg(short, long, global = true, default_value = "two-tier")]
    strategy: String,

    /// Wordlist: 'all' (default, embedded list) or path to a file, most common word first
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Report candidate counts and exploratory-guess reasoning
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Fixed opening guess (e.g. "tears")
    #[arg(long, global = true)]
    opener: Option<String>,

    /// Rounds per game
    #[arg(long, global = true, default_value = "6")]
    max_rounds: usize,

    /// An exploratory guess must cover more than this many undetermined letters
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_EXPLORATORY_LETTERS)]
    min_explore: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one prompt per letter, no TUI)
    Simple,

    /// Play against a known target word
    Solve {
        /// The target word to solve
        word: String,
    },

    /// Benchmark solver performance on random words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test solver on every word in the list
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the catalog based on the -w flag
fn load_catalog(wordlist_mode: &str) -> Result<WordCatalog> {
    match wordlist_mode {
        "all" => Ok(embedded_catalog()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list '{path}'"))?;
            Ok(WordCatalog::new(words))
        }
    }
}

fn parse_word(text: &str) -> Result<Word> {
    Ok(Word::new(text).map_err(|err| GameError::invalid_word(text, &err))?)
}

fn session_config(cli: &Cli) -> Result<SessionConfig> {
    anyhow::ensure!(cli.max_rounds > 0, "--max-rounds must be at least 1");
    Ok(SessionConfig {
        max_rounds: cli.max_rounds,
        verbose: cli.verbose,
        opener: cli.opener.as_deref().map(parse_word).transpose()?,
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let catalog = load_catalog(&cli.wordlist)?;
    anyhow::ensure!(!catalog.is_empty(), "word list '{}' is empty", cli.wordlist);
    info!("loaded {} words from '{}'", catalog.len(), cli.wordlist);

    let config = session_config(&cli)?;
    if let Some(opener) = &config.opener
        && !catalog.contains(opener)
    {
        eprintln!("Opener '{opener}' is not in the word list and will be ignored.");
    }

    let strategy = StrategyType::from_name(&cli.strategy, cli.min_explore);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(catalog, strategy, config),
        Commands::Simple => Ok(run_simple(catalog, strategy, config)?),
        Commands::Solve { word } => run_solve_command(catalog, strategy, config, &word),
        Commands::Benchmark { count } => run_benchmark_command(&catalog, strategy, &config, count),
        Commands::TestAll { limit } => run_test_all_command(&catalog, strategy, &config, limit),
    }
}

fn run_solve_command(
    catalog: WordCatalog,
    strategy: StrategyType,
    config: SessionConfig,
    word: &str,
) -> Result<()> {
    let target = parse_word(word)?;
    let verbose = config.verbose;
    let result = solve_word(catalog, strategy, config, target)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    catalog: &WordCatalog,
    strategy: StrategyType,
    config: &SessionConfig,
    count: usize,
) -> Result<()> {
    println!("Running benchmark on {count} random words...");

    let targets = sample_targets(catalog, count);
    let result = run_benchmark(catalog, &strategy, config, &targets)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(
    catalog: &WordCatalog,
    strategy: StrategyType,
    config: &SessionConfig,
    limit: Option<usize>,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Wordle Assistant Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} words", catalog.len());
    println!("Strategy: {strategy:?}");
    if let Some(opener) = &config.opener {
        println!("Opener: {opener}");
    }
    println!();

    let stats = run_test_all(catalog, &strategy, config, limit)?;
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_play_command(
    catalog: WordCatalog,
    strategy: StrategyType,
    config: SessionConfig,
) -> Result<()> {
    use wordle_assist::interactive::{App, run_tui};

    let app = App::new(catalog, strategy, config);
    run_tui(app)
}
