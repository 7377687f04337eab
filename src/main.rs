//! Europresse HTML export to text-analysis corpus
//!
//! Run with: cargo run -- [export.html] [--format lexico|iramuteq|txm|text]
//!
//! Values not given on the command line are asked for interactively.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use europresse_corpus::{
    ArticleRecord, ConvertConfig, CorpusError, DEFAULT_WRAP_WIDTH, Dialect, MonthNames, Result,
    TitlePunctuation, build_corpus, export_corpus, read_document,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const INPUT_PROMPT: &str = "Entrez le chemin vers le fichier HTML Europress : ";
const FORMAT_PROMPT: &str = "Format de corpus (lexico, iramuteq, txm ou text) : ";
const UNKNOWN_FORMAT: &str = "Format de corpus non reconnu.";

/// Convert a Europresse HTML export into a Lexico3, Iramuteq, TXM or text corpus
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Europresse HTML export (asked for when omitted)
    input: Option<PathBuf>,

    /// Corpus format: lexico, iramuteq, txm or text (asked for when omitted)
    #[arg(short, long)]
    format: Option<String>,

    /// Directory receiving the corpus file
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Language of month names in article dates
    #[arg(long, value_enum, default_value_t = MonthLanguage::Fr)]
    months: MonthLanguage,

    /// Strip all ASCII punctuation from titles
    #[arg(long)]
    full_punctuation: bool,

    /// Words per line in TXM content
    #[arg(long, default_value_t = DEFAULT_WRAP_WIDTH)]
    wrap_width: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MonthLanguage {
    Fr,
    En,
}

impl Cli {
    fn config(&self) -> ConvertConfig {
        let months = match self.months {
            MonthLanguage::Fr => MonthNames::french(),
            MonthLanguage::En => MonthNames::english(),
        };
        let title_punctuation = if self.full_punctuation {
            TitlePunctuation::Full
        } else {
            TitlePunctuation::Observed
        };
        ConvertConfig::new()
            .with_months(months)
            .with_title_punctuation(title_punctuation)
            .with_wrap_width(self.wrap_width)
            .with_output_dir(&self.output_dir)
    }
}

/// Print `message` and read one line from stdin, without its line ending
fn prompt(message: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    stdout.write_all(message.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    debug!("Configuration: {:?}", config);

    let input = match cli.input {
        Some(path) => path,
        None => PathBuf::from(prompt(INPUT_PROMPT)?),
    };

    let html = read_document(&input)?;
    let records = build_corpus(&html, &config)?;

    let token = match cli.format {
        Some(token) => token,
        None => prompt(FORMAT_PROMPT)?,
    };

    export_selected(&token, &records, &config, &mut io::stdout())
}

/// Export `records` in the format named by `token` and report to `out`
///
/// The token must match exactly. An unknown token writes no file and
/// reports it on `out`.
fn export_selected<W: Write>(
    token: &str,
    records: &[ArticleRecord],
    config: &ConvertConfig,
    out: &mut W,
) -> Result<()> {
    match token.parse::<Dialect>() {
        Ok(dialect) => {
            export_corpus(records, dialect, config)?;
            writeln!(out, "{}", dialect.confirmation())?;
        }
        Err(CorpusError::UnknownDialect(token)) => {
            debug!("Unrecognized corpus format {:?}", token);
            writeln!(out, "{}", UNKNOWN_FORMAT)?;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Erreur : {}", e);
            ExitCode::FAILURE
        }
    }
}
