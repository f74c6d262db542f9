use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unilang::{display_error, Session, SessionConfig, TokenStream};

/// Tokenize a source file and everything it includes.
#[derive(Parser, Debug)]
#[command(name = "unilang", version)]
struct Cli {
    /// Entry file to tokenize
    file: PathBuf,

    /// Directory the entry file's `@include` paths are relative to
    /// (defaults to the working directory)
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Only print the number of tokens and files
    #[arg(short, long)]
    summary: bool,

    /// Log include resolution
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = SessionConfig::default();
    if let Some(base_dir) = cli.base_dir {
        config = config.with_base_dir(base_dir);
    }

    let start = Instant::now();

    let stream = match Session::new(config).tokenize_file(&cli.file) {
        Ok(stream) => stream,
        Err(error) => {
            let source = fs::read_to_string(error.get_location().file.as_str()).ok();
            display_error(&error, source.as_deref());
            return ExitCode::FAILURE;
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    if !cli.summary {
        print_tokens(&stream);
    }

    println!(
        "{} tokens from {} files",
        stream.len(),
        stream.files().len()
    );

    ExitCode::SUCCESS
}

fn print_tokens(stream: &TokenStream) {
    for token in stream {
        let file = stream
            .file_of(token)
            .map(|file| file.name().as_str())
            .unwrap_or("<unknown>");

        println!(
            "{}:{}\t{}\t{}",
            file,
            token.position,
            token.kind,
            stream.text(token).escape_debug()
        );
    }
}
