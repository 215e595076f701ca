use std::{
    fs::File,
    io::{self, BufReader, BufWriter, BufRead, Read, Write}
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lzbase62::{table::CHUNK_SIZE, CompressChunks, DecompressByteChunks, DecompressChunks, Mode, Options};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Symbols (compress) or code units (decompress) per streamed chunk
    #[arg(long, default_value_t = CHUNK_SIZE, global = true)]
    chunk_size: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress an input file to an output file
    Compress {
        /// Input file path (use - for stdin)
        input: String,
        /// Output file path (use - for stdout)
        output: String,
        /// Treat the input as raw bytes instead of UTF-8 text
        #[arg(long)]
        bytes: bool,
    },
    /// Decompress an input file to an output file
    Decompress {
        /// Input file path (use - for stdin)
        input: String,
        /// Output file path (use - for stdout)
        output: String,
        /// Write the decoded code units as raw bytes instead of UTF-8 text
        #[arg(long)]
        bytes: bool,
    },
}

// Helper to open input (file or stdin)
fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    if path == "-" {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        let file = File::open(path).with_context(|| format!("Failed to open input file: {}", path))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

// Helper to open output (file or stdout)
fn open_output(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(BufWriter::new(io::stdout())))
    } else {
        let file = File::create(path).with_context(|| format!("Failed to create output file: {}", path))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

// Logs go to stderr; stdout may be carrying the output stream.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn mode_for(bytes: bool) -> Mode {
    if bytes {
        Mode::Bytes
    } else {
        Mode::Text
    }
}

fn compress_file(input: &str, output: &str, mode: Mode, options: Options) -> Result<usize> {
    let mut reader = open_input(input)?;
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .with_context(|| format!("Failed to read input: {}", input))?;

    let chunks = match mode {
        Mode::Text => {
            let text = std::str::from_utf8(&data).with_context(|| {
                format!("Input {} is not valid UTF-8 (use --bytes for binary data)", input)
            })?;
            CompressChunks::from_text(text, options)
        }
        Mode::Bytes => CompressChunks::from_bytes(&data, options),
    };

    let mut writer = open_output(output)?;
    chunks
        .write_to(&mut writer)
        .with_context(|| format!("Failed to write output: {}", output))
}

fn decompress_file(input: &str, output: &str, mode: Mode, options: Options) -> Result<usize> {
    let mut reader = open_input(input)?;
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .with_context(|| format!("Failed to read input: {}", input))?;
    // Tolerate the newline editors and `echo` append; nothing else.
    let symbols = text.trim_end_matches(|c: char| c.is_ascii_whitespace());

    let mut writer = open_output(output)?;
    let written = match mode {
        Mode::Text => DecompressChunks::new(symbols, options).write_to(&mut writer),
        Mode::Bytes => DecompressByteChunks::new(symbols, options).write_to(&mut writer),
    };
    written.with_context(|| format!("Failed to decompress {} into {}", input, output))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let options = Options::new().with_chunk_size(cli.chunk_size);

    match cli.command {
        Commands::Compress { input, output, bytes } => {
            let mode = mode_for(bytes);
            info!("Compressing {} to {} ({:?} mode)...", input, output, mode);
            let written = compress_file(&input, &output, mode, options)
                .with_context(|| format!("Compression failed from {} to {}", input, output))?;
            info!(symbols = written, "Compression successful.");
        }
        Commands::Decompress { input, output, bytes } => {
            let mode = mode_for(bytes);
            info!("Decompressing {} to {} ({:?} mode)...", input, output, mode);
            let written = decompress_file(&input, &output, mode, options)
                .with_context(|| format!("Decompression failed from {} to {}", input, output))?;
            info!(bytes = written, "Decompression successful.");
        }
    }

    Ok(())
}
