mod args;
mod commands;
pub mod defaults;
mod utils;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotdash_codec::ConversionService;
use std::path::PathBuf;

use args::CodecArgs;
use commands::{convert, direct, inspect};

/// Trailing line break left by shells and editors.
const LINE_END: &[char] = &['\r', '\n'];

/// dotdash: text to dot/dash code and back
///
/// Converts plain text into a two-mark signal alphabet and decodes it again.
/// `convert` works out the direction on its own.
#[derive(Parser, Debug)]
#[command(name = "dotdash")]
#[command(author, version, about = "Converts text to dot/dash code and back", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads used to convert several files
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(flatten)]
    codec: CodecArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert input, detecting whether it is text or code.
    ///
    /// Without files, reads stdin and writes stdout. With files, writes one
    /// timestamped output file per input.
    Convert {
        /// Input files
        files: Vec<PathBuf>,

        /// Directory for converted files
        #[arg(short, long, default_value = defaults::OUT_DIR)]
        out_dir: PathBuf,
    },

    /// Encode text into code.
    Encode {
        /// Text to encode (stdin if omitted)
        text: Option<String>,
    },

    /// Decode code into text.
    Decode {
        /// Code to decode (stdin if omitted)
        #[arg(allow_hyphen_values = true)]
        code: Option<String>,
    },

    /// Classify: print whether input would be encoded or decoded.
    Classify {
        /// Input to classify (stdin if omitted)
        #[arg(allow_hyphen_values = true)]
        input: Option<String>,
    },

    /// Print the active symbol table.
    Table,

    /// Print the effective codec configuration as JSON.
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let config = cli.codec.resolve()?;
    let codec = config.build().context("Invalid codec configuration")?;

    match cli.command {
        Commands::Convert { files, out_dir } => {
            let service = ConversionService::with_codec(codec);
            if files.is_empty() {
                let input = utils::read_input(None)?;
                convert::convert_stdin(&service, &input)?;
            } else {
                convert::convert_files(&service, &files, &out_dir)?;
            }
        }
        Commands::Encode { text } => {
            let text = utils::read_input(text)?;
            direct::encode_text(&codec, text.trim_end_matches(LINE_END))?;
        }
        Commands::Decode { code } => {
            let code = utils::read_input(code)?;
            direct::decode_code(&codec, code.trim_end_matches(LINE_END))?;
        }
        Commands::Classify { input } => {
            let input = utils::read_input(input)?;
            let service = ConversionService::with_codec(codec);
            direct::show_direction(&service, &input)?;
        }
        Commands::Table => {
            inspect::show_table(&codec)?;
        }
        Commands::Config => {
            inspect::show_config(&config)?;
        }
    }

    Ok(())
}
