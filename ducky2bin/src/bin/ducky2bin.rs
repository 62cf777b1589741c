use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use ducky2bin::render::render_c_array;
use ducky2bin::{compile_file, CompileOptions, Dialect, UnknownCommandPolicy};
use log::{info, LevelFilter};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// C source with a `uint8_t` array
    C,
    /// Raw script bytes
    Bin,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "DuckyScript to Uberducky Binary Converter", long_about = None)]
struct Args {
    /// Input DuckyScript file path
    input: PathBuf,

    /// Name of the generated C array
    array_name: String,

    /// Output file (C format defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::C)]
    format: Format,

    /// Only accept keywords the original firmware understands
    #[arg(long)]
    legacy: bool,

    /// Warn about unknown commands instead of failing
    #[arg(long)]
    skip_unknown: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let options = CompileOptions {
        dialect: if args.legacy { Dialect::Legacy } else { Dialect::Extended },
        unknown_commands: if args.skip_unknown {
            UnknownCommandPolicy::WarnAndSkip
        } else {
            UnknownCommandPolicy::Reject
        },
    };

    info!("Compiling {} ({:?})", args.input.display(), options);
    let bytes = compile_file(&args.input, options)?;
    info!("Compiled {} bytes", bytes.len());

    match (args.format, &args.output) {
        (Format::C, output) => {
            let source = render_c_array(&args.array_name, &bytes)?;
            match output {
                Some(path) => std::fs::write(path, source)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{}", source),
            }
        }
        (Format::Bin, Some(path)) => {
            std::fs::write(path, &bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        (Format::Bin, None) => bail!("--format bin requires --output"),
    }

    Ok(())
}
