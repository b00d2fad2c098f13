use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blockgen")]
#[command(about = "blockgen - compile visual math blocks to Lua")]
#[command(version = "0.1.0")]
#[command(author = "Gianluca Brigandi <gbrigand@gmail.com>")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Compile {
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long)]
        verbose: bool,
    },

    Validate {
        input: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for blockgen_emit::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => blockgen_emit::OutputFormat::Text,
            OutputFormat::Json => blockgen_emit::OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = match &cli.command {
        Commands::Compile { verbose, .. } | Commands::Validate { verbose, .. } => *verbose,
    };
    init_tracing(verbose);

    match cli.command {
        Commands::Compile {
            input,
            output,
            format,
            config,
            verbose,
        } => cmd_compile(input, output, format, config, verbose),
        Commands::Validate {
            input,
            config,
            verbose,
        } => cmd_validate(input, config, verbose),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .try_init();
}

fn load_config(path: Option<&PathBuf>) -> Result<blockgen_emit::EmitterConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            blockgen_emit::EmitterConfig::from_json(&text)
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(blockgen_emit::EmitterConfig::default()),
    }
}

fn load_program(input: &PathBuf) -> Result<blockgen_core::Program> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    blockgen_core::Program::from_json(&json)
        .with_context(|| format!("parsing block program {}", input.display()))
}

fn cmd_compile(
    input: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    use blockgen_emit::{render_program, Generator};
    use colored::*;
    use std::fs;
    use std::time::Instant;

    if verbose {
        eprintln!("{}", " blockgen Compiler".bright_blue().bold());
        eprintln!("{}", "=".repeat(50).bright_blue());
        eprintln!(" Input: {}", input.display());
        if let Some(ref out) = output {
            eprintln!(" Output: {}", out.display());
        }
        eprintln!(" Format: {:?}", format);
        eprintln!();
    }

    let start = Instant::now();
    let program = load_program(&input)?;
    let config = load_config(config.as_ref())?;

    if program.blocks.is_empty() {
        eprintln!("{}", "  No blocks found in input".yellow());
    }

    let mut generator = Generator::new(config);
    let generated = generator
        .generate(&program)
        .with_context(|| format!("generating Lua for {}", input.display()))?;
    tracing::info!(
        blocks = program.blocks.len(),
        helpers = generated.helpers.len(),
        "generated program"
    );

    let rendered = render_program(&generated, format.into())?;

    if let Some(output_path) = output {
        fs::write(&output_path, &rendered)
            .with_context(|| format!("writing {}", output_path.display()))?;
        if verbose {
            let elapsed = start.elapsed();
            eprintln!(
                "\n {} Compilation successful!",
                "SUCCESS:".bright_green().bold()
            );
            eprintln!("   Time: {:.3}s", elapsed.as_secs_f64());
            eprintln!("   Helpers: {}", generated.helpers.len());
            eprintln!("   Output: {}", output_path.display());
        }
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

fn cmd_validate(input: PathBuf, config: Option<PathBuf>, verbose: bool) -> Result<()> {
    use blockgen_emit::Generator;
    use colored::*;

    if verbose {
        println!("{}", " Validating block program".bright_cyan().bold());
        println!("{}", "=".repeat(50).bright_cyan());
        println!(" Input: {}", input.display());
        println!();
    }

    let program = load_program(&input)?;
    let mut generator = Generator::new(load_config(config.as_ref())?);

    match generator.generate(&program) {
        Ok(generated) => {
            println!("{}", " VALID".bright_green().bold());
            if verbose {
                println!("   Top-level blocks: {}", program.blocks.len());
                println!("   Helpers: {}", generated.helpers.len());
                for helper in &generated.helpers {
                    println!("     {} -> {}", helper.logical_name, helper.identifier);
                }
            }
            Ok(())
        }
        Err(e) => {
            println!("{}", " INVALID".bright_red().bold());
            println!("\n{}", "Generation Error:".bright_red());
            println!("{}", e);
            Err(anyhow::anyhow!("Validation failed"))
        }
    }
}
