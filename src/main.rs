#![forbid(unsafe_code)]
//! briefcanvas command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use briefcanvas::commands::{
    execute_generate, execute_init, execute_key, execute_layout, execute_palette,
    GenerateOptions, InitOptions, KeySubcommand, LayoutOptions, OutputOptions, PaletteOptions,
};
use briefcanvas::config::{Config, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "briefcanvas")]
#[command(about = "Turn a product idea into a laid-out design-system document")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Output flags shared by `generate` and `layout`
#[derive(clap::Args, Debug, Clone)]
struct OutputArgs {
    /// Output directory
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// File stem for written files
    #[arg(short, long)]
    name: Option<String>,

    /// Also write an SVG rendering
    #[arg(long)]
    svg: bool,

    /// Preferred font family
    #[arg(long)]
    font: Option<String>,

    /// Fallback font family
    #[arg(long)]
    fallback_font: Option<String>,

    /// Restrict the fonts the canvas can load (repeatable)
    #[arg(long = "available-font")]
    available_fonts: Vec<String>,
}

impl From<OutputArgs> for OutputOptions {
    fn from(args: OutputArgs) -> Self {
        OutputOptions {
            dir: args.out_dir,
            name: args.name.unwrap_or_default(),
            svg: args.svg,
            font: args.font,
            fallback_font: args.fallback_font,
            available_fonts: args.available_fonts,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default .briefcanvas.json
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,

        /// Skip interactive prompts
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Ask the model for a brief and lay it out
    Generate {
        /// Product idea (reads stdin if omitted)
        idea: Option<String>,

        #[command(flatten)]
        output: OutputArgs,

        /// Write the brief and stop
        #[arg(long)]
        brief_only: bool,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Lay out an existing brief file (JSON or YAML)
    Layout {
        brief: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the palettes and type scale a brief yields
    Palette {
        brief: PathBuf,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the stored API key
    Key {
        #[command(subcommand)]
        cmd: KeyCommands,
    },
}

#[derive(Subcommand)]
enum KeyCommands {
    /// Store a key (prompts if omitted)
    Set { value: Option<String> },
    /// Show the stored key, masked
    Show {
        /// Print the full key
        #[arg(long)]
        reveal: bool,
    },
    /// Remove the stored key
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Commands::Init { force, yes } => {
            execute_init(InitOptions {
                force,
                yes,
                path: Some(cli.config),
            })?;
        }

        Commands::Generate {
            idea,
            output,
            brief_only,
            timeout,
        } => {
            let options = GenerateOptions {
                idea,
                output: output.into(),
                brief_only,
                timeout,
            };
            execute_generate(options, &config).await?;
        }

        Commands::Layout { brief, output } => {
            let options = LayoutOptions {
                brief,
                output: output.into(),
            };
            execute_layout(options, &config)?;
        }

        Commands::Palette { brief, json } => {
            execute_palette(PaletteOptions { brief, json })?;
        }

        Commands::Key { cmd } => {
            let subcommand = match cmd {
                KeyCommands::Set { value } => KeySubcommand::Set { value },
                KeyCommands::Show { reveal } => KeySubcommand::Show { reveal },
                KeyCommands::Clear => KeySubcommand::Clear,
            };
            execute_key(subcommand)?;
        }
    }

    Ok(())
}
