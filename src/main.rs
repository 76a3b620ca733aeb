//! Color Vein - Terminal explorer for traditional Chinese colors
//!
//! With no subcommand the interactive explorer starts. Subcommands give
//! headless, scriptable access to the same dataset, layouts and palettes.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use colorvein::cli::{
    ClassifyArgs, CliContext, CliResult, ColorsArgs, ConfigArgs, LayoutArgs, PaletteArgs,
    ShowArgs,
};
use colorvein::logging;

/// Color Vein - Terminal explorer for traditional Chinese colors
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dataset JSON file replacing the bundled colors
    #[arg(long, value_name = "FILE", global = true)]
    dataset: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List colors, optionally filtered by family, dynasty or mood
    Colors(ColorsArgs),
    /// Show details and similar colors for one color
    Show(ShowArgs),
    /// Classify an HSL triple or hex color into a hue family
    Classify(ClassifyArgs),
    /// Compute lens layout positions
    Layout(LayoutArgs),
    /// Export a palette or get suggestions
    Palette(PaletteArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();
    let ctx = CliContext {
        dataset_path: cli.dataset,
    };

    let result = match cli.command {
        Some(command) => {
            logging::init_stderr(cli.verbose);
            run_command(command, &ctx)
        }
        None => run_explorer(&ctx, cli.verbose),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run_command(command: Command, ctx: &CliContext) -> CliResult<()> {
    match command {
        Command::Colors(args) => args.execute(ctx),
        Command::Show(args) => args.execute(ctx),
        Command::Classify(args) => args.execute(),
        Command::Layout(args) => args.execute(ctx),
        Command::Palette(args) => args.execute(ctx),
        Command::Config(args) => args.execute(),
    }
}

#[cfg(feature = "ratatui")]
fn run_explorer(ctx: &CliContext, verbose: bool) -> CliResult<()> {
    use colorvein::cli::CliError;
    use colorvein::config::Config;

    let dataset = ctx.dataset()?;
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config, using defaults: {e:#}");
            Config::default()
        }
    };

    // The explorer owns the terminal, so logs go to a file
    if let Err(e) = logging::init_file(verbose) {
        eprintln!("Warning: File logging disabled: {e:#}");
    }

    colorvein::tui::launch(dataset, config).map_err(|e| CliError::io(format!("{e:#}")))
}

#[cfg(not(feature = "ratatui"))]
fn run_explorer(_ctx: &CliContext, _verbose: bool) -> CliResult<()> {
    Err(colorvein::cli::CliError::validation(format!(
        "This build has no interactive explorer. Run `{} --help` for the available commands.",
        colorvein::constants::APP_BINARY_NAME
    )))
}
