//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, Context};
use lessoncheck::adapters::Catalog;
use lessoncheck::config::GlobalConfig;
use lessoncheck::output::OutputMode;

/// lessoncheck - Check learner answers for tutorial activities
#[derive(Parser, Debug)]
#[command(
    name = "lessoncheck",
    version,
    about = "Check learner answers for tutorial activities",
    long_about = "Check the values you assigned during a lesson's activities.\n\n\
                  Answers live in a TOML file (answers.toml by default) or are passed\n\
                  with --set NAME=VALUE. Each check reports whether the value is correct,\n\
                  wrong, or missing entirely."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Directory with extra lesson files
    #[arg(long, global = true, value_name = "DIR")]
    pub lessons: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available lessons
    List,

    /// Show a lesson's checks and the variables they read
    Show {
        /// Lesson id
        lesson: String,
    },

    /// Check your answers for a lesson
    Run {
        /// Lesson id
        lesson: String,

        /// Answers file (defaults to answers.toml when present)
        #[arg(short, long, value_name = "FILE")]
        answers: Option<PathBuf>,

        /// Assign a variable, e.g. --set march_precip_mm=46.99
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Only run this check
        #[arg(short, long, value_name = "ID")]
        check: Option<String>,
    },

    /// Write an answers template for a lesson
    Init {
        /// Lesson id
        lesson: String,

        /// Where to write the template
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = GlobalConfig::load();
    if cli.no_color || !config.ui.color {
        colored::control::set_override(false);
    }

    if let Some(dir) = cli.lessons.as_deref()
        && !dir.is_dir()
    {
        anyhow::bail!("Lessons directory not found: {}", dir.display());
    }

    let ctx = Context {
        mode: output_mode,
        catalog: Catalog::new(Some(config.lessons_dir(cli.lessons.as_deref()))),
        config,
    };

    match cli.command {
        Some(Command::List) => commands::list(&ctx),
        Some(Command::Show { lesson }) => commands::show(&ctx, &lesson),
        Some(Command::Run {
            lesson,
            answers,
            set,
            check,
        }) => commands::run(&ctx, &lesson, answers.as_deref(), &set, check.as_deref()),
        Some(Command::Init {
            lesson,
            output,
            force,
        }) => commands::init(&ctx, &lesson, output.as_deref(), force),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("lessoncheck v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("lessoncheck v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'lessoncheck --help' for usage");
                println!("Run 'lessoncheck list' to see available lessons");
            }
            Ok(())
        },
    }
}
