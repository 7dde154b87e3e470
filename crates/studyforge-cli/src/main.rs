//! studyforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod files;

#[derive(Parser)]
#[command(name = "studyforge", version, about = "Practice exam generator and grader")]
struct Cli {
    /// Path to the profile store file
    #[arg(long, global = true, default_value = "studyforge.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a course material from a TOML file
    Upload {
        /// Path to the material file (name, kind, topics)
        #[arg(long)]
        file: PathBuf,
    },

    /// Generate a practice exam from a course material
    Generate {
        /// Material id (defaults to the first uploaded material)
        #[arg(long)]
        material: Option<String>,

        /// Exam type: objective, short-answer, essay
        #[arg(long, default_value = "objective")]
        exam_type: String,

        /// Difficulty: beginner, intermediate, advanced
        #[arg(long, default_value = "intermediate")]
        difficulty: String,

        /// Time intensity: relaxed, moderate, challenging
        #[arg(long, default_value = "moderate")]
        intensity: String,

        /// Exam title override
        #[arg(long)]
        title: Option<String>,
    },

    /// Take a pending exam: submit answers from a TOML file and get graded
    Take {
        /// Exam id
        #[arg(long)]
        exam: String,

        /// Path to the answers file
        #[arg(long)]
        answers: PathBuf,
    },

    /// Show exam results
    Results {
        /// Show the detailed result for one exam id
        #[arg(long)]
        exam: Option<String>,
    },

    /// List uploaded materials and generated exams
    List,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("studyforge=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Upload { file } => commands::upload::execute(&cli.store, &file),
        Commands::Generate {
            material,
            exam_type,
            difficulty,
            intensity,
            title,
        } => {
            commands::generate::execute(&cli.store, material, exam_type, difficulty, intensity, title)
                .await
        }
        Commands::Take { exam, answers } => commands::take::execute(&cli.store, &exam, &answers),
        Commands::Results { exam } => commands::results::execute(&cli.store, exam),
        Commands::List => commands::list::execute(&cli.store),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
