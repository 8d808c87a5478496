//! CourseSphere terminal client.
//!
//! Wires configuration, logging, the store gateway, and the persisted
//! session, then dispatches to one subcommand per user flow: authentication,
//! the course dashboard, course and lesson editing, and instructor roster
//! management.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use session::{FileSessionStore, Session};
use store_client::StoreClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::AppContext;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "course-sphere", version)]
#[command(about = "Terminal client for the CourseSphere course manager")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login(commands::auth::LoginArgs),
    /// Log out and clear the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List the courses you created or teach
    Courses,
    /// Course operations
    #[command(subcommand)]
    Course(commands::courses::CourseCommand),
    /// Lesson operations
    #[command(subcommand)]
    Lesson(commands::lessons::LessonCommand),
    /// Instructor roster operations
    #[command(subcommand)]
    Instructor(commands::instructors::InstructorCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::load();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("course_sphere={}", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let store = match &config.session_file {
        Some(path) => FileSessionStore::new(path),
        None => FileSessionStore::at_default_location()?,
    };
    let mut session = Session::new(Arc::new(store));
    session.restore().await?;

    let client = StoreClient::new(config.store.clone());
    let mut ctx = AppContext { client, session };

    match cli.command {
        Commands::Login(args) => commands::auth::login(&mut ctx, args).await,
        Commands::Logout => commands::auth::logout(&mut ctx).await,
        Commands::Whoami => commands::auth::whoami(&ctx),
        Commands::Courses => commands::courses::list(&ctx).await,
        Commands::Course(command) => commands::courses::run(&ctx, command).await,
        Commands::Lesson(command) => commands::lessons::run(&ctx, command).await,
        Commands::Instructor(command) => commands::instructors::run(&ctx, command).await,
    }
}
