//! Lesson management commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use course_state::{CourseStateError, CourseWorkspace, LessonForm};
use entities::LessonStatus;

use super::AppContext;

#[derive(Subcommand)]
pub enum LessonCommand {
    /// Add a lesson to a course you teach
    Add(AddArgs),
    /// Edit a lesson you created (or any lesson of a course you created)
    Edit(EditArgs),
    /// Delete a lesson
    Rm(RmArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Course id
    pub course_id: u64,

    /// Lesson title (at least 3 characters)
    #[arg(long)]
    pub title: String,

    /// Status: draft, published, or archived
    #[arg(long, default_value = "draft")]
    pub status: LessonStatus,

    /// Publication date (YYYY-MM-DD)
    #[arg(long)]
    pub publish_date: NaiveDate,

    /// Video URL
    #[arg(long)]
    pub video_url: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Course id
    pub course_id: u64,

    /// Lesson id
    pub lesson_id: u64,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New status: draft, published, or archived
    #[arg(long)]
    pub status: Option<LessonStatus>,

    /// New publication date (YYYY-MM-DD)
    #[arg(long)]
    pub publish_date: Option<NaiveDate>,

    /// New video URL
    #[arg(long)]
    pub video_url: Option<String>,
}

#[derive(Args)]
pub struct RmArgs {
    /// Course id
    pub course_id: u64,

    /// Lesson id
    pub lesson_id: u64,
}

pub async fn run(ctx: &AppContext, command: LessonCommand) -> anyhow::Result<()> {
    match command {
        LessonCommand::Add(args) => add(ctx, args).await,
        LessonCommand::Edit(args) => edit(ctx, args).await,
        LessonCommand::Rm(args) => rm(ctx, args).await,
    }
}

async fn workspace_for(ctx: &AppContext, course_id: u64) -> anyhow::Result<CourseWorkspace> {
    let user = ctx.current_user()?;
    Ok(CourseWorkspace::load(ctx.client.clone(), user.clone(), course_id).await?)
}

async fn add(ctx: &AppContext, args: AddArgs) -> anyhow::Result<()> {
    let mut workspace = workspace_for(ctx, args.course_id).await?;

    let form = LessonForm {
        title: args.title,
        status: args.status,
        publish_date: Some(args.publish_date),
        video_url: args.video_url,
    };
    let lesson = workspace.create_lesson(&form).await?;
    println!("Added lesson #{} {}", lesson.id, lesson.title);
    Ok(())
}

async fn edit(ctx: &AppContext, args: EditArgs) -> anyhow::Result<()> {
    let mut workspace = workspace_for(ctx, args.course_id).await?;

    // Pre-fill from the cached record so unedited fields survive the
    // full-record replace.
    let current = workspace
        .lessons()
        .iter()
        .find(|l| l.id == args.lesson_id)
        .ok_or(CourseStateError::LessonNotFound(args.lesson_id))?;
    let mut form = LessonForm::from_lesson(current);
    if let Some(title) = args.title {
        form.title = title;
    }
    if let Some(status) = args.status {
        form.status = status;
    }
    if let Some(publish_date) = args.publish_date {
        form.publish_date = Some(publish_date);
    }
    if let Some(video_url) = args.video_url {
        form.video_url = video_url;
    }

    let lesson = workspace.update_lesson(args.lesson_id, &form).await?;
    println!("Updated lesson #{} {}", lesson.id, lesson.title);
    Ok(())
}

async fn rm(ctx: &AppContext, args: RmArgs) -> anyhow::Result<()> {
    let mut workspace = workspace_for(ctx, args.course_id).await?;
    workspace.delete_lesson(args.lesson_id).await?;
    println!("Deleted lesson #{}", args.lesson_id);
    Ok(())
}
