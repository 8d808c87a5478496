//! Instructor roster commands.

use clap::{Args, Subcommand};
use course_state::CourseWorkspace;
use entities::Course;

use super::AppContext;

#[derive(Subcommand)]
pub enum InstructorCommand {
    /// Fetch a random instructor suggestion without saving anything
    Suggest,
    /// Add a suggested instructor to a course you created
    Add(AddArgs),
    /// Remove an instructor from a course you created
    Rm(RmArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Course id
    pub course_id: u64,
}

#[derive(Args)]
pub struct RmArgs {
    /// Course id
    pub course_id: u64,

    /// Id of the instructor to remove
    pub user_id: u64,
}

pub async fn run(ctx: &AppContext, command: InstructorCommand) -> anyhow::Result<()> {
    match command {
        InstructorCommand::Suggest => suggest(ctx).await,
        InstructorCommand::Add(args) => add(ctx, args).await,
        InstructorCommand::Rm(args) => rm(ctx, args).await,
    }
}

async fn suggest(ctx: &AppContext) -> anyhow::Result<()> {
    let suggestion = ctx.client.suggest_instructor().await?;
    println!("Suggested instructor: {} <{}>", suggestion.name, suggestion.email);
    Ok(())
}

async fn add(ctx: &AppContext, args: AddArgs) -> anyhow::Result<()> {
    let user = ctx.current_user()?;
    let mut workspace =
        CourseWorkspace::load(ctx.client.clone(), user.clone(), args.course_id).await?;

    let suggestion = ctx.client.suggest_instructor().await?;
    println!("Adding {} <{}>...", suggestion.name, suggestion.email);

    let created = workspace.add_instructor(suggestion).await?;
    println!("Added instructor #{}", created.id);
    print_roster(&workspace);
    Ok(())
}

async fn rm(ctx: &AppContext, args: RmArgs) -> anyhow::Result<()> {
    let user = ctx.current_user()?;
    let mut workspace =
        CourseWorkspace::load(ctx.client.clone(), user.clone(), args.course_id).await?;

    workspace.remove_instructor(args.user_id).await?;
    println!("Removed instructor #{}", args.user_id);
    print_roster(&workspace);
    Ok(())
}

fn print_roster(workspace: &CourseWorkspace) {
    let course: &Course = workspace.course();
    println!("Instructors of #{} {}:", course.id, course.name);
    for instructor in workspace.instructors() {
        let marker = if course.is_creator(instructor.id) {
            " (creator)"
        } else {
            ""
        };
        println!("  #{} {} <{}>{marker}", instructor.id, instructor.name, instructor.email);
    }
}
