//! Course dashboard, detail view, and course editing commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use course_state::{CourseForm, CourseWorkspace, LessonFilter};
use entities::LessonStatus;

use super::AppContext;

#[derive(Subcommand)]
pub enum CourseCommand {
    /// Show a course with its instructors and a page of its lessons
    Show(ShowArgs),
    /// Create a new course; you become its creator and sole instructor
    Create(CreateArgs),
    /// Edit a course you created
    Edit(EditArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Course id
    pub id: u64,

    /// Only show lessons whose title contains this term
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only show lessons with this status (draft, published, archived)
    #[arg(long)]
    pub status: Option<LessonStatus>,

    /// Page of the filtered lesson list
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Lessons per page
    #[arg(long, default_value_t = course_state::DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Course name (at least 3 characters)
    #[arg(long)]
    pub name: String,

    /// Optional description
    #[arg(long)]
    pub description: Option<String>,

    /// First day of the course (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: NaiveDate,

    /// Last day of the course (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: NaiveDate,
}

#[derive(Args)]
pub struct EditArgs {
    /// Course id
    pub id: u64,

    /// New course name
    #[arg(long)]
    pub name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// New end date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
}

pub async fn run(ctx: &AppContext, command: CourseCommand) -> anyhow::Result<()> {
    match command {
        CourseCommand::Show(args) => show(ctx, args).await,
        CourseCommand::Create(args) => create(ctx, args).await,
        CourseCommand::Edit(args) => edit(ctx, args).await,
    }
}

/// The dashboard: every course the user created or teaches.
pub async fn list(ctx: &AppContext) -> anyhow::Result<()> {
    let user = ctx.current_user()?;
    let courses = course_state::courses_for_user(&ctx.client, user).await?;

    if courses.is_empty() {
        println!("No courses yet; create one with `course-sphere course create`");
        return Ok(());
    }

    for course in courses {
        let role = if course.is_creator(user.id) {
            "creator"
        } else {
            "instructor"
        };
        println!(
            "#{} {} ({} → {}) [{role}]",
            course.id, course.name, course.start_date, course.end_date
        );
    }
    Ok(())
}

async fn show(ctx: &AppContext, args: ShowArgs) -> anyhow::Result<()> {
    let user = ctx.current_user()?;
    let workspace = CourseWorkspace::load(ctx.client.clone(), user.clone(), args.id).await?;

    let course = workspace.course();
    println!("#{} {}", course.id, course.name);
    if let Some(description) = &course.description {
        println!("  {description}");
    }
    println!("  {} → {}", course.start_date, course.end_date);

    let permissions = workspace.permissions();
    if permissions.can_edit_course {
        println!("  (you created this course and can edit it)");
    } else if permissions.can_add_lesson {
        println!("  (you teach this course and can add lessons)");
    }

    println!("\nInstructors:");
    for instructor in workspace.instructors() {
        let marker = if course.is_creator(instructor.id) {
            " (creator)"
        } else {
            ""
        };
        println!("  {} <{}>{marker}", instructor.name, instructor.email);
    }

    let mut filter = LessonFilter::default();
    filter.set_search(args.search);
    filter.set_status(args.status);
    filter.page_size = args.page_size.max(1);
    filter.set_page(args.page);

    let view = workspace.visible_lessons(&filter);
    println!(
        "\nLessons (page {}/{}, {} matching):",
        view.page,
        view.page_count.max(1),
        view.total
    );
    if view.items.is_empty() {
        println!("  No lessons match these filters");
    }
    for lesson in &view.items {
        let editable = if workspace.can_edit_lesson(lesson) {
            " *"
        } else {
            ""
        };
        println!(
            "  #{} [{}] {} — publishes {}{editable}",
            lesson.id, lesson.status, lesson.title, lesson.publish_date
        );
    }
    Ok(())
}

async fn create(ctx: &AppContext, args: CreateArgs) -> anyhow::Result<()> {
    let user = ctx.current_user()?;
    let form = CourseForm {
        name: args.name,
        description: args.description,
        start_date: Some(args.start_date),
        end_date: Some(args.end_date),
    };

    let course = course_state::create_course(&ctx.client, user, &form).await?;
    println!("Created course #{} {}", course.id, course.name);
    Ok(())
}

async fn edit(ctx: &AppContext, args: EditArgs) -> anyhow::Result<()> {
    let user = ctx.current_user()?;

    // Pre-fill from the current record so unedited fields survive the
    // full-record replace.
    let current = ctx.client.get_course(args.id).await?;
    let mut form = CourseForm::from_course(&current);
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(description) = args.description {
        form.description = Some(description);
    }
    if let Some(start_date) = args.start_date {
        form.start_date = Some(start_date);
    }
    if let Some(end_date) = args.end_date {
        form.end_date = Some(end_date);
    }

    let course = course_state::update_course(&ctx.client, user, args.id, &form).await?;
    println!("Updated course #{} {}", course.id, course.name);
    Ok(())
}
