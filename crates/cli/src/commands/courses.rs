//! Course listing command.

use harvest_hearth_client::courses::{CourseFilter, filter_courses, load_courses, total_credits};

use super::Context;

/// List courses matching `filter` with their credit total.
///
/// # Errors
///
/// Returns an error if the courses file cannot be loaded.
pub async fn list(ctx: &Context, filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let courses = load_courses(&ctx.config.courses_path).await?;
    let filter = CourseFilter::from(filter);
    let shown = filter_courses(&courses, filter);

    #[allow(clippy::print_stdout)]
    {
        for course in &shown {
            let mark = if course.completed { "x" } else { " " };
            println!("[{mark}] {:<8} {} ({} credits)", course.code, course.name, course.credits);
        }
        println!(
            "Total credits ({filter}): {}",
            total_credits(shown.iter().copied())
        );
    }
    Ok(())
}
