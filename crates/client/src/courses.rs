//! Certificate course listing.

use core::fmt;
use std::path::Path;

use harvest_hearth_core::Course;

use crate::catalog::{CatalogError, read_json_file};

/// Subject filter for the course list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Wdd,
    Cse,
}

impl CourseFilter {
    #[must_use]
    pub fn matches(self, course: &Course) -> bool {
        match self {
            Self::All => true,
            Self::Wdd => course.code.starts_with("WDD"),
            Self::Cse => course.code.starts_with("CSE"),
        }
    }
}

impl From<&str> for CourseFilter {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "wdd" => Self::Wdd,
            "cse" => Self::Cse,
            _ => Self::All,
        }
    }
}

impl fmt::Display for CourseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Wdd => "wdd",
            Self::Cse => "cse",
        })
    }
}

/// Load the course list from a JSON array file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn load_courses(path: &Path) -> Result<Vec<Course>, CatalogError> {
    read_json_file(path).await
}

/// Courses matching `filter`, in listing order.
#[must_use]
pub fn filter_courses(courses: &[Course], filter: CourseFilter) -> Vec<&Course> {
    courses.iter().filter(|c| filter.matches(c)).collect()
}

/// Sum of credits over `courses`.
#[must_use]
pub fn total_credits<'a>(courses: impl IntoIterator<Item = &'a Course>) -> u32 {
    courses.into_iter().map(|c| c.credits).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, credits: u32, completed: bool) -> Course {
        Course {
            code: code.to_owned(),
            name: String::new(),
            credits,
            completed,
        }
    }

    fn courses() -> Vec<Course> {
        vec![
            course("CSE 110", 2, true),
            course("WDD 130", 2, true),
            course("CSE 111", 2, true),
            course("CSE 210", 2, false),
            course("WDD 131", 2, true),
            course("WDD 231", 3, false),
        ]
    }

    #[test]
    fn test_filter_by_prefix() {
        let all = courses();
        assert_eq!(filter_courses(&all, CourseFilter::All).len(), 6);
        assert_eq!(filter_courses(&all, CourseFilter::Wdd).len(), 3);
        assert_eq!(filter_courses(&all, CourseFilter::Cse).len(), 3);
    }

    #[test]
    fn test_total_credits() {
        let all = courses();
        assert_eq!(total_credits(&all), 13);
        assert_eq!(total_credits(filter_courses(&all, CourseFilter::Wdd)), 7);
        assert_eq!(total_credits(&[]), 0);
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(CourseFilter::from("WDD"), CourseFilter::Wdd);
        assert_eq!(CourseFilter::from("cse"), CourseFilter::Cse);
        assert_eq!(CourseFilter::from("anything"), CourseFilter::All);
    }
}
