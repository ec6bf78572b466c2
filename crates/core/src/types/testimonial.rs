//! Customer testimonials shown in the home page carousel.

use serde::{Deserialize, Serialize};

use super::id::TestimonialId;

/// A customer testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: TestimonialId,
    pub name: String,
    /// Reviewer's role, e.g. "Food Blogger".
    pub title: String,
    pub text: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

impl Testimonial {
    /// Rating rendered as filled stars.
    #[must_use]
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating.min(5)))
    }
}
