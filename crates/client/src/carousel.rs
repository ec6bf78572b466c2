//! Testimonial carousel.
//!
//! [`Carousel`] is the plain display state: a list and a current index that
//! wraps in both directions. [`AutoAdvance`] drives it from a Tokio timer and
//! restarts the timer on every user navigation, so at most one timer is
//! pending and the user always gets a full interval on the slide they picked.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

use harvest_hearth_core::{Testimonial, TestimonialId};

use crate::catalog::{CatalogError, read_json_file};

/// Default auto-advance interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Carousel position over a list of testimonials.
///
/// An empty carousel is valid: it has no current slide and navigation does
/// nothing.
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    testimonials: Vec<Testimonial>,
    index: usize,
}

impl Carousel {
    #[must_use]
    pub const fn new(testimonials: Vec<Testimonial>) -> Self {
        Self {
            testimonials,
            index: 0,
        }
    }

    /// Load testimonials from a JSON array file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        Ok(Self::new(read_json_file(path).await?))
    }

    #[must_use]
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> Option<&Testimonial> {
        self.testimonials.get(self.index)
    }

    /// Advance one slide, wrapping to the first after the last.
    pub fn next(&mut self) {
        if !self.testimonials.is_empty() {
            self.index = (self.index + 1) % self.testimonials.len();
        }
    }

    /// Go back one slide, wrapping to the last before the first.
    pub fn previous(&mut self) {
        let len = self.testimonials.len();
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Jump to `index`, clamped to the last slide.
    pub fn go_to(&mut self, index: usize) {
        if let Some(last) = self.testimonials.len().checked_sub(1) {
            self.index = index.min(last);
        }
    }

    #[must_use]
    pub fn by_id(&self, id: TestimonialId) -> Option<&Testimonial> {
        self.testimonials.iter().find(|t| t.id == id)
    }

    /// A uniformly random testimonial.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Testimonial> {
        self.testimonials.choose(rng)
    }
}

/// Timer-driven auto-advance for a shared [`Carousel`].
///
/// Must be used from within a Tokio runtime. Dropping it stops the timer.
#[derive(Debug)]
pub struct AutoAdvance {
    carousel: Arc<Mutex<Carousel>>,
    interval: Duration,
    timer: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    #[must_use]
    pub fn new(carousel: Carousel, interval: Duration) -> Self {
        Self {
            carousel: Arc::new(Mutex::new(carousel)),
            interval,
            timer: None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Carousel> {
        // The carousel holds no invariant a panicking tick could break.
        self.carousel.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the carousel state.
    #[must_use]
    pub fn snapshot(&self) -> Carousel {
        self.lock().clone()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.lock().index()
    }

    /// Whether a timer is pending.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    /// Start (or restart) the timer; the first tick is one full interval
    /// from now.
    pub fn start(&mut self) {
        self.stop();

        let carousel = Arc::clone(&self.carousel);
        let interval = self.interval;
        let first_tick = Instant::now() + interval;

        self.timer = Some(tokio::spawn(async move {
            let mut ticker = interval_at(first_tick, interval);
            loop {
                ticker.tick().await;
                let mut state = carousel.lock().unwrap_or_else(PoisonError::into_inner);
                state.next();
                tracing::trace!(index = state.index(), "Carousel advanced");
            }
        }));
    }

    /// Cancel the pending timer, if any.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    fn navigate(&mut self, f: impl FnOnce(&mut Carousel)) {
        f(&mut self.lock());
        self.start();
    }

    /// User pressed "next": advance and restart the timer.
    pub fn next(&mut self) {
        self.navigate(Carousel::next);
    }

    /// User pressed "previous": go back and restart the timer.
    pub fn previous(&mut self) {
        self.navigate(Carousel::previous);
    }

    /// User picked a slide indicator: jump and restart the timer.
    pub fn go_to(&mut self, index: usize) {
        self.navigate(|carousel| carousel.go_to(index));
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn testimonials(n: i32) -> Vec<Testimonial> {
        (1..=n)
            .map(|i| Testimonial {
                id: TestimonialId::new(i),
                name: format!("Guest {i}"),
                title: "Diner".to_owned(),
                text: "Lovely evening.".to_owned(),
                rating: 5,
            })
            .collect()
    }

    #[test]
    fn test_navigation_wraps() {
        let mut carousel = Carousel::new(testimonials(3));
        carousel.previous();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.go_to(10);
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.current().unwrap().id, TestimonialId::new(3));
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::default();
        carousel.next();
        carousel.previous();
        carousel.go_to(3);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.current().is_none());
        assert!(carousel.random(&mut StdRng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn test_lookup_and_random() {
        let carousel = Carousel::new(testimonials(5));
        assert_eq!(carousel.by_id(TestimonialId::new(4)).unwrap().name, "Guest 4");
        assert!(carousel.by_id(TestimonialId::new(9)).is_none());
        let picked = carousel.random(&mut StdRng::seed_from_u64(7)).unwrap();
        assert!(carousel.testimonials().contains(picked));
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_ticks() {
        let mut auto = AutoAdvance::new(Carousel::new(testimonials(3)), DEFAULT_INTERVAL);
        auto.start();
        assert!(auto.is_running());

        tokio::time::sleep(Duration::from_millis(5_100)).await;
        assert_eq!(auto.index(), 1);
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(auto.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_user_navigation_restarts_timer() {
        let mut auto = AutoAdvance::new(Carousel::new(testimonials(4)), DEFAULT_INTERVAL);
        auto.start();

        tokio::time::sleep(Duration::from_secs(4)).await;
        auto.next();
        assert_eq!(auto.index(), 1);

        // The original timer would have fired at 5s.
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(auto.index(), 1);

        tokio::time::sleep(Duration::from_millis(1_500)).await;
        assert_eq!(auto.index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_timer() {
        let mut auto = AutoAdvance::new(Carousel::new(testimonials(2)), DEFAULT_INTERVAL);
        auto.start();
        auto.stop();
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(auto.index(), 0);
        assert!(!auto.is_running());
    }
}
