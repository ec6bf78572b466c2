//! Testimonial carousel commands.

use harvest_hearth_client::carousel::{AutoAdvance, Carousel};
use harvest_hearth_client::ClientError;
use harvest_hearth_core::{Testimonial, TestimonialId};

use super::Context;

async fn load(ctx: &Context) -> Result<Carousel, ClientError> {
    Ok(Carousel::load(&ctx.config.testimonials_path).await?)
}

fn print_testimonial(testimonial: &Testimonial) {
    #[allow(clippy::print_stdout)]
    {
        println!("\"{}\"", testimonial.text);
        println!(
            "  - {}, {} {}",
            testimonial.name,
            testimonial.title,
            testimonial.stars()
        );
    }
}

/// Print every testimonial.
///
/// # Errors
///
/// Returns an error if the testimonials file cannot be loaded.
pub async fn list(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    load(ctx).await?.testimonials().iter().for_each(print_testimonial);
    Ok(())
}

/// Print one testimonial by ID.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or has no such testimonial.
pub async fn show(ctx: &Context, id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let carousel = load(ctx).await?;
    let testimonial = carousel
        .by_id(TestimonialId::new(id))
        .ok_or_else(|| ClientError::NotFound(format!("testimonial {id}")))?;
    print_testimonial(testimonial);
    Ok(())
}

/// Print a random testimonial.
///
/// # Errors
///
/// Returns an error if the testimonials file cannot be loaded.
pub async fn random(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let carousel = load(ctx).await?;
    if let Some(testimonial) = carousel.random(&mut rand::rng()) {
        print_testimonial(testimonial);
    }
    Ok(())
}

/// Run the auto-advancing carousel for `slides` slides.
///
/// # Errors
///
/// Returns an error if the testimonials file cannot be loaded.
pub async fn play(ctx: &Context, slides: usize) -> Result<(), Box<dyn std::error::Error>> {
    let carousel = load(ctx).await?;
    if carousel.testimonials().is_empty() {
        return Err(ClientError::NotFound("testimonials".to_owned()).into());
    }

    let interval = ctx.config.carousel_interval;
    let mut auto = AutoAdvance::new(carousel, interval);
    auto.start();

    for shown in 0..slides {
        if shown > 0 {
            tokio::time::sleep(interval).await;
        }
        if let Some(testimonial) = auto.snapshot().current() {
            print_testimonial(testimonial);
        }
    }
    auto.stop();
    Ok(())
}
