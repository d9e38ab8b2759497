use chrono::Datelike as _;
use maud::html;

use crate::dom;
use crate::page::{Feature, Page};

pub const PARTICLE_COUNT: usize = 50;

struct Particle {
    size: f64,
    top: f64,
    left: f64,
    duration: f64,
    delay: f64,
}

impl Particle {
    fn random(rng: &mut impl rand::Rng) -> Self {
        Self {
            size: rng.gen_range(1.0..5.0),
            top: rng.gen_range(0.0..100.0),
            left: rng.gen_range(0.0..100.0),
            duration: rng.gen_range(10.0..20.0),
            delay: rng.gen_range(0.0..5.0),
        }
    }

    fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; top: {:.2}%; left: {:.2}%; \
             animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.top,
            self.left,
            self.duration,
            self.delay,
            size = self.size,
        )
    }
}

pub(crate) fn init_particles(page: &mut Page) -> Option<Feature> {
    let container = dom::by_id(&page.document, "particles")?;
    let particles: Vec<Particle> = (0..PARTICLE_COUNT)
        .map(|_| Particle::random(&mut page.rng))
        .collect();
    let markup = html! {
        @for particle in &particles {
            div class="particle" style=(particle.style()) {}
        }
    }
    .into_string();
    for node in dom::fragment(&markup) {
        container.append(node);
    }
    tracing::debug!(count = particles.len(), "particles added");
    Some(Feature::Particles)
}

pub(crate) fn init_year(page: &mut Page) -> Option<Feature> {
    let stamp = dom::by_id(&page.document, "year")?;
    dom::set_text(&stamp, &page.today.year().to_string());
    Some(Feature::YearStamp)
}
