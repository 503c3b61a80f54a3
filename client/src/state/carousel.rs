//! Promotional slides cycling behind the auth card.
//!
//! The page owns the interval; this module only tracks which slide is up.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub caption: &'static str,
}

pub const SLIDES: &[Slide] = &[
    Slide { title: "Patients first", caption: "Records, appointments, and history in one place." },
    Slide { title: "Care teams, connected", caption: "Schedules and clinical tools for every doctor." },
    Slide { title: "Run the facility", caption: "Resources and operations at a glance." },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    slides: &'static [Slide],
    index: usize,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(SLIDES)
    }
}

impl Carousel {
    #[must_use]
    pub fn new(slides: &'static [Slide]) -> Self {
        Self { slides, index: 0 }
    }

    /// Move to the next slide, wrapping after the last.
    pub fn advance(&mut self) {
        if !self.slides.is_empty() {
            self.index = (self.index + 1) % self.slides.len();
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> Option<&'static Slide> {
        self.slides.get(self.index)
    }

    #[must_use]
    pub fn slides(&self) -> &'static [Slide] {
        self.slides
    }
}
