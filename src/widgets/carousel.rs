/// Carousel state (rendering-agnostic)
///
/// Tracks which slide is active. The slide count is fixed at load; prev and
/// next wrap around, so the index always stays in `0..count`. A carousel
/// with no slides is disabled and its controls do nothing.
#[derive(Debug, Clone)]
pub struct CarouselState {
    current: usize,
    count: usize,
}

impl CarouselState {
    /// Create a carousel over `count` slides, starting at slide 0
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    /// Switch to the previous slide, wrapping from the first to the last
    pub fn prev(&mut self) {
        if self.count > 0 {
            self.current = (self.current + self.count - 1) % self.count;
        }
    }

    /// Switch to the next slide, wrapping from the last to the first
    pub fn next(&mut self) {
        if self.count > 0 {
            self.current = (self.current + 1) % self.count;
        }
    }

    /// Index of the active slide
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides (fixed at load)
    pub fn count(&self) -> usize {
        self.count
    }

    /// True when there are no slides and the controls are no-ops
    pub fn is_disabled(&self) -> bool {
        self.count == 0
    }
}
