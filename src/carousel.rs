use std::time::{Duration, Instant};

/// How long a slide change takes to play out on screen.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// What the slideshow should draw at a given instant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SlidePhase {
    /// Previous slide fading out.
    Leaving(usize),
    /// New slide fading in.
    Entering(usize),
    Settled(usize),
}

#[derive(Clone, Copy, Debug)]
struct Transition {
    from: usize,
    started_at: Instant,
}

/// An ordered sequence with a wraparound cursor.
///
/// An empty carousel has no cursor; `advance`/`retreat` are no-ops and
/// `current` is `None`.
#[derive(Debug)]
pub struct Carousel<T> {
    items: Vec<T>,
    cursor: usize,
    transition: Option<Transition>,
}

impl<T> Default for Carousel<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, cursor: 0, transition: None }
    }

    /// Installs a new sequence and puts the cursor back on the first item.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.cursor = 0;
        self.transition = None;
    }

    pub fn advance(&mut self) {
        let n = self.items.len();
        if n > 0 {
            self.move_to((self.cursor + 1) % n);
        }
    }

    pub fn retreat(&mut self) {
        let n = self.items.len();
        if n > 0 {
            self.move_to((self.cursor + n - 1) % n);
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    pub fn cursor(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.cursor)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn phase_at(&self, now: Instant) -> Option<SlidePhase> {
        let cursor = self.cursor()?;
        let Some(transition) = self.transition else {
            return Some(SlidePhase::Settled(cursor));
        };
        let elapsed = now.saturating_duration_since(transition.started_at);
        Some(if elapsed >= TRANSITION_DURATION {
            SlidePhase::Settled(cursor)
        } else if elapsed < TRANSITION_DURATION / 2 {
            SlidePhase::Leaving(transition.from)
        } else {
            SlidePhase::Entering(cursor)
        })
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !matches!(self.phase_at(now), Some(SlidePhase::Settled(_)) | None)
    }

    fn move_to(&mut self, next: usize) {
        if next != self.cursor {
            self.transition = Some(Transition { from: self.cursor, started_at: Instant::now() });
        }
        self.cursor = next;
    }
}
