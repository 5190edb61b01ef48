/// Rejection draws before falling back to a direct pick among the other slides.
const MAX_DRAWS: usize = 32;

/// What to do with the slides found at page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPlan {
    /// No container or no slides: register nothing.
    Skip,
    /// One slide: mark it and never start the timer.
    MarkOnly,
    /// Two or more slides: mark the first and rotate on the interval.
    Rotate,
}

impl StartPlan {
    /// `slide_count` is `None` when the slide container is absent.
    pub fn for_slides(slide_count: Option<usize>) -> Self {
        match slide_count {
            None | Some(0) => StartPlan::Skip,
            Some(1) => StartPlan::MarkOnly,
            Some(_) => StartPlan::Rotate,
        }
    }
}

/// One slide change: unmark `previous`, mark `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub previous: usize,
    pub next: usize,
}

impl Rotation {
    /// Apply this change to per-slide "current" markers.
    pub fn apply(self, marks: &mut [bool]) {
        if let Some(mark) = marks.get_mut(self.previous) {
            *mark = false;
        }
        if let Some(mark) = marks.get_mut(self.next) {
            *mark = true;
        }
    }
}

/// Cursor over a fixed number of slides. Exactly one slide is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// Starts at slide 0. `None` when there are no slides.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, current: 0 })
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_current(&self, index: usize) -> bool {
        index == self.current
    }

    /// Reset markers read from the page so only the current slide is marked.
    ///
    /// Returns the indices whose marker changed.
    pub fn reset_marks(&self, marks: &mut [bool]) -> Vec<usize> {
        let mut changed = Vec::new();
        for (index, mark) in marks.iter_mut().enumerate() {
            let want = self.is_current(index);
            if *mark != want {
                *mark = want;
                changed.push(index);
            }
        }
        changed
    }

    /// A single slide can never change to a different one.
    pub fn can_rotate(&self) -> bool {
        self.len >= 2
    }

    /// Move to a uniformly random slide other than the current one.
    ///
    /// `random` yields values in `[0, 1)`. Returns `None` for a single slide.
    pub fn advance(&mut self, mut random: impl FnMut() -> f64) -> Option<Rotation> {
        if !self.can_rotate() {
            return None;
        }

        let mut next = self.current;
        let mut last = 0.0;
        for _ in 0..MAX_DRAWS {
            last = random();
            next = index_for(last, self.len);
            if next != self.current {
                break;
            }
        }
        if next == self.current {
            // Map onto the n-1 other slides so a stuck source still rotates.
            let skip = index_for(last, self.len - 1);
            next = if skip >= self.current { skip + 1 } else { skip };
        }

        let rotation = Rotation {
            previous: self.current,
            next,
        };
        self.current = next;
        Some(rotation)
    }
}

fn index_for(sample: f64, len: usize) -> usize {
    let sample = if sample.is_finite() {
        sample.clamp(0.0, 1.0)
    } else {
        0.0
    };
    ((sample * len as f64).floor() as usize).min(len - 1)
}
