use std::time::Instant;

/// Monotonic clock measuring elapsed seconds since startup.
///
/// The animation is a pure function of this value, so keeping the clock
/// separate from the render loop keeps the matrix computation testable.
#[derive(Debug, Clone)]
pub struct RenderClock {
    start: Instant,
}

impl RenderClock {
    /// Starts the clock at the current instant.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds elapsed since `start` was called.
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_non_negative_and_non_decreasing() {
        let clock = RenderClock::start();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
