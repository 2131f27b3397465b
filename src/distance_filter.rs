//! Rolling-average outlier filter over recent inter-eye distances.
//!
//! The filter keeps a FIFO window of the last accepted distances. While the
//! window is still filling, every distance is accepted; once it is full, a
//! new distance is accepted only when it deviates from the window mean by
//! less than a fixed fraction of that mean. The window mutates only on
//! acceptance and is never reset for the lifetime of a session.

use std::collections::VecDeque;

/// Outcome of offering a distance to the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Accepted while the window was still filling
    Warmup,
    /// Accepted against a full window
    Accepted,
    /// Rejected; the window is unchanged
    Rejected,
}

impl Acceptance {
    /// Whether a sample should be emitted for this outcome
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Warmup | Self::Accepted)
    }
}

/// Rolling-average scale filter with a fixed-size FIFO window
pub struct DistanceFilter {
    window_size: usize,
    tolerance: f64,
    distances: VecDeque<f64>,
}

impl DistanceFilter {
    /// Create a new filter.
    ///
    /// # Panics
    ///
    /// Panics if `window_size` is zero or `tolerance` is not positive.
    #[must_use]
    pub fn new(window_size: usize, tolerance: f64) -> Self {
        assert!(window_size > 0, "Window size must be greater than 0");
        assert!(tolerance > 0.0, "Tolerance must be positive, got {tolerance}");
        Self {
            window_size,
            tolerance,
            distances: VecDeque::with_capacity(window_size),
        }
    }

    /// Offer a distance; on acceptance the window absorbs it.
    pub fn offer(&mut self, distance: f64) -> Acceptance {
        if self.distances.len() < self.window_size {
            self.distances.push_back(distance);
            return Acceptance::Warmup;
        }

        if self.would_accept(distance) {
            self.distances.pop_front();
            self.distances.push_back(distance);
            Acceptance::Accepted
        } else {
            Acceptance::Rejected
        }
    }

    /// Acceptance predicate for a full window, without mutating it.
    ///
    /// A distance passes when its deviation from the window mean is strictly
    /// below `tolerance * mean`. An unfilled window accepts everything.
    #[must_use]
    pub fn would_accept(&self, distance: f64) -> bool {
        match self.average() {
            Some(avg) if self.distances.len() >= self.window_size => {
                (distance - avg).abs() < self.tolerance * avg
            }
            _ => true,
        }
    }

    /// Mean of the currently stored distances
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Option<f64> {
        if self.distances.is_empty() {
            return None;
        }
        Some(self.distances.iter().sum::<f64>() / self.distances.len() as f64)
    }

    /// Whether the window has not reached its fixed size yet
    #[must_use]
    pub fn is_warming_up(&self) -> bool {
        self.distances.len() < self.window_size
    }

    /// Number of stored distances
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether no distance has been accepted yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Stored distances, oldest first
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.distances.iter().copied()
    }
}
