/// Running tally of graded submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    correct: usize,
    total: usize,
}

impl Stats {
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }
    pub fn reset(&mut self) {
        *self = Self::default();
    }
    pub fn correct(&self) -> usize {
        self.correct
    }
    pub fn total(&self) -> usize {
        self.total
    }
    /// Percent of submissions graded correct, rounded to the nearest
    /// integer. Zero before the first submission.
    pub fn accuracy(&self) -> u8 {
        match self.total {
            0 => 0,
            total => ((self.correct as f64 / total as f64) * 100.0).round() as u8,
        }
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{} ({}%)", self.correct, self.total, self.accuracy())
    }
}
