use serde::Deserialize;
use serde::Serialize;

/// A seat at a six-handed table.
///
/// Variants are declared in rotation order; the drill walks the hero through
/// them cyclically, one step per deal, wrapping back to the button after the
/// small blind.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "BTN")]
    Button,
    #[serde(rename = "CO")]
    Cutoff,
    #[serde(rename = "HJ")]
    Hijack,
    #[serde(rename = "MP")]
    Middle,
    #[serde(rename = "BB")]
    BigBlind,
    #[serde(rename = "SB")]
    SmallBlind,
}

impl Position {
    /// All six seats in rotation order.
    pub const fn all() -> [Self; 6] {
        [
            Position::Button,
            Position::Cutoff,
            Position::Hijack,
            Position::Middle,
            Position::BigBlind,
            Position::SmallBlind,
        ]
    }
    /// The next seat in the rotation, wrapping after the small blind.
    pub const fn next(&self) -> Self {
        match self {
            Position::Button => Position::Cutoff,
            Position::Cutoff => Position::Hijack,
            Position::Hijack => Position::Middle,
            Position::Middle => Position::BigBlind,
            Position::BigBlind => Position::SmallBlind,
            Position::SmallBlind => Position::Button,
        }
    }
    /// Short seat code, as used in the chart artifact.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Position::Button => "BTN",
            Position::Cutoff => "CO",
            Position::Hijack => "HJ",
            Position::Middle => "MP",
            Position::BigBlind => "BB",
            Position::SmallBlind => "SB",
        }
    }
    /// Full seat name.
    pub const fn label(&self) -> &'static str {
        match self {
            Position::Button => "Button",
            Position::Cutoff => "Cutoff",
            Position::Hijack => "Hijack",
            Position::Middle => "Middle Position",
            Position::BigBlind => "Big Blind",
            Position::SmallBlind => "Small Blind",
        }
    }
    /// One-line strategic summary of the seat.
    pub const fn description(&self) -> &'static str {
        match self {
            Position::Button => "Best position - acts last postflop",
            Position::Cutoff => "Second best position",
            Position::Hijack => "Middle-late position",
            Position::Middle => "Early-middle position",
            Position::BigBlind => "Forced bet - acts last preflop",
            Position::SmallBlind => "Worst position - acts first postflop",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
