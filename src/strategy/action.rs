#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl Action {
    /// All three decisions in prompt order.
    pub const fn all() -> [Self; 3] {
        [Action::Fold, Action::Call, Action::Raise]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Action::Fold => "Fold",
            Action::Call => "Call",
            Action::Raise => "Raise",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Action::Fold => write!(f, "{}", "FOLD".red()),
            Action::Call => write!(f, "{}", "CALL".yellow()),
            Action::Raise => write!(f, "{}", "RAISE".green()),
        }
    }
}

use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Action::Raise).unwrap(), "\"raise\"");
        assert_eq!(serde_json::from_str::<Action>("\"fold\"").unwrap(), Action::Fold);
        assert!(serde_json::from_str::<Action>("\"shove\"").is_err());
    }
}
