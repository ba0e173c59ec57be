#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// str isomorphism
/// rank symbol followed by suit symbol, e.g. "As" or "7c"
impl From<&str> for Card {
    fn from(s: &str) -> Self {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => Self {
                rank: Rank::try_from(r).expect("valid rank symbol"),
                suit: Suit::try_from(u).expect("valid suit symbol"),
            },
            _ => panic!("malformed card string: {:?}", s),
        }
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self::from(rand::random_range(0..52u8))
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let card = Card::from("Ts");
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn bijective_str() {
        let card = Card::random();
        assert_eq!(card, Card::from(card.to_string().as_str()));
    }

    #[test]
    #[should_panic]
    fn rejects_uppercase_suit() {
        let _ = Card::from("AS");
    }

    #[test]
    #[should_panic]
    fn rejects_missing_suit() {
        let _ = Card::from("A");
    }
}

use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use std::fmt::{Display, Formatter};
