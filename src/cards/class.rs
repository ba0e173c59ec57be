use super::card::Card;
use super::hole::Hole;
use super::rank::Rank;
use crate::Arbitrary;

/// Canonical label for a two-card starting hand, abstracting away exact suits.
///
/// Non-pair variants store (high, low) with high strictly above low, so the
/// label is independent of draw order. 169 classes in total: 13 pairs, 78
/// suited, 78 offsuit. Renders per the usual grammar: "AA", "AKs", "T9o".
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Class {
    Pair(Rank),
    Suited(Rank, Rank),
    Offsuit(Rank, Rank),
}

impl Class {
    /// The stronger of the two ranks.
    pub fn high(&self) -> Rank {
        match self {
            Class::Pair(r) => *r,
            Class::Suited(h, _) | Class::Offsuit(h, _) => *h,
        }
    }
    /// The weaker of the two ranks.
    pub fn low(&self) -> Rank {
        match self {
            Class::Pair(r) => *r,
            Class::Suited(_, l) | Class::Offsuit(_, l) => *l,
        }
    }
    pub fn is_pair(&self) -> bool {
        matches!(self, Class::Pair(_))
    }
    /// Enumerate all 169 classes.
    pub fn all() -> Vec<Self> {
        let ranks = Rank::all();
        let mut classes = ranks.iter().map(|&r| Self::Pair(r)).collect::<Vec<Self>>();
        for (i, &hi) in ranks.iter().enumerate() {
            for &lo in &ranks[..i] {
                classes.push(Self::Suited(hi, lo));
                classes.push(Self::Offsuit(hi, lo));
            }
        }
        classes
    }
}

/// Canonicalization. Fails on two identical cards, which a well-formed
/// deck never deals.
impl TryFrom<(Card, Card)> for Class {
    type Error = anyhow::Error;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        if a == b {
            anyhow::bail!("identical cards dealt into one hole: {} {}", a, b);
        }
        Ok(match (a.rank(), b.rank()) {
            (x, y) if x == y => Self::Pair(x),
            (x, y) => {
                let (hi, lo) = if x > y { (x, y) } else { (y, x) };
                match a.suit() == b.suit() {
                    true => Self::Suited(hi, lo),
                    false => Self::Offsuit(hi, lo),
                }
            }
        })
    }
}

/// A Hole is two distinct cards by construction.
impl From<Hole> for Class {
    fn from(hole: Hole) -> Self {
        Self::try_from((hole.first(), hole.second())).expect("hole cards are distinct")
    }
}

/// str isomorphism, strict: two rank symbols high-first, with a
/// suited/offsuit suffix exactly when the ranks differ.
impl TryFrom<&str> for Class {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(h), Some(l), None, None) => {
                let hi = Rank::try_from(h)?;
                let lo = Rank::try_from(l)?;
                anyhow::ensure!(hi == lo, "non-pair class needs a suffix: {:?}", s);
                Ok(Self::Pair(hi))
            }
            (Some(h), Some(l), Some(x), None) => {
                let hi = Rank::try_from(h)?;
                let lo = Rank::try_from(l)?;
                anyhow::ensure!(hi > lo, "ranks out of order in class: {:?}", s);
                match x {
                    's' => Ok(Self::Suited(hi, lo)),
                    'o' => Ok(Self::Offsuit(hi, lo)),
                    _ => Err(anyhow::anyhow!("unknown class suffix: {:?}", s)),
                }
            }
            _ => Err(anyhow::anyhow!("malformed class string: {:?}", s)),
        }
    }
}

impl Arbitrary for Class {
    fn random() -> Self {
        Self::from(Hole::random())
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Class::Pair(r) => write!(f, "{}{}", r, r),
            Class::Suited(h, l) => write!(f, "{}{}s", h, l),
            Class::Offsuit(h, l) => write!(f, "{}{}o", h, l),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(s: &str) -> Class {
        Class::from(Hole::from(s))
    }

    #[test]
    fn pairs_repeat_the_rank() {
        assert_eq!(class("As Ad").to_string(), "AA");
        assert_eq!(class("2c 2h").to_string(), "22");
        for rank in Rank::all() {
            let label = Class::Pair(rank).to_string();
            assert_eq!(label.len(), 2);
            assert!(label.chars().all(|c| c == rank.to_string().chars().next().unwrap()));
        }
    }

    #[test]
    fn higher_rank_leads() {
        assert_eq!(class("Kd Ah").to_string(), "AKo");
        assert_eq!(class("Ah Kd").to_string(), "AKo");
        assert_eq!(class("5c Th").to_string(), "T5o");
    }

    #[test]
    fn suffix_tracks_suitedness() {
        assert_eq!(class("Ah Kh").to_string(), "AKs");
        assert_eq!(class("Ah Kd").to_string(), "AKo");
        assert_eq!(class("9s 8s").to_string(), "98s");
    }

    #[test]
    fn order_independent() {
        for _ in 0..1000 {
            let hole = Hole::random();
            let forward = Class::try_from((hole.first(), hole.second())).unwrap();
            let reverse = Class::try_from((hole.second(), hole.first())).unwrap();
            assert_eq!(forward, reverse);
        }
    }

    #[test]
    fn label_is_two_or_three_chars() {
        for _ in 0..1000 {
            let class = Class::random();
            let label = class.to_string();
            match class.is_pair() {
                true => assert_eq!(label.len(), 2),
                false => assert_eq!(label.len(), 3),
            }
        }
    }

    #[test]
    fn identical_cards_rejected() {
        let card = Card::from("As");
        assert!(Class::try_from((card, card)).is_err());
    }

    #[test]
    fn bijective_str() {
        let classes = Class::all();
        assert_eq!(classes.len(), 169);
        for class in classes {
            assert_eq!(class, Class::try_from(class.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn rejects_malformed_str() {
        assert!(Class::try_from("A").is_err());
        assert!(Class::try_from("AK").is_err());
        assert!(Class::try_from("KAs").is_err());
        assert!(Class::try_from("AAs").is_err());
        assert!(Class::try_from("AKx").is_err());
        assert!(Class::try_from("AKso").is_err());
    }
}
