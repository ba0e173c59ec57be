use super::card::Card;
use super::hole::Hole;
use super::rank::Rank;
use super::suit::Suit;
use rand::Rng;

/// An ordered deck of cards, dealt from the top.
///
/// [`Deck::new`] yields the full 52-card cross product in a fixed order;
/// [`Deck::shuffle`] permutes it uniformly. A fresh deck is created and fully
/// shuffled for every deal even though only the top two cards are consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh unshuffled deck: ranks outer, suits inner.
    pub fn new() -> Self {
        Self(
            Rank::all()
                .into_iter()
                .flat_map(|rank| Suit::all().into_iter().map(move |suit| Card::from((rank, suit))))
                .collect(),
        )
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Fisher-Yates against the process-wide RNG.
    pub fn shuffle(&mut self) {
        self.permute(&mut rand::rng())
    }
    /// Fisher-Yates against the given random source.
    ///
    /// Walks i from the last index down to 1, drawing j uniformly from 0..=i
    /// and swapping. Uniform over all 52! orderings for a uniform source.
    pub fn permute<R: Rng>(&mut self, rng: &mut R) {
        for i in (1..self.0.len()).rev() {
            let j = rng.random_range(0..=i);
            self.0.swap(i, j);
        }
    }
    /// Remove and return the top card.
    pub fn draw(&mut self) -> Card {
        debug_assert!(!self.0.is_empty());
        self.0.remove(0)
    }
    /// Remove the top two cards from the deck
    /// to deal as a Hole.
    pub fn hole(&mut self) -> Hole {
        let a = self.draw();
        let b = self.draw();
        Hole::from((a, b))
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.draw())
        }
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
