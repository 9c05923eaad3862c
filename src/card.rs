//! Card types and deck-size constants.

use core::fmt;

/// Card suit.
///
/// Suits carry no ordering significance in War; they are only displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in the order a fresh deck is built.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, ordered from Two (lowest) to Ace (highest).
///
/// The discriminant is the rank's ordinal, so comparing two ranks is a plain
/// integer comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// 2.
    Two = 2,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the ordinal of the rank (2 for Two, 14 for Ace).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the short label printed for the rank.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Compares this card to `other` by rank only.
    ///
    /// The result is positive if this card ranks higher, negative if it ranks
    /// lower and zero if the ranks are equal, whatever the suits.
    ///
    /// ```
    /// use warsim::{Card, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Clubs);
    /// let ten = Card::new(Rank::Ten, Suit::Hearts);
    /// assert!(ace.compare(&ten) > 0);
    /// assert!(ten.compare(&ace) < 0);
    /// assert_eq!(ten.compare(&Card::new(Rank::Ten, Suit::Spades)), 0);
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "rank ordinals are at most 14")]
    pub const fn compare(&self, other: &Self) -> i8 {
        self.rank.ordinal() as i8 - other.rank.ordinal() as i8
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards dealt to each player.
pub const HAND_SIZE: usize = DECK_SIZE / 2;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn ranks_are_strictly_ascending() {
        for pair in Rank::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].ordinal() + 1, pair[1].ordinal());
        }
        assert_eq!(Rank::Two.ordinal(), 2);
        assert_eq!(Rank::Ace.ordinal(), 14);
    }

    #[test]
    fn compare_ignores_suit() {
        for rank in Rank::ALL {
            for a in Suit::ALL {
                for b in Suit::ALL {
                    assert_eq!(Card::new(rank, a).compare(&Card::new(rank, b)), 0);
                }
            }
        }
    }

    #[test]
    fn compare_uses_rank_order_not_label() {
        let ten = Card::new(Rank::Ten, Suit::Hearts);
        let nine = Card::new(Rank::Nine, Suit::Hearts);
        let jack = Card::new(Rank::Jack, Suit::Hearts);
        assert_eq!(ten.compare(&nine), 1);
        assert_eq!(jack.compare(&ten), 1);
        assert_eq!(
            Card::new(Rank::Two, Suit::Spades).compare(&Card::new(Rank::Ace, Suit::Spades)),
            -12
        );
    }

    #[test]
    fn display_names_rank_and_suit() {
        assert_eq!(
            Card::new(Rank::Ten, Suit::Hearts).to_string(),
            "10 of Hearts"
        );
        assert_eq!(
            Card::new(Rank::Queen, Suit::Clubs).to_string(),
            "Q of Clubs"
        );
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A of Spades");
    }
}
