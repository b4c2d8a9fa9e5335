//! The proficiency rank ladder shared by skills and spells.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// A proficiency rank. Ordered `E < D < C < B < A < S`; `E` is untrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Rank {
    /// Untrained.
    #[default]
    E,
    /// Trained.
    D,
    /// Specialist.
    C,
    /// Master.
    B,
    /// Grandmaster.
    A,
    /// Legendary.
    S,
}

impl Rank {
    /// Every rank, lowest first.
    pub const LADDER: [Rank; 6] = [Rank::E, Rank::D, Rank::C, Rank::B, Rank::A, Rank::S];

    /// Position on the ladder (E = 0, S = 5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next rank up, or `None` at S.
    pub fn next(self) -> Option<Rank> {
        Self::LADDER.get(self.index() + 1).copied()
    }

    /// Returns true for the top of the ladder.
    pub fn is_max(self) -> bool {
        self == Rank::S
    }

    /// Flat roll bonus granted by this rank (E=0 up to S=10).
    pub fn bonus(self) -> i64 {
        2 * self.index() as i64
    }

    /// Human-readable proficiency title.
    pub fn title(self) -> &'static str {
        match self {
            Rank::E => "Untrained",
            Rank::D => "Trained",
            Rank::C => "Specialist",
            Rank::B => "Master",
            Rank::A => "Grandmaster",
            Rank::S => "Legendary",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
        };
        f.write_str(letter)
    }
}

impl FromStr for Rank {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "E" => Ok(Rank::E),
            "D" => Ok(Rank::D),
            "C" => Ok(Rank::C),
            "B" => Ok(Rank::B),
            "A" => Ok(Rank::A),
            "S" => Ok(Rank::S),
            _ => Err(LedgerError::InvalidRank(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_ordered() {
        for pair in Rank::LADDER.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn next_steps_one_rank() {
        assert_eq!(Rank::E.next(), Some(Rank::D));
        assert_eq!(Rank::A.next(), Some(Rank::S));
        assert_eq!(Rank::S.next(), None);
        assert!(Rank::S.is_max());
    }

    #[test]
    fn bonus_scale() {
        let bonuses: Vec<i64> = Rank::LADDER.iter().map(|r| r.bonus()).collect();
        assert_eq!(bonuses, vec![0, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("c".parse::<Rank>().unwrap(), Rank::C);
        assert_eq!(" S ".parse::<Rank>().unwrap(), Rank::S);
        assert!("Z".parse::<Rank>().is_err());
        assert_eq!(Rank::B.to_string(), "B");
        assert_eq!(Rank::B.title(), "Master");
    }

    #[test]
    fn serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Rank::A).unwrap(), "\"A\"");
        let r: Rank = serde_json::from_str("\"D\"").unwrap();
        assert_eq!(r, Rank::D);
    }
}
