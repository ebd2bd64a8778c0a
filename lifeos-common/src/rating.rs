use crate::BookError;

/// Number of units in the star indicator
pub const MAX_RATING: u8 = 5;

/// Personal rating, 0 (unrated) through 5
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i64) -> Result<Self, BookError> {
        if (0..=i64::from(MAX_RATING)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(BookError::RatingOutOfRange(value))
        }
    }

    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, i64::from(MAX_RATING)) as u8)
    }

    pub fn stars(self) -> u8 {
        self.0
    }

    /// A rating of zero means the book has not been rated yet
    pub fn is_rated(self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<i64> for Rating {
    type Error = BookError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
