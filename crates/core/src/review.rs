//! Customer reviews shown on the storefront.

use serde::{Deserialize, Serialize};

use crate::types::{Rating, RatingError, ReviewId};

/// A customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    pub rating: Rating,
    pub text: String,
}

impl Review {
    /// Create a review, validating the star rating.
    ///
    /// # Errors
    ///
    /// Returns `RatingError` if `stars` is outside 1..=5.
    pub fn new(id: u32, author: &str, stars: u8, text: &str) -> Result<Self, RatingError> {
        Ok(Self {
            id: ReviewId::new(id),
            author: author.to_owned(),
            rating: Rating::new(stars)?,
            text: text.to_owned(),
        })
    }
}

/// Unwrap a star count at compile time; an out-of-range seed fails the build.
const fn seed_rating(stars: u8) -> Rating {
    match Rating::new(stars) {
        Ok(rating) => rating,
        Err(_) => panic!("seeded review rating out of range"),
    }
}

/// Seed data for the featured reviews: id, author, rating, text.
const FEATURED: [(u32, &str, Rating, &str); 3] = [
    (
        1,
        "Алексей М.",
        seed_rating(5),
        "Отличные коврики! EVA материал показал себя прекрасно зимой.",
    ),
    (
        2,
        "Мария К.",
        seed_rating(5),
        "Кожзам выглядит очень премиально, качество на высоте!",
    ),
    (
        3,
        "Дмитрий П.",
        seed_rating(4),
        "Автовойлок мягкий и приятный. Рекомендую!",
    ),
];

/// The reviews featured on the home page.
#[must_use]
pub fn featured_reviews() -> Vec<Review> {
    FEATURED
        .iter()
        .map(|&(id, author, rating, text)| Review {
            id: ReviewId::new(id),
            author: author.to_owned(),
            rating,
            text: text.to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_reviews() {
        let reviews = featured_reviews();
        assert_eq!(reviews.len(), 3);
        let stars: Vec<u8> = reviews.iter().map(|r| r.rating.stars()).collect();
        assert_eq!(stars, vec![5, 5, 4]);
    }

    #[test]
    fn test_every_seed_is_featured() {
        let reviews = featured_reviews();
        assert_eq!(reviews.len(), FEATURED.len());
        let ids: Vec<u32> = reviews.iter().map(|r| r.id.as_u32()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_seed_rating_matches_validated_rating() {
        assert_eq!(Some(seed_rating(4)), Rating::new(4).ok());
        assert_eq!(seed_rating(1).stars(), Rating::MIN);
        assert_eq!(seed_rating(5).stars(), Rating::MAX);
    }

    #[test]
    fn test_review_rejects_bad_rating() {
        assert!(Review::new(9, "Тест", 0, "…").is_err());
        assert!(Review::new(9, "Тест", 3, "…").is_ok());
    }
}
