//! Catalog entities as read from the store.

use crate::response::{GameRecord, RelatedRecord};

#[derive(Clone, Debug, PartialEq)]
pub struct Publisher {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// A game row with its foreign keys, plus whatever the outer joins found for them.
///
/// `publisher` is `None` whenever `publisher_id` is null or points at a missing row; the same holds
/// for `category`. Filters look at the foreign keys, records at the joined rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub star_rating: Option<f64>,
    pub publisher_id: Option<i64>,
    pub category_id: Option<i64>,
    pub publisher: Option<Publisher>,
    pub category: Option<Category>,
}

impl Game {
    /// Convert to the serializable record returned by the API.
    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            publisher: self.publisher.as_ref().map(|p| RelatedRecord {
                id: p.id,
                name: p.name.clone(),
            }),
            category: self.category.as_ref().map(|c| RelatedRecord {
                id: c.id,
                name: c.name.clone(),
            }),
            star_rating: self.star_rating,
        }
    }
}
