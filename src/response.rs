//! JSON shapes returned by the API.

use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope: `{"error": "<message>"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Public representation of a game, with its publisher and category folded in.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GameRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// `null` when the game has no publisher.
    pub publisher: Option<RelatedRecord>,
    /// `null` when the game has no category.
    pub category: Option<RelatedRecord>,
    #[serde(rename = "starRating")]
    pub star_rating: Option<f64>,
}

/// Id and display name of a joined publisher or category.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RelatedRecord {
    pub id: i64,
    pub name: String,
}
