//! Composable game query: games left-joined to publishers and categories, plus equality filters.

use crate::models::Game;

const GAMES_TABLE: &str = "games";
const PUBLISHERS_TABLE: &str = "publishers";
const CATEGORIES_TABLE: &str = "categories";

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<i64>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: i64) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// Equality predicate on the games table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameFilter {
    Id(i64),
    CategoryId(i64),
    PublisherId(i64),
}

impl GameFilter {
    fn column(&self) -> &'static str {
        match self {
            GameFilter::Id(_) => "id",
            GameFilter::CategoryId(_) => "category_id",
            GameFilter::PublisherId(_) => "publisher_id",
        }
    }

    fn value(&self) -> i64 {
        match *self {
            GameFilter::Id(v) | GameFilter::CategoryId(v) | GameFilter::PublisherId(v) => v,
        }
    }

    /// Evaluate against a game's own columns, like the SQL WHERE does. A null foreign key never matches;
    /// whether the join found the referenced row does not matter.
    pub fn matches(&self, game: &Game) -> bool {
        match *self {
            GameFilter::Id(id) => game.id == id,
            GameFilter::CategoryId(id) => game.category_id == Some(id),
            GameFilter::PublisherId(id) => game.publisher_id == Some(id),
        }
    }
}

/// Games joined to their publisher and category, narrowed by ANDed filters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameQuery {
    filters: Vec<GameFilter>,
    limit: Option<u32>,
}

/// Fresh unfiltered query. Every call returns a new value; nothing is shared between requests.
pub fn base_query() -> GameQuery {
    GameQuery::default()
}

impl GameQuery {
    pub fn filter(mut self, filter: GameFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_id(self, id: i64) -> Self {
        self.filter(GameFilter::Id(id))
    }

    pub fn with_category(self, category_id: i64) -> Self {
        self.filter(GameFilter::CategoryId(category_id))
    }

    pub fn with_publisher(self, publisher_id: i64) -> Self {
        self.filter(GameFilter::PublisherId(publisher_id))
    }

    pub fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn filters(&self) -> &[GameFilter] {
        &self.filters
    }

    pub fn row_limit(&self) -> Option<u32> {
        self.limit
    }

    /// True when `game` passes every filter.
    pub fn matches(&self, game: &Game) -> bool {
        self.filters.iter().all(|f| f.matches(game))
    }

    /// SELECT with both LEFT JOINs, WHERE from filters (params bound in filter order), ORDER BY game id.
    /// Integer and float columns are cast so rows decode as i64/f64 whatever the column width.
    pub fn to_sql(&self, schema: &str) -> QueryBuf {
        let mut q = QueryBuf::new();
        let games = qualified_table(schema, GAMES_TABLE);
        let publishers = qualified_table(schema, PUBLISHERS_TABLE);
        let categories = qualified_table(schema, CATEGORIES_TABLE);

        let select = [
            "g.\"id\"::int8 AS \"id\"",
            "g.\"title\" AS \"title\"",
            "g.\"description\" AS \"description\"",
            "g.\"star_rating\"::float8 AS \"star_rating\"",
            "g.\"publisher_id\"::int8 AS \"publisher_id\"",
            "g.\"category_id\"::int8 AS \"category_id\"",
            "p.\"id\"::int8 AS \"joined_publisher_id\"",
            "p.\"name\" AS \"publisher_name\"",
            "p.\"description\" AS \"publisher_description\"",
            "c.\"id\"::int8 AS \"joined_category_id\"",
            "c.\"name\" AS \"category_name\"",
            "c.\"description\" AS \"category_description\"",
        ]
        .join(", ");

        let mut where_parts = Vec::new();
        for f in &self.filters {
            let n = q.push_param(f.value());
            where_parts.push(format!("g.{} = ${}::int8", quoted(f.column()), n));
        }
        let where_clause = if where_parts.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", where_parts.join(" AND "))
        };
        let limit_clause = self
            .limit
            .map(|n| format!(" LIMIT {}", n))
            .unwrap_or_default();

        q.sql = format!(
            "SELECT {} FROM {} g LEFT JOIN {} p ON g.\"publisher_id\" = p.\"id\" LEFT JOIN {} c ON g.\"category_id\" = c.\"id\"{} ORDER BY g.\"id\"{}",
            select, games, publishers, categories, where_clause, limit_clause
        );
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Publisher};

    #[test]
    fn base_query_left_joins_without_filters() {
        let q = base_query().to_sql("public");
        assert!(q.sql.contains(
            "FROM \"public\".\"games\" g LEFT JOIN \"public\".\"publishers\" p ON g.\"publisher_id\" = p.\"id\""
        ));
        assert!(q.sql.contains("LEFT JOIN \"public\".\"categories\" c ON g.\"category_id\" = c.\"id\""));
        assert!(!q.sql.contains("WHERE"));
        assert!(!q.sql.contains("LIMIT"));
        assert!(q.sql.ends_with("ORDER BY g.\"id\""));
        assert!(q.params.is_empty());
    }

    #[test]
    fn filters_are_anded_and_numbered_in_order() {
        let q = base_query().with_category(3).with_publisher(5).to_sql("public");
        assert!(q
            .sql
            .contains(" WHERE g.\"category_id\" = $1::int8 AND g.\"publisher_id\" = $2::int8 ORDER BY"));
        assert_eq!(q.params, vec![3, 5]);
    }

    #[test]
    fn single_lookup_is_limited() {
        let q = base_query().with_id(42).limit(1).to_sql("catalog");
        assert!(q.sql.contains("WHERE g.\"id\" = $1::int8"));
        assert!(q.sql.ends_with(" LIMIT 1"));
        assert!(q.sql.contains("\"catalog\".\"games\""));
        assert_eq!(q.params, vec![42]);
    }

    #[test]
    fn schema_name_is_quoted() {
        let q = base_query().to_sql("odd\"schema");
        assert!(q.sql.contains("\"odd\"\"schema\".\"games\""));
    }

    #[test]
    fn base_query_is_fresh_each_call() {
        let filtered = base_query().with_category(1);
        assert_eq!(filtered.filters(), &[GameFilter::CategoryId(1)]);
        assert!(base_query().filters().is_empty());
        assert_eq!(base_query(), GameQuery::default());
    }

    #[test]
    fn foreign_keys_come_from_the_games_table() {
        let q = base_query().to_sql("public");
        assert!(q.sql.contains("g.\"publisher_id\"::int8 AS \"publisher_id\""));
        assert!(q.sql.contains("g.\"category_id\"::int8 AS \"category_id\""));
        assert!(q.sql.contains("p.\"id\"::int8 AS \"joined_publisher_id\""));
        assert!(q.sql.contains("c.\"id\"::int8 AS \"joined_category_id\""));
    }

    #[test]
    fn dangling_foreign_key_still_matches_its_filter() {
        let game = Game {
            id: 9,
            title: "Lost Label".into(),
            description: String::new(),
            star_rating: None,
            publisher_id: Some(77),
            category_id: None,
            publisher: None,
            category: None,
        };
        assert!(base_query().with_publisher(77).matches(&game));
        assert!(!base_query().with_publisher(78).matches(&game));
    }

    #[test]
    fn null_foreign_keys_never_match_a_filter() {
        let game = Game {
            id: 1,
            title: "Orphan".into(),
            description: String::new(),
            star_rating: None,
            publisher_id: Some(5),
            category_id: None,
            publisher: Some(Publisher {
                id: 5,
                name: "Five".into(),
                description: None,
            }),
            category: None,
        };
        assert!(base_query().matches(&game));
        assert!(base_query().with_publisher(5).matches(&game));
        assert!(!base_query().with_category(3).matches(&game));

        let with_category = Game {
            category_id: Some(3),
            category: Some(Category {
                id: 3,
                name: "Three".into(),
                description: None,
            }),
            ..game
        };
        assert!(base_query().with_category(3).with_publisher(5).matches(&with_category));
        assert!(!base_query().with_id(2).matches(&with_category));
    }
}
