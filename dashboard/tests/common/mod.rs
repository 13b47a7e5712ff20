//! In-memory stand-ins for the two databases.

#![allow(dead_code)]

use async_trait::async_trait;
use goodbooks_config::LayoutConfig;
use goodbooks_dashboard::AppState;
use goodbooks_database::{sqlx, BookCatalog, CatalogError, CatalogResult};
use goodbooks_graph::{BookGraph, GraphError, GraphResult};
use goodbooks_models::*;
use parking_lot::Mutex;
use std::sync::Arc;

pub const HUNGER_GAMES: &str = "The Hunger Games (The Hunger Games, #1)";
pub const DIVERGENT: &str = "Divergent (Divergent, #1)";
pub const CATCHING_FIRE: &str = "Catching Fire (The Hunger Games, #2)";

#[derive(Default)]
pub struct FakeGraph {
    pub fail: bool,
    pub tags: Vec<String>,
    pub titles: Vec<String>,
    pub tagged_books: Vec<TaggedBook>,
    pub network: Vec<NetworkRecord>,
    pub path: Option<ConnectionPath>,
    pub authors: Vec<AuthorInfluence>,
    pub most_tagged: Vec<MostTaggedBook>,
    /// Every call as `operation(args)`
    pub calls: Mutex<Vec<String>>,
}

impl FakeGraph {
    pub fn sample() -> Self {
        Self {
            tags: vec!["action".into(), "dystopia".into(), "young-adult".into()],
            titles: vec![HUNGER_GAMES.into(), "Twilight (Twilight, #1)".into(), DIVERGENT.into()],
            tagged_books: vec![TaggedBook {
                title: HUNGER_GAMES.into(),
                average_rating: Some(4.34),
                ratings_count: Some(4_780_653),
            }],
            network: vec![
                record(HUNGER_GAMES, "dystopia", true, 4.34),
                record(HUNGER_GAMES, "young-adult", true, 4.34),
                record(CATCHING_FIRE, "dystopia", false, 4.3),
                record(DIVERGENT, "dystopia", false, 4.24),
                record(DIVERGENT, "young-adult", false, 4.24),
            ],
            path: Some(ConnectionPath {
                path_nodes: vec![HUNGER_GAMES.into(), "Tag: dystopia".into(), DIVERGENT.into()],
                hops: 2,
            }),
            authors: vec![
                author("Stephen King", 60, Some(3.9)),
                author("Nora Roberts", 59, None),
                author("J.K. Rowling", 20, Some(4.4)),
                author("Dean Koontz", 20, Some(3.9)),
            ],
            most_tagged: vec![MostTaggedBook {
                title: "The Hitchhiker's Guide to the Galaxy: The Complete Trilogy and Some Extra Words".into(),
                author: None,
                rating: None,
                tag_count: 97,
            }],
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn call<T>(&self, entry: String, value: T) -> GraphResult<T> {
        self.calls.lock().push(entry);
        if self.fail {
            Err(GraphError::Neo4j("connection refused".into()))
        } else {
            Ok(value)
        }
    }
}

pub fn record(book: &str, tag: &str, is_main: bool, rating: f64) -> NetworkRecord {
    NetworkRecord {
        main_book: HUNGER_GAMES.into(),
        book_title: book.into(),
        tag: tag.into(),
        is_main,
        rating: Some(rating),
        tag_count: 50,
    }
}

pub fn author(name: &str, books: i64, rating: Option<f64>) -> AuthorInfluence {
    AuthorInfluence {
        author: name.into(),
        books_written: books,
        avg_rating: rating,
    }
}

#[async_trait]
impl BookGraph for FakeGraph {
    async fn all_tags(&self) -> GraphResult<Vec<String>> {
        self.call("all_tags()".into(), self.tags.clone())
    }

    async fn popular_titles(&self, limit: i64) -> GraphResult<Vec<String>> {
        self.call(format!("popular_titles({})", limit), self.titles.clone())
    }

    async fn books_by_tag(&self, tag: &str, min_rating: f64) -> GraphResult<Vec<TaggedBook>> {
        let rows = if tag == "action" { self.tagged_books.clone() } else { Vec::new() };
        self.call(format!("books_by_tag({}, {})", tag, min_rating), rows)
    }

    async fn search_titles(&self, keyword: &str, limit: i64) -> GraphResult<Vec<BookMatch>> {
        let rows = self
            .titles
            .iter()
            .filter(|t| t.to_lowercase().contains(&keyword.to_lowercase()))
            .map(|t| BookMatch {
                title: t.clone(),
                average_rating: Some(4.0),
            })
            .collect();
        self.call(format!("search_titles({}, {})", keyword, limit), rows)
    }

    async fn recommendations(&self, title: &str, limit: i64) -> GraphResult<Vec<Recommendation>> {
        let rows = vec![Recommendation {
            recommended_title: CATCHING_FIRE.into(),
            shared_tags: 12,
        }];
        self.call(format!("recommendations({}, {})", title, limit), rows)
    }

    async fn network_records(
        &self,
        title: &str,
        num_books: i64,
        min_rating: f64,
    ) -> GraphResult<Vec<NetworkRecord>> {
        let rows = if title == HUNGER_GAMES { self.network.clone() } else { Vec::new() };
        self.call(format!("network_records({}, {}, {})", title, num_books, min_rating), rows)
    }

    async fn shortest_path(&self, from: &str, to: &str) -> GraphResult<Option<ConnectionPath>> {
        let path = if to == DIVERGENT { self.path.clone() } else { None };
        self.call(format!("shortest_path({}, {})", from, to), path)
    }

    async fn top_authors(&self, limit: i64) -> GraphResult<Vec<AuthorInfluence>> {
        self.call(format!("top_authors({})", limit), self.authors.clone())
    }

    async fn authors_by_tag(&self, tag: &str, limit: i64) -> GraphResult<Vec<AuthorInfluence>> {
        self.call(format!("authors_by_tag({}, {})", tag, limit), Vec::new())
    }

    async fn top_tags(&self, limit: i64) -> GraphResult<Vec<TagPopularity>> {
        let rows = vec![TagPopularity {
            tag: "to-read".into(),
            book_count: 9983,
        }];
        self.call(format!("top_tags({})", limit), rows)
    }

    async fn most_tagged_books(&self) -> GraphResult<Vec<MostTaggedBook>> {
        self.call("most_tagged_books()".into(), self.most_tagged.clone())
    }

    async fn related_by_tags(&self, title: &str) -> GraphResult<Vec<SharedTagBook>> {
        let rows = vec![SharedTagBook {
            title: DIVERGENT.into(),
            shared_tag: "dystopia".into(),
        }];
        self.call(format!("related_by_tags({})", title), rows)
    }

    async fn related_by_author(&self, title: &str) -> GraphResult<Vec<AuthorBook>> {
        self.call(format!("related_by_author({})", title), Vec::new())
    }
}

#[derive(Default)]
pub struct FakeCatalog {
    pub fail: bool,
    pub books: Vec<CatalogBook>,
    pub authors: Vec<AuthorSummary>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn sample() -> Self {
        Self {
            books: vec![
                book("The Hunger Games (The Hunger Games, #1)", "Suzanne Collins", 4.34, 4_780_653),
                book("Harry Potter and the Sorcerer's Stone (Harry Potter, #1)", "J.K. Rowling, Mary GrandPré", 4.44, 4_602_479),
                book("Twilight (Twilight, #1)", "Stephenie Meyer", 3.57, 3_866_839),
            ],
            authors: (0..30)
                .map(|i| AuthorSummary {
                    authors: format!("Author {}", i),
                    book_count: 60 - i,
                    avg_rating: Some(3.9),
                    total_ratings: Some(1_000_000),
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn call<T>(&self, entry: String, value: T) -> CatalogResult<T> {
        self.calls.lock().push(entry);
        if self.fail {
            Err(CatalogError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(value)
        }
    }
}

pub fn book(title: &str, authors: &str, rating: f64, ratings: i64) -> CatalogBook {
    CatalogBook {
        title: title.into(),
        authors: Some(authors.into()),
        average_rating: Some(rating),
        ratings_count: Some(ratings),
        original_publication_year: Some(2008),
    }
}

#[async_trait]
impl BookCatalog for FakeCatalog {
    async fn ping(&self) -> CatalogResult<()> {
        self.call("ping()".into(), ())
    }

    async fn catalog_stats(&self) -> CatalogResult<CatalogStats> {
        let stats = CatalogStats {
            book_count: 10_000,
            user_count: 53_424,
            rating_count: 5_976_479,
        };
        self.call("catalog_stats()".into(), stats)
    }

    async fn top_authors(&self, limit: i64) -> CatalogResult<Vec<AuthorSummary>> {
        let rows = self.authors.iter().take(limit as usize).cloned().collect();
        self.call(format!("top_authors({})", limit), rows)
    }

    async fn rating_distribution(&self) -> CatalogResult<Vec<RatingBucket>> {
        let rows = vec![
            RatingBucket { rating_bucket: Some(3.9), book_count: 1200 },
            RatingBucket { rating_bucket: Some(4.0), book_count: 1300 },
        ];
        self.call("rating_distribution()".into(), rows)
    }

    async fn top_rated_books(&self, limit: i64, min_ratings: i64) -> CatalogResult<Vec<CatalogBook>> {
        let rows = self
            .books
            .iter()
            .filter(|b| b.ratings_count.unwrap_or_default() >= min_ratings)
            .take(limit as usize)
            .cloned()
            .collect();
        self.call(format!("top_rated_books({}, {})", limit, min_ratings), rows)
    }

    async fn most_rated_books(&self, limit: i64) -> CatalogResult<Vec<CatalogBook>> {
        let rows = self.books.iter().take(limit as usize).cloned().collect();
        self.call(format!("most_rated_books({})", limit), rows)
    }

    async fn books_by_language(&self) -> CatalogResult<Vec<LanguageShare>> {
        let rows = (0..25)
            .map(|i| LanguageShare {
                language_code: format!("l{:02}", i),
                book_count: 100 - i,
                avg_rating: Some(4.0),
            })
            .collect();
        self.call("books_by_language()".into(), rows)
    }

    async fn publication_trends(&self) -> CatalogResult<Vec<YearTrend>> {
        self.call("publication_trends()".into(), Vec::new())
    }

    async fn user_rating_stats(&self, limit: i64) -> CatalogResult<Vec<UserRatingStats>> {
        let rows = vec![UserRatingStats {
            user_id: 12874,
            books_rated: 200,
            avg_rating_given: Some(3.62),
            min_rating: Some(1),
            max_rating: Some(5),
        }];
        self.call(format!("user_rating_stats({})", limit), rows)
    }

    async fn search_books(&self, keyword: &str, min_rating: f64, limit: i64) -> CatalogResult<Vec<CatalogBook>> {
        let needle = keyword.to_lowercase();
        let rows = self
            .books
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&needle))
            .filter(|b| b.average_rating.unwrap_or_default() >= min_rating)
            .take(limit as usize)
            .cloned()
            .collect();
        self.call(format!("search_books({}, {}, {})", keyword, min_rating, limit), rows)
    }
}

pub fn state(graph: Option<Arc<FakeGraph>>, catalog: Arc<FakeCatalog>) -> AppState {
    AppState::new(
        graph.map(|g| g as Arc<dyn BookGraph>),
        catalog,
        LayoutConfig::default(),
    )
}
