use async_trait::async_trait;
use goodbooks_config::Neo4jConfig;
use goodbooks_models::{
    AuthorBook, AuthorInfluence, BookMatch, ConnectionPath, MostTaggedBook, NetworkRecord,
    Recommendation, SharedTagBook, TagPopularity, TaggedBook,
};
use goodbooks_observability::record_query;
use neo4rs::{query, ConfigBuilder, Graph, Query, Row};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;

use super::{queries, BookGraph};
use crate::errors::{GraphError, GraphResult};

const BACKEND: &str = "neo4j";

/// neo4rs-backed [`BookGraph`]. Works against local Neo4j and AuraDB.
#[derive(Clone)]
pub struct Neo4jClient {
    graph: Arc<Graph>,
    uri: String,
}

impl Neo4jClient {
    /// Connect and run a trivial query to make sure the server answers.
    pub async fn connect(config: &Neo4jConfig) -> GraphResult<Self> {
        tracing::info!("🔷 Connecting to Neo4j at {} (database {})", config.uri, config.database);

        let neo4j_config = ConfigBuilder::default()
            .uri(config.uri.as_str())
            .user(config.user.as_str())
            .password(config.password.as_str())
            .db(config.database.as_str())
            .fetch_size(config.fetch_size)
            .max_connections(config.max_connections)
            .build()
            .map_err(|e| GraphError::Neo4j(format!("Failed to build Neo4j config: {}", e)))?;

        let graph = Graph::connect(neo4j_config)
            .await
            .map_err(|e| GraphError::Neo4j(format!("Failed to connect to Neo4j: {}", e)))?;

        let mut probe = graph
            .execute(query("RETURN 1 AS ok"))
            .await
            .map_err(|e| GraphError::Neo4j(format!("Connection test failed: {}", e)))?;
        if probe.next().await?.is_some() {
            tracing::info!("✅ Neo4j connection established");
        }

        Ok(Self {
            graph: Arc::new(graph),
            uri: config.uri.clone(),
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    async fn rows(&self, q: Query) -> GraphResult<Vec<Row>> {
        let mut stream = self.graph.execute(q).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Run `q` and deserialize every row into `T` by column alias
    async fn fetch<T: DeserializeOwned>(&self, operation: &str, q: Query) -> GraphResult<Vec<T>> {
        let started = Instant::now();
        let result = async {
            self.rows(q)
                .await?
                .into_iter()
                .map(|row| row.to::<T>().map_err(GraphError::from))
                .collect::<GraphResult<Vec<T>>>()
        }
        .await;
        record_query(BACKEND, operation, started, result)
    }

    /// Run `q` and read a single string column from every row
    async fn fetch_column(&self, operation: &str, q: Query, column: &str) -> GraphResult<Vec<String>> {
        let started = Instant::now();
        let result = async {
            self.rows(q)
                .await?
                .into_iter()
                .map(|row| row.get::<String>(column).map_err(GraphError::from))
                .collect::<GraphResult<Vec<String>>>()
        }
        .await;
        record_query(BACKEND, operation, started, result)
    }
}

#[async_trait]
impl BookGraph for Neo4jClient {
    async fn all_tags(&self) -> GraphResult<Vec<String>> {
        self.fetch_column("all_tags", query(queries::ALL_TAGS), "tag").await
    }

    async fn popular_titles(&self, limit: i64) -> GraphResult<Vec<String>> {
        let q = query(queries::POPULAR_TITLES).param("limit", limit);
        self.fetch_column("popular_titles", q, "title").await
    }

    async fn books_by_tag(&self, tag: &str, min_rating: f64) -> GraphResult<Vec<TaggedBook>> {
        let q = query(queries::BOOKS_BY_TAG)
            .param("tag", tag)
            .param("min_rating", min_rating);
        self.fetch("books_by_tag", q).await
    }

    async fn search_titles(&self, keyword: &str, limit: i64) -> GraphResult<Vec<BookMatch>> {
        let q = query(queries::SEARCH_TITLES)
            .param("keyword", keyword)
            .param("limit", limit);
        self.fetch("search_titles", q).await
    }

    async fn recommendations(&self, title: &str, limit: i64) -> GraphResult<Vec<Recommendation>> {
        let q = query(queries::RECOMMENDATIONS)
            .param("title", title)
            .param("limit", limit);
        self.fetch("recommendations", q).await
    }

    async fn network_records(
        &self,
        title: &str,
        num_books: i64,
        min_rating: f64,
    ) -> GraphResult<Vec<NetworkRecord>> {
        let q = query(queries::NETWORK_RECORDS)
            .param("title", title)
            .param("num_books", num_books)
            .param("min_rating", min_rating);
        self.fetch("network_records", q).await
    }

    async fn shortest_path(&self, from: &str, to: &str) -> GraphResult<Option<ConnectionPath>> {
        let q = query(queries::SHORTEST_PATH)
            .param("title1", from)
            .param("title2", to);
        let paths: Vec<ConnectionPath> = self.fetch("shortest_path", q).await?;
        Ok(paths.into_iter().next())
    }

    async fn top_authors(&self, limit: i64) -> GraphResult<Vec<AuthorInfluence>> {
        let q = query(queries::TOP_AUTHORS).param("limit", limit);
        self.fetch("top_authors", q).await
    }

    async fn authors_by_tag(&self, tag: &str, limit: i64) -> GraphResult<Vec<AuthorInfluence>> {
        let q = query(queries::AUTHORS_BY_TAG)
            .param("tag", tag)
            .param("limit", limit);
        self.fetch("authors_by_tag", q).await
    }

    async fn top_tags(&self, limit: i64) -> GraphResult<Vec<TagPopularity>> {
        let q = query(queries::TOP_TAGS).param("limit", limit);
        self.fetch("top_tags", q).await
    }

    async fn most_tagged_books(&self) -> GraphResult<Vec<MostTaggedBook>> {
        self.fetch("most_tagged_books", query(queries::MOST_TAGGED_BOOKS)).await
    }

    async fn related_by_tags(&self, title: &str) -> GraphResult<Vec<SharedTagBook>> {
        let q = query(queries::RELATED_BY_TAGS).param("title", title);
        self.fetch("related_by_tags", q).await
    }

    async fn related_by_author(&self, title: &str) -> GraphResult<Vec<AuthorBook>> {
        let q = query(queries::RELATED_BY_AUTHOR).param("title", title);
        self.fetch("related_by_author", q).await
    }
}
