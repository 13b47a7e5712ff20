//! SQL for the relational catalog.
//!
//! Numeric columns are cast explicitly so they decode the same way whether the
//! schema stores them as DECIMAL, FLOAT or INT.

pub const CATALOG_STATS: &str = r#"
SELECT
    (SELECT COUNT(*) FROM books) AS book_count,
    (SELECT COUNT(DISTINCT user_id) FROM ratings) AS user_count,
    (SELECT COUNT(*) FROM ratings) AS rating_count
"#;

pub const TOP_AUTHORS: &str = r#"
SELECT
    authors,
    COUNT(*) AS book_count,
    CAST(ROUND(AVG(average_rating), 2) AS DOUBLE) AS avg_rating,
    CAST(SUM(ratings_count) AS SIGNED) AS total_ratings
FROM books
WHERE authors IS NOT NULL AND authors != ''
GROUP BY authors
ORDER BY book_count DESC, avg_rating DESC
LIMIT ?
"#;

pub const RATING_DISTRIBUTION: &str = r#"
SELECT
    CAST(ROUND(average_rating, 1) AS DOUBLE) AS rating_bucket,
    COUNT(*) AS book_count
FROM books
GROUP BY rating_bucket
ORDER BY rating_bucket
"#;

pub const TOP_RATED_BOOKS: &str = r#"
SELECT
    title,
    authors,
    CAST(average_rating AS DOUBLE) AS average_rating,
    CAST(ratings_count AS SIGNED) AS ratings_count,
    CAST(original_publication_year AS SIGNED) AS original_publication_year
FROM books
WHERE ratings_count >= ?
ORDER BY average_rating DESC, ratings_count DESC
LIMIT ?
"#;

pub const MOST_RATED_BOOKS: &str = r#"
SELECT
    title,
    authors,
    CAST(average_rating AS DOUBLE) AS average_rating,
    CAST(ratings_count AS SIGNED) AS ratings_count,
    CAST(original_publication_year AS SIGNED) AS original_publication_year
FROM books
ORDER BY ratings_count DESC
LIMIT ?
"#;

pub const BOOKS_BY_LANGUAGE: &str = r#"
SELECT
    language_code,
    COUNT(*) AS book_count,
    CAST(ROUND(AVG(average_rating), 2) AS DOUBLE) AS avg_rating
FROM books
WHERE language_code IS NOT NULL AND language_code != ''
GROUP BY language_code
ORDER BY book_count DESC
"#;

pub const PUBLICATION_TRENDS: &str = r#"
SELECT
    CAST(original_publication_year AS SIGNED) AS year,
    COUNT(*) AS book_count,
    CAST(ROUND(AVG(average_rating), 2) AS DOUBLE) AS avg_rating
FROM books
WHERE original_publication_year IS NOT NULL
    AND original_publication_year > 1900
    AND original_publication_year <= 2025
GROUP BY year
ORDER BY year
"#;

pub const USER_RATING_STATS: &str = r#"
SELECT
    CAST(user_id AS SIGNED) AS user_id,
    COUNT(*) AS books_rated,
    CAST(ROUND(AVG(rating), 2) AS DOUBLE) AS avg_rating_given,
    CAST(MIN(rating) AS SIGNED) AS min_rating,
    CAST(MAX(rating) AS SIGNED) AS max_rating
FROM ratings
GROUP BY user_id
ORDER BY books_rated DESC
LIMIT ?
"#;

/// Bound with a pattern from [`crate::like_pattern`]
pub const SEARCH_BOOKS: &str = r#"
SELECT
    title,
    authors,
    CAST(average_rating AS DOUBLE) AS average_rating,
    CAST(ratings_count AS SIGNED) AS ratings_count,
    CAST(original_publication_year AS SIGNED) AS original_publication_year
FROM books
WHERE (LOWER(title) LIKE LOWER(?) OR LOWER(authors) LIKE LOWER(?))
    AND average_rating >= ?
ORDER BY ratings_count DESC
LIMIT ?
"#;
