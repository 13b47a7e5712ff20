//! Cypher statements used by [`super::Neo4jClient`].
//!
//! Graph shape: `(:Book)-[:TAGGED_AS]->(:Tag)` and
//! `(:Author)-[:WRITTEN_BY]-(:Book)`.

/// Tags that carry meaning: drops numbers, years, star ratings and
/// shelf-style names such as `to-read` or `owned`.
pub const ALL_TAGS: &str = r#"
MATCH (t:Tag)<-[:TAGGED_AS]-(b:Book)
WHERE t.name IS NOT NULL
  AND t.name <> ''
  AND NOT t.name =~ '^[0-9].*'
  AND NOT t.name =~ '.*[0-9]{4}.*'
  AND NOT t.name =~ '.*-star.*'
  AND NOT t.name =~ '.*star$'
  AND NOT t.name IN ['-', '--', '---', '1', '2', '3', 'mine', 'own', 'owned', 'have', 'default']
  AND NOT t.name STARTS WITH 'read-'
  AND NOT t.name STARTS WITH 'to-'
  AND NOT t.name STARTS WITH 'my-'
  AND size(t.name) > 2
WITH t.name AS tag, COUNT(b) AS book_count
WHERE book_count >= 10
RETURN tag
ORDER BY tag
"#;

pub const POPULAR_TITLES: &str = r#"
MATCH (b:Book)
RETURN b.title AS title
ORDER BY b.ratings_count DESC
LIMIT $limit
"#;

pub const BOOKS_BY_TAG: &str = r#"
MATCH (b:Book)-[:TAGGED_AS]->(t:Tag)
WHERE toLower(t.name) = toLower($tag)
  AND b.average_rating >= $min_rating
RETURN b.title AS title,
       b.average_rating AS average_rating,
       b.ratings_count AS ratings_count
ORDER BY average_rating DESC, ratings_count DESC
LIMIT 50
"#;

pub const SEARCH_TITLES: &str = r#"
MATCH (b:Book)
WHERE toLower(b.title) CONTAINS toLower($keyword)
RETURN b.title AS title,
       b.average_rating AS average_rating
ORDER BY average_rating DESC
LIMIT $limit
"#;

pub const RECOMMENDATIONS: &str = r#"
MATCH (b:Book {title: $title})-[:TAGGED_AS]->(t:Tag)<-[:TAGGED_AS]-(other:Book)
WHERE other <> b
WITH other, count(t) AS shared_tags
RETURN other.title AS recommended_title,
       shared_tags
ORDER BY shared_tags DESC, recommended_title ASC
LIMIT $limit
"#;

/// One row per (book, main-book tag) edge. The main book is part of the
/// result set, flagged by `is_main`.
pub const NETWORK_RECORDS: &str = r#"
MATCH (mainBook:Book {title: $title})-[:TAGGED_AS]->(mainTag:Tag)
WHERE mainTag.name IS NOT NULL
  AND NOT mainTag.name =~ '^[0-9-]+$'
  AND size(mainTag.name) > 2
WITH mainBook, COLLECT(DISTINCT mainTag) AS mainTags

UNWIND mainTags AS t
MATCH (t)<-[:TAGGED_AS]-(recBook:Book)
WHERE recBook <> mainBook
  AND recBook.average_rating >= $min_rating
WITH mainBook, mainTags, recBook, COUNT(DISTINCT t) AS shared_tags, recBook.average_rating AS rating
ORDER BY shared_tags DESC, rating DESC
LIMIT $num_books

WITH mainBook, mainTags, COLLECT(recBook) AS topBooks
WITH mainBook, mainTags, topBooks + [mainBook] AS allBooks

UNWIND allBooks AS book
MATCH (book)-[:TAGGED_AS]->(t:Tag)
WHERE t IN mainTags
WITH mainBook, book, t,
     book = mainBook AS is_main,
     book.average_rating AS rating,
     size([(book)-[:TAGGED_AS]->(:Tag) | 1]) AS tag_count
RETURN mainBook.title AS main_book,
       book.title AS book_title,
       t.name AS tag,
       is_main,
       rating,
       tag_count
ORDER BY is_main DESC, rating DESC
"#;

pub const SHORTEST_PATH: &str = r#"
MATCH (b1:Book {title: $title1}),
      (b2:Book {title: $title2})
MATCH p = shortestPath((b1)-[*..6]-(b2))
WITH p, nodes(p) AS ns
RETURN [n IN ns |
          CASE
            WHEN 'Book' IN labels(n)   THEN n.title
            WHEN 'Tag' IN labels(n)    THEN 'Tag: ' + n.name
            WHEN 'Author' IN labels(n) THEN 'Author: ' + n.name
            ELSE 'Node'
          END
       ] AS path_nodes,
       length(p) AS hops
"#;

pub const TOP_AUTHORS: &str = r#"
MATCH (a:Author)-[:WRITTEN_BY]-(b:Book)
WITH a.name AS author,
     COUNT(b) AS books_written,
     ROUND(AVG(b.average_rating), 2) AS avg_rating
RETURN author, books_written, avg_rating
ORDER BY books_written DESC, author ASC
LIMIT $limit
"#;

pub const AUTHORS_BY_TAG: &str = r#"
MATCH (a:Author)-[:WRITTEN_BY]-(b:Book)-[:TAGGED_AS]->(t:Tag)
WHERE toLower(t.name) = toLower($tag)
WITH a.name AS author,
     COUNT(DISTINCT b) AS books_written,
     AVG(b.average_rating) AS avg_rating
RETURN author, books_written, ROUND(avg_rating, 2) AS avg_rating
ORDER BY books_written DESC, avg_rating DESC
LIMIT $limit
"#;

pub const TOP_TAGS: &str = r#"
MATCH (t:Tag)<-[:TAGGED_AS]-(b:Book)
WHERE t.name IS NOT NULL
  AND t.name <> ''
  AND NOT t.name =~ '^[0-9-]+$'
  AND size(t.name) > 1
RETURN t.name AS tag,
       COUNT(b) AS book_count
ORDER BY book_count DESC, tag ASC
LIMIT $limit
"#;

pub const MOST_TAGGED_BOOKS: &str = r#"
MATCH (b:Book)-[:TAGGED_AS]->(t:Tag)
WITH b, COUNT(t) AS tag_count
ORDER BY tag_count DESC
LIMIT 5
RETURN b.title AS title,
       b.authors AS author,
       b.average_rating AS rating,
       tag_count
"#;

pub const RELATED_BY_TAGS: &str = r#"
MATCH (b:Book {title: $title})-[:TAGGED_AS]->(t:Tag)<-[:TAGGED_AS]-(other:Book)
WHERE other <> b
RETURN other.title AS title,
       t.name AS shared_tag
ORDER BY shared_tag, title
LIMIT 25
"#;

pub const RELATED_BY_AUTHOR: &str = r#"
MATCH (b:Book {title: $title})
WITH b, b.authors AS author
MATCH (other:Book)
WHERE other.authors = author
  AND other.title <> b.title
RETURN other.title AS title,
       other.average_rating AS rating,
       other.authors AS author
ORDER BY rating DESC
LIMIT 25
"#;
