//! Recommendation network for the vis-network library.
//!
//! Rows from [`crate::BookGraph::network_records`] are folded into book and
//! tag nodes with cosmetic attributes, book-to-tag edges, seeded positions
//! and the physics options chosen by the user.

pub mod layout;
pub mod page;
pub mod physics;

pub use layout::Position;
pub use page::render_network_page;
pub use physics::PhysicsSettings;

use goodbooks_config::LayoutConfig;
use goodbooks_models::NetworkRecord;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MAIN_BOOK_COLOR: &str = "#3b82f6";
pub const SIMILAR_BOOK_COLOR: &str = "#10b981";
pub const TAG_COLOR: &str = "#D4A84B";
pub const MAIN_EDGE_COLOR: &str = "#60a5fa";
pub const SIMILAR_EDGE_COLOR: &str = "#94a3b8";

pub const MAX_LABEL_CHARS: usize = 40;
const MAX_NODE_SIZE: u32 = 32;
const TOOLTIP_RULE: &str = "━━━━━━━━━━━━";

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSettings {
    pub physics: PhysicsSettings,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    MainBook,
    SimilarBook,
    Tag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeFont {
    pub size: u32,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
}

impl NodeFont {
    fn white(size: u32) -> Self {
        Self {
            size,
            color: "#ffffff".to_string(),
            face: None,
            bold: false,
        }
    }
}

/// A node in vis-network's `DataSet` shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisNode {
    pub id: String,
    pub label: String,
    /// Hover tooltip
    pub title: String,
    pub group: NodeKind,
    pub color: String,
    pub shape: String,
    pub size: u32,
    pub font: NodeFont,
    pub border_width: u32,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisEdge {
    pub from: String,
    pub to: String,
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub books: usize,
    pub tags: usize,
    pub edges: usize,
}

impl NetworkStats {
    pub fn summary(&self) -> String {
        format!(
            "Network generated: {} books connected through {} shared tags",
            self.books, self.tags
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationNetwork {
    pub main_book: String,
    pub nodes: Vec<VisNode>,
    pub edges: Vec<VisEdge>,
    pub options: Value,
    pub stats: NetworkStats,
}

#[derive(Debug, Default)]
struct BookSummary {
    is_main: bool,
    rating: Option<f64>,
    tag_count: i64,
    shown_tags: IndexSet<String>,
}

pub fn book_node_id(title: &str) -> String {
    format!("book:{}", title)
}

pub fn tag_node_id(tag: &str) -> String {
    format!("tag:{}", tag)
}

/// Cut `text` to `max_chars` characters, marking the cut with `...`
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

fn node_size(base: u32, per_link: u32, links: usize) -> u32 {
    let links = u32::try_from(links).unwrap_or(u32::MAX);
    base.saturating_add(per_link.saturating_mul(links)).min(MAX_NODE_SIZE)
}

/// Build the network for the rows of one main book.
///
/// Returns `None` when there are no rows. Books and tags keep the order in
/// which they first appear, which makes the seeded layout reproducible.
pub fn build_recommendation_network(
    records: &[NetworkRecord],
    settings: &NetworkSettings,
) -> Option<RecommendationNetwork> {
    let first = records.first()?;
    let main_book = first.main_book.clone();

    let mut books: IndexMap<&str, BookSummary> = IndexMap::new();
    let mut tag_links: IndexMap<&str, usize> = IndexMap::new();
    let mut edges: IndexSet<(&str, &str)> = IndexSet::new();

    for record in records {
        let book = books.entry(record.book_title.as_str()).or_default();
        book.is_main |= record.is_main || record.book_title == record.main_book;
        book.rating = book.rating.or(record.rating);
        book.tag_count = book.tag_count.max(record.tag_count);

        if edges.insert((record.book_title.as_str(), record.tag.as_str())) {
            book.shown_tags.insert(record.tag.clone());
            *tag_links.entry(record.tag.as_str()).or_insert(0) += 1;
        }
    }

    let similar_count = books.values().filter(|b| !b.is_main).count();
    let mut book_positions = layout::circle(similar_count, settings.layout.book_radius).into_iter();
    let tag_positions = layout::tag_rings(tag_links.len(), &settings.layout);

    let mut nodes = Vec::with_capacity(books.len() + tag_links.len());
    for (title, info) in &books {
        let position = if info.is_main {
            Position::ORIGIN
        } else {
            book_positions.next().unwrap_or(Position::ORIGIN)
        };
        nodes.push(book_node(title, info, position));
    }

    for ((tag, links), position) in tag_links.iter().zip(tag_positions) {
        nodes.push(VisNode {
            id: tag_node_id(tag),
            label: tag.to_string(),
            title: format!("🏷️ GENRE/TAG\n{}\n{}\n{} books with this tag", tag, TOOLTIP_RULE, links),
            group: NodeKind::Tag,
            color: TAG_COLOR.to_string(),
            shape: "dot".to_string(),
            size: node_size(12, 4, *links),
            font: NodeFont::white(12),
            border_width: 2,
            x: position.x,
            y: position.y,
        });
    }

    let vis_edges: Vec<VisEdge> = edges
        .iter()
        .map(|(title, tag)| {
            let is_main = books.get(title).map(|b| b.is_main).unwrap_or(false);
            VisEdge {
                from: book_node_id(title),
                to: tag_node_id(tag),
                color: if is_main { MAIN_EDGE_COLOR } else { SIMILAR_EDGE_COLOR }.to_string(),
                width: if is_main { 3.0 } else { 1.5 },
            }
        })
        .collect();

    let stats = NetworkStats {
        books: books.len(),
        tags: tag_links.len(),
        edges: vis_edges.len(),
    };

    Some(RecommendationNetwork {
        main_book,
        nodes,
        edges: vis_edges,
        options: settings.physics.network_options(),
        stats,
    })
}

fn book_node(title: &str, info: &BookSummary, position: Position) -> VisNode {
    let label = truncate_label(title, MAX_LABEL_CHARS);
    let rating = info.rating.unwrap_or(0.0);
    let shown = info.shown_tags.len();

    if info.is_main {
        VisNode {
            id: book_node_id(title),
            label: format!("⭐ {}", label),
            title: format!(
                "📚 YOUR BOOK\n{}\n{}\nRating: {:.2}⭐\nTotal Tags: {}\nShown Tags: {}",
                title, TOOLTIP_RULE, rating, info.tag_count, shown
            ),
            group: NodeKind::MainBook,
            color: MAIN_BOOK_COLOR.to_string(),
            shape: "box".to_string(),
            size: 38,
            font: NodeFont {
                size: 16,
                color: "#ffffff".to_string(),
                face: Some("arial".to_string()),
                bold: true,
            },
            border_width: 4,
            x: position.x,
            y: position.y,
        }
    } else {
        VisNode {
            id: book_node_id(title),
            label,
            title: format!(
                "📖 SIMILAR BOOK\n{}\n{}\nRating: {:.2}⭐\nShared Tags: {}\nTotal Tags: {}",
                title, TOOLTIP_RULE, rating, shown, info.tag_count
            ),
            group: NodeKind::SimilarBook,
            color: SIMILAR_BOOK_COLOR.to_string(),
            shape: "ellipse".to_string(),
            size: node_size(22, 2, shown),
            font: NodeFont::white(13),
            border_width: 2,
            x: position.x,
            y: position.y,
        }
    }
}
