//! Chart series for the SQL analytics section.
//!
//! The server only decides what is plotted; the page draws it.

use goodbooks_models::{AuthorSummary, LanguageShare, RatingBucket, YearTrend};
use serde::Serialize;

pub const AUTHOR_CHART_SIZE: usize = 15;
pub const LANGUAGE_CHART_SIZE: usize = 10;
pub const LANGUAGE_TABLE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    /// Bars drawn left to right, first label on top
    HorizontalBar,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Most prolific authors by book count
pub fn author_chart(authors: &[AuthorSummary]) -> Chart {
    let shown = &authors[..authors.len().min(AUTHOR_CHART_SIZE)];
    Chart {
        kind: ChartKind::HorizontalBar,
        title: format!("Top {} Most Prolific Authors", shown.len()),
        x_label: "Number of Published Books".to_string(),
        y_label: "Author Name".to_string(),
        labels: shown.iter().map(|a| a.authors.clone()).collect(),
        values: shown.iter().map(|a| a.book_count as f64).collect(),
    }
}

pub fn language_chart(languages: &[LanguageShare]) -> Chart {
    let shown = &languages[..languages.len().min(LANGUAGE_CHART_SIZE)];
    Chart {
        kind: ChartKind::Bar,
        title: format!("Top {} Languages in Catalog", LANGUAGE_CHART_SIZE),
        x_label: "Language Code (ISO 639)".to_string(),
        y_label: "Book Count".to_string(),
        labels: shown.iter().map(|l| l.language_code.clone()).collect(),
        values: shown.iter().map(|l| l.book_count as f64).collect(),
    }
}

pub fn publication_chart(trends: &[YearTrend]) -> Chart {
    Chart {
        kind: ChartKind::Line,
        title: "Publications Over Time".to_string(),
        x_label: "Year".to_string(),
        y_label: "Books Published".to_string(),
        labels: trends.iter().map(|t| t.year.to_string()).collect(),
        values: trends.iter().map(|t| t.book_count as f64).collect(),
    }
}

/// Books per rounded average rating. Books without a rating are left out.
pub fn rating_histogram(buckets: &[RatingBucket]) -> Chart {
    let rated = buckets.iter().filter_map(|b| b.rating_bucket.map(|r| (r, b.book_count)));
    let (labels, values) = rated.map(|(r, n)| (format!("{:.1}", r), n as f64)).unzip();
    Chart {
        kind: ChartKind::Bar,
        title: "Rating Distribution Across Catalog".to_string(),
        x_label: "Average Rating".to_string(),
        y_label: "Books".to_string(),
        labels,
        values,
    }
}
