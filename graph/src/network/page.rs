//! Standalone HTML page for a recommendation network.
//!
//! The page loads vis-network, draws the embedded network and offers
//! Start/Stop/Fullscreen controls. Start re-enables physics with the user's
//! settings.

use super::{PhysicsSettings, RecommendationNetwork};
use crate::errors::GraphResult;

const TEMPLATE: &str = include_str!("../../templates/network.html");

pub fn render_network_page(network: &RecommendationNetwork, physics: &PhysicsSettings) -> GraphResult<String> {
    let network_json = script_safe(&serde_json::to_string(network)?);
    let barnes_hut_json = script_safe(&serde_json::to_string(&physics.barnes_hut())?);

    Ok(TEMPLATE
        .replace("{{TITLE}}", &escape_html(&network.main_book))
        .replace("{{SUMMARY}}", &escape_html(&network.stats.summary()))
        .replace("{{NETWORK_JSON}}", &network_json)
        .replace("{{BARNES_HUT_JSON}}", &barnes_hut_json))
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON embedded in a `<script>` block must not close the block early
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{build_recommendation_network, NetworkSettings};
    use goodbooks_models::NetworkRecord;

    fn network_for(main: &str) -> RecommendationNetwork {
        let rows = vec![
            NetworkRecord {
                main_book: main.to_string(),
                book_title: main.to_string(),
                tag: "classics".to_string(),
                is_main: true,
                rating: Some(4.1),
                tag_count: 12,
            },
            NetworkRecord {
                main_book: main.to_string(),
                book_title: "Emma".to_string(),
                tag: "classics".to_string(),
                is_main: false,
                rating: Some(4.0),
                tag_count: 9,
            },
        ];
        build_recommendation_network(&rows, &NetworkSettings::default()).unwrap()
    }

    #[test]
    fn test_page_embeds_network_and_physics() {
        let physics = PhysicsSettings { repulsion: 6500.0, ..Default::default() };
        let html = render_network_page(&network_for("Pride and Prejudice"), &physics).unwrap();

        assert!(html.contains("<title>Recommendation network: Pride and Prejudice</title>"));
        assert!(html.contains("\"gravitationalConstant\":-6500.0"));
        assert!(html.contains("book:Emma"));
        assert!(html.contains("2 books connected through 1 shared tags"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_hostile_titles_are_escaped() {
        let html = render_network_page(
            &network_for("</script><script>alert(1)</script>"),
            &PhysicsSettings::default(),
        )
        .unwrap();

        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains("&lt;/script&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Tom & Jerry's \"<b>\""), "Tom &amp; Jerry&#39;s &quot;&lt;b&gt;&quot;");
    }
}
