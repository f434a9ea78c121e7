//! HTML parser for extracting version numbers
//!
//! The snapshot page lists each release inside `div#VersionContainer`, one
//! child block per release, with the release name in an `h3` heading whose
//! last word is the version number (e.g. "Serv-U 15.1.6").

use scraper::{Html, Selector};

/// Extracts the version numbers from the release-notes page
///
/// Walks the direct child blocks of `div#VersionContainer` in document
/// order; for every `h3` heading in a block, takes the last
/// whitespace-delimited token of its text, lower-cased. Blocks without
/// headings contribute nothing. Duplicates are kept as the page lists
/// them.
///
/// # Arguments
///
/// * `page_html` - The decoded page text, if the fetch produced any
///
/// # Returns
///
/// The version strings in document order; empty when there is no page
/// text or the container is missing
///
/// # Example
///
/// ```
/// use servu_versions::spider::extract_versions;
///
/// let html = r#"<div id="VersionContainer"><div><h3>Serv-U 15.1.6</h3></div></div>"#;
/// assert_eq!(extract_versions(Some(html)), vec!["15.1.6".to_string()]);
/// ```
pub fn extract_versions(page_html: Option<&str>) -> Vec<String> {
    let mut versions = Vec::new();

    let Some(page_html) = page_html else {
        return versions;
    };

    let document = Html::parse_document(page_html);

    if let (Ok(block_selector), Ok(heading_selector)) = (
        Selector::parse("div#VersionContainer > div"),
        Selector::parse("h3"),
    ) {
        for block in document.select(&block_selector) {
            for heading in block.select(&heading_selector) {
                let text = heading.text().collect::<String>();
                if let Some(token) = text.split_whitespace().last() {
                    versions.push(token.to_lowercase());
                }
            }
        }
    }

    versions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_fixture() {
        let html =
            r#"<div id="VersionContainer"><div><h3>  Serv-U 15.1.6  </h3></div></div>"#;
        assert_eq!(extract_versions(Some(html)), vec!["15.1.6"]);
    }

    #[test]
    fn test_none_input() {
        assert_eq!(extract_versions(None), Vec::<String>::new());
    }

    #[test]
    fn test_two_headings_in_one_block_preserve_order() {
        let html = r#"
            <div id="VersionContainer">
                <div><h3>x 1.0</h3><h3>y 2.0</h3></div>
            </div>
        "#;
        assert_eq!(extract_versions(Some(html)), vec!["1.0", "2.0"]);
    }

    #[test]
    fn test_order_across_blocks() {
        let html = r#"
            <div id="VersionContainer">
                <div><h3>Serv-U 15.1.6</h3></div>
                <div><h3>Serv-U 15.1.5</h3></div>
                <div><h3>Serv-U 15.1.0</h3></div>
            </div>
        "#;
        assert_eq!(
            extract_versions(Some(html)),
            vec!["15.1.6", "15.1.5", "15.1.0"]
        );
    }

    #[test]
    fn test_block_without_heading_contributes_nothing() {
        let html = r#"
            <div id="VersionContainer">
                <div><p>Release notes preamble</p></div>
                <div><h3>Serv-U 15.1.6</h3></div>
            </div>
        "#;
        assert_eq!(extract_versions(Some(html)), vec!["15.1.6"]);
    }

    #[test]
    fn test_headings_outside_container_ignored() {
        let html = r#"
            <h3>Site 9.9.9</h3>
            <div id="VersionContainer">
                <div><h3>Serv-U 15.1.6</h3></div>
            </div>
            <div><h3>Footer 0.0.1</h3></div>
        "#;
        assert_eq!(extract_versions(Some(html)), vec!["15.1.6"]);
    }

    #[test]
    fn test_last_token_is_lowercased() {
        let html = r#"
            <div id="VersionContainer">
                <div><h3>Serv-U 15.1.6 HotFix1</h3></div>
            </div>
        "#;
        assert_eq!(extract_versions(Some(html)), vec!["hotfix1"]);
    }

    #[test]
    fn test_missing_container_yields_empty() {
        let html = r#"<html><body><h3>Serv-U 15.1.6</h3></body></html>"#;
        assert_eq!(extract_versions(Some(html)), Vec::<String>::new());
    }

    #[test]
    fn test_whitespace_only_heading_skipped() {
        let html = r#"
            <div id="VersionContainer">
                <div><h3>   </h3></div>
                <div><h3>Serv-U 15.1.6</h3></div>
            </div>
        "#;
        assert_eq!(extract_versions(Some(html)), vec!["15.1.6"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let html = r#"
            <div id="VersionContainer">
                <div><h3>Serv-U 15.1.6</h3></div>
                <div><h3>Serv-U 15.1.6</h3></div>
            </div>
        "#;
        assert_eq!(extract_versions(Some(html)), vec!["15.1.6", "15.1.6"]);
    }
}
