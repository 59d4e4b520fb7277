//! Discovery source implementations.

pub mod csv_file;
pub mod tribune;
pub mod wikipedia;

pub use csv_file::CsvProvider;
pub use tribune::TribuneProvider;
pub use wikipedia::WikipediaProvider;

/// Strip HTML tags from a fragment and decode the common entities.
pub(crate) fn clean_text(fragment: &str) -> String {
    let tag_pattern = regex::Regex::new(r"<[^>]+>").unwrap();
    let text = tag_pattern.replace_all(fragment, "");
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("<b>Frisco ISD</b>"), "Frisco ISD");
        assert_eq!(clean_text(" A &amp; M CISD "), "A & M CISD");
    }
}
