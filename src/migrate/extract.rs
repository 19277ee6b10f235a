use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TITLE_RE: Regex = Regex::new(r"(?is)<title>(.*?)</title>").unwrap();
    static ref BODY_OPEN_RE: Regex = Regex::new(r"(?i)<body[^>]*>").unwrap();
    static ref BODY_CLOSE_RE: Regex = Regex::new(r"(?i)</body>").unwrap();
}

/// Extract the inner text of the `<title>` element, trimmed. Falls back
/// to the given title when the element is missing.
pub fn extract_title(html: &str, fallback: &str) -> String {
    TITLE_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(fallback)
        .trim()
        .to_string()
}

/// Slice the substring strictly between the end of the opening `<body>`
/// tag and the start of `</body>`.
///
/// Boundaries are matched case-insensitively. A document where either
/// boundary is missing, or where `</body>` precedes the end of the
/// opening tag, is malformed input.
pub fn extract_body(html: &str) -> Result<&str, String> {
    match (BODY_OPEN_RE.find(html), BODY_CLOSE_RE.find(html)) {
        (Some(open), Some(close)) if close.start() >= open.end() => {
            Ok(&html[open.end()..close.start()])
        }
        (Some(_), Some(_)) => Err("</body> precedes <body>".to_string()),
        _ => Err("could not find <body>...</body>".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        let html = "<html><head><title> Bagery | Home </title></head><body></body></html>";
        assert_eq!(extract_title(html, "Matizes"), "Bagery | Home");
    }

    #[test]
    fn test_extract_title_case_insensitive() {
        let html = "<HTML><HEAD><TITLE>Shop</TITLE></HEAD></HTML>";
        assert_eq!(extract_title(html, "Matizes"), "Shop");
    }

    #[test]
    fn test_extract_title_fallback() {
        let html = "<html><head></head><body></body></html>";
        assert_eq!(extract_title(html, "Matizes"), "Matizes");
    }

    #[test]
    fn test_extract_title_spans_lines() {
        let html = "<title>Bagery\n| Contact</title>";
        assert_eq!(extract_title(html, "Matizes"), "Bagery\n| Contact");
    }

    #[test]
    fn test_extract_body() {
        let html = "<html><body class=\"home\"><p>Hi</p></body></html>";
        assert_eq!(extract_body(html).unwrap(), "<p>Hi</p>");
    }

    #[test]
    fn test_extract_body_missing() {
        let html = "<html><p>No body here</p></html>";
        assert!(extract_body(html).is_err());
    }

    #[test]
    fn test_extract_body_reversed() {
        let html = "</body>garbage<body>";
        assert!(extract_body(html).is_err());
    }

    #[test]
    fn test_extract_body_empty() {
        let html = "<body></body>";
        assert_eq!(extract_body(html).unwrap(), "");
    }
}
