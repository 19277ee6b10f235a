use lazy_static::lazy_static;
use regex::{Captures, NoExpand, Regex};

lazy_static! {
    static ref ASSET_ATTR_RE: Regex = Regex::new(r#"(?i)(href|src)=(["'])assets/"#).unwrap();
    static ref ASSET_URL_RE: Regex = Regex::new(r#"(?i)url\((["']?)assets/"#).unwrap();
    static ref HTML_LINK_RE: Regex = Regex::new(r#"(?i)href=(["'])([^"']+?\.html)(["'])"#).unwrap();
    static ref EXTERNAL_RE: Regex = Regex::new(r"(?i)^(https?:)?//").unwrap();
    static ref NON_NAV_RE: Regex = Regex::new(r"(?i)^(mailto:|tel:|#)").unwrap();
    static ref HTML_EXT_RE: Regex = Regex::new(r"(?i)\.html$").unwrap();
}

/// Insert the leading slash on `href`/`src` attribute values and CSS
/// `url(...)` references that point into the template's `assets/` tree.
/// Quote style (single, double, or none for `url`) is preserved.
pub fn rewrite_asset_paths(html: &str) -> String {
    let out = ASSET_ATTR_RE.replace_all(html, "$1=$2/assets/");
    ASSET_URL_RE.replace_all(&out, "url($1/assets/").into_owned()
}

/// Map internal `.html` links onto site routes. External URLs
/// (scheme-relative or http/https), `mailto:` and `tel:` references, and
/// bare fragments are left untouched.
pub fn rewrite_internal_links(html: &str, home_page: &str) -> String {
    HTML_LINK_RE
        .replace_all(html, |caps: &Captures| {
            let open = &caps[1];
            let href = &caps[2];
            let close = &caps[3];
            // The character class can pair a double quote with a single
            // one; leave mismatched quoting alone rather than guess.
            if open != close {
                return caps[0].to_string();
            }
            if EXTERNAL_RE.is_match(href) || NON_NAV_RE.is_match(href) {
                return caps[0].to_string();
            }
            let normalized = href.strip_prefix("./").unwrap_or(href);
            format!("href={}{}{}", open, file_to_route(normalized, home_page), close)
        })
        .into_owned()
}

/// Derive the URL path a legacy page's template serves from: the home
/// page maps to `/`, every other `name.html` to `/name`.
pub fn file_to_route(file_name: &str, home_page: &str) -> String {
    if file_name == home_page {
        return "/".to_string();
    }
    format!("/{}", HTML_EXT_RE.replace(file_name, ""))
}

/// Whole-word, case-preserving brand substitution.
///
/// Three casing variants of the legacy token are recognized (all-caps,
/// capitalized, all-lowercase), each replaced with the matching casing of
/// the new token. Word boundaries keep substrings of longer words intact.
pub struct BrandRewriter {
    rules: Vec<(Regex, String)>,
}

impl BrandRewriter {
    pub fn new(legacy: &str, replacement: &str) -> Self {
        let variants = [
            (legacy.to_uppercase(), replacement.to_uppercase()),
            (capitalize(legacy), capitalize(replacement)),
            (legacy.to_lowercase(), replacement.to_lowercase()),
        ];
        let rules = variants
            .into_iter()
            .map(|(from, to)| {
                let pattern = format!(r"\b{}\b", regex::escape(&from));
                (Regex::new(&pattern).expect("brand token pattern"), to)
            })
            .collect();
        BrandRewriter { rules }
    }

    pub fn rewrite(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (re, to) in &self.rules {
            out = re.replace_all(&out, NoExpand(to)).into_owned();
        }
        out
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
