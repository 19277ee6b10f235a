use std::path::{Path, PathBuf};

use crate::config::MigrationConfig;

/// Transient record for one page migration. Built at the start of an
/// iteration, dropped once the output file is written; no state crosses
/// iterations.
pub struct PageRecord {
    pub title: String,
    pub body: String,
    pub route: String,
    pub output_path: PathBuf,
}

/// Derive the output path for a legacy filename: the home page keeps the
/// fixed `index.astro` name, every other file swaps its `.html` extension
/// (matched case-insensitively) for `.astro` under the pages directory.
pub fn output_path(config: &MigrationConfig, dest_dir: &Path, file_name: &str) -> PathBuf {
    let pages_dir = dest_dir.join(&config.pages_dir);
    if file_name == config.home_page {
        return pages_dir.join("index.astro");
    }
    pages_dir.join(format!("{}.astro", stem(file_name)))
}

/// Compose the Astro page document: the shared layout import, the title
/// constant, and the rewritten body injected as raw, unescaped markup.
pub fn compose_page(config: &MigrationConfig, title: &str, body: &str) -> String {
    let title_literal = serde_json::Value::String(title.to_string()).to_string();
    let body_literal = serde_json::Value::String(body.to_string()).to_string();
    format!(
        "---\nimport {layout} from '{import_path}';\n\nconst title = {title};\n---\n\n<{layout} title={{title}}>\n\t<Fragment set:html={{{body}}} />\n</{layout}>\n",
        layout = config.layout_name,
        import_path = config.layout_import,
        title = title_literal,
        body = body_literal,
    )
}

fn stem(file_name: &str) -> &str {
    let len = file_name.len();
    if len >= 5
        && file_name.is_char_boundary(len - 5)
        && file_name[len - 5..].eq_ignore_ascii_case(".html")
    {
        &file_name[..len - 5]
    } else {
        file_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let config = MigrationConfig::default();
        let dest = Path::new("/site");
        assert_eq!(
            output_path(&config, dest, "about.html"),
            Path::new("/site/src/pages/about.astro")
        );
        assert_eq!(
            output_path(&config, dest, "index.html"),
            Path::new("/site/src/pages/index.astro")
        );
        assert_eq!(
            output_path(&config, dest, "SHOP.HTML"),
            Path::new("/site/src/pages/SHOP.astro")
        );
    }

    #[test]
    fn test_compose_page() {
        let config = MigrationConfig::default();
        let page = compose_page(&config, "Matizes | About", "<p>a \"quoted\" line</p>");
        assert!(page.starts_with("---\nimport BageryLayout from '../layouts/BageryLayout.astro';\n"));
        assert!(page.contains("const title = \"Matizes | About\";"));
        assert!(page.contains(r#"<Fragment set:html={"<p>a \"quoted\" line</p>"} />"#));
        assert!(page.ends_with("</BageryLayout>\n"));
    }

    #[test]
    fn test_compose_page_escapes_newlines() {
        let config = MigrationConfig::default();
        let page = compose_page(&config, "T", "line one\nline two");
        assert!(page.contains(r#"{"line one\nline two"}"#));
    }
}
