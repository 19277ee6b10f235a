use std::path::PathBuf;

use serde::Deserialize;

/// Configuration for a migration run.
///
/// The defaults embed the full Bagery template inventory so the tool runs
/// without any configuration file; a YAML file can override individual
/// fields, which is how the tests substitute smaller file sets.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigrationConfig {
    /// Legacy template directory the HTML files are read from
    pub template_root: PathBuf,
    /// Astro project root the generated files are written under
    pub project_root: PathBuf,
    /// Directory, relative to the project root, receiving the generated pages
    pub pages_dir: String,
    /// Directory, relative to the project root, receiving auxiliary assets
    pub public_dir: String,
    /// Legacy files to migrate, in order
    pub pages: Vec<String>,
    /// Hand-customized page that is never overwritten
    pub home_page: String,
    /// Title used when a legacy page has no `<title>` element
    pub fallback_title: String,
    /// Name of the shared layout component
    pub layout_name: String,
    /// Import path of the shared layout component, relative to a page file
    pub layout_import: String,
    /// Brand token being replaced
    pub legacy_brand: String,
    /// Brand token replacing it
    pub new_brand: String,
    /// Non-HTML files copied best-effort into the public directory
    pub auxiliary_assets: Vec<String>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        MigrationConfig {
            template_root: PathBuf::from("../Bagery Pack/Bagery"),
            project_root: PathBuf::from("."),
            pages_dir: "src/pages".to_string(),
            public_dir: "public".to_string(),
            pages: default_pages(),
            home_page: "index.html".to_string(),
            fallback_title: "Matizes".to_string(),
            layout_name: "BageryLayout".to_string(),
            layout_import: "../layouts/BageryLayout.astro".to_string(),
            legacy_brand: "Bagery".to_string(),
            new_brand: "Matizes".to_string(),
            auxiliary_assets: vec!["sendemail.php".to_string()],
        }
    }
}

/// The fixed inventory of the Bagery template pack.
fn default_pages() -> Vec<String> {
    [
        "about-element-1.html",
        "about-element-2.html",
        "about.html",
        "blog-details.html",
        "blog-grid.html",
        "blog-masonry.html",
        "blog-standard.html",
        "cart.html",
        "checkout.html",
        "clients-element.html",
        "contact.html",
        "error.html",
        "faq.html",
        "feature-element-1.html",
        "feature-element-2.html",
        "gallery-1.html",
        "gallery-2.html",
        "gallery-3.html",
        "index-2.html",
        "index-3.html",
        "index-4.html",
        "index-onepage.html",
        "index-rtl.html",
        "index.html",
        "news-element-1.html",
        "news-element-2.html",
        "our-menu.html",
        "project-element-1.html",
        "project-element-2.html",
        "service-element-1.html",
        "service-element-2.html",
        "service.html",
        "shop-1.html",
        "shop-2.html",
        "shop-details.html",
        "shop-element-1.html",
        "shop-element-2.html",
        "team-element-1.html",
        "team-element-2.html",
        "team.html",
        "testimonial-element.html",
        "testimonial.html",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
