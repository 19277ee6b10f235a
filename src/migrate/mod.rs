use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::MigrationConfig;

mod error;
pub mod extract;
pub mod page;
pub mod rewrite;

pub use error::MigrateError;

/// Options for a migration run.
pub struct MigrationOptions {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub verbose: bool,
}

/// Individual migration change.
#[derive(Debug)]
pub struct MigrationChange {
    pub file_path: String,
    pub change_type: ChangeType,
    pub description: String,
}

/// Types of changes that can occur during migration.
#[derive(Debug)]
pub enum ChangeType {
    Converted,
    Copied,
    Skipped,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeType::Converted => write!(f, "Converted"),
            ChangeType::Copied => write!(f, "Copied"),
            ChangeType::Skipped => write!(f, "Skipped"),
        }
    }
}

/// Outcome of a completed migration run.
#[derive(Debug)]
pub struct MigrationSummary {
    pub changes: Vec<MigrationChange>,
    pub warnings: Vec<String>,
}

impl MigrationSummary {
    /// Number of pages converted. The hand-customized home page and the
    /// auxiliary assets are not counted.
    pub fn pages_migrated(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c.change_type, ChangeType::Converted))
            .count()
    }
}

/// Migrate every configured legacy page into an Astro page template.
///
/// Pages are processed strictly in list order and the run fails fast: the
/// first hard error aborts the batch, leaving earlier outputs in place and
/// producing none for the failing or later entries. The auxiliary assets
/// are copied best-effort afterwards.
pub fn run_migration(
    config: &MigrationConfig,
    options: &MigrationOptions,
) -> Result<MigrationSummary, MigrateError> {
    let pages_dir = options.dest_dir.join(&config.pages_dir);
    create_dir_if_not_exists(&pages_dir)?;

    let branding = rewrite::BrandRewriter::new(&config.legacy_brand, &config.new_brand);

    let mut summary = MigrationSummary {
        changes: Vec::new(),
        warnings: Vec::new(),
    };
    let mut seen: HashSet<&str> = HashSet::new();

    for file_name in &config.pages {
        if !seen.insert(file_name) {
            summary.warnings.push(format!(
                "Duplicate page entry {}: output is written more than once",
                file_name
            ));
        }

        // The home page was rebuilt by hand; never overwrite it.
        if file_name == &config.home_page {
            summary.changes.push(MigrationChange {
                file_path: file_name.clone(),
                change_type: ChangeType::Skipped,
                description: "Hand-customized home page left untouched".to_string(),
            });
            continue;
        }

        let record = migrate_page(config, options, &branding, file_name)?;
        if options.verbose {
            log::info!("Migrated {} -> {}", file_name, record.output_path.display());
        }
        summary.changes.push(MigrationChange {
            file_path: file_name.clone(),
            change_type: ChangeType::Converted,
            description: format!("Converted to an Astro page serving {}", record.route),
        });
    }

    copy_auxiliary_assets(config, options, &mut summary);

    Ok(summary)
}

/// Migrate one legacy page: read, slice out the title and body, rewrite
/// links and branding, compose the Astro document, and write it out.
fn migrate_page(
    config: &MigrationConfig,
    options: &MigrationOptions,
    branding: &rewrite::BrandRewriter,
    file_name: &str,
) -> Result<page::PageRecord, MigrateError> {
    let source_path = options.source_dir.join(file_name);
    let html = fs::read_to_string(&source_path).map_err(|e| MigrateError::Read {
        path: source_path.clone(),
        source: e,
    })?;

    let title = branding.rewrite(&extract::extract_title(&html, &config.fallback_title));
    let body = extract::extract_body(&html).map_err(|detail| MigrateError::MalformedInput {
        path: source_path.clone(),
        detail,
    })?;

    let body = rewrite::rewrite_asset_paths(body);
    let body = rewrite::rewrite_internal_links(&body, &config.home_page);
    let body = branding.rewrite(&body);

    let record = page::PageRecord {
        route: rewrite::file_to_route(file_name, &config.home_page),
        output_path: page::output_path(config, &options.dest_dir, file_name),
        title,
        body,
    };

    let document = page::compose_page(config, &record.title, &record.body);
    if let Some(parent) = record.output_path.parent() {
        create_dir_if_not_exists(parent)?;
    }
    fs::write(&record.output_path, document).map_err(|e| MigrateError::Write {
        path: record.output_path.clone(),
        source: e,
    })?;

    Ok(record)
}

/// Copy the configured non-HTML assets into the public directory.
///
/// This step is non-critical: a missing or unreadable asset is skipped
/// without affecting the run's outcome.
fn copy_auxiliary_assets(
    config: &MigrationConfig,
    options: &MigrationOptions,
    summary: &mut MigrationSummary,
) {
    for name in &config.auxiliary_assets {
        let from = options.source_dir.join(name);
        let to = options.dest_dir.join(&config.public_dir).join(name);
        match copy_file(&from, &to) {
            Ok(_) => summary.changes.push(MigrationChange {
                file_path: name.clone(),
                change_type: ChangeType::Copied,
                description: format!("Copied into {}", config.public_dir),
            }),
            Err(e) => {
                log::debug!("Skipping auxiliary asset {}: {}", name, e);
            }
        }
    }
}

/// Create a directory if it doesn't exist.
pub fn create_dir_if_not_exists(dir: &Path) -> Result<(), MigrateError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| MigrateError::Write {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Copy a file, creating the destination's parent directories first.
fn copy_file(from: &Path, to: &Path) -> io::Result<u64> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(from, to)
}

/// Write a `MIGRATION.md` change report into the destination directory.
pub fn generate_migration_report(
    summary: &MigrationSummary,
    dest_dir: &Path,
) -> Result<PathBuf, MigrateError> {
    let report_path = dest_dir.join("MIGRATION.md");
    let datetime = Local::now().format("%Y-%m-%d %H:%M:%S");

    let changes = summary
        .changes
        .iter()
        .map(|c| format!("| {} | {} | {} |", c.file_path, c.change_type, c.description))
        .collect::<Vec<String>>()
        .join("\n");
    let warnings = if summary.warnings.is_empty() {
        "None".to_string()
    } else {
        summary
            .warnings
            .iter()
            .map(|w| format!("- {}", w))
            .collect::<Vec<String>>()
            .join("\n")
    };

    let content = format!(
        r#"# Migration Report

## Overview
- **Migration Date**: {}
- **Pages Migrated**: {}
- **Total Changes**: {}

## Changes

| File | Type | Description |
|------|------|-------------|
{}

## Warnings

{}
"#,
        datetime,
        summary.pages_migrated(),
        summary.changes.len(),
        changes,
        warnings
    );

    fs::write(&report_path, content).map_err(|e| MigrateError::Write {
        path: report_path.clone(),
        source: e,
    })?;

    Ok(report_path)
}
