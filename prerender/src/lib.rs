//! Static export of the PetChain page.
//!
//! [`build_site`] renders the page once with the overlay closed and, on
//! request, once per feature with that feature's overlay open, so each
//! feature has a shareable URL that works without JavaScript. Static assets
//! (the logo) are copied next to the pages so `/assets/..` resolves when
//! the output directory is served as the site root.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use petchain_site::{Catalog, PageVariant, Selection, render_document};
use tracing::{debug, info};
use walkdir::WalkDir;

/// What to write and where.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub out_dir: PathBuf,
    pub variant: PageVariant,
    /// Write `features/<slug>/index.html` for every entry.
    pub feature_pages: bool,
    /// Write `catalog.json`.
    pub emit_catalog: bool,
    /// Directory copied to `<out_dir>/assets`.
    pub assets_dir: Option<PathBuf>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            variant: PageVariant::default(),
            feature_pages: false,
            emit_catalog: false,
            assets_dir: None,
        }
    }
}

/// Files written by one build, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
}

pub fn build_site(catalog: &Catalog, options: &BuildOptions) -> Result<BuildReport> {
    let mut report = BuildReport::default();
    let out = &options.out_dir;

    info!(
        out_dir = %out.display(),
        variant = %options.variant,
        features = catalog.len(),
        "prerendering"
    );

    let index = render_document(catalog, options.variant, Selection::Closed);
    write_file(&out.join("index.html"), &index, &mut report)?;

    if options.feature_pages {
        for entry in catalog.entries() {
            let html = render_document(catalog, options.variant, Selection::open(*entry));
            let path = out.join("features").join(entry.slug()).join("index.html");
            write_file(&path, &html, &mut report)?;
        }
    }

    if options.emit_catalog {
        let json = serde_json::to_string_pretty(catalog.entries())
            .context("Failed to serialize feature catalog")?;
        write_file(&out.join("catalog.json"), &json, &mut report)?;
    }

    if let Some(assets) = &options.assets_dir {
        copy_assets(assets, &out.join("assets"), &mut report)?;
    }

    info!(files = report.written.len(), "prerender complete");
    Ok(report)
}

fn write_file(path: &Path, contents: &str, report: &mut BuildReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote");
    report.written.push(path.to_path_buf());
    Ok(())
}

fn copy_assets(src: &Path, dest: &Path, report: &mut BuildReport) -> Result<()> {
    if !src.is_dir() {
        anyhow::bail!("Assets directory not found: {}", src.display());
    }
    for entry in WalkDir::new(src).follow_links(false).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to read assets under {}", src.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(src).with_context(|| {
            format!("{} is outside {}", entry.path().display(), src.display())
        })?;
        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::copy(entry.path(), &target).with_context(|| {
            format!("Failed to copy {} to {}", entry.path().display(), target.display())
        })?;
        debug!(path = %target.display(), "copied asset");
        report.written.push(target);
    }
    Ok(())
}
