//! Integration tests for the Copy Builder pipeline

use std::fs;
use std::path::{Path, PathBuf};

use copy_builder::framework::{FabError, FabField, FabItem};
use copy_builder::{
    preview, render_brief, render_with_config, Brief, BriefError, DisplayBlock, DocumentStats,
    FrameworkKind, OutputFormat, OutputStyle, RenderConfig,
};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn markup() -> RenderConfig {
    RenderConfig::new().with_format(OutputFormat::Markup)
}

#[test]
fn test_brief_from_file() {
    let brief = Brief::from_file(&fixture("syncstock.toml")).expect("Should load");
    assert_eq!(brief.framework, FrameworkKind::Pas);
    assert_eq!(brief.style, OutputStyle::Structured);
    assert_eq!(brief.aida.attention, "Never oversell again.");
    assert_eq!(brief.fab.len(), 1);

    insta::assert_snapshot!(brief.generate(), @r"
# SyncStock

*For Sellers on three or more marketplaces*

## The Problem
You sold the last unit on Amazon. Then again on eBay.

## Why It Matters
Every oversell is a refund, a bad review & a lost customer.

## The Solution
SyncStock updates stock everywhere the moment an order lands.

---
Connect your stores in 5 minutes. **Free** for 30 days.
");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Brief::from_file(&fixture("missing.toml")).unwrap_err();
    assert!(matches!(err, BriefError::Io(_)));
}

#[test]
fn test_fixture_renders_html() {
    let source = fs::read_to_string(fixture("syncstock.toml")).unwrap();
    let html = render_with_config(&source, RenderConfig::default()).unwrap();
    assert_eq!(
        html,
        r#"<div class="cb-preview">
  <h2 class="cb-title">SyncStock</h2>
  <p class="cb-audience">For Sellers on three or more marketplaces</p>
  <h3 class="cb-heading">The Problem</h3>
  <p class="cb-text">You sold the last unit on Amazon. Then again on eBay.</p>
  <h3 class="cb-heading">Why It Matters</h3>
  <p class="cb-text">Every oversell is a refund, a bad review &amp; a lost customer.</p>
  <h3 class="cb-heading">The Solution</h3>
  <p class="cb-text">SyncStock updates stock everywhere the moment an order lands.</p>
  <hr class="cb-rule"/>
  <p class="cb-text">Connect your stores in 5 minutes. <strong class="cb-strong">Free</strong> for 30 days.</p>
</div>"#
    );
}

#[test]
fn test_switch_to_fab_bullets_uses_kept_items() {
    let brief = Brief::from_file(&fixture("syncstock.toml")).unwrap();
    let config = markup()
        .with_framework(FrameworkKind::Fab)
        .with_style(OutputStyle::Bullet);
    let doc = render_brief(&brief, &config).unwrap();
    assert_eq!(
        doc,
        "# SyncStock\n\n*For Sellers on three or more marketplaces*\n\n\
         - **Real-time sync** — Stock updates in under a second. No more cancelled orders\n\n\
         Connect your stores in 5 minutes. **Free** for 30 days."
    );
}

#[test]
fn test_fab_editing_session() {
    let mut brief = Brief::default().with_framework(FrameworkKind::Fab);
    brief.common.product_name = "Laptop".into();

    let fab = &mut brief.fab;
    fab.update(0, FabField::Feature, "SSD").unwrap();
    fab.update(0, FabField::Advantage, "Fast boot").unwrap();
    let second = fab.push_blank();
    assert_eq!(second, 2);
    fab.update(1, FabField::Benefit, "All-day work").unwrap();
    fab.push(FabItem::new("Screen", "", ""));

    let doc = render_brief(&brief, &markup()).unwrap();
    assert_eq!(
        doc,
        "# Laptop\n\n## SSD\n**Advantage:** Fast boot\n\n\
         ## Feature 2\n**Benefit:** All-day work\n\n## Screen"
    );

    assert_eq!(brief.fab.remove(0).unwrap().feature, "SSD");
    assert_eq!(brief.fab.remove(0).unwrap().benefit, "All-day work");
    assert_eq!(brief.fab.remove(0), Err(FabError::LastItem));
    assert_eq!(brief.fab.len(), 1);
    assert_eq!(brief.fab.get(0).map(|item| item.id), Some(3));
}

#[test]
fn test_examples_render_in_every_style() {
    for kind in FrameworkKind::ALL {
        for style in OutputStyle::ALL {
            let brief = Brief::example(kind).with_style(style);
            let blocks = preview(&brief);
            assert!(
                matches!(blocks.first(), Some(DisplayBlock::Heading1 { .. }))
                    || style == OutputStyle::Paragraph,
                "{} / {} starts with {:?}",
                kind,
                style,
                blocks.first()
            );

            let html = render_brief(&brief, &RenderConfig::default()).unwrap();
            assert!(!html.contains("cb-empty"), "{} / {} rendered empty", kind, style);

            let stats = DocumentStats::of(&brief.generate());
            assert!(stats.has_content());
            assert!(stats.words > 20);
        }
    }
}

#[test]
fn test_json_output_is_block_list() {
    let brief = Brief::example(FrameworkKind::Aida).with_style(OutputStyle::Bullet);
    let json = render_brief(&brief, &RenderConfig::new().with_format(OutputFormat::Json)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let kinds: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|block| block["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec!["heading1", "italic_line", "bullet_list", "paragraph"]
    );
    assert_eq!(value[2]["items"].as_array().unwrap().len(), 4);
}

#[test]
fn test_invalid_brief_formats_with_location() {
    let source = "framework = \"4ps\"\n";
    let err = source.parse::<Brief>().unwrap_err();
    assert!(err.span().is_some());

    let report = err.format(source, "brief.toml");
    assert!(report.contains("brief.toml"), "{}", report);
    assert!(report.contains("invalid brief"), "{}", report);
}

#[test]
fn test_empty_document_has_no_stats() {
    let brief: Brief = "[common]\ntarget_audience = \"Everyone\"\n".parse().unwrap();
    let doc = brief.generate();
    assert_eq!(doc, "");
    assert!(!DocumentStats::of(&doc).has_content());
    assert!(preview(&brief).is_empty());
}
