//! Document generator
//!
//! Turns a framework's field values plus the shared metadata into a markup
//! document. Generation is pure and total: every combination of framework and
//! style yields a string, and the string is empty exactly when there is
//! nothing to say.
//!
//! All three frameworks share one skeleton:
//!
//! ```text
//! header   (product name, audience line)
//! body     (one section per filled field or FAB item)
//! footer   (price / call to action)
//! ```
//!
//! with sections joined by a blank line. AIDA and PAS bodies are driven by
//! their static field tables; FAB bodies iterate the item list.

pub mod stats;
pub mod style;

pub use stats::DocumentStats;
pub use style::OutputStyle;

use crate::framework::{CommonFields, FabFields, FieldSpec, FrameworkFields};

/// Separator between sections
const SECTION_BREAK: &str = "\n\n";

/// Generate the markup document for a framework in the given style
///
/// Returns the empty string when no framework field, product name or
/// call-to-action has content. The audience alone never counts as content.
///
/// # Example
///
/// ```rust
/// use copy_builder::framework::{AidaFields, CommonFields, FrameworkFields};
/// use copy_builder::generator::{generate, OutputStyle};
///
/// let aida = AidaFields {
///     attention: "Hook".into(),
///     ..AidaFields::default()
/// };
/// let common = CommonFields::new("Acme", "", "");
///
/// let doc = generate(FrameworkFields::Aida(&aida), &common, OutputStyle::Structured);
/// assert_eq!(doc, "# Acme\n\n## Attention\nHook");
/// ```
pub fn generate(fields: FrameworkFields<'_>, common: &CommonFields, style: OutputStyle) -> String {
    let meta = Metadata::from(common);

    let body = match fields {
        FrameworkFields::Aida(aida) => field_body(&aida.entries(), style),
        FrameworkFields::Pas(pas) => field_body(&pas.entries(), style),
        FrameworkFields::Fab(fab) => fab_body(fab, style),
    };

    if !body.has_content && meta.name.is_none() && meta.cta.is_none() {
        return String::new();
    }

    let mut sections = meta.header(style);
    sections.extend(body.sections);
    sections.extend(meta.footer(style));
    sections.join(SECTION_BREAK)
}

/// Trimmed field value, or None if nothing is left
fn filled(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Trimmed shared metadata
struct Metadata<'a> {
    name: Option<&'a str>,
    audience: Option<&'a str>,
    cta: Option<&'a str>,
}

impl<'a> From<&'a CommonFields> for Metadata<'a> {
    fn from(common: &'a CommonFields) -> Self {
        Self {
            name: filled(&common.product_name),
            audience: filled(&common.target_audience),
            cta: filled(&common.price_cta),
        }
    }
}

impl Metadata<'_> {
    fn header(&self, style: OutputStyle) -> Vec<String> {
        let audience = self.audience.map(|a| format!("*For {}*", a));

        match style {
            OutputStyle::Paragraph => {
                let lead: Vec<String> = self
                    .name
                    .map(|n| format!("**{}**", n))
                    .into_iter()
                    .chain(audience)
                    .collect();
                if lead.is_empty() {
                    vec![]
                } else {
                    vec![lead.join(" — ")]
                }
            }
            OutputStyle::Structured | OutputStyle::Bullet => self
                .name
                .map(|n| format!("# {}", n))
                .into_iter()
                .chain(audience)
                .collect(),
        }
    }

    fn footer(&self, style: OutputStyle) -> Option<String> {
        let cta = self.cta?;
        Some(match style {
            OutputStyle::Structured => format!("---\n{}", cta),
            OutputStyle::Paragraph | OutputStyle::Bullet => cta.to_string(),
        })
    }
}

/// Body sections plus whether any framework field contributed content
struct Body {
    sections: Vec<String>,
    has_content: bool,
}

impl Body {
    /// Bullet style collapses all lines into a single list section
    fn from_bullets(lines: Vec<String>, has_content: bool) -> Self {
        let sections = if lines.is_empty() {
            vec![]
        } else {
            vec![lines.join("\n")]
        };
        Self {
            sections,
            has_content,
        }
    }
}

/// Body for a flat framework described by a field table (AIDA, PAS)
fn field_body(entries: &[(&'static FieldSpec, &str)], style: OutputStyle) -> Body {
    let present: Vec<(&FieldSpec, &str)> = entries
        .iter()
        .filter_map(|(spec, value)| filled(value).map(|text| (*spec, text)))
        .collect();
    let has_content = !present.is_empty();

    match style {
        OutputStyle::Structured => Body {
            sections: present
                .iter()
                .map(|(spec, text)| format!("## {}\n{}", spec.heading, text))
                .collect(),
            has_content,
        },
        OutputStyle::Paragraph => Body {
            sections: present.iter().map(|(_, text)| text.to_string()).collect(),
            has_content,
        },
        OutputStyle::Bullet => {
            let lines = present
                .iter()
                .map(|(spec, text)| match spec.bullet_prefix {
                    Some(prefix) => format!("- {}: {}", prefix, text),
                    None => format!("- {}", text),
                })
                .collect();
            Body::from_bullets(lines, has_content)
        }
    }
}

/// Body for FAB: one section (or bullet) per filled item
fn fab_body(fab: &FabFields, style: OutputStyle) -> Body {
    // Positions are 1-based indices into the unfiltered list
    let filled_items: Vec<_> = fab
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_filled())
        .map(|(index, item)| (index + 1, item))
        .collect();
    let has_content = !filled_items.is_empty();

    match style {
        OutputStyle::Structured => {
            let sections = filled_items
                .iter()
                .map(|(position, item)| {
                    let [feature, rest @ ..] = item.entries();
                    let title = filled(feature.1)
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("{} {}", feature.0.heading, position));
                    let mut lines = vec![format!("## {}", title)];
                    lines.extend(rest.iter().filter_map(|(spec, value)| {
                        filled(value).map(|text| format!("**{}:** {}", spec.heading, text))
                    }));
                    lines.join("\n")
                })
                .collect();
            Body {
                sections,
                has_content,
            }
        }
        OutputStyle::Paragraph => {
            let sections = filled_items
                .iter()
                .map(|(_, item)| {
                    let parts: Vec<&str> =
                        item.entries().iter().filter_map(|&(_, v)| filled(v)).collect();
                    format!("{}.", parts.join(". "))
                })
                .collect();
            Body {
                sections,
                has_content,
            }
        }
        OutputStyle::Bullet => {
            // An item without a feature has nothing to bold and is left out
            let lines = filled_items
                .iter()
                .filter_map(|(_, item)| {
                    let mut line = format!("- **{}**", filled(&item.feature)?);
                    if let Some(advantage) = filled(&item.advantage) {
                        line.push_str(" — ");
                        line.push_str(advantage);
                    }
                    if let Some(benefit) = filled(&item.benefit) {
                        line.push_str(". ");
                        line.push_str(benefit);
                    }
                    Some(line)
                })
                .collect();
            Body::from_bullets(lines, has_content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{AidaFields, FabItem, FrameworkKind, PasFields};
    use pretty_assertions::assert_eq;

    fn aida(attention: &str, interest: &str, desire: &str, action: &str) -> AidaFields {
        AidaFields {
            attention: attention.into(),
            interest: interest.into(),
            desire: desire.into(),
            action: action.into(),
        }
    }

    fn pas(problem: &str, agitate: &str, solution: &str) -> PasFields {
        PasFields {
            problem: problem.into(),
            agitate: agitate.into(),
            solution: solution.into(),
        }
    }

    fn fab(items: Vec<FabItem>) -> FabFields {
        FabFields::try_from(items).unwrap()
    }

    fn gen_all(common: &CommonFields) -> Vec<(FrameworkKind, OutputStyle, String)> {
        let a = AidaFields::default();
        let p = PasFields::default();
        let f = FabFields::new();
        let mut out = vec![];
        for style in OutputStyle::ALL {
            for fields in [
                FrameworkFields::Aida(&a),
                FrameworkFields::Pas(&p),
                FrameworkFields::Fab(&f),
            ] {
                out.push((fields.kind(), style, generate(fields, common, style)));
            }
        }
        out
    }

    #[test]
    fn test_all_empty_yields_empty_string() {
        for (kind, style, doc) in gen_all(&CommonFields::default()) {
            assert!(doc.is_empty(), "{} / {} produced {:?}", kind, style, doc);
        }
    }

    #[test]
    fn test_audience_alone_yields_empty_string() {
        let common = CommonFields::new("", "Freelancers", "");
        for (kind, style, doc) in gen_all(&common) {
            assert!(doc.is_empty(), "{} / {} produced {:?}", kind, style, doc);
        }
    }

    #[test]
    fn test_whitespace_only_fields_count_as_empty() {
        let fields = aida("  ", "\n", "\t", " ");
        let common = CommonFields::new(" ", "  ", "\n");
        let doc = generate(FrameworkFields::Aida(&fields), &common, OutputStyle::Bullet);
        assert_eq!(doc, "");
    }

    #[test]
    fn test_aida_structured_scenario() {
        let fields = aida("Hook", "", "", "");
        let common = CommonFields::new("Acme", "", "");
        let doc = generate(FrameworkFields::Aida(&fields), &common, OutputStyle::Structured);
        assert_eq!(doc, "# Acme\n\n## Attention\nHook");
    }

    #[test]
    fn test_aida_structured_full() {
        let fields = aida(" Hook ", "Detail", "Want", "Buy");
        let common = CommonFields::new(" Acme ", " Devs ", " $9 ");
        let doc = generate(FrameworkFields::Aida(&fields), &common, OutputStyle::Structured);
        assert_eq!(
            doc,
            "# Acme\n\n*For Devs*\n\n## Attention\nHook\n\n## Interest\nDetail\n\n\
             ## Desire\nWant\n\n## Action\nBuy\n\n---\n$9"
        );
    }

    #[test]
    fn test_aida_paragraph_joins_name_and_audience() {
        let fields = aida("Hook", "", "Want", "");
        let common = CommonFields::new("Acme", "Devs", "Buy now");
        let doc = generate(FrameworkFields::Aida(&fields), &common, OutputStyle::Paragraph);
        assert_eq!(doc, "**Acme** — *For Devs*\n\nHook\n\nWant\n\nBuy now");
    }

    #[test]
    fn test_paragraph_lead_without_dash_when_one_side_missing() {
        let fields = aida("Hook", "", "", "");
        let only_name = CommonFields::new("Acme", "", "");
        let doc = generate(FrameworkFields::Aida(&fields), &only_name, OutputStyle::Paragraph);
        assert_eq!(doc, "**Acme**\n\nHook");

        let only_audience = CommonFields::new("", "Devs", "");
        let doc = generate(FrameworkFields::Aida(&fields), &only_audience, OutputStyle::Paragraph);
        assert_eq!(doc, "*For Devs*\n\nHook");
    }

    #[test]
    fn test_aida_bullet_has_no_prefixes_and_no_rule() {
        let fields = aida("Hook", "Detail", "", "Buy");
        let common = CommonFields::new("Acme", "Devs", "$9");
        let doc = generate(FrameworkFields::Aida(&fields), &common, OutputStyle::Bullet);
        assert_eq!(doc, "# Acme\n\n*For Devs*\n\n- Hook\n- Detail\n- Buy\n\n$9");
    }

    #[test]
    fn test_pas_bullet_scenario() {
        let fields = pas("P", "", "S");
        let common = CommonFields::new("", "", "Buy now");
        let doc = generate(FrameworkFields::Pas(&fields), &common, OutputStyle::Bullet);
        assert_eq!(doc, "- Problem: P\n- Solution: S\n\nBuy now");
    }

    #[test]
    fn test_pas_structured_headings() {
        let fields = pas("P", "A", "S");
        let doc = generate(
            FrameworkFields::Pas(&fields),
            &CommonFields::default(),
            OutputStyle::Structured,
        );
        assert_eq!(
            doc,
            "## The Problem\nP\n\n## Why It Matters\nA\n\n## The Solution\nS"
        );
    }

    #[test]
    fn test_pas_bullet_agitate_prefix() {
        let fields = pas("", "A", "");
        let doc = generate(
            FrameworkFields::Pas(&fields),
            &CommonFields::default(),
            OutputStyle::Bullet,
        );
        assert_eq!(doc, "- Why it matters: A");
    }

    #[test]
    fn test_name_only_produces_header() {
        let fields = PasFields::default();
        let common = CommonFields::new("Acme", "Devs", "");
        let doc = generate(FrameworkFields::Pas(&fields), &common, OutputStyle::Structured);
        assert_eq!(doc, "# Acme\n\n*For Devs*");
    }

    #[test]
    fn test_cta_only_per_style() {
        let fields = AidaFields::default();
        let common = CommonFields::new("", "", "Buy");
        let structured = generate(FrameworkFields::Aida(&fields), &common, OutputStyle::Structured);
        let paragraph = generate(FrameworkFields::Aida(&fields), &common, OutputStyle::Paragraph);
        let bullet = generate(FrameworkFields::Aida(&fields), &common, OutputStyle::Bullet);
        assert_eq!(structured, "---\nBuy");
        assert_eq!(paragraph, "Buy");
        assert_eq!(bullet, "Buy");
    }

    #[test]
    fn test_fab_paragraph_scenario() {
        let fields = fab(vec![FabItem::new("F", "A", "B")]);
        let doc = generate(
            FrameworkFields::Fab(&fields),
            &CommonFields::default(),
            OutputStyle::Paragraph,
        );
        assert_eq!(doc, "F. A. B.");
    }

    #[test]
    fn test_fab_paragraph_skips_empty_parts() {
        let fields = fab(vec![FabItem::new("F", "", "B"), FabItem::new("", "A", "")]);
        let doc = generate(
            FrameworkFields::Fab(&fields),
            &CommonFields::default(),
            OutputStyle::Paragraph,
        );
        assert_eq!(doc, "F. B.\n\nA.");
    }

    #[test]
    fn test_fab_structured_fallback_uses_list_position() {
        let fields = fab(vec![
            FabItem::new("A", "", ""),
            FabItem::new("", "", ""),
            FabItem::new("", "X", ""),
        ]);
        let doc = generate(
            FrameworkFields::Fab(&fields),
            &CommonFields::default(),
            OutputStyle::Structured,
        );
        assert_eq!(doc, "## A\n\n## Feature 3\n**Advantage:** X");
    }

    #[test]
    fn test_fab_structured_full_item() {
        let fields = fab(vec![FabItem::new(" SSD ", " Fast ", " Save time ")]);
        let common = CommonFields::new("Laptop", "", "$999");
        let doc = generate(FrameworkFields::Fab(&fields), &common, OutputStyle::Structured);
        assert_eq!(
            doc,
            "# Laptop\n\n## SSD\n**Advantage:** Fast\n**Benefit:** Save time\n\n---\n$999"
        );
    }

    #[test]
    fn test_fab_bullet_requires_feature() {
        let fields = fab(vec![
            FabItem::new("SSD", "Fast", "Save time"),
            FabItem::new("", "Orphan advantage", ""),
            FabItem::new("Battery", "", "All day"),
            FabItem::new("Screen", "Bright", ""),
        ]);
        let doc = generate(
            FrameworkFields::Fab(&fields),
            &CommonFields::default(),
            OutputStyle::Bullet,
        );
        assert_eq!(
            doc,
            "- **SSD** — Fast. Save time\n- **Battery**. All day\n- **Screen** — Bright"
        );
    }

    #[test]
    fn test_fab_bullet_without_features_has_no_list() {
        let fields = fab(vec![FabItem::new("", "Only advantage", "")]);
        let common = CommonFields::new("Acme", "", "");
        let doc = generate(FrameworkFields::Fab(&fields), &common, OutputStyle::Bullet);
        assert_eq!(doc, "# Acme");
    }

    #[test]
    fn test_fab_blank_items_produce_nothing() {
        let fields = fab(vec![FabItem::default(), FabItem::new(" ", "", "")]);
        for style in OutputStyle::ALL {
            let doc = generate(FrameworkFields::Fab(&fields), &CommonFields::default(), style);
            assert_eq!(doc, "");
        }
    }

    #[test]
    fn test_every_pair_is_distinct() {
        let a = aida("Hook", "Detail", "Want", "Act");
        let p = pas("Pain", "Worse", "Fix");
        let f = fab(vec![FabItem::new("F", "A", "B")]);
        let common = CommonFields::new("Acme", "Devs", "Buy");

        let mut docs = vec![];
        for style in OutputStyle::ALL {
            for fields in [
                FrameworkFields::Aida(&a),
                FrameworkFields::Pas(&p),
                FrameworkFields::Fab(&f),
            ] {
                docs.push(generate(fields, &common, style));
            }
        }
        let unique: std::collections::HashSet<_> = docs.iter().collect();
        assert_eq!(unique.len(), 9);
    }

    #[test]
    fn test_snapshot_pas_structured() {
        let fields = pas(
            "Invoices pile up.",
            "Cash flow suffers.",
            "**Automate** reminders.",
        );
        let common = CommonFields::new("InvoiceFlow", "Freelancers", "Try it free");
        let doc = generate(FrameworkFields::Pas(&fields), &common, OutputStyle::Structured);
        insta::assert_snapshot!(doc, @r"
# InvoiceFlow

*For Freelancers*

## The Problem
Invoices pile up.

## Why It Matters
Cash flow suffers.

## The Solution
**Automate** reminders.

---
Try it free
");
    }
}
