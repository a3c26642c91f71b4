//! Built-in example briefs, one per framework, for a fictional invoicing app

use crate::framework::FrameworkKind;

const EXAMPLE_COMMON: &str = r##"
[common]
product_name = "InvoiceFlow Pro"
target_audience = "Freelancers and small business owners who invoice clients regularly"
price_cta = "Start your free 14-day trial — no credit card required. Plans from $12/month."
"##;

const EXAMPLE_AIDA: &str = r##"
framework = "aida"

[aida]
attention = "Small business owners spend 8+ hours a month chasing unpaid invoices. What if you could get that time back?"
interest = "InvoiceFlow Pro automates your entire invoicing workflow — from creating branded invoices to sending payment reminders and reconciling payments. It integrates with your existing accounting tools in under 5 minutes."
desire = "Join 12,000+ freelancers and small businesses who've cut their accounts receivable time by 73%. Get paid 2x faster with automatic payment links, late-fee scheduling, and real-time cash flow dashboards."
action = "Start your free 14-day trial — no credit card required. See why Capterra rated us #1 in invoicing software for small business."
"##;

const EXAMPLE_PAS: &str = r##"
framework = "pas"

[pas]
problem = "You started a business to do work you love — not to spend your evenings chasing invoices, copy-pasting spreadsheet data, and wondering when clients will actually pay."
agitate = "Every unpaid invoice is money stuck in limbo. Late payments snowball into cash flow gaps, which means stress about making payroll, delaying your own growth, and losing sleep over money that's technically yours. Manual invoicing tools make it worse — they're slow, error-prone, and give you zero visibility into what's actually outstanding."
solution = "InvoiceFlow Pro puts your invoicing on autopilot. Create professional invoices in 60 seconds, send automatic payment reminders, and accept payments online. Real-time dashboards show exactly what's paid, pending, and overdue — so you always know where your cash stands."
"##;

const EXAMPLE_FAB: &str = r##"
framework = "fab"

[[fab]]
feature = "One-click invoice generation with smart templates"
advantage = "Creates branded, itemized invoices in under 60 seconds — no design skills needed"
benefit = "You spend less time on paperwork and more time on billable work that grows your business"

[[fab]]
feature = "Automated payment reminders with escalation scheduling"
advantage = "Sends polite reminders at intervals you set, with optional late-fee calculations"
benefit = "Get paid 2x faster without the awkwardness of personally chasing clients for money"

[[fab]]
feature = "Real-time cash flow dashboard"
advantage = "Shows paid, pending, and overdue invoices at a glance with weekly trend charts"
benefit = "Make confident business decisions because you always know exactly where your money stands"
"##;

/// TOML source of the example brief for `kind`
pub(super) fn source(kind: FrameworkKind) -> String {
    let framework = match kind {
        FrameworkKind::Aida => EXAMPLE_AIDA,
        FrameworkKind::Pas => EXAMPLE_PAS,
        FrameworkKind::Fab => EXAMPLE_FAB,
    };
    // Root keys must precede any table header
    format!("{}{}", framework, EXAMPLE_COMMON)
}
