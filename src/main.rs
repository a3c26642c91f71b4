//! Copy Builder CLI
//!
//! Usage:
//!   copy-builder [OPTIONS] [FILE]
//!
//! Options:
//!   -f, --framework <NAME>   Framework to generate (aida, pas, fab)
//!   -s, --style <NAME>       Output style (structured, paragraph, bullet)
//!   -o, --format <FORMAT>    Output format (markup, html, json)
//!   -x, --example <NAME>     Use the built-in example brief for a framework
//!   --stats                  Print word and character counts to stderr
//!   --frameworks             Show the framework guide
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

use copy_builder::{
    render_brief, Brief, DocumentStats, FrameworkKind, OutputFormat, OutputStyle, RenderConfig,
};

#[derive(Parser)]
#[command(name = "copy-builder")]
#[command(about = "Product descriptions from AIDA, PAS and FAB copywriting frameworks")]
struct Cli {
    /// Brief file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Framework to generate, overriding the brief
    #[arg(short, long)]
    framework: Option<FrameworkKind>,

    /// Output style, overriding the brief
    #[arg(short, long)]
    style: Option<OutputStyle>,

    /// Output format
    #[arg(short = 'o', long, default_value = "html")]
    format: OutputFormat,

    /// Use the built-in example brief for a framework
    #[arg(short = 'x', long, conflicts_with = "input")]
    example: Option<FrameworkKind>,

    /// Print word and character counts to stderr
    #[arg(long)]
    stats: bool,

    /// Show the framework guide
    #[arg(long)]
    frameworks: bool,

    /// Debug mode: log the rendered blocks
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();

    if cli.frameworks {
        print_frameworks();
        return;
    }

    // If no brief is given and stdin is a terminal (interactive), show intro help
    if cli.example.is_none() && cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let mut brief = match cli.example {
        Some(kind) => Brief::example(kind),
        None => load_brief(&cli),
    };
    if let Some(framework) = cli.framework {
        brief = brief.with_framework(framework);
    }
    if let Some(style) = cli.style {
        brief = brief.with_style(style);
    }
    debug!(framework = %brief.framework, style = %brief.style, "loaded brief");

    if cli.stats {
        let stats = DocumentStats::of(&brief.generate());
        eprintln!("{} words, {} characters", stats.words, stats.characters);
    }

    let config = RenderConfig::new()
        .with_format(cli.format)
        .with_debug(cli.debug);
    match render_brief(&brief, &config) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Read and parse the brief named on the command line, or stdin
fn load_brief(cli: &Cli) -> Brief {
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match source.parse::<Brief>() {
        Ok(brief) => brief,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Copy Builder - product descriptions from classic copywriting frameworks

USAGE:
    copy-builder [OPTIONS] [FILE]
    cat brief.toml | copy-builder

OPTIONS:
    -f, --framework    Framework to generate: aida, pas, fab
    -s, --style        Output style: structured, paragraph, bullet
    -o, --format       Output format: markup, html (default), json
    -x, --example      Use the built-in example brief for a framework
    --stats            Print word and character counts to stderr
    --frameworks       Show the framework guide
    -d, --debug        Log the rendered blocks
    -h, --help         Print help

QUICK START:
    copy-builder --example pas --style bullet --format markup

A brief is a TOML file:

    framework = "aida"
    style = "structured"

    [common]
    product_name = "InvoiceFlow Pro"
    target_audience = "Freelancers"
    price_cta = "Start your free trial"

    [aida]
    attention = "Stop chasing unpaid invoices."

Run --frameworks for every framework's fields."#
    );
}

fn print_frameworks() {
    println!("COPYWRITING FRAMEWORKS");
    println!("======================");
    for kind in FrameworkKind::ALL {
        println!();
        println!("{} ({})", kind.name(), kind.expansion());
        println!("{}", "-".repeat(kind.name().len() + kind.expansion().len() + 3));
        println!("{}", kind.explainer());
        println!();
        println!("Best for: {}", kind.best_for());
        println!();
        if kind == FrameworkKind::Fab {
            println!("Fields, repeated per [[fab]] item:");
        } else {
            println!("Fields, under [{}]:", kind.key());
        }
        for field in kind.fields() {
            println!("    {:<12} {}", field.key, field.help);
        }
    }
    println!();
    println!("STYLES");
    println!("------");
    for style in OutputStyle::ALL {
        println!("    {:<12} {}", style.key(), style.label());
    }
}
