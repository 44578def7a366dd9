use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;

/// Names the default face when neither `--font` nor the deck provides one.
const FONT_ENV: &str = "SLIDEWRIGHT_FONT";

#[derive(Parser, Debug)]
#[command(name = "slidewright", version)]
struct Cli {
    /// Log at DEBUG instead of INFO.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every slide of a deck into a directory.
    Render(RenderArgs),
    /// Render a single slide as a PNG.
    Slide(SlideArgs),
    /// Print the resolved deck as JSON.
    Deck(DeckArgs),
}

#[derive(Args, Debug)]
struct DeckArgs {
    /// Deck JSON. The built-in deck is used when omitted.
    #[arg(long)]
    deck: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TextArgs {
    /// Font file, optionally registered under a face name (`NAME=PATH`). Repeatable.
    #[arg(long = "font", value_name = "[NAME=]PATH")]
    fonts: Vec<String>,

    /// Captured program output for transcript windows.
    #[arg(long)]
    transcript: Option<PathBuf>,

    /// Draw text as boxes with fixed metrics instead of shaping a font.
    #[arg(long)]
    draft: bool,

    /// Print diagnostics about font resolution (family name + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    deck: DeckArgs,

    #[command(flatten)]
    text: TextArgs,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SlideArgs {
    #[command(flatten)]
    deck: DeckArgs,

    #[command(flatten)]
    text: TextArgs,

    /// Slide index (0-based).
    #[arg(long)]
    index: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Slide(args) => cmd_slide(args),
        Command::Deck(args) => cmd_deck(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_deck(args: &DeckArgs) -> anyhow::Result<slidewright::Deck> {
    let deck = match &args.deck {
        Some(path) => slidewright::Deck::from_path(path)
            .with_context(|| format!("load deck '{}'", path.display()))?,
        None => slidewright::Deck::builtin().context("parse built-in deck")?,
    };
    deck.validate()?;
    Ok(deck)
}

/// CLI fonts first, then the deck's font table, then the environment fallback.
fn build_registry(
    deck: &slidewright::Deck,
    text: &TextArgs,
) -> anyhow::Result<slidewright::FontRegistry> {
    let mut registry = slidewright::FontRegistry::new();
    for arg in &text.fonts {
        let (name, path) = slidewright::parse_font_arg(arg)?;
        registry.register_file(name, &path)?;
    }
    for (name, path) in &deck.fonts {
        if !registry.contains(name) {
            registry.register_file(name.as_str(), path)?;
        }
    }
    if !registry.contains(slidewright::DEFAULT_FACE)
        && let Some(path) = std::env::var_os(FONT_ENV)
    {
        registry.register_file(slidewright::DEFAULT_FACE, Path::new(&path))?;
    }
    Ok(registry)
}

fn make_painter(
    deck: &slidewright::Deck,
    text: &TextArgs,
) -> anyhow::Result<Box<dyn slidewright::TextPainter>> {
    let registry = build_registry(deck, text)?;
    if text.draft {
        if text.dump_fonts {
            dump_font_diagnostics(&registry, None);
        }
        return Ok(Box::new(slidewright::DraftText::default()));
    }

    deck.validate_fonts(&registry).with_context(|| {
        format!("pass --font PATH or set {FONT_ENV} (or use --draft for box previews)")
    })?;
    let engine = slidewright::ParleyTextEngine::new(&registry)?;
    if text.dump_fonts {
        dump_font_diagnostics(&registry, Some(&engine));
    }
    Ok(Box::new(engine))
}

fn compose_options(text: &TextArgs) -> slidewright::ComposeOptions {
    slidewright::ComposeOptions {
        transcript: text.transcript.clone(),
        ..Default::default()
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let deck = load_deck(&args.deck)?;
    let mut painter = make_painter(&deck, &args.text)?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let report = slidewright::render_deck(
        &deck,
        painter.as_mut(),
        &args.out,
        &compose_options(&args.text),
    )?;

    for path in &report.written {
        eprintln!("wrote {}", path.display());
    }
    if report.is_success() {
        return Ok(());
    }
    for failure in &report.failed {
        eprintln!("failed {} (slide {}): {}", failure.file, failure.index, failure.error);
    }
    anyhow::bail!(
        "{} of {} slides failed",
        report.failed.len(),
        deck.slides.len()
    )
}

fn cmd_slide(args: SlideArgs) -> anyhow::Result<()> {
    let deck = load_deck(&args.deck)?;
    let mut painter = make_painter(&deck, &args.text)?;

    slidewright::render_slide(
        &deck,
        args.index,
        painter.as_mut(),
        &args.out,
        &compose_options(&args.text),
    )
    .with_context(|| format!("render slide {}", args.index))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_deck(args: DeckArgs) -> anyhow::Result<()> {
    let deck = load_deck(&args)?;
    let json = serde_json::to_string_pretty(&deck).context("serialize deck")?;
    println!("{json}");
    Ok(())
}

fn dump_font_diagnostics(
    registry: &slidewright::FontRegistry,
    engine: Option<&slidewright::ParleyTextEngine>,
) {
    let families = engine.map(|e| e.faces()).unwrap_or_default();
    eprintln!("text font diagnostics:");
    for (name, source) in registry.iter() {
        let family = families
            .iter()
            .find(|f| f.name == name)
            .map_or("(not shaped)", |f| f.family.as_str());
        eprintln!("  {name}:");
        eprintln!("    font_source: {}", source.origin);
        eprintln!("    family:      {family}");
        eprintln!("    sha256:      {}", sha256_hex(&source.bytes));
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    digest
        .iter()
        .fold(String::with_capacity(digest.len() * 2), |mut out, b| {
            let _ = write!(out, "{b:02x}");
            out
        })
}
