use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "termfolio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the site into a directory.
    Build(BuildArgs),
    /// Validate content and composition without writing anything.
    Check(ContentArgs),
    /// Write the built-in content tables as JSON.
    DumpContent(DumpArgs),
    /// Print the animation preset catalogue as JSON.
    Presets,
    /// Replay scroll gestures against the composed page and print reveal events.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ContentArgs {
    /// Content JSON replacing the built-in tables.
    #[arg(long)]
    content: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    content: ContentArgs,

    /// Build options JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Document title.
    #[arg(long)]
    title: Option<String>,

    /// Embed stylesheet and script in index.html.
    #[arg(long)]
    inline: bool,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    content: ContentArgs,

    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1440)]
    viewport_width: u32,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 900)]
    viewport_height: u32,

    /// Gesture displacements in pixels, applied in order (negative scrolls up).
    #[arg(long = "scroll", allow_negative_numbers = true, num_args = 1..)]
    scroll: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Check(args) => cmd_check(args),
        Command::DumpContent(args) => cmd_dump_content(args),
        Command::Presets => cmd_presets(),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn load_content(args: &ContentArgs) -> anyhow::Result<termfolio::Content> {
    match &args.content {
        Some(path) => termfolio::Content::from_path(path)
            .with_context(|| format!("load content '{}'", path.display())),
        None => Ok(termfolio::builtin_content()),
    }
}

fn read_opts(path: &Path) -> anyhow::Result<termfolio::BuildOpts> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("open build options '{}'", path.display()))?;
    serde_json::from_str(&s).with_context(|| "parse build options JSON")
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let content = load_content(&args.content)?;
    let mut opts = match &args.config {
        Some(path) => read_opts(path)?,
        None => termfolio::BuildOpts::default(),
    };
    if args.title.is_some() {
        opts.title = args.title;
    }
    if args.inline {
        opts.inline_assets = true;
    }

    let bundle = termfolio::build_site(&content, &opts)?;
    bundle.write_to(&args.out)?;

    for f in &bundle.files {
        eprintln!("wrote {}", args.out.join(&f.path).display());
    }
    Ok(())
}

fn cmd_check(args: ContentArgs) -> anyhow::Result<()> {
    let content = load_content(&args)?;
    let site = termfolio::compose(&content)?;
    eprintln!(
        "ok: {} sections, {} cyber categories, {} cyber projects, {} dev categories, {} dev projects, {} social links",
        site.section_ids().len(),
        content.cyber_skills.len(),
        content.cyber_projects.len(),
        content.dev_skills.len(),
        content.dev_projects.len(),
        content.social.len(),
    );
    Ok(())
}

fn cmd_dump_content(args: DumpArgs) -> anyhow::Result<()> {
    let json = termfolio::builtin_content().to_json_pretty()?;
    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&path, json + "\n")
                .with_context(|| format!("write content '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&termfolio::catalogue())?;
    println!("{json}");
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let content = load_content(&args.content)?;
    let site = termfolio::compose(&content)?;
    let viewport = termfolio::Viewport::new(args.viewport_width, args.viewport_height)?;
    let mut session = termfolio::ScrollSession::new(&site, viewport)?;

    for delta in &args.scroll {
        session.scroll(*delta);
    }

    for event in session.events() {
        println!("{}", serde_json::to_string(event)?);
    }
    eprintln!(
        "settled on '{}' at offset {}",
        session.current_section(),
        session.offset()
    );
    Ok(())
}
