use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "panelkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flatten one panel image with its bubbles and adjustments.
    Flatten(FlattenArgs),
    /// Print the text layout of a bubble.
    Wrap(WrapArgs),
    /// Export a draft as a plain-text script.
    Script(ScriptArgs),
}

#[derive(Parser, Debug)]
struct FlattenArgs {
    /// Source image (PNG or JPEG).
    #[arg(long)]
    image: PathBuf,

    /// Panel aspect ratio: 1:1, 3:4, 4:3 or 16:9.
    #[arg(long, default_value = "1:1")]
    aspect: panelkit::AspectRatio,

    /// Edit document JSON (adjustments, transform, bubbles).
    #[arg(long)]
    edits: Option<PathBuf>,

    /// Font file for bubble text (overrides PANELKIT_BUBBLE_FONT; system font when neither is set).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output scale percentage (overrides the edit document).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    scale: Option<u8>,

    /// Output path; `.jpg`/`.jpeg` or `.png`.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct WrapArgs {
    /// Bubble text.
    #[arg(long)]
    text: String,

    /// Bubble width in preview pixels.
    #[arg(long, default_value_t = 150.0)]
    width: f64,

    /// Bubble height in preview pixels.
    #[arg(long, default_value_t = 100.0)]
    height: f64,

    /// Font file to measure with; a system bold sans-serif face when absent.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ScriptArgs {
    /// Draft JSON.
    #[arg(long)]
    draft: PathBuf,

    /// Output text file; stdout when absent.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Flatten(args) => cmd_flatten(args),
        Command::Wrap(args) => cmd_wrap(args),
        Command::Script(args) => cmd_script(args),
    }
}

fn cmd_flatten(args: FlattenArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.image)
        .with_context(|| format!("read image '{}'", args.image.display()))?;
    let format = image::guess_format(&bytes)
        .with_context(|| format!("detect image format of '{}'", args.image.display()))?;
    let image_url = panelkit::to_data_uri(format.to_mime_type(), &bytes);

    let panel = panelkit::Panel::new(
        panelkit::PanelId::new("cli"),
        String::new(),
        args.aspect,
    )
    .with_image_url(image_url);

    let mut opts = panelkit::CompositorOpts::from_env();
    if args.font.is_some() {
        opts = opts.with_font_path(args.font.clone());
    }
    let mut compositor = panelkit::Compositor::new(opts.clone())?;

    let mut editor = panelkit::PanelEditor::open_with(&panel, opts.preview_width(), panelkit::NoCapture);
    if let Some(path) = &args.edits {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read edits '{}'", path.display()))?;
        editor.apply_document(panelkit::EditDocument::from_json(&json)?);
    }
    if let Some(scale) = args.scale {
        let mut t = editor.transform();
        t.output_scale = scale;
        editor.set_transform(t);
    }

    let frame = editor.render(&mut compositor)?;
    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("jpg");
    let encoded = panelkit::ExportFormat::from_extension(ext, opts.jpeg_quality())?.encode(&frame)?;

    ensure_parent(&args.out)?;
    std::fs::write(&args.out, encoded)
        .with_context(|| format!("write output '{}'", args.out.display()))?;

    eprintln!("wrote {} ({}x{})", args.out.display(), frame.width, frame.height);
    Ok(())
}

fn cmd_wrap(args: WrapArgs) -> anyhow::Result<()> {
    let mut engine = panelkit::TextEngine::detect(args.font.as_deref())?;
    let bounds = panelkit::BubbleBox::new(0.0, 0.0, args.width, args.height).clamped_to_min();
    let layout = panelkit::BubbleTextLayout::new(bounds, &args.text, &mut engine);

    println!(
        "font {:.2}px  line {:.2}px  max width {:.2}px",
        layout.font_size, layout.line_height, layout.max_width
    );
    for line in &layout.lines {
        println!(
            "{:>8.2} {:>8.2} {:>8.2}  {}",
            line.left(),
            line.center.y,
            line.width,
            line.text
        );
    }
    Ok(())
}

fn cmd_script(args: ScriptArgs) -> anyhow::Result<()> {
    let draft = panelkit::Draft::load(&args.draft)?;
    let text = panelkit::script_text(&draft.story, &draft.panels);
    match &args.out {
        Some(path) => {
            ensure_parent(path)?;
            std::fs::write(path, text).with_context(|| format!("write script '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
