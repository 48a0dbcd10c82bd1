use std::{
    fs::File,
    io::BufReader,
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use facegif::{CategoryKind, ComponentCatalog, DEFAULT_FRAME_DURATION_MS};

mod server;

#[derive(Parser, Debug)]
#[command(name = "facegif", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render seeds into an animated GIF.
    Render(RenderArgs),
    /// Render a single seed as a PNG.
    Frame(FrameArgs),
    /// Print the face chosen for a seed.
    Describe(DescribeArgs),
    /// Print the catalog's categories and combination count.
    Catalog(CatalogArgs),
    /// Serve `/face.gif` over HTTP.
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Catalog JSON to use instead of the built-in palette.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Comma-separated seeds, one frame each.
    #[arg(long)]
    seeds: String,

    /// Milliseconds each frame is shown.
    #[arg(long, default_value_t = i64::from(DEFAULT_FRAME_DURATION_MS), allow_negative_numbers = true)]
    duration: i64,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    catalog: CatalogArgs,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Seed to render.
    #[arg(long)]
    seed: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    catalog: CatalogArgs,
}

#[derive(Parser, Debug)]
struct DescribeArgs {
    /// Seed to describe.
    #[arg(long)]
    seed: String,

    #[command(flatten)]
    catalog: CatalogArgs,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    #[command(flatten)]
    catalog: CatalogArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "facegif=info,tower_http=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Describe(args) => cmd_describe(args),
        Command::Catalog(args) => cmd_catalog(args),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn load_catalog(args: &CatalogArgs) -> anyhow::Result<ComponentCatalog> {
    let Some(path) = &args.catalog else {
        return Ok(ComponentCatalog::builtin()?);
    };
    let f = File::open(path).with_context(|| format!("open catalog '{}'", path.display()))?;
    let catalog = ComponentCatalog::from_json_reader(BufReader::new(f))
        .with_context(|| format!("load catalog '{}'", path.display()))?;
    Ok(catalog)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    let seeds = facegif::parse_seed_list(&args.seeds)?;
    let bytes = facegif::animate(&seeds, args.duration, &catalog)?;

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, &bytes)
        .with_context(|| format!("write gif '{}'", args.out.display()))?;

    eprintln!("wrote {} ({} frames)", args.out.display(), seeds.len());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    let descriptor = facegif::map(&args.seed, &catalog);
    let frame = facegif::render_frame(&descriptor, &catalog)?;

    ensure_parent_dir(&args.out)?;
    frame
        .into_rgba_image()?
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_describe(args: DescribeArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    let descriptor = facegif::map(&args.seed, &catalog);
    let components = descriptor
        .resolve(&catalog)?
        .into_iter()
        .map(|s| serde_json::json!({ "category": s.category.name, "option": s.option.id }))
        .collect::<Vec<_>>();

    let out = serde_json::json!({
        "seed": args.seed,
        "indices": descriptor,
        "components": components,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(&args)?;
    let canvas = catalog.canvas();
    println!("canvas: {}x{}", canvas.width, canvas.height);
    for (z, category) in catalog.categories().iter().enumerate() {
        let kind = match category.kind {
            CategoryKind::Layer => "layer",
            CategoryKind::Paint => "paint",
        };
        let ids = category
            .options
            .iter()
            .map(|o| o.id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{z}: {} ({kind}, {} options): {ids}",
            category.name,
            category.len()
        );
    }
    println!("combinations: {}", catalog.combination_count());
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let catalog = Arc::new(load_catalog(&args.catalog)?);
    let addr = SocketAddr::new(args.host, args.port);

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;
    rt.block_on(server::serve(addr, catalog))
}
