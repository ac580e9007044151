use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blendfunc", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite one image over another and write a PNG.
    Blend(BlendArgs),
    /// Work with a JSON gallery of images.
    #[command(subcommand)]
    Gallery(GalleryCommand),
}

#[derive(Subcommand, Debug)]
enum GalleryCommand {
    /// Print the gallery titles with their indices.
    List(GalleryListArgs),
    /// Composite two gallery entries and write a PNG.
    Blend(GalleryBlendArgs),
}

#[derive(Args, Debug)]
struct ThreadingArgs {
    /// Composite rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Rows per parallel task.
    #[arg(long, default_value_t = 16)]
    rows_per_task: usize,
}

impl ThreadingArgs {
    fn to_threading(&self) -> blendfunc::CompositeThreading {
        blendfunc::CompositeThreading {
            parallel: self.parallel,
            threads: self.threads,
            rows_per_task: self.rows_per_task,
        }
    }
}

#[derive(Args, Debug)]
struct BlendArgs {
    /// Image painted on top.
    #[arg(long)]
    top: PathBuf,

    /// Image underneath.
    #[arg(long)]
    bottom: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    threading: ThreadingArgs,
}

#[derive(Args, Debug)]
struct GalleryListArgs {
    /// Gallery manifest JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Args, Debug)]
struct GalleryBlendArgs {
    /// Gallery manifest JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Index of the entry painted on top (0-based).
    #[arg(long)]
    top: Option<usize>,

    /// Index of the entry underneath (0-based).
    #[arg(long)]
    bottom: Option<usize>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    threading: ThreadingArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Blend(args) => cmd_blend(args),
        Command::Gallery(GalleryCommand::List(args)) => cmd_gallery_list(args),
        Command::Gallery(GalleryCommand::Blend(args)) => cmd_gallery_blend(args),
    }
}

fn cmd_blend(args: BlendArgs) -> anyhow::Result<()> {
    let top = blendfunc::load_image(&args.top)?;
    let bottom = blendfunc::load_image(&args.bottom)?;
    let out = blendfunc::composite_over_with(&top, &bottom, &args.threading.to_threading())
        .with_context(|| {
            format!(
                "composite '{}' over '{}'",
                args.top.display(),
                args.bottom.display()
            )
        })?;
    blendfunc::save_png(&out, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_gallery_list(args: GalleryListArgs) -> anyhow::Result<()> {
    let gallery = blendfunc::Gallery::from_path(&args.in_path)?;
    for (idx, title) in gallery.titles().into_iter().enumerate() {
        let path = gallery.resolve(idx)?;
        println!("{idx}\t{title}\t{}", path.display());
    }
    Ok(())
}

fn cmd_gallery_blend(args: GalleryBlendArgs) -> anyhow::Result<()> {
    let gallery = blendfunc::Gallery::from_path(&args.in_path)?;
    let defaults = blendfunc::GallerySelection::default();
    let selection = blendfunc::GallerySelection {
        top: args.top.unwrap_or(defaults.top),
        bottom: args.bottom.unwrap_or(defaults.bottom),
    };
    let out = gallery.composite(selection, &args.threading.to_threading())?;
    blendfunc::save_png(&out, &args.out)?;

    let titles = gallery.titles();
    eprintln!(
        "wrote {} ({} over {})",
        args.out.display(),
        titles[selection.top],
        titles[selection.bottom]
    );
    Ok(())
}
