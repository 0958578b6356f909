use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use shelfpress::{BookSlots, Resolution, ShelfRequest};

#[derive(Parser, Debug)]
#[command(name = "shelfpress", version)]
struct Cli {
    /// Canvas resolution: 1280x720, 1600x900, 1920x1080, or 2560x1440.
    /// Unrecognized values fall back to 1920x1080.
    #[arg(long, default_value = "1920x1080")]
    resolution: String,

    /// Background image path.
    #[arg(long)]
    background: PathBuf,

    /// Book cover image path; repeat up to 8 times, placed in order from the
    /// bottom-right cell.
    #[arg(long = "book", required = true)]
    books: Vec<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let background = std::fs::read(&cli.background)
        .with_context(|| format!("read background '{}'", cli.background.display()))?;
    let mut books = Vec::with_capacity(cli.books.len());
    for path in &cli.books {
        books.push(
            std::fs::read(path).with_context(|| format!("read book cover '{}'", path.display()))?,
        );
    }

    let request = ShelfRequest {
        resolution: Resolution::from_param(&cli.resolution),
        background: Some(background),
        books: BookSlots::try_from_vec(books)?,
    };
    let png = request.compose_png()?;

    if let Some(parent) = cli.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&cli.out, png).with_context(|| format!("write png '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}
