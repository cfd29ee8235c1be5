use anyhow::{Context, Result};
use clap::Parser;
use pdf_drawer::{PageSelection, PdfDrawer};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "pdfdrawer",
    about = "Add rectangles, lines and text to an existing PDF",
    version,
    author
)]
struct Cli {
    /// The PDF file to which the drawings should be added
    #[arg(short = 'i', long = "input-pdf", alias = "input_pdf")]
    input_pdf: PathBuf,

    /// The file that contains the drawing instructions
    #[arg(short = 'j', long = "instruction-file", alias = "instruction_file")]
    instruction_file: PathBuf,

    /// Where the PDF with the drawings added should be written
    #[arg(short = 'o', long = "output-pdf", alias = "output_pdf")]
    output_pdf: PathBuf,

    /// Crop a page after drawing (e.g., "1:0,0,300,200"); may be repeated
    #[arg(long = "crop", value_name = "PAGE:X0,Y0,X1,Y1", value_parser = parse_crop)]
    crops: Vec<CropSpec>,

    /// Keep only these pages, in this order (e.g., "3,1" or "1-3,5")
    #[arg(long, value_name = "PAGES")]
    select: Option<PageSelection>,

    /// Log every drawing operation
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct CropSpec {
    page: u32,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

fn parse_crop(s: &str) -> Result<CropSpec, String> {
    let (page, coords) = s
        .split_once(':')
        .ok_or_else(|| format!("expected PAGE:X0,Y0,X1,Y1, got '{s}'"))?;
    let page = page
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid page number '{page}'"))?;

    let values = coords
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| format!("invalid coordinate '{v}'"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        &[x0, y0, x1, y1] => Ok(CropSpec {
            page,
            x0,
            y0,
            x1,
            y1,
        }),
        _ => Err(format!("expected 4 coordinates, got {}", values.len())),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut drawer = PdfDrawer::open(&cli.input_pdf)
        .with_context(|| format!("Failed to open PDF '{}'", cli.input_pdf.display()))?;

    let summary = drawer
        .process_instruction_file(&cli.instruction_file)
        .with_context(|| {
            format!(
                "Failed to process instruction file '{}'",
                cli.instruction_file.display()
            )
        })?;

    for crop in &cli.crops {
        drawer
            .crop_page(crop.page, crop.x0, crop.y0, crop.x1, crop.y1)
            .with_context(|| format!("Failed to crop page {}", crop.page))?;
    }

    if let Some(selection) = &cli.select {
        let pages = selection
            .page_numbers(drawer.page_count())
            .context("Invalid page selection")?;
        drawer
            .select_pages(&pages)
            .context("Failed to select pages")?;
    }

    drawer
        .save(&cli.output_pdf)
        .with_context(|| format!("Failed to write PDF '{}'", cli.output_pdf.display()))?;

    println!(
        "Drawings added successfully! {} instructions applied, saved to {}",
        summary.applied,
        cli.output_pdf.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}
