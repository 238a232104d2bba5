use anyhow::{Context, Result, bail};
use booklet_impose::{BlankSheetPolicy, BookletError, BookletOptions, ColorMode, PaperSize};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdfbooklet",
    about = "Impose a PDF as a saddle-stitched booklet",
    version
)]
struct Cli {
    /// Source PDF file
    source: PathBuf,

    /// Output PDF file
    #[arg(required_unless_present = "stats_only")]
    output: Option<PathBuf>,

    /// Rasterization resolution in dots per inch
    #[arg(long)]
    dpi: Option<u32>,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Custom paper size in millimetres, as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_custom_paper, conflicts_with = "paper")]
    paper_mm: Option<(f32, f32)>,

    /// Raster color mode
    #[arg(long, value_enum)]
    color: Option<ColorArg>,

    /// Sheets nested into each folded signature
    #[arg(long)]
    sheets_per_signature: Option<usize>,

    /// First page to include (1-based)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    first_page: Option<u32>,

    /// Last page to include (1-based, inclusive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    last_page: Option<u32>,

    /// Turn back-side pages counter-clockwise like the front
    #[arg(long)]
    no_rotate: bool,

    /// Leave sheet sides with no pages out of the output
    #[arg(long)]
    skip_blank_sheets: bool,

    /// Load options from a JSON file; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// More log output (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Gray,
    Rgb,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Gray => Self::Gray,
            ColorArg::Rgb => Self::Rgb,
        }
    }
}

/// Log level for the given `-v` count, or errors only with `-q`
fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn parse_custom_paper(value: &str) -> Result<(f32, f32), String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", value))?;
    let width: f32 = w.trim().parse().map_err(|e| format!("bad width: {}", e))?;
    let height: f32 = h.trim().parse().map_err(|e| format!("bad height: {}", e))?;
    Ok((width, height))
}

impl Cli {
    /// Apply command-line flags on top of `options`
    fn apply_to(&self, options: &mut BookletOptions) {
        if let Some(dpi) = self.dpi {
            options.dpi = dpi;
        }
        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some((width_mm, height_mm)) = self.paper_mm {
            options.paper_size = PaperSize::Custom {
                width_mm,
                height_mm,
            };
        }
        if let Some(color) = self.color {
            options.color_mode = color.into();
        }
        if let Some(sheets) = self.sheets_per_signature {
            options.sheets_per_signature = sheets;
        }
        // 1-based inclusive on the command line, 0-based exclusive inside
        if let Some(first) = self.first_page {
            options.first_page = Some(first as usize - 1);
        }
        if let Some(last) = self.last_page {
            options.last_page = Some(last as usize);
        }
        if self.no_rotate {
            options.rotate_back = false;
        }
        if self.skip_blank_sheets {
            options.blank_sheets = BlankSheetPolicy::Skip;
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(level_for(cli.verbose, cli.quiet))
        .format_timestamp_secs()
        .init();

    if let Err(e) = run(cli).await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut options = match &cli.config {
        Some(path) => BookletOptions::load(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BookletOptions::default(),
    };
    cli.apply_to(&mut options);
    options.validate()?;

    if let Some(path) = &cli.save_config {
        options.save(path).await?;
        log::info!("Options saved to {}", path.display());
    }

    let total_pages = booklet_impose::read_page_count(&cli.source)
        .await
        .with_context(|| format!("Failed to read {}", cli.source.display()))?;
    let range = options.page_range(total_pages);
    let stats = booklet_impose::calculate_statistics(&range, &options)?;

    println!("Booklet Statistics:");
    println!("  Source pages: {} of {}", stats.source_pages, total_pages);
    println!("  Signatures: {}", stats.signatures);
    println!("  Output sheets: {}", stats.sheets);
    println!("  Output pages: {}", stats.output_pages);
    println!("  Blank slots: {}", stats.blank_slots);

    if cli.stats_only {
        return Ok(());
    }
    let Some(output) = cli.output else {
        bail!("No output file given");
    };

    let job = booklet_impose::spawn_booklet(&cli.source, &output, &options);

    let mut progress = job.progress();
    let watcher = tokio::spawn(async move {
        while let Some(update) = progress.changed().await {
            if update.total_sheets > 0 {
                log::info!(
                    "Sheet {}/{} ({:.0}%)",
                    update.completed_sheets,
                    update.total_sheets,
                    update.fraction() * 100.0
                );
            }
        }
    });

    let canceller = job.progress();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Interrupted, stopping after the current sheet (Ctrl-C again to abort)");
            canceller.cancel();
        }
        // The handler stays installed, so a second interrupt has to exit by hand
        if tokio::signal::ctrl_c().await.is_ok() {
            log::error!("Aborted");
            std::process::exit(130);
        }
    });

    let result = job.wait().await;
    interrupt.abort();
    let _ = watcher.await;

    match result {
        Ok(report) => {
            let summary = report.summary;
            if summary.pages_failed > 0 || summary.pages_degenerate > 0 {
                log::warn!(
                    "{} page(s) could not be rendered and were left blank",
                    summary.pages_failed + summary.pages_degenerate
                );
            }
            println!(
                "Booklet → {} ({} pages)",
                report.output_path.display(),
                report.output_pages
            );
            Ok(())
        }
        Err(BookletError::Cancelled) => bail!("Cancelled; nothing was written"),
        Err(e) => Err(e.into()),
    }
}
