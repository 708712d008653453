use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use press_async_runtime::{JobId, PlanCommand, PlanUpdate, spawn_worker};
use press_impose::{
    BindingType, Dimensions, Gutters, ImpositionResult, ImpositionStatistics, JobConfig, Margins,
    PrinterMarks, SheetLayout, SheetSide, Side,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prst", about = "Press-sheet imposition planner", version)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tile one design across the sheet (cards, labels)
    StepRepeat {
        #[command(flatten)]
        geometry: GeometryArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Saddle-stitched booklet, 4 pages per folded sheet
    Saddle {
        /// Number of logical pages
        #[arg(short = 'n', long)]
        pages: usize,

        #[command(flatten)]
        geometry: GeometryArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Perfect-bound book in gathered signatures
    Perfect {
        /// Number of logical pages
        #[arg(short = 'n', long)]
        pages: usize,

        /// Pages per signature (even, at least 4)
        #[arg(long, default_value = "16")]
        signature_size: usize,

        #[command(flatten)]
        geometry: GeometryArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the outside-in page order of one signature
    Sequence {
        /// Pages in the signature
        #[arg(long)]
        size: usize,

        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Plan a job saved as JSON
    Plan {
        /// Job configuration file
        #[arg(short, long)]
        config: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Plan several saved jobs concurrently and summarize them
    Batch {
        /// Job configuration files
        #[arg(required = true, num_args = 1..)]
        configs: Vec<PathBuf>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct GeometryArgs {
    /// Job name
    #[arg(long, default_value = "Untitled")]
    name: String,

    /// Page (finished piece) width in inches
    #[arg(long)]
    page_width: f64,

    /// Page (finished piece) height in inches
    #[arg(long)]
    page_height: f64,

    /// Named sheet size
    #[arg(long, default_value = "press12x18", value_enum)]
    sheet: SheetArg,

    /// Sheet orientation
    #[arg(long, default_value = "portrait", value_enum)]
    orientation: OrientationArg,

    /// Explicit sheet width in inches (overrides --sheet)
    #[arg(long, requires = "sheet_height")]
    sheet_width: Option<f64>,

    /// Explicit sheet height in inches (overrides --sheet)
    #[arg(long, requires = "sheet_width")]
    sheet_height: Option<f64>,

    /// Sheet margin in inches (uniform on all sides)
    #[arg(long, default_value = "0.5")]
    margin: f64,

    /// Gutter between pages in inches
    #[arg(long, default_value = "0.125")]
    gutter: f64,
}

#[derive(Args)]
struct OutputArgs {
    /// Print the full layout as JSON
    #[arg(long)]
    json: bool,

    /// Write a PDF proof of every sheet side
    #[arg(long)]
    proof: Option<PathBuf>,

    /// Add crop marks to the proof
    #[arg(long)]
    crop_marks: bool,

    /// Add registration marks to the proof
    #[arg(long)]
    registration_marks: bool,

    /// Draw a one-inch reference grid on the proof
    #[arg(long)]
    grid: bool,

    /// Show statistics only, don't list placements
    #[arg(long)]
    stats_only: bool,

    /// Save the job configuration as JSON
    #[arg(long)]
    save_config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SheetArg {
    Letter,
    Legal,
    Tabloid,
    #[value(name = "press12x18")]
    Press12x18,
    #[value(name = "press13x19")]
    Press13x19,
    #[value(name = "press25x38")]
    Press25x38,
    #[value(name = "press26x40")]
    Press26x40,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<SheetArg> for press_impose::SheetPreset {
    fn from(arg: SheetArg) -> Self {
        match arg {
            SheetArg::Letter => Self::Letter,
            SheetArg::Legal => Self::Legal,
            SheetArg::Tabloid => Self::Tabloid,
            SheetArg::Press12x18 => Self::Press12x18,
            SheetArg::Press13x19 => Self::Press13x19,
            SheetArg::Press25x38 => Self::Press25x38,
            SheetArg::Press26x40 => Self::Press26x40,
        }
    }
}

impl From<OrientationArg> for press_impose::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl GeometryArgs {
    fn into_config(self, binding: BindingType, page_count: usize) -> JobConfig {
        let sheet_size = match (self.sheet_width, self.sheet_height) {
            (Some(width), Some(height)) => Dimensions::new(width, height),
            _ => {
                let preset = press_impose::SheetPreset::from(self.sheet);
                log::debug!("Using {} sheet", preset.name());
                preset.dimensions_with_orientation(self.orientation.into())
            }
        };
        JobConfig {
            page_size: Dimensions::new(self.page_width, self.page_height),
            sheet_size,
            margins: Margins::uniform(self.margin),
            gutters: Gutters::uniform(self.gutter),
            ..JobConfig::new(self.name, binding, page_count)
        }
    }
}

impl OutputArgs {
    /// Mark flags add to whatever the job already asks for
    fn apply_marks(&self, marks: PrinterMarks) -> PrinterMarks {
        PrinterMarks {
            crop_marks: marks.crop_marks || self.crop_marks,
            registration_marks: marks.registration_marks || self.registration_marks,
            reference_grid: marks.reference_grid || self.grid,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::StepRepeat { geometry, output } => {
            run_job(geometry.into_config(BindingType::StepAndRepeat, 1), output).await?;
        }

        Commands::Saddle {
            pages,
            geometry,
            output,
        } => {
            run_job(geometry.into_config(BindingType::SaddleStitch, pages), output).await?;
        }

        Commands::Perfect {
            pages,
            signature_size,
            geometry,
            output,
        } => {
            let mut config = geometry.into_config(BindingType::PerfectBinding, pages);
            config.signature_size = signature_size;
            run_job(config, output).await?;
        }

        Commands::Sequence { size, json } => {
            let sequence = press_impose::generate_signature_sequence(size)?;
            if json {
                println!("{}", serde_json::to_string(&sequence)?);
            } else {
                let pairs: Vec<String> = sequence
                    .chunks(2)
                    .map(|pair| format!("{:>3} {:<3}", pair[0], pair[1]))
                    .collect();
                println!("{}", pairs.join("|"));
            }
        }

        Commands::Plan { config, output } => {
            let job = JobConfig::load(&config)
                .await
                .with_context(|| format!("Failed to load {}", config.display()))?;
            run_job(job, output).await?;
        }

        Commands::Batch { configs, json } => {
            run_batch(configs, json).await?;
        }
    }

    Ok(())
}

/// Plan one job and report it
async fn run_job(mut config: JobConfig, output: OutputArgs) -> Result<()> {
    config.marks = output.apply_marks(config.marks);

    if let Some(path) = &output.save_config {
        config.save(path).await?;
        println!("Saved configuration → {}", path.display());
    }

    let result = press_impose::plan_async(config.clone()).await?;
    let stats = press_impose::calculate_statistics(&result);

    if output.json {
        if output.stats_only {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    } else {
        print_statistics(&config.name, &stats);
        if result.is_degenerate() {
            println!("  Warning: the page does not fit the usable sheet area");
        }
        if !output.stats_only {
            print_layout(&result);
        }
    }

    if let Some(path) = &output.proof {
        let doc = press_impose::render_proof(&result, &config.marks)?;
        press_impose::save_pdf(doc, path).await?;
        println!("Proof → {}", path.display());
    }

    Ok(())
}

/// Load and plan every job on the worker, answering in input order
async fn run_batch(configs: Vec<PathBuf>, json: bool) -> Result<()> {
    let mut worker = spawn_worker();
    for (idx, path) in configs.iter().enumerate() {
        worker.send(PlanCommand::LoadConfig {
            job_id: JobId(idx as u64),
            path: path.clone(),
        })?;
    }

    let mut outcomes: BTreeMap<JobId, std::result::Result<ImpositionStatistics, String>> =
        BTreeMap::new();
    while outcomes.len() < configs.len() {
        let Some(update) = worker.next_update().await else {
            bail!("Worker stopped with {} jobs outstanding", configs.len() - outcomes.len());
        };
        match update {
            PlanUpdate::ConfigLoaded { job_id, config } => {
                worker.send(PlanCommand::CalculateStats { job_id, config })?;
            }
            PlanUpdate::StatsCalculated { job_id, stats } => {
                outcomes.insert(job_id, Ok(stats));
            }
            PlanUpdate::Error { job_id, message } => {
                outcomes.insert(job_id, Err(message));
            }
            other => log::debug!("Ignoring update {:?}", other.job_id()),
        }
    }
    worker.shutdown().await?;

    let mut failures = 0;
    for (JobId(idx), outcome) in outcomes {
        let path = &configs[idx as usize];
        match outcome {
            Ok(stats) if json => println!("{}", serde_json::to_string(&stats)?),
            Ok(stats) => print_statistics(&path.display().to_string(), &stats),
            Err(message) => {
                failures += 1;
                eprintln!("{}: {}", path.display(), message);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} jobs failed", failures, configs.len());
    }
    Ok(())
}

fn print_statistics(name: &str, stats: &ImpositionStatistics) {
    println!("Imposition Statistics ({}):", name);
    println!("  Logical pages: {}", stats.logical_pages);
    println!("  Padded pages: {}", stats.padded_pages);
    println!("  Blank pages added: {}", stats.blank_pages_added);
    println!("  Output sheets: {}", stats.output_sheets);
    if let Some(sigs) = stats.signatures {
        println!("  Signatures: {}", sigs);
    }
    println!("  Printed sides: {}", stats.printed_sides);
    println!("  Placed instances: {}", stats.placed_instances);
    println!("  Efficiency: {:.1}%", stats.efficiency * 100.0);
}

fn print_layout(result: &ImpositionResult) {
    println!(
        "Grid: {} across x {} down",
        result.grid.across, result.grid.down
    );
    for sheet in &result.sheets {
        for side in sheet.sides() {
            println!("  {}", describe_side(sheet, side));
        }
    }
}

/// One line per side: page numbers in slot order, blanks as "-", "↓" for 180°
fn describe_side(sheet: &SheetLayout, side: &SheetSide) -> String {
    let mut slots: Vec<_> = side.placements.iter().chain(side.blank_slots.iter()).collect();
    slots.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

    let cells: Vec<String> = slots
        .iter()
        .map(|slot| {
            let label = slot.page.map_or_else(|| "-".to_string(), |p| p.to_string());
            if slot.rotation.is_rotated() {
                format!("{}↓", label)
            } else {
                label
            }
        })
        .collect();

    let side_name = match side.side {
        Side::Front => "front",
        Side::Back => "back",
    };
    format!("Sheet {} {}: {}", sheet.number, side_name, cells.join(" "))
}
