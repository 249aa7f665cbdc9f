use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use colortally::api;
use colortally::assets::{AssetLoader, ConfigSource};
use colortally::models::{AppConfig, ColorShareEntry, DistributionReport};
use colortally::server;
use colortally::services::{AnalysisRequest, AnalysisService, ChartFormat, ChartRenderer};

#[derive(Parser)]
#[command(name = "colortally")]
#[command(about = "Color distribution analyzer - how much of an image is each reference color")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the pixels of an image matching each reference color
    Analyze {
        /// Image file (.png, .jpg, .jpeg or .bmp)
        image: PathBuf,

        /// Reference colors as comma-separated hex RGB (e.g. "#FF0000, #00FF00")
        #[arg(short, long)]
        colors: String,

        /// Match tolerance as Euclidean RGB distance (default: from config)
        #[arg(short, long, conflicts_with = "exact")]
        sensitivity: Option<f64>,

        /// Exact matching only, ignoring the configured sensitivity
        #[arg(long)]
        exact: bool,

        /// Output format for the distribution
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Also write a pie chart (.svg, anything else is PNG)
        #[arg(long)]
        chart: Option<PathBuf>,
    },
    /// Start the HTTP server
    Serve,
    /// Write the embedded default config.yaml for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Yaml,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Colortally API",
        description = "Color distribution analysis for uploaded images",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_analyze, api::handle_chart),
    components(schemas(DistributionReport, ColorShareEntry)),
    tags(
        (name = "Analysis", description = "Color distribution analysis and charts")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze {
            image,
            colors,
            sensitivity,
            exact,
            format,
            chart,
        }) => {
            let sensitivity = if exact { Some(0.0) } else { sensitivity };
            run_analyze_command(&image, colors, sensitivity, format, chart.as_deref())
        }
        Some(Commands::Init { force, list }) => run_init_command(force, list),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Analyze an image file and print the distribution (no server needed)
fn run_analyze_command(
    image: &Path,
    colors: String,
    sensitivity: Option<f64>,
    format: OutputFormat,
    chart: Option<&Path>,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colortally=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let asset_loader = AssetLoader::from_env();
    let config = Arc::new(AppConfig::load_from_assets(&asset_loader));
    let analysis = AnalysisService::new(config.clone());

    let request = AnalysisRequest::new(colors, sensitivity);
    let report = analysis.analyze_path(image, &request)?;

    match format {
        OutputFormat::Table => println!("{}", report.to_table(config.chart.decimals)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&report)?),
    }

    if let Some(output) = chart {
        if report.is_empty() {
            eprintln!("No chart written: nothing matched.");
            return Ok(());
        }

        let renderer = ChartRenderer::new(config.chart.clone())?;
        let bytes = renderer.render(&report, ChartFormat::from_path(output))?;
        std::fs::write(output, &bytes)?;
        eprintln!("Wrote chart {} ({} bytes)", output.display(), bytes.len());
    }

    Ok(())
}

/// Extract the embedded default config to the filesystem
fn run_init_command(force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "Skipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    Ok(())
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Colortally v{VERSION}");
    println!("Color distribution analyzer\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let loader = AssetLoader::from_env();
    let config_source = match loader.config_source() {
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Embedded if loader.config_path().is_some() => {
            "embedded (file not found)".to_string()
        }
        ConfigSource::Embedded => "embedded".to_string(),
    };
    println!("\nConfig: {config_source}");

    println!("\nCommands:");
    println!("  colortally analyze   Count reference colors in an image");
    println!("  colortally serve     Start the HTTP server");
    println!("  colortally init      Write the default config.yaml");
    println!("\nRun 'colortally --help' for more details.");
}

async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colortally=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    tracing::info!(
        config = ?asset_loader.config_source(),
        "Asset sources configured"
    );

    let state = server::create_app_state(asset_loader)?;

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Colortally server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
