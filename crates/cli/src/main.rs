use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use domain::{AnalyzeRequest, AnalyzeResponse, Context, Recommendation};
use pipeline::stages::logistics::{lookup_logistics, DEFAULT_LOGISTICS, PLACE_SIZE_CODES};
use pipeline::stages::minimum_tier::minimum_tier_for;
use server::{RecommendationEngine, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::info;

/// MeezGo media analyzer - moving service recommendations
#[derive(Parser)]
#[command(name = "meez-analyzer")]
#[command(about = "Service tier, truck and crew recommendations for moving bookings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Bind address (overrides MEEZ_ANALYZER_ADDR)
        #[arg(long)]
        addr: Option<String>,

        /// Shared secret for /analyze (overrides MCP_COLAB_API_SECRET)
        #[arg(long)]
        secret: Option<String>,
    },

    /// Get a recommendation for a single booking
    Recommend {
        /// Size bracket code, e.g. s3_120_150
        #[arg(long)]
        place_size: Option<String>,

        /// Free-form property type
        #[arg(long)]
        place_type: Option<String>,

        #[arg(long, default_value = "0")]
        pickup_floor: u32,

        #[arg(long, default_value = "0")]
        destination_floor: u32,

        /// An elevator is available
        #[arg(long)]
        elevator: bool,

        /// Bulky or heavy items are present
        #[arg(long)]
        heavy: bool,

        /// Number of submitted images
        #[arg(long, default_value = "0")]
        images: usize,

        /// Media type
        #[arg(long, default_value = "images")]
        mode: String,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a JSON array of analyze requests
    Batch {
        /// Input file containing a JSON array of requests
        #[arg(long)]
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the logistics table for every size code
    Table,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Serve { addr, secret } => handle_serve(addr, secret).await?,
        Commands::Recommend {
            place_size,
            place_type,
            pickup_floor,
            destination_floor,
            elevator,
            heavy,
            images,
            mode,
            json,
        } => {
            let context = Context {
                place_type,
                place_size,
                pickup_floor: Some(pickup_floor),
                destination_floor: Some(destination_floor),
                has_elevator: Some(i64::from(elevator)),
                add_heavy: Some(i64::from(heavy)),
                service_type: None,
            };
            let request = AnalyzeRequest::new(mode, context).with_image_urls(placeholder_images(images));
            handle_recommend(&request, json)?
        }
        Commands::Batch { input, output } => handle_batch(input, output)?,
        Commands::Table => handle_table(),
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'serve' command
async fn handle_serve(addr: Option<String>, secret: Option<String>) -> Result<()> {
    let mut config = ServerConfig::from_env().context("Failed to load configuration")?;
    if let Some(addr) = addr {
        config = config.with_bind_addr(&addr)?;
    }
    if let Some(secret) = secret {
        config = config.with_api_secret(secret);
    }
    server::run(config).await
}

/// Handle the 'recommend' command
fn handle_recommend(request: &AnalyzeRequest, json: bool) -> Result<()> {
    let engine = RecommendationEngine::new();
    let recommendation = engine.recommend(request);

    if json {
        let response = AnalyzeResponse::from(recommendation);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_recommendation(&recommendation);
    }
    Ok(())
}

/// Handle the 'batch' command
fn handle_batch(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let raw = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let requests: Vec<AnalyzeRequest> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse requests in {}", input.display()))?;
    info!("Loaded {} requests from {}", requests.len(), input.display());

    let engine = RecommendationEngine::new();
    let responses: Vec<AnalyzeResponse> = engine
        .recommend_batch(&requests)
        .into_iter()
        .map(AnalyzeResponse::from)
        .collect();

    let rendered = serde_json::to_string_pretty(&responses)?;
    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} Wrote {} recommendations to {}",
                "✓".green(),
                responses.len(),
                path.display()
            );
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/// Handle the 'table' command
fn handle_table() {
    println!("{}", "Logistics by place size:".bold().blue());
    println!(
        "  {:<16} {:<8} {:<6} {:>7} {:>8}",
        "place_size", "minimum", "truck", "workers", "minutes"
    );
    for code in PLACE_SIZE_CODES {
        let estimate = lookup_logistics(code).unwrap_or(DEFAULT_LOGISTICS);
        println!(
            "  {:<16} {:<8} {:<6} {:>7} {:>8}",
            code,
            minimum_tier_for(code).as_str(),
            estimate.truck_size.as_str(),
            estimate.workers,
            estimate.estimated_minutes
        );
    }
    println!(
        "  {:<16} {:<8} {:<6} {:>7} {:>8}",
        "(other)",
        minimum_tier_for("").as_str(),
        DEFAULT_LOGISTICS.truck_size.as_str(),
        DEFAULT_LOGISTICS.workers,
        DEFAULT_LOGISTICS.estimated_minutes
    );
    println!(
        "{}",
        "Without an elevator, add 20 minutes per floor (pickup + destination).".dimmed()
    );
}

/// Handle the 'benchmark' command
async fn handle_benchmark(requests: usize, concurrent: usize) -> Result<()> {
    let engine = RecommendationEngine::new();
    let permits = Arc::new(Semaphore::new(concurrent.max(1)));

    let batch: Vec<AnalyzeRequest> = (0..requests).map(|_| random_request()).collect();

    // Use tokio::spawn to make concurrent requests
    let started = Instant::now();
    let mut handles = vec![];
    for request in batch {
        let engine = engine.clone();
        let permits = permits.clone();
        let handle = tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            engine.recommend(&request);
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let wall_time = started.elapsed();

    if timings.is_empty() {
        println!("No requests to benchmark");
        return Ok(());
    }

    timings.sort();
    let total: Duration = timings.iter().sum();
    let avg_latency = total / (timings.len() as u32);
    let throughput = timings.len() as f64 / wall_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} (concurrency {})", timings.len(), concurrent.max(1));
    println!("Total time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Value at the given fraction of a sorted, non-empty slice
fn percentile(sorted: &[Duration], fraction: f64) -> Duration {
    let index = ((sorted.len() as f64 * fraction) as usize).min(sorted.len() - 1);
    sorted[index]
}

/// Random booking across the known size codes
fn random_request() -> AnalyzeRequest {
    let place_size = PLACE_SIZE_CODES[rand::random::<u32>() as usize % PLACE_SIZE_CODES.len()];
    let context = Context {
        place_size: Some(place_size.to_string()),
        pickup_floor: Some(rand::random::<u32>() % 6),
        destination_floor: Some(rand::random::<u32>() % 6),
        has_elevator: Some(i64::from(rand::random::<bool>())),
        add_heavy: Some(i64::from(rand::random::<u32>() % 4 == 0)),
        ..Context::default()
    };
    let images = rand::random::<u32>() as usize % 16;
    AnalyzeRequest::new("images", context).with_image_urls(placeholder_images(images))
}

/// Image references only matter by count
fn placeholder_images(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("image-{}", i)).collect()
}

/// Helper function to format and print a recommendation
fn print_recommendation(recommendation: &Recommendation) {
    println!("{}", "Recommendation:".bold().blue());
    println!(
        "{}Service: {}",
        "• ".green(),
        recommendation.service_type.as_str().bold()
    );
    println!("{}Truck: {}", "• ".green(), recommendation.truck_size);
    println!("{}Workers: {}", "• ".green(), recommendation.workers);
    println!(
        "{}Estimated time: {} min",
        "• ".green(),
        recommendation.estimated_minutes
    );
    println!("{}Confidence: {:.2}", "• ".cyan(), recommendation.confidence);

    let services = recommendation
        .recommended_services
        .iter()
        .map(|tier| tier.as_str())
        .collect::<Vec<_>>()
        .join(" -> ");
    println!("{}Recommended services: {}", "• ".cyan(), services);

    if recommendation.reasons.is_empty() {
        println!("{}Reasons: none", "• ".cyan());
    } else {
        println!("{}Reasons:", "• ".cyan());
        for reason in &recommendation.reasons {
            println!("  - {}", reason);
        }
    }
}
