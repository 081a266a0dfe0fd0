//! Breadcrumb API Benchmark - Main CLI Application
//!
//! Registers a throwaway user, builds a deep directory chain, then times the
//! breadcrumb lookup of the deepest directory and prints first-call, average,
//! and p95 latency in milliseconds.

use breadcrumb_bench::{
    cli::Cli,
    error::Result,
    output::ReportFormatter,
    runner::BenchmarkRunner,
    PKG_NAME, VERSION,
};
use clap::Parser;
use std::process;

// The whole flow is sequential request/response; one thread is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        println!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    let cli = Cli::parse();

    if let Err(message) = cli.validate() {
        println!("{}", message);
        process::exit(1);
    }

    let use_colors = cli.use_colors();
    if let Err(e) = run_application(cli).await {
        // Contract: failures print the message to stdout and exit 1.
        println!("{}", e.format_for_console(use_colors));
        process::exit(1);
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    if cli.debug {
        println!("{} v{}", PKG_NAME, VERSION);
        println!("Debug mode enabled");
        println!();
    }

    let config = cli.into_config();

    if config.debug {
        println!("Configuration loaded successfully:");
        println!("  Base URL: {}", config.base_url);
        println!("  Depth: {}", config.depth);
        println!("  Repeats: {}", config.repeats);
        println!("  Timeout: {}s", config.timeout.as_secs());
        println!("  Color Output: {}", config.enable_color);
        println!();
    }

    let enable_color = config.enable_color;
    let verbose = config.verbose;

    let runner = BenchmarkRunner::new(config)?;
    let report = runner.run().await?;

    let formatter = ReportFormatter::new(enable_color);
    println!("{}", formatter.format_report(&report, verbose));

    Ok(())
}
