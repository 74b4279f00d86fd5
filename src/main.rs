use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use skello_extract::{aggregator, cli, config, error, extractor, report, scanner, session};

use cli::{Cli, Commands};
use config::Config;
use error::Result;
use extractor::{GeminiClient, StoreReport};
use session::Session;
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Extract { folder, output } => {
            println!("📊 skello-extract - screenshot extraction\n");

            let mut session = scan_into_session(&folder, 3, cli.verbose)?;

            println!("[2/3] Extracting with Gemini ({})...", config.model);
            run_extraction(&mut session, &config).await;
            println!("✔ {} store report(s) extracted\n", session.reports().len());

            println!("[3/3] Saving reports...");
            let output = output.unwrap_or_else(|| folder.join("reports.json"));
            let json = serde_json::to_string_pretty(session.reports())?;
            std::fs::write(&output, json)?;
            println!("✔ Reports saved: {}", output.display());

            let pivot = aggregator::aggregate(session.reports());
            println!("\n{}", report::table::render_table(&pivot));

            println!("\n✅ Extraction complete");
        }

        Commands::Export { input, output } => {
            println!("📄 skello-extract - export\n");

            let content = std::fs::read_to_string(&input)?;
            let reports: Vec<StoreReport> = serde_json::from_str(&content)?;
            let pivot = aggregator::aggregate(&reports);

            println!("{}\n", report::table::render_table(&pivot));

            let csv_path =
                output.unwrap_or_else(|| PathBuf::from(report::csv::default_filename()));
            report::csv::write_csv(&pivot, &csv_path)?;
            println!("✔ CSV written: {}", csv_path.display());

            println!("\n✅ Export complete");
        }

        Commands::Run { folder, output } => {
            println!("🚀 skello-extract - extraction and export\n");

            let mut session = scan_into_session(&folder, 4, cli.verbose)?;

            println!("[2/4] Extracting with Gemini ({})...", config.model);
            run_extraction(&mut session, &config).await;
            println!("✔ {} store report(s) extracted\n", session.reports().len());

            println!("[3/4] Results:");
            let pivot = aggregator::aggregate(session.reports());
            println!("{}\n", report::table::render_table(&pivot));

            println!("[4/4] Exporting CSV...");
            let csv_path =
                output.unwrap_or_else(|| folder.join(report::csv::default_filename()));
            report::csv::write_csv(&pivot, &csv_path)?;
            println!("✔ CSV written: {}", csv_path.display());

            println!("\n✅ Done");
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if show {
                println!("Configuration:");
                println!("  model: {}", config.model);
                println!(
                    "  API key: {}",
                    if config.api_key.is_some() { "set" } else { "not set" }
                );
            }
        }
    }

    Ok(())
}

fn scan_into_session(folder: &std::path::Path, steps: usize, verbose: bool) -> Result<Session> {
    println!("[1/{}] Scanning screenshots...", steps);
    let images = scanner::scan_folder(folder)?;
    println!("✔ {} screenshot(s) found\n", images.len());

    if verbose {
        for image in &images {
            println!("  - {} ({})", image.file_name, image.mime_type);
        }
    }

    let mut session = Session::new();
    session.set_files(images);
    Ok(session)
}

/// Drive one extraction pass with a spinner over the in-flight call.
/// Any session error is the whole contract: print it and exit non-zero.
async fn run_extraction(session: &mut Session, config: &Config) {
    let api_key = match config.get_api_key() {
        Ok(key) => key,
        Err(e) => fail(&e.to_string()),
    };
    let client = GeminiClient::new(api_key, &config.model);

    let spinner = processing_spinner();
    let ok = session.extract(&client).await;
    spinner.finish_and_clear();

    if !ok {
        let message = session.error().unwrap_or("an unknown error occurred");
        fail(message);
    }
}

fn processing_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message("Gemini is reading the screenshots, this may take a moment...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn fail(message: &str) -> ! {
    eprintln!("\n✖ Error: {}", message);
    std::process::exit(1);
}
