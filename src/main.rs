use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod config;
mod dataset;
mod engine;
mod error;
mod features;
mod model;
mod types;

use config::Config;
use engine::ScanEngine;
use types::Label;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "netra_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    info!("Loaded configuration: {:?}", config);

    // Train the scan engine on the synthetic dataset
    let engine = ScanEngine::new(&config)?;

    println!();
    println!("{}", "=".repeat(50));
    println!("   NETRA MALICIOUS URL SCANNER (brand-aware)");
    println!("{}", "=".repeat(50));

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("\nEnter URL (or 'exit'): ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like an explicit exit
            break;
        }
        let url = line.trim();
        if url == "exit" {
            break;
        }
        if url.is_empty() {
            continue;
        }

        let verdict = engine.scan(url);
        println!(
            "   [debug] brand impersonation: {} | suspicious words: {} | entropy: {:.2}",
            verdict.features.brand_impersonation as u64,
            verdict.features.suspicious_keywords as u64,
            verdict.features.entropy,
        );
        for reason in &verdict.reasons {
            println!("   - {}", reason);
        }
        match verdict.label {
            Label::Malicious => println!(">>> Result: MALICIOUS ({:.1}%)", verdict.probability * 100.0),
            Label::Safe => println!(">>> Result: SAFE ({:.1}%)", (1.0 - verdict.probability) * 100.0),
        }
    }

    Ok(())
}
