//! MailTriage — classify a message from the command line.
//!
//! Reads message text from the arguments or stdin, runs the triage engine
//! and prints the classification result as JSON.

use std::io::Read;

use mailtriage_classify::TriageEngine;
use mailtriage_core::TriageConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("MailTriage — message classification engine");
    println!();
    println!("Usage: mailtriage [--subject <subject>] [text]");
    println!();
    println!("Reads the message text from the argument, or from stdin when");
    println!("no text argument is given. Prints the classification as JSON.");
    println!();
    println!("Environment:");
    println!("  MAILTRIAGE_MODEL_DIR      embedding model directory");
    println!("  MAILTRIAGE_SENTIMENT_DIR  sentiment model directory");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut subject = String::new();
    let mut content: Option<String> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--subject" | "-s" => {
                subject = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--subject requires a value"))?;
            }
            "--help" | "-h" | "help" => {
                print_usage();
                return Ok(());
            }
            other if other.starts_with('-') => {
                anyhow::bail!("Unknown option: {}. Use 'mailtriage --help' for usage.", other);
            }
            other => {
                content = Some(other.to_string());
            }
        }
    }

    let content = match content {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let config = TriageConfig::from_env();
    let embedder = mailtriage_infer::create_embedder(&config.embedding_model_dir);
    let sentiment = mailtriage_infer::create_sentiment(&config.sentiment_model_dir);

    let engine = TriageEngine::new(embedder, sentiment);
    info!("Engine mode: {}", engine.mode());

    let result = engine.process_email(&content, &subject);
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
