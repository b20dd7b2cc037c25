use std::env;
use std::error::Error;
use std::process::ExitCode;

use pageaudit::analyze;
use tracing_subscriber::EnvFilter;

fn usage(program: &str) -> String {
    format!("Usage: {program} <url> [keyword]\n\nPrints the audit result as JSON on stdout.")
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "audit_page".to_string());

    let Some(url) = args.next() else {
        eprintln!("{}", usage(&program));
        return Ok(ExitCode::FAILURE);
    };
    let keyword = args.next();

    let result = analyze(&url, keyword.as_deref()).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    if result.content_fetched {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
