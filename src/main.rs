use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dine_recs::{
    ui::{input_hints, render_session},
    Config, HttpBackend, RecommendationBackend, Session, SessionEvent, SortMode,
};

#[derive(Debug, Parser)]
#[command(name = "dine-recs", about = "Restaurant recommendations by city and budget")]
struct Cli {
    /// City to search, e.g. "bangalore"
    #[arg(long, short)]
    city: Option<String>,

    /// Budget for two: "800" or "500-1200"; defaults to the service midpoint
    #[arg(long, short)]
    budget: Option<String>,

    /// Display order for results
    #[arg(long, short, default_value_t = SortMode::Llm)]
    sort: SortMode,

    /// Only check the service health endpoint
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dine_recs=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let backend = HttpBackend::new(&config.api_base_url)?;

    if cli.check {
        return Ok(match backend.health().await {
            Ok(health) => {
                println!(
                    "{} is {} ({} restaurants loaded)",
                    backend.api_url(),
                    health.status,
                    health
                        .restaurants_loaded
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "unknown".to_string())
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                println!("{} is unreachable: {}", backend.api_url(), e);
                ExitCode::FAILURE
            }
        });
    }

    let mut session = Session::new();
    session.bootstrap(&backend).await;

    if let Some(city) = cli.city {
        session.apply(SessionEvent::CityChanged(city));
    }
    if let Some(budget) = cli.budget {
        session.apply(SessionEvent::BudgetChanged(budget));
    }
    session.apply(SessionEvent::SortChanged(cli.sort));

    let failed = session.submit(&backend).await.is_error();

    println!("{}", render_session(&session, config.max_display_items));

    for hint in input_hints(session.input()) {
        println!("{}", hint);
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
