use candidate_sync::config::{get_config, init_config};
use candidate_sync::services::view::ViewState;
use candidate_sync::utils::time;
use candidate_sync::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let state = AppState::new();

    // Optional positional args: search query, then status filter
    // (active | interview | rejected | all).
    let mut args = std::env::args().skip(1);
    let query = args.next();
    if let Some(status) = args.next() {
        state
            .filters
            .set_status(status.parse().map_err(anyhow::Error::msg)?);
    }

    info!("fetching candidates from {}", config.api_url);
    let fetch = {
        let candidates = state.candidates.clone();
        tokio::spawn(async move { candidates.fetch_all().await })
    };

    if let Some(query) = query {
        let mut effective = state.filters.subscribe_query();
        state.filters.set_query(query);
        // Wait for the debounced value to settle before reading the view.
        effective.changed().await?;
    }
    fetch.await?;

    match state.view() {
        ViewState::Loading => info!("still loading"),
        ViewState::Error(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
        ViewState::Empty => println!("No candidates match the current filters."),
        ViewState::Populated => {
            for candidate in state.visible_candidates() {
                println!(
                    "#{:<6} {:<28} {:<24} {:<10} {}",
                    candidate.id,
                    candidate.name,
                    candidate.position,
                    candidate.status.label(),
                    time::to_rfc3339(candidate.updated_at),
                );
            }
        }
    }

    Ok(())
}
