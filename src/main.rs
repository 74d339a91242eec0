//! Headless countdown frontend for the vakit engine.
//!
//! Resolves a location (from the command line or the persisted selection),
//! keeps the session refreshed, and prints the countdown to the next Sahur
//! or İftar as the view changes.

use vakit::config::Config;
use vakit::data::Store;
use vakit::error::Error;
use vakit::model::LocationSpec;
use vakit::service::provider::ProviderClient;
use vakit::service::timings::TimingsService;
use vakit::session::{ConnectivityFeed, ConnectivityStatus, PrayerSession, SessionState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vakit=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let store = Store::open(&config.cache_path)?;
    let client = ProviderClient::new(&config)?;
    let service = TimingsService::new(client, store);

    let feed = ConnectivityFeed::new(ConnectivityStatus::online());
    let session = PrayerSession::new(service, config.language, feed.subscribe());
    let mut view_rx = session.subscribe();

    // An explicit `vakit "İstanbul - Kadıköy" [Türkiye]` invocation
    // replaces the persisted selection; otherwise restore it.
    let mut args = std::env::args().skip(1);
    match args.next() {
        Some(region) => {
            let country = args.next().unwrap_or_else(|| "Türkiye".to_string());
            session
                .set_location(LocationSpec::Manual {
                    region,
                    subregion: None,
                    country,
                })
                .await?;
        }
        None => session.initialize().await?,
    }

    session.start_ticker().await;

    loop {
        tokio::select! {
            changed = view_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                print_view(&view_rx.borrow().clone());
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down");
                break;
            }
        }
    }

    session.stop_ticker().await;

    Ok(())
}

fn print_view(view: &vakit::session::SessionView) {
    match view.state {
        SessionState::Loading => {
            if view.retrying {
                println!("Yeniden deneniyor...");
            }
        }
        SessionState::Ready | SessionState::OfflineReady => {
            let place = view
                .location
                .as_ref()
                .map(|spec| format!("{}, {}", spec.display_city(), spec.display_country()))
                .unwrap_or_default();

            if let (Some(event), Some(cd)) = (&view.next_event, &view.countdown) {
                print!(
                    "\r{place} | {} {:02}:{:02}:{:02}   ",
                    event.at.format("%H:%M"),
                    cd.hours,
                    cd.minutes,
                    cd.seconds
                );
                use std::io::Write;
                let _ = std::io::stdout().flush();
            }

            if let Some(message) = &view.message {
                println!("\n{message}");
            }
        }
        SessionState::Error => {
            if let Some(message) = &view.message {
                println!("{message}");
            }
        }
        SessionState::Idle => {}
    }
}
