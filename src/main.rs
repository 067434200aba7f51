use crate::app_config::AppConfig;
use crate::dataset::run_job;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

mod app_config;
mod dataset;
mod domain;
mod extensions;
mod geo_location_deserializer;
mod sampler;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration, {} job(s)", config.jobs().len());

    let mut rng = match config.core().seed() {
        Some(seed) => {
            info!("🎲 Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let time_window = config.timestamps().time_window();
    info!("🕗 Timestamps drawn from {}", time_window);

    if config.jobs().is_empty() {
        warn!("⚠️ No jobs configured, nothing to generate");
    }

    for job in config.jobs() {
        run_job(job, time_window, &mut rng).await?;
    }

    info!("🔥 {} is done", env!("CARGO_PKG_NAME"));
    Ok(())
}
