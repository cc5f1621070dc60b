mod bootstrap;

use anyhow::{Context, Result};
use awards_core::settings::Settings;
use awards_data::analysis::{load_movies, producers_intervals};
use awards_data::repository::InMemoryMovieRepository;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Golden Raspberry v{} starting", env!("CARGO_PKG_VERSION"));

    let csv_path = match settings.csv_path.clone() {
        Some(path) => path,
        None => bootstrap::discover_data_path()
            .context("No movie list found; pass --csv-path or set GOLDEN_RASPBERRY_CSV_PATH")?,
    };
    let format = settings.csv_format()?;

    let mut repository = InMemoryMovieRepository::new();
    load_movies(&csv_path, &format, &mut repository)?;

    let report = producers_intervals(&repository);
    println!("{}", report.to_json(settings.pretty)?);

    Ok(())
}
