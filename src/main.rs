use anyhow::Context;
use swave_db::MongoStore;
use swave_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load seeder settings")?;

    swave_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        database = %settings.database.database,
        "swave seeder starting"
    );

    let store = MongoStore::connect(&settings.database)
        .await
        .context("could not reach the database; nothing was modified")?;

    let report = swave_seeder::run(&store).await?;

    tracing::info!(
        venues = report.venues,
        events = report.events,
        promotions = report.promotions,
        "database seeded successfully"
    );

    Ok(())
}
