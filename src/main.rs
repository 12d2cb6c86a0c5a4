mod config;

use crate::config::AppConfig;
use roster_core::utils::TimeEstimation;
use database::{RosterGenerator, RosterLoader};
use env_logger::Env;
use log::info;
use web::{RosterAppData, RosterReport, RosterReportServer};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let config = AppConfig::from_env()?;

    info!("roster source: {}", config.source);

    if config.is_one_shot {
        info!("one shot report started");

        let page = match RosterLoader::try_load(&config.source).await {
            Some(document) => {
                let (data, estimated) =
                    TimeEstimation::estimate(|| RosterGenerator::generate(&document));

                info!("roster built: {} ms", estimated);

                RosterReport::render(&data)?
            }
            None => RosterReport::render_failure()?,
        };

        println!("{}", page);

        return Ok(());
    }

    RosterReportServer::new(RosterAppData::new(config.source))
        .run(config.port)
        .await?;

    Ok(())
}
