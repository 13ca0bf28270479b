use ring_tower::prelude::*;

#[kiss3d::main]
async fn main() {
    env_logger::init();

    let config = ExperienceConfig::scroll();
    log::debug!(
        "scroll loop of {}s at {} fps (step {})",
        config.parameters.duration,
        config.parameters.fps,
        config.parameters.step()
    );

    match Experience::new(config).await {
        Ok(experience) => experience.run().await,
        Err(err) => log::error!("failed to start the scroll demo: {}", err),
    }
}
