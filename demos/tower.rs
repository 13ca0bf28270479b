use ring_tower::prelude::*;

#[kiss3d::main]
async fn main() {
    env_logger::init();

    match Experience::new(ExperienceConfig::tower()).await {
        Ok(experience) => experience.run().await,
        Err(err) => log::error!("failed to start the tower demo: {}", err),
    }
}
