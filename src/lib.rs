/*!
# Ring tower

Two small 3D demos built on [kiss3d](https://docs.rs/kiss3d):

* **tower**: a procedurally colored tower of rings, each ring made of box
  segments laid around a circle. The camera orbits around it.
* **scroll**: the same tower, animated. The top rows keep dropping into
  place with a cubic ease while the whole tower scrolls upward, and a
  duplicate of every falling segment hides the seam, so the tower looks
  endless.

Both run natively and in the browser (WASM) without changes:

```no_run
use ring_tower::prelude::*;

#[kiss3d::main]
async fn main() {
    match Experience::new(ExperienceConfig::scroll()).await {
        Ok(experience) => experience.run().await,
        Err(err) => log::error!("{}", err),
    }
}
```

Camera controls are the ones of kiss3d's orbit camera:

* `scroll`: zoom in / zoom out.
* `left click + drag`: orbit around the tower.
* `right click + drag`: pan.

In the browser, the canvas is mounted inside the element matching
[`ExperienceConfig::container`](crate::experience::ExperienceConfig) (`#app`
by default).
*/

pub mod animation;
pub mod error;
pub mod experience;
pub mod layout;
pub mod lighting;
pub mod mount;
pub mod palette;
pub mod parameters;
pub mod tower;
pub mod viewport;

pub use crate::error::{ExperienceError, Result};

pub mod prelude {
    pub use crate::animation::{Clock, SegmentAnimation, SegmentFrame};
    pub use crate::error::ExperienceError;
    pub use crate::experience::{Experience, ExperienceConfig};
    pub use crate::layout::RingLayout;
    pub use crate::lighting::Lighting;
    pub use crate::parameters::Parameters;
    pub use crate::tower::Tower;
    pub use glamx::Vec3;
}
