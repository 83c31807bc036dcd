pub mod camera;
pub mod directory;
pub mod geo;
pub mod random;

pub use camera::CameraView;
pub use directory::{City, CityDirectory};
pub use geo::{Coords, distance_miles};
pub use random::RandomHandle;
