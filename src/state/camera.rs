use super::geo::Coords;

// Where the map camera points; rebuilt from the round on each change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub center: Coords,
    pub zoom: f64,
}

impl CameraView {
    pub fn new(center: Coords, zoom: f64) -> Self {
        Self { center, zoom }
    }
}
