pub(crate) mod blur;
pub mod canvas;
pub mod centered;
pub mod layer;
pub(crate) mod raster;
pub mod shadow;
pub mod window;
