pub mod camera;
pub mod core;
pub mod error;
pub mod math;
pub mod output;
pub mod render;
pub mod scene;
pub mod shading;
