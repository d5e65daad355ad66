pub mod cloud;
pub mod engine;
pub mod net;
pub mod render;
