pub mod decoder;
pub mod render;
pub mod wire;

pub use decoder::WireMessageDecoder;
pub use render::Renderer;
