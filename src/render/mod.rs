pub mod layout;
pub mod renderer;

pub use layout::BoardSize;
pub use renderer::Renderer;
