pub mod ports;
pub mod render;

pub use render::DEFAULT_INPUT;
pub use render::DEFAULT_OUTPUT;
pub use render::LoadedInput;
pub use render::RenderConfig;
pub use render::RenderError;
pub use render::RenderOutput;
pub use render::RenderUseCase;
pub use render::RenderUseCaseImpl;
pub use render::WriteMode;
