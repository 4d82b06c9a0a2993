pub mod presenter;

pub use presenter::OutputFormat;
pub use presenter::Presenter;
pub use presenter::RenderReport;
pub use presenter::create_presenter;
