pub mod app;
pub mod cosmic;

pub use app::AppConfig;
pub use cosmic::CosmicConfig;
