// Content access and derived views

pub mod content_service;
pub mod cosmic;
pub mod progress_chart;

pub use content_service::ContentService;
pub use cosmic::{CosmicClient, CosmicError, ObjectQuery};
pub use progress_chart::{ChartData, ChartMetric, ChartPoint, ChartView, ProgressChart};
