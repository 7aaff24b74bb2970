// Content records mirrored from the Cosmic bucket

pub mod community;
pub mod cosmic;
pub mod nutrition;
pub mod program;
pub mod progress;
pub mod progress_form;
pub mod workout;
pub mod workout_filter;

pub use community::*;
pub use cosmic::*;
pub use nutrition::*;
pub use program::*;
pub use progress::*;
pub use progress_form::*;
pub use workout::*;
pub use workout_filter::*;
