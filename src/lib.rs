// Library surface shared by the binary and the integration tests.
pub mod app_dirs;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod package;
pub mod workout;

pub use dispatch::read_package;
pub use error::{PackageError, WorkoutError};
pub use message::{InfoMessage, OutputFormat};
pub use package::Package;
pub use workout::{Training, Workout, WorkoutKind};
