pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod ops;
pub mod queries;
pub mod validation;

// Re-exports for convenience
pub use config::{Config, Invocation};
pub use error::{BookError, BookResult};
pub use model::{Birthday, ContactDirectory, ContactRecord, PhoneNumber};
pub use queries::birthday_queries::UpcomingBirthday;
