pub mod birthday;
pub mod directory;
pub mod phone;
pub mod record;

// Re-exports for convenience
pub use birthday::Birthday;
pub use directory::ContactDirectory;
pub use phone::PhoneNumber;
pub use record::ContactRecord;
