pub mod errors;

pub use errors::JobError;
