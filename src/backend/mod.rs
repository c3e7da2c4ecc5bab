//! Registration backend module for HTTP communication

mod client;
mod error;
mod registration;
mod traits;

pub use client::{RegistrationClient, DEFAULT_ENDPOINT};
pub use error::SubmitError;
pub use registration::IndustryRegistration;
pub use traits::RegistrationBackend;

#[cfg(test)]
pub use traits::MockRegistrationBackend;
