//! Trait abstraction for the registration backend to enable mocking in tests

use super::error::SubmitError;
use super::registration::IndustryRegistration;
use async_trait::async_trait;

/// Trait for registration backend operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationBackend: Send + Sync {
    /// Submit an industry registration. Any 2xx answer is a success and
    /// its body is ignored.
    async fn register_industry(&self, registration: &IndustryRegistration)
        -> Result<(), SubmitError>;
}
