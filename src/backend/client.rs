//! HTTP client for the industry registration endpoint

use super::error::SubmitError;
use super::registration::IndustryRegistration;
use super::traits::RegistrationBackend;
use async_trait::async_trait;
use reqwest::Response;
use url::Url;

/// Default registration endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/industry-register";

#[async_trait]
trait ResponseExt {
    async fn check_success(self) -> Result<Self, SubmitError>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, SubmitError> {
        let status = self.status();
        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body: self
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read response text".to_string()),
            });
        }
        Ok(self)
    }
}

/// Client posting registrations as JSON
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl RegistrationClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RegistrationBackend for RegistrationClient {
    async fn register_industry(
        &self,
        registration: &IndustryRegistration,
    ) -> Result<(), SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, "posting industry registration");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(registration)
            .send()
            .await?
            .check_success()
            .await?;

        tracing::debug!(status = response.status().as_u16(), "registration accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn registration() -> IndustryRegistration {
        IndustryRegistration {
            organization_name: "Acme Steel".to_string(),
            registration_number: "REG-001".to_string(),
            owner_name: "Asha Rao".to_string(),
            email_address: "ops@acme.test".to_string(),
            phone_number: "5550100".to_string(),
            license_number: "LIC-9".to_string(),
            year_established: "1998".to_string(),
            address: "1 Mill Road".to_string(),
            city: "Pune".to_string(),
            state: "MH".to_string(),
            pincode: "411001".to_string(),
            password: "s3cret".to_string(),
        }
    }

    fn client_for(server: &MockServer) -> RegistrationClient {
        let endpoint = Url::parse(&format!("{}/industry-register", server.uri())).unwrap();
        RegistrationClient::new(endpoint)
    }

    #[test]
    fn test_default_endpoint_parses() {
        let url = Url::parse(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(url.path(), "/industry-register");
        assert_eq!(url.port(), Some(5000));
    }

    #[tokio::test]
    async fn test_posts_json_body_without_confirmation() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/industry-register"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "organization_name": "Acme Steel",
                "registration_number": "REG-001",
                "owner_name": "Asha Rao",
                "email_address": "ops@acme.test",
                "phone_number": "5550100",
                "license_number": "LIC-9",
                "year_established": "1998",
                "address": "1 Mill Road",
                "city": "Pune",
                "state": "MH",
                "pincode": "411001",
                "password": "s3cret"
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.register_industry(&registration()).await.unwrap();
    }

    #[tokio::test]
    async fn test_any_2xx_is_success_and_body_ignored() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/industry-register"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        tokio_test::assert_ok!(client.register_industry(&registration()).await);
    }

    #[tokio::test]
    async fn test_non_2xx_is_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/industry-register"))
            .respond_with(ResponseTemplate::new(409).set_body_string("already registered"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .register_industry(&registration())
            .await
            .unwrap_err();

        match err {
            SubmitError::Status { status, body } => {
                assert_eq!(status, 409);
                assert_eq!(body, "already registered");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let endpoint = Url::parse("http://127.0.0.1:9/industry-register").unwrap();
        let client = RegistrationClient::new(endpoint);
        let err = tokio_test::assert_err!(client.register_industry(&registration()).await);
        assert!(matches!(err, SubmitError::Transport(_)));
        assert_eq!(err.status(), None);
    }
}
