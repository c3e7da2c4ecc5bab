//! Wire payload for the industry registration endpoint

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of the registration POST.
///
/// Mirrors the form fields except the password confirmation, which never
/// leaves the client.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryRegistration {
    pub organization_name: String,
    pub registration_number: String,
    pub owner_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub license_number: String,
    pub year_established: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub password: String,
}

impl fmt::Debug for IndustryRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndustryRegistration")
            .field("organization_name", &self.organization_name)
            .field("registration_number", &self.registration_number)
            .field("owner_name", &self.owner_name)
            .field("email_address", &self.email_address)
            .field("phone_number", &self.phone_number)
            .field("license_number", &self.license_number)
            .field("year_established", &self.year_established)
            .field("address", &self.address)
            .field("city", &self.city)
            .field("state", &self.state)
            .field("pincode", &self.pincode)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> IndustryRegistration {
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

    #[test]
    fn test_serializes_exactly_twelve_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "address",
                "city",
                "email_address",
                "license_number",
                "organization_name",
                "owner_name",
                "password",
                "phone_number",
                "pincode",
                "registration_number",
                "state",
                "year_established",
            ]
        );
        assert!(!object.contains_key("confirmPassword"));
        assert_eq!(object["password"], "s3cret");
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", sample());
        assert!(debug.contains("Acme Steel"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("s3cret"));
    }
}
