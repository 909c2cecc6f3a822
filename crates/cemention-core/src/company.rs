//! Seller details printed on invoices and customer messages.
//!
//! The defaults are the storefront's own; the CLI lets them be replaced
//! from the `[company]` section of its config file.

use serde::{Deserialize, Serialize};

/// The selling business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub name: String,
    pub legal_name: String,
    pub gst_number: String,
    pub address: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub website: String,
    pub upi_id: String,
    pub bank_account: String,
    pub bank_ifsc: String,
    pub bank_name: String,
    pub bank_holder: String,
    pub instagram: String,
    pub linkedin: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        CompanyProfile {
            name: "Cemention".to_string(),
            legal_name: "Cemention".to_string(),
            gst_number: "27ABCDE1234F1Z5".to_string(),
            address: "Dev Ram Nagar, Old Highway, Jalgaon, Maharashtra, India".to_string(),
            phone: "9823064024".to_string(),
            whatsapp: "8237564024".to_string(),
            email: "cemention@gmail.com".to_string(),
            website: "www.cemention.com".to_string(),
            upi_id: "9823064024@ybl".to_string(),
            bank_account: "1676200100003406".to_string(),
            bank_ifsc: "PUNB0167620".to_string(),
            bank_name: "Punjab National Bank".to_string(),
            bank_holder: "Cemention".to_string(),
            instagram: "https://www.instagram.com/cementioncom".to_string(),
            linkedin: "https://www.linkedin.com/in/kushal-jain-b52008396".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_gst_number;

    #[test]
    fn test_default_gstin_is_valid() {
        assert!(validate_gst_number(&CompanyProfile::default().gst_number).is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let profile: CompanyProfile =
            serde_json::from_str(r#"{"phone": "9000000000"}"#).unwrap();
        assert_eq!(profile.phone, "9000000000");
        assert_eq!(profile.name, "Cemention");
        assert_eq!(profile.bank_ifsc, "PUNB0167620");
    }
}
