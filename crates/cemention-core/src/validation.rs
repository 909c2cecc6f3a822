//! # Validation Module
//!
//! Input validation for storefront forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form input (CLI arguments)                                   │
//! │  ├── Parsing (roles, grades, dates)                                     │
//! │  └── THIS MODULE: field rules, quantity rules, GSTIN format            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront backend                                           │
//! │  ├── Authentication / admin checks                                     │
//! │  └── Unique email, product existence                                   │
//! │                                                                         │
//! │  The pricing functions never validate; callers run these first.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cemention_core::validation::{validate_gst_number, validate_quantity};
//!
//! assert!(validate_quantity(100).is_ok());
//! assert!(validate_gst_number("27ABCDE1234F1Z5").is_ok());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{DeliveryAddress, ProductDraft, Registration, RequestOrderDraft};
use crate::MIN_ORDER_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Requires a non-blank value.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates an email address (shape only: `local@domain.tld`).
///
/// ## Example
/// ```rust
/// use cemention_core::validation::validate_email;
///
/// assert!(validate_email("orders@cemention.com").is_ok());
/// assert!(validate_email("orders@localhost").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    validate_required("email", email)?;

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must look like name@example.com".to_string(),
    };

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && tld.len() >= 2 => Ok(()),
        _ => Err(invalid()),
    }
}

/// Normalises an Indian mobile number to its 10 digits.
///
/// Strips spaces, dashes, and a leading `+91`/`91`/`0`.
pub fn normalize_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 12 && digits.starts_with("91") {
        return digits[2..].to_string();
    }
    if digits.len() == 11 && digits.starts_with('0') {
        return digits[1..].to_string();
    }
    digits
}

/// Validates a 10-digit Indian mobile number.
///
/// ## Example
/// ```rust
/// use cemention_core::validation::validate_phone;
///
/// assert!(validate_phone("98230 64024").is_ok());
/// assert!(validate_phone("+91-9823064024").is_ok());
/// assert!(validate_phone("12345").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    validate_required("phone", phone)?;
    if normalize_phone(phone).len() != 10 {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be a 10-digit mobile number".to_string(),
        });
    }
    Ok(())
}

/// Validates a 6-digit Indian PIN code.
pub fn validate_pincode(pincode: &str) -> ValidationResult<()> {
    let pincode = pincode.trim();
    validate_required("pincode", pincode)?;
    if pincode.len() != 6
        || !pincode.chars().all(|c| c.is_ascii_digit())
        || pincode.starts_with('0')
    {
        return Err(ValidationError::InvalidFormat {
            field: "pincode".to_string(),
            reason: "must be 6 digits and not start with 0".to_string(),
        });
    }
    Ok(())
}

/// Validates a GSTIN.
///
/// ## Format
/// ```text
///  27  ABCDE  1234  F   1     Z   5
///  ──  ─────  ────  ─   ─     ─   ─
///  │     │     │    │   │     │   └─ checksum (digit or letter)
///  │     │     │    │   │     └───── literal 'Z'
///  │     │     │    │   └─────────── entity number (1-9 or letter)
///  │     │     │    └─────────────── PAN letter
///  │     │     └──────────────────── PAN digits
///  │     └────────────────────────── PAN letters
///  └──────────────────────────────── state code
/// ```
/// Case-insensitive.
pub fn validate_gst_number(gst_number: &str) -> ValidationResult<()> {
    let gst = gst_number.trim().to_uppercase();
    validate_required("GST number", &gst)?;

    let chars: Vec<char> = gst.chars().collect();
    let shape_ok = chars.len() == 15
        && chars[0..2].iter().all(char::is_ascii_digit)
        && chars[2..7].iter().all(char::is_ascii_uppercase)
        && chars[7..11].iter().all(char::is_ascii_digit)
        && chars[11].is_ascii_uppercase()
        && (matches!(chars[12], '1'..='9') || chars[12].is_ascii_uppercase())
        && chars[13] == 'Z'
        && (chars[14].is_ascii_digit() || chars[14].is_ascii_uppercase());

    if !shape_ok {
        return Err(ValidationError::InvalidFormat {
            field: "GST number".to_string(),
            reason: "expected 15 characters like 27ABCDE1234F1Z5".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity against the 100-bag minimum.
///
/// ## Example
/// ```rust
/// use cemention_core::validation::validate_quantity;
///
/// assert!(validate_quantity(100).is_ok());
/// assert!(validate_quantity(99).is_err());
/// ```
pub fn validate_quantity(quantity: i64) -> CoreResult<()> {
    if quantity < MIN_ORDER_QUANTITY {
        return Err(CoreError::BelowMinimumQuantity {
            requested: quantity,
            min: MIN_ORDER_QUANTITY,
        });
    }
    Ok(())
}

/// Validates a bulk quantity: at least 100 bags and a multiple of one of
/// `multiples`.
///
/// ## Example
/// ```rust
/// use cemention_core::validation::validate_quantity_multiple;
///
/// assert!(validate_quantity_multiple(150, &[50, 100]).is_ok());
/// assert!(validate_quantity_multiple(120, &[50, 100]).is_err());
/// ```
pub fn validate_quantity_multiple(quantity: i64, multiples: &[i64]) -> CoreResult<()> {
    validate_quantity(quantity)?;

    let fits = multiples.iter().any(|&m| m > 0 && quantity % m == 0);
    if !fits {
        return Err(CoreError::InvalidQuantityMultiple {
            quantity,
            multiples: multiples.to_vec(),
        });
    }
    Ok(())
}

/// Validates a product base price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed
pub fn validate_base_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "base price".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the registration form.
///
/// A GST-registered account must supply a well-formed GSTIN.
pub fn validate_registration(form: &Registration) -> ValidationResult<()> {
    validate_required("name", &form.name)?;
    validate_email(&form.email)?;
    validate_required("password", &form.password)?;
    validate_phone(&form.phone)?;

    if form.is_gst_registered {
        match form.gst_number.as_deref() {
            Some(gst) => validate_gst_number(gst)?,
            None => {
                return Err(ValidationError::Required {
                    field: "GST number".to_string(),
                })
            }
        }
    }
    Ok(())
}

/// Validates the checkout delivery address. All four fields are required.
pub fn validate_delivery_address(address: &DeliveryAddress) -> ValidationResult<()> {
    validate_required("street", &address.street)?;
    validate_required("city", &address.city)?;
    validate_required("state", &address.state)?;
    validate_pincode(&address.pincode)
}

/// Validates an admin product form.
pub fn validate_product_draft(draft: &ProductDraft) -> ValidationResult<()> {
    validate_required("brand", &draft.brand)?;
    if draft.brand.trim().len() > 100 {
        return Err(ValidationError::TooLong {
            field: "brand".to_string(),
            max: 100,
        });
    }
    validate_base_price(draft.base_price)?;
    validate_required("image", &draft.image)?;

    if draft.min_quantity < 1 {
        return Err(ValidationError::OutOfRange {
            field: "min quantity".to_string(),
            min: 1,
            max: i64::MAX,
        });
    }
    if draft.stock < 0 {
        return Err(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }
    Ok(())
}

/// Validates a request-order form. Any quantity from 100 bags up is fine.
pub fn validate_request_order(draft: &RequestOrderDraft) -> CoreResult<()> {
    validate_required("brand", &draft.brand)?;
    validate_required("delivery location", &draft.delivery_location)?;
    validate_phone(&draft.phone)?;
    validate_quantity(draft.quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Grade, Role};
    use chrono::NaiveDate;

    fn registration() -> Registration {
        Registration {
            name: "Asha Traders".to_string(),
            email: "asha@example.com".to_string(),
            password: "secret".to_string(),
            phone: "9876543210".to_string(),
            role: Role::Retailer,
            business_name: Some("Asha Traders".to_string()),
            is_gst_registered: false,
            gst_number: None,
            gst_registered_name: None,
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("a b@c.com").is_err());
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+91 98230 64024"), "9823064024");
        assert_eq!(normalize_phone("09823064024"), "9823064024");
        assert_eq!(normalize_phone("9823064024"), "9823064024");
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("9823064024").is_ok());
        assert!(validate_phone("919823064024").is_ok());
        assert!(validate_phone("").is_err());
        assert!(validate_phone("98230").is_err());
    }

    #[test]
    fn test_validate_pincode() {
        assert!(validate_pincode("425001").is_ok());
        assert!(validate_pincode("025001").is_err());
        assert!(validate_pincode("42500").is_err());
        assert!(validate_pincode("42500A").is_err());
    }

    #[test]
    fn test_validate_gst_number() {
        assert!(validate_gst_number("27ABCDE1234F1Z5").is_ok());
        assert!(validate_gst_number("27abcde1234f1z5").is_ok());
        assert!(validate_gst_number("27ABCDE1234F0Z5").is_err()); // entity 0
        assert!(validate_gst_number("27ABCDE1234F1X5").is_err()); // no Z
        assert!(validate_gst_number("27ABCDE1234F1Z").is_err()); // short
        assert!(validate_gst_number("").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(5000).is_ok());
        assert!(validate_quantity(90).is_err());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-100).is_err());
    }

    #[test]
    fn test_validate_quantity_multiple() {
        assert!(validate_quantity_multiple(100, &[50, 100]).is_ok());
        assert!(validate_quantity_multiple(250, &[50, 100]).is_ok());
        assert!(matches!(
            validate_quantity_multiple(130, &[50, 100]),
            Err(CoreError::InvalidQuantityMultiple { quantity: 130, .. })
        ));
        assert!(matches!(
            validate_quantity_multiple(50, &[50, 100]),
            Err(CoreError::BelowMinimumQuantity { .. })
        ));
    }

    #[test]
    fn test_validate_registration() {
        assert!(validate_registration(&registration()).is_ok());

        let mut form = registration();
        form.is_gst_registered = true;
        assert!(validate_registration(&form).is_err());

        form.gst_number = Some("27ABCDE1234F1Z5".to_string());
        assert!(validate_registration(&form).is_ok());

        form.gst_number = Some("NOT-A-GSTIN".to_string());
        assert!(validate_registration(&form).is_err());
    }

    #[test]
    fn test_validate_delivery_address() {
        let mut address = DeliveryAddress {
            street: "Dev Ram Nagar, Old Highway".to_string(),
            city: "Jalgaon".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "425001".to_string(),
        };
        assert!(validate_delivery_address(&address).is_ok());

        address.city = "  ".to_string();
        assert!(validate_delivery_address(&address).is_err());
    }

    #[test]
    fn test_validate_product_draft() {
        let mut draft = ProductDraft {
            brand: "UltraTech".to_string(),
            grade: Grade::Opc,
            base_price: Money::from_rupees(300),
            image: "https://img.example/u.png".to_string(),
            min_quantity: 100,
            stock: 0,
        };
        assert!(validate_product_draft(&draft).is_ok());

        draft.base_price = Money::from_rupees(-1);
        assert!(validate_product_draft(&draft).is_err());

        draft.base_price = Money::zero();
        draft.stock = -5;
        assert!(validate_product_draft(&draft).is_err());
    }

    #[test]
    fn test_validate_request_order() {
        let mut draft = RequestOrderDraft {
            brand: "ACC".to_string(),
            quantity: 500,
            delivery_location: "MIDC, Jalgaon".to_string(),
            phone: "9823064024".to_string(),
            preferred_date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
        };
        assert!(validate_request_order(&draft).is_ok());

        draft.quantity = 130;
        assert!(validate_request_order(&draft).is_ok());

        draft.quantity = 80;
        assert!(matches!(
            validate_request_order(&draft),
            Err(CoreError::BelowMinimumQuantity { requested: 80, min: 100 })
        ));
    }
}
