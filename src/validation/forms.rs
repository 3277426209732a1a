//! Schemas for the login, registration, category and product forms.

use crate::model::{CategoryCreate, Credentials, ProductCreate, RegistrationInput};
use crate::validation::{FieldCheck, Validate, ValidationErrors};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static GMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@gmail\.com$").expect("valid gmail pattern")
});
static LOWERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new("[a-z]").expect("valid pattern"));
static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new("[A-Z]").expect("valid pattern"));
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new("[0-9]").expect("valid pattern"));
static SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^A-Za-z0-9]").expect("valid pattern"));

pub const MAX_PRICE: f64 = 100_000.0;

impl Validate for Credentials {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        FieldCheck::new("username", &self.username)
            .required("Username is required")
            .finish(&mut errors);
        FieldCheck::new("password", &self.password)
            .required("Password is required")
            .finish(&mut errors);
        errors.into_result()
    }
}

impl Validate for RegistrationInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        FieldCheck::new("displayName", &self.display_name)
            .required("Display Name is required")
            .finish(&mut errors);
        FieldCheck::new("email", &self.email)
            .required("Email is required")
            .matches(&EMAIL, "Invalid email address")
            .matches(&GMAIL, "Must be a @gmail.com address")
            .finish(&mut errors);
        FieldCheck::new("username", &self.username)
            .required("Username is required")
            .finish(&mut errors);
        FieldCheck::new("password", &self.password)
            .required("Password is required")
            .min_chars(8, "Password must be at least 8 characters")
            .matches(&LOWERCASE, "Password must contain at least one lowercase letter")
            .matches(&UPPERCASE, "Password must contain at least one uppercase letter")
            .matches(&DIGIT, "Password must contain at least one number")
            .matches(&SPECIAL, "Password must contain at least one special character")
            .finish(&mut errors);
        FieldCheck::new("role", &self.role)
            .required("Role is required")
            .finish(&mut errors);
        errors.into_result()
    }
}

impl Validate for CategoryCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        FieldCheck::new("name", &self.name)
            .required("Category name is required")
            .min_chars(3, "Category name must be at least 3 characters")
            .max_chars(30, "Category name cannot exceed 30 characters")
            .finish(&mut errors);
        FieldCheck::new("description", &self.description)
            .required("Description is required")
            .min_chars(50, "Description must be at least 50 characters")
            .max_chars(500, "Description cannot exceed 500 characters")
            .finish(&mut errors);
        errors.into_result()
    }
}

impl Validate for ProductCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        FieldCheck::new("code", &self.code)
            .required("Code is a required field")
            .max_chars(6, "Code cannot exceed 6 characters")
            .finish(&mut errors);
        FieldCheck::new("name", &self.name)
            .required("Name is a required field")
            .min_chars(3, "Name must be at least 3 characters")
            .max_chars(30, "Name cannot exceed 30 characters")
            .finish(&mut errors);
        FieldCheck::new("excerpt", &self.excerpt)
            .required("Excerpt is a required field")
            .max_chars(200, "Excerpt cannot exceed 200 characters")
            .finish(&mut errors);
        FieldCheck::new("description", &self.description)
            .required("Description is a required field")
            .min_chars(30, "Description must be at least 30 characters")
            .max_chars(500, "Description cannot exceed 500 characters")
            .finish(&mut errors);
        FieldCheck::new("category", &self.category)
            .required("Category is a required field")
            .finish(&mut errors);

        let price_error = match self.price {
            None => Some("Price is a required field"),
            Some(price) if price.is_nan() => Some("Price is a required field"),
            Some(price) if price <= 0.0 => Some("Price must be positive"),
            Some(price) if price > MAX_PRICE => Some("Price cannot exceed 100,000"),
            Some(_) => None,
        };
        if let Some(message) = price_error {
            errors.push("price", message.to_string());
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegistrationInput {
        RegistrationInput {
            display_name: "Alice".into(),
            email: "alice.b@gmail.com".into(),
            username: "alice".into(),
            password: "Secr3t!pass".into(),
            role: "r1".into(),
        }
    }

    fn product() -> ProductCreate {
        ProductCreate {
            code: "LMP01".into(),
            name: "Desk lamp".into(),
            excerpt: "A small lamp".into(),
            description: "A small brass desk lamp with a warm bulb.".into(),
            category: "c1".into(),
            price: Some(49.9),
            status: true,
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let errors = Credentials::new("", "").validate().unwrap_err();
        assert_eq!(errors.get("username"), Some("Username is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert!(Credentials::new("a", "b").validate().is_ok());
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(registration().validate().is_ok());
    }

    #[test]
    fn test_registration_email_rules() {
        let mut input = registration();
        input.email = String::new();
        assert_eq!(input.validate().unwrap_err().get("email"), Some("Email is required"));

        input.email = "not-an-email".into();
        assert_eq!(input.validate().unwrap_err().get("email"), Some("Invalid email address"));

        input.email = "alice@example.com".into();
        assert_eq!(
            input.validate().unwrap_err().get("email"),
            Some("Must be a @gmail.com address")
        );
    }

    #[test]
    fn test_registration_password_rules_in_order() {
        let cases = [
            ("", "Password is required"),
            ("Ab1!", "Password must be at least 8 characters"),
            ("ABCDEFG1!", "Password must contain at least one lowercase letter"),
            ("abcdefg1!", "Password must contain at least one uppercase letter"),
            ("Abcdefgh!", "Password must contain at least one number"),
            ("Abcdefgh1", "Password must contain at least one special character"),
        ];
        for (password, expected) in cases {
            let mut input = registration();
            input.password = password.into();
            let errors = input.validate().unwrap_err();
            assert_eq!(errors.len(), 1, "{}", password);
            assert_eq!(errors.get("password"), Some(expected), "{}", password);
        }
    }

    #[test]
    fn test_registration_reports_fields_in_form_order() {
        let input = RegistrationInput {
            display_name: String::new(),
            email: String::new(),
            username: String::new(),
            password: String::new(),
            role: String::new(),
        };
        let fields: Vec<_> = input.validate().unwrap_err().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["displayName", "email", "username", "password", "role"]);
    }

    #[test]
    fn test_category_bounds() {
        let short = CategoryCreate {
            name: "ab".into(),
            description: "x".repeat(49),
        };
        let errors = short.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Category name must be at least 3 characters"));
        assert_eq!(errors.get("description"), Some("Description must be at least 50 characters"));

        let long = CategoryCreate {
            name: "n".repeat(31),
            description: "x".repeat(501),
        };
        let errors = long.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Category name cannot exceed 30 characters"));
        assert_eq!(errors.get("description"), Some("Description cannot exceed 500 characters"));

        let ok = CategoryCreate {
            name: "Lamps".into(),
            description: "x".repeat(50),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_product_valid_and_price_rules() {
        assert!(product().validate().is_ok());

        let cases = [
            (None, "Price is a required field"),
            (Some(f64::NAN), "Price is a required field"),
            (Some(0.0), "Price must be positive"),
            (Some(-3.0), "Price must be positive"),
            (Some(100_000.01), "Price cannot exceed 100,000"),
        ];
        for (price, expected) in cases {
            let mut input = product();
            input.price = price;
            assert_eq!(input.validate().unwrap_err().get("price"), Some(expected));
        }

        let mut at_limit = product();
        at_limit.price = Some(MAX_PRICE);
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_product_text_rules() {
        let mut input = product();
        input.code = "TOOLONG".into();
        input.name = "ab".into();
        input.excerpt = String::new();
        input.description = "too short".into();
        input.category = String::new();

        let errors = input.validate().unwrap_err();
        assert_eq!(errors.get("code"), Some("Code cannot exceed 6 characters"));
        assert_eq!(errors.get("name"), Some("Name must be at least 3 characters"));
        assert_eq!(errors.get("excerpt"), Some("Excerpt is a required field"));
        assert_eq!(errors.get("description"), Some("Description must be at least 30 characters"));
        assert_eq!(errors.get("category"), Some("Category is a required field"));
        assert_eq!(errors.get("price"), None);
    }
}
