//! Form Parsing
//!
//! Turns raw form input into API payloads. The API stays the authority on
//! validity; these checks only catch what the user can fix before sending.

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};

use crate::domain::{Food, FoodStatus, FoodUpdate, NewFood, UserProfile};
use crate::error::FormError;
use crate::listing::parse_expiry_in;

/// Donor name used when the profile has none
pub const UNKNOWN_DONOR: &str = "Unknown Donor";

/// Raw "add food" form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddFoodForm {
    pub name: String,
    pub image: String,
    pub quantity: String,
    pub location: String,
    pub expire_date: String,
    pub notes: String,
}

impl AddFoodForm {
    /// Build the creation payload, attributing the listing to `donor`.
    /// The expiry input is wall-clock time in the browser's zone.
    pub fn into_new_food(&self, donor: &UserProfile) -> Result<NewFood, FormError> {
        self.into_new_food_in(donor, &Local)
    }

    /// [`AddFoodForm::into_new_food`] with the expiry read in `tz`
    pub fn into_new_food_in<Tz: TimeZone>(
        &self,
        donor: &UserProfile,
        tz: &Tz,
    ) -> Result<NewFood, FormError> {
        let name = required(&self.name, "the food name")?;
        if self.expire_date.trim().is_empty() {
            return Err(FormError::MissingExpiry);
        }
        let expiry = parse_expiry_in(&self.expire_date, tz).ok_or(FormError::InvalidExpiry)?;
        let quantity = parse_quantity(&self.quantity)?;

        Ok(NewFood {
            name,
            image: self.image.trim().to_string(),
            quantity,
            location: self.location.trim().to_string(),
            expire_date: to_iso(expiry),
            notes: self.notes.trim().to_string(),
            status: FoodStatus::Available,
            donor_name: donor.display_name_or(UNKNOWN_DONOR),
            donor_email: donor.email.clone(),
            donor_image: donor.photo_url.clone().filter(|url| !url.trim().is_empty()),
            request_count: 0,
        })
    }
}

/// Raw "edit listing" form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditFoodForm {
    pub name: String,
    pub quantity: String,
    pub location: String,
}

impl EditFoodForm {
    /// Pre-fill from an existing listing
    pub fn from_food(food: &Food) -> Self {
        Self {
            name: food.name.clone(),
            quantity: food.quantity.to_string(),
            location: food.location.clone(),
        }
    }

    pub fn to_update(&self) -> Result<FoodUpdate, FormError> {
        Ok(FoodUpdate {
            name: required(&self.name, "the food name")?,
            quantity: parse_quantity(&self.quantity)?,
            location: self.location.trim().to_string(),
        })
    }
}

/// Email/password sign-in input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Trimmed email and the password, both required
    pub fn validate(&self) -> Result<(String, String), FormError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        Ok((email.to_string(), self.password.clone()))
    }
}

/// Account creation input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub photo_url: String,
    pub email: String,
    pub password: String,
}

/// Validated registration data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub display_name: String,
    pub photo_url: Option<String>,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<Registration, FormError> {
        let display_name = required(&self.name, "your full name")?;
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        let photo_url = Some(self.photo_url.trim().to_string()).filter(|url| !url.is_empty());
        Ok(Registration {
            display_name,
            photo_url,
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Whether `user` may request `food`
pub fn check_request_eligibility(user: Option<&UserProfile>, food: &Food) -> Result<(), FormError> {
    let user = user.ok_or(FormError::NotSignedIn)?;
    if food.is_donated_by(&user.email) {
        return Err(FormError::OwnListing);
    }
    Ok(())
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

fn parse_quantity(raw: &str) -> Result<i64, FormError> {
    raw.trim().parse::<i64>().map_err(|_| FormError::InvalidQuantity)
}

fn to_iso(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donor() -> UserProfile {
        UserProfile {
            uid: "u1".into(),
            email: "ana@example.com".into(),
            display_name: None,
            photo_url: Some(String::new()),
        }
    }

    fn form() -> AddFoodForm {
        AddFoodForm {
            name: " Soup ".into(),
            image: "https://img.example/soup.png".into(),
            quantity: "8".into(),
            location: "Hall B".into(),
            expire_date: "2026-06-01T18:30".into(),
            notes: "vegan".into(),
        }
    }

    #[test]
    fn test_add_food_payload() {
        let food = form().into_new_food_in(&donor(), &Utc).unwrap();
        assert_eq!(food.name, "Soup");
        assert_eq!(food.quantity, 8);
        assert_eq!(food.expire_date, "2026-06-01T18:30:00.000Z");
        assert_eq!(food.status, FoodStatus::Available);
        assert_eq!(food.donor_name, UNKNOWN_DONOR);
        assert_eq!(food.donor_email, "ana@example.com");
        assert_eq!(food.donor_image, None);
        assert_eq!(food.request_count, 0);
    }

    #[test]
    fn test_add_food_expiry_uses_donor_offset() {
        let dhaka = chrono::FixedOffset::east_opt(6 * 3600).unwrap();
        let food = form().into_new_food_in(&donor(), &dhaka).unwrap();
        assert_eq!(food.expire_date, "2026-06-01T12:30:00.000Z");
    }

    #[test]
    fn test_add_food_expiry_errors() {
        let mut missing = form();
        missing.expire_date = " ".into();
        assert_eq!(missing.into_new_food(&donor()), Err(FormError::MissingExpiry));

        let mut invalid = form();
        invalid.expire_date = "next week".into();
        assert_eq!(invalid.into_new_food(&donor()), Err(FormError::InvalidExpiry));
    }

    #[test]
    fn test_add_food_quantity_must_be_integer() {
        let mut bad = form();
        bad.quantity = "lots".into();
        assert_eq!(bad.into_new_food(&donor()), Err(FormError::InvalidQuantity));
    }

    #[test]
    fn test_edit_form_round_trip_from_listing() {
        let mut food: Food = serde_json::from_value(serde_json::json!({
            "_id": "1", "name": "Pasta", "quantity": 3, "location": "Depot"
        }))
        .unwrap();
        let mut edit = EditFoodForm::from_food(&food);
        assert_eq!(edit.quantity, "3");
        edit.quantity = "5".into();
        let update = edit.to_update().unwrap();
        food.apply_update(&update);
        assert_eq!(food.quantity, 5);
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm { email: "   ".into(), password: "secret".into() };
        assert_eq!(form.validate(), Err(FormError::MissingCredentials));
        let form = LoginForm { email: " a@b.c ".into(), password: "secret".into() };
        assert_eq!(form.validate().unwrap().0, "a@b.c");
    }

    #[test]
    fn test_register_optional_photo() {
        let form = RegisterForm {
            name: "Bo".into(),
            photo_url: "  ".into(),
            email: "bo@example.com".into(),
            password: "hunter22".into(),
        };
        let registration = form.validate().unwrap();
        assert_eq!(registration.photo_url, None);
        assert_eq!(registration.display_name, "Bo");
    }

    #[test]
    fn test_request_eligibility() {
        let food: Food = serde_json::from_value(serde_json::json!({
            "_id": "1", "donorEmail": "ana@example.com"
        }))
        .unwrap();
        assert_eq!(check_request_eligibility(None, &food), Err(FormError::NotSignedIn));
        assert_eq!(check_request_eligibility(Some(&donor()), &food), Err(FormError::OwnListing));

        let other = UserProfile { email: "bo@example.com".into(), ..donor() };
        assert_eq!(check_request_eligibility(Some(&other), &food), Ok(()));

        // Addresses are compared exactly
        let differently_cased = UserProfile { email: "Ana@Example.com".into(), ..donor() };
        assert_eq!(check_request_eligibility(Some(&differently_cased), &food), Ok(()));
    }
}
