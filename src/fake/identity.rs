//! @acp:module "Identity Bundle"
//! @acp:summary "One internally consistent set of fake values for multi-field autofill"
//! @acp:domain forms
//! @acp:layer logic

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pools::IDENTITY_COUNTRY;
use super::{
    address1, address2, city, credit_card, cvv, email_for, expiration, first_name, last_name,
    phone, state, url, zip,
};
use crate::classify::FieldType;

/// @acp:summary "Fake person whose name, email and address agree with each other"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub url: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub credit_card: String,
    pub cvv: String,
    pub expiration: String,
}

impl Identity {
    /// Value for one field type
    pub fn get(&self, field_type: FieldType) -> &str {
        match field_type {
            FieldType::FirstName => &self.first_name,
            FieldType::LastName => &self.last_name,
            FieldType::FullName => &self.full_name,
            FieldType::Email => &self.email,
            FieldType::Phone => &self.phone,
            FieldType::Url => &self.url,
            FieldType::Address1 => &self.address1,
            FieldType::Address2 => &self.address2,
            FieldType::City => &self.city,
            FieldType::State => &self.state,
            FieldType::Zip => &self.zip,
            FieldType::Country => &self.country,
            FieldType::CreditCard => &self.credit_card,
            FieldType::Cvv => &self.cvv,
            FieldType::Expiration => &self.expiration,
        }
    }
}

/// Generate an identity using the thread-local random source
pub fn generate_identity() -> Identity {
    generate_identity_with_rng(&mut rand::rng())
}

pub fn generate_identity_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Identity {
    let first = first_name(rng);
    let last = last_name(rng);

    Identity {
        full_name: format!("{} {}", first, last),
        email: email_for(&first, &last),
        phone: phone(rng),
        url: url(),
        address1: address1(rng),
        address2: address2(rng),
        city: city(rng),
        state: state(rng),
        zip: zip(rng),
        country: IDENTITY_COUNTRY.to_string(),
        credit_card: credit_card(),
        cvv: cvv(rng),
        expiration: expiration(rng),
        first_name: first,
        last_name: last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_identity_is_consistent() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let identity = generate_identity_with_rng(&mut rng);
            assert_eq!(
                identity.full_name,
                format!("{} {}", identity.first_name, identity.last_name)
            );
            assert_eq!(
                identity.email,
                format!(
                    "{}.{}@example.com",
                    identity.first_name.to_lowercase(),
                    identity.last_name.to_lowercase()
                )
            );
            assert_eq!(identity.country, "United States");
            assert_eq!(identity.credit_card, "4242 4242 4242 4242");
        }
    }

    #[test]
    fn test_get_covers_every_type() {
        let identity = generate_identity();
        for field_type in FieldType::all() {
            assert!(!identity.get(*field_type).is_empty());
        }
        assert_eq!(identity.get(FieldType::Email), identity.email);
    }

    #[test]
    fn test_serializes_with_tags() {
        let identity = generate_identity();
        let json = serde_json::to_value(&identity).unwrap();
        for field_type in FieldType::all() {
            assert_eq!(
                json[field_type.as_str()].as_str(),
                Some(identity.get(*field_type))
            );
        }
    }
}
