//! @acp:module "Synthetic Values"
//! @acp:summary "Plausible fake values per field type, picked from fixed pools"
//! @acp:domain forms
//! @acp:layer logic
//!
//! Every generator call draws fresh randomness, so two previews of the same
//! field type usually differ. Use [`generate_identity`] when several fields
//! should agree with each other (same person across name and email).

pub mod identity;
pub mod pools;

pub use identity::{generate_identity, generate_identity_with_rng, Identity};

use chrono::Datelike;
use rand::{Rng, RngCore};

use crate::classify::FieldType;
use pools::*;

/// Value-producing function for one field type
pub type Generator = fn(&mut dyn RngCore) -> String;

/// @acp:summary "Generator for a field type"
pub fn generator(field_type: FieldType) -> Generator {
    match field_type {
        FieldType::FirstName => |rng| first_name(rng),
        FieldType::LastName => |rng| last_name(rng),
        FieldType::FullName => |rng| full_name(rng),
        FieldType::Email => |rng| email(rng),
        FieldType::Phone => |rng| phone(rng),
        FieldType::Url => |_| url(),
        FieldType::Address1 => |rng| address1(rng),
        FieldType::Address2 => |rng| address2(rng),
        FieldType::City => |rng| city(rng),
        FieldType::State => |rng| state(rng),
        FieldType::Zip => |rng| zip(rng),
        FieldType::Country => |rng| country(rng),
        FieldType::CreditCard => |_| credit_card(),
        FieldType::Cvv => |rng| cvv(rng),
        FieldType::Expiration => |rng| expiration(rng),
    }
}

/// @acp:summary "Generator for a field type tag; absent for unknown tags"
pub fn generator_for(tag: &str) -> Option<Generator> {
    FieldType::from_tag(tag).map(generator)
}

/// Generate one value using the thread-local random source
pub fn generate(field_type: FieldType) -> String {
    generate_with_rng(field_type, &mut rand::rng())
}

pub fn generate_with_rng(field_type: FieldType, rng: &mut dyn RngCore) -> String {
    generator(field_type)(rng)
}

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, FIRST_NAMES).to_string()
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, LAST_NAMES).to_string()
}

pub fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    email_for(first, last)
}

/// `first.last@example.com`, lower-cased
pub fn email_for(first: &str, last: &str) -> String {
    format!(
        "{}.{}@{}",
        first.to_lowercase(),
        last.to_lowercase(),
        EMAIL_DOMAIN
    )
}

pub fn phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}{}", PHONE_PREFIX, random_digits(rng, 4))
}

pub fn url() -> String {
    EXAMPLE_URL.to_string()
}

pub fn address1<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", random_digits(rng, 3), pick(rng, STREETS))
}

pub fn address2<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, UNITS).to_string()
}

pub fn city<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, CITIES).to_string()
}

pub fn state<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, STATES).to_string()
}

pub fn zip<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_digits(rng, 5)
}

pub fn country<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, COUNTRIES).to_string()
}

pub fn credit_card() -> String {
    TEST_CARD_NUMBER.to_string()
}

pub fn cvv<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_digits(rng, 3)
}

/// `MM/YY`, one to five years after the current year
pub fn expiration<R: Rng + ?Sized>(rng: &mut R) -> String {
    expiration_after(chrono::Local::now().year(), rng)
}

/// `MM/YY`, one to five years after `current_year`
pub fn expiration_after<R: Rng + ?Sized>(current_year: i32, rng: &mut R) -> String {
    let month: u32 = rng.random_range(1..=12);
    let year = current_year + rng.random_range(1..=5);
    format!("{:02}/{:02}", month, year.rem_euclid(100))
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

fn random_digits<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_email_shape() {
        let pattern = Regex::new(r"^[a-z]+\.[a-z]+@example\.com$").unwrap();
        let mut rng = rng();
        for _ in 0..100 {
            let value = email(&mut rng);
            assert!(pattern.is_match(&value), "bad email: {}", value);
        }
        assert!(pattern.is_match(&generate(FieldType::Email)));
    }

    #[test]
    fn test_credit_card_literal() {
        assert_eq!(credit_card(), "4242 4242 4242 4242");
        let mut rng = rng();
        assert_eq!(
            generate_with_rng(FieldType::CreditCard, &mut rng),
            "4242 4242 4242 4242"
        );
    }

    #[test]
    fn test_phone_and_digits() {
        let pattern = Regex::new(r"^\(555\) 555-\d{4}$").unwrap();
        let mut rng = rng();
        for _ in 0..50 {
            assert!(pattern.is_match(&phone(&mut rng)));
            let zip = zip(&mut rng);
            assert_eq!(zip.len(), 5);
            assert!(zip.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(cvv(&mut rng).len(), 3);
        }
    }

    #[test]
    fn test_address_values() {
        let mut rng = rng();
        let address = address1(&mut rng);
        let (number, street) = address.split_once(' ').unwrap();
        assert_eq!(number.len(), 3);
        assert!(STREETS.contains(&street));
        assert!(UNITS.contains(&address2(&mut rng).as_str()));
    }

    #[test]
    fn test_pool_picks() {
        let mut rng = rng();
        for _ in 0..50 {
            assert!(FIRST_NAMES.contains(&first_name(&mut rng).as_str()));
            assert!(LAST_NAMES.contains(&last_name(&mut rng).as_str()));
            assert!(CITIES.contains(&city(&mut rng).as_str()));
            assert!(STATES.contains(&state(&mut rng).as_str()));
            assert!(COUNTRIES.contains(&country(&mut rng).as_str()));
        }
        let full = full_name(&mut rng);
        let (first, last) = full.split_once(' ').unwrap();
        assert!(FIRST_NAMES.contains(&first));
        assert!(LAST_NAMES.contains(&last));
    }

    #[test]
    fn test_expiration_range() {
        let mut rng = rng();
        for _ in 0..200 {
            let value = expiration_after(2026, &mut rng);
            let (month, year) = value.split_once('/').unwrap();
            let month: u32 = month.parse().unwrap();
            let year: u32 = year.parse().unwrap();
            assert_eq!(value.len(), 5);
            assert!((1..=12).contains(&month));
            assert!((27..=31).contains(&year));
        }
    }

    #[test]
    fn test_expiration_century_wrap() {
        let mut rng = rng();
        let value = expiration_after(2099, &mut rng);
        let year: u32 = value[3..].parse().unwrap();
        assert!(year <= 4);
    }

    #[test]
    fn test_generator_lookup() {
        assert!(generator_for("zip").is_some());
        assert!(generator_for("ssn").is_none());
        assert!(generator_for("").is_none());

        let mut rng = rng();
        let value = generator_for("url").map(|g| g(&mut rng));
        assert_eq!(value.as_deref(), Some("https://www.example.com"));
    }

    #[test]
    fn test_every_type_generates() {
        let mut rng = rng();
        for field_type in FieldType::all() {
            assert!(!generate_with_rng(*field_type, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_calls_are_independent() {
        let mut rng = rng();
        let values: std::collections::HashSet<String> =
            (0..20).map(|_| full_name(&mut rng)).collect();
        assert!(values.len() > 1);
    }
}
