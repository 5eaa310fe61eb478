//! @acp:module "Field Types"
//! @acp:summary "Semantic form-field types and classification candidates"
//! @acp:domain forms
//! @acp:layer model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RciError;

/// Semantic type of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    FirstName,
    LastName,
    FullName,
    Email,
    Phone,
    Url,
    Address1,
    Address2,
    City,
    State,
    Zip,
    Country,
    CreditCard,
    Cvv,
    Expiration,
}

impl FieldType {
    /// All field types, in declaration order
    pub fn all() -> &'static [FieldType] {
        &[
            FieldType::FirstName,
            FieldType::LastName,
            FieldType::FullName,
            FieldType::Email,
            FieldType::Phone,
            FieldType::Url,
            FieldType::Address1,
            FieldType::Address2,
            FieldType::City,
            FieldType::State,
            FieldType::Zip,
            FieldType::Country,
            FieldType::CreditCard,
            FieldType::Cvv,
            FieldType::Expiration,
        ]
    }

    /// Tag used on the wire, e.g. `"firstName"`
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::FirstName => "firstName",
            FieldType::LastName => "lastName",
            FieldType::FullName => "fullName",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Url => "url",
            FieldType::Address1 => "address1",
            FieldType::Address2 => "address2",
            FieldType::City => "city",
            FieldType::State => "state",
            FieldType::Zip => "zip",
            FieldType::Country => "country",
            FieldType::CreditCard => "creditCard",
            FieldType::Cvv => "cvv",
            FieldType::Expiration => "expiration",
        }
    }

    /// Human-readable menu label
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::FirstName => "First Name",
            FieldType::LastName => "Last Name",
            FieldType::FullName => "Full Name",
            FieldType::Email => "Email",
            FieldType::Phone => "Phone",
            FieldType::Url => "URL",
            FieldType::Address1 => "Address",
            FieldType::Address2 => "Address Line 2",
            FieldType::City => "City",
            FieldType::State => "State",
            FieldType::Zip => "Zip Code",
            FieldType::Country => "Country",
            FieldType::CreditCard => "Card Number",
            FieldType::Cvv => "CVV",
            FieldType::Expiration => "Expiration",
        }
    }

    /// Parse a wire tag, `None` if unknown
    pub fn from_tag(tag: &str) -> Option<FieldType> {
        FieldType::all().iter().copied().find(|t| t.as_str() == tag)
    }
}

impl FromStr for FieldType {
    type Err = RciError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::from_tag(s).ok_or_else(|| RciError::UnknownFieldType(s.to_string()))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attribute heuristic that nominated a candidate, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Signal {
    Autocomplete,
    InputType,
    Name,
    Id,
    Placeholder,
    AriaLabel,
    Label,
}

impl Signal {
    /// Evaluation order
    pub fn all() -> &'static [Signal] {
        &[
            Signal::Autocomplete,
            Signal::InputType,
            Signal::Name,
            Signal::Id,
            Signal::Placeholder,
            Signal::AriaLabel,
            Signal::Label,
        ]
    }

    /// Fixed confidence attached to candidates from this signal
    pub fn confidence(&self) -> f64 {
        match self {
            Signal::Autocomplete => 1.0,
            Signal::InputType => 0.9,
            Signal::Name => 0.8,
            Signal::Id => 0.7,
            Signal::Placeholder | Signal::AriaLabel | Signal::Label => 0.6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Autocomplete => "autocomplete",
            Signal::InputType => "input-type",
            Signal::Name => "name",
            Signal::Id => "id",
            Signal::Placeholder => "placeholder",
            Signal::AriaLabel => "aria-label",
            Signal::Label => "label",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @acp:summary "A field type proposed for a field, with its confidence in [0, 1]"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub field_type: FieldType,
    pub confidence: f64,
    /// Signal that produced the kept confidence
    pub signal: Signal,
}
