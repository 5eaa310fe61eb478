//! @acp:module "Classification Signals"
//! @acp:summary "Lookup tables and ordered regex rules mapping attributes to field types"
//! @acp:domain forms
//! @acp:layer logic

use std::sync::LazyLock;

use regex::Regex;

use super::types::FieldType;

/// Ordered (pattern, type) rules shared by the name, id, placeholder, aria-label and label signals
static FIELD_PATTERNS: LazyLock<Vec<(Regex, FieldType)>> = LazyLock::new(|| {
    [
        (r"first[_-]?name|fname|given[_-]?name", FieldType::FirstName),
        (r"last[_-]?name|lname|surname|family[_-]?name", FieldType::LastName),
        (r"full[_-]?name|your[_-]?name|^name$", FieldType::FullName),
        (r"e[_-]?mail|email[_-]?addr", FieldType::Email),
        (r"phone|tel(?:ephone)?|mobile|cell", FieldType::Phone),
        (r"\burl\b|website|homepage", FieldType::Url),
        (r"address[_-]?(?:1|line1)|street", FieldType::Address1),
        (r"address[_-]?(?:2|line2)|apt|suite|unit", FieldType::Address2),
        (r"\bcity\b|locality", FieldType::City),
        (r"\bstate\b|province|region", FieldType::State),
        (r"\bzip\b|postal[_-]?code|postcode", FieldType::Zip),
        (r"\bcountry\b", FieldType::Country),
        (r"card[_-]?num|cc[_-]?num|credit[_-]?card", FieldType::CreditCard),
        (r"\bcvv\b|\bcvc\b|\bcsc\b|security[_-]?code", FieldType::Cvv),
        (r"\bexp(?:ir(?:y|ation))?\b|mm\s*/?\s*yy", FieldType::Expiration),
    ]
    .into_iter()
    // Word boundaries are ASCII-only: an accented letter does not join a word
    .map(|(pattern, field_type)| {
        let pattern = format!("(?i){}", pattern.replace(r"\b", r"(?-u:\b)"));
        (Regex::new(&pattern).unwrap(), field_type)
    })
    .collect()
});

/// Map an `autocomplete` token to a field type
pub fn autocomplete_type(token: &str) -> Option<FieldType> {
    match token.trim().to_lowercase().as_str() {
        "given-name" | "additional-name" => Some(FieldType::FirstName),
        "family-name" => Some(FieldType::LastName),
        "name" => Some(FieldType::FullName),
        "email" => Some(FieldType::Email),
        "tel" | "tel-national" => Some(FieldType::Phone),
        "url" => Some(FieldType::Url),
        "street-address" | "address-line1" => Some(FieldType::Address1),
        "address-line2" => Some(FieldType::Address2),
        "address-level2" => Some(FieldType::City),
        "address-level1" => Some(FieldType::State),
        "postal-code" => Some(FieldType::Zip),
        "country-name" | "country" => Some(FieldType::Country),
        "cc-number" => Some(FieldType::CreditCard),
        "cc-csc" => Some(FieldType::Cvv),
        "cc-exp" => Some(FieldType::Expiration),
        _ => None,
    }
}

/// Map a normalized input `type` to a field type
pub fn input_type_type(input_type: &str) -> Option<FieldType> {
    match input_type {
        "email" => Some(FieldType::Email),
        "tel" => Some(FieldType::Phone),
        "url" => Some(FieldType::Url),
        _ => None,
    }
}

/// First pattern rule matching `text`, in table order
pub fn match_patterns(text: &str) -> Option<FieldType> {
    if text.is_empty() {
        return None;
    }
    FIELD_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, field_type)| *field_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autocomplete_tokens() {
        assert_eq!(autocomplete_type("given-name"), Some(FieldType::FirstName));
        assert_eq!(autocomplete_type("  Family-Name "), Some(FieldType::LastName));
        assert_eq!(autocomplete_type("cc-exp"), Some(FieldType::Expiration));
        assert_eq!(autocomplete_type("country"), Some(FieldType::Country));
        assert_eq!(autocomplete_type("off"), None);
        assert_eq!(autocomplete_type(""), None);
    }

    #[test]
    fn test_input_types() {
        assert_eq!(input_type_type("email"), Some(FieldType::Email));
        assert_eq!(input_type_type("tel"), Some(FieldType::Phone));
        assert_eq!(input_type_type("text"), None);
    }

    #[test]
    fn test_name_patterns() {
        assert_eq!(match_patterns("first_name"), Some(FieldType::FirstName));
        assert_eq!(match_patterns("FName"), Some(FieldType::FirstName));
        assert_eq!(match_patterns("surname"), Some(FieldType::LastName));
        assert_eq!(match_patterns("Name"), Some(FieldType::FullName));
        assert_eq!(match_patterns("your-name"), Some(FieldType::FullName));
        assert_eq!(match_patterns("E-mail"), Some(FieldType::Email));
        assert_eq!(match_patterns("mobile"), Some(FieldType::Phone));
        assert_eq!(match_patterns("Website"), Some(FieldType::Url));
        assert_eq!(match_patterns("address_line1"), Some(FieldType::Address1));
        assert_eq!(match_patterns("suite"), Some(FieldType::Address2));
        assert_eq!(match_patterns("City"), Some(FieldType::City));
        assert_eq!(match_patterns("province"), Some(FieldType::State));
        assert_eq!(match_patterns("postal-code"), Some(FieldType::Zip));
        assert_eq!(match_patterns("Country"), Some(FieldType::Country));
        assert_eq!(match_patterns("cardNumber"), Some(FieldType::CreditCard));
        assert_eq!(match_patterns("CVC"), Some(FieldType::Cvv));
        assert_eq!(match_patterns("MM / YY"), Some(FieldType::Expiration));
        assert_eq!(match_patterns("exp"), Some(FieldType::Expiration));
    }

    #[test]
    fn test_ascii_word_boundaries() {
        assert_eq!(match_patterns("écity"), Some(FieldType::City));
        assert_eq!(match_patterns("Zip/Código"), Some(FieldType::Zip));
        assert_eq!(match_patterns("velocity"), None);
        assert_eq!(match_patterns("zipper"), None);
    }

    #[test]
    fn test_word_boundaries() {
        // "username" contains neither a whole-word "name" nor any other rule
        assert_eq!(match_patterns("username"), None);
        assert_eq!(match_patterns("statement"), None);
        assert_eq!(match_patterns("curl"), None);
        assert_eq!(match_patterns("export"), None);
    }

    #[test]
    fn test_first_match_wins() {
        // Matches both the email and address1 rules; email is listed first
        assert_eq!(match_patterns("email street"), Some(FieldType::Email));
        // "telephone_country" matches phone before country
        assert_eq!(match_patterns("telephone_country"), Some(FieldType::Phone));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(match_patterns(""), None);
        assert_eq!(match_patterns("comments"), None);
    }
}
