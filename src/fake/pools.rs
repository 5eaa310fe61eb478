//! @acp:module "Sample Data Pools"
//! @acp:summary "Fixed lists that fake values are picked from"
//! @acp:domain forms
//! @acp:layer data

pub const FIRST_NAMES: &[&str] = &[
    "Jane", "Marcus", "Priya", "Liam", "Sofia", "Kenji", "Amara", "Diego", "Mei", "Oliver",
    "Fatima", "Noah",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Patel", "Nakamura", "Garcia", "Chen", "Williams", "Kim", "Andersen", "Okafor",
    "Martinez", "Johansson", "Ali",
];

pub const CITIES: &[&str] = &[
    "Springfield",
    "Portland",
    "Madison",
    "Riverside",
    "Fairview",
    "Georgetown",
    "Arlington",
    "Lakewood",
];

pub const STATES: &[&str] = &["CA", "NY", "TX", "FL", "IL", "PA", "OH", "GA", "WA", "CO"];

pub const STREETS: &[&str] = &[
    "Main St",
    "Oak Ave",
    "Maple Dr",
    "Cedar Ln",
    "Park Blvd",
    "Elm St",
    "Washington Ave",
    "Lake Rd",
];

pub const UNITS: &[&str] = &["Apt 4B", "Suite 200", "Unit 12", "Floor 3", "#301", "Apt 7"];

pub const COUNTRIES: &[&str] = &["United States", "Canada", "United Kingdom", "Australia"];

/// Country used for a coherent identity bundle
pub const IDENTITY_COUNTRY: &str = "United States";

pub const PHONE_PREFIX: &str = "(555) 555-";

pub const EXAMPLE_URL: &str = "https://www.example.com";

pub const EMAIL_DOMAIN: &str = "example.com";

/// Well-known test card number accepted by payment sandboxes
pub const TEST_CARD_NUMBER: &str = "4242 4242 4242 4242";
