//! @acp:module "Fake Command"
//! @acp:summary "Generate fake values for a field type, or a full identity"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::classify::FieldType;
use crate::fake::{generate, generate_identity};

/// Options for the fake command
#[derive(Debug, Clone)]
pub struct FakeOptions {
    pub field_type: FieldType,
    /// Number of values to print
    pub count: usize,
}

/// Options for the identity command
#[derive(Debug, Clone)]
pub struct IdentityOptions {
    /// Output as JSON
    pub json: bool,
}

/// Execute the fake command
pub fn execute_fake(options: FakeOptions) -> Result<()> {
    for _ in 0..options.count {
        println!("{}", generate(options.field_type));
    }
    Ok(())
}

/// Execute the identity command
pub fn execute_identity(options: IdentityOptions) -> Result<()> {
    let identity = generate_identity();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&identity)?);
        return Ok(());
    }

    for field_type in FieldType::all() {
        println!(
            "  {:<15} {}",
            style(field_type.label()).bold(),
            identity.get(*field_type)
        );
    }
    Ok(())
}
