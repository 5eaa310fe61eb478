//! @acp:module "Ipsum Command"
//! @acp:summary "Print a lorem ipsum excerpt"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;
use crate::excerpt::{ExcerptGenerator, ExcerptKind};

use super::load_corpus;

/// Options for the ipsum command
#[derive(Debug, Clone)]
pub struct IpsumOptions {
    /// Excerpt to generate
    pub kind: ExcerptKind,
    /// Start at a random sentence or paragraph
    pub randomize: bool,
    /// Directory relative corpus paths resolve against
    pub base: PathBuf,
    /// Output as JSON with the start index
    pub json: bool,
}

/// Execute the ipsum command
pub fn execute_ipsum(options: IpsumOptions, config: &Config) -> Result<()> {
    let corpus = load_corpus(config, &options.base)?;
    let generator = ExcerptGenerator::new(&corpus);

    let excerpt = generator.generate_with_rng(options.kind.request(options.randomize), &mut rand::rng());

    if options.json {
        println!("{}", serde_json::to_string_pretty(&excerpt)?);
    } else {
        println!("{}", excerpt.text);
        tracing::debug!(
            "Generated {} starting at {:?} {}",
            options.kind,
            excerpt.unit,
            excerpt.start
        );
    }

    Ok(())
}
