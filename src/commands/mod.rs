//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod classify;
pub mod fake;
pub mod ipsum;
pub mod menu;
pub mod settings;

pub use classify::{execute_classify, ClassifyOptions, FieldArgs};
pub use fake::{execute_fake, execute_identity, FakeOptions, IdentityOptions};
pub use ipsum::{execute_ipsum, IpsumOptions};
pub use menu::{execute_menu, MenuOptions};
pub use settings::{execute_settings, SettingsOptions};

use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::classify::FieldDescriptor;
use crate::config::Config;
use crate::corpus::CorpusIndex;

/// Corpus selected by the project config, or the built-in one
pub fn load_corpus(config: &Config, base: &Path) -> Result<Cow<'static, CorpusIndex>> {
    match config
        .corpus_index(base)
        .context("Failed to load configured corpus")?
    {
        Some(index) => Ok(Cow::Owned(index)),
        None => Ok(Cow::Borrowed(CorpusIndex::builtin())),
    }
}

/// Read a field descriptor from a JSON file, or from stdin when no file is given
pub fn read_field(file: Option<&PathBuf>) -> Result<FieldDescriptor> {
    let json = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read field from {:?}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    serde_json::from_str(&json).context("Failed to parse field descriptor JSON")
}
