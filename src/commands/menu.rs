//! @acp:module "Menu Command"
//! @acp:summary "Build the insertion menu for a field and pick an entry"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Select};

use crate::config::Config;
use crate::excerpt::ExcerptGenerator;
use crate::insert::{insert_mode, splice, Selection};
use crate::popup::{MenuItem, PopupSession, IPSUM_HEADING, SUGGESTIONS_HEADING};

use super::{load_corpus, FieldArgs};

/// Preview width before truncation
const PREVIEW_WIDTH: usize = 40;

/// Options for the menu command
#[derive(Debug, Clone)]
pub struct MenuOptions {
    /// JSON field descriptor file (stdin if neither file nor flags given)
    pub file: Option<PathBuf>,
    pub field: FieldArgs,
    /// Insert the entry at this index instead of listing
    pub pick: Option<usize>,
    /// Choose an entry with an interactive prompt
    pub interactive: bool,
    /// Current field value; the chosen text is inserted at its end
    pub value: Option<String>,
    pub randomize: bool,
    /// Directory relative corpus paths resolve against
    pub base: PathBuf,
}

/// Execute the menu command
pub fn execute_menu(options: MenuOptions, config: &Config) -> Result<()> {
    let field = options.field.clone().resolve(options.file.as_ref())?;
    if !field.is_popup_target() {
        println!("{} The menu is not offered for this field", style("○").dim());
        return Ok(());
    }

    let corpus = load_corpus(config, &options.base)?;
    let generator = ExcerptGenerator::new(&corpus);
    let session = PopupSession::open(field, options.randomize, &mut rand::rng());

    let choice = if options.interactive {
        choose_interactive(&session)?
    } else {
        options.pick
    };

    let Some(index) = choice else {
        print_menu(&session);
        return Ok(());
    };

    let text = session
        .resolve(index, &generator)
        .ok_or_else(|| anyhow!("No menu entry at index {}", index))?;

    match options.value {
        Some(value) => {
            let spliced = splice(session.field(), &value, Selection::end_of(&value), &text);
            tracing::debug!(
                "Inserted with {:?}, caret at {}",
                insert_mode(session.field()),
                spliced.caret
            );
            println!("{}", spliced.value);
        }
        None => println!("{}", text),
    }

    Ok(())
}

fn print_menu(session: &PopupSession) {
    let mut index = 0;

    if !session.suggestions().is_empty() {
        println!("{}", style(SUGGESTIONS_HEADING.to_uppercase()).dim().bold());
        for item in session.suggestions() {
            print_item(index, item);
            index += 1;
        }
        println!();
    }

    println!("{}", style(IPSUM_HEADING.to_uppercase()).dim().bold());
    for item in session.ipsum_items() {
        print_item(index, item);
        index += 1;
    }
}

fn print_item(index: usize, item: &MenuItem) {
    match &item.preview {
        Some(preview) => println!(
            "  {:>2}. {:<16} {}",
            index,
            item.label,
            style(truncate(preview, PREVIEW_WIDTH)).dim()
        ),
        None => println!("  {:>2}. {}", index, item.label),
    }
}

fn choose_interactive(session: &PopupSession) -> Result<Option<usize>> {
    let entries: Vec<String> = session
        .items()
        .iter()
        .map(|item| match &item.preview {
            Some(preview) => format!("{}  {}", item.label, truncate(preview, PREVIEW_WIDTH)),
            None => item.label.clone(),
        })
        .collect();

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Insert")
        .items(&entries)
        .default(0)
        .interact_opt()?;

    Ok(choice)
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
