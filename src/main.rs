#![forbid(unsafe_code)]
//! RCI Command Line Interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use rci::commands::{
    execute_classify, execute_fake, execute_identity, execute_ipsum, execute_menu,
    execute_settings, ClassifyOptions, FakeOptions, FieldArgs, IdentityOptions, IpsumOptions,
    MenuOptions, SettingsOptions,
};
use rci::config::{resolve_randomize, Settings, CONFIG_FILE};
use rci::{Config, ExcerptKind, FieldKind, FieldType};

#[derive(Parser)]
#[command(name = "rci")]
#[command(about = "Lorem ipsum and fake form data for editable fields")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a lorem ipsum excerpt
    Ipsum {
        /// Excerpt type: 1-sentence, 2-sentences, 1-paragraph, 2-paragraphs
        #[arg(default_value = "1-paragraph")]
        kind: ExcerptKind,

        /// Start at a random sentence or paragraph
        #[arg(short, long)]
        randomize: bool,

        /// Output as JSON with the start index
        #[arg(long)]
        json: bool,
    },

    /// Detect the semantic type of a form field
    Classify {
        /// Field descriptor JSON file (reads stdin if neither file nor flags are given)
        file: Option<PathBuf>,

        #[command(flatten)]
        field: FieldFlags,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate fake values for a field type
    Fake {
        /// Field type (firstName, email, zip, creditCard, ...)
        field_type: FieldType,

        /// Number of values
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Generate a coherent fake identity
    Identity {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the insertion menu for a field and pick an entry
    Menu {
        /// Field descriptor JSON file (reads stdin if neither file nor flags are given)
        file: Option<PathBuf>,

        #[command(flatten)]
        field: FieldFlags,

        /// Insert the entry at this index
        #[arg(long)]
        pick: Option<usize>,

        /// Choose an entry interactively
        #[arg(short, long)]
        interactive: bool,

        /// Current field value to insert into
        #[arg(long)]
        value: Option<String>,

        /// Start excerpts at a random point
        #[arg(short, long)]
        randomize: bool,
    },

    /// Show or change user settings
    Settings {
        /// Persist the randomize setting
        #[arg(long)]
        randomize: Option<bool>,

        /// Settings file (default: user config directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

/// Field attributes shared by classify and menu
#[derive(Args, Clone, Debug, Default)]
struct FieldFlags {
    /// Element kind
    #[arg(long, value_enum, default_value = "input")]
    kind: FieldKindArg,

    /// Input type attribute
    #[arg(long = "type")]
    input_type: Option<String>,

    /// Name attribute
    #[arg(long)]
    name: Option<String>,

    /// Id attribute
    #[arg(long)]
    id: Option<String>,

    /// Placeholder attribute
    #[arg(long)]
    placeholder: Option<String>,

    /// aria-label attribute
    #[arg(long)]
    aria_label: Option<String>,

    /// Associated label text
    #[arg(long)]
    label: Option<String>,

    /// Autocomplete attribute
    #[arg(long)]
    autocomplete: Option<String>,

    /// Field is read-only
    #[arg(long)]
    read_only: bool,

    /// Field is disabled
    #[arg(long)]
    disabled: bool,
}

/// Element kind for field flags
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum FieldKindArg {
    #[default]
    Input,
    Textarea,
    ContentEditable,
}

impl From<FieldFlags> for FieldArgs {
    fn from(flags: FieldFlags) -> Self {
        FieldArgs {
            kind: match flags.kind {
                FieldKindArg::Input => FieldKind::Input,
                FieldKindArg::Textarea => FieldKind::Textarea,
                FieldKindArg::ContentEditable => FieldKind::ContentEditable,
            },
            input_type: flags.input_type,
            name: flags.name,
            id: flags.id,
            placeholder: flags.placeholder,
            aria_label: flags.aria_label,
            label: flags.label,
            autocomplete: flags.autocomplete,
            read_only: flags.read_only,
            disabled: flags.disabled,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "rci=debug" } else { "rci=warn" };
    let filter =
        EnvFilter::try_from_env("RCI_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let config = Config::load_or_default(&cli.config)?;
    let base = cli
        .config
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    let settings = Settings::load_or_default();
    let randomize_for = |flag: bool| resolve_randomize(flag.then_some(true), &config, &settings);

    let result = match cli.command {
        Commands::Ipsum { kind, randomize, json } => {
            let options = IpsumOptions {
                kind,
                randomize: randomize_for(randomize),
                base,
                json,
            };
            execute_ipsum(options, &config)
        }

        Commands::Classify { file, field, json } => {
            let options = ClassifyOptions {
                file,
                field: field.into(),
                json,
            };
            execute_classify(options)
        }

        Commands::Fake { field_type, count } => execute_fake(FakeOptions { field_type, count }),

        Commands::Identity { json } => execute_identity(IdentityOptions { json }),

        Commands::Menu { file, field, pick, interactive, value, randomize } => {
            let options = MenuOptions {
                file,
                field: field.into(),
                pick,
                interactive,
                value,
                randomize: randomize_for(randomize),
                base,
            };
            execute_menu(options, &config)
        }

        Commands::Settings { randomize, path } => {
            execute_settings(SettingsOptions { randomize, path })
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }

    Ok(())
}
