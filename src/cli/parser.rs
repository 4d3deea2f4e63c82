use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rPatients
/// CLI application to import patient records and build a daily visits worklist
#[derive(Parser)]
#[command(
    name = "rpatients",
    version = env!("CARGO_PKG_VERSION"),
    about = "Import patient records from CSV, filter them live and build a daily visits worklist",
    long_about = None
)]
pub struct Cli {
    /// Keep the rows already in the table when importing
    #[arg(
        global = true,
        long = "keep-existing",
        help = "Do not clear the patient table before an import"
    )]
    pub keep_existing: bool,

    /// Directory searched for relative CSV paths (default: Downloads)
    #[arg(global = true, long = "import-dir", value_name = "DIR")]
    pub import_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive shell (default)
    Shell,

    /// Import CSV files, print the patient table and exit
    Import {
        /// CSV files with 'Name' and 'Date' columns
        #[arg(required = true, value_name = "FILE")]
        files: Vec<String>,

        #[arg(long, short = 'd', help = "Skip rows whose name is already in the table")]
        dedup: bool,

        #[arg(long, short = 'f', help = "Only print rows whose name contains this text")]
        filter: Option<String>,

        #[arg(long, help = "Print the table as JSON")]
        json: bool,
    },
}

/// One line typed in the interactive shell.
#[derive(Parser)]
#[command(
    name = "rpatients",
    no_binary_name = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand)]
pub enum ShellCommand {
    /// Import a CSV file into the patient table
    Import {
        /// Path of the CSV file (relative paths also searched in the import dir)
        file: String,

        #[arg(long, short = 'd', help = "Skip rows whose name is already in the table")]
        dedup: bool,
    },

    /// Show only patients whose name contains the text (no text shows all)
    #[command(alias = "search")]
    Filter {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Send patient row N to the daily visits as a Recurrent visit
    Send { row: usize },

    /// Add a visit to the daily visits (New, dated today unless given)
    Add {
        name: Option<String>,

        #[arg(long = "type", short = 't', help = "Visit type: new (N) or recurrent (R)")]
        visit_type: Option<String>,

        #[arg(long, help = "Date of the first visit")]
        date: Option<String>,
    },

    /// Edit daily visit N
    Edit {
        row: usize,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "type", short = 't', help = "Visit type: new (N) or recurrent (R)")]
        visit_type: Option<String>,

        #[arg(long)]
        date: Option<String>,
    },

    /// Remove every row from the patient table
    Clear,

    /// Switch the active view
    View {
        #[arg(value_enum)]
        target: ViewArg,
    },

    /// Print the active view
    #[command(alias = "ls")]
    List {
        #[arg(long, help = "Include rows hidden by the filter")]
        all: bool,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Change a setting
    Set {
        #[arg(value_enum)]
        key: SettingKey,

        #[arg(value_enum)]
        value: Switch,
    },

    /// Print the current settings
    Config,

    /// Print the last status message
    Status,

    /// Print the activity log of this session
    Log,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ViewArg {
    #[value(alias = "patients")]
    Records,
    #[value(alias = "visits")]
    Daily,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SettingKey {
    ClearOnImport,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Switch {
    #[value(aliases = ["true", "yes"])]
    On,
    #[value(aliases = ["false", "no"])]
    Off,
}

impl Switch {
    pub fn is_on(&self) -> bool {
        matches!(self, Switch::On)
    }
}
