use clap::{Parser, Subcommand};

/// Command-line interface definition for tutorbill
/// CLI application to bill tutoring sessions from a shared workbook
#[derive(Parser)]
#[command(
    name = "tutorbill",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate tutoring invoices and semester summaries from a shared workbook and email them as PDF",
    long_about = None
)]
pub struct Cli {
    /// Override the configured workbook directory (useful for tests)
    #[arg(global = true, long = "sheet")]
    pub sheet: Option<String>,

    /// Override the configured output directory for rendered documents
    #[arg(global = true, long = "out")]
    pub out: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and an empty workbook
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Create and email invoices for the current billing window
    Invoice {
        /// Client names; with none given, every client with a session in
        /// the window is invoiced
        names: Vec<String>,

        #[arg(
            long = "dry-run",
            help = "Render documents without sending email or updating the workbook"
        )]
        dry_run: bool,
    },

    /// Create and email full-semester summaries
    Summary {
        /// Client names; with none given, every client in the workbook
        /// gets a summary
        names: Vec<String>,

        #[arg(
            long = "dry-run",
            help = "Render documents without sending email or updating the workbook"
        )]
        dry_run: bool,
    },

    /// List clients from the workbook
    Clients {
        #[arg(
            long = "due",
            help = "Only clients with a session in the current billing window"
        )]
        due: bool,
    },
}
