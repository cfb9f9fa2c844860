use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gridpaste")]
#[command(about = "Paste a copied spreadsheet range into any application, one cell at a time", long_about = None)]
pub struct Cli {
    /// Global key that drives pasting (F1-F12, Pause, ScrollLock, Insert, ...)
    #[arg(short, long, global = true)]
    pub trigger: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Paste one cell each time the trigger key is pressed
    Manual,
    /// Paste every cell after one trigger press, pressing Tab between cells
    Tab {
        /// Select-all and delete the field before each paste
        #[arg(long)]
        clear: bool,

        /// Tab presses between cells (prompts for both settings when omitted)
        #[arg(short = 'n', long)]
        tabs: Option<u32>,
    },
    /// Show the copied table without pasting anything
    Preview,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_interactive() {
        let cli = Cli::parse_from(["gridpaste"]);
        assert!(cli.command.is_none());
        assert!(cli.trigger.is_none());
    }

    #[test]
    fn test_tab_command_flags() {
        let cli = Cli::parse_from(["gridpaste", "tab", "--clear", "-n", "2", "--trigger", "F8"]);
        match cli.command {
            Some(Commands::Tab { clear, tabs }) => {
                assert!(clear);
                assert_eq!(tabs, Some(2));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.trigger.as_deref(), Some("F8"));
    }

    #[test]
    fn test_negative_tabs_rejected() {
        assert!(Cli::try_parse_from(["gridpaste", "tab", "-n", "-1"]).is_err());
    }
}
