use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Drop and recreate every warehouse table
    CreateTables {
        #[arg(long, default_value = "dwh.cfg", help = "Config file path")]
        config: String,
    },
    /// Load the staging tables from object storage, then populate the
    /// star schema from them
    Etl {
        #[arg(long, default_value = "dwh.cfg", help = "Config file path")]
        config: String,

        #[arg(
            long,
            help = "Reject blank insert statements instead of passing them through"
        )]
        strict: bool,
    },
    /// Check that the warehouse in the config file is reachable
    Ping {
        #[arg(long, default_value = "dwh.cfg", help = "Config file path")]
        config: String,
    },
    /// Print the rendered statement catalog as JSON
    Render {
        #[arg(long, default_value = "dwh.cfg", help = "Config file path")]
        config: String,

        #[arg(long, help = "Limit output to one group: drop, create, copy or insert")]
        group: Option<String>,

        #[arg(
            long,
            help = "If specified, writes the JSON to this file instead of stdout"
        )]
        output: Option<String>,
    },
}
