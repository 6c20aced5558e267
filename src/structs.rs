use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Create the configuration file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
}
