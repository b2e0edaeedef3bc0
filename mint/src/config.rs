use core::fmt;
use std::fmt::Display;
use std::path::PathBuf;

use shared::log_config::LogConfig;

#[derive(clap::ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

#[derive(clap::Parser, Debug)]
pub struct AppConfig {
    #[clap(
        long,
        env,
        help = "Genesis file holding the mint params, defaults are used when \
                missing"
    )]
    pub genesis_file: Option<PathBuf>,

    #[clap(long, env, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[clap(long, help = "Print the bootstrap inflation schedule as well")]
    pub fixup_schedule: bool,

    #[clap(flatten)]
    pub log: LogConfig,
}
