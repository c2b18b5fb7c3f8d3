use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pnr-check")]
#[command(about = "Interactive validator for Swedish personal identity numbers")]
pub struct CliConfig {
    #[arg(long, help = "Emit each outcome as one JSON line instead of text")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
