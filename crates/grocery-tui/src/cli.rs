use clap::Parser;

#[derive(Parser)]
#[command(name = "grocery")]
#[command(about = "A terminal grocery list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write debug logs to this file (or set GROCERY_DEBUG_LOG)
    #[arg(long, value_name = "FILE", env = "GROCERY_DEBUG_LOG")]
    pub debug_log: Option<String>,
}
