use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repo-showcase")]
#[command(about = "Renders a GitHub repository showcase: project cards, language breakdown, and stat badges")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub account whose repositories are showcased
    #[arg(long, env = "SHOWCASE_USER")]
    pub user: String,

    /// Number of statically authored project cards on the page
    #[arg(long, env = "SHOWCASE_CURATED_CARDS", default_value_t = 0)]
    pub curated_cards: u64,

    /// Number of statically authored skill entries on the page
    #[arg(long, env = "SHOWCASE_STATIC_SKILLS", default_value_t = 0)]
    pub static_skills: u64,

    /// Write the rendered fragments to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}
