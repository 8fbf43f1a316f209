use clap::Parser;
use colored::*;
use repo_showcase::cli::Cli;
use repo_showcase::error::Result;
use repo_showcase::{run_showcase, GithubClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "Repository Showcase".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let client = GithubClient::new()?;
    let page = run_showcase(&client, &cli.user, cli.curated_cards, cli.static_skills).await;

    let mut output = String::new();
    output.push_str("<!-- github-projects-grid -->\n");
    output.push_str(&page.cards_html);
    output.push_str("\n<!-- github-skills-list -->\n");
    output.push_str(&page.languages_html);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            println!("📄 Wrote fragments to {}", path.display());
        }
        None => println!("{}", output),
    }

    println!("\n📊 Rendered {} repository cards", page.rendered_cards);
    for update in &page.badge_updates {
        println!("  {} → {}", update.label.cyan(), update.data_count);
    }

    Ok(())
}
