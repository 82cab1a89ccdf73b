//! Inventory CLI - list and add products over the GraphQL API.
//!
//! # Usage
//!
//! ```bash
//! # List every product
//! inventory list
//!
//! # Add a product; the price is read the way the web form reads it
//! inventory add --name "Denim" --price '$12.50' --category Jeans
//!
//! # Talk to another server
//! inventory --endpoint http://inventory.internal:3000/graphql list
//! ```
//!
//! The endpoint defaults to `INVENTORY_API_URL`, then to the local server.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use inventory_core::Category;
use inventory_ui::HttpTransport;
use url::Url;

mod commands;

/// Endpoint used when neither `--endpoint` nor `INVENTORY_API_URL` is set.
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/graphql";

#[derive(Parser)]
#[command(name = "inventory")]
#[command(author, version, about = "Inventory command-line client")]
struct Cli {
    /// GraphQL endpoint of the inventory server
    #[arg(long, global = true, env = "INVENTORY_API_URL", default_value = DEFAULT_ENDPOINT)]
    endpoint: Url,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all products
    List,
    /// Add a product
    Add {
        /// Product name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Price text, with or without the currency symbol (e.g. '$12.50')
        #[arg(short, long, default_value = "")]
        price: String,

        /// Product category
        #[arg(short, long, default_value_t = Category::default())]
        category: Category,

        /// Image URL
        #[arg(short, long, default_value = "")]
        image_url: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let transport = HttpTransport::new(cli.endpoint);

    match cli.command {
        Commands::List => commands::list::run(&transport).await?,
        Commands::Add {
            name,
            price,
            category,
            image_url,
        } => {
            let fields = commands::add::fields(name, price, category, image_url);
            commands::add::run(&transport, fields).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_list_uses_default_endpoint() {
        let cli = Cli::try_parse_from(["inventory", "list"]).unwrap();
        if std::env::var("INVENTORY_API_URL").is_err() {
            assert_eq!(cli.endpoint.as_str(), DEFAULT_ENDPOINT);
        }
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_add_arguments() {
        let cli = Cli::try_parse_from([
            "inventory",
            "add",
            "--name",
            "Denim",
            "--price",
            "$12.50",
            "--category",
            "jeans",
            "--endpoint",
            "http://inventory.test/graphql",
        ])
        .unwrap();

        assert_eq!(cli.endpoint.host_str(), Some("inventory.test"));
        let Commands::Add {
            name,
            price,
            category,
            image_url,
        } = cli.command
        else {
            panic!("expected add");
        };
        assert_eq!(name, "Denim");
        assert_eq!(price, "$12.50");
        assert_eq!(category, Category::Jeans);
        assert!(image_url.is_empty());
    }

    #[test]
    fn test_add_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["inventory", "add", "--category", "Hats"]).is_err());
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        assert!(Cli::try_parse_from(["inventory", "--endpoint", "not a url", "list"]).is_err());
    }
}
