use clap::Parser;
use miette::{IntoDiagnostic, Result};
use shopcart::application::engine::ShopEngine;
use shopcart::domain::ports::{AccountStoreBox, CatalogStoreBox};
use shopcart::infrastructure::in_memory::{InMemoryAccountStore, InMemoryCatalog};
use shopcart::interfaces::json::catalog_reader::CatalogReader;
use shopcart::interfaces::json::users_reader::UsersReader;
use shopcart::interfaces::menu::Menu;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Users JSON file (username -> password, is_admin)
    #[arg(default_value = "users.json")]
    users: PathBuf,

    /// Product catalog JSON file (category -> products)
    #[arg(default_value = "product_catalog.json")]
    catalog: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Silent unless RUST_LOG is set, so logs never interleave with the menu.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let users_file = File::open(&cli.users).into_diagnostic()?;
    let accounts = UsersReader::new(users_file).accounts().into_diagnostic()?;

    let catalog_file = File::open(&cli.catalog).into_diagnostic()?;
    let categories = CatalogReader::new(catalog_file)
        .categories()
        .into_diagnostic()?;

    let catalog: CatalogStoreBox = Box::new(InMemoryCatalog::with_categories(categories));
    let accounts: AccountStoreBox = Box::new(InMemoryAccountStore::with_accounts(accounts));
    let engine = ShopEngine::new(catalog, accounts);

    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout());
    menu.run(&engine).await.into_diagnostic()?;

    Ok(())
}
