//! CLI administration tool for shop-api.
//!
//! Provides commands for seeding the catalog and managing customer accounts
//! without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a category
//! cargo run --bin admin -- category create --name "Books"
//!
//! # Create a product
//! cargo run --bin admin -- product create --name "Novel" --price 12.99 --category 1
//!
//! # List customer accounts
//! cargo run --bin admin -- customer list
//!
//! # Activate an account that never received its code
//! cargo run --bin admin -- customer activate user@gmail.com
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use shop_api::domain::entities::NewProduct;
use shop_api::domain::repositories::{
    CategoryRepository, CustomerRepository, ProductRepository,
};
use shop_api::infrastructure::persistence::{
    PgCategoryRepository, PgCustomerRepository, PgProductRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shop-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage catalog categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Manage catalog products
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },

    /// Manage customer accounts
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Category management subcommands.
#[derive(Subcommand)]
enum CategoryAction {
    /// Create a new category
    Create {
        /// Category name (e.g., "Books")
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List all categories
    List,
}

/// Product management subcommands.
#[derive(Subcommand)]
enum ProductAction {
    /// Create a new product
    Create {
        /// Product name
        #[arg(short, long)]
        name: Option<String>,

        /// Price, e.g. 12.99
        #[arg(short, long)]
        price: Option<Decimal>,

        /// Category id the product belongs to
        #[arg(short, long)]
        category: Option<i64>,
    },

    /// List all products
    List,
}

/// Customer account subcommands.
#[derive(Subcommand)]
enum CustomerAction {
    /// List all accounts
    List,

    /// Activate an account by email (operator override for stuck verifications)
    Activate {
        /// Email of the account to activate
        email: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Category { action } => handle_category_action(action, &pool).await?,
        Commands::Product { action } => handle_product_action(action, &pool).await?,
        Commands::Customer { action } => handle_customer_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches category management commands.
async fn handle_category_action(action: CategoryAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgCategoryRepository::new(Arc::new(pool.clone())));

    match action {
        CategoryAction::Create { name } => {
            let name = match name {
                Some(n) => n,
                None => Input::new().with_prompt("Category name").interact_text()?,
            };

            let category = repo
                .create(&name)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create category: {}", e))?;

            println!(
                "{} Category {} created with id {}",
                "✅".green(),
                category.name.cyan(),
                category.id.to_string().bright_white().bold()
            );
        }
        CategoryAction::List => {
            let categories = repo
                .list()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list categories: {}", e))?;

            println!("{}", "📋 Categories".bright_blue().bold());
            println!();

            if categories.is_empty() {
                println!("{}", "  No categories found".yellow());
                return Ok(());
            }

            for category in &categories {
                println!(
                    "  {:<5} {}",
                    category.id.to_string().bright_black(),
                    category.name.cyan()
                );
            }

            println!();
            println!(
                "  Total: {}",
                categories.len().to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}

/// Dispatches product management commands.
async fn handle_product_action(action: ProductAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgProductRepository::new(Arc::new(pool.clone())));

    match action {
        ProductAction::Create {
            name,
            price,
            category,
        } => {
            let name = match name {
                Some(n) => n,
                None => Input::new().with_prompt("Product name").interact_text()?,
            };
            let price: Decimal = match price {
                Some(p) => p,
                None => Input::new().with_prompt("Price").interact_text()?,
            };
            let category_id: i64 = match category {
                Some(c) => c,
                None => Input::new().with_prompt("Category id").interact_text()?,
            };

            let product = repo
                .create(NewProduct {
                    name,
                    price,
                    category_id,
                })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create product: {}", e))?;

            println!(
                "{} Product {} ({}) created with id {}",
                "✅".green(),
                product.name.cyan(),
                product.price.to_string().bright_yellow(),
                product.id.to_string().bright_white().bold()
            );
        }
        ProductAction::List => {
            let products = repo
                .list(0, 1000)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list products: {}", e))?;

            println!("{}", "📋 Products".bright_blue().bold());
            println!();

            if products.is_empty() {
                println!("{}", "  No products found".yellow());
                return Ok(());
            }

            println!(
                "  {:<5} {:<30} {:<12} {:<10}",
                "ID".bright_white().bold(),
                "Name".bright_white().bold(),
                "Price".bright_white().bold(),
                "Category".bright_white().bold()
            );
            println!("  {}", "─".repeat(60).bright_black());

            for product in &products {
                println!(
                    "  {:<5} {:<30} {:<12} {:<10}",
                    product.id.to_string().bright_black(),
                    product.name.cyan(),
                    product.price.to_string().bright_yellow(),
                    product.category_id.to_string().bright_black()
                );
            }

            println!();
            println!(
                "  Total: {}",
                products.len().to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}

/// Dispatches customer account commands.
async fn handle_customer_action(action: CustomerAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgCustomerRepository::new(Arc::new(pool.clone())));

    match action {
        CustomerAction::List => {
            let customers = repo
                .list()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

            println!("{}", "📋 Customer Accounts".bright_blue().bold());
            println!();

            if customers.is_empty() {
                println!("{}", "  No accounts found".yellow());
                return Ok(());
            }

            println!(
                "  {:<5} {:<30} {:<25} {:<20} {:<10}",
                "ID".bright_white().bold(),
                "Email".bright_white().bold(),
                "Name".bright_white().bold(),
                "Created".bright_white().bold(),
                "Status".bright_white().bold()
            );
            println!("  {}", "─".repeat(92).bright_black());

            for customer in &customers {
                let status = if customer.is_active {
                    "ACTIVE".green()
                } else {
                    "PENDING".yellow()
                };

                println!(
                    "  {:<5} {:<30} {:<25} {:<20} {}",
                    customer.id.to_string().bright_black(),
                    customer.email.cyan(),
                    customer.full_name,
                    customer
                        .created_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black(),
                    status
                );
            }

            println!();
            println!(
                "  Total: {}",
                customers.len().to_string().bright_white().bold()
            );
        }
        CustomerAction::Activate { email } => {
            println!("{}", "🔓 Activate Account".bright_blue().bold());
            println!();

            let customer = repo
                .find_by_email(&email)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
                .context("Account not found")?;

            if customer.is_active {
                println!("{}", "⚠️  This account is already active".yellow());
                return Ok(());
            }

            println!("  Email: {}", customer.email.cyan());
            println!("  Name:  {}", customer.full_name);
            println!();

            let confirmed = Confirm::new()
                .with_prompt("Activate this account?")
                .default(false)
                .interact()?;

            if !confirmed {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }

            repo.set_active(customer.id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to activate account: {}", e))?;

            println!();
            println!("{}", "✅ Account activated!".green().bold());
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
                .fetch_one(pool)
                .await?;

            let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Products:   {}",
                products.to_string().bright_green().bold()
            );
            println!(
                "  Customers:  {}",
                customers.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
