//! Atrio - members area terminal front-end
//!
//! Thin presentation layer over the core access model: key login,
//! per-product module listings with lock state, completion toggles and
//! the two timed areas (digital vault, AI tools hub).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atrio_core::{
    catalog, schedule, AccessStatus, ContentItem, Entitlement, Error, GatedArea, MemberArea,
};

mod config;
mod state;

use state::AppContext;

#[derive(Parser)]
#[command(name = "atrio", version, about = "Atrio members area")]
struct Cli {
    /// Path to the database file (overrides the config file)
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with an access key
    Login {
        key: String,
    },
    /// Sign out and erase completion progress
    Logout,
    /// Show the current entitlement and timed-area access
    Status,
    /// List entitled products
    Products,
    /// List a product's modules with lock and completion state
    Modules {
        product: String,
        /// List the bonus collection instead of the main modules
        #[arg(long)]
        bonus: bool,
    },
    /// Print the content link for an unlocked item
    Open {
        product: String,
        item: String,
    },
    /// Toggle completion for an unlocked item
    Complete {
        product: String,
        item: String,
    },
    /// Digital vault access
    #[command(subcommand)]
    Vault(AreaCommand),
    /// AI tools hub access
    #[command(subcommand)]
    Hub(AreaCommand),
}

#[derive(Subcommand)]
enum AreaCommand {
    /// Unlock with an access key
    Unlock { key: String },
    /// Show current access
    Status,
    /// Drop the stored grant
    Lock,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting atrio");

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let ctx = AppContext::init(cli.db_path)?;
    // One clock sample per command, so every item in a listing is judged
    // against the same instant.
    let now = Utc::now();

    match cli.command {
        Commands::Login { key } => cmd_login(&ctx, &key, now),
        Commands::Logout => cmd_logout(&ctx),
        Commands::Status => cmd_status(&ctx, now),
        Commands::Products => cmd_products(&ctx),
        Commands::Modules { product, bonus } => cmd_modules(&ctx, &product, bonus, now),
        Commands::Open { product, item } => cmd_open(&ctx, &product, &item, now),
        Commands::Complete { product, item } => cmd_complete(&ctx, &product, &item, now),
        Commands::Vault(cmd) => cmd_area(GatedArea::vault(&ctx.db), "Vault", cmd, now),
        Commands::Hub(cmd) => cmd_area(GatedArea::ai_hub(&ctx.db), "AI hub", cmd, now),
    }
}

fn cmd_login(ctx: &AppContext, key: &str, now: DateTime<Utc>) -> Result<ExitCode> {
    match MemberArea::new(&ctx.db).login(key, now) {
        Ok(entitlement) => {
            println!("Signed in: {} tier", entitlement.tier);
            for product_id in &entitlement.products {
                if let Some(product) = catalog::find_product(product_id) {
                    println!("  - {} ({})", product.name, product.id);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        // Deliberately generic: never hint how close the key was.
        Err(Error::InvalidKey) => {
            eprintln!("Invalid access key");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_logout(ctx: &AppContext) -> Result<ExitCode> {
    MemberArea::new(&ctx.db).logout()?;
    println!("Signed out");
    Ok(ExitCode::SUCCESS)
}

fn cmd_status(ctx: &AppContext, now: DateTime<Utc>) -> Result<ExitCode> {
    match MemberArea::new(&ctx.db).current()? {
        Some(entitlement) => {
            println!(
                "Member: {} tier, active since {}",
                entitlement.tier,
                entitlement.granted_at.format("%Y-%m-%d")
            );
            println!("Products: {}", entitlement.products.join(", "));
        }
        None => println!("Member: signed out"),
    }

    print_area_status("Vault", &GatedArea::vault(&ctx.db).status(now)?);
    print_area_status("AI hub", &GatedArea::ai_hub(&ctx.db).status(now)?);
    Ok(ExitCode::SUCCESS)
}

fn print_area_status(label: &str, status: &AccessStatus) {
    match status {
        AccessStatus::Locked => println!("{label}: locked"),
        AccessStatus::Granted(grant) => match grant.expires_at {
            Some(expires) => println!(
                "{label}: {} access, expires {}",
                grant.tier,
                expires.format("%Y-%m-%d")
            ),
            None => println!("{label}: {} access", grant.tier),
        },
    }
}

fn cmd_products(ctx: &AppContext) -> Result<ExitCode> {
    let area = MemberArea::new(&ctx.db);
    let Some(entitlement) = area.current()? else {
        eprintln!("Not signed in");
        return Ok(ExitCode::FAILURE);
    };

    for product_id in &entitlement.products {
        let Some(product) = catalog::find_product(product_id) else {
            continue;
        };
        let completed = area.completed_count(&product.id)?;
        println!(
            "{} ({}) — {}/{} modules completed, {} bonus items",
            product.name,
            product.id,
            completed,
            product.modules.len(),
            product.bonus.len()
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// Look up a product the current entitlement actually grants
fn entitled_product(
    entitlement: &Entitlement,
    product_id: &str,
) -> Result<&'static atrio_core::Product, ExitCode> {
    if !entitlement.grants_product(product_id) {
        eprintln!("Product '{product_id}' is not part of your access");
        return Err(ExitCode::FAILURE);
    }
    match catalog::find_product(product_id) {
        Some(product) => Ok(product),
        None => {
            eprintln!("Unknown product '{product_id}'");
            Err(ExitCode::FAILURE)
        }
    }
}

fn cmd_modules(ctx: &AppContext, product_id: &str, bonus: bool, now: DateTime<Utc>) -> Result<ExitCode> {
    let area = MemberArea::new(&ctx.db);
    let Some(entitlement) = area.current()? else {
        eprintln!("Not signed in");
        return Ok(ExitCode::FAILURE);
    };
    let product = match entitled_product(&entitlement, product_id) {
        Ok(p) => p,
        Err(code) => return Ok(code),
    };

    let items = if bonus { &product.bonus } else { &product.modules };
    let granted_at = Some(entitlement.granted_at);

    for item in items {
        let completed = if area.is_completed(&product.id, &item.id)? {
            "x"
        } else {
            " "
        };
        let lock = if schedule::is_unlocked(item, granted_at, now) {
            String::new()
        } else {
            let days = schedule::days_remaining(item, granted_at, now);
            format!("  [locked, {days}d remaining]")
        };
        let duration = item
            .duration
            .as_deref()
            .map(|d| format!(" ({d})"))
            .unwrap_or_default();
        println!("[{completed}] {:<22} {}{duration}{lock}", item.id, item.title);
    }
    Ok(ExitCode::SUCCESS)
}

/// Shared entitlement/lock gate for `open` and `complete`
fn unlocked_item(
    area: &MemberArea<'_>,
    product_id: &str,
    item_id: &str,
    now: DateTime<Utc>,
) -> Result<std::result::Result<&'static ContentItem, ExitCode>> {
    let Some(entitlement) = area.current()? else {
        eprintln!("Not signed in");
        return Ok(Err(ExitCode::FAILURE));
    };
    let product = match entitled_product(&entitlement, product_id) {
        Ok(p) => p,
        Err(code) => return Ok(Err(code)),
    };
    let Some(item) = product.find_item(item_id) else {
        eprintln!("Unknown item '{item_id}' in '{product_id}'");
        return Ok(Err(ExitCode::FAILURE));
    };

    if !schedule::is_unlocked(item, Some(entitlement.granted_at), now) {
        let days = schedule::days_remaining(item, Some(entitlement.granted_at), now);
        eprintln!("'{item_id}' is locked; unlocks in {days} day(s)");
        return Ok(Err(ExitCode::FAILURE));
    }
    Ok(Ok(item))
}

fn cmd_open(ctx: &AppContext, product_id: &str, item_id: &str, now: DateTime<Utc>) -> Result<ExitCode> {
    let area = MemberArea::new(&ctx.db);
    let item = match unlocked_item(&area, product_id, item_id, now)? {
        Ok(item) => item,
        Err(code) => return Ok(code),
    };

    match &item.content_ref {
        Some(url) => {
            println!("{url}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("'{item_id}' has no content link");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn cmd_complete(ctx: &AppContext, product_id: &str, item_id: &str, now: DateTime<Utc>) -> Result<ExitCode> {
    let area = MemberArea::new(&ctx.db);
    // Completion on a locked item is refused here, at the presentation
    // layer; the progress store itself does not know about the schedule.
    let item = match unlocked_item(&area, product_id, item_id, now)? {
        Ok(item) => item,
        Err(code) => return Ok(code),
    };

    area.toggle_complete(product_id, &item.id)?;
    if area.is_completed(product_id, &item.id)? {
        println!("Marked '{item_id}' as completed");
    } else {
        println!("Unmarked '{item_id}'");
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_area(
    area: GatedArea<'_>,
    label: &str,
    cmd: AreaCommand,
    now: DateTime<Utc>,
) -> Result<ExitCode> {
    match cmd {
        AreaCommand::Unlock { key } => match area.unlock(&key, now) {
            Ok(grant) => {
                match grant.expires_at {
                    Some(expires) => println!(
                        "{label} unlocked: {} access until {}",
                        grant.tier,
                        expires.format("%Y-%m-%d")
                    ),
                    None => println!("{label} unlocked: {} access", grant.tier),
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(Error::InvalidKey) => {
                eprintln!("Invalid access key");
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e.into()),
        },
        AreaCommand::Status => {
            print_area_status(label, &area.status(now)?);
            Ok(ExitCode::SUCCESS)
        }
        AreaCommand::Lock => {
            area.lock()?;
            println!("{label} locked");
            Ok(ExitCode::SUCCESS)
        }
    }
}
