//! Demo entry point: restores the stored session, checks the admin route and, when
//! it is allowed, prints the product table.
//!
//! Usage: `shop-admin [search] [all|active|inactive]`

use shop_admin::catalog::StatusFilter;
use shop_admin::config::ClientConfig;
use shop_admin::lifecycle::{setup_tracing, AdminSystem};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let mut args = std::env::args().skip(1);
    let search = args.next().unwrap_or_default();
    let status: StatusFilter = args.next().unwrap_or_default().parse()?;

    let config = ClientConfig::from_env().map_err(|e| e.to_string())?;
    info!(api = %config.api_base_url, token_file = %config.token_file.display(), "Starting shop admin");

    let system = AdminSystem::new(&config).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("restore_session");
    let state = async { system.dispatcher.restore_session().await }
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;

    match &state.user {
        Some(user) => info!(
            username = %user.username,
            role = state.role_name().unwrap_or("Unknown"),
            roles = state.roles.len(),
            "Session restored"
        ),
        None => info!(roles = state.roles.len(), "No stored session"),
    }

    let decision = system.guard.navigate("/admin");
    info!(?decision, "Navigating to /admin");

    if decision.is_allowed() {
        let span = tracing::info_span!("product_table");
        let products = async { system.catalog.search_products(&search, status).await }
            .instrument(span)
            .await;

        match products {
            Ok(products) => {
                for product in &products {
                    println!(
                        "{:<30} {:>10.2}  {:<8}  {}",
                        product.name,
                        product.price,
                        product.status_label(),
                        product.created_at_label().unwrap_or_default()
                    );
                }
                info!(count = products.len(), search = %search, "Products listed");
            }
            Err(e) => error!(error = %e, "Listing products failed"),
        }
    } else {
        info!("Not logged in, skipping product table");
    }

    system.shutdown().await?;

    info!("Done");
    Ok(())
}
