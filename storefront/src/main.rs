use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use nile_client::{HttpClient, Order, OrderStatus, User};
use shared::error::AppError;
use shared::money::format_money;
use storefront::input::read_orders;
use storefront::orders::{
    OrderDetails, OrderFilter, OrderQuery, OrderSort, StatusFilter, filter_orders, scope_for,
    sort_orders,
};
use storefront::report::{ReportRange, aggregate_for_range, render_text};
use storefront::users::{check_assignment, filter_users, require_admin, sort_current_first};
use storefront::utils::time::parse_date;
use storefront::{Config, setup_environment};

#[derive(Parser, Debug)]
#[command(name = "storefront", version, about = "NileFood storefront tools")]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "NILE_API_URL")]
    api_url: Option<String>,

    /// Bearer token
    #[arg(long, global = true, env = "NILE_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sales report for a date range
    Report {
        /// First day, YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,
        /// Last day, YYYY-MM-DD
        #[arg(long)]
        to: Option<String>,
        /// Read orders from a JSON file instead of the backend
        #[arg(long)]
        input: Option<PathBuf>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// List orders with their final totals
    Orders {
        #[arg(long, value_parser = parse_status)]
        status: Option<OrderStatus>,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        /// Order number or product name
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_enum, default_value_t = OrderSort::Newest)]
        sort: OrderSort,
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// One order with its item breakdown
    Order {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// List users, signed-in user first (admin)
    Users {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// List the roles defined on the backend
    Roles,
    /// Give a user one more role (admin)
    AssignRole {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        role: String,
    },
    /// Delete a user account by email (admin)
    DeleteUser {
        #[arg(long)]
        email: String,
    },
}

fn parse_status(s: &str) -> Result<OrderStatus, String> {
    OrderStatus::parse(s).ok_or_else(|| format!("unknown order status: {}", s))
}

fn parse_optional_date(value: Option<&str>) -> anyhow::Result<Option<chrono::NaiveDate>> {
    Ok(value.map(parse_date).transpose()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = setup_environment();
    let cli = Cli::parse();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(token) = cli.token {
        config.api_token = Some(token);
    }

    tracing::debug!(api_url = %config.api_url, "Storefront starting");

    let result = match cli.command {
        Command::Report {
            from,
            to,
            input,
            json,
        } => run_report(&config, from, to, input, json).await,
        Command::Orders {
            status,
            from,
            to,
            search,
            sort,
            input,
            json,
        } => {
            let filter = OrderFilter {
                status,
                start: parse_optional_date(from.as_deref())?,
                end: parse_optional_date(to.as_deref())?,
                search,
            };
            run_orders(&config, filter, sort, input, json).await
        }
        Command::Order { id, json } => run_order(&config, id, json).await,
        Command::Users { search } => run_users(&config, &search).await,
        Command::Roles => run_roles(&config).await,
        Command::AssignRole { user_id, role } => run_assign_role(&config, &user_id, &role).await,
        Command::DeleteUser { email } => run_delete_user(&config, &email).await,
    };

    if let Err(e) = &result {
        tracing::error!("Command failed: {:#}", e);
    }
    result
}

async fn run_report(
    config: &Config,
    from: Option<String>,
    to: Option<String>,
    input: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let range = ReportRange::parse(from.as_deref(), to.as_deref())?;
    let filter = OrderFilter {
        start: Some(range.start()),
        end: Some(range.end()),
        ..Default::default()
    };
    let orders = load_orders(config, &filter, input).await?;

    let summary = aggregate_for_range(&orders, Some(&range));
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_text(&summary, &config.currency));
    }
    Ok(())
}

async fn run_orders(
    config: &Config,
    filter: OrderFilter,
    sort: OrderSort,
    input: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let orders = load_orders(config, &filter, input).await?;
    let orders = sort_orders(&filter_orders(&orders, &filter), sort);

    let mut details = Vec::with_capacity(orders.len());
    for order in &orders {
        match OrderDetails::from_order(order) {
            Ok(d) => details.push(d),
            Err(e) => tracing::warn!(order = %order.reference(), "Skipping order: {}", e),
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }
    if details.is_empty() {
        println!("No orders found");
        return Ok(());
    }
    for d in &details {
        let created = d
            .created_at
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<12}{:<18}{:<18}{:>16}",
            d.reference,
            created,
            d.status.label(),
            format_money(d.final_total, &config.currency)
        );
    }
    Ok(())
}

async fn run_order(config: &Config, id: i64, json: bool) -> anyhow::Result<()> {
    let client = connect(config)?;
    let roles = viewer_roles(&client).await;
    let order = client
        .order(scope_for(&roles), id)
        .await
        .map_err(AppError::from)
        .with_context(|| format!("failed to fetch order {}", id))?;
    let details = OrderDetails::from_order(&order)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }
    println!("Order {} ({})", details.reference, details.status.label());
    for row in &details.items {
        println!(
            "{:<28}{:>4} x {:>14}{:>16}",
            row.name,
            row.quantity,
            format_money(row.unit_price, &config.currency),
            format_money(row.line_total, &config.currency)
        );
    }
    println!(
        "{:<48}{:>16}",
        "Total",
        format_money(details.final_total, &config.currency)
    );
    Ok(())
}

async fn run_users(config: &Config, search: &str) -> anyhow::Result<()> {
    let client = connect(config)?;
    let current = admin_profile(&client).await?;
    let users = client
        .users()
        .await
        .map_err(AppError::from)
        .context("failed to load users")?;

    let users = sort_current_first(&filter_users(&users, search), current.email.as_deref());
    for user in &users {
        println!(
            "{:<28}{:<32}{}",
            user.full_name(),
            user.email.as_deref().unwrap_or("-"),
            user.roles.join(", ")
        );
    }
    Ok(())
}

async fn run_roles(config: &Config) -> anyhow::Result<()> {
    let client = connect(config)?;
    let roles = client
        .roles()
        .await
        .map_err(AppError::from)
        .context("failed to load roles")?;
    for role in &roles {
        println!("{}", role.name);
    }
    Ok(())
}

async fn run_assign_role(config: &Config, user_id: &str, role: &str) -> anyhow::Result<()> {
    let client = connect(config)?;
    admin_profile(&client).await?;

    let users = client
        .users()
        .await
        .map_err(AppError::from)
        .context("failed to load users")?;
    let user = users
        .iter()
        .find(|u| u.id.as_deref() == Some(user_id))
        .ok_or_else(|| AppError::not_found(format!("User {}", user_id)))?;
    let roles = client
        .roles()
        .await
        .map_err(AppError::from)
        .context("failed to load roles")?;
    check_assignment(&roles, user, role)?;

    client
        .assign_role(user_id, role)
        .await
        .map_err(AppError::from)
        .context("failed to assign role")?;
    println!("{} now has role {}", user.full_name(), role);
    Ok(())
}

async fn run_delete_user(config: &Config, email: &str) -> anyhow::Result<()> {
    let client = connect(config)?;
    admin_profile(&client).await?;
    client
        .delete_user(email)
        .await
        .map_err(AppError::from)
        .with_context(|| format!("failed to delete {}", email))?;
    println!("Deleted {}", email);
    Ok(())
}

/// Signed-in profile, required to hold the Admin role
async fn admin_profile(client: &HttpClient) -> anyhow::Result<User> {
    let current = client
        .profile()
        .await
        .map_err(AppError::from)
        .context("failed to load profile")?;
    require_admin(&current)?;
    Ok(current)
}

/// Roles of the signed-in user; none when the profile cannot be read
async fn viewer_roles(client: &HttpClient) -> Vec<String> {
    match client.profile().await {
        Ok(user) => user.roles,
        Err(e) => {
            tracing::warn!("Could not load profile, reading own orders only: {}", e);
            Vec::new()
        }
    }
}

/// Orders from `input` when given, else from the backend
///
/// The backend decides the scope from the viewer's roles; a file is
/// filtered locally by `filter`.
async fn load_orders(
    config: &Config,
    filter: &OrderFilter,
    input: Option<PathBuf>,
) -> anyhow::Result<Vec<Order>> {
    if let Some(path) = input {
        let orders = read_orders(&path)?;
        return Ok(filter_orders(&orders, filter));
    }

    let client = connect(config)?;
    let roles = viewer_roles(&client).await;
    let query = OrderQuery {
        status: filter.status.map(StatusFilter::Only).unwrap_or_default(),
        start: filter.start,
        end: filter.end,
        user_id: None,
    };
    let orders = client
        .orders(&query.to_request(&roles))
        .await
        .map_err(AppError::from)
        .context("failed to fetch orders")?;
    Ok(orders)
}

fn connect(config: &Config) -> anyhow::Result<HttpClient> {
    config
        .client_config()
        .build_http_client()
        .map_err(AppError::from)
        .context("failed to create HTTP client")
}
