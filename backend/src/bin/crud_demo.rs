//! Run one insert → select → update → delete cycle against the users table.
//!
//! Each step prints its outcome to stdout. Any storage failure aborts the run
//! with a non-zero exit status.

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tokio::runtime::Builder;

use users_api::domain::ports::UserRepository;
use users_api::domain::{UserFields, UserId};
use users_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
use users_api::server::DEFAULT_DATABASE_URL;

/// `crud-demo` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "crud-demo",
    about = "Exercise the users table with one create, read, update and delete",
    version
)]
struct CliArgs {
    /// SQLite database path.
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,
    /// Row targeted by the update and delete steps.
    #[arg(long, default_value_t = 1)]
    id: i64,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build tokio runtime")?;
    runtime.block_on(run(args))
}

async fn run(args: CliArgs) -> Result<()> {
    let CliArgs { database_url, id } = args;
    let pool = DbPool::new(PoolConfig::new(database_url.as_str()))
        .await
        .wrap_err_with(|| format!("failed to open database at {database_url}"))?;
    let repository = DieselUserRepository::new(pool);
    let target = UserId::new(id);

    let fields = UserFields::new()
        .with_full_name("Farman Ali")
        .with_email("farman@example.com");
    let created = repository.create(&fields).await.wrap_err("insert failed")?;
    println!("inserted user {created}");

    let users = repository.list_all().await.wrap_err("select failed")?;
    println!("selected {} user(s):", users.len());
    for user in &users {
        println!(
            "  {} | {} | {}",
            user.id(),
            user.full_name().unwrap_or("NULL"),
            user.email().unwrap_or("NULL")
        );
    }

    let updated = repository
        .update(target, &UserFields::new().with_full_name("New Name"))
        .await
        .wrap_err("update failed")?;
    println!("updated user {target} ({updated} row(s))");

    let deleted = repository
        .delete(target)
        .await
        .wrap_err("delete failed")?;
    println!("deleted user {target} ({deleted} row(s))");

    drop(repository);
    println!("connection closed");
    Ok(())
}
