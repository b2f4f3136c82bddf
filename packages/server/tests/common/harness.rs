//! Postgres test harness with testcontainers.
//!
//! One container is started per test binary and migrations run once. Each test
//! gets its tables truncated so fixtures can reuse fixed ids.

use anyhow::{Context, Result};
use marketplace_core::kernel::{PgMarketplaceStore, ServerDeps};
use sqlx::PgPool;
use std::sync::Arc;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::{Mutex, MutexGuard, OnceCell};

/// Shared test infrastructure that persists across all tests in a binary.
struct SharedTestInfra {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

/// Tests in a binary share one database, so they take turns.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --ignored --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!(
            "postgresql://postgres:postgres@{}:{}/postgres",
            pg_host, pg_port
        );

        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test harness backed by a real Postgres.
///
/// ```ignore
/// #[test_context(PgHarness)]
/// #[tokio::test]
/// #[ignore = "requires Docker"]
/// async fn my_test(ctx: &mut PgHarness) {
///     seed_springfield(&ctx.db_pool).await.unwrap();
/// }
/// ```
pub struct PgHarness {
    pub db_pool: PgPool,
    _guard: MutexGuard<'static, ()>,
}

impl AsyncTestContext for PgHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        self.db_pool.close().await;
    }
}

impl PgHarness {
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;
        let guard = DB_LOCK.lock().await;

        let db_pool = PgPool::connect(&infra.db_url)
            .await
            .context("Failed to connect to test database")?;

        // Catalog rows come from the seed migration and stay
        sqlx::query("TRUNCATE portfolio_images, services, users RESTART IDENTITY CASCADE")
            .execute(&db_pool)
            .await
            .context("Failed to reset tables")?;

        Ok(Self {
            db_pool,
            _guard: guard,
        })
    }

    pub fn store(&self) -> PgMarketplaceStore {
        PgMarketplaceStore::new(self.db_pool.clone())
    }

    pub fn deps(&self) -> ServerDeps {
        ServerDeps::new(Arc::new(self.store()))
    }
}
