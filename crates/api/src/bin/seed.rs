//! Populate a development database with demo data.
//!
//! Reads `DATABASE_URL`, applies migrations and seeds the catalog, demo
//! citizens and the `admin` staff account. All demo accounts share the
//! password from `DEMO_PASSWORD` (default `password123`). Set `SEED` to an
//! integer for a reproducible run.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mfc_api::auth::password::hash_password;
use mfc_db::seed::{seed_demo_data, STAFF_USERNAME};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mfc_seed=info,mfc_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = mfc_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    mfc_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let password = std::env::var("DEMO_PASSWORD").unwrap_or_else(|_| "password123".into());
    let password_hash = hash_password(&password).expect("Failed to hash demo password");

    let mut rng = match std::env::var("SEED").ok().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => {
            tracing::info!(seed, "Using fixed RNG seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let report = seed_demo_data(&pool, &mut rng, &password_hash)
        .await
        .expect("Failed to seed demo data");

    tracing::info!(
        categories = report.categories,
        services = report.services,
        offices = report.offices,
        employees = report.employees,
        office_services = report.office_services,
        users = report.users,
        applications = report.applications,
        appointments = report.appointments,
        news = report.news,
        staff_username = STAFF_USERNAME,
        "Demo data seeded",
    );
}
