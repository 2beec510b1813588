//! Load demo data: a demo user, curated places with videos, sample trips,
//! and verified POIs. Safe to re-run.

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wanderistan_api::auth::password::hash_password;
use wanderistan_db::seed::{seed_demo_data, DEMO_EMAIL, DEMO_PASSWORD};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wanderistan_seed=info,wanderistan_db=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = wanderistan_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    wanderistan_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let password_hash = hash_password(DEMO_PASSWORD).expect("Failed to hash demo password");
    let summary = seed_demo_data(&pool, &password_hash, Utc::now().date_naive())
        .await
        .expect("Seeding failed");

    tracing::info!(
        users = summary.users,
        places = summary.places,
        videos = summary.videos,
        trips = summary.trips,
        pois = summary.pois,
        "Seed complete"
    );
    tracing::info!(email = DEMO_EMAIL, password = DEMO_PASSWORD, "Demo login");
}
