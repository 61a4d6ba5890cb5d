mod data;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::postgres::PgPoolOptions;
use std::time::Instant;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "seeder")]
#[command(about = "Database seeding utility for the campground registry")]
struct Args {
    /// Number of campgrounds to insert
    #[arg(long, default_value = "50")]
    count: usize,

    /// Seed for deterministic output
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "postgresql://localhost/campground_registry")]
    database_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    println!("{}", "Campground Registry Database Seeder".bold().cyan());
    println!();

    let database_url = std::env::var("DATABASE_URL").unwrap_or(args.database_url);

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("../migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let mut rng: StdRng = if let Some(seed) = args.seed {
        println!("{} Using seed: {}", "i".blue(), seed);
        SeedableRng::seed_from_u64(seed)
    } else {
        SeedableRng::from_entropy()
    };

    let started = Instant::now();

    // Fresh start: wipe everything first. Reviews go with their
    // campgrounds via the cascade.
    sqlx::query("DELETE FROM campgrounds")
        .execute(&pool)
        .await
        .context("Failed to clear campgrounds")?;

    for _ in 0..args.count {
        let descriptor = data::DESCRIPTORS[rng.gen_range(0..data::DESCRIPTORS.len())];
        let place = data::PLACES[rng.gen_range(0..data::PLACES.len())];
        let (city, state) = data::CITIES[rng.gen_range(0..data::CITIES.len())];
        let price = rng.gen_range(12..49) as f64;

        sqlx::query(
            "INSERT INTO campgrounds (id, title, price, description, location, image)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(Uuid::new_v4())
        .bind(format!("{descriptor} {place}"))
        .bind(price)
        .bind(data::DESCRIPTION)
        .bind(format!("{city}, {state}"))
        .bind(data::IMAGE_URL)
        .execute(&pool)
        .await
        .context("Failed to insert campground")?;
    }

    println!(
        "{} Seeded {} campgrounds in {:.2}s",
        "✓".green(),
        args.count,
        started.elapsed().as_secs_f64()
    );

    Ok(())
}
