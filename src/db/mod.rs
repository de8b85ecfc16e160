use sqlx::PgPool;
use std::env;

pub async fn create_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to the database")
}

pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS employees (
            id BIGSERIAL PRIMARY KEY,
            first_name VARCHAR(50) NOT NULL,
            second_name VARCHAR(50),
            last_name VARCHAR(50) NOT NULL,
            maternal_surname VARCHAR(50) NOT NULL,
            age INTEGER,
            gender VARCHAR(10),
            birth_date DATE,
            \"position\" VARCHAR(100) NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
