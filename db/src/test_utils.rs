use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Fresh in-memory SQLite database with every migration applied.
///
/// Statement logging is off so test output stays readable.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("in-memory database should open");
    Migrator::up(&db, None)
        .await
        .expect("migrations should apply to an empty database");
    db
}
