//! Booking against a file-backed database shared by several pooled connections, so
//! concurrent transactions really contend for SQLite's write lock.

use entity::prelude::Order;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, TransactionTrait,
};
use tempfile::TempDir;

use super::*;
use crate::server::error::is_transient;

/// Opens a migrated SQLite database file inside `dir`.
async fn file_database(
    dir: &TempDir,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let path = dir.path().join("airport.db");
    let mut options = ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
    options
        .max_connections(max_connections)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Tests concurrent orders for the same seat over a multi-connection pool produce
/// exactly one sale.
///
/// Expected: 1 Ok, the rest Err(SeatTaken), one order and one ticket committed
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_orders_sell_seat_once() -> Result<(), AppError> {
    const ATTEMPTS: usize = 16;

    let dir = tempfile::tempdir()?;
    let db = file_database(&dir, ATTEMPTS as u32).await?;

    let deps = factory::helpers::create_flight_with_dependencies(&db).await?;
    let mut users = Vec::with_capacity(ATTEMPTS);
    for _ in 0..ATTEMPTS {
        users.push(factory::user::create_user(&db).await?.id);
    }

    let flight_id = deps.flight.id;
    let handles: Vec<_> = users
        .into_iter()
        .map(|user_id| {
            let db = db.clone();
            tokio::spawn(async move {
                BookingService::new(&db)
                    .place_order(PlaceOrderParams {
                        user_id,
                        tickets: vec![ticket(flight_id, 2, 3)],
                    })
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    let mut taken = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(AppError::BookingErr(BookingError::SeatTaken { .. })) => taken += 1,
            Err(err) => panic!("unexpected error: {:?}", err),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(taken, ATTEMPTS - 1);
    assert_eq!(Ticket::find().count(&db).await?, 1);
    assert_eq!(Order::find().count(&db).await?, 1);

    Ok(())
}

/// Tests an order placed while another connection holds the write lock fails fast
/// as a retryable conflict and leaves nothing behind.
///
/// Expected: raw write is transient, place_order Err(BookingError::Conflict), then Ok
/// once the lock is released
#[tokio::test]
async fn locked_database_is_a_conflict() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let db = file_database(&dir, 1).await?;
    let holder = file_database(&dir, 1).await?;

    let user = factory::user::create_user(&db).await?;
    let deps = factory::helpers::create_flight_with_dependencies(&db).await?;

    db.execute_unprepared("PRAGMA busy_timeout = 0").await?;

    let txn = holder.begin().await?;
    txn.execute_unprepared("DELETE FROM ticket").await?;

    let raw = db
        .execute_unprepared("DELETE FROM ticket")
        .await
        .unwrap_err();
    assert!(is_transient(&raw), "expected busy/locked, got {:?}", raw);

    let service = BookingService::new(&db);
    let result = service
        .place_order(PlaceOrderParams {
            user_id: user.id,
            tickets: vec![ticket(deps.flight.id, 1, 1)],
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::Conflict))
    ));

    txn.rollback().await?;

    assert_eq!(Order::find().count(&db).await?, 0);

    let order = service
        .place_order(PlaceOrderParams {
            user_id: user.id,
            tickets: vec![ticket(deps.flight.id, 1, 1)],
        })
        .await?;
    assert_eq!(order.tickets.len(), 1);

    Ok(())
}
