use mfc_db::repositories::UserRepo;
use mfc_db::seed::{seed_demo_data, STAFF_USERNAME};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_is_idempotent(pool: PgPool) {
    let mut rng = StdRng::seed_from_u64(7);

    let first = seed_demo_data(&pool, &mut rng, "hash").await.unwrap();
    assert_eq!(first.categories, 5);
    assert_eq!(first.services, 10);
    assert_eq!(first.offices, 5);
    assert_eq!(first.employees, 10);
    assert_eq!(first.users, 6);
    assert_eq!(first.news, 10);
    assert!(first.office_services >= 15);

    let staff = UserRepo::find_by_username(&pool, STAFF_USERNAME)
        .await
        .unwrap()
        .unwrap();
    assert!(staff.is_staff);

    let second = seed_demo_data(&pool, &mut rng, "hash").await.unwrap();
    assert_eq!(second.categories, 0);
    assert_eq!(second.services, 0);
    assert_eq!(second.users, 0);
    assert_eq!(second.news, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_appointments_respect_office_services(pool: PgPool) {
    let mut rng = StdRng::seed_from_u64(42);
    seed_demo_data(&pool, &mut rng, "hash").await.unwrap();

    let orphans: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM appointments ap
         WHERE NOT EXISTS (
             SELECT 1 FROM office_services os
             WHERE os.office_id = ap.office_id AND os.service_id = ap.service_id
         )",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(orphans.0, 0);
}
