//! End-to-end tests for the user endpoints.
//!
//! These tests require:
//! - A `PostgreSQL` database with `crates/user-service/schema.sql` applied
//! - The service running against it (cargo run -p user-service)
//! - `DATABASE_URL` set for the tests that seed `user_cars`

use reqwest::StatusCode;
use serde_json::{Value, json};

use user_service_core::UserId;
use user_service_integration_tests::TestContext;

fn ann_lee() -> Value {
    json!({"name": "Ann", "surname": "Lee", "phone": "555", "email": "a@x.com"})
}

async fn create_user(ctx: &TestContext) -> UserId {
    let (status, body) = ctx.post("user", &ann_lee()).await;
    assert!(status.is_success(), "Expected success, got: {status}");
    UserId::new(body["ID"].as_i64().expect("created user has an ID"))
}

#[tokio::test]
#[ignore = "Requires running user service and PostgreSQL"]
async fn test_create_then_get_user() {
    let ctx = TestContext::new();

    let id = create_user(&ctx).await;
    let (status, user) = ctx.get_user(id).await;

    assert_eq!(status, StatusCode::OK);
    let user = user.expect("user body");
    assert_eq!(user.name, "Ann");
    assert_eq!(user.surname, "Lee");
    assert_eq!(user.phone, "555");
    assert_eq!(user.email, "a@x.com");
    assert!(user.cars.is_empty());
}

#[tokio::test]
#[ignore = "Requires running user service and PostgreSQL"]
async fn test_get_user_returns_linked_cars() {
    let ctx = TestContext::new();
    let pool = ctx.pool().await;

    let user_id = create_user(&ctx).await;
    let mut car_ids = Vec::new();
    for (name, model) in [("Civic", "EX"), ("Golf", "GTI")] {
        let (status, body) = ctx
            .post("car", &json!({"name": name, "model": model, "price": 1_000_000}))
            .await;
        assert!(status.is_success());
        let car_id = body["ID"].as_i64().expect("created car has an ID");
        sqlx::query("INSERT INTO user_cars (user_id, car_id) VALUES ($1, $2)")
            .bind(user_id.as_i64())
            .bind(car_id)
            .execute(&pool)
            .await
            .expect("Failed to link car");
        car_ids.push(car_id);
    }

    let (status, user) = ctx.get_user(user_id).await;

    assert_eq!(status, StatusCode::OK);
    let mut returned: Vec<i64> = user
        .expect("user body")
        .cars
        .iter()
        .map(|car| car.id.as_i64())
        .collect();
    returned.sort_unstable();
    car_ids.sort_unstable();
    assert_eq!(returned, car_ids);
}

#[tokio::test]
#[ignore = "Requires running user service and PostgreSQL"]
async fn test_update_user_keeps_cars_and_created_at() {
    let ctx = TestContext::new();
    let pool = ctx.pool().await;

    let id = create_user(&ctx).await;
    let (status, car) = ctx
        .post("car", &json!({"name": "Civic", "model": "EX", "price": 1_000_000}))
        .await;
    assert!(status.is_success());
    let car_id = car["ID"].as_i64().expect("created car has an ID");
    sqlx::query("INSERT INTO user_cars (user_id, car_id) VALUES ($1, $2)")
        .bind(id.as_i64())
        .bind(car_id)
        .execute(&pool)
        .await
        .expect("Failed to link car");

    let (_, before) = ctx.get_user(id).await;
    let before = before.expect("user body");

    // An empty car list in the body must not unlink anything.
    let status = ctx
        .put(
            "user",
            &json!({
                "id": id.as_i64(),
                "name": "Ann",
                "surname": "Park",
                "phone": "556",
                "email": "ann@x.com",
                "Cars": []
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, user) = ctx.get_user(id).await;
    let user = user.expect("user body");
    assert_eq!(user.surname, "Park");
    assert_eq!(user.phone, "556");
    assert_eq!(user.email, "ann@x.com");
    assert_eq!(user.created_at, before.created_at);

    let car_ids: Vec<i64> = user.cars.iter().map(|car| car.id.as_i64()).collect();
    assert_eq!(car_ids, vec![car_id]);

    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_cars WHERE user_id = $1")
        .bind(id.as_i64())
        .fetch_one(&pool)
        .await
        .expect("Failed to count links");
    assert_eq!(links, 1);
}

#[tokio::test]
#[ignore = "Requires running user service and PostgreSQL"]
async fn test_delete_then_get_user_is_404() {
    let ctx = TestContext::new();
    let id = create_user(&ctx).await;

    assert_eq!(ctx.delete("user", id.as_i64()).await, StatusCode::OK);

    let (status, _) = ctx.get_user(id).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running user service and PostgreSQL"]
async fn test_malformed_requests_are_400() {
    let ctx = TestContext::new();

    let resp = ctx
        .client
        .get(format!("{}/user/not-a-number", ctx.base_url))
        .send()
        .await
        .expect("Failed to send GET");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let (status, _) = ctx
        .post("user", &json!({"name": "Ann", "surname": 1, "phone": "555", "email": "a@x.com"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
