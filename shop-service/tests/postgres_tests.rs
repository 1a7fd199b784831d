mod common;

use common::TestApp;
use common::TestDb;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;
use shop_service::domain::order::errors::OrderError;
use shop_service::domain::order::models::NewOrder;
use shop_service::domain::order::models::OrderDetails;
use shop_service::domain::order::models::Quantity;
use shop_service::domain::order::ports::OrderRepository;
use shop_service::domain::product::models::NewProduct;
use shop_service::domain::product::models::Price;
use shop_service::domain::product::models::ProductDetails;
use shop_service::domain::product::models::ProductId;
use shop_service::domain::product::models::ProductName;
use shop_service::domain::product::ports::ProductRepository;
use shop_service::domain::user::errors::UserError;
use shop_service::domain::user::models::EmailAddress;
use shop_service::domain::user::models::FullName;
use shop_service::domain::user::models::NewUser;
use shop_service::domain::user::models::User;
use shop_service::domain::user::models::UserId;
use shop_service::domain::user::ports::UserRepository;
use shop_service::outbound::repositories::PostgresOrderRepository;
use shop_service::outbound::repositories::PostgresProductRepository;
use shop_service::outbound::repositories::PostgresUserRepository;

fn new_user(email: &str) -> NewUser {
    NewUser {
        fullname: FullName::new("Test User".to_string()).unwrap(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        password_hash: "$argon2id$stored".to_string(),
    }
}

fn new_product(owner: &User, name: &str) -> NewProduct {
    NewProduct {
        details: ProductDetails {
            name: ProductName::new(name).unwrap(),
            description: String::new(),
            price: Price::new(10).unwrap(),
            in_stock: true,
        },
        owner_id: owner.id,
    }
}

fn new_order(owner_id: UserId, product_id: ProductId) -> NewOrder {
    NewOrder {
        details: OrderDetails {
            product_id,
            quantity: Quantity::new(1).unwrap(),
        },
        owner_id,
    }
}

#[tokio::test]
#[ignore = "Requires running Postgres database (DATABASE_URL)"]
async fn test_duplicate_email_conflicts() {
    let app = TestApp::spawn_with_postgres().await;
    app.register("a@x.com", "pw1").await;

    let response = app
        .post("/users")
        .json(&json!({
            "fullname": "Someone Else",
            "email": "a@x.com",
            "password": "other"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Email already exists: a@x.com");
}

#[tokio::test]
#[ignore = "Requires running Postgres database (DATABASE_URL)"]
async fn test_updating_to_taken_email_conflicts() {
    let db = TestDb::new().await;
    let users = PostgresUserRepository::new(db.pool.clone());

    users.create(new_user("a@x.com")).await.unwrap();
    let mut bob = users.create(new_user("b@x.com")).await.unwrap();
    bob.email = EmailAddress::new("a@x.com".to_string()).unwrap();

    let result = users.update(bob).await;
    assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
}

#[tokio::test]
#[ignore = "Requires running Postgres database (DATABASE_URL)"]
async fn test_deleting_user_cascades_to_products_and_orders() {
    let app = TestApp::spawn_with_postgres().await;
    let (alice, alice_token) = app.signed_in_user("alice@x.com").await;
    let (_, bob_token) = app.signed_in_user("bob@x.com").await;

    let alice_product = app.create_product(&alice_token, "Mug").await;
    let bob_product = app.create_product(&bob_token, "Lamp").await;
    app.create_order(&bob_token, alice_product).await;
    app.create_order(&alice_token, bob_product).await;
    app.create_order(&bob_token, bob_product).await;

    let response = app
        .delete(&format!("/users/{}", alice))
        .bearer_auth(&alice_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Bob keeps his product and the order he placed for it.
    assert_eq!(app.product_count().await, 1);
    assert_eq!(app.order_count().await, 1);
}

#[tokio::test]
#[ignore = "Requires running Postgres database (DATABASE_URL)"]
async fn test_repository_delete_cascades() {
    let db = TestDb::new().await;
    let users = PostgresUserRepository::new(db.pool.clone());
    let products = PostgresProductRepository::new(db.pool.clone());
    let orders = PostgresOrderRepository::new(db.pool.clone());

    let owner = users.create(new_user("owner@x.com")).await.unwrap();
    let product = products.create(new_product(&owner, "Mug")).await.unwrap();
    let order = orders.create(new_order(owner.id, product.id)).await.unwrap();

    users.delete(&owner.id).await.unwrap();

    assert!(users.find_by_id(&owner.id).await.unwrap().is_none());
    assert!(products.find_by_id(&product.id).await.unwrap().is_none());
    assert!(orders.find_by_id(&order.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "Requires running Postgres database (DATABASE_URL)"]
async fn test_order_foreign_keys_map_by_constraint() {
    let db = TestDb::new().await;
    let users = PostgresUserRepository::new(db.pool.clone());
    let products = PostgresProductRepository::new(db.pool.clone());
    let orders = PostgresOrderRepository::new(db.pool.clone());

    let owner = users.create(new_user("owner@x.com")).await.unwrap();
    let product = products.create(new_product(&owner, "Mug")).await.unwrap();

    let missing_product = orders.create(new_order(owner.id, ProductId(999))).await;
    assert!(matches!(
        missing_product,
        Err(OrderError::ProductNotFound(ProductId(999)))
    ));

    let missing_owner = orders.create(new_order(UserId(999), product.id)).await;
    assert!(matches!(missing_owner, Err(OrderError::DatabaseError(_))));
}

#[tokio::test]
#[ignore = "Requires running Postgres database (DATABASE_URL)"]
async fn test_search_treats_wildcards_literally() {
    let app = TestApp::spawn_with_postgres().await;
    let (_, token) = app.signed_in_user("a@x.com").await;

    for name in ["50% off", "500 offers", "a_b", "axb"] {
        app.create_product(&token, name).await;
    }

    for (search, expected) in [("50%", "50% off"), ("A_B", "a_b")] {
        let response = app
            .get("/products")
            .query(&[("search", search)])
            .bearer_auth(&token)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec![expected]);
    }
}

#[tokio::test]
#[ignore = "Requires running Postgres database (DATABASE_URL)"]
async fn test_order_embeds_owner_and_product() {
    let app = TestApp::spawn_with_postgres().await;
    let (seller, seller_token) = app.signed_in_user("seller@x.com").await;
    let (buyer, buyer_token) = app.signed_in_user("buyer@x.com").await;

    let product_id = app.create_product(&seller_token, "Mug").await;
    let order_id = app.create_order(&buyer_token, product_id).await;

    let response = app
        .get(&format!("/orders/{}", order_id))
        .bearer_auth(&buyer_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["owner"]["id"], buyer);
    assert_eq!(body["owner"]["email"], "buyer@x.com");
    assert_eq!(body["product"]["id"], product_id);
    assert_eq!(body["product"]["owner"]["id"], seller);
    assert!(body["owner"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "Requires running Postgres database (DATABASE_URL)"]
async fn test_zero_limit_lists_nothing() {
    let app = TestApp::spawn_with_postgres().await;
    let (_, token) = app.signed_in_user("a@x.com").await;
    app.create_product(&token, "Mug").await;

    let response = app
        .get("/products?limit=0")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!([]));
}
