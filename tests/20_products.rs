mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn product_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "integration fixture",
        "price": "150000",
        "stock": "3",
        "category": "furniture"
    })
}

#[tokio::test]
async fn product_crud_round_trip() -> Result<()> {
    if !common::enabled() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let (_, token) = common::register_and_login(&client, &server.base_url, "crud").await?;

    // Create: stored projection echoes the fields and carries a generated id
    let res = client
        .post(format!("{}/api/products", server.base_url))
        .bearer_auth(&token)
        .json(&product_body("Kursi Lipat"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    let id = body["data"]["id"].as_i64().expect("generated id");
    assert!(id > 0);
    assert_eq!(body["data"]["name"], "Kursi Lipat");
    assert_eq!(body["data"]["price"], "150000");
    assert!(body["data"].get("user_id").is_none(), "owner must not leak: {}", body);

    // Get returns the same projection
    let res = client
        .get(format!("{}/api/products/{}", server.base_url, id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["name"], "Kursi Lipat");

    // Update replaces all mutable fields
    let res = client
        .put(format!("{}/api/products/{}", server.base_url, id))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Kursi Kayu",
            "price": "175000",
            "stock": "2",
            "category": "furniture"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["name"], "Kursi Kayu");
    // Description was omitted from the replacement payload, so it is cleared
    assert_eq!(body["data"]["description"], Value::Null);

    // Idempotent at the storage level: the same payload twice, same state
    let res = client
        .put(format!("{}/api/products/{}", server.base_url, id))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Kursi Kayu",
            "price": "175000",
            "stock": "2",
            "category": "furniture"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["name"], "Kursi Kayu");
    assert_eq!(body["data"]["price"], "175000");

    // Delete responds with the literal OK body
    let res = client
        .delete(format!("{}/api/products/{}", server.base_url, id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"], "OK");

    // Delete is permanent
    let res = client
        .get(format!("{}/api/products/{}", server.base_url, id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn out_of_bounds_fields_are_rejected_with_violations() -> Result<()> {
    if !common::enabled() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let (_, token) = common::register_and_login(&client, &server.base_url, "bounds").await?;

    let res = client
        .post(format!("{}/api/products", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Meja",
            "price": "9".repeat(201),
            "stock": "1",
            "category": "furniture"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<Value>().await?;
    let errors = body["errors"].as_array().expect("errors list");
    assert!(!errors.is_empty());
    assert_eq!(errors[0]["field"], "price");

    Ok(())
}

#[tokio::test]
async fn malformed_path_id_is_a_bad_request() -> Result<()> {
    if !common::enabled() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let (_, token) = common::register_and_login(&client, &server.base_url, "badid").await?;

    let res = client
        .get(format!("{}/api/products/abc", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn remove_of_a_missing_id_is_not_found() -> Result<()> {
    if !common::enabled() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let (_, token) = common::register_and_login(&client, &server.base_url, "gone").await?;

    let res = client
        .delete(format!("{}/api/products/999999999", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn products_are_invisible_across_owners() -> Result<()> {
    if !common::enabled() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (_, owner_token) = common::register_and_login(&client, &server.base_url, "owner").await?;
    let (_, other_token) = common::register_and_login(&client, &server.base_url, "other").await?;

    let res = client
        .post(format!("{}/api/products", server.base_url))
        .bearer_auth(&owner_token)
        .json(&product_body("Rahasia"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let id = res.json::<Value>().await?["data"]["id"].as_i64().expect("id");

    // A valid id owned by someone else behaves as absent
    let res = client
        .get(format!("{}/api/products/{}", server.base_url, id))
        .bearer_auth(&other_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{}/api/products/{}", server.base_url, id))
        .bearer_auth(&other_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // And the other user's search never includes it
    let res = client
        .get(format!("{}/api/products", server.base_url))
        .bearer_auth(&other_token)
        .send()
        .await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body["paging"]["total_item"], 0);

    Ok(())
}

#[tokio::test]
async fn search_paginates_fifteen_products() -> Result<()> {
    if !common::enabled() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let (_, token) = common::register_and_login(&client, &server.base_url, "paging").await?;

    for i in 1..=15 {
        let res = client
            .post(format!("{}/api/products", server.base_url))
            .bearer_auth(&token)
            .json(&product_body(&format!("Produk {:02}", i)))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
    }

    // Default paging: page 1 holds 10 of the 15
    let res = client
        .get(format!("{}/api/products", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"].as_array().expect("data").len(), 10);
    assert_eq!(body["paging"]["page"], 1);
    assert_eq!(body["paging"]["total_item"], 15);
    assert_eq!(body["paging"]["total_page"], 2);

    // Page 2 holds the remaining 5 with the same totals
    let res = client
        .get(format!("{}/api/products?page=2", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"].as_array().expect("data").len(), 5);
    assert_eq!(body["paging"]["page"], 2);
    assert_eq!(body["paging"]["total_item"], 15);
    assert_eq!(body["paging"]["total_page"], 2);

    // Substring filter narrows within the owner's products
    let res = client
        .get(format!("{}/api/products", server.base_url))
        .query(&[("name", "Produk 01")])
        .bearer_auth(&token)
        .send()
        .await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body["paging"]["total_item"], 1);
    assert_eq!(body["data"][0]["name"], "Produk 01");

    // Out-of-range size is a validation failure
    let res = client
        .get(format!("{}/api/products?size=101", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
