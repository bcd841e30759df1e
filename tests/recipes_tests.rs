mod fixtures;

use fixtures::requests::{chicken_curry, spinach_dip};
use fixtures::{spawn_server, spawn_server_with, test_config};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::io::Write;

async fn list_recipes(client: &Client, base_url: &str) -> Vec<Value> {
    let response = client
        .get(format!("{}/recipes", base_url))
        .send()
        .await
        .expect("GET /recipes failed");
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.expect("recipes should be a JSON array")
}

async fn post_recipe(client: &Client, base_url: &str, body: &Value) -> reqwest::Response {
    client
        .post(format!("{}/recipes", base_url))
        .json(body)
        .send()
        .await
        .expect("POST /recipes failed")
}

#[tokio::test]
async fn lists_nothing_before_any_post() {
    let server = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/recipes", server.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    assert_eq!(response.json::<Value>().await.unwrap(), json!([]));

    server.close().await.unwrap();
}

#[tokio::test]
async fn adds_a_recipe_on_post() {
    let server = spawn_server().await;
    let client = Client::new();
    let new_recipe = chicken_curry();

    let response = post_recipe(&client, &server.base_url(), &new_recipe).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert!(body["ingredients"].is_array());
    assert!(!body["id"].is_null());

    let mut expected = new_recipe;
    expected["id"] = body["id"].clone();
    assert_eq!(body, expected);

    server.close().await.unwrap();
}

#[tokio::test]
async fn lists_posted_recipes_in_creation_order() {
    let server = spawn_server().await;
    let client = Client::new();
    let base_url = server.base_url();

    let mut created = Vec::new();
    for name in ["Chicken Curry", "Pancakes", "Guacamole"] {
        let body = json!({"name": name, "ingredients": ["salt"]});
        let response = post_recipe(&client, &base_url, &body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        created.push(response.json::<Value>().await.unwrap());
    }

    let listed = list_recipes(&client, &base_url).await;
    assert_eq!(listed, created);

    for item in &listed {
        let object = item.as_object().expect("each recipe is an object");
        for key in ["id", "name", "ingredients"] {
            assert!(object.contains_key(key), "missing `{}` in {}", key, item);
        }
    }

    let mut ids: Vec<_> = listed.iter().map(|r| r["id"].to_string()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    server.close().await.unwrap();
}

#[tokio::test]
async fn updates_a_recipe_on_put() {
    let server = spawn_server().await;
    let client = Client::new();
    let base_url = server.base_url();

    post_recipe(&client, &base_url, &chicken_curry()).await;
    let id = list_recipes(&client, &base_url).await[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let update = spinach_dip(&id);
    let response = client
        .put(format!("{}/recipes/{}", base_url, id))
        .json(&update)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.bytes().await.unwrap().is_empty());

    let listed = list_recipes(&client, &base_url).await;
    assert_eq!(listed, vec![update]);

    server.close().await.unwrap();
}

#[tokio::test]
async fn put_to_unknown_id_is_not_found_and_changes_nothing() {
    let server = spawn_server().await;
    let client = Client::new();
    let base_url = server.base_url();

    post_recipe(&client, &base_url, &chicken_curry()).await;
    let before = list_recipes(&client, &base_url).await;

    let response = client
        .put(format!("{}/recipes/no-such-recipe", base_url))
        .json(&spinach_dip("no-such-recipe"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(list_recipes(&client, &base_url).await, before);

    server.close().await.unwrap();
}

#[tokio::test]
async fn rejects_malformed_bodies() {
    let server = spawn_server().await;
    let client = Client::new();
    let base_url = server.base_url();

    let response = client
        .post(format!("{}/recipes", base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_recipe(
        &client,
        &base_url,
        &json!({"name": "Soup", "ingredients": "water"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_recipe(&client, &base_url, &json!({"name": "", "ingredients": []})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("name"));

    assert!(list_recipes(&client, &base_url).await.is_empty());

    server.close().await.unwrap();
}

#[tokio::test]
async fn seeded_server_lists_seed_recipes_first() {
    let mut seed = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        seed,
        "- name: boiled white rice\n  ingredients: [\"1 cup white rice\", \"2 cups water\"]\n\
         - name: milkshake\n  ingredients: [\"2 tbsp cocoa\", \"1 cup milk\"]"
    )
    .unwrap();

    let mut config = test_config();
    config.store.seed_file = Some(seed.path().to_str().unwrap().to_string());
    let server = spawn_server_with(config).await;
    let client = Client::new();
    let base_url = server.base_url();

    post_recipe(&client, &base_url, &chicken_curry()).await;

    let names: Vec<_> = list_recipes(&client, &base_url)
        .await
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["boiled white rice", "milkshake", "Chicken Curry"]);

    server.close().await.unwrap();
}

#[tokio::test]
async fn close_releases_the_port() {
    let server = spawn_server().await;
    let addr = server.local_addr();
    let client = Client::new();
    list_recipes(&client, &server.base_url()).await;
    drop(client);

    server.close().await.unwrap();

    let mut config = test_config();
    config.server.port = addr.port();
    let reopened = spawn_server_with(config).await;
    assert_eq!(reopened.local_addr(), addr);
    reopened.close().await.unwrap();
}

#[tokio::test]
async fn separate_servers_have_separate_stores() {
    let first = spawn_server().await;
    let second = spawn_server().await;
    let client = Client::new();

    post_recipe(&client, &first.base_url(), &chicken_curry()).await;

    assert_eq!(list_recipes(&client, &first.base_url()).await.len(), 1);
    assert!(list_recipes(&client, &second.base_url()).await.is_empty());

    first.close().await.unwrap();
    second.close().await.unwrap();
}
