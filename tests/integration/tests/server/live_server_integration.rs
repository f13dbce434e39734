//! End-to-end tests against a real listening server.

use serde_json::json;
use switchyard_integration_tests::{build_vlan_api, shutdown_test_server, spawn_test_server};

#[tokio::test]
async fn test_full_round_trip_over_a_real_socket() {
    let (dispatcher, _driver) = build_vlan_api(100..=105);
    let (url, handle) = spawn_test_server(dispatcher).await;

    let client = reqwest::Client::new();

    let response = client
        .put(format!("{url}/network/prod"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.bytes().await.unwrap().is_empty());

    let response = client.get(format!("{url}/networks")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    let names: Vec<String> = response.json().await.unwrap();
    assert_eq!(names, vec!["prod".to_string()]);

    let response = client
        .get(format!("{url}/network/prod"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"name": "prod", "network_id": "100", "ports": []})
    );

    shutdown_test_server(handle).await;
}

#[tokio::test]
async fn test_failures_carry_the_wire_format_over_a_real_socket() {
    let (dispatcher, _driver) = build_vlan_api(100..=105);
    let (url, handle) = spawn_test_server(dispatcher).await;

    let client = reqwest::Client::new();

    client
        .put(format!("{url}/network/prod"))
        .send()
        .await
        .unwrap();

    let response = client
        .put(format!("{url}/network/prod"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"type": "DuplicateError", "msg": "network prod already exists"})
    );

    let response = client
        .get(format!("{url}/network/ghost"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    // Unrouted paths fail the same way unknown resources do
    let response = client
        .get(format!("{url}/no/such/route"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["type"], json!("NotFoundError"));

    shutdown_test_server(handle).await;
}

#[tokio::test]
async fn test_concurrent_clients_are_served() {
    let (dispatcher, _driver) = build_vlan_api(100..=199);
    let (url, handle) = spawn_test_server(dispatcher).await;

    let client = reqwest::Client::new();
    let mut tasks = vec![];
    for i in 0..8 {
        let client = client.clone();
        let url = url.clone();
        tasks.push(tokio::spawn(async move {
            let response = client
                .put(format!("{url}/network/net-{i}"))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), 200);
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let response = client.get(format!("{url}/networks")).send().await.unwrap();
    let names: Vec<String> = response.json().await.unwrap();
    assert_eq!(names.len(), 8);

    shutdown_test_server(handle).await;
}
