//! Full network and port lifecycle through the HTTP surface.

use serde_json::json;
use std::sync::Arc;
use switchyard_drivers::{NullDriver, VlanDriver};
use switchyard_integration_tests::{build_api, build_vlan_api};
use switchyard_test::{ApiClient, ResponseExt};

fn client_over_pool(range: std::ops::RangeInclusive<u16>) -> (ApiClient, VlanDriver) {
    let (dispatcher, driver) = build_vlan_api(range);
    (ApiClient::new(dispatcher), driver)
}

#[tokio::test]
async fn test_network_create_show_and_list() {
    let (client, _driver) = client_over_pool(100..=105);

    client
        .put("/network/prod", &json!({}), "json")
        .await
        .unwrap()
        .assert_ok();
    client
        .put("/network/dev", &json!({}), "json")
        .await
        .unwrap()
        .assert_ok();

    let listing = client.get("/networks").await.unwrap();
    listing.assert_ok();
    assert_eq!(listing.json_value().unwrap(), json!(["dev", "prod"]));

    let shown = client.get("/network/prod").await.unwrap();
    shown.assert_ok();
    assert_eq!(
        shown.json_value().unwrap(),
        json!({"name": "prod", "network_id": "100", "ports": []})
    );
}

#[tokio::test]
async fn test_duplicate_network_name_is_a_conflict() {
    let (client, _driver) = client_over_pool(100..=105);

    client
        .put("/network/prod", &json!({}), "json")
        .await
        .unwrap()
        .assert_ok();

    let response = client.put("/network/prod", &json!({}), "json").await.unwrap();
    response.assert_conflict();
    assert_eq!(
        response.json_value().unwrap(),
        json!({"type": "DuplicateError", "msg": "network prod already exists"})
    );
}

#[tokio::test]
async fn test_exhausted_pool_is_service_unavailable() {
    let (client, _driver) = client_over_pool(100..=100);

    client
        .put("/network/only", &json!({}), "json")
        .await
        .unwrap()
        .assert_ok();

    let response = client.put("/network/more", &json!({}), "json").await.unwrap();
    response.assert_service_unavailable();
    assert_eq!(
        response.json_value().unwrap(),
        json!({"type": "AllocationError", "msg": "no network ids are available"})
    );
}

#[tokio::test]
async fn test_port_attach_and_detach_flow() {
    let (client, driver) = client_over_pool(100..=105);

    client
        .put("/network/prod", &json!({}), "json")
        .await
        .unwrap()
        .assert_ok();
    client
        .put("/network/prod/port/eth0", &json!({}), "json")
        .await
        .unwrap()
        .assert_ok();

    // The assignment reached the switch
    assert_eq!(driver.port_map().get("eth0"), Some(&Some("100".to_string())));

    let shown = client.get("/network/prod").await.unwrap();
    assert_eq!(
        shown.json_value().unwrap(),
        json!({"name": "prod", "network_id": "100", "ports": ["eth0"]})
    );

    // A port is attached to at most one network at a time
    client
        .put("/network/dev", &json!({}), "json")
        .await
        .unwrap()
        .assert_ok();
    let rejected = client
        .put("/network/dev/port/eth0", &json!({}), "json")
        .await
        .unwrap();
    rejected.assert_conflict();
    assert_eq!(
        rejected.json_value().unwrap(),
        json!({
            "type": "DuplicateError",
            "msg": "port eth0 is already attached to network prod"
        })
    );

    client
        .delete("/network/prod/port/eth0")
        .await
        .unwrap()
        .assert_ok();
    assert_eq!(driver.port_map().get("eth0"), Some(&None));

    // Detaching a second time is a miss
    let gone = client.delete("/network/prod/port/eth0").await.unwrap();
    gone.assert_not_found();
    assert_eq!(
        gone.json_value().unwrap(),
        json!({
            "type": "NotFoundError",
            "msg": "port eth0 is not attached to network prod"
        })
    );
}

#[tokio::test]
async fn test_encoded_port_names_bind_decoded() {
    let (client, driver) = client_over_pool(100..=105);

    client
        .put("/network/prod", &json!({}), "json")
        .await
        .unwrap()
        .assert_ok();

    // An encoded slash stays inside its path segment
    client
        .put("/network/prod/port/gi0%2F1", &json!({}), "json")
        .await
        .unwrap()
        .assert_ok();
    assert_eq!(driver.port_map().get("gi0/1"), Some(&Some("100".to_string())));

    let shown = client.get("/network/prod").await.unwrap();
    assert_eq!(shown.json_value().unwrap()["ports"], json!(["gi0/1"]));

    client
        .delete("/network/prod/port/gi0%2F1")
        .await
        .unwrap()
        .assert_ok();
    assert_eq!(driver.port_map().get("gi0/1"), Some(&None));
}

#[tokio::test]
async fn test_delete_refuses_networks_with_ports_then_frees_the_id() {
    let (client, driver) = client_over_pool(100..=100);

    client
        .put("/network/prod", &json!({}), "json")
        .await
        .unwrap()
        .assert_ok();
    client
        .put("/network/prod/port/eth0", &json!({}), "json")
        .await
        .unwrap()
        .assert_ok();

    let refused = client.delete("/network/prod").await.unwrap();
    refused.assert_bad_request();
    assert_eq!(
        refused.json_value().unwrap(),
        json!({"type": "APIError", "msg": "network prod still has attached ports"})
    );

    client
        .delete("/network/prod/port/eth0")
        .await
        .unwrap()
        .assert_ok();
    client.delete("/network/prod").await.unwrap().assert_ok();

    // The freed id is available again
    assert_eq!(driver.available(), 1);
    client
        .put("/network/next", &json!({}), "json")
        .await
        .unwrap()
        .assert_ok();
    let shown = client.get("/network/next").await.unwrap();
    assert_eq!(shown.json_value().unwrap()["network_id"], json!("100"));
}

#[tokio::test]
async fn test_unknown_network_operations_are_not_found() {
    let (dispatcher, _state) = build_api(Arc::new(NullDriver));
    let client = ApiClient::new(dispatcher);

    let shown = client.get("/network/ghost").await.unwrap();
    shown.assert_not_found();
    assert_eq!(
        shown.json_value().unwrap(),
        json!({"type": "NotFoundError", "msg": "network ghost does not exist"})
    );

    client
        .delete("/network/ghost")
        .await
        .unwrap()
        .assert_not_found();
    client
        .put("/network/ghost/port/eth0", &json!({}), "json")
        .await
        .unwrap()
        .assert_not_found();
}
