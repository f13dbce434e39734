//! Direct-vs-HTTP equivalence across the API surface.

use async_trait::async_trait;
use hyper::Method;
use serde_json::json;
use std::sync::Arc;
use switchyard_api::{CreateNetwork, NetworkState, ShowNetwork};
use switchyard_drivers::NullDriver;
use switchyard_exception::{ApiError, ApiResult};
use switchyard_http::{ApiHandler, ApiOutput, BoundArgs, Request};
use switchyard_integration_tests::build_api;
use switchyard_routing::{Dispatcher, RouteTable};
use switchyard_test::{ApiScenario, check_equivalence};

/// Echoes its two URL arguments back as a JSON array
struct EchoPair;

#[async_trait]
impl ApiHandler for EchoPair {
    fn param_names(&self) -> &[&str] {
        &["foo", "bar"]
    }

    async fn call(&self, args: &BoundArgs) -> ApiResult<ApiOutput> {
        let foo = args.require("foo")?;
        let bar = args.require("bar")?;
        Ok(json!([foo, bar]).into())
    }
}

/// Fails with the base failure kind unconditionally
struct AlwaysFails;

#[async_trait]
impl ApiHandler for AlwaysFails {
    fn param_names(&self) -> &[&str] {
        &[]
    }

    async fn call(&self, _args: &BoundArgs) -> ApiResult<ApiOutput> {
        Err(ApiError::api("Basic test of the APIError code."))
    }
}

/// Succeeds with the empty-content marker
struct AcksOnly;

#[async_trait]
impl ApiHandler for AcksOnly {
    fn param_names(&self) -> &[&str] {
        &[]
    }

    async fn call(&self, _args: &BoundArgs) -> ApiResult<ApiOutput> {
        Ok(ApiOutput::Empty)
    }
}

fn scenario_dispatcher() -> Dispatcher {
    let mut table = RouteTable::new();
    table
        .register(Method::GET, "/func/{foo}/{bar}", Arc::new(EchoPair))
        .unwrap();
    table
        .register(Method::GET, "/failure", Arc::new(AlwaysFails))
        .unwrap();
    table
        .register(Method::PUT, "/ack", Arc::new(AcksOnly))
        .unwrap();
    Dispatcher::new(Arc::new(table))
}

struct UrlArgsScenario;

#[async_trait]
impl ApiScenario for UrlArgsScenario {
    async fn api_call(&self) -> ApiResult<ApiOutput> {
        let args = BoundArgs::new().with("foo", "alice").with("bar", "bob");
        EchoPair.call(&args).await
    }

    fn request(&self) -> Request {
        Request::builder()
            .method(Method::GET)
            .uri("/func/alice/bob")
            .build()
            .unwrap()
    }
}

struct BaseFailureScenario;

#[async_trait]
impl ApiScenario for BaseFailureScenario {
    async fn api_call(&self) -> ApiResult<ApiOutput> {
        AlwaysFails.call(&BoundArgs::new()).await
    }

    fn request(&self) -> Request {
        Request::builder()
            .method(Method::GET)
            .uri("/failure")
            .build()
            .unwrap()
    }
}

struct EmptyMarkerScenario;

#[async_trait]
impl ApiScenario for EmptyMarkerScenario {
    async fn api_call(&self) -> ApiResult<ApiOutput> {
        AcksOnly.call(&BoundArgs::new()).await
    }

    fn request(&self) -> Request {
        Request::builder()
            .method(Method::PUT)
            .uri("/ack")
            .build()
            .unwrap()
    }
}

/// Allocation failure through the real API: the null driver never
/// hands out a network id, and the failed create leaves no state
/// behind, so both legs start from the same world.
struct AllocationFailureScenario {
    state: Arc<NetworkState>,
}

#[async_trait]
impl ApiScenario for AllocationFailureScenario {
    async fn api_call(&self) -> ApiResult<ApiOutput> {
        let handler = CreateNetwork::new(Arc::clone(&self.state), Arc::new(NullDriver));
        let args = BoundArgs::new().with("network", "prod");
        handler.call(&args).await
    }

    fn request(&self) -> Request {
        Request::builder()
            .method(Method::PUT)
            .uri("/network/prod")
            .build()
            .unwrap()
    }
}

struct MissingNetworkScenario {
    state: Arc<NetworkState>,
}

#[async_trait]
impl ApiScenario for MissingNetworkScenario {
    async fn api_call(&self) -> ApiResult<ApiOutput> {
        let handler = ShowNetwork::new(Arc::clone(&self.state));
        let args = BoundArgs::new().with("network", "ghost");
        handler.call(&args).await
    }

    fn request(&self) -> Request {
        Request::builder()
            .method(Method::GET)
            .uri("/network/ghost")
            .build()
            .unwrap()
    }
}

#[tokio::test]
async fn test_url_arguments_reach_the_handler_identically() {
    check_equivalence(&scenario_dispatcher(), &UrlArgsScenario).await;
}

#[tokio::test]
async fn test_base_failures_render_identically() {
    check_equivalence(&scenario_dispatcher(), &BaseFailureScenario).await;
}

#[tokio::test]
async fn test_empty_marker_renders_identically() {
    check_equivalence(&scenario_dispatcher(), &EmptyMarkerScenario).await;
}

#[tokio::test]
async fn test_exhausted_allocation_renders_identically() {
    let (dispatcher, state) = build_api(Arc::new(NullDriver));
    let scenario = AllocationFailureScenario { state };
    check_equivalence(dispatcher.as_ref(), &scenario).await;
}

#[tokio::test]
async fn test_missing_network_renders_identically() {
    let (dispatcher, state) = build_api(Arc::new(NullDriver));
    let scenario = MissingNetworkScenario { state };
    check_equivalence(dispatcher.as_ref(), &scenario).await;
}
