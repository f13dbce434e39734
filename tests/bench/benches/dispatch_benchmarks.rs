//! Performance benchmarks for the dispatch pipeline
//!
//! Covers route matching on its own, the full dispatch path from
//! request to response, and the registered API surface over an
//! in-memory driver.

use async_trait::async_trait;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hyper::Method;
use serde_json::json;
use std::sync::Arc;
use switchyard_api::{NetworkState, register_api};
use switchyard_drivers::VlanDriver;
use switchyard_exception::ApiResult;
use switchyard_http::{ApiHandler, ApiOutput, BoundArgs, Request};
use switchyard_routing::{Dispatcher, RouteTable};
use tokio::runtime::Runtime;

/// Handler with a fixed response for pipeline benchmarks
struct StaticHandler;

#[async_trait]
impl ApiHandler for StaticHandler {
	fn param_names(&self) -> &[&str] {
		&[]
	}

	async fn call(&self, _args: &BoundArgs) -> ApiResult<ApiOutput> {
		Ok(json!({"ok": true}).into())
	}
}

/// Handler that binds two URL arguments
struct PairHandler;

#[async_trait]
impl ApiHandler for PairHandler {
	fn param_names(&self) -> &[&str] {
		&["foo", "bar"]
	}

	async fn call(&self, args: &BoundArgs) -> ApiResult<ApiOutput> {
		let foo = args.require("foo")?;
		let bar = args.require("bar")?;
		Ok(json!([foo, bar]).into())
	}
}

fn routed_table() -> RouteTable {
	let mut table = RouteTable::new();
	table
		.register(Method::GET, "/static", Arc::new(StaticHandler))
		.unwrap();
	table
		.register(Method::GET, "/func/{foo}/{bar}", Arc::new(PairHandler))
		.unwrap();
	table
		.register(Method::GET, "/a/{x}/c", Arc::new(StaticHandler))
		.unwrap();
	table
		.register(Method::GET, "/a/b/{y}/d", Arc::new(StaticHandler))
		.unwrap();
	table
}

/// Benchmark route matching in isolation
fn benchmark_route_matching(c: &mut Criterion) {
	let table = routed_table();

	c.bench_function("route_match_literal", |b| {
		b.iter(|| {
			black_box(table.match_path(&Method::GET, "/static"));
		});
	});

	c.bench_function("route_match_variables", |b| {
		b.iter(|| {
			black_box(table.match_path(&Method::GET, "/func/alice/bob"));
		});
	});

	c.bench_function("route_match_miss", |b| {
		b.iter(|| {
			black_box(table.match_path(&Method::GET, "/missing/path"));
		});
	});
}

/// Benchmark the dispatch pipeline end to end
fn benchmark_dispatch(c: &mut Criterion) {
	let rt = Runtime::new().unwrap();
	let dispatcher = Dispatcher::new(Arc::new(routed_table()));

	c.bench_function("dispatch_static_route", |b| {
		b.iter(|| {
			rt.block_on(async {
				let request = Request::builder().uri("/static").build().unwrap();
				black_box(dispatcher.dispatch(request).await);
			});
		});
	});

	c.bench_function("dispatch_url_arguments", |b| {
		b.iter(|| {
			rt.block_on(async {
				let request = Request::builder().uri("/func/alice/bob").build().unwrap();
				black_box(dispatcher.dispatch(request).await);
			});
		});
	});

	c.bench_function("dispatch_unmatched_route", |b| {
		b.iter(|| {
			rt.block_on(async {
				let request = Request::builder().uri("/nope").build().unwrap();
				black_box(dispatcher.dispatch(request).await);
			});
		});
	});
}

/// Benchmark the registered API surface over an in-memory driver
fn benchmark_api_surface(c: &mut Criterion) {
	let rt = Runtime::new().unwrap();

	c.bench_function("api_network_create_and_delete", |b| {
		let state = Arc::new(NetworkState::new());
		let driver = Arc::new(VlanDriver::new(100..=4000));
		let mut table = RouteTable::new();
		register_api(&mut table, Arc::clone(&state), driver).unwrap();
		let dispatcher = Dispatcher::new(Arc::new(table));

		b.iter(|| {
			rt.block_on(async {
				let create = Request::builder()
					.method(Method::PUT)
					.uri("/network/bench")
					.build()
					.unwrap();
				black_box(dispatcher.dispatch(create).await);

				let delete = Request::builder()
					.method(Method::DELETE)
					.uri("/network/bench")
					.build()
					.unwrap();
				black_box(dispatcher.dispatch(delete).await);
			});
		});
	});

	c.bench_function("api_network_listing", |b| {
		let state = Arc::new(NetworkState::new());
		let driver = Arc::new(VlanDriver::new(100..=4000));
		let mut table = RouteTable::new();
		register_api(&mut table, Arc::clone(&state), driver).unwrap();
		let dispatcher = Dispatcher::new(Arc::new(table));

		rt.block_on(async {
			for i in 0..50 {
				let request = Request::builder()
					.method(Method::PUT)
					.uri(format!("/network/net-{i}"))
					.build()
					.unwrap();
				dispatcher.dispatch(request).await;
			}
		});

		b.iter(|| {
			rt.block_on(async {
				let request = Request::builder().uri("/networks").build().unwrap();
				black_box(dispatcher.dispatch(request).await);
			});
		});
	});
}

criterion_group!(
	benches,
	benchmark_route_matching,
	benchmark_dispatch,
	benchmark_api_surface
);

criterion_main!(benches);
