// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::auth::{session_layer, sign_out_route};
use super::auth_boundary::{AuthOptions, SIGN_OUT_PATH};
use super::pages::app::App;
use super::pages::shell::shell;
use super::state::AppState;
use crate::config::ConfigData;
use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream_with_context};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub async fn run_server(config: Arc<ConfigData>) -> miette::Result<()> {
	let web_config = get_configuration(None).into_diagnostic()?;
	let site_addr = &config.web.bind_addr;
	let leptos_options = web_config.leptos_options;
	let routes = generate_route_list(App);

	let app_state = AppState {
		leptos_options,
		auth: AuthOptions::default(),
	};

	let app = Router::new()
		.leptos_routes_with_context(
			&app_state,
			routes,
			{
				let app_state = app_state.clone();
				move || provide_context(app_state.clone())
			},
			{
				let leptos_options = app_state.leptos_options.clone();
				move || shell(leptos_options.clone())
			},
		)
		.route(SIGN_OUT_PATH, post(sign_out_route))
		.fallback(file_and_error_handler)
		.layer(
			ServiceBuilder::new()
				.layer(TraceLayer::new_for_http())
				.layer(session_layer(&config.session)),
		)
		.with_state(app_state);

	tracing::info!("Listening on http://{}", site_addr);
	let listener = TcpListener::bind(site_addr).await.into_diagnostic()?;
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

/// Serves built assets from the site root. Anything that isn't a file there is rendered by the app, which answers
/// unknown paths with the not-found page.
async fn file_and_error_handler(uri: Uri, State(state): State<AppState>, request: Request) -> Response {
	let Ok(file_request) = Request::builder().uri(uri).body(Body::empty()) else {
		return StatusCode::INTERNAL_SERVER_ERROR.into_response();
	};

	let site_root = state.leptos_options.site_root.clone();
	let file_response = match ServeDir::new(&*site_root).oneshot(file_request).await {
		Ok(response) => response,
		Err(error) => {
			tracing::error!(source = ?error, "Failed to read from the site root");
			return StatusCode::INTERNAL_SERVER_ERROR.into_response();
		}
	};
	if file_response.status() == StatusCode::OK {
		return file_response.into_response();
	}

	let leptos_options = state.leptos_options.clone();
	let render = render_app_to_stream_with_context(
		move || provide_context(state.clone()),
		move || shell(leptos_options.clone()),
	);
	render(request).await.into_response()
}
