// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use cortex::config::parse_config;
	use cortex::web::server::run_server;
	use std::sync::Arc;

	let config_path = std::env::var("CORTEX_CONFIG").unwrap_or_else(|_| String::from("config.kdl"));
	let config = parse_config(&config_path).await?;

	tracing_subscriber::fmt().with_max_level(config.log.level).init();
	tracing::debug!(?config, "Loaded configuration");

	run_server(Arc::new(config)).await
}

#[cfg(not(feature = "ssr"))]
fn main() {
	// The client side is started by `hydrate` in the library.
}
