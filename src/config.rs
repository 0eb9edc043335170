// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlValue};
use miette::{IntoDiagnostic, miette};
use tokio::fs::read_to_string;
use tracing::Level;

pub const DEFAULT_INACTIVITY_HOURS: i64 = 24;
/// Ten years. Session expiry is computed from the current time, so the window has to stay well inside `time`'s range.
pub const MAX_INACTIVITY_HOURS: i64 = 24 * 365 * 10;

pub async fn parse_config(config_path: &str) -> miette::Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(&config_file_contents)
}

/// Parses the contents of a KDL config file.
pub fn parse_config_document(contents: &str) -> miette::Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;

	let web = section(&document, "web").ok_or_else(|| miette!("The config is missing the `web` section"))?;
	let bind_addr = string_arg(web, "web", "bind_addr")?
		.ok_or_else(|| miette!("The config is missing `web.bind_addr`"))?;
	let web = WebConfig { bind_addr };

	let session = match section(&document, "session") {
		Some(session) => {
			let inactivity_hours = match integer_arg(session, "session", "inactivity_hours")? {
				Some(hours) if (1..=MAX_INACTIVITY_HOURS).contains(&hours) => hours,
				Some(hours) if hours > MAX_INACTIVITY_HOURS => {
					return Err(miette!(
						"`session.inactivity_hours` can be at most {}, but it was {}",
						MAX_INACTIVITY_HOURS,
						hours
					));
				}
				Some(hours) => {
					return Err(miette!(
						"`session.inactivity_hours` must be positive, but it was {}",
						hours
					));
				}
				None => DEFAULT_INACTIVITY_HOURS,
			};
			let secure_cookie = bool_arg(session, "session", "secure_cookie")?.unwrap_or(true);
			SessionConfig {
				inactivity_hours,
				secure_cookie,
			}
		}
		None => SessionConfig::default(),
	};

	let log = match section(&document, "log") {
		Some(log) => match string_arg(log, "log", "level")? {
			Some(level) => {
				let level = level
					.parse()
					.map_err(|_| miette!("`log.level` must be one of trace, debug, info, warn or error; got {:?}", level))?;
				LogConfig { level }
			}
			None => LogConfig::default(),
		},
		None => LogConfig::default(),
	};

	Ok(ConfigData { web, session, log })
}

fn section<'a>(document: &'a KdlDocument, name: &str) -> Option<&'a KdlDocument> {
	document.get(name).and_then(|node| node.children())
}

fn arg<'a>(section: &'a KdlDocument, name: &str) -> Option<&'a KdlValue> {
	section.get_arg(name)
}

fn string_arg(section: &KdlDocument, section_name: &str, name: &str) -> miette::Result<Option<String>> {
	match arg(section, name) {
		Some(value) => value
			.as_string()
			.map(|value| Some(value.to_string()))
			.ok_or_else(|| miette!("`{}.{}` must be a string", section_name, name)),
		None => Ok(None),
	}
}

fn integer_arg(section: &KdlDocument, section_name: &str, name: &str) -> miette::Result<Option<i64>> {
	match arg(section, name) {
		Some(value) => value
			.as_integer()
			.and_then(|value| i64::try_from(value).ok())
			.map(Some)
			.ok_or_else(|| miette!("`{}.{}` must be an integer", section_name, name)),
		None => Ok(None),
	}
}

fn bool_arg(section: &KdlDocument, section_name: &str, name: &str) -> miette::Result<Option<bool>> {
	match arg(section, name) {
		Some(value) => value
			.as_bool()
			.map(Some)
			.ok_or_else(|| miette!("`{}.{}` must be #true or #false", section_name, name)),
		None => Ok(None),
	}
}

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub session: SessionConfig,
	pub log: LogConfig,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}

#[derive(Debug)]
pub struct SessionConfig {
	pub inactivity_hours: i64,
	/// Whether session cookies are marked `Secure`. Only turn this off for local development over plain HTTP.
	pub secure_cookie: bool,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			inactivity_hours: DEFAULT_INACTIVITY_HOURS,
			secure_cookie: true,
		}
	}
}

#[derive(Debug)]
pub struct LogConfig {
	pub level: Level,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self { level: Level::INFO }
	}
}
