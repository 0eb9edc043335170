// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::auth_boundary::{AuthOptions, SessionUser};
use super::session_key::SESSION_USER;
use crate::config::SessionConfig;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::cookie::SameSite;
use tower_sessions::service::SessionManagerLayer;
use tower_sessions::{Expiry, MemoryStore, Session};

pub fn session_layer(config: &SessionConfig) -> SessionManagerLayer<MemoryStore> {
	let expiry = Expiry::OnInactivity(time::Duration::hours(config.inactivity_hours));
	SessionManagerLayer::new(MemoryStore::default())
		.with_same_site(SameSite::Lax)
		.with_secure(config.secure_cookie)
		.with_expiry(expiry)
}

pub async fn load_session_user(session: &Session) -> Result<Option<SessionUser>, tower_sessions::session::Error> {
	session.get(SESSION_USER).await
}

/// Route function for signing out. Drops the whole session, then sends the browser to the boundary's redirect target.
pub async fn sign_out_route(State(auth): State<AuthOptions>, session: Session) -> Response {
	let user = match load_session_user(&session).await {
		Ok(user) => user,
		Err(error) => {
			tracing::error!(source = ?error, "Failed to retrieve user from session");
			return StatusCode::INTERNAL_SERVER_ERROR.into_response();
		}
	};

	if let Err(error) = session.flush().await {
		tracing::error!(source = ?error, "Failed to flush session on sign out");
		return StatusCode::INTERNAL_SERVER_ERROR.into_response();
	}

	match user {
		Some(user) => tracing::info!(user.id = %user.id, "Signed out"),
		None => tracing::debug!("Sign out requested without a signed-in user"),
	}

	Redirect::to(auth.after_sign_out_url).into_response()
}
