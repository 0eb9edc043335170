// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

pub const SIGN_OUT_PATH: &str = "/sign_out";

/// Configuration for the authentication boundary wrapping the page tree
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AuthOptions {
	pub after_sign_out_url: &'static str,
}

impl Default for AuthOptions {
	fn default() -> Self {
		Self { after_sign_out_url: "/" }
	}
}

/// Provided to every descendant of an [`AuthProvider`].
#[derive(Clone, Debug)]
pub struct AuthContext {
	options: AuthOptions,
}

impl AuthContext {
	pub fn new(options: AuthOptions) -> Self {
		Self { options }
	}

	pub fn after_sign_out_url(&self) -> &'static str {
		self.options.after_sign_out_url
	}

	pub fn sign_out_path(&self) -> &'static str {
		SIGN_OUT_PATH
	}
}

/// The signed-in user as stored in the session.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SessionUser {
	pub id: String,
	pub display_name: String,
	pub signed_in_at: DateTime<Utc>,
}

/// Makes session state available to everything rendered inside it. Renders no markup of its own.
#[component]
pub fn AuthProvider(options: AuthOptions, children: Children) -> impl IntoView {
	provide_context(AuthContext::new(options));
	children()
}

/// Gets the auth context. Panics outside of an [`AuthProvider`].
pub fn use_auth() -> AuthContext {
	expect_context()
}

#[server]
pub async fn current_user() -> Result<Option<SessionUser>, ServerFnError> {
	use crate::web::auth::load_session_user;
	use tower_sessions::Session;

	let session: Session = leptos_axum::extract().await?;
	let user = load_session_user(&session).await?;
	Ok(user)
}

#[cfg(test)]
mod tests {
	use super::*;
	use leptos::tachys::view::RenderHtml;

	#[component]
	fn RedirectTarget() -> impl IntoView {
		let auth = use_auth();
		view! { <span id="redirect">{auth.after_sign_out_url()}</span> }
	}

	#[test]
	fn default_redirects_to_root() {
		assert_eq!(AuthOptions::default().after_sign_out_url, "/");
		assert_eq!(AuthContext::new(AuthOptions::default()).sign_out_path(), "/sign_out");
	}

	#[test]
	fn descendants_see_the_context() {
		let html = Owner::new().with(|| {
			view! {
				<AuthProvider options=AuthOptions::default()>
					<div>
						<RedirectTarget />
					</div>
				</AuthProvider>
			}
			.to_html()
		});

		assert!(html.contains(r#"<span id="redirect">/</span>"#), "{html}");
	}

	#[test]
	fn boundary_adds_no_markup() {
		let html = Owner::new().with(|| {
			view! {
				<AuthProvider options=AuthOptions::default()>
					<p>"content"</p>
				</AuthProvider>
			}
			.to_html()
		});

		assert_eq!(html, "<p>content</p>");
	}
}
