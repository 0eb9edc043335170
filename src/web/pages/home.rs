// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::auth_boundary::{SessionUser, current_user, use_auth};
use crate::web::metadata::SITE_METADATA;
use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
	view! {
		<main id="home_page">
			<h1>{SITE_METADATA.title}</h1>
			<p>{SITE_METADATA.description}</p>
			<Await future=current_user() let:user>
				{session_status(user)}
			</Await>
		</main>
	}
}

fn session_status(user: &Result<Option<SessionUser>, ServerFnError>) -> AnyView {
	match user {
		Ok(Some(user)) => view! {
			<SignedIn user={user.clone()} />
		}.into_any(),
		Ok(None) => view! {
			<p id="home_signed_out">"You are not signed in."</p>
		}.into_any(),
		Err(error) => {
			tracing::warn!(source = ?error, "Failed to load the session user");
			view! {
				<p id="home_session_error">"Your session could not be loaded."</p>
			}.into_any()
		}
	}
}

#[component]
fn SignedIn(user: SessionUser) -> impl IntoView {
	let auth = use_auth();

	view! {
		<div id="home_signed_in">
			<p>"Signed in as " <span class="home_user_name">{user.display_name}</span></p>
			<form method="post" action=auth.sign_out_path()>
				<button type="submit">"Sign out"</button>
			</form>
		</div>
	}
}
