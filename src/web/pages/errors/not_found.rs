// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
	#[cfg(feature = "ssr")]
	{
		if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
			response.set_status(axum::http::StatusCode::NOT_FOUND);
		}
	}

	view! {
		<main id="not_found_page">
			<h1>"Page not found"</h1>
			<p>"There's nothing at this address."</p>
			<a href="/">"Back to Cortex"</a>
		</main>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use leptos::tachys::view::RenderHtml;

	#[test]
	fn links_back_to_root() {
		let html = Owner::new().with(|| view! { <NotFound /> }.to_html());
		assert!(html.contains(r#"<main id="not_found_page">"#), "{html}");
		assert!(html.contains(r#"<a href="/">Back to Cortex</a>"#), "{html}");
	}
}
