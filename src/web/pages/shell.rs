// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::app::App;
use crate::web::auth_boundary::{AuthOptions, AuthProvider};
use crate::web::metadata::DOCUMENT_LANG;
use leptos::prelude::*;
use leptos_meta::MetaTags;

/// The document frame every page is rendered into.
///
/// `head` is appended to the document head. `children` is called exactly once, inside the auth boundary, and its
/// output is the whole content of `<body>`.
pub fn document<H, C, F>(head: H, children: F) -> impl IntoView
where
	H: IntoView + 'static,
	C: IntoView + 'static,
	F: FnOnce() -> C + Send + 'static,
{
	view! {
		<AuthProvider options=AuthOptions::default()>
			<!DOCTYPE html>
			<html lang=DOCUMENT_LANG>
				<head>
					<meta charset="utf-8" />
					<meta name="viewport" content="width=device-width, initial-scale=1" />
					{head}
				</head>
				<body>
					{children()}
				</body>
			</html>
		</AuthProvider>
	}
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
	document(
		view! {
			<HydrationScripts options />
			<MetaTags />
		},
		App,
	)
}

/// Mounted onto `<body>` when hydrating, so the client sees the same boundary as the server render.
pub fn hydrated_body() -> impl IntoView {
	view! {
		<AuthProvider options=AuthOptions::default()>
			<App />
		</AuthProvider>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::web::auth_boundary::use_auth;
	use leptos::tachys::view::RenderHtml;

	#[component]
	fn PageA() -> impl IntoView {
		view! { <section id="page_a">"Page A"</section> }
	}

	fn render_page_a() -> String {
		Owner::new().with(|| document((), PageA).to_html())
	}

	fn body_of(html: &str) -> &str {
		let start = html.find("<body>").expect("document has a body") + "<body>".len();
		let end = html.find("</body>").expect("body is closed");
		&html[start..end]
	}

	#[test]
	fn document_root_is_english() {
		let html = render_page_a();
		assert!(html.starts_with("<!DOCTYPE html>"), "{html}");
		assert!(html.contains(r#"<html lang="en">"#), "{html}");
		assert!(html.ends_with("</html>"), "{html}");
	}

	#[test]
	fn children_are_mounted_once_in_body() {
		let html = render_page_a();
		assert_eq!(html.matches(r#"id="page_a""#).count(), 1, "{html}");
		assert_eq!(body_of(&html), r#"<section id="page_a">Page A</section>"#);
	}

	#[test]
	fn children_are_inside_the_auth_boundary() {
		let html = Owner::new().with(|| {
			document((), || {
				let auth = use_auth();
				view! { <a href=auth.sign_out_path()>{auth.after_sign_out_url()}</a> }
			})
			.to_html()
		});

		assert_eq!(body_of(&html), r#"<a href="/sign_out">/</a>"#);
	}

	#[test]
	fn head_content_is_placed_in_head() {
		let html = Owner::new().with(|| document(view! { <link rel="icon" href="/favicon.ico" /> }, PageA).to_html());
		let head_end = html.find("</head>").unwrap();
		let icon = html.find(r#"<link rel="icon""#).unwrap();
		assert!(icon < head_end, "{html}");
	}

	#[cfg(feature = "ssr")]
	#[tokio::test]
	async fn page_tree_registers_head_metadata() {
		use futures::StreamExt;
		use futures::stream;
		use any_spawner::Executor;
		use leptos_meta::ServerMetaContext;
		use leptos_router::location::RequestUrl;

		// Home's Await spawns its server call; it fails without a request, which doesn't affect the head.
		let _ = Executor::init_tokio();

		let (html, meta_output) = Owner::new().with(|| {
			provide_context(RequestUrl::new("/"));
			let (meta_context, meta_output) = ServerMetaContext::new();
			provide_context(meta_context);
			let html = document(view! { <MetaTags /> }, App).to_html();
			(html, meta_output)
		});
		let html: String = meta_output
			.inject_meta_context(stream::iter([html]))
			.await
			.collect()
			.await;

		let head_end = html.find("</head>").expect("document has a head");
		let head = &html[..head_end];
		assert!(head.contains("<title>Cortex</title>"), "{html}");
		assert!(head.contains(r#"<meta name="description" content="AI Platform">"#), "{html}");
		assert_eq!(html.matches(r#"href="/pkg/cortex.css""#).count(), 1, "{html}");
		assert!(head.contains(r#"href="/pkg/cortex.css""#), "{html}");
		assert!(body_of(&html).contains(r#"<main id="home_page">"#), "{html}");
	}

	#[test]
	fn rendering_is_idempotent() {
		assert_eq!(render_page_a(), render_page_a());
	}
}
