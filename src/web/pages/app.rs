// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::not_found::NotFound;
use super::home::Home;
use crate::web::metadata::{GLOBAL_STYLESHEET, SITE_METADATA};
use leptos::prelude::*;
use leptos_meta::{Meta, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet id="leptos" href=GLOBAL_STYLESHEET />
		<Title text=SITE_METADATA.title />
		<Meta name="description" content=SITE_METADATA.description />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=StaticSegment("") view=Home />
			</Routes>
		</Router>
	}
}
