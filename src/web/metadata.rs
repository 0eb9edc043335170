// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Document head fields shared by every page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SiteMetadata {
	pub title: &'static str,
	pub description: &'static str,
}

pub const SITE_METADATA: SiteMetadata = SiteMetadata {
	title: "Cortex",
	description: "AI Platform",
};

/// Language of every rendered document
pub const DOCUMENT_LANG: &str = "en";

/// Compiled from `style/main.scss` by cargo-leptos
pub const GLOBAL_STYLESHEET: &str = "/pkg/cortex.css";
