//! # docs-nav
//!
//! Previous/next pagination for documentation sites. A static YAML link
//! manifest describes every page and its nesting; given the current page's
//! path, `docs-nav` finds the pages immediately before and after it and
//! renders the pair of link cards readers use to page through the docs.
//!
//! # Pipeline
//!
//! ```text
//! developer-docs-links.yaml ──load──▶ [LinkNode] ──flatten──▶ [FlatEntry]
//!                                                                │
//!                              current path ──locate/neighbors──┘
//!                                                                ▼
//!                    locales/<lang>/*.json ──▶ Catalog ──▶ render ──▶ HTML
//! ```
//!
//! Every step is a pure function of the manifest and the current path.
//! Nothing is cached between requests; the manifest is small enough that
//! flattening on every render is free.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `LinkNode`, `FlatEntry`, `NavigationResult` |
//! | [`manifest`] | YAML manifest loading and non-fatal checks |
//! | [`resolve`] | Flattening, current-page lookup, neighbor selection |
//! | [`i18n`] | JSON message catalogs, locale fallback, text direction |
//! | [`render`] | Maud rendering of the control and its stylesheet |
//! | [`config`] | `docs-nav.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Example
//!
//! ```
//! use docs_nav::i18n::Catalog;
//! use docs_nav::resolve::{UnmatchedPolicy, resolve};
//! use docs_nav::{manifest, render};
//!
//! let tree = manifest::parse_manifest(
//!     "- { id: intro, href: /intro/ }\n- { id: accounts, href: /accounts/ }\n",
//! )
//! .unwrap();
//! let nav = resolve(&tree, "/intro/", UnmatchedPolicy::First);
//! assert_eq!(nav.next.as_ref().map(|e| e.href.as_str()), Some("/accounts/"));
//!
//! let html = render::render_docs_nav(&nav, &Catalog::empty("en"), false).into_string();
//! assert!(html.contains(r#"rel="next""#));
//! ```

pub mod config;
pub mod i18n;
pub mod manifest;
pub mod output;
pub mod render;
pub mod resolve;
pub mod types;
