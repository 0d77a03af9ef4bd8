//! HTML rendering of the previous/next control.
//!
//! ## Structure
//!
//! ```text
//! nav.docs-nav [aria-label="Paginate to document"]
//! ├── a.docs-nav-card.previous [rel=prev]   👈  PREVIOUS / <title>
//! │   or div.docs-nav-placeholder
//! └── a.docs-nav-card.next [rel=next]       NEXT / <title>  👉
//!     or div.docs-nav-placeholder
//! ```
//!
//! Every card carries `data-event-*` attributes (category, action, name) so a
//! page-level analytics script can report clicks without per-link wiring.
//!
//! Layout is CSS only: the embedded stylesheet stacks the slots in reverse on
//! narrow and large viewports and places them side by side on medium and
//! extra-large ones. Placeholders take up space only at the widest breakpoint,
//! which keeps a lone "next" card on the right.
//!
//! Uses [maud](https://maud.lambda.xyz/); all interpolated text is escaped.

use crate::i18n::{Localizer, mirror_icon};
use crate::types::{Direction, FlatEntry, NavigationResult};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Stylesheet for the control, embedded at compile time.
pub const DOCS_NAV_CSS: &str = include_str!("../static/docs-nav.css");

/// Analytics category reported for every card click.
pub const EVENT_CATEGORY: &str = "next/previous article DocsNav";

const NAV_LABEL: &str = "Paginate to document";

/// Emoji shortcode for a direction's icon.
pub fn icon_shortcode(direction: Direction) -> &'static str {
    match direction {
        Direction::Previous => ":point_left:",
        Direction::Next => ":point_right:",
    }
}

/// The glyph the shortcode stands for.
pub fn icon_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Previous => "\u{1F448}",
        Direction::Next => "\u{1F449}",
    }
}

/// Render the pagination control for a resolved navigation result.
pub fn render_docs_nav<L: Localizer + ?Sized>(
    nav: &NavigationResult,
    localizer: &L,
    content_not_translated: bool,
) -> Markup {
    let mirrored = mirror_icon(localizer.is_rtl(), content_not_translated);

    html! {
        nav.docs-nav aria-label=(NAV_LABEL) {
            (render_slot(nav.previous.as_ref(), Direction::Previous, localizer, mirrored))
            (render_slot(nav.next.as_ref(), Direction::Next, localizer, mirrored))
        }
    }
}

fn render_slot<L: Localizer + ?Sized>(
    entry: Option<&FlatEntry>,
    direction: Direction,
    localizer: &L,
    mirrored: bool,
) -> Markup {
    match entry {
        Some(entry) => card_link(entry, direction, localizer, mirrored),
        None => placeholder(),
    }
}

/// A single link card.
fn card_link<L: Localizer + ?Sized>(
    entry: &FlatEntry,
    direction: Direction,
    localizer: &L,
    mirrored: bool,
) -> Markup {
    let icon = html! {
        span.docs-nav-icon.mirrored[mirrored] aria-hidden="true" data-shortcode=(icon_shortcode(direction)) {
            (icon_glyph(direction))
        }
    };
    let text = html! {
        div.docs-nav-text {
            p.docs-nav-label { (localizer.t(direction.key())) }
            p.docs-nav-title { (localizer.t(&entry.id)) }
        }
    };

    html! {
        a class={ "docs-nav-card " (direction.key()) }
            href=(entry.href)
            rel=(direction.rel())
            data-event-category=(EVENT_CATEGORY)
            data-event-action="click"
            data-event-name=(direction.key())
        {
            @match direction {
                Direction::Previous => { (icon) (text) }
                Direction::Next => { (text) (icon) }
            }
        }
    }
}

/// Empty slot keeping the remaining card in place on wide layouts.
fn placeholder() -> Markup {
    html! {
        div.docs-nav-placeholder {}
    }
}

/// Wrap the control in a standalone page, for previews.
pub fn render_document(title: &str, lang: &str, is_rtl: bool, content: Markup) -> Markup {
    let dir = if is_rtl { "rtl" } else { "ltr" };
    html! {
        (DOCTYPE)
        html lang=(lang) dir=(dir) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(DOCS_NAV_CSS)) }
            }
            body {
                main {
                    (content)
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
