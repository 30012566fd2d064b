//! HTML rendering of the file listing.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! templating: the page structure is checked at build time and every
//! interpolated value — including file names containing markup
//! metacharacters — is escaped automatically.
//!
//! The stylesheet is embedded from `static/style.css` at compile time
//! and inlined into a `<style>` tag, so the generated page is a single
//! self-contained file.

use crate::config::SiteConfig;
use crate::list::Entry;
use maud::{DOCTYPE, Markup, html};

const CSS: &str = include_str!("../static/style.css");

/// Render the complete index document for a listing.
///
/// The listing is rendered in the order given; an empty listing gets an
/// empty-state message instead of a bare table.
pub fn render_index(entries: &[Entry], config: &SiteConfig) -> Markup {
    let content = html! {
        main.listing-page {
            header.listing-header {
                h1 { (config.title) }
                @if let Some(intro) = &config.intro {
                    p.listing-intro { (intro) }
                }
            }
            @if entries.is_empty() {
                p.listing-empty { "No files yet." }
            } @else {
                table.listing {
                    thead {
                        tr {
                            th.name { "Name" }
                            th.modified { "Modified" }
                        }
                    }
                    tbody {
                        @for entry in entries {
                            tr {
                                td.name {
                                    a href=(entry.name) { (entry.name) }
                                }
                                td.modified { (entry.modified) }
                            }
                        }
                    }
                }
            }
        }
    };

    base_document(&config.title, content)
}

/// Renders the base HTML document structure.
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (CSS) }
            }
            body {
                (content)
            }
        }
    }
}
