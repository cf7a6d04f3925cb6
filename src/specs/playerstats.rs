// src/specs/playerstats.rs
//! Scraping *spec* for a season player-stats page (one position).
//!
//! Layout relied on:
//! - Position name in the element with class `pageheader`, e.g.
//!   "Tight End Stats - 2017 Season".
//! - Column labels as `<b>` elements; the first one heads the player column.
//! - Player cells `<td class="sort1" align="left">1. Travis Kelce</td>`.
//! - Stat cells `<td class="sort1" align="center">16</td>`, row after row.

use crate::config::consts::{
    NAME_CELL_ALIGN, PAGEHEADER_CLASS, PAGEHEADER_SUFFIX, STAT_CELL_ALIGN, STAT_CELL_CLASS,
};
use crate::core::html::{self, Element, elements};
use crate::error::{Error, Result};

/// Raw text cells of one page, untouched beyond whitespace cleanup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageCells {
    pub position: String,
    pub headers: Vec<String>,
    /// One raw name cell per athlete ("rank first last …").
    pub names: Vec<String>,
    /// Flat stat stream, all athletes back to back.
    pub stats: Vec<String>,
}

impl PageCells {
    pub fn athletes(&self) -> usize {
        self.names.len()
    }
}

pub fn extract(doc: &str) -> Result<PageCells> {
    let position = extract_position(doc)
        .ok_or_else(|| Error::Page(s!("no pageheader element")))?;

    let headers: Vec<String> = elements(doc, "b").map(|b| b.text()).collect();
    if headers.is_empty() {
        return Err(Error::Page(s!("no header labels")));
    }

    let mut names = Vec::new();
    let mut stats = Vec::new();
    for td in elements(doc, "td").filter(|td| td.has_class(STAT_CELL_CLASS)) {
        if td.attr_is("align", NAME_CELL_ALIGN) {
            names.push(td.text());
        } else if td.attr_is("align", STAT_CELL_ALIGN) {
            stats.push(td.text());
        }
    }

    log::info!(
        "page '{}': {} headers, {} players, {} stat cells",
        position, headers.len(), names.len(), stats.len()
    );
    Ok(PageCells { position, headers, names, stats })
}

/* ---------- helpers ---------- */

fn extract_position(doc: &str) -> Option<String> {
    // the class can sit on any tag (td, div, span)
    let lc = html::to_lower(doc);
    let mut from = 0usize;
    while let Some(rel) = lc[from..].find(PAGEHEADER_CLASS) {
        let hit = from + rel;
        from = hit + PAGEHEADER_CLASS.len();

        let Some(start) = lc[..hit].rfind('<') else { continue };
        let tag: String = lc[start + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if tag.is_empty() {
            continue;
        }
        let el: Option<Element> = elements(&doc[start..], &tag).next();
        if let Some(el) = el.filter(|e| e.has_class(PAGEHEADER_CLASS)) {
            let label = position_label(&el.text());
            if !label.is_empty() {
                return Some(label);
            }
        }
    }
    None
}

/// "Tight End Stats - 2017 Season" → "Tight End".
fn position_label(header_text: &str) -> String {
    let lc = html::to_lower(header_text);
    match lc.find(PAGEHEADER_SUFFIX) {
        Some(i) => header_text[..i].trim().to_string(),
        None => header_text.trim().to_string(),
    }
}
