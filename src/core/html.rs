// src/core/html.rs
//! Tolerant, case-insensitive element scanning. Enough HTML for stat
//! tables; no DOM. Same-name tags nest: an outer element spans to its
//! balancing close tag and the inner ones are still yielded after it.

use super::sanitize::{normalize_entities, normalize_ws};

/// ASCII-only lowercase; byte offsets stay valid against the original.
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// One `<tag ...>inner</tag>` occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element<'a> {
    /// The open tag including `<` and `>`.
    pub open: &'a str,
    pub inner: &'a str,
}

impl<'a> Element<'a> {
    /// Attribute value by case-insensitive name. Quoted and bare values both work.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        attrs(self.open)
            .into_iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|v| v.split_whitespace().any(|c| c.eq_ignore_ascii_case(class)))
    }

    pub fn attr_is(&self, name: &str, value: &str) -> bool {
        self.attr(name).is_some_and(|v| v.trim().eq_ignore_ascii_case(value))
    }

    /// Visible text: tags stripped, entities decoded, whitespace collapsed.
    pub fn text(&self) -> String {
        strip_tags(normalize_entities(self.inner))
    }
}

/// Iterator over every `tag` element in document order.
pub struct Elements<'a> {
    doc: &'a str,
    lc: String,
    open_pat: String,
    close_pat: String,
    pos: usize,
}

pub fn elements<'a>(doc: &'a str, tag: &str) -> Elements<'a> {
    let tag = to_lower(tag);
    Elements {
        doc,
        lc: to_lower(doc),
        open_pat: join!("<", &tag),
        close_pat: join!("</", &tag),
        pos: 0,
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.find_open(self.pos, self.lc.len())?;
        let open_end = self.doc[start..].find('>')? + start + 1;
        let close_start = self.matching_close(open_end)?;

        // resume inside the element so nested same-name tags are yielded too
        self.pos = open_end;
        Some(Element {
            open: &self.doc[start..open_end],
            inner: &self.doc[open_end..close_start],
        })
    }
}

impl Elements<'_> {
    /// Next `<tag` in `from..to` followed by whitespace, `>` or `/`.
    fn find_open(&self, from: usize, to: usize) -> Option<usize> {
        let mut at = from;
        loop {
            let start = self.lc.get(at..to)?.find(&self.open_pat)? + at;
            let after_name = start + self.open_pat.len();

            // `<b` must not match `<br>` or `<body>`
            let boundary = self.lc[after_name..].chars().next();
            if matches!(boundary, Some(c) if c.is_ascii_whitespace() || c == '>' || c == '/') {
                return Some(start);
            }
            at = after_name;
        }
    }

    /// Start of the `</tag` that balances an open tag ending at `from`.
    fn matching_close(&self, from: usize) -> Option<usize> {
        let mut depth = 0usize;
        let mut at = from;
        loop {
            let close = self.lc[at..].find(&self.close_pat)? + at;
            match self.find_open(at, close) {
                Some(inner) => {
                    depth += 1;
                    at = inner + self.open_pat.len();
                }
                None if depth == 0 => return Some(close),
                None => {
                    depth -= 1;
                    at = close + self.close_pat.len();
                }
            }
        }
    }
}

/// `(name, value)` pairs of an open tag. Valueless attributes get "".
fn attrs(open: &str) -> Vec<(&str, &str)> {
    let body = open
        .trim_start_matches('<')
        .trim_end_matches('>')
        .trim_end_matches('/');
    // skip the tag name
    let body = match body.find(|c: char| c.is_ascii_whitespace()) {
        Some(i) => &body[i..],
        None => return Vec::new(),
    };

    let mut out = Vec::new();
    let mut rest = body.trim_start();
    while !rest.is_empty() {
        let name_end = rest
            .find(|c: char| c == '=' || c.is_ascii_whitespace())
            .unwrap_or(rest.len());
        let name = &rest[..name_end];
        rest = rest[name_end..].trim_start();

        if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            let (value, tail) = match after_eq.chars().next() {
                Some(q @ ('"' | '\'')) => {
                    let inner = &after_eq[1..];
                    match inner.find(q) {
                        Some(e) => (&inner[..e], &inner[e + 1..]),
                        None => (inner, ""),
                    }
                }
                _ => {
                    let e = after_eq
                        .find(|c: char| c.is_ascii_whitespace())
                        .unwrap_or(after_eq.len());
                    (&after_eq[..e], &after_eq[e..])
                }
            };
            out.push((name, value));
            rest = tail.trim_start();
        } else if !name.is_empty() {
            out.push((name, ""));
        }
    }
    out
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            // tags separate words: "<br>" between two names must not glue them
            '>' if in_tag => { in_tag = false; out.push(' '); }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_elements_case_insensitively() {
        let doc = r#"<TD CLASS="sort1" align=LEFT>1. Travis Kelce</td><td class='sort1' align="center">16</TD>"#;
        let cells: Vec<_> = elements(doc, "td").collect();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].text(), "1. Travis Kelce");
        assert!(cells[0].has_class("sort1"));
        assert!(cells[0].attr_is("align", "left"));
        assert!(cells[1].attr_is("align", "center"));
        assert_eq!(cells[1].text(), "16");
    }

    #[test]
    fn bold_does_not_match_br_or_body() {
        let doc = "<body><b>Player</b><br><b >G</b><br/></body>";
        let labels: Vec<_> = elements(doc, "b").map(|e| e.text()).collect();
        assert_eq!(labels, vec!["Player", "G"]);
    }

    #[test]
    fn text_strips_nested_markup() {
        let doc = r#"<td class="sort1"><a href="/p?id=1">Zach&nbsp;Ertz</a></td>"#;
        let cell = elements(doc, "td").next().unwrap();
        assert_eq!(cell.text(), "Zach Ertz");
    }

    #[test]
    fn attrs_handle_bare_and_valueless() {
        let parsed = attrs(r#"<td nowrap class=sort1 align="center">"#);
        assert_eq!(parsed, vec![("nowrap", ""), ("class", "sort1"), ("align", "center")]);
        assert!(attrs("<td>").is_empty());
    }

    #[test]
    fn nested_cells_are_balanced_and_all_yielded() {
        let doc = concat!(
            r#"<td class="wrap"><table><tr>"#,
            r#"<td class="sort1">15</td><td class="sort1">83</td>"#,
            r#"</tr></table></td><td class="sort1">161.8</td>"#,
        );
        let cells: Vec<_> = elements(doc, "td").collect();
        assert_eq!(cells.len(), 4);
        assert!(cells[0].has_class("wrap"));
        assert_eq!(cells[0].text(), "15 83");
        let stats: Vec<_> = cells.iter().filter(|c| c.has_class("sort1")).map(|c| c.text()).collect();
        assert_eq!(stats, vec!["15", "83", "161.8"]);
    }

    #[test]
    fn unclosed_element_ends_iteration() {
        let doc = "<td>1</td><td>2";
        let cells: Vec<_> = elements(doc, "td").map(|e| e.text()).collect();
        assert_eq!(cells, vec!["1"]);
    }
}
