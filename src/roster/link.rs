//! `Link` ヘッダー（RFC 8288）の解析

use regex::Regex;

lazy_static::lazy_static! {
    /// `<url>; param; param` の1要素
    static ref LINK_RE: Regex = Regex::new(r"<([^>]*)>([^<]*)").unwrap();
    /// rel="a b" または rel=a
    static ref REL_RE: Regex = Regex::new(r#"(?i)\brel\s*=\s*(?:"([^"]*)"|([^\s;,]+))"#).unwrap();
}

/// `rel` に `next` を含むリンクのURLを返す
pub fn parse_next_link(header: &str) -> Option<String> {
    LINK_RE.captures_iter(header).find_map(|link| {
        let url = link.get(1)?.as_str().trim();
        let params = link.get(2).map_or("", |m| m.as_str());

        let rel = REL_RE.captures(params)?;
        let rel_value = rel.get(1).or_else(|| rel.get(2))?.as_str();

        rel_value
            .split_whitespace()
            .any(|r| r.eq_ignore_ascii_case("next"))
            .then(|| url.to_string())
    })
}
