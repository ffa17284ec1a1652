//! Entry-point resolution: which script on the landing page is the bundle.
//!
//! Plain text scanning, no HTML parser. The deployment convention is that the
//! application's own bundle is emitted after framework/vendor scripts, so the
//! last script src declaration in document order wins.

use url::Url;

use crate::error::ExtractError;

/// Returns the src value of the last `<script ... src="...">` tag in `html`,
/// or `None` if the document declares no script src at all.
///
/// Duplicate src values are treated independently; position decides.
pub fn last_script_src(html: &str) -> Option<&str> {
    let mut found: Option<&str> = None;
    let mut rest = html;

    while let Some(start) = rest.find("<script") {
        let after_tag = &rest[start + "<script".len()..];
        let tag_end = after_tag.find('>').unwrap_or(after_tag.len());
        let tag = &after_tag[..tag_end];

        if let Some(src) = attr_value(tag, "src") {
            found = Some(src);
        }

        rest = &after_tag[tag_end..];
    }

    found
}

/// Extracts a quoted attribute value from the inside of a tag.
fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let mut rest = tag;
    while let Some(pos) = rest.find(name) {
        // Word boundary: don't match inside e.g. `data-src`.
        let preceded_ok = rest[..pos]
            .chars()
            .last()
            .map_or(true, |c| c.is_whitespace());
        if !preceded_ok {
            rest = &rest[pos + name.len()..];
            continue;
        }
        let after = rest[pos + name.len()..].trim_start();
        if let Some(after_eq) = after.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            let quote = after_eq.chars().next()?;
            if quote == '"' || quote == '\'' {
                let value = &after_eq[1..];
                let end = value.find(quote)?;
                return Some(&value[..end]);
            }
        }
        rest = &rest[pos + name.len()..];
    }
    None
}

/// Resolves the landing page's entry script to an absolute URL.
///
/// Relative src values are joined against `page_url`; absolute ones pass
/// through. Fails with `NoScriptFound` if the page declares no script src.
pub fn resolve_entry_script(html: &str, page_url: &str) -> Result<String, ExtractError> {
    let src = last_script_src(html).ok_or(ExtractError::NoScriptFound)?;
    let base = Url::parse(page_url).map_err(|e| ExtractError::BadUrl {
        reference: src.to_string(),
        base: page_url.to_string(),
        source: e,
    })?;
    let resolved = base.join(src).map_err(|e| ExtractError::BadUrl {
        reference: src.to_string(),
        base: page_url.to_string(),
        source: e,
    })?;
    Ok(resolved.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_of_three_wins() {
        let html = r#"<html><body>
            <script src="/a.js"></script>
            <script src="/b.js"></script>
            <script src="/c.js"></script>
        </body></html>"#;
        assert_eq!(last_script_src(html), Some("/c.js"));
    }

    #[test]
    fn duplicates_do_not_shadow_position() {
        let html = r#"<script src="/c.js"></script>
            <script src="/a.js"></script>"#;
        assert_eq!(last_script_src(html), Some("/a.js"));
    }

    #[test]
    fn no_script_at_all() {
        assert_eq!(last_script_src("<html><body>hi</body></html>"), None);
        assert!(matches!(
            resolve_entry_script("<p/>", "https://example.com/"),
            Err(ExtractError::NoScriptFound)
        ));
    }

    #[test]
    fn inline_script_without_src_is_ignored() {
        let html = r#"<script>var x = 1;</script><script src="/app.js"></script>"#;
        assert_eq!(last_script_src(html), Some("/app.js"));
    }

    #[test]
    fn relative_src_joins_against_page() {
        let url =
            resolve_entry_script(r#"<script src="build/main.js"></script>"#, "https://example.com/mobile/student").unwrap();
        assert_eq!(url, "https://example.com/mobile/build/main.js");
    }

    #[test]
    fn absolute_src_passes_through() {
        let url = resolve_entry_script(
            r#"<script src="https://cdn.example.net/app.js"></script>"#,
            "https://example.com/",
        )
        .unwrap();
        assert_eq!(url, "https://cdn.example.net/app.js");
    }

    #[test]
    fn data_src_is_not_src() {
        let html = r#"<script data-src="/lazy.js"></script><script src="/real.js"></script>"#;
        assert_eq!(last_script_src(html), Some("/real.js"));
        assert_eq!(last_script_src(r#"<script data-src="/lazy.js"></script>"#), None);
    }

    #[test]
    fn single_quoted_src() {
        assert_eq!(last_script_src("<script src='/q.js'></script>"), Some("/q.js"));
    }
}
