//! Content rendering: lazy-loaded media and video shortcodes

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// 1x1 transparent GIF used as the `src` of lazy-loaded media
pub const LAZY_PLACEHOLDER_SRC: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAP///wAAACH5BAEAAAAALAAAAAABAAEAAAICRAEAOw==";

const YOUTUBE_EMBED_HOST: &str = "www.youtube-nocookie.com";

lazy_static! {
    /// `<img ... src="...">` / `<iframe ... src='...'>`, confined to a single tag
    static ref MEDIA_SRC_RE: Regex = Regex::new(
        r#"(?P<open><(?:img|iframe)\b[^>]*?\s)src=(?:"(?P<double>[^"]*)"|'(?P<single>[^']*)')(?P<close>[^>]*>)"#
    )
    .unwrap();

    /// `[youtube:<id>]`, the id being one or more characters up to `]`
    static ref YOUTUBE_RE: Regex = Regex::new(r"\[youtube:(?P<id>[^\]\n]+)\]").unwrap();
}

/// Render raw post content to HTML
///
/// Media tags get their `src` moved to `data-src` behind a placeholder, then
/// `[youtube:<id>]` shortcodes are expanded. Anything that does not match
/// is left exactly as it was.
///
/// # Examples
/// ```ignore
/// render_content("<img src='a.jpg'>")
/// // -> <img src="data:image/gif;base64,..." data-src="a.jpg">
/// ```
pub fn render_content(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let result = lazy_load_media(raw);
    expand_shortcodes(&result)
}

/// Defer loading of images and iframes
///
/// The tag prefix before `src` and everything after the closing quote are
/// copied verbatim. A `"` inside a single-quoted value is written as
/// `&quot;` since the new attribute is always double-quoted.
pub fn lazy_load_media(content: &str) -> String {
    MEDIA_SRC_RE
        .replace_all(content, |caps: &Captures| {
            let value = caps
                .name("double")
                .or_else(|| caps.name("single"))
                .map(|m| m.as_str())
                .unwrap_or_default();

            format!(
                r#"{}src="{}" data-src="{}"{}"#,
                &caps["open"],
                LAZY_PLACEHOLDER_SRC,
                value.replace('"', "&quot;"),
                &caps["close"]
            )
        })
        .into_owned()
}

/// Expand `[youtube:<id>]` shortcodes into lazy-loaded embed iframes
pub fn expand_shortcodes(content: &str) -> String {
    YOUTUBE_RE
        .replace_all(content, |caps: &Captures| youtube_embed(&caps["id"]))
        .into_owned()
}

fn youtube_embed(id: &str) -> String {
    format!(
        r#"<div class="video"><iframe width="560" height="315" title="YouTube embed" src="about:blank" data-src="https://{}/embed/{}?modestbranding=1&amp;hd=1&amp;rel=0&amp;theme=light" allowfullscreen></iframe></div>"#,
        YOUTUBE_EMBED_HOST, id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMBED_XYZ: &str = r#"<div class="video"><iframe width="560" height="315" title="YouTube embed" src="about:blank" data-src="https://www.youtube-nocookie.com/embed/xyzAbc123?modestbranding=1&amp;hd=1&amp;rel=0&amp;theme=light" allowfullscreen></iframe></div>"#;

    #[test]
    fn test_empty_content() {
        assert_eq!(render_content(""), "");
    }

    #[test]
    fn test_plain_content_unchanged() {
        let content = "<p>Just some <b>text</b> with a [link](http://example.com).</p>\n<a href=\"x\">x</a>";
        assert_eq!(render_content(content), content);
    }

    #[test]
    fn test_youtube_shortcode() {
        assert_eq!(render_content("[youtube:xyzAbc123]"), EMBED_XYZ);
    }

    #[test]
    fn test_multiple_shortcodes_in_order() {
        let html = render_content("<p>[youtube:first]</p><p>[youtube:second]</p>");
        let first = html.find("/embed/first?").unwrap();
        let second = html.find("/embed/second?").unwrap();
        assert!(first < second);
        assert!(html.starts_with("<p><div class=\"video\">"));
        assert!(html.ends_with("</iframe></div></p>"));
    }

    #[test]
    fn test_malformed_shortcodes_untouched() {
        for content in ["[youtube:]", "[youtube:abc", "[vimeo:abc]", "[youtube abc]"] {
            assert_eq!(render_content(content), content);
        }
    }

    #[test]
    fn test_shortcode_iframe_not_rewritten() {
        let html = render_content("[youtube:xyzAbc123]");
        assert!(!html.contains(LAZY_PLACEHOLDER_SRC));
        assert!(html.contains(r#"src="about:blank""#));
    }

    #[test]
    fn test_image_single_quotes() {
        let html = render_content("<img src='test.jpg' alt='Test Image'>");
        assert!(html.contains(
            r#" src="data:image/gif;base64,R0lGODlhAQABAIAAAP///wAAACH5BAEAAAAALAAAAAABAAEAAAICRAEAOw==" data-src="test.jpg""#
        ));
        assert_eq!(html.matches("test.jpg").count(), 1);
        assert_eq!(
            html,
            format!(r#"<img src="{}" data-src="test.jpg" alt='Test Image'>"#, LAZY_PLACEHOLDER_SRC)
        );
    }

    #[test]
    fn test_image_double_quotes_self_closing() {
        let html = render_content(r#"<img class="hero" src="/img/a.png" />"#);
        assert_eq!(
            html,
            format!(
                r#"<img class="hero" src="{}" data-src="/img/a.png" />"#,
                LAZY_PLACEHOLDER_SRC
            )
        );
    }

    #[test]
    fn test_iframe_rewritten() {
        let html = render_content(r#"<iframe src="https://maps.example.com/embed"></iframe>"#);
        assert_eq!(
            html,
            format!(
                r#"<iframe src="{}" data-src="https://maps.example.com/embed"></iframe>"#,
                LAZY_PLACEHOLDER_SRC
            )
        );
    }

    #[test]
    fn test_every_image_rewritten() {
        let html = render_content("<p><img src='a.jpg'></p>\n<p><img src=\"b.jpg\"></p>");
        assert_eq!(html.matches(LAZY_PLACEHOLDER_SRC).count(), 2);
        assert!(html.contains(r#"data-src="a.jpg""#));
        assert!(html.contains(r#"data-src="b.jpg""#));
    }

    #[test]
    fn test_tags_without_quoted_src_untouched() {
        for content in [
            "<img>",
            "<img alt='no source'>",
            "<img src=unquoted.jpg>",
            "<img data-src='only-data.jpg'>",
            "<video src='movie.mp4'></video>",
            "<img src='never closed",
        ] {
            assert_eq!(render_content(content), content);
        }
    }

    #[test]
    fn test_match_stays_inside_one_tag() {
        let content = "<img alt='x'><a href='y' src='z'>link</a>";
        assert_eq!(render_content(content), content);
    }

    #[test]
    fn test_quote_inside_single_quoted_value() {
        let html = render_content(r#"<img src='say "cheese".jpg'>"#);
        assert!(html.contains(r#"data-src="say &quot;cheese&quot;.jpg""#));
    }

    #[test]
    fn test_images_and_shortcodes_together() {
        let html = render_content("<img src='a.jpg'>[youtube:xyzAbc123]");
        assert!(html.starts_with(&format!(
            r#"<img src="{}" data-src="a.jpg">"#,
            LAZY_PLACEHOLDER_SRC
        )));
        assert!(html.ends_with(EMBED_XYZ));
    }
}
