// Text preprocessing: markup stripping and whitespace normalization.
//
// Feed content arrives as a mix of HTML fragments and plain text. Everything
// downstream works on the cleaned string, including the length gate.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

use super::types::MAX_INPUT_CHARS_FOR_AI;

/// Elements whose content is never article text.
static BOILERPLATE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style|noscript)\b[^>]*>.*?</(script|style|noscript)\s*>")
        .expect("boilerplate pattern is valid")
});

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

static CDATA_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!\[CDATA\[|\]\]>").expect("cdata pattern is valid"));

/// Opening, closing and self-closing tags plus doctype/processing
/// instructions. A bare `<` followed by a space is left alone so
/// "a < b" survives.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z!?][^>]*>").expect("tag pattern is valid"));

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6}|[A-Za-z]{2,8});")
        .expect("entity pattern is valid")
});

/// Strip markup and entities, collapse whitespace runs to a single space and
/// trim. Empty input yields an empty string.
pub fn clean(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = BOILERPLATE_BLOCK.replace_all(text, " ");
    let text = COMMENT.replace_all(&text, " ");
    let text = CDATA_MARKER.replace_all(&text, "");
    // Tags become spaces so adjacent block elements don't fuse their words
    let text = TAG.replace_all(&text, " ");
    let text = ENTITY.replace_all(&text, |caps: &Captures| decode_entity(&caps[1]));

    collapse_whitespace(&text)
}

/// Clean `text` and cut it to [`MAX_INPUT_CHARS_FOR_AI`] characters, for
/// callers that forward article text to an AI labeling service.
pub fn ai_excerpt(text: &str) -> String {
    let cleaned = clean(text);
    if cleaned.chars().count() <= MAX_INPUT_CHARS_FOR_AI {
        return cleaned;
    }
    cleaned
        .chars()
        .take(MAX_INPUT_CHARS_FOR_AI)
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the body of an entity (the part between `&` and `;`).
/// Unknown or invalid entities decode to nothing.
fn decode_entity(body: &str) -> String {
    if let Some(numeric) = body.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => numeric.parse::<u32>().ok(),
        };
        return code
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default();
    }

    let decoded = match body {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" | "ensp" | "emsp" | "thinsp" => " ",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "hellip" => "\u{2026}",
        "lsquo" | "rsquo" => "'",
        "ldquo" | "rdquo" => "\"",
        _ => "",
    };
    decoded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n\t  "), "");
    }

    #[test]
    fn test_clean_strips_tags_and_collapses_whitespace() {
        let html = "<div class=\"post\">\n  <p>Hello   <b>world</b></p><p>again</p>\n</div>";
        assert_eq!(clean(html), "Hello world again");
    }

    #[test]
    fn test_clean_drops_script_and_style_content() {
        let html = "<style>.x { color: red }</style>Body text\
            <script type=\"text/javascript\">var tracking = 1;</script> here";
        assert_eq!(clean(html), "Body text here");
    }

    #[test]
    fn test_clean_drops_comments_and_cdata_markers() {
        let html = "<![CDATA[Kernel news]]><!-- ad slot -->continues";
        assert_eq!(clean(html), "Kernel news continues");
    }

    #[test]
    fn test_clean_decodes_entities() {
        assert_eq!(clean("Fish &amp; chips&nbsp;&lt;3"), "Fish & chips <3");
        assert_eq!(clean("caf&#233; &#x4E2D;&#25991;"), "café 中文");
        assert_eq!(clean("&bogus; text"), "text");
    }

    #[test]
    fn test_clean_keeps_bare_less_than() {
        assert_eq!(clean("a < b and c > d"), "a < b and c > d");
    }

    #[test]
    fn test_ai_excerpt_truncates_on_char_boundary() {
        let long = "中".repeat(MAX_INPUT_CHARS_FOR_AI + 100);
        let excerpt = ai_excerpt(&long);
        assert_eq!(excerpt.chars().count(), MAX_INPUT_CHARS_FOR_AI);
    }

    #[test]
    fn test_ai_excerpt_short_text_unchanged() {
        assert_eq!(ai_excerpt("<p>short</p>"), "short");
    }
}
