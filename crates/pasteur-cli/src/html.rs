//! Just enough HTML reading to pull the ciphertext out of a paste page.

/// Text content of the first element whose `id` attribute equals `id`.
///
/// Nested elements with the same tag name are balanced; character
/// references for the five XML entities and numeric references are decoded.
pub fn element_text_by_id(html: &str, id: &str) -> Option<String> {
    let open_start = find_id_attribute(html, id)?;
    let tag_start = html[..open_start].rfind('<')?;
    let tag_name: String = html[tag_start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    if tag_name.is_empty() {
        return None;
    }

    let content_start = open_start + html[open_start..].find('>')? + 1;
    let content_end = matching_close(html, content_start, &tag_name)?;
    Some(decode_entities(&strip_tags(&html[content_start..content_end])))
}

fn find_id_attribute(html: &str, id: &str) -> Option<usize> {
    let lower = html.to_ascii_lowercase();
    [format!("id=\"{}\"", id), format!("id='{}'", id)]
        .iter()
        .filter_map(|needle| {
            lower.match_indices(needle.as_str()).map(|(pos, _)| pos).find(|&pos| {
                pos > 0 && lower.as_bytes()[pos - 1].is_ascii_whitespace()
            })
        })
        .min()
}

fn matching_close(html: &str, from: usize, tag_name: &str) -> Option<usize> {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{}", tag_name);
    let close = format!("</{}", tag_name);
    let mut depth = 1usize;
    let mut cursor = from;

    while depth > 0 {
        let next_close = lower[cursor..].find(&close)? + cursor;
        let next_open = lower[cursor..]
            .find(&open)
            .map(|pos| pos + cursor)
            .filter(|&pos| pos < next_close && is_tag_boundary(&lower, pos + open.len()));
        match next_open {
            Some(pos) => {
                depth += 1;
                cursor = pos + open.len();
            }
            None => {
                depth -= 1;
                if depth == 0 {
                    return Some(next_close);
                }
                cursor = next_close + close.len();
            }
        }
    }
    None
}

fn is_tag_boundary(lower: &str, pos: usize) -> bool {
    lower
        .as_bytes()
        .get(pos)
        .is_some_and(|b| b.is_ascii_whitespace() || *b == b'>' || *b == b'/')
}

fn strip_tags(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for c in fragment.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

fn decode_entities(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let Some(semi) = rest.find(';').filter(|&semi| semi <= 10) else {
            decoded.push('&');
            rest = &rest[1..];
            continue;
        };
        match decode_reference(&rest[1..semi]) {
            Some(c) => {
                decoded.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                decoded.push('&');
                rest = &rest[1..];
            }
        }
    }
    decoded.push_str(rest);
    decoded
}

fn decode_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_by_id() {
        let html = r#"<html><body>
            <div class="meta">title</div>
            <pre id="raw">{&quot;iv&quot;:&quot;abc&quot;}</pre>
            <div id="output"></div>
        </body></html>"#;

        assert_eq!(
            element_text_by_id(html, "raw").as_deref(),
            Some("{\"iv\":\"abc\"}")
        );
        assert_eq!(element_text_by_id(html, "output").as_deref(), Some(""));
        assert_eq!(element_text_by_id(html, "missing"), None);
    }

    #[test]
    fn test_ignores_partial_id_matches() {
        let html = r#"<div data-id="raw">no</div><div id='raw'>yes</div>"#;
        assert_eq!(element_text_by_id(html, "raw").as_deref(), Some("yes"));
    }

    #[test]
    fn test_balances_nested_tags() {
        let html = r#"<div id="raw"><div>inner</div>tail</div><div>after</div>"#;
        assert_eq!(element_text_by_id(html, "raw").as_deref(), Some("innertail"));
    }

    #[test]
    fn test_decodes_references() {
        assert_eq!(decode_entities("a &amp; b &lt;c&gt; &#39;d&#x27;"), "a & b <c> 'd'");
        assert_eq!(decode_entities("AT&T & co"), "AT&T & co");
    }
}
