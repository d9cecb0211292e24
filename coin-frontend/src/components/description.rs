use crate::format::first_sentence;
use yew::prelude::*;

const VOID_ELEMENTS: [&str; 4] = ["br", "hr", "img", "wbr"];

/// Returns false when `fragment` has an unterminated tag or tags that don't
/// close in order. A `<` not followed by a letter, `/` or `!` is plain text.
pub fn markup_is_balanced(fragment: &str) -> bool {
    let mut open: Vec<String> = Vec::new();
    let mut rest = fragment;

    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let opens_tag = after
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!');
        if !opens_tag {
            rest = after;
            continue;
        }
        let Some(end) = after.find('>') else {
            return false;
        };
        let tag = after[..end].trim();
        rest = &after[end + 1..];

        if let Some(closing) = tag.strip_prefix('/') {
            let name = closing.trim().to_ascii_lowercase();
            if open.pop().as_deref() != Some(name.as_str()) {
                return false;
            }
            continue;
        }

        let name = tag
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if name.is_empty() || name.starts_with('!') {
            continue;
        }
        if tag.ends_with('/') || VOID_ELEMENTS.contains(&name.as_str()) {
            continue;
        }
        open.push(name);
    }

    open.is_empty()
}

#[derive(Properties, PartialEq)]
pub struct DescriptionProps {
    pub text: Option<String>,
}

#[function_component(CoinDescription)]
pub fn coin_description(props: &DescriptionProps) -> Html {
    let sentence = first_sentence(props.text.as_deref());

    let body = if markup_is_balanced(&sentence) {
        Html::from_html_unchecked(AttrValue::from(sentence))
    } else {
        log::warn!("Description markup is malformed, showing raw text");
        html! { {sentence} }
    };

    html! {
        <p class="w-full px-6 pb-4 text-justify text-gray-700">
            {body}
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_balanced() {
        assert!(markup_is_balanced("Bitcoin is digital."));
    }

    #[test]
    fn links_and_void_elements() {
        assert!(markup_is_balanced(
            r#"Based on <a href="https://bitcoin.org">the paper</a>.<br>"#
        ));
        assert!(markup_is_balanced("One<br/>two<img src=\"x.png\">."));
    }

    #[test]
    fn truncation_can_leave_tags_open() {
        // "<a href=...>Bitcoin. It ...</a>" keeps only the opening tag.
        assert!(!markup_is_balanced(r#"<a href="https://bitcoin.org">Bitcoin."#));
        assert!(!markup_is_balanced("<b>bold</i>."));
        assert!(!markup_is_balanced("broken <a href=."));
    }

    #[test]
    fn bare_less_than_is_text() {
        assert!(markup_is_balanced("Price a < b."));
        assert!(markup_is_balanced("Fees <1% per trade."));
        assert!(markup_is_balanced("Ends with <"));
        assert!(markup_is_balanced("x <= y and <b>bold</b>."));
    }
}
