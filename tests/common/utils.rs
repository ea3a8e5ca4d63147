use govuk_form_builder::ChoiceOption;

/// Opening tags (`<tag ...>`) of every `tag` element, in document order.
pub fn open_tags(html: &str, tag: &str) -> Vec<String> {
    let prefix = format!("<{}", tag);
    let mut tags = Vec::new();
    let mut offset = 0;

    while let Some(pos) = html[offset..].find(&prefix) {
        let start = offset + pos;
        let after = start + prefix.len();
        if matches!(html[after..].chars().next(), Some(' ') | Some('>')) {
            let end = html[start..]
                .find('>')
                .map(|e| start + e + 1)
                .unwrap_or(html.len());
            tags.push(html[start..end].to_string());
        }
        offset = after;
    }

    tags
}

/// Value of `name` on a single opening tag.
pub fn attr(tag: &str, name: &str) -> Option<String> {
    let needle = format!(" {}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let end = tag[start..].find('"')? + start;
    Some(tag[start..end].to_string())
}

pub fn has_attr(tag: &str, name: &str) -> bool {
    tag.contains(&format!(" {}=\"", name)) || tag.contains(&format!(" {}>", name))
}

/// Opening tags of `tag` elements carrying every class in `classes`.
pub fn tags_with_class(html: &str, tag: &str, classes: &[&str]) -> Vec<String> {
    open_tags(html, tag)
        .into_iter()
        .filter(|t| {
            let class = attr(t, "class").unwrap_or_default();
            let tokens = class.split_whitespace().collect::<Vec<_>>();
            classes.iter().all(|c| tokens.contains(c))
        })
        .collect()
}

/// Inputs of the given `type`.
pub fn inputs_of_type(html: &str, input_type: &str) -> Vec<String> {
    open_tags(html, "input")
        .into_iter()
        .filter(|t| attr(t, "type").as_deref() == Some(input_type))
        .collect()
}

/// Text directly following each opening `tag` up to the next `<`, in document order.
pub fn texts(html: &str, tag: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut offset = 0;
    for open in open_tags(html, tag) {
        if let Some(pos) = html[offset..].find(&open) {
            let body = offset + pos + open.len();
            let rest = &html[body..];
            let end = rest.find('<').unwrap_or(rest.len());
            out.push(rest[..end].to_string());
            offset = body;
        }
    }
    out
}

pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Three projects, two of which have descriptions.
pub fn projects() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("1", "Project X").with_hint(Some("Xanthous, xylophone, xenon")),
        ChoiceOption::new("2", "Project Y").with_hint(Some("Yellow, yoga, yacht")),
        ChoiceOption::new("3", "Project Z").with_hint(None),
    ]
}

pub fn project_names() -> Vec<&'static str> {
    vec!["Project X", "Project Y", "Project Z"]
}

pub fn project_descriptions() -> Vec<Option<&'static str>> {
    vec![
        Some("Xanthous, xylophone, xenon"),
        Some("Yellow, yoga, yacht"),
        None,
    ]
}

pub const BLOCK: &str = "<h1>The quick brown fox</h1><h2>Jumped over the</h2><p>Lazy dog.</p>";
