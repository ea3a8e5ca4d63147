/// Lower-case `raw`, collapsing every run of non-alphanumeric characters into a
/// single hyphen. Leading and trailing separators are dropped.
///
/// `"Project X"` becomes `"project-x"`, `"person[address]"` becomes `"person-address"`.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for c in raw.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Slug of several parts joined with hyphens. Empty parts are skipped.
pub fn slugify_parts<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .map(slugify)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// First character upper-cased, the remainder lower-cased.
///
/// `"project_responsibilities"` becomes `"Project_responsibilities"`.
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
