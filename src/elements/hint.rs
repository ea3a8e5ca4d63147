use crate::identity::descriptor::{AttributeDescriptor, derive};
use crate::markup::constants::HINT_CLASS;
use crate::markup::tag::Tag;

/// A rendered hint and the id other elements use to refer to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub id: String,
    pub markup: String,
}

/// Compose a hint. Absent or empty text produces no hint at all.
pub fn compose_hint(descriptor: &AttributeDescriptor, text: Option<&str>) -> Option<Hint> {
    compose_hint_with_class(descriptor, text, None)
}

/// As [`compose_hint`], adding a context class such as `govuk-checkboxes__hint`.
pub fn compose_hint_with_class(
    descriptor: &AttributeDescriptor,
    text: Option<&str>,
    context_class: Option<&str>,
) -> Option<Hint> {
    let text = text.filter(|t| !t.is_empty())?;
    let id = derive(descriptor).hint_id();

    let markup = Tag::new("span")
        .classes([Some(HINT_CLASS), context_class].into_iter().flatten())
        .attr("id", id.as_str())
        .text(text)
        .render();

    Some(Hint { id, markup })
}
