use crate::identity::descriptor::{AttributeDescriptor, derive};
use crate::markup::constants::{ERROR_MESSAGE_CLASS, ERROR_MESSAGE_PREFIX, VISUALLY_HIDDEN_CLASS};
use crate::markup::tag::Tag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub id: String,
    pub markup: String,
}

/// Compose the inline error for an attribute. Only the first message is shown;
/// no messages means no element.
pub fn compose_error_message(
    descriptor: &AttributeDescriptor,
    messages: &[String],
) -> Option<ErrorMessage> {
    let message = messages.iter().find(|m| !m.is_empty())?;
    let id = derive(descriptor).error_id();

    let prefix = Tag::new("span")
        .classes([VISUALLY_HIDDEN_CLASS])
        .text(ERROR_MESSAGE_PREFIX)
        .render();

    let markup = Tag::new("span")
        .classes([ERROR_MESSAGE_CLASS])
        .attr("id", id.as_str())
        .html(&prefix)
        .text(message)
        .render();

    Some(ErrorMessage { id, markup })
}
