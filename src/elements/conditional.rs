use crate::builder::choices::ChoiceKind;
use crate::identity::descriptor::{AttributeDescriptor, derive};
use crate::markup::tag::Tag;

// ============================================================================
// Conditional reveal: trigger input <-> hidden container linkage
// ============================================================================

/// Reveal state of one choice item for a single render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealState {
    /// No nested content: neither container nor controls attribute.
    NoReveal,
    /// Nested content present, wrapped in the container with this id.
    HasReveal {
        container_id: String,
        content: String,
    },
}

/// Links a trigger input to its conditionally revealed container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalLink {
    trigger_id: String,
    state: RevealState,
}

impl ConditionalLink {
    /// Empty or absent content leaves the item in `NoReveal`. Whitespace still
    /// counts as content.
    pub fn new(descriptor: &AttributeDescriptor, content: Option<&str>) -> Self {
        let identity = derive(descriptor);
        let state = match content.filter(|c| !c.is_empty()) {
            Some(content) => {
                let container_id = identity.conditional_id();
                tracing::debug!(%container_id, "conditional content linked");
                RevealState::HasReveal {
                    container_id,
                    content: content.to_string(),
                }
            }
            None => RevealState::NoReveal,
        };

        Self {
            trigger_id: identity.id,
            state,
        }
    }

    pub fn trigger_id(&self) -> &str {
        &self.trigger_id
    }

    pub fn state(&self) -> &RevealState {
        &self.state
    }

    pub fn has_content(&self) -> bool {
        matches!(self.state, RevealState::HasReveal { .. })
    }

    pub fn container_id(&self) -> Option<&str> {
        match &self.state {
            RevealState::HasReveal { container_id, .. } => Some(container_id),
            RevealState::NoReveal => None,
        }
    }

    /// Value for the trigger's `data-aria-controls`; always the container id.
    pub fn controls(&self) -> Option<&str> {
        self.container_id()
    }

    /// The initially hidden container wrapping the nested content.
    pub fn render_container(&self, kind: ChoiceKind) -> Option<String> {
        match &self.state {
            RevealState::HasReveal {
                container_id,
                content,
            } => Some(
                Tag::new("div")
                    .classes([
                        kind.conditional_class().as_str(),
                        kind.conditional_hidden_class().as_str(),
                    ])
                    .attr("id", container_id.as_str())
                    .html(content)
                    .render(),
            ),
            RevealState::NoReveal => None,
        }
    }
}
