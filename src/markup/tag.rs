// ============================================================================
// Tag: ordered-attribute HTML element builder
// ============================================================================

/// A single HTML element. Attributes render in insertion order, text content is
/// escaped, fragments passed to [`Tag::html`] are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: &'static str,
    attributes: Vec<(&'static str, Option<String>)>,
    body: Option<String>,
}

impl Tag {
    /// An element with a closing tag.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            body: Some(String::new()),
        }
    }

    /// An element without content or closing tag, such as `input`.
    pub fn void(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            body: None,
        }
    }

    /// Set `class` from the non-empty tokens. No attribute when every token is empty.
    pub fn classes<'a, I>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let joined = classes
            .into_iter()
            .filter(|class| !class.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            self
        } else {
            self.attr("class", joined)
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, Some(value.into())));
        self
    }

    /// Set the attribute only when a value is present.
    pub fn attr_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Boolean attribute such as `checked`.
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attributes.push((name, None));
        }
        self
    }

    pub fn text(self, text: &str) -> Self {
        self.html(&escape_html(text))
    }

    /// Append an already rendered fragment.
    pub fn html(mut self, fragment: &str) -> Self {
        if let Some(body) = self.body.as_mut() {
            body.push_str(fragment);
        }
        self
    }

    pub fn render(&self) -> String {
        let mut out = format!("<{}", self.name);
        for (name, value) in &self.attributes {
            match value {
                Some(value) => {
                    out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
                }
                None => {
                    out.push(' ');
                    out.push_str(name);
                }
            }
        }
        out.push('>');

        if let Some(body) = &self.body {
            out.push_str(body);
            out.push_str(&format!("</{}>", self.name));
        }

        out
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
