use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::builder::error::BuilderError;
use crate::markup::constants::{LEGEND_CLASS, LEGEND_HEADING_CLASS, LEGEND_SIZE_CLASS_PREFIX};
use crate::markup::tag::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendSize {
    ExtraLarge,
    Large,
    #[default]
    Medium,
    Small,
}

impl LegendSize {
    pub fn as_str(self) -> &'static str {
        match self {
            LegendSize::ExtraLarge => "xl",
            LegendSize::Large => "l",
            LegendSize::Medium => "m",
            LegendSize::Small => "s",
        }
    }
}

impl FromStr for LegendSize {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xl" => Ok(LegendSize::ExtraLarge),
            "l" => Ok(LegendSize::Large),
            "m" => Ok(LegendSize::Medium),
            "s" => Ok(LegendSize::Small),
            other => Err(BuilderError::InvalidLegendSize {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendTag {
    #[default]
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl LegendTag {
    pub fn as_str(self) -> &'static str {
        match self {
            LegendTag::H1 => "h1",
            LegendTag::H2 => "h2",
            LegendTag::H3 => "h3",
            LegendTag::H4 => "h4",
            LegendTag::H5 => "h5",
            LegendTag::H6 => "h6",
        }
    }
}

impl FromStr for LegendTag {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h1" => Ok(LegendTag::H1),
            "h2" => Ok(LegendTag::H2),
            "h3" => Ok(LegendTag::H3),
            "h4" => Ok(LegendTag::H4),
            "h5" => Ok(LegendTag::H5),
            "h6" => Ok(LegendTag::H6),
            other => Err(BuilderError::InvalidLegendTag {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl LegendOptions {
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_size(mut self, size: &str) -> Self {
        self.size = Some(size.to_string());
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }
}

/// Compose a fieldset legend. Keywords are validated even when there is no text,
/// so a misconfigured fieldset fails the same way with or without a legend.
pub fn compose_legend(options: &LegendOptions) -> Result<Option<String>, BuilderError> {
    let size = options
        .size
        .as_deref()
        .map(LegendSize::from_str)
        .transpose()?
        .unwrap_or_default();
    let tag = options
        .tag
        .as_deref()
        .map(LegendTag::from_str)
        .transpose()?
        .unwrap_or_default();

    let Some(text) = options.text.as_deref().filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    let heading = Tag::new(tag.as_str())
        .classes([LEGEND_HEADING_CLASS])
        .text(text)
        .render();

    let size_class = format!("{}{}", LEGEND_SIZE_CLASS_PREFIX, size.as_str());
    let legend = Tag::new("legend")
        .classes([LEGEND_CLASS, size_class.as_str()])
        .html(&heading)
        .render();

    Ok(Some(legend))
}
