// ============================================================================
// Markup contract: class names and id suffixes
// ============================================================================

pub const HINT_SUFFIX: &str = "-hint";
pub const ERROR_SUFFIX: &str = "-error";
pub const CONDITIONAL_SUFFIX: &str = "-conditional";

pub const FORM_GROUP_CLASS: &str = "govuk-form-group";
pub const FORM_GROUP_ERROR_CLASS: &str = "govuk-form-group--error";

pub const LABEL_CLASS: &str = "govuk-label";
pub const LABEL_SIZE_LARGE_CLASS: &str = "govuk-!-font-size-48";
pub const LABEL_SIZE_MEDIUM_CLASS: &str = "govuk-!-font-size-36";
pub const LABEL_SIZE_SMALL_CLASS: &str = "govuk-!-font-size-27";
pub const LABEL_WEIGHT_BOLD_CLASS: &str = "govuk-!-font-weight-bold";

pub const HINT_CLASS: &str = "govuk-hint";

pub const ERROR_MESSAGE_CLASS: &str = "govuk-error-message";
pub const VISUALLY_HIDDEN_CLASS: &str = "govuk-visually-hidden";
pub const ERROR_MESSAGE_PREFIX: &str = "Error: ";

pub const FIELDSET_CLASS: &str = "govuk-fieldset";
pub const LEGEND_CLASS: &str = "govuk-fieldset__legend";
pub const LEGEND_SIZE_CLASS_PREFIX: &str = "govuk-fieldset__legend--";
pub const LEGEND_HEADING_CLASS: &str = "govuk-fieldset__heading";

pub const INPUT_CLASS: &str = "govuk-input";
pub const INPUT_ERROR_CLASS: &str = "govuk-input--error";

pub const CHECKBOXES_CLASS: &str = "govuk-checkboxes";
pub const RADIOS_CLASS: &str = "govuk-radios";

pub const CHECKBOXES_MODULE: &str = "checkboxes";
pub const RADIOS_MODULE: &str = "radios";

pub const CHECKBOX_INPUT_CLASS: &str = "govuk-checkbox";
pub const RADIO_INPUT_CLASS: &str = "govuk-radio";

/// Value posted by the hidden field that precedes a check box.
pub const UNCHECKED_VALUE: &str = "0";

pub const DESCRIBEDBY_ATTRIBUTE: &str = "aria-describedby";
pub const CONTROLS_ATTRIBUTE: &str = "data-aria-controls";
