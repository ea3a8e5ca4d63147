mod common;

use common::utils::{attr, inputs_of_type, tags_with_class, texts};
use govuk_form_builder::BuilderError;
use govuk_form_builder::definition::definition_model::{FieldDefinition, FormDefinition};
use govuk_form_builder::definition::renderer::{RenderDefaults, render_definition};

const PERSON_FORM: &str = r#"
object_name: person
values:
  projects: ["Project X"]
errors:
  name: ["Enter your name"]
fields:
  - type: text_field
    attribute: name
    hint: As on your passport
  - type: check_boxes_fieldset
    attribute: projects
    legend:
      text: Which projects?
      size: l
    items:
      - value: Project X
        hint: Xanthous, xylophone, xenon
        conditional:
          - type: text_field
            attribute: project_responsibilities
      - value: Project Y
  - type: collection_radio_buttons
    attribute: colour
    options:
      - value: red
        text: Red
      - value: blue
        text: Blue
"#;

fn parse(yaml: &str) -> FormDefinition {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn definition_deserialises() {
    let definition = parse(PERSON_FORM);
    assert_eq!(definition.object_name, "person");
    assert_eq!(definition.fields.len(), 3);
    assert_eq!(definition.values["projects"], vec!["Project X"]);
    match &definition.fields[1] {
        FieldDefinition::CheckBoxesFieldset { items, legend, .. } => {
            let items = items.as_ref().unwrap();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].conditional.len(), 1);
            assert_eq!(legend.size.as_deref(), Some("l"));
        }
        other => panic!("Expected CheckBoxesFieldset, got {:?}", other),
    }
}

#[test]
fn definition_renders_every_field() {
    let html = render_definition(&parse(PERSON_FORM), &RenderDefaults::default()).unwrap();

    assert_eq!(html.lines().count(), 3, "one fragment per top-level field");
    assert_eq!(inputs_of_type(&html, "text").len(), 2);
    assert_eq!(inputs_of_type(&html, "checkbox").len(), 2);
    assert_eq!(inputs_of_type(&html, "radio").len(), 2);
    assert!(html.contains(r#"<div class="govuk-form-group govuk-form-group--error">"#));
    assert_eq!(texts(&html, "h1"), vec!["Which projects?"]);
}

#[test]
fn definition_conditional_and_checked_state() {
    let html = render_definition(&parse(PERSON_FORM), &RenderDefaults::default()).unwrap();
    let checkboxes = inputs_of_type(&html, "checkbox");

    assert!(checkboxes[0].contains(" checked"));
    assert!(!checkboxes[1].contains(" checked"));
    assert_eq!(
        attr(&checkboxes[0], "data-aria-controls").as_deref(),
        Some("person-projects-project-x-conditional")
    );
    assert_eq!(
        attr(&checkboxes[0], "aria-describedby").as_deref(),
        Some("person-projects-project-x-hint")
    );

    let container = &tags_with_class(&html, "div", &["govuk-checkboxes__conditional--hidden"])[0];
    assert_eq!(
        attr(container, "id").as_deref(),
        Some("person-projects-project-x-conditional")
    );
}

#[test]
fn defaults_apply_where_unset() {
    let yaml = r#"
object_name: person
fields:
  - type: text_field
    attribute: name
  - type: text_field
    attribute: email
    label:
      size: small
"#;
    let defaults = RenderDefaults {
        label_size: Some("large".into()),
        label_weight: Some("bold".into()),
        legend_size: None,
    };
    let html = render_definition(&parse(yaml), &defaults).unwrap();
    assert!(html.contains(
        r#"<label class="govuk-label govuk-!-font-size-48 govuk-!-font-weight-bold" for="person-name">Name</label>"#
    ));
    assert!(html.contains(
        r#"<label class="govuk-label govuk-!-font-size-27 govuk-!-font-weight-bold" for="person-email">Email</label>"#
    ));
}

#[test]
fn invalid_default_aborts_render() {
    let yaml = r#"
object_name: person
fields:
  - type: collection_check_boxes
    attribute: projects
    legend:
      text: Projects
    options: []
"#;
    let defaults = RenderDefaults {
        legend_size: Some("miniscule".into()),
        ..RenderDefaults::default()
    };
    let err = render_definition(&parse(yaml), &defaults).unwrap_err();
    assert_eq!(err, BuilderError::InvalidLegendSize { value: "miniscule".into() });
}

#[test]
fn fieldset_without_items_is_usage_error() {
    let yaml = r#"
object_name: person
fields:
  - type: radio_buttons_fieldset
    attribute: colour
"#;
    let err = render_definition(&parse(yaml), &RenderDefaults::default()).unwrap_err();
    assert!(matches!(err, BuilderError::NoContent { .. }));
}

#[test]
fn unknown_field_type_rejected() {
    let yaml = r#"
object_name: person
fields:
  - type: date_field
    attribute: born_on
"#;
    assert!(serde_yaml::from_str::<FormDefinition>(yaml).is_err());
}
