use govuk_form_builder::identity::descriptor::{AttributeDescriptor, derive};
use govuk_form_builder::identity::slug::{capitalize, slugify, slugify_parts};

// =========================================================================
// derive
// =========================================================================

#[test]
fn derive_single_control() {
    let identity = derive(&AttributeDescriptor::new("person", "projects"));
    assert_eq!(identity.id, "person-projects");
    assert_eq!(identity.name, "person[projects]");
}

#[test]
fn derive_collection_item() {
    let descriptor = AttributeDescriptor::new("person", "projects").with_value("Project X");
    let identity = derive(&descriptor);
    assert_eq!(identity.id, "person-projects-project-x");
    assert_eq!(identity.name, "person[projects][]");
}

#[test]
fn punctuation_only_value_keeps_its_own_segment() {
    let group = derive(&AttributeDescriptor::new("person", "projects"));
    let item = derive(&AttributeDescriptor::new("person", "projects").with_value("?"));
    assert_eq!(item.id, "person-projects-3f");
    assert_ne!(item.hint_id(), group.hint_id());

    let other = derive(&AttributeDescriptor::new("person", "projects").with_value("!"));
    assert_ne!(item.id, other.id);

    let blank = derive(&AttributeDescriptor::new("person", "projects").with_value(""));
    assert_eq!(blank.id, "person-projects-blank");
}

#[test]
fn derive_is_deterministic() {
    let descriptor = AttributeDescriptor::new("person", "favourite_colour").with_value("Light Blue");
    assert_eq!(derive(&descriptor), derive(&descriptor));
    assert_eq!(derive(&descriptor), derive(&descriptor.clone()));
}

#[test]
fn derive_nested_object_name() {
    let identity = derive(&AttributeDescriptor::new("person[address]", "street"));
    assert_eq!(identity.id, "person-address-street");
    assert_eq!(identity.name, "person[address][street]");
}

#[test]
fn derive_snake_case_attribute() {
    let identity = derive(&AttributeDescriptor::new("person", "project_responsibilities"));
    assert_eq!(identity.id, "person-project-responsibilities");
    assert_eq!(identity.name, "person[project_responsibilities]");
}

#[test]
fn suffixed_ids() {
    let identity = derive(&AttributeDescriptor::new("person", "projects").with_value("Project X"));
    assert_eq!(identity.hint_id(), "person-projects-project-x-hint");
    assert_eq!(identity.error_id(), "person-projects-project-x-error");
    assert_eq!(identity.conditional_id(), "person-projects-project-x-conditional");
}

#[test]
fn base_id_never_carries_conditional_suffix() {
    let identity = derive(&AttributeDescriptor::new("person", "projects").with_value("conditional"));
    assert_eq!(identity.id, "person-projects-conditional");
    assert_eq!(identity.conditional_id(), "person-projects-conditional-conditional");
}

#[test]
fn attribute_only_drops_value() {
    let descriptor = AttributeDescriptor::new("person", "colour").with_value("red");
    let base = descriptor.attribute_only();
    assert_eq!(base.value, None);
    assert_eq!(base.field_name(), "person[colour]");
    assert_eq!(descriptor.multiple_field_name(), "person[colour][]");
}

#[test]
fn distinct_values_give_distinct_ids() {
    let x = derive(&AttributeDescriptor::new("person", "projects").with_value("1"));
    let y = derive(&AttributeDescriptor::new("person", "projects").with_value("2"));
    assert_ne!(x.id, y.id);
    assert_eq!(x.name, y.name, "items of one collection share a name");
}

// =========================================================================
// slug helpers
// =========================================================================

#[test]
fn slugify_normalises() {
    assert_eq!(slugify("Project X"), "project-x");
    assert_eq!(slugify("  Hello,  World! "), "hello-world");
    assert_eq!(slugify("person[address]"), "person-address");
    assert_eq!(slugify("first_name"), "first-name");
    assert_eq!(slugify("ALREADY-slugged"), "already-slugged");
    assert_eq!(slugify("!!!"), "");
}

#[test]
fn slugify_parts_skips_empty_parts() {
    assert_eq!(slugify_parts(["person", "", "name"]), "person-name");
    assert_eq!(slugify_parts(["person", "???", "name"]), "person-name");
}

#[test]
fn capitalize_first_letter_only() {
    assert_eq!(capitalize("project"), "Project");
    assert_eq!(capitalize("project_responsibilities"), "Project_responsibilities");
    assert_eq!(capitalize("NAME"), "Name");
    assert_eq!(capitalize(""), "");
}
