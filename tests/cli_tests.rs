use clap::Parser;
use govuk_form_builder::cli::commands::{identity_report, load_definitions};
use govuk_form_builder::cli::config::{AppConfig, Cli, Commands, load_config};

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_render_minimal() {
    let cli = Cli::parse_from(["govuk-form", "render", "--form", "person.yaml"]);
    match cli.command {
        Commands::Render { form, output } => {
            assert_eq!(form, "person.yaml");
            assert_eq!(output, None);
        }
        _ => panic!("Expected Render command"),
    }
    assert_eq!(cli.verbose, 0);
    assert_eq!(cli.config, None);
}

#[test]
fn cli_parse_render_all_args() {
    let cli = Cli::parse_from([
        "govuk-form",
        "-vv",
        "render",
        "--form",
        "forms/",
        "-o",
        "out.html",
        "--config",
        "custom.yaml",
    ]);
    match cli.command {
        Commands::Render { form, output } => {
            assert_eq!(form, "forms/");
            assert_eq!(output.as_deref(), Some("out.html"));
        }
        _ => panic!("Expected Render command"),
    }
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
}

#[test]
fn cli_parse_ids() {
    let cli = Cli::parse_from([
        "govuk-form",
        "ids",
        "--object",
        "person",
        "--attribute",
        "projects",
        "--value",
        "Project X",
    ]);
    match cli.command {
        Commands::Ids {
            object,
            attribute,
            value,
        } => {
            assert_eq!(object, "person");
            assert_eq!(attribute, "projects");
            assert_eq!(value.as_deref(), Some("Project X"));
        }
        _ => panic!("Expected Ids command"),
    }
}

#[test]
fn cli_render_requires_form() {
    assert!(Cli::try_parse_from(["govuk-form", "render"]).is_err());
}

// ============================================================================
// Config loading
// ============================================================================

#[test]
fn missing_config_gives_defaults() {
    let config = load_config(Some("/nonexistent/govuk-form.yaml"));
    assert_eq!(config.render.output, None);
    assert_eq!(config.defaults.label_size, None);
}

#[test]
fn config_loads_from_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("govuk-form.yaml");
    std::fs::write(
        &path,
        "render:\n  output: forms.html\ndefaults:\n  label_size: medium\n  legend_size: xl\n",
    )
    .unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.render.output.as_deref(), Some("forms.html"));
    assert_eq!(config.defaults.label_size.as_deref(), Some("medium"));
    assert_eq!(config.defaults.legend_size.as_deref(), Some("xl"));
    assert_eq!(config.defaults.label_weight, None);
}

#[test]
fn malformed_config_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("govuk-form.yaml");
    std::fs::write(&path, "render: [unclosed\n").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.render.output, AppConfig::default().render.output);
}

// ============================================================================
// Definition loading
// ============================================================================

const MINIMAL: &str = "object_name: {name}\nfields:\n  - type: text_field\n    attribute: name\n";

#[test]
fn load_single_definition() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("person.yaml");
    std::fs::write(&path, MINIMAL.replace("{name}", "person")).unwrap();

    let definitions = load_definitions(path.to_str().unwrap()).unwrap();
    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].object_name, "person");
}

#[test]
fn load_directory_sorted_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.yml"), MINIMAL.replace("{name}", "second")).unwrap();
    std::fs::write(dir.path().join("a.yaml"), MINIMAL.replace("{name}", "first")).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let definitions = load_definitions(dir.path().to_str().unwrap()).unwrap();
    let names = definitions
        .iter()
        .map(|d| d.object_name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn load_missing_path_fails() {
    assert!(load_definitions("/nonexistent/forms").is_err());
}

// ============================================================================
// ids report
// ============================================================================

#[test]
fn identity_report_for_item() {
    let report = identity_report("person", "projects", Some("Project X"));
    assert_eq!(report.id, "person-projects-project-x");
    assert_eq!(report.name, "person[projects][]");
    assert_eq!(report.hint_id, "person-projects-project-x-hint");
    assert_eq!(report.error_id, "person-projects-project-x-error");
    assert_eq!(report.conditional_id, "person-projects-project-x-conditional");

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["id"], "person-projects-project-x");
}

#[test]
fn identity_report_for_control() {
    let report = identity_report("person", "name", None);
    assert_eq!(report.id, "person-name");
    assert_eq!(report.name, "person[name]");
}
