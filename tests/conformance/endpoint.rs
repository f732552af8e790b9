use super::common::run_suite;
use apilint::{Category, Check};

#[test]
fn endpoint_struct_fields_suite() {
    run_suite("endpoint_struct_fields.yaml");
}

#[test]
fn undeclared_placeholder_is_anchored_at_path_params() {
    let input = r#"
endpoints:
  - pos: { file: endpoint/example.go, line: 115, column: 6 }
    fields:
      Name: { string: { text: Example } }
      Description: { string: { text: Example endpoint } }
      Method: { string: { text: GET } }
      PathTemplate: { string: { text: "/v1/example/{id}/{id2}" } }
      DocumentationURL: { string: { text: "https://docs.example.com/x" } }
      PathParams:
        list:
          type: PathParam
          pos: { file: endpoint/example.go, line: 121, column: 15 }
          items:
            - fields:
                Name: { string: { text: id } }
                Description: { string: { text: The ID } }
"#;
    let result = apilint::lint(input).unwrap();
    assert_eq!(result.diagnostics.len(), 1);
    let diag = &result.diagnostics[0];
    assert_eq!(diag.category, Category::CrossField);
    assert_eq!(diag.check, Check::EndpointStructFields);
    assert_eq!(diag.pos.line, 121);
    assert_eq!(diag.pos.column, 15);
}

#[test]
fn field_diagnostics_are_anchored_at_the_value() {
    let input = r#"
endpoints:
  - pos: { file: endpoint/example.go, line: 95, column: 6 }
    fields:
      Name: { string: { text: "", pos: { file: endpoint/example.go, line: 96, column: 21 } } }
"#;
    let result = apilint::lint(input).unwrap();
    let empty = result
        .diagnostics
        .iter()
        .find(|d| d.message == "field 'Name' cannot be empty")
        .expect("empty Name reported");
    assert_eq!(empty.pos.line, 96);
    let missing = result
        .diagnostics
        .iter()
        .find(|d| d.message == "field 'Method' is missing")
        .expect("missing Method reported");
    assert_eq!(missing.pos.line, 95);
}
