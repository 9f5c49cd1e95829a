use super::{Snippet, Snippets};
use crate::error::Error;
use crate::synth::{HeadingSnippets, RawSnippet};
use pretty_assertions::assert_eq;

fn raw(prefix: &str, body: &[&str], langs: &[&str]) -> RawSnippet {
    RawSnippet {
        prefix: prefix.to_string(),
        body: body.iter().map(ToString::to_string).collect(),
        langs: langs.iter().map(ToString::to_string).collect(),
    }
}

fn heading(name: &str, snippets: Vec<RawSnippet>) -> HeadingSnippets {
    HeadingSnippets {
        name: name.to_string(),
        description: None,
        snippets,
    }
}

#[test]
fn test_insert_refuses_overwrite() {
    let snippet = Snippet {
        description: None,
        prefix: "a".to_string(),
        body: vec![],
        scope: None,
    };
    let mut snippets = Snippets::default();
    snippets.insert("A".to_string(), snippet.clone()).unwrap();

    let err = snippets.insert("A".to_string(), snippet).unwrap_err();
    assert!(matches!(err, Error::DuplicateHeading { name } if name == "A"));
    assert_eq!(snippets.len(), 1);
}

#[test]
fn test_additional_code_blocks_get_language_suffix() {
    let snippets = Snippets::from_headings(vec![heading(
        "Import",
        vec![
            raw("imp", &["import x from 'x';"], &["js", "jsx"]),
            raw("imp", &["import x"], &["py"]),
            raw("imp", &["x"], &[]),
        ],
    )])
    .unwrap();

    let names: Vec<_> = snippets.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["Import", "Import (py)", "Import ()"]);

    let first = snippets.get("Import").unwrap();
    assert_eq!(
        first.scope.as_deref(),
        Some("javascript,javascriptreact,javascript,javascriptreact,jsx")
    );
    assert_eq!(snippets.get("Import (py)").unwrap().scope.as_deref(), Some("python"));
    assert_eq!(snippets.get("Import ()").unwrap().scope, None);
}

#[test]
fn test_headings_without_snippets_produce_nothing() {
    let snippets = Snippets::from_headings(vec![heading("Empty", vec![])]).unwrap();
    assert!(snippets.is_empty());
    assert_eq!(snippets.to_json().unwrap(), "{}");
}

#[test]
fn test_derived_name_collision_is_rejected() {
    let err = Snippets::from_headings(vec![
        heading("Log (py)", vec![raw("lg", &["print()"], &["py"])]),
        heading(
            "Log",
            vec![raw("lg", &["console.log()"], &["js"]), raw("lg", &["print()"], &["py"])],
        ),
    ])
    .unwrap_err();
    assert!(matches!(err, Error::DuplicateHeading { name } if name == "Log (py)"));
}

#[test]
fn test_json_field_order_and_omission() {
    let snippets = Snippets::from_headings(vec![
        HeadingSnippets {
            name: "Use State".to_string(),
            description: Some("Declare state".to_string()),
            snippets: vec![raw("usr", &["const [a, setA] = useState();"], &["ts"])],
        },
        heading("Anywhere", vec![raw("any", &["x", ""], &[])]),
    ])
    .unwrap();

    let expected = r#"{
  "Use State": {
    "description": "Declare state",
    "prefix": "usr",
    "body": [
      "const [a, setA] = useState();"
    ],
    "scope": "typescript,typescriptreact"
  },
  "Anywhere": {
    "prefix": "any",
    "body": [
      "x",
      ""
    ]
  }
}"#;
    assert_eq!(snippets.to_json().unwrap(), expected);
}
