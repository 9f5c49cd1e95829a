use super::{Error, ErrorKind};
use std::io;
use std::path::PathBuf;

#[test]
fn test_scope_messages() {
    let scopes = vec!["typescript".to_string(), "typescriptreact".to_string()];

    let global = Error::GlobalAndScoped {
        prefix: "usr".to_string(),
        scopes: scopes.clone(),
    };
    assert_eq!(
        global.to_string(),
        "Prefix usr is defined both globally and for scopes typescript, typescriptreact"
    );

    let duplicate = Error::DuplicateScope {
        prefix: "usr".to_string(),
        scopes,
    };
    assert_eq!(
        duplicate.to_string(),
        "Prefix usr is defined multiple times for scope typescript, typescriptreact"
    );
}

#[test]
fn test_unrecognised_path_message() {
    let first = Error::UnrecognisedPath {
        path: PathBuf::from("notes.txt"),
        inputs: ".md or .markdown".to_string(),
        outputs: None,
    };
    assert_eq!(first.to_string(), "Expected notes.txt to be a .md or .markdown file");

    let later = Error::UnrecognisedPath {
        path: PathBuf::from("notes.txt"),
        inputs: ".md or .markdown".to_string(),
        outputs: Some(".code-snippets or .json".to_string()),
    };
    assert_eq!(
        later.to_string(),
        "Expected notes.txt to be a .md or .markdown file or an output .code-snippets or .json file"
    );
}

#[test]
fn test_kinds() {
    let missing = Error::FileDoesNotExist {
        path: PathBuf::from("a.md"),
    };
    assert_eq!(missing.kind(), ErrorKind::InputNotFound);
    assert!(missing.is_known());

    let duplicate = Error::DuplicateHeading {
        name: "Use Ref".to_string(),
    };
    assert_eq!(duplicate.kind(), ErrorKind::MarkdownParsing);

    assert_eq!(Error::OutputCountMismatch.kind(), ErrorKind::UserInput);

    let io = Error::from(io::Error::other("disk on fire"));
    assert_eq!(io.kind(), ErrorKind::Unexpected);
    assert!(!io.is_known());
}

#[test]
fn test_write_failure_message() {
    let err = Error::Write {
        path: PathBuf::from("out/react.code-snippets"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
    };
    assert_eq!(
        err.to_string(),
        "Failed to write to file out/react.code-snippets: no such directory"
    );
    assert_eq!(err.kind(), ErrorKind::UserInput);
    assert!(err.is_known());
}
