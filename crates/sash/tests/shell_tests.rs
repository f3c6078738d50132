//! Shell invocation tests
//!
//! Drive `sash::run` the way the binary does: configuration, boot,
//! discovery, dispatch.

// Force linkme registration by linking the built-in command module
extern crate sash_commands;

use std::io::Write;

use sash::domain::error::Error;

#[tokio::test]
async fn test_empty_invocation_lists_the_commands() {
    let output = sash::run(None, &[]).await.expect("listing succeeds");

    assert!(output.contains("Available commands"));
    for name in ["list", "status", "version"] {
        assert!(output.contains(name), "'{name}' missing from:\n{output}");
    }
}

#[tokio::test]
async fn test_version_command_runs() {
    let output = sash::run(None, &["version".to_string()])
        .await
        .expect("version succeeds");
    assert!(output.starts_with("sash "));
}

#[tokio::test]
async fn test_command_arguments_are_passed_through() {
    let invocation = vec!["list".to_string(), "--format=json".to_string()];
    let output = sash::run(None, &invocation).await.expect("list succeeds");
    assert!(output.trim_start().starts_with('['));
}

#[tokio::test]
async fn test_unknown_command_is_reported() {
    let err = sash::run(None, &["site-install".to_string()])
        .await
        .expect_err("unknown command fails");
    assert!(matches!(err, Error::CommandNotFound { .. }));
    assert!(err.to_string().contains("site-install"));
}

#[tokio::test]
async fn test_config_file_rewires_the_registry_id() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[shell]\nregistry_id = \"admin.commands\"\n").expect("write config");

    let output = sash::run(Some(file.path()), &["status".to_string()])
        .await
        .expect("status succeeds under the rewired registry id");
    assert!(output.contains("console commands: 3"));
}
