//! Built-in command integration tests
//!
//! Compile a container the way the shell does - registry definition,
//! module registration, discovery pass - and drive the built-ins through
//! the registry.

use std::sync::Arc;

use sash_commands::register_builtin_commands;
use sash_container::{
    register_command_modules, CommandRegistry, ContainerBuilder, FindCommandsPass, ModuleContext,
    ServiceDefinition,
};
use sash_domain::constants::{ADD_COMMAND_REFERENCE, COMMAND_REGISTRY_ID, COMMAND_TAG};
use sash_domain::ports::console::CommandContext;

fn compiled_shell() -> Arc<CommandRegistry> {
    let context = ModuleContext::new(COMMAND_REGISTRY_ID, COMMAND_TAG);
    let mut builder = ContainerBuilder::new();
    builder.register(ServiceDefinition::new(COMMAND_REGISTRY_ID, |_| {
        Ok(Arc::new(CommandRegistry::new()))
    }));
    register_builtin_commands(&mut builder, &context).expect("builtins register");
    builder.add_compiler_pass(FindCommandsPass::new(COMMAND_REGISTRY_ID, COMMAND_TAG));
    let container = builder.build().expect("build");
    container
        .get_as::<CommandRegistry>(COMMAND_REGISTRY_ID)
        .expect("registry resolves")
}

#[test]
fn test_builtins_are_discovered_through_the_tag() {
    let registry = compiled_shell();

    let mut names: Vec<String> = registry
        .commands()
        .expect("commands resolve")
        .iter()
        .map(|command| command.name().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["list", "status", "version"]);
}

#[test]
fn test_module_slice_registers_the_builtin_module() {
    // Linking this crate contributes the module entry; registering through
    // the slice must produce the same command set as calling the hook
    // directly.
    let context = ModuleContext::new(COMMAND_REGISTRY_ID, COMMAND_TAG);
    let mut builder = ContainerBuilder::new();
    builder.register(ServiceDefinition::new(COMMAND_REGISTRY_ID, |_| {
        Ok(Arc::new(CommandRegistry::new()))
    }));
    register_command_modules(&mut builder, &context).expect("modules register");

    let tagged = builder.find_tagged_service_ids(COMMAND_TAG);
    assert_eq!(tagged.len(), 3);

    let modules = sash_container::list_command_modules();
    assert!(modules.iter().any(|(name, _)| *name == "builtin"));
}

#[tokio::test]
async fn test_list_renders_every_command_in_registry_order() {
    let registry = compiled_shell();
    let expected: Vec<String> = registry
        .commands()
        .expect("commands resolve")
        .iter()
        .map(|command| command.name().to_string())
        .collect();

    let list = registry
        .find("list")
        .expect("lookup works")
        .expect("list exists");
    let output = list
        .execute(&CommandContext::default())
        .await
        .expect("list runs");

    let mut last_position = 0;
    for name in &expected {
        let position = output[last_position..]
            .find(name.as_str())
            .unwrap_or_else(|| panic!("'{name}' missing or out of order in listing:\n{output}"));
        last_position += position;
    }
}

#[tokio::test]
async fn test_list_supports_json_output() {
    let registry = compiled_shell();
    let list = registry
        .find("list")
        .expect("lookup works")
        .expect("list exists");

    let output = list
        .execute(&CommandContext::new(vec!["--format=json".to_string()]))
        .await
        .expect("list runs");

    let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    let entries = parsed.as_array().expect("array output");
    assert_eq!(entries.len(), 3);
    assert!(entries
        .iter()
        .all(|entry| entry.get("name").is_some() && entry.get("description").is_some()));
}

#[tokio::test]
async fn test_status_reports_container_counts() {
    let registry = compiled_shell();
    let status = registry
        .find("status")
        .expect("lookup works")
        .expect("status exists");

    let output = status
        .execute(&CommandContext::default())
        .await
        .expect("status runs");
    assert!(output.contains("registered services: 4"));
    assert!(output.contains("console commands: 3"));
}

#[tokio::test]
async fn test_status_lists_service_ids_on_request() {
    let registry = compiled_shell();
    let status = registry
        .find("status")
        .expect("lookup works")
        .expect("status exists");

    let output = status
        .execute(&CommandContext::new(vec!["--services".to_string()]))
        .await
        .expect("status runs");
    assert!(output.contains(COMMAND_REGISTRY_ID));
    assert!(output.contains("command.list"));
}

#[tokio::test]
async fn test_version_names_the_platform() {
    let registry = compiled_shell();
    let version = registry
        .find("version")
        .expect("lookup works")
        .expect("version exists");

    let output = version
        .execute(&CommandContext::default())
        .await
        .expect("version runs");
    assert!(output.starts_with("sash "));
    assert!(output.contains("Lattice"));
}

#[test]
fn test_registry_accepts_only_the_recorded_method_name() {
    use sash_container::Service;

    let registry = compiled_shell();
    let reference = registry.references()[0].clone();

    let err = registry
        .apply_deferred_call("set_fallback_command", reference.clone())
        .expect_err("unknown method must be rejected");
    assert!(err.to_string().contains("set_fallback_command"));

    let before = registry.len();
    registry
        .apply_deferred_call(ADD_COMMAND_REFERENCE, reference)
        .expect("the recorded method is supported");
    assert_eq!(registry.len(), before + 1);
}
