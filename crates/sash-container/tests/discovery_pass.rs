//! Discovery pass tests
//!
//! Exercise the command-discovery bridge at the definition-graph level:
//! what the pass appends, in which order, and what it leaves alone.

use std::sync::Arc;

use sash_container::{
    CompilerPass, ContainerBuilder, FindCommandsPass, Service, ServiceDefinition,
};
use sash_domain::constants::ADD_COMMAND_REFERENCE;
use sash_domain::value_objects::ServiceId;

struct Noop;

impl Service for Noop {}

fn definition(id: &str) -> ServiceDefinition {
    ServiceDefinition::new(id, |_| Ok(Arc::new(Noop)))
}

fn recorded_arguments(builder: &ContainerBuilder, storage_id: &str) -> Vec<String> {
    builder
        .find_definition(storage_id)
        .expect("storage definition present")
        .method_calls()
        .iter()
        .map(|call| call.argument().id().to_string())
        .collect()
}

#[test]
fn test_missing_storage_leaves_every_definition_unchanged() {
    let mut builder = ContainerBuilder::new();
    builder.register(definition("cmd.a").with_tag("console.command"));
    builder.register(definition("cmd.b").with_tag("console.command"));

    let pass = FindCommandsPass::new("command.registry", "console.command");
    pass.process(&mut builder).expect("missing storage is not an error");

    let ids: Vec<ServiceId> = builder.service_ids().cloned().collect();
    for id in &ids {
        let def = builder.find_definition(id.as_str()).expect("present");
        assert!(
            def.method_calls().is_empty(),
            "definition '{id}' must not gain calls when storage is missing"
        );
    }
}

#[test]
fn test_discovery_appends_one_call_per_tagged_service_in_order() {
    let mut builder = ContainerBuilder::new();
    builder.register(definition("command.registry"));
    builder.register(definition("cmd.a").with_tag("console.command"));
    builder.register(definition("cmd.b").with_tag("console.command"));
    builder.register(definition("cmd.c").with_tag("console.command"));

    let pass = FindCommandsPass::new("command.registry", "console.command");
    pass.process(&mut builder).expect("pass runs");

    let storage = builder.find_definition("command.registry").expect("present");
    assert_eq!(storage.method_calls().len(), 3);
    assert!(storage
        .method_calls()
        .iter()
        .all(|call| call.method() == ADD_COMMAND_REFERENCE));
    assert_eq!(
        recorded_arguments(&builder, "command.registry"),
        vec!["cmd.a", "cmd.b", "cmd.c"]
    );
}

#[test]
fn test_discovery_order_follows_registration_not_name_order() {
    let mut builder = ContainerBuilder::new();
    builder.register(definition("command.registry"));
    builder.register(definition("cmd.c").with_tag("console.command"));
    builder.register(definition("cmd.a").with_tag("console.command"));
    builder.register(definition("cmd.b").with_tag("console.command"));

    FindCommandsPass::new("command.registry", "console.command")
        .process(&mut builder)
        .expect("pass runs");

    assert_eq!(
        recorded_arguments(&builder, "command.registry"),
        vec!["cmd.c", "cmd.a", "cmd.b"]
    );
}

#[test]
fn test_running_the_pass_twice_appends_duplicates() {
    // Known hazard: the pass does not deduplicate. Two runs over the same
    // graph append 2N calls, not N.
    let mut builder = ContainerBuilder::new();
    builder.register(definition("command.registry"));
    builder.register(definition("cmd.a").with_tag("console.command"));
    builder.register(definition("cmd.b").with_tag("console.command"));

    let pass = FindCommandsPass::new("command.registry", "console.command");
    pass.process(&mut builder).expect("first run");
    pass.process(&mut builder).expect("second run");

    assert_eq!(
        recorded_arguments(&builder, "command.registry"),
        vec!["cmd.a", "cmd.b", "cmd.a", "cmd.b"]
    );
}

#[test]
fn test_zero_tagged_services_appends_nothing() {
    let mut builder = ContainerBuilder::new();
    builder.register(definition("command.registry"));
    builder.register(definition("svc.other"));

    FindCommandsPass::new("command.registry", "console.command")
        .process(&mut builder)
        .expect("empty discovery is not an error");

    let storage = builder.find_definition("command.registry").expect("present");
    assert!(storage.method_calls().is_empty());
}

#[test]
fn test_unrelated_definitions_are_never_mutated() {
    let mut builder = ContainerBuilder::new();
    builder.register(definition("command.registry"));
    builder.register(definition("cmd.a").with_tag("console.command"));
    builder.register(definition("svc.plain"));
    builder.register(definition("svc.tagged-differently").with_tag("platform.listener"));

    FindCommandsPass::new("command.registry", "console.command")
        .process(&mut builder)
        .expect("pass runs");

    for id in ["cmd.a", "svc.plain", "svc.tagged-differently"] {
        let def = builder.find_definition(id).expect("present");
        assert!(
            def.method_calls().is_empty(),
            "only the storage definition may gain calls, '{id}' did"
        );
    }
    assert_eq!(recorded_arguments(&builder, "command.registry"), vec!["cmd.a"]);
}

#[test]
fn test_pass_is_reusable_for_any_storage_and_tag_pair() {
    let mut builder = ContainerBuilder::new();
    builder.register(definition("listener.registry"));
    builder.register(definition("hook.a").with_tag("platform.listener"));
    builder.register(definition("cmd.a").with_tag("console.command"));

    FindCommandsPass::new("listener.registry", "platform.listener")
        .process(&mut builder)
        .expect("pass runs");

    assert_eq!(recorded_arguments(&builder, "listener.registry"), vec!["hook.a"]);
}
