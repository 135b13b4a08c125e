//! GraphClient commands against a scripted executor

#[path = "testutils/mod.rs"]
mod testutils;

use graphwire::{
    ClientConfig, ColumnKind, CommandKind, GraphClient, GraphError, SchemaCategory, Value,
};
use indexmap::IndexMap;
use std::sync::Arc;
use testutils::replies::*;
use testutils::scripted_executor::ScriptedExecutor;

fn setup(config: ClientConfig) -> (Arc<ScriptedExecutor>, GraphClient) {
    testutils::init_logging();
    let executor = Arc::new(
        ScriptedExecutor::new()
            .with_names(SchemaCategory::Labels, &["person"])
            .with_names(SchemaCategory::PropertyKeys, &["name"]),
    );
    let client = GraphClient::with_config(executor.clone(), config);
    (executor, client)
}

fn empty_result() -> graphwire::RawReply {
    result_set(vec![column(ColumnKind::Scalar, "x")], vec![], &[])
}

#[test]
fn test_query_command_arguments() {
    let (executor, client) = setup(ClientConfig::default().with_timeout_ms(1000));
    executor.push_reply(empty_result());
    executor.push_reply(empty_result());

    client.query("social", "MATCH (n) RETURN n").unwrap();
    client.read_only_query("social", "MATCH (n) RETURN n").unwrap();

    let commands = executor.commands();
    assert_eq!(
        commands[0].args(),
        vec!["GRAPH.QUERY", "social", "MATCH (n) RETURN n", "--compact", "TIMEOUT", "1000"]
    );
    assert_eq!(commands[1].kind, CommandKind::ReadOnlyQuery);
    assert!(commands[1].is_read_only());
}

#[test]
fn test_query_with_params_prefixes_cypher_header() {
    let (executor, client) = setup(ClientConfig::default());
    executor.push_reply(empty_result());

    let mut filter = IndexMap::new();
    filter.insert("min".to_string(), Value::Double(1.0));
    client
        .query_with_params(
            "social",
            "MATCH (p:person {name: $name}) WHERE p.score > $filter.min RETURN p",
            &[
                ("name", Value::from("o'neil \"jr\"")),
                ("ids", Value::List(vec![Value::Integer(1), Value::Null])),
                ("filter", Value::Map(filter)),
            ],
        )
        .unwrap();

    let query = executor.commands()[0].query.clone().unwrap();
    assert_eq!(
        query,
        r#"CYPHER name="o'neil \"jr\"" ids=[1, null] filter={min: 1.0} MATCH (p:person {name: $name}) WHERE p.score > $filter.min RETURN p"#
    );
}

#[test]
fn test_invalid_parameter_name_is_rejected_before_execution() {
    let (executor, client) = setup(ClientConfig::default());
    let result = client.query_with_params("g", "RETURN $x", &[("bad name", Value::Integer(1))]);
    assert!(result.is_err());
    assert!(executor.commands().is_empty());
}

#[test]
fn test_query_decodes_against_graph_schema() {
    let (executor, client) = setup(ClientConfig::default());
    executor.push_reply(result_set(
        vec![column(ColumnKind::Node, "p")],
        vec![vec![node(3, &[0], vec![property(0, graphwire::ValueType::String, text("ann"))])]],
        &["Cached execution: 1"],
    ));

    let result = client.query("social", "MATCH (p) RETURN p").unwrap();
    let record = result.record(0).unwrap().unwrap();
    assert_eq!(record.get_node("p").unwrap().to_string(), "(3:person {name: \"ann\"})");
    assert!(result.statistics().cached_execution());

    let procedures: Vec<String> = executor
        .commands()
        .into_iter()
        .filter_map(|c| c.query)
        .filter(|q| q.starts_with("CALL"))
        .collect();
    assert_eq!(procedures, vec!["CALL db.labels()", "CALL db.propertyKeys()"]);
}

#[test]
fn test_delete_discards_schema_cache() {
    let (executor, client) = setup(ClientConfig::default());
    client.schema("social").label(0).unwrap();
    assert_eq!(executor.procedure_calls(SchemaCategory::Labels), 1);

    executor.push_reply(text("Graph removed, internal execution time: 0.1 milliseconds"));
    client.delete("social").unwrap();
    assert!(client.schemas().is_empty());

    // A recreated graph starts from an empty cache
    client.schema("social").label(0).unwrap();
    assert_eq!(executor.procedure_calls(SchemaCategory::Labels), 2);
    assert_eq!(executor.commands()[1].kind, CommandKind::Delete);
}

#[test]
fn test_list_and_explain() {
    let (executor, client) = setup(ClientConfig::default());
    executor.push_reply(array(vec![text("social"), text("roads")]));
    executor.push_reply(array(vec![text("Results"), text("    Project"), text("        All Node Scan | (n)")]));

    assert_eq!(client.list().unwrap(), vec!["social", "roads"]);
    let plan = client.explain("social", "MATCH (n) RETURN n").unwrap();
    assert_eq!(plan.len(), 3);
    assert!(plan[2].contains("All Node Scan"));

    let commands = executor.commands();
    assert_eq!(commands[0].args(), vec!["GRAPH.LIST"]);
    assert_eq!(commands[1].args(), vec!["GRAPH.EXPLAIN", "social", "MATCH (n) RETURN n"]);
}

#[test]
fn test_executor_failure_propagates() {
    let (_, client) = setup(ClientConfig::default());
    // Nothing scripted: the executor reports a transport failure
    assert!(matches!(
        client.query("social", "RETURN 1"),
        Err(GraphError::Execution(_))
    ));
}

#[test]
fn test_config_from_json() {
    let config = ClientConfig::from_json_str(r#"{"timeout_ms": 50, "schema_refresh": "Replica"}"#).unwrap();
    let (executor, client) = setup(config);
    executor.push_reply(empty_result());
    client.query("g", "RETURN 1").unwrap();
    assert_eq!(executor.commands()[0].timeout_ms, Some(50));
    assert!(client.config().compact);
}
