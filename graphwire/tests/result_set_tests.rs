//! Reply classification, lazy record decoding and statistics

#[path = "testutils/mod.rs"]
mod testutils;

use graphwire::{
    ColumnKind, GraphClient, GraphError, RawReply, ResultSet, SchemaCategory, Value, ValueType,
};
use proptest::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use testutils::replies::*;
use testutils::scripted_executor::ScriptedExecutor;

fn client() -> (Arc<ScriptedExecutor>, GraphClient) {
    let executor = Arc::new(
        ScriptedExecutor::new()
            .with_names(SchemaCategory::Labels, &["person"])
            .with_names(SchemaCategory::PropertyKeys, &["name", "age"])
            .with_names(SchemaCategory::RelationshipTypes, &["KNOWS"]),
    );
    let client = GraphClient::new(executor.clone());
    (executor, client)
}

fn run(reply: RawReply) -> graphwire::Result<ResultSet> {
    let (executor, client) = client();
    executor.push_reply(reply);
    client.query("social", "MATCH (n) RETURN n")
}

#[test]
fn test_scalar_rows_with_statistics() {
    testutils::init_logging();
    let reply = result_set(
        vec![column(ColumnKind::Scalar, "name")],
        vec![vec![tagged_string("alice")]],
        &["Nodes created: 1", "Properties set: 2"],
    );
    let result = run(reply).unwrap();

    let header = result.header().unwrap();
    assert_eq!(header.column_kinds(), &[ColumnKind::Scalar]);
    assert_eq!(header.column_names(), &["name"]);
    assert_eq!(result.len(), 1);

    let records = result.to_records().unwrap();
    assert_eq!(records[0].get_str("name").unwrap(), "alice");
    assert_eq!(records[0].keys(), &["name"]);
    assert_eq!(result.statistics().nodes_created(), 1);
    assert_eq!(result.statistics().properties_set(), 2);
}

#[test]
fn test_statistics_only_reply() {
    let reply = array(vec![statistics(&["Labels added: 1", "Cached execution: 0"])]);
    let result = run(reply).unwrap();
    assert!(result.header().is_none());
    assert_eq!(result.len(), 0);
    assert!(result.records().next().is_none());
    assert_eq!(result.statistics().labels_added(), 1);
    assert!(!result.statistics().cached_execution());
}

#[test]
fn test_node_and_relation_columns() {
    let (executor, client) = client();
    executor.push_reply(result_set(
        vec![
            column(ColumnKind::Node, "a"),
            column(ColumnKind::Relation, "r"),
            column(ColumnKind::Scalar, "age"),
        ],
        vec![vec![
            node(0, &[0], vec![property(0, ValueType::String, text("alice"))]),
            edge(7, 0, 0, 1, vec![]),
            tagged_int(33),
        ]],
        &[],
    ));

    let result = client.query("social", "MATCH (a)-[r]->() RETURN a, r, a.age").unwrap();
    let record = result.record(0).unwrap().unwrap();
    let a = record.get_node("a").unwrap();
    assert!(a.has_label("person"));
    assert_eq!(a.get_property("name"), Some(&Value::from("alice")));
    assert_eq!(record.get_edge(1).unwrap().relationship_type, "KNOWS");
    assert_eq!(record.get_i64("age").unwrap(), 33);
    assert!(result.record(1).is_none());
}

#[test]
fn test_unknown_column_kind_reads_as_null() {
    let reply = result_set(
        vec![array(vec![int(0), text("mystery")])],
        vec![vec![text("anything")]],
        &[],
    );
    let result = run(reply).unwrap();
    assert_eq!(result.header().unwrap().column_kinds(), &[ColumnKind::Unknown]);
    let record = result.record(0).unwrap().unwrap();
    assert!(record.get("mystery").unwrap().is_null());
}

#[test]
fn test_header_code_zero_with_statistics() {
    // Column code 0 ahead of a tagged string cell, as older servers send it
    let reply = result_set(
        vec![array(vec![int(0), text("name")])],
        vec![vec![tagged_string("alice")]],
        &["Nodes created: 1", "Properties set: 2"],
    );
    let result = run(reply).unwrap();

    let header = result.header().unwrap();
    assert_eq!(header.column_kinds(), &[ColumnKind::Unknown]);
    assert_eq!(header.column_names(), &["name".to_string()]);
    assert_eq!(result.len(), 1);

    let record = result.record(0).unwrap().unwrap();
    assert_eq!(record.get("name").unwrap(), &Value::Null);
    assert_eq!(result.statistics().nodes_created(), 1);
    assert_eq!(result.statistics().properties_set(), 2);
}

#[test]
fn test_iteration_can_be_repeated() {
    let reply = result_set(
        vec![column(ColumnKind::Scalar, "x")],
        (0..4).map(|i| vec![tagged_int(i)]).collect(),
        &[],
    );
    let result = run(reply).unwrap();

    let first: Vec<i64> = result.records().map(|r| r.unwrap().get_i64(0).unwrap()).collect();
    let second: Vec<i64> = (&result).into_iter().map(|r| r.unwrap().get_i64("x").unwrap()).collect();
    assert_eq!(first, vec![0, 1, 2, 3]);
    assert_eq!(first, second);
    assert_eq!(result.records().len(), 4);
}

#[test]
fn test_nested_error_atom_aborts_classification() {
    let reply = result_set(
        vec![column(ColumnKind::Scalar, "x")],
        vec![vec![RawReply::Error("Division by zero".to_string())]],
        &[],
    );
    match run(reply) {
        Err(GraphError::Server(message)) => assert_eq!(message, "Division by zero"),
        other => panic!("expected server error, got {:?}", other),
    }
}

#[test]
fn test_top_level_error_atom() {
    let reply = RawReply::Error("errMsg: Invalid input".to_string());
    assert!(matches!(run(reply), Err(GraphError::Server(_))));
}

#[test]
fn test_malformed_shapes() {
    assert!(matches!(run(text("OK")), Err(GraphError::MalformedReply(_))));
    assert!(matches!(
        run(array(vec![array(vec![]), array(vec![])])),
        Err(GraphError::MalformedReply(_))
    ));

    // Row arity must match the header
    let reply = result_set(
        vec![column(ColumnKind::Scalar, "x"), column(ColumnKind::Scalar, "y")],
        vec![vec![tagged_int(1)]],
        &[],
    );
    assert!(matches!(run(reply), Err(GraphError::MalformedReply(_))));
}

#[test]
fn test_decode_errors_surface_per_record() {
    let reply = result_set(
        vec![column(ColumnKind::Node, "n")],
        vec![vec![node(1, &[0], vec![])], vec![node(2, &[5], vec![])]],
        &[],
    );
    let result = run(reply).unwrap();

    let mut records = result.records();
    assert!(records.next().unwrap().is_ok());
    assert!(matches!(
        records.next().unwrap(),
        Err(GraphError::ProtocolMismatch { index: 5, .. })
    ));
    assert!(records.next().is_none());
    assert!(result.to_records().is_err());
}

#[test]
fn test_records_deserialize_into_structs() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Person {
        name: String,
        age: i64,
    }

    let reply = result_set(
        vec![column(ColumnKind::Scalar, "name"), column(ColumnKind::Scalar, "age")],
        vec![
            vec![tagged_string("alice"), tagged_int(33)],
            vec![tagged_string("bob"), tagged_int(41)],
        ],
        &[],
    );
    let people: Vec<Person> = run(reply)
        .unwrap()
        .records()
        .map(|r| r.and_then(|record| record.deserialize()))
        .collect::<graphwire::Result<_>>()
        .unwrap();
    assert_eq!(
        people,
        vec![
            Person { name: "alice".to_string(), age: 33 },
            Person { name: "bob".to_string(), age: 41 },
        ]
    );
}

#[test]
fn test_cached_execution_and_execution_time() {
    let reply = array(vec![statistics(&[
        "Cached execution: 1",
        "Query internal execution time: 0.215 milliseconds",
    ])]);
    let result = run(reply).unwrap();
    assert!(result.statistics().cached_execution());
    assert!((result.statistics().query_internal_execution_time() - 0.215).abs() < 1e-9);
}

proptest! {
    #[test]
    fn row_count_matches_reply_shape(rows in 0usize..20, with_header in any::<bool>()) {
        let reply = if with_header {
            result_set(
                vec![column(ColumnKind::Scalar, "x")],
                (0..rows).map(|i| vec![tagged_int(i as i64)]).collect(),
                &["Nodes created: 0"],
            )
        } else {
            array(vec![statistics(&["Nodes created: 0"])])
        };
        let result = run(reply).unwrap();
        if with_header {
            prop_assert!(result.header().is_some());
            prop_assert_eq!(result.len(), rows);
        } else {
            prop_assert!(result.header().is_none());
            prop_assert_eq!(result.len(), 0);
        }
    }

    #[test]
    fn cached_execution_iff_one(value in prop_oneof![
        Just("1".to_string()),
        (-5i64..5).prop_map(|v| v.to_string()),
        "[a-z]{1,4}",
    ]) {
        let line = format!("Cached execution: {}", value);
        let result = run(array(vec![statistics(&[line.as_str()])])).unwrap();
        prop_assert_eq!(result.statistics().cached_execution(), value == "1");
    }
}
