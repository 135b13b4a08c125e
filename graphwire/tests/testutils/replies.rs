//! Builders for compact reply trees

use graphwire::{ColumnKind, RawReply, ValueType};

pub fn int(value: i64) -> RawReply {
    RawReply::Integer(value)
}

pub fn text(value: &str) -> RawReply {
    RawReply::bulk(value)
}

pub fn array(items: Vec<RawReply>) -> RawReply {
    RawReply::Array(items)
}

/// Tagged value `[code, payload]`
pub fn tagged(value_type: ValueType, payload: RawReply) -> RawReply {
    array(vec![int(value_type.code()), payload])
}

pub fn tagged_string(value: &str) -> RawReply {
    tagged(ValueType::String, text(value))
}

pub fn tagged_int(value: i64) -> RawReply {
    tagged(ValueType::Integer, int(value))
}

/// Flat property entry `[keyIdx, code, payload]`
pub fn property(key: i64, value_type: ValueType, payload: RawReply) -> RawReply {
    array(vec![int(key), int(value_type.code()), payload])
}

/// Untagged node payload `[id, [labelIdx...], [property...]]`
pub fn node(id: i64, labels: &[i64], properties: Vec<RawReply>) -> RawReply {
    array(vec![
        int(id),
        array(labels.iter().copied().map(int).collect()),
        array(properties),
    ])
}

/// Untagged edge payload `[id, typeIdx, src, dst, [property...]]`
pub fn edge(id: i64, type_index: i64, source: i64, destination: i64, properties: Vec<RawReply>) -> RawReply {
    array(vec![
        int(id),
        int(type_index),
        int(source),
        int(destination),
        array(properties),
    ])
}

/// Tagged path built from untagged node and edge payloads
pub fn path(nodes: Vec<RawReply>, edges: Vec<RawReply>) -> RawReply {
    tagged(
        ValueType::Path,
        array(vec![
            tagged(
                ValueType::Array,
                array(nodes.into_iter().map(|n| tagged(ValueType::Node, n)).collect()),
            ),
            tagged(
                ValueType::Array,
                array(edges.into_iter().map(|e| tagged(ValueType::Edge, e)).collect()),
            ),
        ]),
    )
}

pub fn column(kind: ColumnKind, name: &str) -> RawReply {
    array(vec![int(kind.code()), text(name)])
}

pub fn statistics(lines: &[&str]) -> RawReply {
    array(lines.iter().map(|line| text(line)).collect())
}

/// Full `[header, rows, statistics]` reply
pub fn result_set(columns: Vec<RawReply>, rows: Vec<Vec<RawReply>>, stats: &[&str]) -> RawReply {
    array(vec![
        array(columns),
        array(rows.into_iter().map(array).collect()),
        statistics(stats),
    ])
}

/// Reply of a schema procedure listing `names`
pub fn procedure_reply(names: &[String]) -> RawReply {
    result_set(
        vec![column(ColumnKind::Scalar, "name")],
        names.iter().map(|name| vec![tagged_string(name)]).collect(),
        &["Query internal execution time: 0.1 milliseconds"],
    )
}
