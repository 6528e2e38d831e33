use super::*;
use crate::parser::SqlParser;

fn facts(sql: &str) -> SelectListFacts {
    let stmt = SqlParser::generic().parse_single(sql).unwrap();
    extract_select_facts(&stmt).unwrap()
}

#[test]
fn test_extract_column_kinds() {
    let facts = facts("SELECT amount, o.id, total AS sum_total, count(*) FROM orders o");
    assert_eq!(
        facts.columns,
        vec![
            SelectColumn::column("amount"),
            SelectColumn::other("o.id"),
            SelectColumn::aliased("total", "sum_total"),
            SelectColumn::other("count(*)"),
        ]
    );
}

#[test]
fn test_extract_alias_without_as() {
    let facts = facts("SELECT o.amt * 100 amount FROM orders o");
    assert_eq!(
        facts.columns,
        vec![SelectColumn::aliased("o.amt * 100", "amount")]
    );
    assert_eq!(facts.aliases().collect::<Vec<_>>(), vec!["amount"]);
}

#[test]
fn test_extract_wildcard_is_other() {
    let facts = facts("SELECT * FROM orders");
    assert_eq!(facts.columns, vec![SelectColumn::other("*")]);
    assert_eq!(facts.column_refs().count(), 0);
}

#[test]
fn test_extract_left_side_of_union() {
    let facts = facts("SELECT a FROM t1 UNION ALL SELECT b FROM t2");
    assert_eq!(facts.columns, vec![SelectColumn::column("a")]);
}

#[test]
fn test_extract_through_parenthesized_query() {
    let facts = facts("(SELECT a, b x FROM t1)");
    assert_eq!(
        facts.columns,
        vec![SelectColumn::column("a"), SelectColumn::aliased("b", "x")]
    );
}

#[test]
fn test_extract_rejects_non_query() {
    let stmt = SqlParser::generic()
        .parse_single("INSERT INTO t VALUES (1)")
        .unwrap();
    match extract_select_facts(&stmt) {
        Err(SqlError::UnsupportedStatement(kind)) => assert_eq!(kind, "INSERT"),
        other => panic!("expected UnsupportedStatement, got {:?}", other),
    }
}

#[test]
fn test_from_clause_text() {
    let stmt = SqlParser::generic()
        .parse_single("SELECT amount FROM orders o, items i WHERE o.id = i.order_id")
        .unwrap();
    let text = from_clause_text(&stmt).unwrap();
    assert!(text.starts_with("FROM orders"));
    assert!(text.contains(", items"));
    assert!(!text.contains("WHERE"));
}

#[test]
fn test_from_clause_text_absent() {
    let stmt = SqlParser::generic().parse_single("SELECT 1").unwrap();
    assert_eq!(from_clause_text(&stmt), None);

    let stmt = SqlParser::generic()
        .parse_single("INSERT INTO t VALUES (1)")
        .unwrap();
    assert_eq!(from_clause_text(&stmt), None);
}

#[test]
fn test_facts_from_iterator() {
    let facts: SelectListFacts = vec![SelectColumn::column("a"), SelectColumn::aliased("x", "b")]
        .into_iter()
        .collect();
    assert_eq!(facts.column_refs().collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(facts.aliases().collect::<Vec<_>>(), vec!["b"]);
}
