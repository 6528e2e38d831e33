//! End-to-end rewrite tests: configuration documents on disk through to
//! rewritten clause text.

use std::fs;
use std::path::Path;

use sw_core::ConfigModel;
use sw_sql::{
    build_join_clause, expand_keyword, is_applicable_token, QueryTableSet, SqlError, SqlParser,
    StatementRewriter, TokenContext,
};

const REPLACE_JSON: &str = r##"{
  "language": "Oracle",
  "replaceCols": [
    { "key": "amount", "value": "#table_alias#.#col# * 100", "col": "amt", "table": "ORDERS", "table_alias": "o" },
    { "key": "customer", "col": "name", "table": "CUSTOMERS", "table_alias": "c" },
    { "key": "region", "value": "", "col": "region_name", "table": "REGIONS", "table_alias": "r" },
    { "key": "sku", "col": "code", "table": "ITEMS", "table_alias": "i" }
  ]
}"##;

const RELATION_JSON: &str = r##"{
  "name": "sales",
  "relation": [
    {
      "baseTable": "ORDERS",
      "b_alias": "o",
      "relations": [
        { "associatedTable": "CUSTOMERS", "a_alias": "c", "type": "left join", "conditions": "#b_alias#.cust_id = #a_alias#.id" }
      ]
    },
    {
      "baseTable": "CUSTOMERS",
      "b_alias": "c",
      "relations": [
        { "associatedTable": "REGIONS", "a_alias": "r", "type": "inner join", "conditions": "#b_alias#.region_id = #a_alias#.id" },
        { "associatedTable": "ORDERS", "a_alias": "o", "type": "left join", "conditions": "#a_alias#.cust_id = #b_alias#.id" }
      ]
    }
  ]
}"##;

fn write_props(root: &Path, replace: &str, relation: &str) {
    let props = root.join("props");
    fs::create_dir_all(&props).unwrap();
    fs::write(props.join("replaceProp.json"), replace).unwrap();
    fs::write(props.join("tableRelationProp.json"), relation).unwrap();
}

fn load_sales() -> (tempfile::TempDir, ConfigModel) {
    let dir = tempfile::tempdir().unwrap();
    write_props(dir.path(), REPLACE_JSON, RELATION_JSON);
    let config = ConfigModel::load_from_dir(dir.path()).unwrap();
    (dir, config)
}

#[test]
fn test_keyword_expansion_from_disk() {
    let (_dir, config) = load_sales();

    assert_eq!(expand_keyword(&config, "amount").unwrap(), "o.amt * 100");
    assert_eq!(expand_keyword(&config, "customer").unwrap(), "c.name");
    assert_eq!(expand_keyword(&config, "region").unwrap(), "r.region_name");

    assert!(!is_applicable_token(
        &config,
        "missing",
        &TokenContext::select_column()
    ));
    assert!(matches!(
        expand_keyword(&config, "missing"),
        Err(SqlError::UnknownKey(_))
    ));
}

#[test]
fn test_rewrite_from_sql_end_to_end() {
    let (_dir, config) = load_sales();
    let rewriter = StatementRewriter::new(&config);
    let parser = SqlParser::for_language(config.language());

    let rewrite = rewriter
        .rewrite_from_sql(
            &parser,
            "SELECT o.amt * 100 amount, c.name customer, r.region_name AS region FROM orders o",
        )
        .unwrap();

    assert_eq!(
        rewrite.clause,
        "from ORDERS o\n\
         left join CUSTOMERS c \n  on o.cust_id = c.id \n\
         inner join REGIONS r \n  on c.region_id = r.id \n"
    );
    assert!(rewrite.trailing_comment.starts_with("/*FROM orders"));
    assert!(rewrite.to_sql().ends_with("*/"));
}

#[test]
fn test_rewrite_from_sql_with_orphan() {
    let (_dir, config) = load_sales();
    let rewriter = StatementRewriter::new(&config);

    let rewrite = rewriter
        .rewrite_from_sql(
            &SqlParser::generic(),
            "SELECT i.code sku, o.amt * 100 amount FROM orders o, items i",
        )
        .unwrap();
    assert_eq!(rewrite.clause, "from ORDERS o\n,ITEMS i");
}

#[test]
fn test_cycle_in_graph_from_disk() {
    let (_dir, config) = load_sales();
    assert_eq!(
        config.relationship_graph().cycles(),
        vec![vec!["CUSTOMERS".to_string(), "ORDERS".to_string()]]
    );

    let used: QueryTableSet = [("CUSTOMERS", "c"), ("ORDERS", "o")].into_iter().collect();
    let out = build_join_clause(&used, config.relationship_graph());
    assert_eq!(out, "ORDERS o\nleft join CUSTOMERS c \n  on o.cust_id = c.id \n");
}

#[test]
fn test_rewrite_columns_sql_end_to_end() {
    let (_dir, config) = load_sales();
    let rewriter = StatementRewriter::new(&config);

    let rewrites = rewriter
        .rewrite_columns_sql(&SqlParser::generic(), "SELECT amount, id, customer FROM t")
        .unwrap();
    let replacements: Vec<&str> = rewrites.iter().map(|r| r.replacement.as_str()).collect();
    assert_eq!(replacements, vec!["o.amt * 100 amount", "c.name customer"]);
}

#[test]
fn test_config_shared_across_threads() {
    let (_dir, config) = load_sales();
    let sql = "SELECT o.amt * 100 amount, c.name customer FROM orders o";
    let expected = StatementRewriter::new(&config)
        .rewrite_from_sql(&SqlParser::generic(), sql)
        .unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    StatementRewriter::new(&config)
                        .rewrite_from_sql(&SqlParser::generic(), sql)
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_duplicate_key_rejected_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let replace = r#"{
      "language": "Oracle",
      "replaceCols": [
        { "key": "amount", "col": "amt", "table": "ORDERS", "table_alias": "o" },
        { "key": "amount", "col": "amt2", "table": "ORDERS", "table_alias": "o" }
      ]
    }"#;
    write_props(dir.path(), replace, RELATION_JSON);

    let err = ConfigModel::load_from_dir(dir.path()).unwrap_err();
    assert!(err.to_string().contains("amount"));
}
