use crate::core::error::Result;
use crate::index::document_index::Index;
use crate::query::ast::{LeafQuery, Query};
use crate::query::results::{DocSet, QueryResult};

/// Runs a single leaf matcher against a named index and returns its
/// matching docIds as a plain set. Field resolution and capability checks
/// happen inside `Index::field` / `FieldIndex::*_query`.
fn evaluate_leaf(leaf: &LeafQuery, index: &Index) -> Result<QueryResult> {
    match leaf {
        LeafQuery::Term { field, term } => {
            let result = index.field(field)?.term_query(field, term)?;
            Ok(QueryResult::from(&result))
        }
        LeafQuery::Terms { field, terms } => {
            let result = index.field(field)?.terms_query(field, terms)?;
            Ok(QueryResult::from(&result))
        }
        LeafQuery::Match { field, term } => {
            let result = index.field(field)?.match_query(field, term)?;
            Ok(QueryResult::from(&result))
        }
        LeafQuery::MatchPhrase { field, term } => {
            let result = index.field(field)?.phrase_query(field, term)?;
            Ok(QueryResult::from(&result))
        }
        LeafQuery::MultiMatch { fields, term } => {
            let mut result = QueryResult::default();
            for field in fields {
                let matches = index.field(field)?.match_query(field, term)?;
                for doc in matches.docs() {
                    result.insert(doc);
                }
            }
            Ok(result)
        }
    }
}

/// The boolean compositor: a query is either a leaf or a composition of
/// `must` (AND), `should` (errors only — scoring is out of scope),
/// `must_not` (set subtraction) and `filter` (AND, but initializes the
/// accumulator itself when no `must` preceded it). Errors in any clause
/// abort evaluation immediately.
pub fn evaluate(query: &Query, index: &Index) -> Result<QueryResult> {
    if let Some(leaf) = &query.leaf {
        return evaluate_leaf(leaf, index);
    }

    let mut result = QueryResult::default();

    for (j, clause) in query.must.iter().enumerate() {
        let matched = evaluate(clause, index)?;
        if j == 0 {
            result = matched;
        } else {
            result.retain_intersection(&matched);
        }
    }

    for clause in &query.should {
        // Collected for a future scoring pass; membership is unaffected.
        evaluate(clause, index)?;
    }

    for clause in &query.must_not {
        let matched = evaluate(clause, index)?;
        for doc in matched.docs() {
            result.remove(&doc);
        }
    }

    let must_ran = !query.must.is_empty();
    for (j, clause) in query.filter.iter().enumerate() {
        let matched = evaluate(clause, index)?;
        if !must_ran && j == 0 {
            result = matched;
        } else {
            result.retain_intersection(&matched);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EngineConfig;
    use crate::core::error::ErrorKind;
    use crate::core::types::DocId;
    use crate::index::document_index::Index;
    use crate::schema::schema::{FieldKind, Schema};
    use std::collections::HashMap;

    fn build_index() -> Index {
        let schema = Schema::new()
            .with_field("title", FieldKind::Text)
            .with_field("genre", FieldKind::Keyword);
        let mut index = Index::from_schema(schema, EngineConfig::default());
        let docs = [
            ("film://0", "the shawshank redemption", "drama"),
            ("film://1", "the godfather", "crime"),
            ("film://2", "the lord of the rings", "fantasy"),
        ];
        for (uri, title, genre) in docs {
            index
                .index(
                    uri,
                    HashMap::from([
                        ("title".to_string(), crate::analysis::content::Content::Text(title.into())),
                        (
                            "genre".to_string(),
                            crate::analysis::content::Content::Strings(vec![genre.into()]),
                        ),
                    ]),
                )
                .unwrap();
        }
        index
    }

    #[test]
    fn must_intersects_clauses() {
        let index = build_index();
        let query = Query::bool_query()
            .with_must(Query::match_query("title", "the"))
            .with_must(Query::term("genre", "drama"));
        let result = evaluate(&query, &index).unwrap();
        assert_eq!(result.docs(), vec![DocId::new(0)]);
    }

    #[test]
    fn must_not_removes_matches() {
        let index = build_index();
        let query = Query::bool_query()
            .with_must(Query::match_query("title", "the"))
            .with_must_not(Query::match_query("title", "lord"));
        let result = evaluate(&query, &index).unwrap();
        assert_eq!(result.docs(), vec![DocId::new(0), DocId::new(1)]);
    }

    #[test]
    fn filter_alone_acts_as_must() {
        let index = build_index();
        let query = Query::bool_query().with_filter(Query::term("genre", "crime"));
        let result = evaluate(&query, &index).unwrap();
        assert_eq!(result.docs(), vec![DocId::new(1)]);
    }

    #[test]
    fn should_does_not_affect_membership() {
        let index = build_index();
        let query = Query::bool_query()
            .with_must(Query::term("genre", "drama"))
            .with_should(Query::match_query("title", "godfather"));
        let result = evaluate(&query, &index).unwrap();
        assert_eq!(result.docs(), vec![DocId::new(0)]);
    }

    #[test]
    fn error_in_any_clause_aborts_evaluation() {
        let index = build_index();
        let query = Query::bool_query().with_must(Query::term("missing_field", "x"));
        let err = evaluate(&query, &index).unwrap_err();
        assert_eq!(err.kind, ErrorKind::FieldNotFound);
    }

    #[test]
    fn leaf_present_ignores_boolean_clauses() {
        let index = build_index();
        let mut query = Query::term("genre", "drama");
        query.must_not.push(Query::term("genre", "drama"));
        let result = evaluate(&query, &index).unwrap();
        assert_eq!(result.docs(), vec![DocId::new(0)]);
    }
}
