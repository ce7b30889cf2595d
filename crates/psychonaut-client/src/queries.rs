//! The two GraphQL operations sent to the PsychonautWiki API
//!
//! Each operation lives in its own module with the document, its variables, and the shape of its
//! `data`, mirroring what `#[derive(GraphQLQuery)]` generates. The response types are hand written
//! so the detail query can decode straight into [`Substance`](crate::model::Substance).

use graphql_client::{GraphQLQuery, QueryBody};

/// Upper bound on the number of names requested by [`SubstanceNamesQuery`]
pub const SUBSTANCE_NAMES_LIMIT: i64 = 1000;

/// Every substance name in the catalog
pub struct SubstanceNamesQuery;

pub mod substance_names_query {
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "SubstanceNames";
    pub const QUERY: &str = include_str!("queries/substance_names.graphql");

    #[derive(Debug, Serialize)]
    pub struct Variables {
        pub limit: Option<i64>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    pub struct ResponseData {
        pub substances: Vec<SubstanceNamesQuerySubstances>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    pub struct SubstanceNamesQuerySubstances {
        pub name: String,
    }
}

impl GraphQLQuery for SubstanceNamesQuery {
    type Variables = substance_names_query::Variables;
    type ResponseData = substance_names_query::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: substance_names_query::QUERY,
            operation_name: substance_names_query::OPERATION_NAME,
        }
    }
}

/// The full record of every substance matching a name query
pub struct SubstanceDetailQuery;

pub mod substance_detail_query {
    use serde::{Deserialize, Serialize};

    use crate::model::Substance;

    pub const OPERATION_NAME: &str = "SubstanceDetail";
    pub const QUERY: &str = include_str!("queries/substance_detail.graphql");

    /// The caller's text is bound as `$query` and never spliced into [`QUERY`]
    #[derive(Debug, Serialize)]
    pub struct Variables {
        pub query: Option<String>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    pub struct ResponseData {
        pub substances: Vec<Substance>,
    }
}

impl GraphQLQuery for SubstanceDetailQuery {
    type Variables = substance_detail_query::Variables;
    type ResponseData = substance_detail_query::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: substance_detail_query::QUERY,
            operation_name: substance_detail_query::OPERATION_NAME,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn substance_names_document() {
        insta::assert_snapshot!(substance_names_query::QUERY, @r"
        query SubstanceNames($limit: Int) {
          substances(limit: $limit) {
            name
          }
        }
        ");
    }

    #[test]
    fn substance_names_body() {
        let body = SubstanceNamesQuery::build_query(substance_names_query::Variables {
            limit: Some(SUBSTANCE_NAMES_LIMIT),
        });
        let body = serde_json::to_value(&body).unwrap();

        assert_eq!(body["operationName"], json!("SubstanceNames"));
        assert_eq!(body["variables"], json!({ "limit": 1000 }));
        assert_eq!(body["query"], json!(substance_names_query::QUERY));
    }

    #[test]
    fn substance_detail_binds_query_as_variable() {
        let hostile = r#"x") { name } evil: substances(limit: 1000"#;
        let body = SubstanceDetailQuery::build_query(substance_detail_query::Variables {
            query: Some(hostile.to_string()),
        });
        let body = serde_json::to_value(&body).unwrap();

        assert_eq!(body["operationName"], json!("SubstanceDetail"));
        assert_eq!(body["variables"], json!({ "query": hostile }));
        assert_eq!(body["query"], json!(substance_detail_query::QUERY));
        assert!(!substance_detail_query::QUERY.contains(hostile));
    }

    #[test]
    fn substance_detail_selects_every_model_field() {
        for field in [
            "roas",
            "dose",
            "threshold",
            "heavy",
            "common",
            "light",
            "strong",
            "afterglow",
            "comeup",
            "offset",
            "onset",
            "peak",
            "total",
            "bioavailability",
            "toxicity",
            "addictionPotential",
            "class",
            "images",
            "summary",
            "tolerance",
            "commonNames",
            "crossTolerances",
            "effects",
        ] {
            assert!(
                substance_detail_query::QUERY.contains(field),
                "missing {field}"
            );
        }
    }

    #[test]
    fn names_response_keeps_server_order() {
        let data: substance_names_query::ResponseData = serde_json::from_value(json!({
            "substances": [{ "name": "Ethanol" }, { "name": "Caffeine" }, { "name": "Ethanol" }]
        }))
        .unwrap();
        let names: Vec<_> = data.substances.into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["Ethanol", "Caffeine", "Ethanol"]);
    }
}
