//! Send the substance queries to the PsychonautWiki endpoint

use graphql_client::{GraphQLQuery, QueryBody};
use reqwest::header::{ACCEPT, HeaderValue, USER_AGENT};
use serde::de::Error as _;
use url::Url;

use crate::config::ClientConfig;
use crate::errors::Error;
use crate::model::Substance;
use crate::queries::{
    SUBSTANCE_NAMES_LIMIT, SubstanceDetailQuery, SubstanceNamesQuery, substance_detail_query,
    substance_names_query,
};

/// A handle for querying the PsychonautWiki API.
///
/// Holds no per-request state, so one client can serve any number of concurrent calls. Dropping
/// an in-flight call's future cancels the request.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let endpoint = config.endpoint()?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(Error::Transport)?;
        Ok(Self { http, endpoint })
    }

    /// The endpoint requests are sent to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// List the name of every substance in the catalog, in the order the server returns them
    pub async fn list_substance_names(&self) -> Result<Vec<String>, Error> {
        let response = self
            .graphql_request::<SubstanceNamesQuery>(&SubstanceNamesQuery::build_query(
                substance_names_query::Variables {
                    limit: Some(SUBSTANCE_NAMES_LIMIT),
                },
            ))
            .await?;

        tracing::debug!(count = response.substances.len(), "received substance names");
        Ok(response
            .substances
            .into_iter()
            .map(|substance| substance.name)
            .collect())
    }

    /// Fetch the full record of the first substance matching `query`
    pub async fn fetch_substance_detail(&self, query: &str) -> Result<Substance, Error> {
        let response = self
            .graphql_request::<SubstanceDetailQuery>(&SubstanceDetailQuery::build_query(
                substance_detail_query::Variables {
                    query: Some(query.to_string()),
                },
            ))
            .await?;

        tracing::debug!(
            query,
            count = response.substances.len(),
            "received substance details"
        );
        response
            .substances
            .into_iter()
            .next()
            .ok_or_else(|| Error::EmptyResult {
                query: query.to_string(),
            })
    }

    async fn graphql_request<Query>(
        &self,
        request_body: &QueryBody<Query::Variables>,
    ) -> Result<Query::ResponseData, Error>
    where
        Query: GraphQLQuery,
    {
        tracing::debug!(
            operation = request_body.operation_name,
            endpoint = %self.endpoint,
            "sending GraphQL request"
        );
        let res = self
            .http
            .post(self.endpoint.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(
                USER_AGENT,
                HeaderValue::from_static(concat!("psychonaut-client/", env!("CARGO_PKG_VERSION"))),
            )
            .json(request_body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let body = res.bytes().await.map_err(Error::Transport)?;

        #[cfg(debug_assertions)]
        tracing::debug!(
            operation = request_body.operation_name,
            response = %String::from_utf8_lossy(&body),
            "raw GraphQL response"
        );

        let response_body: graphql_client::Response<Query::ResponseData> =
            serde_json::from_slice(&body)?;
        let errors = response_body.errors.unwrap_or_default();
        match response_body.data {
            Some(data) => {
                if !errors.is_empty() {
                    tracing::warn!(
                        operation = request_body.operation_name,
                        "GraphQL response carried errors alongside data: {}",
                        join_messages(&errors)
                    );
                }
                Ok(data)
            }
            None if !errors.is_empty() => Err(Error::Response(join_messages(&errors))),
            None => Err(Error::Decode(serde_json::Error::custom(
                "GraphQL response is missing `data`",
            ))),
        }
    }
}

fn join_messages(errors: &[graphql_client::Error]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
