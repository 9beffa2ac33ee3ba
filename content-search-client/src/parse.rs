use crate::error::{Error, ErrorKind, Result};
use crate::models::Content;
use serde::Deserialize;
use serde_json::Value;

/// The two body shapes a collection accepts, resolved once at the boundary.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ParsedInput {
    /// A search API envelope, `{ "results": [...], ... }`.
    WithResults { results: Vec<Content> },
    /// A plain list of items, e.g. when a collection is seeded from a literal.
    Bare(Vec<Content>),
}

impl ParsedInput {
    pub fn into_records(self) -> Vec<Content> {
        match self {
            ParsedInput::WithResults { results } => results,
            ParsedInput::Bare(records) => records,
        }
    }
}

pub fn parse(response: Value) -> Result<Vec<Content>> {
    let input: ParsedInput = serde_json::from_value(response).map_err(|err| {
        Error::with_source(
            ErrorKind::MalformedResponse,
            "expected an object with `results` or an array of content items",
            err,
        )
    })?;

    let records = input.into_records();
    log::debug!("Parsed {} content items", records.len());
    Ok(records)
}
