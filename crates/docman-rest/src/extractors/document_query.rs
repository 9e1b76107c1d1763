//! Query string of the document list endpoint.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use chrono::{DateTime, NaiveDate, Utc};
use docman_core::{DocmanError, DocmanResult, ShippingStatus};
use docman_service::DocumentSearchParams;
use serde::Deserialize;
use utoipa::IntoParams;

/// Raw search conditions as sent by the client.
///
/// Values stay strings until [`DocumentSearchParams::try_from`] so that a
/// malformed number or date becomes a 400 with a readable message. Empty
/// values count as absent.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DocumentListQuery {
    /// Case-sensitive substring of the title.
    pub title: Option<String>,
    /// Exact shipping status.
    #[param(example = "0")]
    pub shipping_status: Option<String>,
    /// Lower bound on the creation time, RFC 3339 or `YYYY-MM-DD`.
    #[param(example = "2025-04-01")]
    pub created_at_from: Option<String>,
    /// Upper bound on the creation time, RFC 3339 or `YYYY-MM-DD` (whole day).
    #[param(example = "2025-04-30")]
    pub created_at_to: Option<String>,
}

impl TryFrom<DocumentListQuery> for DocumentSearchParams {
    type Error = DocmanError;

    fn try_from(query: DocumentListQuery) -> Result<Self, Self::Error> {
        let shipping_status = non_empty(query.shipping_status)
            .map(|raw| parse_shipping_status(&raw))
            .transpose()?;
        let created_at_from = non_empty(query.created_at_from)
            .map(|raw| parse_date(&raw, "createdAtFrom", Bound::Start))
            .transpose()?;
        let created_at_to = non_empty(query.created_at_to)
            .map(|raw| parse_date(&raw, "createdAtTo", Bound::End))
            .transpose()?;

        Ok(Self {
            title: non_empty(query.title),
            shipping_status,
            created_at_from,
            created_at_to,
        })
    }
}

/// Search conditions parsed from the query string.
///
/// Every failure, including a query string serde cannot read (such as a
/// repeated key), is answered with the JSON error body.
#[derive(Debug, Clone)]
pub struct SearchQuery(pub DocumentSearchParams);

#[async_trait]
impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<DocumentListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| DocmanError::bad_request(format!("invalid query: {}", rejection.body_text())))?;

        Ok(Self(DocumentSearchParams::try_from(query)?))
    }
}

#[derive(Clone, Copy)]
enum Bound {
    Start,
    End,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_shipping_status(raw: &str) -> DocmanResult<ShippingStatus> {
    let value: i32 = raw
        .trim()
        .parse()
        .map_err(|_| DocmanError::bad_request(format!("shippingStatus must be an integer, got '{raw}'")))?;
    ShippingStatus::new(value)
}

fn parse_date(raw: &str, field: &str, bound: Bound) -> DocmanResult<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        DocmanError::bad_request(format!("{field} must be a date (YYYY-MM-DD or RFC 3339), got '{raw}'"))
    })?;
    let at = match bound {
        Bound::Start => date.and_hms_opt(0, 0, 0),
        Bound::End => date.and_hms_nano_opt(23, 59, 59, 999_999_999),
    };
    at.map(|at| at.and_utc())
        .ok_or_else(|| DocmanError::bad_request(format!("{field} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use chrono::TimeZone;

    async fn extract(uri: &str) -> Result<SearchQuery, AppError> {
        let (mut parts, ()) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        SearchQuery::from_request_parts(&mut parts, &()).await
    }

    fn query() -> DocumentListQuery {
        DocumentListQuery::default()
    }

    #[test]
    fn test_empty_query() {
        let params = DocumentSearchParams::try_from(query()).unwrap();
        assert_eq!(params, DocumentSearchParams::new());
    }

    #[test]
    fn test_empty_values_are_absent() {
        let params = DocumentSearchParams::try_from(DocumentListQuery {
            title: Some(String::new()),
            shipping_status: Some(String::new()),
            created_at_from: Some(String::new()),
            created_at_to: Some(String::new()),
        })
        .unwrap();
        assert_eq!(params, DocumentSearchParams::new());
    }

    #[test]
    fn test_shipping_status_zero() {
        let params = DocumentSearchParams::try_from(DocumentListQuery {
            shipping_status: Some("0".to_string()),
            ..query()
        })
        .unwrap();
        assert_eq!(params.shipping_status, Some(ShippingStatus::NOT_SHIPPED));
    }

    #[test]
    fn test_non_numeric_shipping_status() {
        let err = DocumentSearchParams::try_from(DocumentListQuery {
            shipping_status: Some("abc".to_string()),
            ..query()
        })
        .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_date_only_bounds_cover_whole_days() {
        let params = DocumentSearchParams::try_from(DocumentListQuery {
            created_at_from: Some("2025-04-23".to_string()),
            created_at_to: Some("2025-04-25".to_string()),
            ..query()
        })
        .unwrap();

        assert_eq!(
            params.created_at_from,
            Some(Utc.with_ymd_and_hms(2025, 4, 23, 0, 0, 0).unwrap())
        );
        let to = params.created_at_to.unwrap();
        assert!(to > Utc.with_ymd_and_hms(2025, 4, 25, 23, 59, 59).unwrap());
        assert!(to < Utc.with_ymd_and_hms(2025, 4, 26, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_rfc3339_is_used_as_is() {
        let params = DocumentSearchParams::try_from(DocumentListQuery {
            created_at_to: Some("2025-04-25T10:00:00+02:00".to_string()),
            ..query()
        })
        .unwrap();

        assert_eq!(
            params.created_at_to,
            Some(Utc.with_ymd_and_hms(2025, 4, 25, 8, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_invalid_date() {
        let err = DocumentSearchParams::try_from(DocumentListQuery {
            created_at_from: Some("25/04/2025".to_string()),
            ..query()
        })
        .unwrap_err();
        assert!(err.to_string().contains("createdAtFrom"));
    }

    #[tokio::test]
    async fn test_search_query_parses_conditions() {
        let SearchQuery(params) = extract("/api/document?title=Spec&shippingStatus=1").await.unwrap();

        assert_eq!(params.title.as_deref(), Some("Spec"));
        assert_eq!(params.shipping_status, Some(ShippingStatus::SHIPPED));
    }

    #[tokio::test]
    async fn test_repeated_key_is_bad_request() {
        let AppError(err) = extract("/api/document?shippingStatus=0&shippingStatus=1")
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().starts_with("invalid query"));
    }
}
