//! HTTP services, one module per entity, one handler file per operation.
//!
//! Failure bodies are always `{"error": string}`; item successes are
//! `{"<entity>": object}`, list successes `{"<entities>": array, totalCount,
//! page, limit}`, deletions `{"success": true}`.

pub mod ai_models;
pub mod categories;
pub mod guides;
pub mod uploads;

use actix_web::HttpResponse;
use regex::Regex;
use serde_json::json;

use common::requests::ListQuery;

/// Validated list-endpoint parameters. `sort` and `order` are whitelisted
/// before they are interpolated into SQL.
pub(crate) struct ListParams {
    pub page: u32,
    pub limit: u32,
    /// LIKE pattern built from the search term; matches everything when no
    /// term was given.
    pub pattern: String,
    pub sort: String,
    pub order: String,
}

impl ListParams {
    pub fn offset(&self) -> u32 {
        (self.page - 1) * self.limit
    }
}

pub(crate) fn list_params(
    query: &ListQuery,
    sort_columns: &[&str],
    default_sort: &str,
) -> Result<ListParams, String> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).clamp(1, 100);
    let sort = match query.sort.as_deref() {
        Some(sort) if sort_columns.contains(&sort) => sort.to_string(),
        Some(sort) => return Err(format!("Invalid sort field: {sort}")),
        None => default_sort.to_string(),
    };
    let order = match query.order.as_deref() {
        Some("asc") => "ASC".to_string(),
        Some("desc") | None => "DESC".to_string(),
        Some(order) => return Err(format!("Invalid sort order: {order}")),
    };
    let pattern = format!("%{}%", query.search.as_deref().unwrap_or("").trim());
    Ok(ListParams {
        page,
        limit,
        pattern,
        sort,
        order,
    })
}

pub(crate) fn is_hex_color(value: &str) -> bool {
    Regex::new(r"^#[0-9a-fA-F]{6}$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

pub(crate) fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": message.into() }))
}

pub(crate) fn not_found(message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": message.into() }))
}

pub(crate) fn server_error(message: impl Into<String>) -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "error": message.into() }))
}

/// One report naming every missing field, mirroring the authoring form's
/// missing-field list.
pub(crate) fn missing_fields_error(missing: &[&str]) -> HttpResponse {
    bad_request(format!("Missing required fields: {}", missing.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_validates_sort_and_order() {
        let query = ListQuery {
            sort: Some("title".to_string()),
            order: Some("asc".to_string()),
            ..Default::default()
        };
        let params = list_params(&query, &["title", "created_at"], "created_at").unwrap();
        assert_eq!(params.sort, "title");
        assert_eq!(params.order, "ASC");

        let query = ListQuery {
            sort: Some("icon_url; DROP TABLE categories".to_string()),
            ..Default::default()
        };
        assert!(list_params(&query, &["title", "created_at"], "created_at").is_err());

        let query = ListQuery {
            order: Some("sideways".to_string()),
            ..Default::default()
        };
        assert!(list_params(&query, &["title"], "title").is_err());
    }

    #[test]
    fn list_params_clamps_page_and_limit() {
        let query = ListQuery {
            page: Some(0),
            limit: Some(1000),
            ..Default::default()
        };
        let params = list_params(&query, &["title"], "title").unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 100);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn hex_color_check() {
        assert!(is_hex_color("#112233"));
        assert!(is_hex_color("#AaBbCc"));
        assert!(!is_hex_color("112233"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color("#1122334"));
        assert!(!is_hex_color("#11223g"));
    }
}
