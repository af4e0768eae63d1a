//! Query parameter types for list endpoints.

use serde::Deserialize;
use sitedesk_core::error::CoreError;
use sitedesk_core::listing::{
    clamp_limit, clamp_offset, parse_bool_flag, SortOrder, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
use sitedesk_core::project::ProjectSortField;
use sitedesk_db::models::project::ProjectListQuery;

/// Filter, sort and pagination parameters for `GET /projects/all`.
///
/// `sort_order` and `deleted` arrive as raw strings so that invalid values
/// produce a validation error with a useful message, and so that `deleted`
/// follows the flag token rules of [`parse_bool_flag`].
#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilterParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub name: Option<String>,
    pub deleted: Option<String>,
}

impl ProjectFilterParams {
    /// Validate and normalise into a repository query.
    pub fn into_list_query(self) -> Result<ProjectListQuery, CoreError> {
        let sort_by = self
            .sort_by
            .as_deref()
            .map(ProjectSortField::parse)
            .transpose()?;
        let sort_order = self
            .sort_order
            .as_deref()
            .map(SortOrder::parse)
            .transpose()?
            .unwrap_or_default();

        Ok(ProjectListQuery {
            name: self.name.filter(|n| !n.is_empty()),
            deleted: self.deleted.as_deref().map(parse_bool_flag),
            sort_by,
            sort_order,
            limit: clamp_limit(self.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT),
            offset: clamp_offset(self.offset),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_params_are_absent() {
        let query = ProjectFilterParams::default().into_list_query().unwrap();
        assert_eq!(query.limit, 10);
        assert_eq!(query.offset, 0);
        assert_eq!(query.sort_order, SortOrder::Asc);
        assert!(query.sort_by.is_none());
        assert!(query.deleted.is_none());
        assert!(query.name.is_none());
    }

    #[test]
    fn deleted_flag_uses_token_rules() {
        let parse = |raw: &str| {
            ProjectFilterParams {
                deleted: Some(raw.to_string()),
                ..Default::default()
            }
            .into_list_query()
            .unwrap()
            .deleted
        };
        assert_eq!(parse("True"), Some(true));
        assert_eq!(parse("1"), Some(true));
        assert_eq!(parse("no"), Some(false));
    }

    #[test]
    fn invalid_sort_order_is_rejected() {
        let params = ProjectFilterParams {
            sort_order: Some("upwards".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.into_list_query(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn sort_by_is_parsed() {
        let params = ProjectFilterParams {
            sort_by: Some("name".to_string()),
            sort_order: Some("desc".to_string()),
            ..Default::default()
        };
        let query = params.into_list_query().unwrap();
        assert_eq!(query.sort_by, Some(ProjectSortField::Name));
        assert_eq!(query.sort_order, SortOrder::Desc);
    }
}
