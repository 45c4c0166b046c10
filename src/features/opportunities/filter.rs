use chrono::NaiveDate;
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::shared::validation::escape_like;

/// Resolved filter over opportunities.
///
/// All criteria are optional and combine with AND; within `search`, the
/// title and description matches combine with OR. An empty filter matches
/// everything. The same value type backs the listing view, the JSON API,
/// and the export pipeline; it knows how to append bound SQL predicates and
/// how to evaluate itself in memory, so the resolution logic is testable
/// without a database.
#[derive(Debug, Clone, Default)]
pub struct OpportunityFilter {
    pub categories: Vec<Uuid>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub search: Option<String>,
}

fn parse_date(label: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!(
            "Invalid {}: '{}' is not a date in YYYY-MM-DD format",
            label, value
        ))
    })
}

impl OpportunityFilter {
    /// Build a filter from raw query inputs. Blank strings count as absent;
    /// malformed dates are rejected here, before any query runs.
    pub fn resolve(
        categories: Vec<Uuid>,
        date_from: Option<&str>,
        date_to: Option<&str>,
        search: Option<&str>,
    ) -> Result<Self> {
        let date_from = match date_from.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => Some(parse_date("date_from", s)?),
            None => None,
        };
        let date_to = match date_to.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => Some(parse_date("date_to", s)?),
            None => None,
        };
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            categories,
            date_from,
            date_to,
            search,
        })
    }

    /// Append the filter's predicates to a query whose FROM clause aliases
    /// opportunities as `o`.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(" WHERE TRUE");

        if !self.categories.is_empty() {
            qb.push(" AND o.category_id = ANY(");
            qb.push_bind(self.categories.clone());
            qb.push(")");
        }
        if let Some(from) = self.date_from {
            qb.push(" AND o.date >= ");
            qb.push_bind(from);
        }
        if let Some(to) = self.date_to {
            qb.push(" AND o.date <= ");
            qb.push_bind(to);
        }
        if let Some(ref term) = self.search {
            let pattern = format!("%{}%", escape_like(term));
            qb.push(" AND (o.title ILIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR o.description ILIKE ");
            qb.push_bind(pattern);
            qb.push(")");
        }
    }

    /// In-memory equivalent of `push_where`, over one opportunity's fields.
    pub fn matches(
        &self,
        category_id: Uuid,
        date: NaiveDate,
        title: &str,
        description: &str,
    ) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&category_id) {
            return false;
        }
        if self.date_from.is_some_and(|from| date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| date > to) {
            return false;
        }
        if let Some(ref term) = self.search {
            let needle = term.to_lowercase();
            if !title.to_lowercase().contains(&needle)
                && !description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = OpportunityFilter::resolve(vec![], None, None, None).unwrap();
        assert!(filter.matches(Uuid::new_v4(), date("2024-01-05"), "Anything", "at all"));
    }

    #[test]
    fn test_blank_inputs_impose_no_constraint() {
        let filter = OpportunityFilter::resolve(vec![], Some("  "), Some(""), Some("")).unwrap();
        assert!(filter.date_from.is_none());
        assert!(filter.date_to.is_none());
        assert!(filter.search.is_none());
    }

    #[test]
    fn test_malformed_date_rejected() {
        let err = OpportunityFilter::resolve(vec![], Some("01/05/2024"), None, None).unwrap_err();
        assert!(err.to_string().contains("date_from"));

        let err = OpportunityFilter::resolve(vec![], None, Some("2024-13-40"), None).unwrap_err();
        assert!(err.to_string().contains("date_to"));
    }

    #[test]
    fn test_same_day_bounds_match_only_that_day() {
        let filter =
            OpportunityFilter::resolve(vec![], Some("2024-01-05"), Some("2024-01-05"), None)
                .unwrap();
        let id = Uuid::new_v4();
        assert!(filter.matches(id, date("2024-01-05"), "t", "d"));
        assert!(!filter.matches(id, date("2024-01-04"), "t", "d"));
        assert!(!filter.matches(id, date("2024-01-06"), "t", "d"));
    }

    #[test]
    fn test_date_from_excludes_earlier() {
        let filter = OpportunityFilter::resolve(vec![], Some("2024-01-06"), None, None).unwrap();
        let id = Uuid::new_v4();
        assert!(!filter.matches(id, date("2024-01-05"), "A", ""));
        assert!(filter.matches(id, date("2024-01-10"), "B", ""));
    }

    #[test]
    fn test_category_set_membership() {
        let wanted = Uuid::new_v4();
        let other = Uuid::new_v4();
        let filter =
            OpportunityFilter::resolve(vec![wanted, Uuid::new_v4()], None, None, None).unwrap();
        assert!(filter.matches(wanted, date("2024-01-05"), "t", "d"));
        assert!(!filter.matches(other, date("2024-01-05"), "t", "d"));
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_or_description() {
        let filter = OpportunityFilter::resolve(vec![], None, None, Some("TUTOR")).unwrap();
        let id = Uuid::new_v4();
        assert!(filter.matches(id, date("2024-01-05"), "Math tutoring", "help kids"));
        assert!(filter.matches(id, date("2024-01-05"), "Math", "evening tutor needed"));
        assert!(!filter.matches(id, date("2024-01-05"), "Meal prep", "cooking"));
    }

    #[test]
    fn test_constraints_combine_with_and() {
        let cat = Uuid::new_v4();
        let filter =
            OpportunityFilter::resolve(vec![cat], Some("2024-01-01"), None, Some("math")).unwrap();
        assert!(filter.matches(cat, date("2024-01-05"), "Math tutoring", ""));
        // right category, wrong search term
        assert!(!filter.matches(cat, date("2024-01-05"), "Meal prep", ""));
        // right search term, wrong category
        assert!(!filter.matches(Uuid::new_v4(), date("2024-01-05"), "Math tutoring", ""));
    }
}
