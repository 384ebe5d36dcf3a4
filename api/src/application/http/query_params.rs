use std::collections::HashMap;
use std::str::FromStr;

/// Filter operator for query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Ilike,
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "ilike" => Ok(FilterOperator::Ilike),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl FilterCondition {
    /// Case-insensitive for `ilike` (substring), exact for `eq`.
    pub fn matches(&self, candidate: &str) -> bool {
        match self.operator {
            FilterOperator::Eq => candidate == self.value,
            FilterOperator::Ilike => candidate
                .to_lowercase()
                .contains(&self.value.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub conditions: Vec<FilterCondition>,
}

impl FilterParams {
    pub fn field(&self, field: &str) -> Option<&FilterCondition> {
        self.conditions.iter().find(|c| c.field == field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationParams {
    pub offset: u32,
    pub limit: u32,
}

impl PaginationParams {
    pub fn new(offset: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            offset: offset.unwrap_or(0),
            limit: limit.unwrap_or(50).clamp(1, 200),
        }
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub search: Option<String>,
    pub filter: FilterParams,
    pub pagination: PaginationParams,
}

impl QueryParams {
    /// Handles formats like:
    /// - search=riz
    /// - filter[field]=value (defaults to eq)
    /// - filter[field][operator]=value
    /// - offset=0, limit=50
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut filter = FilterParams::default();
        let mut search = None;
        let mut offset = None;
        let mut limit = None;

        for (key, value) in query_map {
            if let Some(filter_key) = key.strip_prefix("filter[") {
                let Some(end_bracket) = filter_key.find(']') else {
                    continue;
                };
                let field = filter_key[..end_bracket].to_string();
                let remaining = &filter_key[end_bracket + 1..];

                let operator = if remaining.is_empty() {
                    Some(FilterOperator::Eq)
                } else {
                    remaining
                        .strip_prefix('[')
                        .and_then(|r| r.strip_suffix(']'))
                        .and_then(|op| op.parse().ok())
                };

                if let Some(operator) = operator {
                    filter.conditions.push(FilterCondition {
                        field,
                        operator,
                        value: value.clone(),
                    });
                }
            } else if key == "search" {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    search = Some(trimmed.to_string());
                }
            } else if key == "offset" {
                offset = value.parse().ok();
            } else if key == "limit" {
                limit = value.parse().ok();
            }
        }

        Self {
            search,
            filter,
            pagination: PaginationParams::new(offset, limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(pairs: &[(&str, &str)]) -> QueryParams {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        QueryParams::from_query_map(&map)
    }

    #[test]
    fn filter_defaults_to_eq() {
        let params = parse(&[("filter[expiration_status]", "SOON")]);
        let condition = params.filter.field("expiration_status").unwrap();
        assert_eq!(condition.operator, FilterOperator::Eq);
        assert_eq!(condition.value, "SOON");
    }

    #[test]
    fn filter_with_operator() {
        let params = parse(&[("filter[name][ilike]", "RI")]);
        let condition = params.filter.field("name").unwrap();
        assert_eq!(condition.operator, FilterOperator::Ilike);
        assert!(condition.matches("riz basmati"));
        assert!(!condition.matches("pâtes"));
    }

    #[test]
    fn unknown_operator_is_ignored() {
        let params = parse(&[("filter[name][gt]", "a")]);
        assert!(params.filter.conditions.is_empty());
    }

    #[test]
    fn search_and_pagination() {
        let params = parse(&[("search", "  yassa "), ("offset", "10"), ("limit", "500")]);
        assert_eq!(params.search.as_deref(), Some("yassa"));
        assert_eq!(params.pagination.offset, 10);
        assert_eq!(params.pagination.limit, 200);
    }

    #[test]
    fn malformed_numbers_fall_back_to_defaults() {
        let params = parse(&[("offset", "-1"), ("limit", "many"), ("search", " ")]);
        assert_eq!(params.pagination, PaginationParams::default());
        assert!(params.search.is_none());
    }
}
