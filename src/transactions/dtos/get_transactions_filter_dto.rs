use crate::{
    app::models::pagination::Pagination,
    transactions::{enums::transaction_type::TransactionType, util::filter::TransactionFilters},
};

/// Query of `GET /v1/transactions`. Values are kept raw so that malformed
/// numbers fall back to defaults instead of rejecting the request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GetTransactionsFilterDto {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub origin: Option<String>,
    pub transaction_type: Option<String>,
}

impl GetTransactionsFilterDto {
    /// Reads the raw query string. The first occurrence of a key wins, unknown
    /// keys are ignored and an undecodable query is treated as empty.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut dto = Self::default();

        let Some(query) = query else {
            return dto;
        };

        let pairs = match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
            Ok(pairs) => pairs,
            Err(e) => {
                tracing::debug!(%e, "ignoring undecodable query string");
                return dto;
            }
        };

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut dto.page,
                "pageSize" => &mut dto.page_size,
                "origin" => &mut dto.origin,
                "transactionType" => &mut dto.transaction_type,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value);
            }
        }

        dto
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::from_query(self.page.as_deref(), self.page_size.as_deref())
    }

    pub fn filters(&self) -> TransactionFilters {
        let mut filters = TransactionFilters::default();

        if let Some(origin) = &self.origin {
            filters = filters.with_origin(origin.as_str());
        }

        if let Some(raw) = self.transaction_type.as_deref().filter(|t| !t.is_empty()) {
            match parse_transaction_type(raw) {
                Some(transaction_type) => {
                    filters = filters.with_transaction_type(transaction_type);
                }
                None => tracing::debug!(transaction_type = raw, "ignoring unknown filter value"),
            }
        }

        filters
    }
}

/// Accepts the numeric code (`1`) or the stored label (`CREDIT TRANSACTION`).
fn parse_transaction_type(raw: &str) -> Option<TransactionType> {
    match raw.trim().parse::<i32>() {
        Ok(code) => TransactionType::from_code(code),
        Err(_) => TransactionType::from_value(raw),
    }
}

#[cfg(test)]
mod tests {
    use crate::transactions::util::filter::FilterOption;

    use super::*;

    fn dto(query: &str) -> GetTransactionsFilterDto {
        GetTransactionsFilterDto::from_query(Some(query))
    }

    #[test]
    fn empty_query_means_defaults_and_no_filters() {
        let dto = dto("");

        assert_eq!(dto.pagination(), Pagination::default());
        assert!(dto.filters().is_empty());
    }

    #[test]
    fn reads_camel_case_parameters() {
        let dto = dto("page=2&pageSize=5&origin=desktop-web&transactionType=1");

        assert_eq!(dto.pagination(), Pagination { page: 2, page_size: 5 });
        assert_eq!(
            dto.filters().options(),
            &[
                FilterOption::Origin("desktop-web".to_string()),
                FilterOption::TransactionType(TransactionType::Credit),
            ]
        );
    }

    #[test]
    fn transaction_type_accepts_the_stored_label() {
        let dto = dto("transactionType=DEBIT+TRANSACTION");

        assert_eq!(
            dto.filters().options(),
            &[FilterOption::TransactionType(TransactionType::Debit)]
        );
    }

    #[test]
    fn unknown_or_empty_filter_values_are_not_applied() {
        assert!(dto("transactionType=9").filters().is_empty());
        assert!(dto("transactionType=refund").filters().is_empty());
        assert!(dto("transactionType=&origin=").filters().is_empty());
    }

    #[test]
    fn malformed_pagination_falls_back() {
        let dto = dto("page=abc&pageSize=-4");

        assert_eq!(dto.pagination(), Pagination::default());
    }

    #[test]
    fn repeated_parameters_keep_the_first_value() {
        let dto = dto("page=2&page=7&origin=mobile-ios&origin=desktop-web&pageSize=3&pageSize=x");

        assert_eq!(dto.pagination(), Pagination { page: 2, page_size: 3 });
        assert_eq!(
            dto.filters().options(),
            &[FilterOption::Origin("mobile-ios".to_string())]
        );
    }

    #[test]
    fn missing_query_is_empty() {
        assert_eq!(
            GetTransactionsFilterDto::from_query(None),
            GetTransactionsFilterDto::default()
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dto = dto("sort=amount&limit=3&page=4");

        assert_eq!(dto.pagination(), Pagination { page: 4, page_size: 10 });
        assert!(dto.filters().is_empty());
    }
}
