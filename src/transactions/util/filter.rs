use crate::transactions::{
    enums::transaction_type::TransactionType, models::transaction_record::TransactionRecord,
};

const SELECT_TRANSACTIONS: &str =
    "SELECT id, user_id, origin, transaction_type, amount, created_at FROM transactions";

/// A single equality predicate on the `transactions` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOption {
    Origin(String),
    TransactionType(TransactionType),
}

impl FilterOption {
    pub fn column(&self) -> &'static str {
        match *self {
            Self::Origin(_) => "origin",
            Self::TransactionType(_) => "transaction_type",
        }
    }

    /// The value bound for this predicate, in its stored form.
    pub fn bind_value(&self) -> String {
        match self {
            Self::Origin(origin) => origin.to_owned(),
            Self::TransactionType(transaction_type) => transaction_type.value().to_string(),
        }
    }

    pub fn matches(&self, record: &TransactionRecord) -> bool {
        match self {
            Self::Origin(origin) => record.origin == *origin,
            Self::TransactionType(transaction_type) => {
                record.transaction_type == transaction_type.value()
            }
        }
    }
}

/// Predicates ANDed together for a listing. Each option is attached on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilters {
    options: Vec<FilterOption>,
}

impl TransactionFilters {
    /// Empty origins are ignored, they mean "no constraint".
    pub fn with(mut self, option: FilterOption) -> Self {
        match &option {
            FilterOption::Origin(origin) if origin.is_empty() => {}
            _ => self.options.push(option),
        }

        self
    }

    pub fn with_origin(self, origin: impl Into<String>) -> Self {
        self.with(FilterOption::Origin(origin.into()))
    }

    pub fn with_transaction_type(self, transaction_type: TransactionType) -> Self {
        self.with(FilterOption::TransactionType(transaction_type))
    }

    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn matches(&self, record: &TransactionRecord) -> bool {
        self.options.iter().all(|option| option.matches(record))
    }

    /// Renders the paged select. Placeholders `$1..$n` are the options in
    /// order, followed by LIMIT and OFFSET.
    pub fn to_sql(&self) -> String {
        let mut sql = SELECT_TRANSACTIONS.to_string();

        let mut index: usize = 0;

        // WHERE CLAUSES
        for option in &self.options {
            index += 1;

            if index == 1 {
                sql.push_str(" WHERE ");
            } else {
                sql.push_str(" AND ");
            }

            sql.push_str(&[option.column(), " = $", &index.to_string()].concat());
        }

        // ORDER BY
        sql.push_str(" ORDER BY created_at ASC, id ASC");

        // LIMIT / OFFSET
        sql.push_str(&[" LIMIT $", &(index + 1).to_string()].concat());
        sql.push_str(&[" OFFSET $", &(index + 2).to_string()].concat());

        tracing::debug!(%sql);

        sql
    }
}
