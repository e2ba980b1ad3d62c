use std::borrow::Cow;

use sqlx::{error::DatabaseError, postgres::PgDatabaseError};

#[non_exhaustive]
pub struct SqlStateCodes;

impl SqlStateCodes {
    pub const UNIQUE_VIOLATION: &str = "23505";
}

pub fn get_code_from_db_err(db_err: &dyn DatabaseError) -> Option<String> {
    match db_err.code() {
        Some(code) => match code {
            Cow::Borrowed(val) => Some(val.to_owned()),
            Cow::Owned(val) => Some(val),
        },
        None => None,
    }
}

/// Postgres puts the offending key in DETAIL, e.g.
/// `Key (id)=(...) already exists.`. Falls back to the primary message.
pub fn get_detail_from_db_err(db_err: &dyn DatabaseError) -> String {
    match db_err.try_downcast_ref::<PgDatabaseError>() {
        Some(pg_err) => match pg_err.detail() {
            Some(detail) => detail.to_string(),
            None => pg_err.message().to_string(),
        },
        None => db_err.message().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error, fmt};

    use super::*;

    /// A driver error that is not Postgres' and carries no DETAIL.
    #[derive(Debug)]
    struct OtherDatabaseError {
        code: Option<&'static str>,
    }

    impl fmt::Display for OtherDatabaseError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("duplicate key value violates unique constraint")
        }
    }

    impl Error for OtherDatabaseError {}

    impl DatabaseError for OtherDatabaseError {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.code.map(Cow::Borrowed)
        }

        fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn Error + Send + Sync + 'static> {
            self
        }
    }

    #[test]
    fn reads_the_sqlstate_code() {
        let err = OtherDatabaseError {
            code: Some(SqlStateCodes::UNIQUE_VIOLATION),
        };

        assert_eq!(
            get_code_from_db_err(&err).as_deref(),
            Some(SqlStateCodes::UNIQUE_VIOLATION)
        );
        assert_eq!(get_code_from_db_err(&OtherDatabaseError { code: None }), None);
    }

    #[test]
    fn detail_falls_back_to_the_message_for_other_drivers() {
        let err = OtherDatabaseError {
            code: Some(SqlStateCodes::UNIQUE_VIOLATION),
        };

        assert_eq!(
            get_detail_from_db_err(&err),
            "duplicate key value violates unique constraint"
        );
    }
}
