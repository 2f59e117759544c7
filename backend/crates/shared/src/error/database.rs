//! PostgreSQL constraint failures that callers turn into client errors.

/// Integrity constraint a write tripped over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// SQLSTATE 23505
    Unique,
    /// SQLSTATE 23503
    ForeignKey,
}

impl Constraint {
    fn from_sql_state(code: &str) -> Option<Self> {
        match code {
            "23505" => Some(Constraint::Unique),
            "23503" => Some(Constraint::ForeignKey),
            _ => None,
        }
    }
}

/// The constraint behind a database error, if that is what failed.
pub fn violated_constraint(err: &sqlx::Error) -> Option<Constraint> {
    match err {
        sqlx::Error::Database(db_err) => Constraint::from_sql_state(db_err.code()?.as_ref()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sql_states() {
        assert_eq!(Constraint::from_sql_state("23505"), Some(Constraint::Unique));
        assert_eq!(
            Constraint::from_sql_state("23503"),
            Some(Constraint::ForeignKey)
        );
        assert_eq!(Constraint::from_sql_state("23502"), None);
    }

    #[test]
    fn non_database_errors_have_no_constraint() {
        assert_eq!(violated_constraint(&sqlx::Error::RowNotFound), None);
        assert_eq!(violated_constraint(&sqlx::Error::PoolTimedOut), None);
    }
}
