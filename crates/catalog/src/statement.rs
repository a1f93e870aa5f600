use serde::Serialize;
use std::{fmt, str::FromStr};

/// The four phases a warehouse statement can belong to, in the order the
/// pipeline runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    Drop,
    Create,
    Copy,
    Insert,
}

impl StatementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Drop => "drop",
            StatementKind::Create => "create",
            StatementKind::Copy => "copy",
            StatementKind::Insert => "insert",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "drop" | "drops" => Ok(StatementKind::Drop),
            "create" | "creates" => Ok(StatementKind::Create),
            "copy" | "copies" | "load" => Ok(StatementKind::Copy),
            "insert" | "inserts" | "transform" => Ok(StatementKind::Insert),
            other => Err(format!("Unknown statement group: {other}")),
        }
    }
}

/// A single named SQL statement ready to be sent to the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub name: String,
    pub kind: StatementKind,
    pub sql: String,
}

impl Statement {
    pub fn new(name: impl Into<String>, kind: StatementKind, sql: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            sql: sql.into(),
        }
    }

    /// True when the statement body is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.sql.trim().is_empty()
    }
}

/// The ordered statement lists for one full pipeline run.
///
/// Order within each list is significant: drops run children before
/// parents and inserts populate the fact table before its dimensions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatementSet {
    pub drops: Vec<Statement>,
    pub creates: Vec<Statement>,
    pub copies: Vec<Statement>,
    pub inserts: Vec<Statement>,
}

impl StatementSet {
    pub fn group(&self, kind: StatementKind) -> &[Statement] {
        match kind {
            StatementKind::Drop => &self.drops,
            StatementKind::Create => &self.creates,
            StatementKind::Copy => &self.copies,
            StatementKind::Insert => &self.inserts,
        }
    }

    pub fn len(&self) -> usize {
        self.drops.len() + self.creates.len() + self.copies.len() + self.inserts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [
            StatementKind::Drop,
            StatementKind::Create,
            StatementKind::Copy,
            StatementKind::Insert,
        ] {
            assert_eq!(kind.as_str().parse::<StatementKind>(), Ok(kind));
        }
    }

    #[test]
    fn kind_accepts_group_aliases() {
        assert_eq!("copies".parse::<StatementKind>(), Ok(StatementKind::Copy));
        assert_eq!("load".parse::<StatementKind>(), Ok(StatementKind::Copy));
        assert_eq!(
            "transform".parse::<StatementKind>(),
            Ok(StatementKind::Insert)
        );
        assert!("vacuum".parse::<StatementKind>().is_err());
    }

    #[test]
    fn blank_detection_ignores_whitespace() {
        let blank = Statement::new("noop", StatementKind::Insert, "  \n\t ");
        let real = Statement::new("users", StatementKind::Insert, "INSERT INTO users ...");
        assert!(blank.is_blank());
        assert!(!real.is_blank());
    }

    #[test]
    fn group_returns_matching_list() {
        let set = StatementSet {
            drops: vec![Statement::new("users", StatementKind::Drop, "DROP TABLE users;")],
            ..Default::default()
        };
        assert_eq!(set.group(StatementKind::Drop).len(), 1);
        assert!(set.group(StatementKind::Insert).is_empty());
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }
}
