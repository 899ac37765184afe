//! Equality filters over song columns.
//!
//! Query keys are resolved against a fixed set of columns before anything
//! reaches the database, values are only ever bound as parameters.

use std::collections::BTreeMap;
use std::fmt;

use super::model::ValidationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterColumn {
    GroupName,
    Song,
    ReleaseDate,
    Lyrics,
}

impl FilterColumn {
    /// `group` is accepted as an alias of `group_name`
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "group" | "group_name" => Some(Self::GroupName),
            "song" => Some(Self::Song),
            "release_date" => Some(Self::ReleaseDate),
            "lyrics" => Some(Self::Lyrics),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GroupName => "group_name",
            Self::Song => "song",
            Self::ReleaseDate => "release_date",
            Self::Lyrics => "lyrics",
        }
    }
}

impl fmt::Display for FilterColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column equalities joined with AND. An empty predicate matches every row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Predicate(BTreeMap<FilterColumn, String>);

impl Predicate {
    /// Repeated keys keep the last value.
    pub fn compile<I, K, V>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut constraints = BTreeMap::new();

        for (key, value) in pairs {
            let key = key.as_ref();
            let column = FilterColumn::from_key(key).ok_or_else(|| {
                ValidationError::UnknownFilterKey(key.to_string())
            })?;

            constraints.insert(column, value.into());
        }

        Ok(Self(constraints))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, column: FilterColumn) -> Option<&str> {
        self.0.get(&column).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterColumn, &str)> {
        self.0.iter().map(|(column, value)| (*column, value.as_str()))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("<all>");
        }

        for (i, (column, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{column} = {value:?}")?;
        }

        Ok(())
    }
}
