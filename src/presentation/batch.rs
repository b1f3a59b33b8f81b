use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Comparison operator of a people search filter
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    /// Equals
    Eq,
    /// Not equals
    Neq,
    /// Exists
    Ex,
    /// Does not exist
    Nex,
    /// Has (contains)
    Has,
    /// Does not have
    Nhas,
    /// Starts with
    Sw,
    /// Ends with
    Ew,
    /// Greater than or equal
    Gte,
    /// Lower than or equal
    Lte,
    /// Greater than
    Gt,
    /// Lower than
    Lt,
}

/// How several filters are combined
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterCombinator {
    /// All filters must match
    #[default]
    And,
    /// Any filter may match
    Or,
}

/// One people search filter
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PeopleFilter {
    /// Model the criterion applies to, e.g. `people`
    pub model: String,
    /// Field tested, e.g. `email`
    pub criterion: String,
    /// Comparison operator
    pub operator: FilterOperator,
    /// Values compared against
    pub query: Vec<String>,
}

impl PeopleFilter {
    /// Creates a filter on the `people` model
    pub fn people(criterion: &str, operator: FilterOperator, query: &[&str]) -> Self {
        Self {
            model: "people".to_string(),
            criterion: criterion.to_string(),
            operator,
            query: query.iter().map(|q| q.to_string()).collect(),
        }
    }
}

/// Search selecting people profiles
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PeopleSearch {
    /// Filters to apply
    pub filter: Vec<PeopleFilter>,
    /// How filters are combined
    pub operator: FilterCombinator,
}

/// Selection of people profiles for a batch operation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PeopleSelection {
    /// Explicit list of profile identifiers
    Profiles(Vec<String>),
    /// Every profile matching a search
    Search(PeopleSearch),
}

/// Body of conversation batch operations
#[derive(Debug, Clone, Serialize)]
pub(crate) struct BatchSessionsBody<'a> {
    pub sessions: &'a [&'a str],
}

/// Body of the people batch removal
#[derive(Debug, Clone, Serialize)]
pub(crate) struct BatchPeopleBody<'a> {
    pub people: &'a PeopleSelection,
}
