use super::dto::Selection;
use super::error::NavigationError;
use super::filter::DateFilter;
use super::level::Level;

/// Parameters of one level fetch: the level, its ancestor chain and the date filter
#[derive(Debug, Clone, PartialEq)]
pub struct LevelQuery {
    level: Level,
    parents: Vec<Selection>,
    filter: DateFilter,
}

impl LevelQuery {
    /// `parents` must be exactly the ancestors of `level`, in level order
    pub fn new(
        level: Level,
        parents: Vec<Selection>,
        filter: DateFilter,
    ) -> Result<Self, NavigationError> {
        let chain_ok = parents.len() == level.index()
            && parents
                .iter()
                .enumerate()
                .all(|(i, sel)| sel.level.index() == i);
        if !chain_ok {
            return Err(NavigationError::ParentChainMismatch {
                level,
                expected: level.index(),
                actual: parents.len(),
            });
        }
        Ok(Self {
            level,
            parents,
            filter,
        })
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn path(&self) -> String {
        self.level.endpoint()
    }

    /// Immediate parent id, then project id (unless the parent is the project), then the filter
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(parent) = self.parents.last() {
            pairs.push((parent.level.id_param(), parent.id.clone()));
            if parent.level != Level::Project {
                if let Some(project) = self.parents.first() {
                    pairs.push((Level::Project.id_param(), project.id.clone()));
                }
            }
        }
        pairs.extend(self.filter.query_pairs());
        pairs
    }

    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Path with query string, relative to the dashboard API base
    pub fn relative_url(&self) -> String {
        format!("{}?{}", self.path(), self.query_string())
    }
}
