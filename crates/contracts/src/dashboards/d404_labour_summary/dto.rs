use super::level::Level;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One aggregate row of any level, built once from the level's wire DTO
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateItem {
    pub level: Level,
    /// Opaque identifier, used as the parent key of the next fetch
    pub id: String,
    pub name: String,
    /// Server-computed total, displayed as-is
    pub total_count: f64,
}

/// An item pinned in the navigation path
pub type Selection = AggregateItem;

impl AggregateItem {
    pub fn new(level: Level, id: impl Into<String>, name: impl Into<String>, total_count: f64) -> Self {
        Self {
            level,
            id: id.into(),
            name: name.into(),
            total_count,
        }
    }
}

/// Ids come as numbers from some endpoints and as strings from others
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireId {
        Int(i64),
        Text(String),
    }

    Ok(match WireId::deserialize(deserializer)? {
        WireId::Int(v) => v.to_string(),
        WireId::Text(v) => v,
    })
}

/// Missing keys and explicit `null` both fall back to the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Level 0 row: `GET /summary`
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSummaryDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub project_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: f64,
}

/// Level 1 row: `GET /summary/h1`
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySummaryDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub category_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: f64,
}

/// Level 2 row: `GET /summary/h2`
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentSummaryDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub department_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: f64,
}

/// Level 3 row: `GET /summary/h3`
#[derive(Debug, Clone, Deserialize)]
pub struct PersonSummaryDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub person_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub person_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: f64,
}

/// Level 4 row: `GET /summary/h4`
#[derive(Debug, Clone, Deserialize)]
pub struct SkillTypeSummaryDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub skill_type_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skill_type_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: f64,
}

/// Level 5 row: `GET /summary/h5`
#[derive(Debug, Clone, Deserialize)]
pub struct SkillSummaryDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub skill_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skill_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: f64,
}

impl From<ProjectSummaryDto> for AggregateItem {
    fn from(dto: ProjectSummaryDto) -> Self {
        AggregateItem::new(Level::Project, dto.project_id, dto.name, dto.total_count)
    }
}

impl From<CategorySummaryDto> for AggregateItem {
    fn from(dto: CategorySummaryDto) -> Self {
        AggregateItem::new(Level::Category, dto.category_id, dto.category_name, dto.total_count)
    }
}

impl From<DepartmentSummaryDto> for AggregateItem {
    fn from(dto: DepartmentSummaryDto) -> Self {
        AggregateItem::new(
            Level::Department,
            dto.department_id,
            dto.department_name,
            dto.total_count,
        )
    }
}

impl From<PersonSummaryDto> for AggregateItem {
    fn from(dto: PersonSummaryDto) -> Self {
        AggregateItem::new(Level::Person, dto.person_id, dto.person_name, dto.total_count)
    }
}

impl From<SkillTypeSummaryDto> for AggregateItem {
    fn from(dto: SkillTypeSummaryDto) -> Self {
        AggregateItem::new(
            Level::SkillType,
            dto.skill_type_id,
            dto.skill_type_name,
            dto.total_count,
        )
    }
}

impl From<SkillSummaryDto> for AggregateItem {
    fn from(dto: SkillSummaryDto) -> Self {
        AggregateItem::new(Level::Skill, dto.skill_id, dto.skill_name, dto.total_count)
    }
}

fn into_items<T>(rows: Value) -> Result<Vec<AggregateItem>, serde_json::Error>
where
    T: for<'de> Deserialize<'de> + Into<AggregateItem>,
{
    let rows: Vec<T> = serde_json::from_value(rows)?;
    Ok(rows.into_iter().map(Into::into).collect())
}

/// Item array of a response body; wrapped levels are unwrapped by [`Level::response_key`]
fn level_rows(level: Level, body: &str) -> Result<Value, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    let Some(key) = level.response_key() else {
        return Ok(value);
    };
    let mut wrapper: serde_json::Map<String, Value> = serde_json::from_value(value)?;
    Ok(match wrapper.remove(key) {
        Some(Value::Null) | None => Value::Array(Vec::new()),
        Some(rows) => rows,
    })
}

/// Decode a response body of `level` into tagged items
pub fn decode_level_items(level: Level, body: &str) -> Result<Vec<AggregateItem>, serde_json::Error> {
    let rows = level_rows(level, body)?;
    match level {
        Level::Project => into_items::<ProjectSummaryDto>(rows),
        Level::Category => into_items::<CategorySummaryDto>(rows),
        Level::Department => into_items::<DepartmentSummaryDto>(rows),
        Level::Person => into_items::<PersonSummaryDto>(rows),
        Level::SkillType => into_items::<SkillTypeSummaryDto>(rows),
        Level::Skill => into_items::<SkillSummaryDto>(rows),
    }
}
