/// Hierarchy level of the labour summary drill-down
///
/// Levels are totally ordered: Project -> Category -> Department -> Person -> SkillType -> Skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Project,
    Category,
    Department,
    Person,
    SkillType,
    Skill,
}

impl Level {
    /// All levels in drill-down order
    pub const ALL: [Level; 6] = [
        Level::Project,
        Level::Category,
        Level::Department,
        Level::Person,
        Level::SkillType,
        Level::Skill,
    ];

    /// Number of levels in the hierarchy
    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        match self {
            Level::Project => 0,
            Level::Category => 1,
            Level::Department => 2,
            Level::Person => 3,
            Level::SkillType => 4,
            Level::Skill => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next level down, None for Skill
    pub fn child(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Skill is the only level without children
    pub fn is_terminal(self) -> bool {
        self.child().is_none()
    }

    /// Name of the id field in responses and of the query parameter
    /// used when this level is a parent of the next fetch
    pub fn id_param(self) -> &'static str {
        match self {
            Level::Project => "project_id",
            Level::Category => "category_id",
            Level::Department => "department_id",
            Level::Person => "person_id",
            Level::SkillType => "skill_type_id",
            Level::Skill => "skill_id",
        }
    }

    /// Endpoint path relative to the dashboard API base
    pub fn endpoint(self) -> String {
        match self {
            Level::Project => "/summary".to_string(),
            other => format!("/summary/h{}", other.index()),
        }
    }

    /// Key wrapping the item array in the response body (level 0 returns a bare array)
    pub fn response_key(self) -> Option<&'static str> {
        match self {
            Level::Project => None,
            Level::Category => Some("categories"),
            Level::Department => Some("departments"),
            Level::Person => Some("people"),
            Level::SkillType => Some("skill_types"),
            Level::Skill => Some("skills"),
        }
    }

    /// Lowercase plural used in notifications ("Failed to load departments")
    pub fn plural(self) -> &'static str {
        match self {
            Level::Project => "projects",
            Level::Category => "categories",
            Level::Department => "departments",
            Level::Person => "people",
            Level::SkillType => "skill types",
            Level::Skill => "skills",
        }
    }

    /// Header title for the list displayed at this level
    pub fn title(self) -> &'static str {
        match self {
            Level::Project => "Projects",
            Level::Category => "Categories",
            Level::Department => "Departments",
            Level::Person => "People",
            Level::SkillType => "Skill types",
            Level::Skill => "Skills",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
