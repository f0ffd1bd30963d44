/// Wire-shaped full-replacement update. `id` stays a string until the
/// handler decides between "missing" (validation error) and "unparseable"
/// (matches nothing, silent no-op).
#[derive(Debug, Clone, Default)]
pub struct UpdateEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub category: Option<String>,
}
