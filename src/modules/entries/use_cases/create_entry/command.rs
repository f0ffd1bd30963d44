/// Wire-shaped create request. Presence is validated in the handler so the
/// missing-field message matches the contract exactly.
#[derive(Debug, Clone, Default)]
pub struct CreateEntry {
    pub name: Option<String>,
    pub notes: Option<String>,
    pub category: Option<String>,
}
