/// One restaurant licensing entry as returned by the feed.
///
/// Date fields, when non-empty, hold exactly 8 ASCII digits (`YYYYMMDD`),
/// so lexicographic comparison is chronological comparison. Records are
/// immutable once constructed: the pipeline selects or discards them,
/// never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PermitRecord {
    /// Business registration identifier; may be empty.
    pub license_id: String,
    /// Business type label, e.g. "일반음식점".
    pub category: String,
    pub business_name: String,
    pub owner_name: String,
    pub phone: String,
    /// Permit date (`YYYYMMDD`); empty if unknown.
    pub permit_date: String,
    /// Last change date (`YYYYMMDD`); empty if unknown.
    pub last_changed_date: String,
    /// Address; the deduplication key.
    pub address: String,
}

impl PermitRecord {
    /// The date used for range filtering: the last change date if present,
    /// otherwise the permit date. May be empty when neither is known.
    pub fn effective_date(&self) -> &str {
        if !self.last_changed_date.is_empty() {
            &self.last_changed_date
        } else {
            &self.permit_date
        }
    }
}
