/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;

    /// Case-insensitive name comparison used for uniqueness checks.
    fn same_name(&self, candidate: &str) -> bool {
        normalize_name(self.name()) == normalize_name(candidate)
    }
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
