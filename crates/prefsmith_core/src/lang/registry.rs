//! Shareable metadata for `prefsmith_core::lang` registries.
//!
//! ## Notes
//! - These types are lightweight and `Copy` so registries can live in `const` tables.

/// Shared metadata shape for "registry-first" vocabulary items.
///
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description`)
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

impl<Id: Copy> LangItemInfo<Id> {
    /// Return true if `spelling` is the canonical spelling or one of the aliases.
    pub fn matches(&self, spelling: &str) -> bool {
        self.canonical == spelling || self.aliases.contains(&spelling)
    }
}

/// Resolve a spelling against a registry table.
pub fn lookup<Id: Copy>(table: &[LangItemInfo<Id>], spelling: &str) -> Option<Id> {
    table.iter().find(|info| info.matches(spelling)).map(|info| info.id)
}
