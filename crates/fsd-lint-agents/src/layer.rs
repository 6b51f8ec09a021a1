//! Layer resolution: maps file paths and import specifiers to layers.

use fsd_lint_core::FsdRules;

/// Resolves paths and import specifiers to architecture layer names.
///
/// Resolution is substring-based and order-sensitive: the first configured
/// layer whose name appears as a path segment wins, even when a path contains
/// several segments that look like layer names.
pub struct LayerResolver {
    /// Layer names in configured order (outer first).
    layers: Vec<String>,
}

impl LayerResolver {
    /// Build a resolver from the FSD rule section.
    #[must_use]
    pub fn new(fsd: &FsdRules) -> Self {
        Self {
            layers: fsd.layers.clone(),
        }
    }

    /// Which layer does this path or import specifier belong to?
    ///
    /// A layer matches when it appears as an inner segment (`/<layer>/`) or
    /// as the leading segment (`<layer>/`).
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&str> {
        self.layers
            .iter()
            .find(|layer| {
                path.contains(&format!("/{layer}/")) || path.starts_with(&format!("{layer}/"))
            })
            .map(String::as_str)
    }

    /// The most foundational layer (last in configured order), exempt from
    /// barrel-export enforcement.
    #[must_use]
    pub fn foundational(&self) -> Option<&str> {
        self.layers.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsd_lint_core::RuleSet;

    fn make_resolver() -> LayerResolver {
        LayerResolver::new(&RuleSet::default().fsd)
    }

    #[test]
    fn resolves_inner_segment() {
        let r = make_resolver();
        assert_eq!(r.resolve("src/entities/user/model.ts"), Some("entities"));
    }

    #[test]
    fn resolves_leading_segment() {
        let r = make_resolver();
        assert_eq!(r.resolve("features/auth/ui.tsx"), Some("features"));
    }

    #[test]
    fn resolves_aliased_import() {
        let r = make_resolver();
        assert_eq!(r.resolve("@/shared/ui/button"), Some("shared"));
    }

    #[test]
    fn first_configured_layer_wins_on_overlap() {
        let r = make_resolver();
        // "pages" precedes "entities" in the configured order
        assert_eq!(r.resolve("src/pages/home/entities/list.ts"), Some("pages"));
    }

    #[test]
    fn unknown_path_returns_none() {
        let r = make_resolver();
        assert_eq!(r.resolve("src/lib/utils.ts"), None);
    }

    #[test]
    fn no_false_match_on_partial_segment() {
        let r = make_resolver();
        // "featuresx" is not the "features" segment
        assert_eq!(r.resolve("src/featuresx/auth/ui.tsx"), None);
    }

    #[test]
    fn foundational_is_last_configured() {
        let r = make_resolver();
        assert_eq!(r.foundational(), Some("shared"));
    }
}
