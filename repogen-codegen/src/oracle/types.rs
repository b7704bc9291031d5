//! Type assignability oracle.
//!
//! Return-shape classification needs to know whether a declared type is
//! assignable to one of the framework's marker abstractions. That knowledge
//! lives behind the [`TypeOracle`] trait so the generation model stays free
//! of any concrete type-system dependency and can be tested with fakes.

use std::fmt;

use indexmap::IndexMap;
use repogen_model::TypeName;

/// The framework abstractions a repository method signature is classified
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameworkType {
    /// Paged result with total-count bookkeeping.
    Page,
    /// Windowed result without a total count.
    Slice,
    /// Plain multi-valued result container.
    Collection,
    /// Possibly-absent single value.
    Optional,
    /// Sort specification parameter.
    Sort,
    /// Pagination specification parameter.
    Pageable,
    /// Result-limit specification parameter.
    Limit,
    /// Logger used by generated guarded-logging fragments.
    Logger,
}

/// Injected capability answering type questions for the generation model.
pub trait TypeOracle: fmt::Debug {
    /// The canonical marker type for a framework abstraction.
    ///
    /// Used for exact-equality lookups, e.g. recovering the name of a `Sort`
    /// parameter.
    fn marker(&self, abstraction: FrameworkType) -> &TypeName;

    /// Check whether `ty` is assignable to a framework abstraction.
    ///
    /// Implementations compare against the raw base type; argument lists
    /// never influence assignability.
    fn is_assignable(&self, abstraction: FrameworkType, ty: &TypeName) -> bool;
}

/// Default [`TypeOracle`] backed by per-abstraction marker types and
/// registered additional assignable base types.
///
/// Abstraction checks are independent: a type registered as assignable to
/// `Page` does not thereby become assignable to `Slice`. Classification
/// exclusivity rests on that.
#[derive(Debug, Clone)]
pub struct StandardTypeOracle {
    markers: IndexMap<FrameworkType, TypeName>,
    assignable: IndexMap<FrameworkType, Vec<String>>,
}

impl StandardTypeOracle {
    /// Create an oracle with the default marker table.
    pub fn new() -> Self {
        let markers = IndexMap::from([
            (FrameworkType::Page, TypeName::named("Page")),
            (FrameworkType::Slice, TypeName::named("Slice")),
            (FrameworkType::Collection, TypeName::named("Collection")),
            (FrameworkType::Optional, TypeName::named("Option")),
            (FrameworkType::Sort, TypeName::named("Sort")),
            (FrameworkType::Pageable, TypeName::named("Pageable")),
            (FrameworkType::Limit, TypeName::named("Limit")),
            (FrameworkType::Logger, TypeName::named("Logger")),
        ]);
        let assignable = IndexMap::from([(
            FrameworkType::Collection,
            vec![
                "Vec".to_string(),
                "VecDeque".to_string(),
                "HashSet".to_string(),
                "BTreeSet".to_string(),
            ],
        )]);
        Self { markers, assignable }
    }

    /// Replace the canonical marker type for an abstraction.
    pub fn with_marker(mut self, abstraction: FrameworkType, marker: TypeName) -> Self {
        self.markers.insert(abstraction, marker);
        self
    }

    /// Register an additional base type as assignable to an abstraction.
    pub fn with_assignable(
        mut self,
        abstraction: FrameworkType,
        base: impl Into<String>,
    ) -> Self {
        self.assignable.entry(abstraction).or_default().push(base.into());
        self
    }
}

impl Default for StandardTypeOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeOracle for StandardTypeOracle {
    fn marker(&self, abstraction: FrameworkType) -> &TypeName {
        self.markers
            .get(&abstraction)
            .expect("marker table covers every framework abstraction")
    }

    fn is_assignable(&self, abstraction: FrameworkType, ty: &TypeName) -> bool {
        let Some(base) = ty.base() else {
            return false;
        };
        if self.marker(abstraction).base() == Some(base) {
            return true;
        }
        self.assignable
            .get(&abstraction)
            .is_some_and(|extra| extra.iter().any(|known| known == base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_assignability_ignores_arguments() {
        let oracle = StandardTypeOracle::new();
        let page_of_user = TypeName::parameterized("Page", vec![TypeName::named("User")]);

        assert!(oracle.is_assignable(FrameworkType::Page, &page_of_user));
        assert!(oracle.is_assignable(FrameworkType::Page, &TypeName::named("Page")));
        assert!(!oracle.is_assignable(FrameworkType::Slice, &page_of_user));
    }

    #[test]
    fn test_collection_containers_are_registered_by_default() {
        let oracle = StandardTypeOracle::new();
        let vec_of_user = TypeName::parameterized("Vec", vec![TypeName::named("User")]);

        assert!(oracle.is_assignable(FrameworkType::Collection, &vec_of_user));
        assert!(oracle.is_assignable(FrameworkType::Collection, &TypeName::named("HashSet")));
        assert!(!oracle.is_assignable(FrameworkType::Collection, &TypeName::named("User")));
    }

    #[test]
    fn test_unit_and_variables_are_never_assignable() {
        let oracle = StandardTypeOracle::new();

        assert!(!oracle.is_assignable(FrameworkType::Collection, &TypeName::unit()));
        assert!(!oracle.is_assignable(FrameworkType::Page, &TypeName::variable("T")));
    }

    #[test]
    fn test_registered_assignable_extends_an_abstraction() {
        let oracle = StandardTypeOracle::new()
            .with_assignable(FrameworkType::Page, "KeysetPage");

        assert!(oracle.is_assignable(FrameworkType::Page, &TypeName::named("KeysetPage")));
        assert!(!oracle.is_assignable(FrameworkType::Slice, &TypeName::named("KeysetPage")));
    }

    #[test]
    fn test_replacing_a_marker() {
        let oracle = StandardTypeOracle::new()
            .with_marker(FrameworkType::Logger, TypeName::named("log::Logger"));

        assert_eq!(
            oracle.marker(FrameworkType::Logger),
            &TypeName::named("log::Logger")
        );
    }
}
