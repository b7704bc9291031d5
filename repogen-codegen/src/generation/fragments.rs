//! Reusable code fragments over registry-resident fields.

use std::rc::Rc;

use crate::builder::CodeFragment;
use crate::error::{Error, Result};
use crate::generation::fields::SharedFieldRegistry;
use crate::oracle::{FrameworkType, TypeOracle};

/// Factory for boilerplate fragments shared by customizers.
///
/// Every produced fragment is a pure function of the current registry state;
/// the factory holds no state of its own and never registers fields. New
/// guarded/boilerplate fragment kinds belong here so customizers cannot
/// drift apart on guard conditions.
#[derive(Debug, Clone)]
pub struct CodeFragmentFactory {
    registry: SharedFieldRegistry,
    types: Rc<dyn TypeOracle>,
}

impl CodeFragmentFactory {
    /// Create a factory over the given registry and type oracle.
    pub fn new(registry: SharedFieldRegistry, types: Rc<dyn TypeOracle>) -> Self {
        Self { registry, types }
    }

    /// A debug-level guarded-logging fragment.
    ///
    /// Fails with [`Error::MissingLoggerField`] unless a logger-typed field
    /// is already registered — registering it is the caller's job.
    pub fn log_debug(&self, message: &str) -> Result<CodeFragment> {
        self.log_guarded("debug", message)
    }

    fn log_guarded(&self, level: &str, message: &str) -> Result<CodeFragment> {
        let logger_type = self.types.marker(FrameworkType::Logger);
        let registry = self.registry.borrow();
        let logger = registry
            .field_name_of(logger_type)
            .ok_or_else(|| Error::MissingLoggerField {
                ty: logger_type.clone(),
            })?;

        Ok(CodeFragment::block(
            format!("if {logger}.is_{level}_enabled() {{"),
            vec![CodeFragment::line(format!("{logger}.{level}({message:?});"))],
            Some("}".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use repogen_model::TypeName;

    use super::*;
    use crate::builder::{Indent, Modifier};
    use crate::generation::fields::TargetTypeFieldRegistry;
    use crate::oracle::StandardTypeOracle;

    fn factory_over(registry: SharedFieldRegistry) -> CodeFragmentFactory {
        CodeFragmentFactory::new(registry, Rc::new(StandardTypeOracle::new()))
    }

    #[test]
    fn test_log_debug_gates_on_the_registered_logger() {
        let registry = TargetTypeFieldRegistry::new().shared();
        registry
            .borrow_mut()
            .add_field(
                "log",
                TypeName::named("Logger"),
                [Modifier::Private, Modifier::Final],
            )
            .unwrap();

        let fragment = factory_over(registry).log_debug("hello").unwrap();
        assert_eq!(
            fragment.render(Indent::default()),
            "if log.is_debug_enabled() {\n    log.debug(\"hello\");\n}\n"
        );
    }

    #[test]
    fn test_log_debug_without_a_logger_field_fails() {
        let registry = TargetTypeFieldRegistry::new().shared();

        let err = factory_over(registry).log_debug("hello").unwrap_err();
        assert!(matches!(err, Error::MissingLoggerField { .. }));
    }

    #[test]
    fn test_fragments_reflect_current_registry_state() {
        let registry = TargetTypeFieldRegistry::new().shared();
        let factory = factory_over(registry.clone());
        assert!(factory.log_debug("first").is_err());

        registry
            .borrow_mut()
            .add_field("logger", TypeName::named("Logger"), [Modifier::Private])
            .unwrap();

        let fragment = factory.log_debug("second").unwrap();
        let rendered = fragment.render(Indent::default());
        assert!(rendered.contains("logger.is_debug_enabled()"));
        assert!(rendered.contains("logger.debug(\"second\");"));
    }
}
