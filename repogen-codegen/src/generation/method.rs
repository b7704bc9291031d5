//! Per-method builder and the customizer chain.

use eyre::Result;
use repogen_model::MethodDescriptor;

use crate::builder::{FunctionSpec, Modifier};
use crate::generation::fields::SharedFieldRegistry;
use crate::generation::fragments::CodeFragmentFactory;
use crate::generation::signature::MethodSignatureModel;

/// A pluggable unit that mutates a method's generation model and its
/// in-progress declaration.
///
/// Customizers run in registration order over the `(model, spec)` pair. A
/// failing customizer aborts the whole method build; its error propagates
/// unmodified.
pub trait MethodCustomizer {
    /// Apply this customizer.
    fn customize(&self, model: &mut MethodSignatureModel, method: &mut FunctionSpec)
    -> Result<()>;
}

/// Assembles one generated method declaration from its accumulated model.
///
/// The parameter list and return type are snapshotted into the spec before
/// the customizer chain runs; customizers contribute body fragments and
/// class-level fields, not signature changes.
pub struct MethodBuilder {
    model: MethodSignatureModel,
    fragments: CodeFragmentFactory,
    customizers: Vec<Box<dyn MethodCustomizer>>,
}

impl MethodBuilder {
    /// Create a builder for one method, bound to its type's shared registry.
    pub fn new(method: MethodDescriptor, registry: SharedFieldRegistry) -> Self {
        Self::from_model(MethodSignatureModel::new(method, registry))
    }

    /// Create a builder around a preconfigured model.
    pub fn from_model(model: MethodSignatureModel) -> Self {
        let fragments =
            CodeFragmentFactory::new(model.registry().clone(), model.type_oracle().clone());
        Self {
            model,
            fragments,
            customizers: Vec::new(),
        }
    }

    /// The method's generation model.
    pub fn model(&self) -> &MethodSignatureModel {
        &self.model
    }

    /// Mutable access to the generation model, for pre-build resolution
    /// steps (parameter registration, return-type rewriting).
    pub fn model_mut(&mut self) -> &mut MethodSignatureModel {
        &mut self.model
    }

    /// The fragment factory bound to this method's registry.
    pub fn fragments(&self) -> &CodeFragmentFactory {
        &self.fragments
    }

    /// Append a customizer to the chain.
    pub fn customize(&mut self, customizer: impl MethodCustomizer + 'static) -> &mut Self {
        self.customizers.push(Box::new(customizer));
        self
    }

    /// Finalize the method declaration from the accumulated state.
    pub fn build(self) -> Result<FunctionSpec> {
        let Self {
            mut model,
            fragments: _,
            customizers,
        } = self;

        let parameter_list = model
            .parameters()
            .values()
            .map(|param| param.ty.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let mut spec = FunctionSpec::new(model.method().name())
            .modifier(Modifier::Public)
            .doc(format!(
                "Generated implementation of `{}::{}({})`.",
                model.method().declaring_type(),
                model.method().name(),
                parameter_list
            ))
            .params(model.parameters().values().cloned());
        if !model.returns_void() {
            if let Some(ty) = model.return_type() {
                spec = spec.returns(ty.clone());
            }
        }

        for customizer in &customizers {
            customizer.customize(&mut model, &mut spec)?;
        }
        Ok(spec)
    }
}
