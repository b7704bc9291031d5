//! Code generation building blocks.
//!
//! - [`CodeFragment`] / [`CodeBuilder`] - Composable code IR and rendering
//! - [`FunctionSpec`] / [`ParamSpec`] - Generated method declarations
//! - [`FieldSpec`] / [`Modifier`] - Generated field declarations

mod field;
mod fragment;
mod function;
mod modifier;

pub use field::FieldSpec;
pub use fragment::{CodeBuilder, CodeFragment, Indent};
pub use function::{FunctionSpec, ParamSpec};
pub use modifier::Modifier;
