//! Builder Engine - The combinator set behind every result builder.
//!
//! A result builder reduces a run of statements into one [`Component`] and
//! then finalizes it exactly once. Six operations cover every statement shape:
//!
//! - [`ResultBuilder::build_block`] - a sequence of statements
//! - [`BuildExpression::build_expression`] - a single leaf
//! - [`ResultBuilder::build_optional`] - `if` without `else`, `if let`
//! - [`ResultBuilder::build_either_first`] / [`ResultBuilder::build_either_second`] - the two arms of `if`/`else`
//! - [`ResultBuilder::build_array`] - one component per `for` iteration
//! - [`ResultBuilder::build_final_result`] - the outermost block only
//!
//! Callers rarely invoke these by hand. The [`compose!`](crate::compose) macro
//! compiles ordinary control flow into them at the call site, and
//! [`Statement`] is the same reduction over a tree built at runtime.
//!
//! # Pattern: One Engine, Many Instantiations
//!
//! Every combinator except the leaf rule and finalize has a default body
//! written against [`Component`], so an instantiation is a leaf constraint,
//! a one-line normalization and a finalize step:
//!
//! ```ignore
//! struct Lines;
//!
//! impl ResultBuilder for Lines {
//!     type Component = Vec<String>;
//!     type FinalResult = String;
//!
//!     fn build_final_result(&self, component: Vec<String>) -> String {
//!         component.join("\n")
//!     }
//! }
//!
//! impl<E: std::fmt::Display> BuildExpression<E> for Lines {
//!     fn build_expression(&self, expression: E) -> Vec<String> {
//!         vec![expression.to_string()]
//!     }
//! }
//! ```

mod component;
mod compose;
mod tree;

pub use component::{concat, Component};
pub use tree::Statement;

/// The combinator set of a result builder.
///
/// Combinators take `&self` so that finalize can read caller-supplied
/// configuration (stack axis, spacing, ...). They never mutate it.
pub trait ResultBuilder {
    /// Intermediate container accumulated during reduction.
    type Component: Component;
    /// What the outermost block hands back to the caller.
    type FinalResult;

    /// Concatenate the components of a statement sequence in source order.
    fn build_block(&self, components: Vec<Self::Component>) -> Self::Component {
        concat(components)
    }

    /// Pass a present component through; an absent one is empty.
    fn build_optional(&self, component: Option<Self::Component>) -> Self::Component {
        component.unwrap_or_default()
    }

    /// Route the taken `if` arm.
    fn build_either_first(&self, component: Self::Component) -> Self::Component {
        component
    }

    /// Route the taken `else` arm.
    fn build_either_second(&self, component: Self::Component) -> Self::Component {
        component
    }

    /// Concatenate per-iteration components in iteration order.
    fn build_array(&self, components: Vec<Self::Component>) -> Self::Component {
        concat(components)
    }

    /// Turn the fully assembled top-level component into the final result.
    fn build_final_result(&self, component: Self::Component) -> Self::FinalResult;
}

/// Leaf normalization: which expressions a builder accepts, and how.
///
/// Implemented per leaf type, so the set of describable leaves is decided by
/// each instantiation's impls rather than a fixed list.
pub trait BuildExpression<E>: ResultBuilder {
    /// Normalize one leaf into a (usually singleton) component.
    fn build_expression(&self, expression: E) -> Self::Component;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builder that records leaves verbatim and counts units on finalize.
    struct Tally;

    impl ResultBuilder for Tally {
        type Component = Vec<u32>;
        type FinalResult = (usize, Vec<u32>);

        fn build_final_result(&self, component: Vec<u32>) -> Self::FinalResult {
            (component.unit_count(), component)
        }
    }

    impl BuildExpression<u32> for Tally {
        fn build_expression(&self, expression: u32) -> Vec<u32> {
            vec![expression]
        }
    }

    #[test]
    fn test_default_block_flattens() {
        let b = Tally;
        let block = b.build_block(vec![
            b.build_expression(1),
            b.build_block(vec![b.build_expression(2), b.build_expression(3)]),
        ]);
        assert_eq!(block, vec![1, 2, 3]);
    }

    #[test]
    fn test_default_optional_absent_is_empty() {
        let b = Tally;
        assert!(b.build_optional(None).is_empty());
        assert_eq!(b.build_optional(Some(vec![7])), vec![7]);
    }

    #[test]
    fn test_default_either_is_identity() {
        let b = Tally;
        assert_eq!(b.build_either_first(vec![1, 2]), vec![1, 2]);
        assert_eq!(b.build_either_second(vec![3]), vec![3]);
    }

    #[test]
    fn test_default_array_matches_block() {
        let b = Tally;
        let parts = || vec![vec![1], vec![], vec![2, 3]];
        assert_eq!(b.build_array(parts()), b.build_block(parts()));
    }

    #[test]
    fn test_finalize_sees_whole_component() {
        let b = Tally;
        let component = b.build_block(vec![b.build_expression(4), b.build_expression(4)]);
        assert_eq!(b.build_final_result(component), (2, vec![4, 4]));
    }
}
