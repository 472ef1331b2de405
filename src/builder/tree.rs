//! Statement trees - Builder input assembled at runtime.
//!
//! [`compose!`](crate::compose) covers control flow known at compile time.
//! When the shape of the content is data-driven (loaded from a file, produced
//! by another program), build a [`Statement`] tree instead and fold it with
//! [`Statement::reduce`]. The fold calls exactly the same combinators the
//! macro does, so both paths produce identical components.

use super::BuildExpression;

/// One node of a builder statement tree.
///
/// Branch nodes record the arm that was already taken: `First` and `Second`
/// hold only the chosen arm, `Optional(None)` is an untaken `if`.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<E> {
    /// A single leaf.
    Expression(E),
    /// Statements in source order (a nested builder block).
    Block(Vec<Statement<E>>),
    /// The taken `if` arm of an `if`/`else`.
    First(Box<Statement<E>>),
    /// The taken `else` arm of an `if`/`else`.
    Second(Box<Statement<E>>),
    /// An `if` without `else`, or an `if let` that may not bind.
    Optional(Option<Box<Statement<E>>>),
    /// One statement per loop iteration, in iteration order.
    Array(Vec<Statement<E>>),
}

impl<E> Statement<E> {
    /// Wrap a leaf.
    pub fn leaf(expression: E) -> Self {
        Self::Expression(expression)
    }

    /// Statement sequence.
    pub fn block(statements: impl IntoIterator<Item = Statement<E>>) -> Self {
        Self::Block(statements.into_iter().collect())
    }

    /// `if condition { then } else { otherwise }`.
    ///
    /// Only the taken arm is evaluated.
    pub fn branch(
        condition: bool,
        then: impl FnOnce() -> Statement<E>,
        otherwise: impl FnOnce() -> Statement<E>,
    ) -> Self {
        if condition {
            Self::First(Box::new(then()))
        } else {
            Self::Second(Box::new(otherwise()))
        }
    }

    /// `if condition { then }`.
    pub fn when(condition: bool, then: impl FnOnce() -> Statement<E>) -> Self {
        Self::Optional(condition.then(|| Box::new(then())))
    }

    /// `if let Some(value) = value { then(value) }`.
    pub fn if_let<T>(value: Option<T>, then: impl FnOnce(T) -> Statement<E>) -> Self {
        Self::Optional(value.map(|v| Box::new(then(v))))
    }

    /// `for item in items { body(item) }`.
    pub fn each<I, F>(items: I, body: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Statement<E>,
    {
        Self::Array(items.into_iter().map(body).collect())
    }

    /// Number of leaves this tree visits.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Expression(_) => 1,
            Self::Block(children) | Self::Array(children) => {
                children.iter().map(Statement::leaf_count).sum()
            }
            Self::First(arm) | Self::Second(arm) => arm.leaf_count(),
            Self::Optional(arm) => arm.as_ref().map_or(0, |arm| arm.leaf_count()),
        }
    }

    /// Convert every leaf, keeping the shape and the branch decisions.
    ///
    /// Lets one tree drive builders with different leaf types.
    pub fn map_leaves<T, F>(self, mut f: F) -> Statement<T>
    where
        F: FnMut(E) -> T,
    {
        self.map_with(&mut f)
    }

    fn map_with<T, F>(self, f: &mut F) -> Statement<T>
    where
        F: FnMut(E) -> T,
    {
        match self {
            Self::Expression(expression) => Statement::Expression(f(expression)),
            Self::Block(children) => {
                Statement::Block(children.into_iter().map(|c| c.map_with(f)).collect())
            }
            Self::Array(children) => {
                Statement::Array(children.into_iter().map(|c| c.map_with(f)).collect())
            }
            Self::First(arm) => Statement::First(Box::new(arm.map_with(f))),
            Self::Second(arm) => Statement::Second(Box::new(arm.map_with(f))),
            Self::Optional(arm) => Statement::Optional(arm.map(|arm| Box::new(arm.map_with(f)))),
        }
    }

    /// Fold the tree into a component without finalizing.
    ///
    /// Use this for sub-trees whose component feeds a parent block.
    pub fn reduce<B>(self, builder: &B) -> B::Component
    where
        B: BuildExpression<E>,
    {
        match self {
            Self::Expression(expression) => builder.build_expression(expression),
            Self::Block(children) => {
                let parts = children.into_iter().map(|c| c.reduce(builder)).collect();
                builder.build_block(parts)
            }
            Self::First(arm) => {
                let component = arm.reduce(builder);
                builder.build_either_first(component)
            }
            Self::Second(arm) => {
                let component = arm.reduce(builder);
                builder.build_either_second(component)
            }
            Self::Optional(arm) => {
                let component = arm.map(|arm| arm.reduce(builder));
                builder.build_optional(component)
            }
            Self::Array(iterations) => {
                let parts = iterations.into_iter().map(|c| c.reduce(builder)).collect();
                builder.build_array(parts)
            }
        }
    }

    /// Fold the tree and finalize it. Call only on the outermost tree.
    pub fn build<B>(self, builder: &B) -> B::FinalResult
    where
        B: BuildExpression<E>,
    {
        let component = self.reduce(builder);
        builder.build_final_result(component)
    }
}

impl<E> From<E> for Statement<E> {
    fn from(expression: E) -> Self {
        Self::Expression(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{LineBreak, Space, TextBuilder};
    use std::fmt::Display;

    type Text = Statement<Box<dyn Display>>;

    fn leaf(value: impl Display + 'static) -> Text {
        let boxed: Box<dyn Display> = Box::new(value);
        Statement::leaf(boxed)
    }

    #[test]
    fn test_reduce_block_preserves_order() {
        let tree = Statement::block(["a", "b", "c"].map(Statement::leaf));
        assert_eq!(tree.reduce(&TextBuilder), "abc");
    }

    #[test]
    fn test_branch_takes_only_one_arm() {
        for flag in [true, false] {
            let tree: Statement<&str> =
                Statement::branch(flag, || Statement::leaf("then"), || Statement::leaf("else"));
            let expected = if flag { "then" } else { "else" };
            assert_eq!(tree.reduce(&TextBuilder), expected, "condition = {flag}");
        }
    }

    #[test]
    fn test_untaken_branch_is_never_built() {
        let tree: Statement<&str> = Statement::branch(
            true,
            || Statement::leaf("taken"),
            || panic!("else arm must not be evaluated"),
        );
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn test_optional_absent_contributes_nothing() {
        let tree = Statement::block([
            Statement::leaf("x"),
            Statement::when(false, || Statement::leaf("hidden")),
            Statement::if_let(None::<u8>, |_| Statement::leaf("never")),
            Statement::leaf("y"),
        ]);
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.reduce(&TextBuilder), "xy");
    }

    #[test]
    fn test_each_flattens_iterations() {
        let tree: Text = Statement::each(1..=3, |n| Statement::block([leaf(n), leaf(Space)]));
        assert_eq!(tree.reduce(&TextBuilder), "1 2 3 ");
    }

    #[test]
    fn test_each_over_nothing_is_empty() {
        let tree: Statement<&str> = Statement::each(Vec::<&str>::new(), Statement::leaf);
        assert_eq!(tree.leaf_count(), 0);
        assert_eq!(tree.build(&TextBuilder).as_str(), "");
    }

    #[test]
    fn test_map_leaves_keeps_branch_decisions() {
        let tree: Statement<u32> = Statement::block([
            Statement::leaf(1),
            Statement::branch(false, || Statement::leaf(2), || Statement::leaf(3)),
            Statement::when(false, || Statement::leaf(4)),
        ]);
        let doubled = tree.map_leaves(|n| n * 2);
        assert_eq!(doubled.leaf_count(), 2);
        assert_eq!(doubled.reduce(&TextBuilder), "26");
    }

    #[test]
    fn test_build_mixed_leaves() {
        let odd = true;
        let tree = Statement::block([
            leaf("hello"),
            leaf(Space),
            leaf(42),
            leaf(LineBreak),
            Statement::branch(odd, || leaf("odd:"), || leaf("even:")),
            leaf(Space),
            leaf(false),
            leaf(LineBreak),
        ]);
        assert_eq!(tree.build(&TextBuilder).as_str(), "hello 42\nodd: false\n");
    }
}
