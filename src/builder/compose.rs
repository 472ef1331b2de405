//! compose! - Control flow compiled into builder combinators.
//!
//! The macro walks a brace-delimited statement list and rewrites every
//! statement into a combinator call on the given builder:
//!
//! | Statement | Expands to |
//! |---|---|
//! | `expr;` | `build_expression(expr)` |
//! | `{ ... }` | nested `build_block` (never finalized) |
//! | `if c { .. }` / `if let P = e { .. }` | `build_optional(Some(..) / None)` |
//! | `if c { .. } else { .. }` | `build_either_first` / `build_either_second` |
//! | `if a { .. } else if b { .. } ...` | `else` arm holds the rest of the chain |
//! | `for p in iter { .. }` | `build_array`, one block per iteration |
//! | `let p = e;` | plain binding, contributes nothing |
//!
//! The outermost block is finalized with `build_final_result`.
//!
//! # Example
//!
//! ```
//! use spark_compose::compose;
//! use spark_compose::text::{LineBreak, Space, TextBuilder};
//!
//! let even = false;
//! let text = compose!(TextBuilder => {
//!     "hello"; Space; 42; LineBreak;
//!     if even { "even:" } else { "odd:" }
//!     Space; even; LineBreak;
//! });
//! assert_eq!(text.as_str(), "hello 42\nodd: false\n");
//! ```
//!
//! # Restrictions
//!
//! Expression statements end with `;` (the last one may omit it). Conditions
//! and loop heads are scanned up to the first top-level `{ }` group, so a
//! brace group cannot appear unparenthesized in a condition, which is the
//! same rule Rust applies to struct literals there.
//!
//! Each statement of a block costs one level of macro recursion, and each
//! token of an `if` condition or `for` head costs one more. `let p = e;`,
//! `let x: T = e;` and `let mut x: T = e;` cost one level regardless of
//! length; other `let` forms (`let .. else`, typed destructuring) are scanned
//! token by token. A single block of more than about 120 statements exceeds
//! rustc's default limit of 128. Split it into nested `{ }` blocks, which
//! concatenate identically, or raise the limit in the calling crate:
//!
//! ```ignore
//! #![recursion_limit = "256"]
//! ```

/// Compile a block of statements into builder combinator calls and finalize.
///
/// See the [module docs](crate::builder) for the combinator contract.
#[macro_export]
macro_rules! compose {
    // =========================================================================
    // Block: collect one component per statement, then concatenate
    // =========================================================================
    (@block $b:ident $($body:tt)*) => {{
        #[allow(unused_mut)]
        let mut __parts = ::std::vec::Vec::new();
        $crate::compose!(@stmts $b __parts $($body)*);
        $crate::builder::ResultBuilder::build_block($b, __parts)
    }};

    // =========================================================================
    // Statements
    //
    // `let` arms come before the expression arms so a `let` never reaches
    // the expression parser.
    // =========================================================================
    (@stmts $b:ident $parts:ident) => {};
    (@stmts $b:ident $parts:ident ; $($rest:tt)*) => {
        $crate::compose!(@stmts $b $parts $($rest)*);
    };
    (@stmts $b:ident $parts:ident let $p:pat = $e:expr ; $($rest:tt)*) => {
        let $p = $e;
        $crate::compose!(@stmts $b $parts $($rest)*);
    };
    (@stmts $b:ident $parts:ident let $p:ident : $t:ty = $e:expr ; $($rest:tt)*) => {
        let $p: $t = $e;
        $crate::compose!(@stmts $b $parts $($rest)*);
    };
    (@stmts $b:ident $parts:ident let mut $p:ident : $t:ty = $e:expr ; $($rest:tt)*) => {
        let mut $p: $t = $e;
        $crate::compose!(@stmts $b $parts $($rest)*);
    };
    (@stmts $b:ident $parts:ident let $($rest:tt)*) => {
        $crate::compose!(@let $b $parts [] $($rest)*);
    };
    (@stmts $b:ident $parts:ident if $($rest:tt)*) => {
        $crate::compose!(@split_if $b $parts [] $($rest)*);
    };
    (@stmts $b:ident $parts:ident for $($rest:tt)*) => {
        $crate::compose!(@split_for $b $parts [] $($rest)*);
    };
    (@stmts $b:ident $parts:ident { $($inner:tt)* } $($rest:tt)*) => {
        $parts.push($crate::compose!(@block $b $($inner)*));
        $crate::compose!(@stmts $b $parts $($rest)*);
    };
    (@stmts $b:ident $parts:ident $e:expr ; $($rest:tt)*) => {
        $parts.push($crate::builder::BuildExpression::build_expression($b, $e));
        $crate::compose!(@stmts $b $parts $($rest)*);
    };
    (@stmts $b:ident $parts:ident $e:expr) => {
        $parts.push($crate::builder::BuildExpression::build_expression($b, $e));
    };

    // =========================================================================
    // let: any other form, scanned to the terminating semicolon
    // =========================================================================
    (@let $b:ident $parts:ident [$($decl:tt)*] ; $($rest:tt)*) => {
        let $($decl)*;
        $crate::compose!(@stmts $b $parts $($rest)*);
    };
    (@let $b:ident $parts:ident [$($decl:tt)*] $t:tt $($rest:tt)*) => {
        $crate::compose!(@let $b $parts [$($decl)* $t] $($rest)*);
    };

    // =========================================================================
    // if: split the whole if/else-if/else chain off the statement list
    // =========================================================================
    (@split_if $b:ident $parts:ident [$($chain:tt)*] { $($then:tt)* } else if $($rest:tt)*) => {
        $crate::compose!(@split_if $b $parts [$($chain)* { $($then)* } else if] $($rest)*);
    };
    (@split_if $b:ident $parts:ident [$($chain:tt)*] { $($then:tt)* } else { $($other:tt)* } $($rest:tt)*) => {
        $parts.push($crate::compose!(@if $b [] $($chain)* { $($then)* } else { $($other)* }));
        $crate::compose!(@stmts $b $parts $($rest)*);
    };
    (@split_if $b:ident $parts:ident [$($chain:tt)*] { $($then:tt)* } $($rest:tt)*) => {
        $parts.push($crate::compose!(@if $b [] $($chain)* { $($then)* }));
        $crate::compose!(@stmts $b $parts $($rest)*);
    };
    (@split_if $b:ident $parts:ident [$($chain:tt)*] $t:tt $($rest:tt)*) => {
        $crate::compose!(@split_if $b $parts [$($chain)* $t] $($rest)*);
    };

    // =========================================================================
    // if: lower one chain into either/optional combinators
    // =========================================================================
    (@if $b:ident [$($cond:tt)*] { $($then:tt)* } else if $($rest:tt)*) => {
        if $($cond)* {
            $crate::builder::ResultBuilder::build_either_first(
                $b,
                $crate::compose!(@block $b $($then)*),
            )
        } else {
            $crate::builder::ResultBuilder::build_either_second(
                $b,
                $crate::compose!(@if $b [] $($rest)*),
            )
        }
    };
    (@if $b:ident [$($cond:tt)*] { $($then:tt)* } else { $($other:tt)* }) => {
        if $($cond)* {
            $crate::builder::ResultBuilder::build_either_first(
                $b,
                $crate::compose!(@block $b $($then)*),
            )
        } else {
            $crate::builder::ResultBuilder::build_either_second(
                $b,
                $crate::compose!(@block $b $($other)*),
            )
        }
    };
    (@if $b:ident [$($cond:tt)*] { $($then:tt)* }) => {
        $crate::builder::ResultBuilder::build_optional(
            $b,
            if $($cond)* {
                ::std::option::Option::Some($crate::compose!(@block $b $($then)*))
            } else {
                ::std::option::Option::None
            },
        )
    };
    (@if $b:ident [$($cond:tt)*] $t:tt $($rest:tt)*) => {
        $crate::compose!(@if $b [$($cond)* $t] $($rest)*)
    };

    // =========================================================================
    // for: one block per iteration
    // =========================================================================
    (@split_for $b:ident $parts:ident [$($head:tt)*] { $($body:tt)* } $($rest:tt)*) => {
        $parts.push({
            let mut __iterations = ::std::vec::Vec::new();
            for $($head)* {
                __iterations.push($crate::compose!(@block $b $($body)*));
            }
            $crate::builder::ResultBuilder::build_array($b, __iterations)
        });
        $crate::compose!(@stmts $b $parts $($rest)*);
    };
    (@split_for $b:ident $parts:ident [$($head:tt)*] $t:tt $($rest:tt)*) => {
        $crate::compose!(@split_for $b $parts [$($head)* $t] $($rest)*);
    };

    // =========================================================================
    // Entry point
    // =========================================================================
    ($builder:expr => { $($body:tt)* }) => {{
        let __builder = &$builder;
        let __component = $crate::compose!(@block __builder $($body)*);
        $crate::builder::ResultBuilder::build_final_result(__builder, __component)
    }};
}
