//! Component - The intermediate container every combinator produces.
//!
//! A component is an ordered run of normalized units. Concatenation is the
//! only way components combine, so the whole engine is written against
//! [`Component::append`].

/// Ordered container of normalized units.
///
/// `Default` must produce the empty container.
pub trait Component: Default {
    /// Move every unit of `other` onto the end of `self`, preserving order.
    fn append(&mut self, other: Self);

    /// Number of units held.
    fn unit_count(&self) -> usize;

    /// True when no unit is held.
    fn is_empty(&self) -> bool {
        self.unit_count() == 0
    }
}

impl Component for String {
    fn append(&mut self, other: Self) {
        if self.is_empty() {
            *self = other;
        } else {
            self.push_str(&other);
        }
    }

    /// Units of a text component are chars.
    fn unit_count(&self) -> usize {
        self.chars().count()
    }

    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl<T> Component for Vec<T> {
    fn append(&mut self, mut other: Self) {
        Vec::append(self, &mut other);
    }

    fn unit_count(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

/// Flatten components in iteration order, then intra-part order.
///
/// Shared by the block and array combinators.
pub fn concat<C, I>(parts: I) -> C
where
    C: Component,
    I: IntoIterator<Item = C>,
{
    let mut parts = parts.into_iter();
    let Some(mut acc) = parts.next() else {
        return C::default();
    };
    for part in parts {
        acc.append(part);
    }
    acc
}
