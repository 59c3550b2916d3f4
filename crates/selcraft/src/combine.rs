//! Complex-selector joining per
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
//!
//! "A complex selector is a chain of one or more compound selectors
//! separated by combinators."
//! ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!
//! Every [`combine`] call produces a fresh, immutable [`CombinedSelector`]
//! value with the joined text computed at construction. No joiner state is
//! shared between calls, so repeated or interleaved combinations can never
//! interfere with one another.

use core::fmt;

/// Capability of producing selector text.
///
/// Implemented by [`SelectorBuilder`](crate::SelectorBuilder) and
/// [`CombinedSelector`], so combinations nest: the output of one
/// [`combine`] is a valid input to the next.
pub trait Stringify {
    /// The selector text. Pure read with no side effects; calling it
    /// repeatedly on an unmutated value returns the same string.
    fn stringify(&self) -> String;
}

/// An immutable complex selector produced by [`combine`].
///
/// Holds only the already-joined text; it keeps no reference to the two
/// inputs it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    /// The joined `"left combinator right"` text.
    text: String,
}

impl CombinedSelector {
    /// The joined selector text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Stringify for CombinedSelector {
    fn stringify(&self) -> String {
        self.text.clone()
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// Join two selectors with a combinator token into a complex selector,
/// formatted as `"left combinator right"` with a single space on each side
/// of the token.
///
/// The token may be a [`Combinator`](crate::Combinator) or any other
/// `Display` value; no validation is performed on which tokens are legal.
/// Inputs are anything [`Stringify`], so combined results nest recursively:
///
/// ```
/// use selcraft::{combine, element};
///
/// let main = element("div").id("main")?;
/// let data = element("table").id("data")?;
/// let pair = combine(&main, '+', &data);
/// assert_eq!(pair.as_str(), "div#main + table#data");
///
/// let nested = combine(&pair, '>', &element("td"));
/// assert_eq!(nested.as_str(), "div#main + table#data > td");
/// # Ok::<(), selcraft::SelectorError>(())
/// ```
#[must_use]
pub fn combine<L, C, R>(left: &L, combinator: C, right: &R) -> CombinedSelector
where
    L: Stringify + ?Sized,
    C: fmt::Display,
    R: Stringify + ?Sized,
{
    CombinedSelector {
        text: format!("{} {combinator} {}", left.stringify(), right.stringify()),
    }
}
