//! Selector grammar violations.
//!
//! Both variants are fail-fast programmer errors: the builder performs no
//! retry and no rollback, and callers are expected to fix the chain that
//! produced them rather than recover at runtime.

use thiserror::Error;

use crate::grammar::SegmentKind;

/// A violated compound-selector grammar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A once-only segment kind (element, id, or pseudo-element) was
    /// appended a second time.
    ///
    /// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    #[error("duplicate {kind} segment: a compound selector may contain at most one")]
    DuplicateSegment {
        /// The segment kind that was repeated.
        kind: SegmentKind,
    },

    /// A segment was appended after a later-grammar-position segment is
    /// already present.
    ///
    /// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    /// "If it contains a type selector or universal selector, that selector
    /// must come first in the sequence."
    #[error("grammar order violation: {segment} segment cannot follow {after} segment")]
    OrderViolation {
        /// The segment kind that was appended out of order.
        segment: SegmentKind,
        /// The already-present segment kind it illegally follows.
        after: SegmentKind,
    },
}
