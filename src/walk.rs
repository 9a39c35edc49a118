use crate::operation::{Operation, utf16_len};

/// Splits `s` at the `k`-th UTF-16 code unit, returning `(prefix, suffix)`.
///
/// Used to divide an `Add` payload between the two sides of `compose`'s or
/// `transform`'s pairing table. A split landing inside a surrogate pair
/// indicates a caller bug (see the crate-level note on UTF-16 boundaries);
/// rather than panicking mid-algebra, such a split falls back to a lossy
/// decode, matching the spec's "undefined behavior, detection optional"
/// stance for malformed producers.
pub(crate) fn split_utf16(s: &str, k: usize) -> (String, String) {
    let units: Vec<u16> = s.encode_utf16().collect();
    let (left, right) = units.split_at(k);
    (String::from_utf16_lossy(left), String::from_utf16_lossy(right))
}

/// A two-cursor walk over one side of a pair of changesets being
/// composed or transformed.
///
/// Tracks an index into the underlying operation slice plus a "carry": the
/// not-yet-fully-consumed remainder of the operation the index currently
/// points at. This avoids the O(n²) behavior of repeatedly rebuilding the
/// operation list by popping from the front (see the crate-level concurrency
/// notes). When both the index is past the end and no carry remains, `head`
/// returns the `Keep(0)` sentinel used to drain the other side.
pub(crate) struct Walker<'a> {
    operations: &'a [Operation],
    index: usize,
    carry: Option<Operation>,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(operations: &'a [Operation]) -> Self {
        Self {
            operations,
            index: 0,
            carry: None,
        }
    }

    /// The current operation to inspect, or `Keep(0)` once this side is
    /// exhausted.
    pub(crate) fn head(&self) -> Operation {
        self.carry
            .clone()
            .or_else(|| self.operations.get(self.index).cloned())
            .unwrap_or(Operation::Keep(0))
    }

    /// Whether this side has no more content to offer, including its carry.
    pub(crate) fn is_done(&self) -> bool {
        self.carry.is_none() && self.index >= self.operations.len()
    }

    /// Consume `consumed` of the `len()` UTF-16 code units of the current
    /// `Keep`/`Remove` head, replacing it with whatever remains (or clearing
    /// it entirely when fully consumed).
    pub(crate) fn advance_len(&mut self, consumed: usize) {
        let head = self.head();
        let remaining = head.len() - consumed;

        if remaining == 0 {
            self.pop();
            return;
        }

        let carried = match head {
            Operation::Keep(_) => Operation::Keep(remaining),
            Operation::Remove(_) => Operation::Remove(remaining),
            Operation::Add(_) => {
                unreachable!("advance_len is only called against a Keep or Remove head")
            }
        };
        self.replace_head(carried);
    }

    /// Consume `consumed` UTF-16 code units from the front of the current
    /// `Add` head, replacing it with its remaining suffix (or clearing it
    /// entirely when fully consumed).
    pub(crate) fn advance_add(&mut self, consumed: usize) {
        let Operation::Add(s) = self.head() else {
            unreachable!("advance_add is only called against an Add head");
        };

        if consumed == utf16_len(&s) {
            self.pop();
            return;
        }

        let (_, suffix) = split_utf16(&s, consumed);
        self.replace_head(Operation::Add(suffix));
    }

    /// Drop the current head entirely, moving on to the next operation.
    pub(crate) fn pop(&mut self) {
        if self.carry.take().is_none() {
            self.index += 1;
        }
    }

    fn replace_head(&mut self, operation: Operation) {
        if self.carry.is_none() {
            self.index += 1;
        }
        self.carry = Some(operation);
    }
}
