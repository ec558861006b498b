use keel_core::{ScopeKind, UiError};
use smallvec::SmallVec;

/// Bounded stack for one kind of scope (theme, layout, window, parent).
///
/// The bound comes from `UiConfig` and never changes. Overflow and popping an
/// empty stack are programming errors and panic with the matching
/// [`UiError`] message.
#[derive(Debug)]
pub struct ScopeStack<T> {
    items: SmallVec<[T; 8]>,
    max_depth: usize,
    kind: ScopeKind,
}

impl<T> ScopeStack<T> {
    pub fn new(kind: ScopeKind, max_depth: usize) -> Self {
        Self {
            items: SmallVec::new(),
            max_depth,
            kind,
        }
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() >= self.max_depth {
            panic!(
                "{}",
                UiError::ScopeOverflow {
                    scope: self.kind,
                    depth: self.max_depth,
                }
            );
        }
        self.items.push(item);
    }

    pub fn pop(&mut self) -> T {
        match self.items.pop() {
            Some(item) => item,
            None => panic!("{}", UiError::ScopeUnderflow { scope: self.kind }),
        }
    }

    pub fn top(&self) -> &T {
        match self.items.last() {
            Some(item) => item,
            None => panic!("{}", UiError::ScopeUnderflow { scope: self.kind }),
        }
    }

    pub fn top_mut(&mut self) -> &mut T {
        let kind = self.kind;
        match self.items.last_mut() {
            Some(item) => item,
            None => panic!("{}", UiError::ScopeUnderflow { scope: kind }),
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Panics with [`UiError::UnbalancedScope`] unless exactly `expected` entries remain.
    pub fn assert_depth(&self, expected: usize) {
        if self.items.len() != expected {
            panic!(
                "{}",
                UiError::UnbalancedScope {
                    scope: self.kind,
                    depth: self.items.len().saturating_sub(expected),
                }
            );
        }
    }
}
