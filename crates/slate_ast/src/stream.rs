//! Mutable token stream with stable handles.
//!
//! `TokenList` is an arena-backed doubly linked list: every token lives in a
//! slot addressed by its `TokenId`, and slots carry prev/next links. Line
//! break, indentation, and separator edits are therefore localized O(1)
//! splices rather than full-stream rewrites, and ids held by syntax tree
//! nodes stay valid across edits.
//!
//! Navigation comes in three flavors:
//!
//! - [`TokenList::next`] / [`TokenList::prev`]: raw adjacency, every token
//! - [`TokenList::next_significant`] / [`TokenList::prev_significant`]: skip
//!   whitespace, line breaks, and comments
//! - [`TokenList::next_significant_or_comment`] /
//!   [`TokenList::prev_significant_or_comment`]: skip whitespace and line
//!   breaks but stop at comments

use crate::token::{Token, TokenId};

struct Slot {
    token: Token,
    prev: Option<TokenId>,
    next: Option<TokenId>,
    deleted: bool,
}

/// An ordered, mutable sequence of tokens and comments.
#[derive(Default)]
pub struct TokenList {
    slots: Vec<Slot>,
    head: Option<TokenId>,
    tail: Option<TokenId>,
    len: usize,
}

impl TokenList {
    /// Create an empty token stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live tokens in the stream.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stream has no live tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First token of the stream.
    #[inline]
    pub fn first(&self) -> Option<TokenId> {
        self.head
    }

    /// Last token of the stream.
    #[inline]
    pub fn last(&self) -> Option<TokenId> {
        self.tail
    }

    fn slot(&self, id: TokenId) -> &Slot {
        let slot = &self.slots[id.index()];
        debug_assert!(!slot.deleted, "token {id:?} was deleted");
        slot
    }

    fn slot_mut(&mut self, id: TokenId) -> &mut Slot {
        let slot = &mut self.slots[id.index()];
        debug_assert!(!slot.deleted, "token {id:?} was deleted");
        slot
    }

    /// The token stored under `id`.
    #[inline]
    pub fn get(&self, id: TokenId) -> &Token {
        &self.slot(id).token
    }

    /// Mutable access to the token stored under `id`.
    #[inline]
    pub fn get_mut(&mut self, id: TokenId) -> &mut Token {
        &mut self.slot_mut(id).token
    }

    /// Whether `id` refers to a live (non-deleted) token.
    #[inline]
    pub fn contains(&self, id: TokenId) -> bool {
        self.slots
            .get(id.index())
            .is_some_and(|slot| !slot.deleted)
    }

    fn alloc(&mut self, token: Token) -> TokenId {
        let id = TokenId::new(u32::try_from(self.slots.len()).unwrap_or(u32::MAX));
        self.slots.push(Slot {
            token,
            prev: None,
            next: None,
            deleted: false,
        });
        self.len += 1;
        id
    }

    /// Append a token to the end of the stream.
    pub fn push_back(&mut self, token: Token) -> TokenId {
        let id = self.alloc(token);
        match self.tail {
            Some(tail) => {
                self.slot_mut(tail).next = Some(id);
                self.slot_mut(id).prev = Some(tail);
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Insert a token immediately after `anchor`.
    pub fn insert_after(&mut self, anchor: TokenId, token: Token) -> TokenId {
        let id = self.alloc(token);
        let old_next = self.slot(anchor).next;
        self.slot_mut(anchor).next = Some(id);
        {
            let slot = self.slot_mut(id);
            slot.prev = Some(anchor);
            slot.next = old_next;
        }
        match old_next {
            Some(next) => self.slot_mut(next).prev = Some(id),
            None => self.tail = Some(id),
        }
        id
    }

    /// Insert a token immediately before `anchor`.
    pub fn insert_before(&mut self, anchor: TokenId, token: Token) -> TokenId {
        let id = self.alloc(token);
        let old_prev = self.slot(anchor).prev;
        self.slot_mut(anchor).prev = Some(id);
        {
            let slot = self.slot_mut(id);
            slot.next = Some(anchor);
            slot.prev = old_prev;
        }
        match old_prev {
            Some(prev) => self.slot_mut(prev).next = Some(id),
            None => self.head = Some(id),
        }
        id
    }

    /// Unlink a token from the stream.
    ///
    /// The slot is tombstoned; `id` must not be navigated from afterwards.
    pub fn delete(&mut self, id: TokenId) {
        let (prev, next) = {
            let slot = self.slot(id);
            (slot.prev, slot.next)
        };
        match prev {
            Some(prev) => self.slot_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.slot_mut(next).prev = prev,
            None => self.tail = prev,
        }
        let slot = &mut self.slots[id.index()];
        slot.deleted = true;
        slot.prev = None;
        slot.next = None;
        self.len -= 1;
    }

    /// Raw successor of `id`, including whitespace and comments.
    #[inline]
    pub fn next(&self, id: TokenId) -> Option<TokenId> {
        self.slot(id).next
    }

    /// Raw predecessor of `id`, including whitespace and comments.
    #[inline]
    pub fn prev(&self, id: TokenId) -> Option<TokenId> {
        self.slot(id).prev
    }

    /// Next token, skipping whitespace, line breaks, and comments.
    pub fn next_significant(&self, id: TokenId) -> Option<TokenId> {
        self.scan(id, Self::next, |token| {
            !token.is_whitespace_or_line_break() && !token.is_comment()
        })
    }

    /// Previous token, skipping whitespace, line breaks, and comments.
    pub fn prev_significant(&self, id: TokenId) -> Option<TokenId> {
        self.scan(id, Self::prev, |token| {
            !token.is_whitespace_or_line_break() && !token.is_comment()
        })
    }

    /// Next token or comment, skipping whitespace and line breaks.
    pub fn next_significant_or_comment(&self, id: TokenId) -> Option<TokenId> {
        self.scan(id, Self::next, |token| !token.is_whitespace_or_line_break())
    }

    /// Previous token or comment, skipping whitespace and line breaks.
    pub fn prev_significant_or_comment(&self, id: TokenId) -> Option<TokenId> {
        self.scan(id, Self::prev, |token| !token.is_whitespace_or_line_break())
    }

    fn scan(
        &self,
        from: TokenId,
        step: impl Fn(&Self, TokenId) -> Option<TokenId>,
        accept: impl Fn(&Token) -> bool,
    ) -> Option<TokenId> {
        let mut cursor = step(self, from);
        while let Some(id) = cursor {
            if accept(self.get(id)) {
                return Some(id);
            }
            cursor = step(self, id);
        }
        None
    }

    /// Whether the token under `id` is whitespace or a line break.
    #[inline]
    pub fn is_whitespace_or_line_break(&self, id: TokenId) -> bool {
        self.get(id).is_whitespace_or_line_break()
    }

    /// Iterate over live tokens in stream order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Token texts in stream order.
    ///
    /// Handy for structural-equality assertions in tests and for debugging.
    pub fn texts(&self) -> Vec<String> {
        self.iter()
            .map(|(_, token)| token.text.clone())
            .collect()
    }
}

/// Stream-order iterator over `(TokenId, &Token)` pairs.
pub struct Iter<'a> {
    list: &'a TokenList,
    cursor: Option<TokenId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (TokenId, &'a Token);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.list.next(id);
        Some((id, self.list.get(id)))
    }
}
