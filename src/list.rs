//! The linked list form of cool-lex, section 3.2 of Ruskey and Williams.
//!
//! The bit string is a singly linked list read from `head`: the node at position `i` of the list
//! says whether element `i` is selected. Each step unlinks the node after `boundary` and pushes it
//! to the front, which rotates a prefix of the string by one position without any arithmetic.
//!
//! Nodes live in one vector allocated up front and link to each other by index.

use crate::{error::check_arguments, CoolLex, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    value: bool,
    next: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedList {
    n: usize,
    k: usize,
    nodes: Vec<Node>,
    /// The first node of the list. `None` iff `k = 0`.
    head: Option<usize>,
    /// The node after which the next rotation happens: initially the last of the leading selected
    /// nodes, afterwards the first selected node that follows an unselected one.
    boundary: usize,
    /// Set by the `advance` that finds no node after `boundary`.
    exhausted: bool,
}

impl LinkedList {
    pub fn new(n: usize, k: usize) -> Result<Self> {
        check_arguments(n, k, None)?;
        if k == 0 {
            tracing::debug!(n, "k = 0, generator starts exhausted");
            return Ok(Self {
                n,
                k,
                nodes: Vec::new(),
                head: None,
                boundary: 0,
                exhausted: true,
            });
        }
        tracing::debug!(n, k, "linked list generator");
        // ones first, then zeros
        let nodes = (0..n)
            .map(|i| Node {
                value: i < k,
                next: (i + 1 < n).then_some(i + 1),
            })
            .collect();
        Ok(Self {
            n,
            k,
            nodes,
            head: Some(0),
            boundary: k - 1,
            exhausted: false,
        })
    }

    /// Whether there is a combination after the current one.
    pub fn has_next(&self) -> bool {
        self.head.is_some() && self.nodes[self.boundary].next.is_some()
    }
}

impl CoolLex for LinkedList {
    type Elements<'a> = ListElements<'a>;

    fn n(&self) -> usize {
        self.n
    }

    fn k(&self) -> usize {
        self.k
    }

    fn has_more(&self) -> bool {
        !self.exhausted
    }

    fn advance(&mut self) {
        let moved = self.nodes.get(self.boundary).and_then(|node| node.next);
        let (Some(head), Some(moved)) = (self.head, moved) else {
            self.exhausted = true;
            return;
        };
        self.nodes[self.boundary].next = self.nodes[moved].next;
        self.nodes[moved].next = Some(head);
        self.head = Some(moved);

        // `head` was the old head and now follows `moved`.
        if !self.nodes[moved].value && self.nodes[head].value {
            self.boundary = head;
        }
    }

    fn elements(&self) -> Self::Elements<'_> {
        ListElements {
            nodes: &self.nodes,
            cursor: self.head,
            position: 0,
            remaining: if self.exhausted { 0 } else { self.k },
        }
    }
}

/// Iterator over the positions of the selected nodes of a [`LinkedList`].
///
/// The walk stops as soon as `k` positions have been found, without visiting the unselected nodes
/// at the end of the list.
#[derive(Debug, Clone)]
pub struct ListElements<'a> {
    nodes: &'a [Node],
    cursor: Option<usize>,
    position: usize,
    remaining: usize,
}

impl Iterator for ListElements<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        while let Some(index) = self.cursor {
            let node = self.nodes[index];
            let position = self.position;
            self.cursor = node.next;
            self.position += 1;
            if node.value {
                self.remaining -= 1;
                return Some(position);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ListElements<'_> {}

impl std::iter::FusedIterator for ListElements<'_> {}
