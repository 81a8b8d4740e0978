//! Tag tree built from the token stream.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. A node
//! owns its children list; the parent link is only an index, used to move
//! the cursor back up on a close tag.
//!
//! A child is always pushed after its parent, so its id is larger. Walking
//! the arena backwards visits every subtree before its parent, which lets
//! per-subtree totals be computed without recursion.

use super::lexer::Token;
use super::tag::Tag;

/// Index of a node in its [`Tree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A child of a node: a text fragment or a nested tag scope.
#[derive(Clone, Debug, PartialEq)]
pub enum Child<'a> {
    Text(&'a str),
    Node(NodeId),
}

/// One tag scope.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<'a> {
    /// Raw tag content, e.g. `gradient:red:blue`.
    pub tag: &'a str,
    pub parent: Option<NodeId>,
    pub children: Vec<Child<'a>>,
}

/// A rooted tree of tag scopes.
#[derive(Clone, Debug)]
pub struct Tree<'a> {
    nodes: Vec<Node<'a>>,
    /// Characters of text under each node, indexed like `nodes`.
    text_lens: Vec<usize>,
}

impl<'a> Tree<'a> {
    /// Build the tree for a token stream.
    ///
    /// Close tags are positional: each one closes whatever scope is open,
    /// regardless of its name. A close tag with nothing open is ignored, and
    /// scopes still open at the end simply stay part of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use miniformat::parser::{tokenize, Child, Tree};
    ///
    /// let tree = Tree::build(tokenize("<b>x</i>y"));
    /// let root = tree.node(tree.root());
    /// assert_eq!(root.children.len(), 2);
    /// assert_eq!(root.children[1], Child::Text("y"));
    /// ```
    pub fn build<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token<'a>>,
    {
        let mut tree = Tree {
            nodes: vec![Node {
                tag: Tag::ROOT,
                parent: None,
                children: Vec::new(),
            }],
            text_lens: Vec::new(),
        };
        let mut current = tree.root();

        for token in tokens {
            match token {
                Token::Text(text) => tree.node_mut(current).children.push(Child::Text(text)),
                Token::OpenTag(tag) => current = tree.push(current, tag),
                Token::CloseTag(name) => match tree.node(current).parent {
                    Some(parent) => current = parent,
                    None => log::debug!("ignoring unmatched close tag </{name}>"),
                },
            }
        }

        tree.text_lens = tree.subtree_text_lens();
        tree
    }

    /// One bottom-up pass: direct text of each node, then each node's total
    /// folded into its parent, children first.
    fn subtree_text_lens(&self) -> Vec<usize> {
        let mut lens: Vec<usize> = self
            .nodes
            .iter()
            .map(|node| {
                node.children
                    .iter()
                    .map(|child| match child {
                        Child::Text(text) => text.chars().count(),
                        Child::Node(_) => 0,
                    })
                    .sum()
            })
            .collect();

        for (index, node) in self.nodes.iter().enumerate().rev() {
            if let Some(parent) = node.parent {
                lens[parent.0] += lens[index];
            }
        }
        lens
    }

    fn push(&mut self, parent: NodeId, tag: &'a str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.node_mut(parent).children.push(Child::Node(id));
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node<'a> {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<'a> {
        &mut self.nodes[id.0]
    }

    /// Number of nodes, root included. Never zero.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Characters of text anywhere under `id`.
    pub fn text_len(&self, id: NodeId) -> usize {
        self.text_lens[id.0]
    }
}
