//! Tree renderer.
//!
//! Walks the tag tree depth-first, resolving each node's style from its
//! parent's and emitting one unit per text fragment, or one per character
//! under a gradient.
//!
//! ## Gradient scope
//!
//! A node with an active gradient paints its direct text children as one
//! run. The run length is the text length of the node's whole subtree,
//! but the position only advances over direct text. A nested node starts
//! its own run over its own subtree, with the inherited stops:
//!
//! ```text
//! <gradient:red:blue>AB<bold>CD</bold>EF</gradient>
//!
//! A B E F -> positions 0 1 2 3 of 6
//! C D     -> positions 0 1 of 2
//! ```
//!
//! The walk keeps its own stack of frames instead of recursing, so nesting
//! depth is bounded by memory rather than by the thread's stack.

use crate::color::Palette;
use crate::message::Message;
use crate::parser::{Child, Node, NodeId, Tree};
use crate::style::StyleState;

/// Renders a [`Tree`] into any [`Message`] type.
pub struct Renderer<'t, 'a> {
    tree: &'t Tree<'a>,
    palette: &'t Palette,
}

impl<'t, 'a> Renderer<'t, 'a> {
    pub fn new(tree: &'t Tree<'a>, palette: &'t Palette) -> Self {
        Self { tree, palette }
    }

    /// Render the whole tree from its root with an empty style.
    pub fn render<M: Message>(&self) -> M {
        self.render_node(self.tree.root(), &StyleState::new())
    }

    /// Render one node with the style inherited from its parent.
    pub fn render_node<M: Message>(&self, id: NodeId, inherited: &StyleState) -> M {
        let mut current = self.enter(id, inherited);
        let mut open: Vec<Frame<'t, 'a, M>> = Vec::new();

        loop {
            match current.next_child() {
                Some(Child::Text(text)) => current.emit(text),
                Some(Child::Node(nested)) => {
                    let child = self.enter(*nested, &current.style);
                    open.push(std::mem::replace(&mut current, child));
                }
                None => match open.pop() {
                    Some(parent) => {
                        let done = std::mem::replace(&mut current, parent);
                        current.parts.push(done.finish());
                    }
                    None => return current.finish(),
                },
            }
        }
    }

    fn enter<M: Message>(&self, id: NodeId, inherited: &StyleState) -> Frame<'t, 'a, M> {
        let node = self.tree.node(id);
        let style = inherited.derive(node.tag, self.palette);
        let total = match style.gradient {
            Some(_) => self.tree.text_len(id),
            None => 0,
        };

        Frame {
            node,
            style,
            total,
            position: 0,
            next: 0,
            parts: Vec::with_capacity(node.children.len()),
        }
    }
}

/// A node being rendered: its resolved style, the gradient run state and
/// the units emitted so far.
struct Frame<'t, 'a, M> {
    node: &'t Node<'a>,
    style: StyleState,
    /// Gradient run length, the node's whole subtree.
    total: usize,
    /// Gradient position, advanced only by this node's direct text.
    position: usize,
    next: usize,
    parts: Vec<M>,
}

impl<'t, 'a, M: Message> Frame<'t, 'a, M> {
    fn next_child(&mut self) -> Option<&'t Child<'a>> {
        let node: &'t Node<'a> = self.node;
        let child = node.children.get(self.next)?;
        self.next += 1;
        Some(child)
    }

    fn emit(&mut self, text: &str) {
        match &self.style.gradient {
            Some(gradient) => {
                for ch in text.chars() {
                    let mut buf = [0; 4];
                    let mut unit = M::raw(ch.encode_utf8(&mut buf));
                    self.style.apply_to(&mut unit);
                    unit.set_color(&gradient.color_at(self.position, self.total));
                    self.parts.push(unit);
                    self.position += 1;
                }
            }
            None => {
                let mut unit = M::raw(text);
                self.style.apply_to(&mut unit);
                self.parts.push(unit);
            }
        }
    }

    fn finish(self) -> M {
        if self.parts.is_empty() {
            M::raw("")
        } else {
            M::join(self.parts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::StyledText;
    use crate::parser::tokenize;

    fn render(input: &str) -> StyledText {
        let tree = Tree::build(tokenize(input));
        Renderer::new(&tree, &Palette::classic()).render()
    }

    fn colors(text: &StyledText) -> Vec<(String, Option<String>)> {
        text.leaves()
            .into_iter()
            .map(|leaf| (leaf.text.clone(), leaf.color.clone()))
            .collect()
    }

    #[test]
    fn empty_node_renders_empty_unit() {
        let rendered = render("<b></b>");
        assert_eq!(rendered.children.len(), 1);
        assert_eq!(rendered.children[0], StyledText::raw(""));
    }

    #[test]
    fn fragment_is_one_unit() {
        let rendered = render("<red>hello</red>");
        let leaves = rendered.leaves();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].text, "hello");
        assert_eq!(leaves[0].color.as_deref(), Some("#FF5555"));
    }

    #[test]
    fn gradient_splits_characters() {
        let rendered = render("<gradient:#000000:#ffffff>abcd</gradient>");
        assert_eq!(
            colors(&rendered),
            vec![
                ("a".to_string(), Some("#000000".to_string())),
                ("b".to_string(), Some("#3f3f3f".to_string())),
                ("c".to_string(), Some("#7f7f7f".to_string())),
                ("d".to_string(), Some("#bfbfbf".to_string())),
            ]
        );
    }

    #[test]
    fn nested_node_restarts_gradient() {
        let rendered = render("<gradient:red:blue>AB<bold>CD</bold>EF</gradient>");
        let got = colors(&rendered);
        let hex: Vec<_> = got.iter().map(|(_, c)| c.as_deref().unwrap_or("")).collect();
        assert_eq!(
            hex,
            [
                "#ff5555", "#e25571", // A B: 0 and 1 of 6
                "#ff5555", "#aa55aa", // C D: 0 and 1 of 2
                "#c6558d", "#aa55aa", // E F: 2 and 3 of 6
            ]
        );
    }

    #[test]
    fn siblings_do_not_share_style() {
        let rendered = render("<b>x</b><i>y</i>");
        let leaves = rendered.leaves();
        assert!(leaves[0].bold && !leaves[0].italic);
        assert!(leaves[1].italic && !leaves[1].bold);
    }

    #[test]
    fn deep_nesting_renders() {
        let input = format!("{}x", "<b>".repeat(100_000));
        let rendered = render(&input);
        let leaves = rendered.leaves();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].text, "x");
        assert!(leaves[0].bold);
    }

    #[test]
    fn deep_gradient_scopes_restart() {
        let input = format!("<gradient:#000000:#ffffff>{}ab", "<i>".repeat(50_000));
        let rendered = render(&input);
        assert_eq!(
            colors(&rendered),
            vec![
                ("a".to_string(), Some("#000000".to_string())),
                ("b".to_string(), Some("#7f7f7f".to_string())),
            ]
        );
    }
}
