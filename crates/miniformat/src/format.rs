//! Reusable formatter.

use crate::color::Palette;
use crate::message::{Message, StyledText};
use crate::parser::{Tree, tokenize};
use crate::render::Renderer;

/// Turns markup into styled text using a fixed [`Palette`].
///
/// Holds no per-call state, so one formatter can be shared between threads.
///
/// # Examples
///
/// ```
/// use miniformat::{MiniFormat, Palette};
///
/// let palette = Palette::classic().with_color("brand", "#3366CC").unwrap();
/// let format = MiniFormat::with_palette(palette);
///
/// let text = format.parse("<brand>Hello</brand>");
/// assert_eq!(text.leaves()[0].color.as_deref(), Some("#3366CC"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MiniFormat {
    palette: Palette,
}

impl MiniFormat {
    /// A formatter using the classic sixteen colors.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Parse markup into a [`StyledText`].
    pub fn parse(&self, input: &str) -> StyledText {
        self.parse_into(input)
    }

    /// Parse markup into any [`Message`] implementation.
    ///
    /// Input without a `<` is returned as a single raw unit without
    /// tokenizing.
    pub fn parse_into<M: Message>(&self, input: &str) -> M {
        if !input.contains('<') {
            log::trace!("no markup in {} bytes of input", input.len());
            return M::raw(input);
        }

        let tokens = tokenize(input);
        log::trace!("lexed {} tokens", tokens.len());
        let tree = Tree::build(tokens);
        log::trace!("built tree with {} nodes", tree.node_count());

        Renderer::new(&tree, &self.palette).render()
    }
}
