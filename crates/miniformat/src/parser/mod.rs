//! Parser for angle-bracket markup.
//!
//! This module contains the lexer, tag classifier and tree builder.

mod lexer;
mod tag;
mod tree;

pub use lexer::{Lexer, Token, tokenize};
pub use tag::Tag;
pub use tree::{Child, Node, NodeId, Tree};
