//! Presentation of the visible set
//!
//! Renderers are the only side-effecting half of the view. Each one must
//! show an explicit empty state when nothing matches.

mod cards;
mod html;
mod text;

pub use cards::{CardPatch, CardSet};
pub use html::{render_card, render_card_list, HtmlRenderer};
pub use text::TextRenderer;

use crate::view::VisibleSet;

/// Reflects a visible set into some presentation layer
pub trait Renderer {
    fn render(&mut self, visible: &VisibleSet<'_>);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, visible: &VisibleSet<'_>) {
        (**self).render(visible)
    }
}
