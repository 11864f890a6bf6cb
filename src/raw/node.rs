use super::handle::Handle;
use super::size::Size;

/// Which child link a path step descended through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A single AVL node: one key plus the cached height and size of its subtree.
#[derive(Clone, Debug)]
pub(crate) struct AvlNode<T> {
    key: T,
    // A leaf has height 1. AVL height stays below 1.45 * log2(n + 2), so a
    // byte covers any tree an arena can address.
    height: u8,
    size: Size,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<T> AvlNode<T> {
    /// Creates a detached leaf.
    pub(crate) const fn leaf(key: T) -> Self {
        Self {
            key,
            height: 1,
            size: Size::ONE,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &T {
        &self.key
    }

    /// Swaps in a new key, returning the old one.
    pub(crate) fn replace_key(&mut self, key: T) -> T {
        core::mem::replace(&mut self.key, key)
    }

    pub(crate) fn into_key(self) -> T {
        self.key
    }

    #[inline]
    pub(crate) const fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub(crate) const fn size(&self) -> Size {
        self.size
    }

    /// Stores the height and size computed from the current children.
    pub(crate) const fn set_metrics(&mut self, height: u8, size: Size) {
        self.height = height;
        self.size = size;
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) const fn set_left(&mut self, child: Option<Handle>) {
        self.left = child;
    }

    pub(crate) const fn set_right(&mut self, child: Option<Handle>) {
        self.right = child;
    }

    pub(crate) const fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}
