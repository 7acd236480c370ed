use egui::Pos2;

use crate::drawable::Drawable;

/// Committed drawables plus the items undone since the last commit
#[derive(Debug, Default, Clone)]
pub struct History {
    /// Rendered in this order, back to front
    committed: Vec<Drawable>,
    /// Top of the stack is the most recent undo
    redone: Vec<Drawable>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` and drop the redo path.
    pub fn commit(&mut self, item: impl Into<Drawable>) {
        let item = item.into();
        log::debug!("commit {} ({} committed)", item.element_type(), self.committed.len() + 1);
        self.committed.push(item);
        self.redone.clear();
    }

    /// Move the last committed item onto the redo stack.
    ///
    /// Returns false, leaving both stacks untouched, when nothing is committed.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(item) => {
                self.redone.push(item);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone item back onto the committed stack.
    pub fn redo(&mut self) -> bool {
        match self.redone.pop() {
            Some(item) => {
                self.committed.push(item);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.committed.clear();
        self.redone.clear();
    }

    pub fn current(&self) -> &[Drawable] {
        &self.committed
    }

    pub fn redone(&self) -> &[Drawable] {
        &self.redone
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redone.is_empty()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Mutable access to a committed item, for edits that bypass the history.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Drawable> {
        self.committed.get_mut(index)
    }

    pub fn last_mut(&mut self) -> Option<&mut Drawable> {
        self.committed.last_mut()
    }

    /// Index of the topmost committed item under `pos`.
    pub fn hit_sticker(&self, pos: Pos2) -> Option<usize> {
        self.committed.iter().rposition(|item| item.hit_test(pos))
    }
}
