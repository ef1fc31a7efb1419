//! Per-vertex selection flags.

/// One boolean flag per vertex index, the owned equivalent of marking
/// vertices selected in an edit session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    flags: Vec<bool>,
}

impl Selection {
    /// Selection over `len` vertices with nothing selected.
    pub fn none(len: usize) -> Self {
        Self { flags: vec![false; len] }
    }

    /// Selection over `len` vertices with everything selected.
    pub fn all(len: usize) -> Self {
        Self { flags: vec![true; len] }
    }

    pub const fn from_flags(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// Number of vertices this selection covers.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn set(&mut self, index: usize, selected: bool) {
        if let Some(flag) = self.flags.get_mut(index) {
            *flag = selected;
        }
    }

    pub fn select_all(&mut self) {
        self.flags.iter_mut().for_each(|f| *f = true);
    }

    /// Flip every flag in place.
    pub fn invert(&mut self) {
        self.flags.iter_mut().for_each(|f| *f = !*f);
    }

    /// Copy of this selection with every flag flipped.
    pub fn inverted(&self) -> Self {
        let mut out = self.clone();
        out.invert();
        out
    }

    pub fn selected_count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }

    /// Indices of selected vertices, ascending.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.then_some(i))
    }

    /// Indices of unselected vertices, ascending.
    pub fn unselected(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, f)| (!*f).then_some(i))
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_swaps_selected_and_unselected() {
        let sel = Selection::from_flags(vec![true, false, false, true]);
        let inv = sel.inverted();
        assert_eq!(inv.selected().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(inv.unselected().collect::<Vec<_>>(), sel.selected().collect::<Vec<_>>());
        assert_eq!(sel.selected_count() + inv.selected_count(), sel.len());
    }

    #[test]
    fn out_of_range_is_unselected() {
        let mut sel = Selection::all(2);
        sel.set(5, true);
        assert!(!sel.is_selected(5));
        assert_eq!(sel.len(), 2);
    }
}
