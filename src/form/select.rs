/// A row of mutually exclusive options; at most one is selected.
///
/// Every question renders through this one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleSelectGroup<'a> {
    options: &'a [&'a str],
    selected: Option<usize>,
}

impl<'a> SingleSelectGroup<'a> {
    pub fn new(options: &'a [&'a str], selected: Option<usize>) -> Self {
        let selected = selected.filter(|&idx| idx < options.len());
        Self { options, selected }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Selects `index` and hands it to `on_select`. Out-of-range indices are ignored.
    pub fn select<F>(&mut self, index: usize, mut on_select: F) -> bool
    where
        F: FnMut(usize),
    {
        if index >= self.options.len() {
            return false;
        }
        self.selected = Some(index);
        on_select(index);
        true
    }

    /// `0 Aldrig  1 [Sjældent]  ...`, the selected option in brackets.
    pub fn render(&self) -> String {
        let mut parts = Vec::with_capacity(self.options.len());
        for (idx, option) in self.options.iter().enumerate() {
            if self.selected == Some(idx) {
                parts.push(format!("{idx} [{option}]"));
            } else {
                parts.push(format!("{idx} {option}"));
            }
        }
        parts.join("  ")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/form/select.rs"]
mod tests;
