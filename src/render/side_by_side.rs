//! Side-by-side projection

use crate::model::DiffResult;

use super::DisplayClass;

/// One entry of a side-by-side column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    /// 1-based line number within this column's document
    pub line_number: usize,
    /// Line content
    pub text: &'a str,
    /// Highlight classification
    pub class: DisplayClass,
}

/// Two parallel columns built from one diff result
///
/// `left` holds every `Unchanged` and `Removed` operation and `right` every
/// `Unchanged` and `Added` operation, both in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideBySide<'a> {
    pub left: Vec<Cell<'a>>,
    pub right: Vec<Cell<'a>>,
}

/// One display row; `None` is a blank filler where the other side has a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub left: Option<Cell<'a>>,
    pub right: Option<Cell<'a>>,
}

/// Split a diff result into left (original) and right (modified) columns
pub fn side_by_side(result: &DiffResult) -> SideBySide<'_> {
    let mut view = SideBySide::default();

    for op in result.operations() {
        let class = DisplayClass::from(op.kind());
        if let Some(line_number) = op.original_line_number() {
            view.left.push(Cell {
                line_number,
                text: op.text(),
                class,
            });
        }
        if let Some(line_number) = op.modified_line_number() {
            view.right.push(Cell {
                line_number,
                text: op.text(),
                class,
            });
        }
    }

    view
}

impl<'a> SideBySide<'a> {
    /// Pair the two columns into aligned display rows
    ///
    /// Unchanged lines share a row. Inside a run of changes the removed
    /// lines are paired with the added lines top to bottom and the shorter
    /// side is padded with blanks.
    pub fn rows(&self) -> Vec<Row<'a>> {
        let mut rows = Vec::with_capacity(self.left.len().max(self.right.len()));
        let (mut li, mut ri) = (0, 0);

        while li < self.left.len() || ri < self.right.len() {
            let left_run = run_len(&self.left[li..]);
            let right_run = run_len(&self.right[ri..]);

            if left_run == 0 && right_run == 0 {
                // Both heads are the same unchanged operation
                rows.push(Row {
                    left: Some(self.left[li]),
                    right: Some(self.right[ri]),
                });
                li += 1;
                ri += 1;
                continue;
            }

            for k in 0..left_run.max(right_run) {
                rows.push(Row {
                    left: (k < left_run).then(|| self.left[li + k]),
                    right: (k < right_run).then(|| self.right[ri + k]),
                });
            }
            li += left_run;
            ri += right_run;
        }

        rows
    }
}

/// Length of the leading run of changed cells
fn run_len(cells: &[Cell<'_>]) -> usize {
    cells
        .iter()
        .take_while(|cell| cell.class != DisplayClass::Unchanged)
        .count()
}
