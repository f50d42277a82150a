//! Text matrix of a board for external renderers.

use std::fmt;

use super::{Board, Square};

impl Board {
    /// Rows from rank 8 down to rank 1, each a rank label followed by one
    /// `[<glyph>]` or `[ ]` cell per file, then a final file-label row.
    #[must_use]
    pub fn matrix(&self) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = (0..8)
            .rev()
            .map(|rank| {
                let mut row = vec![(rank + 1).to_string()];
                row.extend((0..8).map(|file| {
                    match Square::new(rank, file).and_then(|sq| self.occupant_at(sq)) {
                        Some(piece) => format!("[{piece}]"),
                        None => "[ ]".to_string(),
                    }
                }));
                row
            })
            .collect();

        let mut labels = vec![" X ".to_string()];
        labels.extend(('a'..='h').map(|file| format!("_{file}_")));
        rows.push(labels);
        rows
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.matrix() {
            writeln!(f, "{}", row.concat())?;
        }
        Ok(())
    }
}
