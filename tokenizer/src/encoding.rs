use ndarray::{s, Array2, ArrayView1};

/// The output of encoding one or more texts.
///
/// Both matrices have one row per input text and exactly `max_seq_length`
/// columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBatch {
    /// The id of each token, right-padded with the `[PAD]` id.
    pub token_ids: Array2<i64>,
    /// `1` for every real or special token, `0` for padding.
    pub attention_mask: Array2<i64>,
}

impl EncodedBatch {
    /// A batch where every position is padding.
    pub(crate) fn padded(rows: usize, seq_len: usize, pad_id: i64) -> Self {
        EncodedBatch {
            token_ids: Array2::from_elem((rows, seq_len), pad_id),
            attention_mask: Array2::zeros((rows, seq_len)),
        }
    }

    /// Overwrite the start of a row with `ids`, marking them as attended.
    pub(crate) fn fill_row(&mut self, row: usize, ids: &[i64]) {
        debug_assert!(ids.len() <= self.seq_len());

        let len = ids.len();
        self.token_ids
            .slice_mut(s![row, ..len])
            .assign(&ArrayView1::from(ids));
        self.attention_mask.slice_mut(s![row, ..len]).fill(1);
    }

    /// The number of encoded texts.
    pub fn len(&self) -> usize { self.token_ids.nrows() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn seq_len(&self) -> usize { self.token_ids.ncols() }

    /// The token ids and attention mask for a single text.
    pub fn row(
        &self,
        index: usize,
    ) -> Option<(ArrayView1<'_, i64>, ArrayView1<'_, i64>)> {
        if index < self.len() {
            Some((self.token_ids.row(index), self.attention_mask.row(index)))
        } else {
            None
        }
    }
}
