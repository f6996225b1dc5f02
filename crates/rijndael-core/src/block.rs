//! The 4×4 state matrix and its flat-block codec.

/// One 16-byte block as the 4×4 matrix the round transforms operate on.
///
/// Storage is row-major; a flat block fills the matrix column by column, so
/// byte `i` lands at row `i % 4`, column `i / 4`. Round keys are reshaped
/// with the same mapping before they are XORed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State(pub(crate) [[u8; 4]; 4]);

impl State {
    /// Builds a state from a flat 16-byte block.
    pub fn from_bytes(bytes: &[u8; 16]) -> Self {
        let mut cells = [[0u8; 4]; 4];
        for (i, byte) in bytes.iter().enumerate() {
            cells[i % 4][i / 4] = *byte;
        }
        State(cells)
    }

    /// Serializes the state back to a flat 16-byte block, column by column.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = self.0[i % 4][i / 4];
        }
        bytes
    }

    /// XORs another state into this one, cell by cell.
    #[inline]
    #[must_use]
    pub fn xor(mut self, rhs: &State) -> State {
        for (row, rhs_row) in self.0.iter_mut().zip(rhs.0.iter()) {
            for (cell, r) in row.iter_mut().zip(rhs_row.iter()) {
                *cell ^= *r;
            }
        }
        self
    }
}

impl From<[u8; 16]> for State {
    fn from(bytes: [u8; 16]) -> Self {
        State::from_bytes(&bytes)
    }
}
