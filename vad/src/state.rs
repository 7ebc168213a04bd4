/// Shape of each recurrent state tensor: `[layers, batch, hidden]`.
pub const STATE_SHAPE: [usize; 3] = [2, 1, 64];

/// Number of values in one state tensor.
pub const STATE_LEN: usize = STATE_SHAPE[0] * STATE_SHAPE[1] * STATE_SHAPE[2];

/// Recurrent state carried between detector calls.
///
/// `h` and `c` are row-major tensors of shape [`STATE_SHAPE`].
#[derive(Debug, Clone, PartialEq)]
pub struct VadState {
    pub h: Vec<f32>,
    pub c: Vec<f32>,
}

impl VadState {
    /// All-zero state, as at the start of a stream.
    pub fn zeros() -> Self {
        Self {
            h: vec![0.0; STATE_LEN],
            c: vec![0.0; STATE_LEN],
        }
    }

    /// Zeroes both tensors in place.
    pub fn reset(&mut self) {
        self.h.fill(0.0);
        self.c.fill(0.0);
    }

    pub fn is_zero(&self) -> bool {
        self.h.iter().chain(&self.c).all(|&v| v == 0.0)
    }

    /// Both tensors have [`STATE_LEN`] values.
    pub fn is_well_formed(&self) -> bool {
        self.h.len() == STATE_LEN && self.c.len() == STATE_LEN
    }
}

impl Default for VadState {
    fn default() -> Self {
        Self::zeros()
    }
}
