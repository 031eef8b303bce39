use crate::slides::NavigationError;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
}

/// Index arithmetic over a sequence of `len` slides.
#[derive(Clone, Copy, Debug)]
pub struct Track {
    pub len: usize,
    pub loop_index: usize,
    pub skip_index: Option<usize>,
}

impl Track {
    /// Computes where a move in `direction` from `from` comes to rest.
    ///
    /// Returns `Ok(None)` for an empty track. Fails with
    /// [`NavigationError::InfiniteLoop`] when stepping past the skip index
    /// lands back on the index the search is standing on.
    pub fn next(
        &self,
        from: Option<usize>,
        direction: Direction,
    ) -> Result<Option<usize>, NavigationError> {
        if self.len == 0 {
            return Ok(None);
        }

        let mut cursor = from;
        // A single skip index can never need more than `len` steps to clear.
        for _ in 0..=self.len {
            let candidate = self.single_step(cursor, direction);
            match self.skip_index {
                Some(skip_index) if skip_index == candidate => {
                    if cursor == Some(candidate) {
                        break;
                    }
                    cursor = Some(candidate);
                }
                _ => return Ok(Some(candidate)),
            }
        }

        Err(NavigationError::InfiniteLoop {
            skip_index: self.skip_index.unwrap_or_default(),
        })
    }

    fn single_step(&self, from: Option<usize>, direction: Direction) -> usize {
        let last = self.len - 1;
        match (direction, from) {
            (Direction::Right, None) => 0,
            (Direction::Right, Some(index)) if index >= last => self.loop_index,
            (Direction::Right, Some(index)) => index + 1,
            (Direction::Left, None) => last,
            (Direction::Left, Some(index)) if index == 0 || index == self.loop_index => last,
            (Direction::Left, Some(index)) => (index - 1).min(last),
        }
    }
}
