const BASE_PATTERN: [i32; 4] = [0, 1, 0, -1];

/// The first value of the repeated pattern is always skipped.
const PATTERN_OFFSET: usize = 1;

/// Multiplier stream for one output position of a phase.
///
/// Each value of [`BASE_PATTERN`] is repeated `seq` times and the stream
/// starts one step in. `seq` is the output index plus one. The generator is a
/// plain `Copy` value so a phase can thread it through explicitly, or hand a
/// fresh one to each output position when computing them independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternGenerator {
    pos: usize,
    seq: usize,
}

impl Default for PatternGenerator {
    fn default() -> Self {
        PatternGenerator { pos: 0, seq: 1 }
    }
}

impl PatternGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator positioned at the start of output `index`.
    pub fn for_output(index: usize) -> Self {
        PatternGenerator {
            pos: 0,
            seq: index + 1,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn seq(&self) -> usize {
        self.seq
    }

    pub fn next_value(&mut self) -> i32 {
        let idx = (self.pos + PATTERN_OFFSET) / self.seq % BASE_PATTERN.len();
        self.pos += 1;
        BASE_PATTERN[idx]
    }

    pub fn advance_to_next_output(&mut self) {
        self.pos = 0;
        self.seq += 1;
    }
}

impl Iterator for PatternGenerator {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        Some(self.next_value())
    }
}
