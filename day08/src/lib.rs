use std::collections::HashMap;

use log::{debug, trace};

// Fixed-width node line: `AAA = (BBB, CCC)`
/// Node label.
const LABEL: std::ops::Range<usize> = 0..3;
/// Successor taken on `L`.
const LEFT: std::ops::Range<usize> = 7..10;
/// Successor taken on anything else.
const RIGHT: std::ops::Range<usize> = 12..15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
}

impl From<u8> for Dir {
    fn from(b: u8) -> Self {
        if b == b'L' { Dir::Left } else { Dir::Right }
    }
}

pub struct Network<'r> {
    tape: Vec<Dir>,
    nodes: HashMap<&'r str, (&'r str, &'r str)>,
}

impl<'r> Network<'r> {
    fn parse_line(line: &'r str) -> Option<(&'r str, (&'r str, &'r str))> {
        Some((line.get(LABEL)?, (line.get(LEFT)?, line.get(RIGHT)?)))
    }

    /// Parses the tape line, a blank separator and one node per line.
    ///
    /// Returns `None` if the tape is empty or a node line is too short to slice.
    pub fn parse(input: &'r str) -> Option<Self> {
        let mut lines = input.lines();
        let tape = lines
            .next()?
            .as_bytes()
            .iter()
            .map(|&b| Dir::from(b))
            .collect::<Vec<_>>();
        if tape.is_empty() {
            return None;
        }
        let nodes = lines
            .filter(|line| !line.is_empty())
            .map(Self::parse_line)
            .collect::<Option<HashMap<_, _>>>()?;
        debug!("tape: {}, nodes: {}", tape.len(), nodes.len());
        Some(Self { tape, nodes })
    }

    pub fn tape(&self) -> &[Dir] {
        &self.tape
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<(&'r str, &'r str)> {
        self.nodes.get(label).copied()
    }

    pub fn successor(&self, label: &str, dir: Dir) -> Option<&'r str> {
        let (left, right) = self.get(label)?;
        match dir {
            Dir::Left => Some(left),
            Dir::Right => Some(right),
        }
    }

    pub fn walk<'n>(&'n self, start: &'r str) -> Walk<'n, 'r> {
        Walk {
            network: self,
            current: Some(start),
            step: 0,
        }
    }

    /// Counts steps from `start` until `terminal` is reached.
    ///
    /// Never returns if `terminal` is unreachable along the tape-driven path.
    /// Returns `None` if the walk hits a label with no node line.
    pub fn steps(&self, start: &'r str, terminal: &str) -> Option<usize> {
        self.walk(start).position(|node| node == terminal)
    }
}

/// Labels visited by following the tape cyclically, starting with the start label.
pub struct Walk<'n, 'r> {
    network: &'n Network<'r>,
    current: Option<&'r str>,
    step: usize,
}

impl<'n, 'r> Iterator for Walk<'n, 'r> {
    type Item = &'r str;

    fn next(&mut self) -> Option<&'r str> {
        let current = self.current?;
        let tape = self.network.tape();
        let dir = tape[self.step % tape.len()];
        self.current = self.network.successor(current, dir);
        trace!("{}: {} {:?} -> {:?}", self.step, current, dir, self.current);
        self.step += 1;
        Some(current)
    }
}
