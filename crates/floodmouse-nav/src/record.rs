//! Ordered record of the physical commands issued during a run.

use floodmouse_core::Command;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Every turn and move sent to the robot, in order.
///
/// Two runs fed the same sensor readings produce equal logs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandLog {
    commands: Vec<Command>,
}

impl CommandLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command.
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// The recorded commands.
    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of forward moves.
    pub fn moves(&self) -> usize {
        self.commands.iter().filter(|c| c.is_move()).count()
    }

    /// Number of turns.
    pub fn turns(&self) -> usize {
        self.len() - self.moves()
    }

    /// FNV-1a hash over the command tags.
    pub fn hash(&self) -> u64 {
        self.commands.iter().fold(FNV_OFFSET, |h, c| {
            (h ^ c.tag() as u64).wrapping_mul(FNV_PRIME)
        })
    }
}

impl<'a> IntoIterator for &'a CommandLog {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
