//! Interactive agent reading moves from a line-based input

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::debug;

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{BoardState, Player},
};

/// Agent backed by a person typing square numbers.
///
/// Prompts until the input names an empty square. Non-numeric, out-of-range
/// and occupied squares are rejected with a message and the prompt repeats.
pub struct HumanAgent<R, W> {
    mark: Player,
    name: String,
    input: R,
    output: W,
}

impl HumanAgent<StdinLock<'static>, Stdout> {
    /// Human agent on the process's stdin/stdout
    pub fn stdio(mark: Player) -> Self {
        Self::new(mark, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(mark: Player, input: R, output: W) -> Self {
        Self {
            mark,
            name: format!("Human ({mark})"),
            input,
            output,
        }
    }

    /// Give back the output sink, e.g. to inspect prompts in tests
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.output, "{}'s turn. Input move (0-8): ", self.mark)
            .and_then(|_| self.output.flush())
            .map_err(|e| Error::io("write prompt", e))
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn get_move(&mut self, state: &BoardState) -> Result<usize> {
        let available = state.available_moves();
        if available.is_empty() {
            return Err(Error::NoValidMoves);
        }

        loop {
            self.prompt()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| Error::io("read move", e))?;
            if read == 0 {
                return Err(Error::InputClosed);
            }

            match line.trim().parse::<usize>() {
                Ok(position) if available.contains(&position) => return Ok(position),
                _ => {
                    debug!(input = line.trim(), "rejected square");
                    writeln!(self.output, "Invalid square. Try again.")
                        .map_err(|e| Error::io("write prompt", e))?;
                }
            }
        }
    }

    fn mark(&self) -> Player {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
