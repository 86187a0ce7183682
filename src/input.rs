//! Interactive workload entry
//!
//! Prompts for the number of blocks, each block size, the number of
//! processes and each process size. Answers are whitespace-separated
//! integers, so a whole workload can also be piped in on one line.

use crate::config::Workload;
use crate::error::{Result, SimError};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Reads integer answers from `input`, writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Print `prompt` (no newline) and read the next integer
    pub fn ask(&mut self, prompt: &str, what: &str) -> Result<u64> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.next_number(what)
    }

    /// Print a full line
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn next_number(&mut self, what: &str) -> Result<u64> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SimError::UnexpectedEof(what.to_string()));
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }

        // Loop above guarantees a token
        let token = self.pending.pop_front().unwrap_or_default();
        token.parse::<u64>().map_err(|_| {
            SimError::InvalidInput(format!(
                "expected a non-negative integer for {}, got '{}'",
                what, token
            ))
        })
    }

    /// Ask for a count, then one value per item
    fn ask_list(&mut self, count_prompt: &str, header: &str, item: &str) -> Result<Vec<u64>> {
        let count = self.ask(count_prompt, &format!("{} count", item.to_lowercase()))?;
        let count = usize::try_from(count)
            .map_err(|_| SimError::InvalidInput(format!("{} count too large", item)))?;

        self.say(header)?;
        let mut values = Vec::with_capacity(count.min(1024));
        for i in 1..=count {
            let value = self.ask(
                &format!("{} {}: ", item, i),
                &format!("{} {}", item.to_lowercase(), i),
            )?;
            values.push(value);
        }
        Ok(values)
    }

    /// Run the full dialogue and return a validated workload
    pub fn read_workload(&mut self) -> Result<Workload> {
        let block_sizes = self.ask_list(
            "Enter the number of memory blocks: ",
            "Enter the memory block sizes:",
            "Block",
        )?;
        let process_sizes = self.ask_list(
            "Enter the number of processes: ",
            "Enter the process sizes:",
            "Process",
        )?;
        Workload::new(block_sizes, process_sizes)
    }
}

/// Prompt on `output` and read a workload from `input`
pub fn read_workload<R: BufRead, W: Write>(input: R, output: W) -> Result<Workload> {
    Prompter::new(input, output).read_workload()
}
