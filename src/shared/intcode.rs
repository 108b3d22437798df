// Intcode interpreter: a flat memory of integers holding both code and data,
// executed one fixed-width instruction at a time.

use anyhow::Error;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::convert::TryFrom;
use std::fmt;
use std::path::Path;

use super::input;

#[derive(Debug,thiserror::Error,PartialEq)]
pub enum IntcodeError {
    #[error("truncated instruction at {ip}: needs {needed} cells, {available} left")]
    Decode { ip: usize, needed: usize, available: usize },

    #[error("address {addr} out of bounds (program length {len})")]
    OutOfBounds { addr: isize, len: usize },

    #[error("invalid opcode {opcode} at {ip}")]
    InvalidOpcode { opcode: isize, ip: usize },

    #[error("arithmetic overflow computing {lhs} {op} {rhs}")]
    Overflow { lhs: isize, rhs: isize, op: char },
}

#[derive(Clone,Copy,Debug,FromPrimitive,PartialEq)]
pub enum Opcode {
    Add = 1,
    Multiply = 2,
    Halt = 99,
}

impl Opcode {
    // Number of cells the instruction occupies, opcode included.
    pub fn width(self) -> usize {
        match self {
            Opcode::Add | Opcode::Multiply => 4,
            Opcode::Halt => 1,
        }
    }
}

// A decoded instruction. For Halt the operand fields are zero and unused.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub lhs: isize,
    pub rhs: isize,
    pub dest: isize,
}

impl Instruction {
    pub fn halt() -> Self {
        Instruction { opcode: Opcode::Halt, lhs: 0, rhs: 0, dest: 0 }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.opcode {
            Opcode::Halt => write!(f, "HALT"),
            Opcode::Add => write!(f, "ADD [{}] [{}] -> [{}]",
                                  self.lhs, self.rhs, self.dest),
            Opcode::Multiply => write!(f, "MUL [{}] [{}] -> [{}]",
                                       self.lhs, self.rhs, self.dest),
        }
    }
}

#[derive(Clone,PartialEq)]
pub struct Program {
    cells: Vec<isize>,
}

impl Program {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_string(&input::read_file(path)?)
    }

    pub fn from_string(text: &str) -> Result<Self, Error> {
        Ok(Self::from(input::parse_comma_separated::<isize>(text)?))
    }

    #[allow(dead_code)]
    pub fn cells(&self) -> &[isize] {
        &self.cells
    }

    // Checks that a cell value used as an address refers to a real cell.
    fn address(&self, addr: isize) -> Result<usize, IntcodeError> {
        match usize::try_from(addr) {
            Ok(index) if index < self.cells.len() => Ok(index),
            _ => Err(IntcodeError::OutOfBounds { addr, len: self.cells.len() }),
        }
    }

    pub fn get(&self, addr: isize) -> Result<isize, IntcodeError> {
        Ok(self.cells[self.address(addr)?])
    }

    pub fn set(&mut self, addr: isize, value: isize) -> Result<(), IntcodeError> {
        let index = self.address(addr)?;
        self.cells[index] = value;
        Ok(())
    }

    pub fn decode(&self, ip: usize) -> Result<Instruction, IntcodeError> {
        let available = self.cells.len().saturating_sub(ip);
        if available == 0 {
            return Err(IntcodeError::Decode { ip, needed: 1, available });
        }
        let raw = self.cells[ip];
        if raw == Opcode::Halt as isize {
            return Ok(Instruction::halt());
        }

        // Every non-halt opcode is read as a full binary instruction before
        // the opcode itself is checked.
        let needed = Opcode::Add.width();
        if available < needed {
            return Err(IntcodeError::Decode { ip, needed, available });
        }
        let opcode = Opcode::from_isize(raw)
            .ok_or(IntcodeError::InvalidOpcode { opcode: raw, ip })?;
        Ok(Instruction {
            opcode,
            lhs: self.cells[ip+1],
            rhs: self.cells[ip+2],
            dest: self.cells[ip+3],
        })
    }

    // Reads both operands, combines them, and stores the result at the
    // destination. No other cell is touched, and nothing is written if any
    // step fails.
    pub fn execute_binary<F>(&mut self, inst: &Instruction,
                             combine: F) -> Result<(), IntcodeError>
        where F: Fn(isize, isize) -> Result<isize, IntcodeError>
    {
        let lhs = self.get(inst.lhs)?;
        let rhs = self.get(inst.rhs)?;
        let dest = self.address(inst.dest)?;
        self.cells[dest] = combine(lhs, rhs)?;
        Ok(())
    }
}

impl From<Vec<isize>> for Program {
    fn from(cells: Vec<isize>) -> Self {
        Program { cells }
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.cells.iter()
                                  .map(|i| i.to_string())
                                  .collect::<Vec<String>>()
                                  .join(","))
    }
}

fn add(lhs: isize, rhs: isize) -> Result<isize, IntcodeError> {
    lhs.checked_add(rhs).ok_or(IntcodeError::Overflow { lhs, rhs, op: '+' })
}

fn multiply(lhs: isize, rhs: isize) -> Result<isize, IntcodeError> {
    lhs.checked_mul(rhs).ok_or(IntcodeError::Overflow { lhs, rhs, op: '*' })
}

#[derive(Clone,Copy,Debug,PartialEq)]
pub enum State {
    Running,
    Halted,
}

// Executes a private copy of a program.
#[derive(Clone,Debug)]
pub struct Simulator {
    memory: Program,
    ip: usize,
    state: State,
}

impl Simulator {
    pub fn with_program(program: &Program) -> Self {
        Simulator {
            memory: program.clone(),
            ip: 0,
            state: State::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    #[allow(dead_code)]
    pub fn ip(&self) -> usize {
        self.ip
    }

    #[allow(dead_code)]
    pub fn program(&self) -> &Program {
        &self.memory
    }

    pub fn peek(&self, addr: isize) -> Result<isize, IntcodeError> {
        self.memory.get(addr)
    }

    pub fn poke(&mut self, addr: isize, value: isize) -> Result<(), IntcodeError> {
        self.memory.set(addr, value)
    }

    // Executes one instruction. Once halted, the program is never decoded
    // again.
    pub fn step(&mut self) -> Result<State, IntcodeError> {
        if !self.is_running() {
            return Ok(self.state);
        }
        let inst = self.memory.decode(self.ip)?;
        log::trace!("ip={} {} | {:?}", self.ip, inst, self.memory);
        match inst.opcode {
            Opcode::Add => self.memory.execute_binary(&inst, add)?,
            Opcode::Multiply => self.memory.execute_binary(&inst, multiply)?,
            Opcode::Halt => {
                self.state = State::Halted;
                return Ok(self.state);
            },
        }
        self.ip += inst.opcode.width();
        Ok(self.state)
    }

    // Runs until halt. Results are left in memory for the caller to peek.
    pub fn run(&mut self) -> Result<(), IntcodeError> {
        while self.is_running() {
            self.step()?;
        }
        Ok(())
    }
}
