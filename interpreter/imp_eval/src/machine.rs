//! Reduction machine driver.
//!
//! The machine repeatedly applies the reducer until the current term is
//! terminal. There is no step bound: a program whose loop condition never
//! becomes false keeps the machine in `Running` forever, which is correct
//! behavior for this semantics, not a defect to guard against.

use tracing::trace;

use imp_ir::Term;

use crate::environment::Environment;
use crate::errors::EvalError;
use crate::reduce::reduce;
use crate::trace::TraceHandler;

/// Machine execution state.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MachineState {
    /// The current term is reducible; `step` makes progress.
    Running,
    /// The current term is terminal; the run is complete.
    Terminal,
}

/// Driver that reduces a term to fixpoint over one environment.
pub struct Machine {
    term: Term,
    env: Environment,
    handler: TraceHandler,
}

impl Machine {
    /// Create a machine with trace output discarded.
    pub fn new(term: Term, env: Environment) -> Self {
        Machine::with_trace(term, env, TraceHandler::Silent)
    }

    /// Create a machine emitting each intermediate state to `handler`.
    pub fn with_trace(term: Term, env: Environment, handler: TraceHandler) -> Self {
        Machine { term, env, handler }
    }

    /// Current execution state.
    pub fn state(&self) -> MachineState {
        if self.term.reducible() {
            MachineState::Running
        } else {
            MachineState::Terminal
        }
    }

    /// The current term.
    pub fn term(&self) -> &Term {
        &self.term
    }

    /// The environment threaded through this run.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// The trace handler, for reading captured output after a run.
    pub fn trace_handler(&self) -> &TraceHandler {
        &self.handler
    }

    /// Apply the reducer once, replacing the current term.
    ///
    /// Fails with `InvalidReduceCall` if the machine is already `Terminal`.
    pub fn step(&mut self) -> Result<(), EvalError> {
        let next = reduce(&self.term, &mut self.env)?;
        trace!(term = %next, env = %self.env, "reduced");
        self.term = next;
        Ok(())
    }

    /// Reduce to fixpoint.
    ///
    /// Emits the structural rendering of `(term, environment)` through the
    /// trace handler before each step and once more after reaching
    /// `Terminal`, then returns the terminal term. An error aborts the run
    /// immediately; the environment keeps every assignment completed before
    /// the failing step.
    pub fn run(&mut self) -> Result<&Term, EvalError> {
        while self.state() == MachineState::Running {
            self.handler.record(&self.term, &self.env);
            self.step()?;
        }
        self.handler.record(&self.term, &self.env);
        Ok(&self.term)
    }

    /// Consume the machine, yielding the current term and environment.
    pub fn into_parts(self) -> (Term, Environment) {
        (self.term, self.env)
    }
}
