//! Leftmost derivation bookkeeping.
//!
//! The live sentential form starts as `[Program]`. Each applied production replaces the
//! leftmost nonterminal with the production's right-hand side and a snapshot of the new
//! form is appended to the trace.

use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::symbols::{nt, NonTerminal, Symbol};

/// A sequence of grammar symbols. Renders space separated, or `ε` when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SententialForm(pub Vec<Symbol>);

impl SententialForm {
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn is_sentence(&self) -> bool {
        self.0.iter().all(Symbol::is_terminal)
    }

    /// Index of the first nonterminal, if any remain.
    pub fn leftmost_nonterminal(&self) -> Option<(usize, NonTerminal)> {
        self.0
            .iter()
            .enumerate()
            .find_map(|(index, symbol)| symbol.as_nonterminal().map(|found| (index, found)))
    }
}

impl Display for SententialForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "ε");
        }

        let rendered = self
            .0
            .iter()
            .map(Symbol::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", rendered)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    form: SententialForm,
    steps: Vec<SententialForm>,
}

impl Default for Derivation {
    fn default() -> Self {
        Self::new()
    }
}

impl Derivation {
    pub fn new() -> Self {
        let start = SententialForm(vec![nt(NonTerminal::Program)]);
        Derivation {
            form: start.clone(),
            steps: vec![start],
        }
    }

    /// Replaces the leftmost nonterminal, which must be `nonterminal`, with `rhs`.
    ///
    /// An empty `rhs` is an ε-production and removes the nonterminal.
    ///
    /// # Errors
    ///
    /// Returns `DerivationMismatch` when the leftmost nonterminal is a different one or
    /// none is left. `position` is only used to locate that error.
    pub fn expand(
        &mut self,
        nonterminal: NonTerminal,
        rhs: &[Symbol],
        position: Position,
    ) -> Result<(), Error> {
        let index = match self.form.leftmost_nonterminal() {
            Some((index, found)) if found == nonterminal => index,
            other => {
                let leftmost = other
                    .map(|(_, found)| found.to_string())
                    .unwrap_or_else(|| String::from("absent"));
                return Err(Error::new(
                    ErrorImpl::DerivationMismatch {
                        rule: nonterminal,
                        leftmost,
                    },
                    position,
                ));
            }
        };

        let rest = self.form.0.split_off(index + 1);
        self.form.0.truncate(index);
        self.form.0.extend_from_slice(rhs);
        self.form.0.extend(rest);
        self.steps.push(self.form.clone());

        tracing::debug!("{} -> {}", nonterminal, SententialForm(rhs.to_vec()));
        Ok(())
    }

    pub fn steps(&self) -> &[SententialForm] {
        &self.steps
    }

    /// Number of productions applied so far.
    pub fn applied(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn current(&self) -> &SententialForm {
        &self.form
    }

    /// The final sentential form, once it contains only terminals.
    pub fn sentence(&self) -> Option<&SententialForm> {
        self.form.is_sentence().then_some(&self.form)
    }
}

impl Display for Derivation {
    /// One numbered line per step, starting at 1.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(f, "{:2}) {}", index + 1, step)?;
        }
        Ok(())
    }
}
