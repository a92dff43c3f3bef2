use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::token::Token;
use crate::value::Value;

/// A binding's storage state. Distinct from [`Value`] so that a variable
/// declared but not yet assigned (the self-reference window in
/// `var a = a;`) cannot be confused with any value the language itself
/// can produce. [`Environment::get`]/[`get_at`] raise a [`RuntimeError`]
/// if a lookup ever resolves to `Uninitialized` rather than handing it
/// back as [`Value::NIL`].
#[derive(Debug, Clone)]
enum Slot {
    Initialized(Value),
    Uninitialized,
}

/// One lexical scope frame. Frames form a chain via `enclosing`, walked
/// either linearly (`get`/`assign`, used for globals and unresolved
/// lookups) or by a resolver-computed distance (`get_at`/`assign_at`).
/// The chain is a DAG, never cyclic, since a closure can only capture an
/// already-existing enclosing frame.
#[derive(Debug, Clone)]
pub struct Environment {
    enclosing: Option<Rc<RefCell<Environment>>>,
    variables: HashMap<String, Slot>,
}

impl Environment {
    pub fn new(enclosing: Option<Rc<RefCell<Environment>>>) -> Self {
        Environment { enclosing, variables: HashMap::new() }
    }

    pub fn define(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), Slot::Initialized(value));
    }

    /// Reserves a slot for `name` without giving it a value, so a
    /// self-referencing initializer can find it at distance zero.
    pub fn declare(&mut self, name: &str) {
        self.variables.insert(name.to_string(), Slot::Uninitialized);
    }

    fn ancestor(&self, distance: usize) -> Rc<RefCell<Environment>> {
        let parent = self.enclosing.clone()
            .unwrap_or_else(|| panic!("enclosing environment to exist at depth 1"));
        let mut environment = Rc::clone(&parent);

        for i in 1..distance {
            let parent = environment.borrow().enclosing.clone()
                .unwrap_or_else(|| panic!("enclosing environment to exist at depth {i}"));
            environment = Rc::clone(&parent);
        }

        environment
    }

    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        if self.variables.contains_key(&name.lexeme) {
            self.variables.insert(name.lexeme.clone(), Slot::Initialized(value));
            return Ok(());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow_mut().assign(name, value);
        }

        Err(RuntimeError::new(name, format!("Undefined variable '{}'", name.lexeme)))
    }

    pub fn assign_at(&mut self, distance: usize, name: &Token, value: Value) {
        if distance > 0 {
            self.ancestor(distance).borrow_mut().variables.insert(name.lexeme.clone(), Slot::Initialized(value));
        } else {
            self.variables.insert(name.lexeme.clone(), Slot::Initialized(value));
        }
    }

    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        if let Some(slot) = self.variables.get(&name.lexeme) {
            return Self::resolve_slot(name, slot);
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow().get(name);
        }

        Err(RuntimeError::new(name, format!("Undefined variable '{}'", name.lexeme)))
    }

    pub fn get_at(&self, distance: usize, name: &Token) -> Result<Value, RuntimeError> {
        if distance > 0 {
            match self.ancestor(distance).borrow().variables.get(&name.lexeme) {
                Some(slot) => Self::resolve_slot(name, slot),
                None => Err(RuntimeError::new(name, format!("Undefined variable '{}'", name.lexeme))),
            }
        } else {
            match self.variables.get(&name.lexeme) {
                Some(slot) => Self::resolve_slot(name, slot),
                None => Err(RuntimeError::new(name, format!("Undefined variable '{}'", name.lexeme))),
            }
        }
    }

    fn resolve_slot(name: &Token, slot: &Slot) -> Result<Value, RuntimeError> {
        match slot {
            Slot::Initialized(value) => Ok(value.clone()),
            Slot::Uninitialized => Err(RuntimeError::new(name, format!("Uninitialized variable '{}'", name.lexeme))),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Literal;
    use crate::token::{Location, TokenKind};

    fn name_token(lexeme: &str) -> Token {
        Token::new(0, TokenKind::Identifier, lexeme.to_string(), None, Location::new(0, 0))
    }

    #[test]
    fn get_after_define() {
        let mut env = Environment::new(None);
        env.define("x", Value::Literal(Literal::Number(1.0)));
        assert_eq!(env.get(&name_token("x")).unwrap(), Value::Literal(Literal::Number(1.0)));
    }

    #[test]
    fn undefined_variable_is_runtime_error() {
        let env = Environment::new(None);
        assert!(env.get(&name_token("missing")).is_err());
    }

    #[test]
    fn uninitialized_slot_read_is_runtime_error() {
        let mut env = Environment::new(None);
        env.declare("a");
        assert!(env.get(&name_token("a")).is_err());
    }

    #[test]
    fn falls_through_to_enclosing_scope() {
        let global = Rc::new(RefCell::new(Environment::new(None)));
        global.borrow_mut().define("x", Value::Literal(Literal::Number(5.0)));
        let local = Environment::new(Some(Rc::clone(&global)));
        assert_eq!(local.get(&name_token("x")).unwrap(), Value::Literal(Literal::Number(5.0)));
    }

    #[test]
    fn get_at_distance_finds_ancestor() {
        let global = Rc::new(RefCell::new(Environment::new(None)));
        global.borrow_mut().define("x", Value::Literal(Literal::Number(5.0)));
        let middle = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&global)))));
        let local = Environment::new(Some(Rc::clone(&middle)));
        assert_eq!(local.get_at(2, &name_token("x")).unwrap(), Value::Literal(Literal::Number(5.0)));
    }
}
