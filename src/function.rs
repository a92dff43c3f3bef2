use std::cell::RefCell;
use std::fmt::{self, Debug, Display};
use std::rc::Rc;

use crate::environment::Environment;
use crate::error::{Reporter, RuntimeError};
use crate::interpreter::{Interpreter, Signal};
use crate::stmt::Stmt;
use crate::token::{Location, Token, TokenKind};
use crate::value::{Callable, Value};

/// A named, declared-with-`fun` function or method, closing over the
/// environment active where it was declared.
#[derive(Debug, Clone)]
pub struct LoxFunction {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Rc<Vec<Stmt>>,
    pub closure: Rc<RefCell<Environment>>,
    pub is_initializer: bool,
}

impl LoxFunction {
    pub fn new(declaration: &Stmt, closure: Rc<RefCell<Environment>>, is_initializer: bool) -> Self {
        let Stmt::Function(data) = declaration else { panic!("LoxFunction::new requires a Stmt::Function") };
        LoxFunction {
            name: data.name.clone(),
            params: data.params.clone(),
            body: Rc::new(data.body.clone()),
            closure,
            is_initializer,
        }
    }

    /// Returns a copy of this function whose closure additionally binds
    /// `this` to `instance`. Binding happens on every property access
    /// rather than once at class construction, so each bound method gets
    /// its own small frame.
    pub fn bind(&self, instance: Value) -> LoxFunction {
        let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.closure)))));
        environment.borrow_mut().define("this", instance);

        LoxFunction {
            name: self.name.clone(),
            params: self.params.clone(),
            body: Rc::clone(&self.body),
            closure: environment,
            is_initializer: self.is_initializer,
        }
    }
}

impl PartialEq for LoxFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Rc::ptr_eq(&self.body, &other.body) && Rc::ptr_eq(&self.closure, &other.closure)
    }
}

impl Callable for LoxFunction {
    fn call(&self, interpreter: &mut Interpreter, reporter: &mut dyn Reporter, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.closure)))));

        for (param, arg) in self.params.iter().zip(arguments.into_iter()) {
            environment.borrow_mut().define(&param.lexeme, arg);
        }

        let signal = interpreter.execute_block(&self.body, environment, reporter)?;

        if self.is_initializer {
            return self.closure.borrow().get_at(0, &this_token());
        }

        match signal {
            Signal::Return(value) => Ok(value),
            _ => Ok(Value::NIL),
        }
    }

    fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Display for LoxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.name.lexeme)
    }
}

fn this_token() -> Token {
    Token::new(0, TokenKind::This, "this".to_string(), None, Location::new(0, 0))
}

/// A `fun (params) { body }` expression, identical to [`LoxFunction`] save
/// for having no name and never being a class initializer.
#[derive(Debug, Clone)]
pub struct AnonymousFunction {
    pub params: Vec<Token>,
    pub body: Rc<Vec<Stmt>>,
    pub closure: Rc<RefCell<Environment>>,
}

impl PartialEq for AnonymousFunction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body) && Rc::ptr_eq(&self.closure, &other.closure)
    }
}

impl Callable for AnonymousFunction {
    fn call(&self, interpreter: &mut Interpreter, reporter: &mut dyn Reporter, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.closure)))));

        for (param, arg) in self.params.iter().zip(arguments.into_iter()) {
            environment.borrow_mut().define(&param.lexeme, arg);
        }

        let signal = interpreter.execute_block(&self.body, environment, reporter)?;

        match signal {
            Signal::Return(value) => Ok(value),
            _ => Ok(Value::NIL),
        }
    }

    fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Display for AnonymousFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<anonymous function>")
    }
}

/// A host-provided function, such as `clock`, exposed to Lox code as a
/// callable global.
#[derive(Clone)]
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub function: fn(&mut Interpreter, Vec<Value>) -> Result<Value, RuntimeError>,
}

impl NativeFunction {
    pub fn globals() -> Vec<NativeFunction> {
        vec![
            NativeFunction {
                name: "clock",
                arity: 0,
                function: |_, _| {
                    let now = std::time::SystemTime::now()
                        .duration_since(std::time::UNIX_EPOCH)
                        .expect("system clock to be after the Unix epoch")
                        .as_secs_f64();
                    Ok(Value::from(now))
                },
            },
        ]
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Callable for NativeFunction {
    fn call(&self, interpreter: &mut Interpreter, _reporter: &mut dyn Reporter, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        (self.function)(interpreter, arguments)
    }

    fn arity(&self) -> usize {
        self.arity
    }
}

impl Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}

impl Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}
