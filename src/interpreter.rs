use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::class::{Class, Instance};
use crate::environment::Environment;
use crate::error::{Reporter, RuntimeError};
use crate::expr::{Expr, ExprVisitor};
use crate::function::{AnonymousFunction, LoxFunction, NativeFunction};
use crate::literal::Literal;
use crate::stmt::{Stmt, StmtVisitor};
use crate::token::{Token, TokenKind};
use crate::value::{Callable, Value};

/// What fell out of executing a statement, carried in the `Ok` arm
/// alongside (never instead of) [`RuntimeError`] in the `Err` arm.
/// `execute_block` propagates `Break`/`Return` upward until a loop or
/// call frame consumes it; plain statements produce `None`.
#[derive(Debug, Clone)]
pub enum Signal {
    None,
    Break,
    Return(Value),
}

/// Walks the resolved AST, evaluating expressions and executing
/// statements against a chain of [`Environment`] frames.
pub struct Interpreter {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<u64, usize>,
}

impl Interpreter {
    pub fn new() -> Self {
        let globals = Rc::new(RefCell::new(Environment::new(None)));
        for native in NativeFunction::globals() {
            globals.borrow_mut().define(native.name, Value::from(native));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
        }
    }

    /// Records how many environment frames separate `token`'s reference
    /// from the scope that declares it. Called by the resolver, keyed by
    /// [`Token::id`] since tokens at the same lexical position are still
    /// distinct occurrences.
    pub fn resolve(&mut self, token: &Token, depth: usize) {
        self.locals.insert(token.id, depth);
    }

    pub fn interpret(&mut self, statements: &[Stmt], reporter: &mut dyn Reporter) {
        for statement in statements {
            if let Err(error) = self.execute(statement, reporter) {
                reporter.runtime_error(&error);
                return;
            }
        }
    }

    fn execute(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> Result<Signal, RuntimeError> {
        stmt.accept(self, reporter)
    }

    fn evaluate(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        expr.accept(self, reporter)
    }

    /// Executes `statements` in a fresh child of `environment`, restoring
    /// the interpreter's previous environment on every exit path,
    /// including an early return via `?` or a `Break`/`Return` signal.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>, reporter: &mut dyn Reporter) -> Result<Signal, RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, environment);

        let mut result = Ok(Signal::None);
        for statement in statements {
            match self.execute(statement, reporter) {
                Ok(Signal::None) => continue,
                other => {
                    result = other;
                    break;
                }
            }
        }

        self.environment = previous;
        result
    }

    fn lookup_variable(&mut self, name: &Token) -> Result<Value, RuntimeError> {
        match self.locals.get(&name.id) {
            Some(&depth) => self.environment.borrow().get_at(depth, name),
            None => self.globals.borrow().get(name),
        }
    }

    fn call_value(&mut self, callee: Value, paren: &Token, arguments: Vec<Value>, reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        match callee {
            Value::Function(function) => {
                self.check_arity(&function, paren, &arguments)?;
                function.call(self, reporter, arguments)
            }
            Value::AnonymousFunction(function) => {
                self.check_arity(&function, paren, &arguments)?;
                function.call(self, reporter, arguments)
            }
            Value::NativeFunction(function) => {
                self.check_arity(&function, paren, &arguments)?;
                function.call(self, reporter, arguments)
            }
            Value::Class(class) => {
                let arity = class.borrow().arity();
                if arguments.len() != arity {
                    return Err(RuntimeError::new(paren, format!("Expected {arity} arguments but got {}", arguments.len())));
                }

                let instance = Value::from(Instance::new(Rc::clone(&class)));
                if let Some(initializer) = class.borrow().find_method("init") {
                    initializer.bind(instance.clone()).call(self, reporter, arguments)?;
                }

                Ok(instance)
            }
            other => Err(RuntimeError::new(paren, format!("Cannot call a value of type '{}'", other.type_str()))),
        }
    }

    fn check_arity(&self, callable: &dyn Callable, paren: &Token, arguments: &[Value]) -> Result<(), RuntimeError> {
        if arguments.len() != callable.arity() {
            return Err(RuntimeError::new(paren, format!("Expected {} arguments but got {}", callable.arity(), arguments.len())));
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprVisitor<Result<Value, RuntimeError>> for Interpreter {
    fn visit_literal_expr(&mut self, expr: &Expr, _reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        let Expr::Literal(literal) = expr else { unreachable!() };
        Ok(Value::Literal(literal.clone()))
    }

    fn visit_grouping_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        let Expr::Grouping(data) = expr else { unreachable!() };
        self.evaluate(&data.expr, reporter)
    }

    fn visit_unary_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        let Expr::Unary(data) = expr else { unreachable!() };
        let right = self.evaluate(&data.expr, reporter)?;

        match data.operator.kind {
            TokenKind::Minus => (-right).ok_or_else(|| RuntimeError::new(&data.operator, "Operand must be a number")),
            TokenKind::Bang => Ok(!right),
            _ => unreachable!("unary operator {:?} should not reach the interpreter", data.operator.kind),
        }
    }

    fn visit_binary_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        let Expr::Binary(data) = expr else { unreachable!() };
        let left = self.evaluate(&data.left, reporter)?;
        let right = self.evaluate(&data.right, reporter)?;

        match data.operator.kind {
            TokenKind::Plus => (left + right).ok_or_else(|| RuntimeError::new(&data.operator, "Operands must be two numbers or two strings")),
            TokenKind::Minus => (left - right).ok_or_else(|| RuntimeError::new(&data.operator, "Operands must be numbers")),
            TokenKind::Star => (left * right).ok_or_else(|| RuntimeError::new(&data.operator, "Operands must be numbers")),
            TokenKind::Slash => match (&left, &right) {
                (Value::Literal(Literal::Number(_)), Value::Literal(Literal::Number(n))) if *n == 0.0 => {
                    Err(RuntimeError::new(&data.operator, "Can't divide by Zero"))
                }
                _ => (left / right).ok_or_else(|| RuntimeError::new(&data.operator, "Operands must be numbers")),
            },
            TokenKind::Greater => left.partial_cmp(&right).map(|o| Value::from(o.is_gt())).ok_or_else(|| RuntimeError::new(&data.operator, "Operands must be comparable")),
            TokenKind::GreaterEqual => left.partial_cmp(&right).map(|o| Value::from(o.is_ge())).ok_or_else(|| RuntimeError::new(&data.operator, "Operands must be comparable")),
            TokenKind::Less => left.partial_cmp(&right).map(|o| Value::from(o.is_lt())).ok_or_else(|| RuntimeError::new(&data.operator, "Operands must be comparable")),
            TokenKind::LessEqual => left.partial_cmp(&right).map(|o| Value::from(o.is_le())).ok_or_else(|| RuntimeError::new(&data.operator, "Operands must be comparable")),
            TokenKind::EqualEqual => Ok(Value::from(left == right)),
            TokenKind::BangEqual => Ok(Value::from(left != right)),
            _ => unreachable!("binary operator {:?} should not reach the interpreter", data.operator.kind),
        }
    }

    fn visit_logical_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        let Expr::Logical(data) = expr else { unreachable!() };
        let left = self.evaluate(&data.left, reporter)?;

        match data.operator.kind {
            TokenKind::Or if left.as_bool() => Ok(left),
            TokenKind::And if !left.as_bool() => Ok(left),
            _ => self.evaluate(&data.right, reporter),
        }
    }

    fn visit_variable_expr(&mut self, expr: &Expr, _reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        let Expr::Variable(data) = expr else { unreachable!() };
        self.lookup_variable(&data.name)
    }

    fn visit_assign_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        let Expr::Assign(data) = expr else { unreachable!() };
        let value = self.evaluate(&data.value, reporter)?;

        match self.locals.get(&data.name.id) {
            Some(&depth) => self.environment.borrow_mut().assign_at(depth, &data.name, value.clone()),
            None => self.globals.borrow_mut().assign(&data.name, value.clone())?,
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        let Expr::Call(data) = expr else { unreachable!() };

        let callee = self.evaluate(&data.callee, reporter)?;
        let mut arguments = Vec::with_capacity(data.arguments.len());
        for argument in &data.arguments {
            arguments.push(self.evaluate(argument, reporter)?);
        }

        self.call_value(callee, &data.paren, arguments, reporter)
    }

    fn visit_get_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        let Expr::Get(data) = expr else { unreachable!() };
        let object = self.evaluate(&data.object, reporter)?;

        match &object {
            Value::Instance(instance) => instance.borrow().get(&data.name, &object),
            other => Err(RuntimeError::new(&data.name, format!("Only instances have properties, found '{}'", other.type_str()))),
        }
    }

    fn visit_set_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        let Expr::Set(data) = expr else { unreachable!() };
        let object = self.evaluate(&data.object, reporter)?;

        let Value::Instance(instance) = &object else {
            return Err(RuntimeError::new(&data.name, format!("Only instances have fields, found '{}'", object.type_str())));
        };

        let value = self.evaluate(&data.value, reporter)?;
        instance.borrow_mut().set(&data.name, value.clone());
        Ok(value)
    }

    fn visit_this_expr(&mut self, expr: &Expr, _reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        let Expr::This(data) = expr else { unreachable!() };
        self.lookup_variable(&data.keyword)
    }

    fn visit_super_expr(&mut self, expr: &Expr, _reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        let Expr::Super(data) = expr else { unreachable!() };

        let depth = *self.locals.get(&data.keyword.id).expect("super to have been resolved");
        let superclass = self.environment.borrow().get_at(depth, &data.keyword)?;
        let Value::Class(superclass) = superclass else { unreachable!("'super' resolves to a class") };

        let this_token = Token::new(data.keyword.id, TokenKind::This, "this".to_string(), None, data.keyword.location);
        let this = self.environment.borrow().get_at(depth - 1, &this_token)?;

        match superclass.borrow().find_method(&data.method.lexeme) {
            Some(method) => Ok(Value::from(method.bind(this))),
            None => Err(RuntimeError::new(&data.method, format!("Undefined property '{}'", data.method.lexeme))),
        }
    }

    fn visit_anon_function_expr(&mut self, expr: &Expr, _reporter: &mut dyn Reporter) -> Result<Value, RuntimeError> {
        let Expr::AnonFunction(data) = expr else { unreachable!() };
        Ok(Value::from(AnonymousFunction {
            params: data.params.clone(),
            body: Rc::new(data.body.clone()),
            closure: Rc::clone(&self.environment),
        }))
    }
}

impl StmtVisitor<Result<Signal, RuntimeError>> for Interpreter {
    fn visit_expression_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> Result<Signal, RuntimeError> {
        let Stmt::Expression(data) = stmt else { unreachable!() };
        self.evaluate(&data.expr, reporter)?;
        Ok(Signal::None)
    }

    fn visit_print_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> Result<Signal, RuntimeError> {
        let Stmt::Print(data) = stmt else { unreachable!() };
        let value = self.evaluate(&data.expr, reporter)?;
        reporter.print(&value.to_string());
        Ok(Signal::None)
    }

    fn visit_var_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> Result<Signal, RuntimeError> {
        let Stmt::Var(data) = stmt else { unreachable!() };

        self.environment.borrow_mut().declare(&data.name.lexeme);
        if let Some(initializer) = &data.initializer {
            let value = self.evaluate(initializer, reporter)?;
            self.environment.borrow_mut().define(&data.name.lexeme, value);
        }

        Ok(Signal::None)
    }

    fn visit_block_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> Result<Signal, RuntimeError> {
        let Stmt::Block(data) = stmt else { unreachable!() };
        let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
        self.execute_block(&data.statements, environment, reporter)
    }

    fn visit_if_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> Result<Signal, RuntimeError> {
        let Stmt::If(data) = stmt else { unreachable!() };

        if self.evaluate(&data.condition, reporter)?.as_bool() {
            self.execute(&data.then_branch, reporter)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch, reporter)
        } else {
            Ok(Signal::None)
        }
    }

    fn visit_while_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> Result<Signal, RuntimeError> {
        let Stmt::While(data) = stmt else { unreachable!() };

        while self.evaluate(&data.condition, reporter)?.as_bool() {
            match self.execute(&data.body, reporter)? {
                Signal::None => continue,
                Signal::Break => break,
                signal @ Signal::Return(_) => return Ok(signal),
            }
        }

        Ok(Signal::None)
    }

    fn visit_break_stmt(&mut self, _stmt: &Stmt, _reporter: &mut dyn Reporter) -> Result<Signal, RuntimeError> {
        Ok(Signal::Break)
    }

    fn visit_return_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> Result<Signal, RuntimeError> {
        let Stmt::Return(data) = stmt else { unreachable!() };

        let value = match &data.value {
            Some(expr) => self.evaluate(expr, reporter)?,
            None => Value::NIL,
        };

        Ok(Signal::Return(value))
    }

    fn visit_function_stmt(&mut self, stmt: &Stmt, _reporter: &mut dyn Reporter) -> Result<Signal, RuntimeError> {
        let Stmt::Function(data) = stmt else { unreachable!() };

        let function = LoxFunction::new(stmt, Rc::clone(&self.environment), false);
        self.environment.borrow_mut().define(&data.name.lexeme, Value::from(function));

        Ok(Signal::None)
    }

    fn visit_class_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> Result<Signal, RuntimeError> {
        let Stmt::Class(data) = stmt else { unreachable!() };

        let superclass = match &data.superclass {
            Some(expr) => {
                let value = self.evaluate(expr, reporter)?;
                let Value::Class(class) = value else {
                    let Expr::Variable(variable) = expr else { unreachable!() };
                    return Err(RuntimeError::new(&variable.name, "Superclass must be a class"));
                };
                Some(class)
            }
            None => None,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, Value::NIL);

        let enclosing = if let Some(superclass) = &superclass {
            let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
            environment.borrow_mut().define("super", Value::from(Rc::clone(superclass)));
            Some(std::mem::replace(&mut self.environment, environment))
        } else {
            None
        };

        let mut methods = match &superclass {
            Some(superclass) => superclass.borrow().methods.clone(),
            None => HashMap::new(),
        };

        for method in &data.methods {
            let Stmt::Function(function_data) = method else { unreachable!() };
            let is_initializer = function_data.name.lexeme == "init";
            let function = LoxFunction::new(method, Rc::clone(&self.environment), is_initializer);
            methods.insert(function_data.name.lexeme.clone(), function);
        }

        if let Some(previous) = enclosing {
            self.environment = previous;
        }

        let class = Class::new(data.name.lexeme.clone(), superclass, methods);
        self.environment.borrow_mut().assign(&data.name, Value::from(Rc::new(RefCell::new(class))))?;

        Ok(Signal::None)
    }
}
