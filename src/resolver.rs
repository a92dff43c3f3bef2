use std::collections::HashMap;
use std::mem;

use crate::error::Reporter;
use crate::expr::{Expr, ExprVisitor};
use crate::interpreter::Interpreter;
use crate::stmt::{Stmt, StmtVisitor};
use crate::token::Token;

#[derive(Clone, Copy, PartialEq)]
enum FunctionType {
    None,
    Function,
    Initializer,
    Method,
}

#[derive(Clone, Copy, PartialEq)]
enum ClassType {
    None,
    Class,
    Subclass,
}

/// Walks the AST once, ahead of evaluation, to compute how many
/// environment frames separate each variable reference from the scope
/// that declares it. The depths it records (keyed by [`Token::id`]) are
/// what let the interpreter look a variable up in O(1) instead of
/// walking the environment chain on every read.
pub struct Resolver<'a> {
    interpreter: &'a mut Interpreter,
    scopes: Vec<HashMap<String, bool>>,
    current_function: FunctionType,
    current_class: ClassType,
    loop_depth: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(interpreter: &'a mut Interpreter) -> Self {
        Resolver {
            interpreter,
            scopes: vec![],
            current_function: FunctionType::None,
            current_class: ClassType::None,
            loop_depth: 0,
        }
    }

    pub fn resolve(&mut self, statements: &[Stmt], reporter: &mut dyn Reporter) {
        for statement in statements {
            self.resolve_stmt(statement, reporter);
        }
    }

    fn resolve_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) {
        expr.accept(self, reporter);
    }

    fn resolve_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) {
        stmt.accept(self, reporter);
    }

    fn resolve_function(&mut self, params: &[Token], body: &[Stmt], kind: FunctionType, reporter: &mut dyn Reporter) {
        let enclosing_function = mem::replace(&mut self.current_function, kind);
        let enclosing_loop_depth = mem::replace(&mut self.loop_depth, 0);

        self.begin_scope();
        for param in params {
            self.declare(param, reporter);
            self.define(param);
        }
        self.resolve(body, reporter);
        self.end_scope();

        self.current_function = enclosing_function;
        self.loop_depth = enclosing_loop_depth;
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    fn declare(&mut self, name: &Token, reporter: &mut dyn Reporter) {
        if self.scopes.is_empty() {
            return;
        }

        let scope = self.scopes.last_mut().expect("stack to be not empty");
        if scope.contains_key(&name.lexeme) {
            reporter.warning_token(name, &format!("A variable is already defined with name '{}' in this scope", name.lexeme));
        }
        scope.insert(name.lexeme.to_owned(), false);
    }

    fn define(&mut self, name: &Token) {
        if self.scopes.is_empty() {
            return;
        }

        self.scopes
            .last_mut()
            .expect("stack to be not empty")
            .insert(name.lexeme.to_owned(), true);
    }

    fn resolve_local(&mut self, name: &Token) {
        for (depth, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                self.interpreter.resolve(name, depth);
                return;
            }
        }
    }
}

impl<'a> ExprVisitor<()> for Resolver<'a> {
    fn visit_variable_expr(&mut self, expr: &Expr, _reporter: &mut dyn Reporter) {
        let Expr::Variable(data) = expr else { unreachable!() };
        self.resolve_local(&data.name);
    }

    fn visit_assign_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) {
        let Expr::Assign(data) = expr else { unreachable!() };
        self.resolve_expr(&data.value, reporter);
        self.resolve_local(&data.name);
    }

    fn visit_literal_expr(&mut self, _expr: &Expr, _reporter: &mut dyn Reporter) {}

    fn visit_logical_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) {
        let Expr::Logical(data) = expr else { unreachable!() };
        self.resolve_expr(&data.left, reporter);
        self.resolve_expr(&data.right, reporter);
    }

    fn visit_unary_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) {
        let Expr::Unary(data) = expr else { unreachable!() };
        self.resolve_expr(&data.expr, reporter);
    }

    fn visit_binary_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) {
        let Expr::Binary(data) = expr else { unreachable!() };
        self.resolve_expr(&data.left, reporter);
        self.resolve_expr(&data.right, reporter);
    }

    fn visit_grouping_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) {
        let Expr::Grouping(data) = expr else { unreachable!() };
        self.resolve_expr(&data.expr, reporter);
    }

    fn visit_call_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) {
        let Expr::Call(data) = expr else { unreachable!() };
        self.resolve_expr(&data.callee, reporter);
        for argument in &data.arguments {
            self.resolve_expr(argument, reporter);
        }
    }

    fn visit_get_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) {
        let Expr::Get(data) = expr else { unreachable!() };
        self.resolve_expr(&data.object, reporter);
    }

    fn visit_set_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) {
        let Expr::Set(data) = expr else { unreachable!() };
        self.resolve_expr(&data.value, reporter);
        self.resolve_expr(&data.object, reporter);
    }

    fn visit_this_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) {
        let Expr::This(data) = expr else { unreachable!() };

        if self.current_class == ClassType::None {
            reporter.error_token(&data.keyword, "Cannot use 'this' outside of a class");
            return;
        }

        self.resolve_local(&data.keyword);
    }

    fn visit_super_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) {
        let Expr::Super(data) = expr else { unreachable!() };

        match self.current_class {
            ClassType::Subclass => (),
            ClassType::None => reporter.error_token(&data.keyword, "Cannot use 'super' outside of a class"),
            ClassType::Class => reporter.error_token(&data.keyword, "Cannot use 'super' in a class with no superclass"),
        }

        self.resolve_local(&data.keyword);
    }

    fn visit_anon_function_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) {
        let Expr::AnonFunction(data) = expr else { unreachable!() };
        self.resolve_function(&data.params, &data.body, FunctionType::Function, reporter);
    }
}

impl<'a> StmtVisitor<()> for Resolver<'a> {
    fn visit_block_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) {
        let Stmt::Block(data) = stmt else { unreachable!() };
        self.begin_scope();
        self.resolve(&data.statements, reporter);
        self.end_scope();
    }

    fn visit_var_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) {
        let Stmt::Var(data) = stmt else { unreachable!() };

        self.declare(&data.name, reporter);
        if let Some(initializer) = &data.initializer {
            self.resolve_expr(initializer, reporter);
        }
        self.define(&data.name);
    }

    fn visit_function_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) {
        let Stmt::Function(data) = stmt else { unreachable!() };

        self.declare(&data.name, reporter);
        self.define(&data.name);

        self.resolve_function(&data.params, &data.body, FunctionType::Function, reporter);
    }

    fn visit_expression_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) {
        let Stmt::Expression(data) = stmt else { unreachable!() };
        self.resolve_expr(&data.expr, reporter);
    }

    fn visit_if_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) {
        let Stmt::If(data) = stmt else { unreachable!() };

        self.resolve_expr(&data.condition, reporter);
        self.resolve_stmt(&data.then_branch, reporter);
        if let Some(else_branch) = &data.else_branch {
            self.resolve_stmt(else_branch, reporter);
        }
    }

    fn visit_print_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) {
        let Stmt::Print(data) = stmt else { unreachable!() };
        self.resolve_expr(&data.expr, reporter);
    }

    fn visit_return_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) {
        let Stmt::Return(data) = stmt else { unreachable!() };

        if self.current_function == FunctionType::None {
            reporter.error_token(&data.keyword, "Cannot return from top-level code");
        }

        if let Some(value) = &data.value {
            if self.current_function == FunctionType::Initializer {
                reporter.error_token(&data.keyword, "Cannot return a value from an initializer");
                return;
            }

            self.resolve_expr(value, reporter);
        }
    }

    fn visit_break_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) {
        let Stmt::Break(data) = stmt else { unreachable!() };

        if self.loop_depth == 0 {
            reporter.error_token(&data.keyword, "Cannot break outside of a loop");
        }
    }

    fn visit_while_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) {
        let Stmt::While(data) = stmt else { unreachable!() };

        self.resolve_expr(&data.condition, reporter);

        self.loop_depth += 1;
        self.resolve_stmt(&data.body, reporter);
        self.loop_depth -= 1;
    }

    fn visit_class_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) {
        let Stmt::Class(data) = stmt else { unreachable!() };

        let enclosing_class = mem::replace(&mut self.current_class, ClassType::Class);

        self.declare(&data.name, reporter);
        self.define(&data.name);

        if let Some(superclass) = &data.superclass {
            let Expr::Variable(variable) = superclass else { unreachable!() };
            if data.name.lexeme == variable.name.lexeme {
                reporter.error_token(&variable.name, "A class cannot inherit from itself");
            }

            self.current_class = ClassType::Subclass;
            self.resolve_expr(superclass, reporter);

            self.begin_scope();
            self.scopes
                .last_mut()
                .expect("stack to be not empty")
                .insert("super".to_string(), true);
        }

        self.begin_scope();
        self.scopes
            .last_mut()
            .expect("stack to be not empty")
            .insert("this".to_string(), true);

        for method in &data.methods {
            let Stmt::Function(function) = method else { unreachable!() };
            let kind = if function.name.lexeme == "init" {
                FunctionType::Initializer
            } else {
                FunctionType::Method
            };
            self.resolve_function(&function.params, &function.body, kind, reporter);
        }

        self.end_scope();

        if data.superclass.is_some() {
            self.end_scope();
        }

        self.current_class = enclosing_class;
    }
}
