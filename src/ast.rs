#![allow(dead_code)]

use crate::error::{Reporter, RecordingReporter};
use crate::expr::{Expr, ExprVisitor};
use crate::stmt::{Stmt, StmtVisitor};

/// Returns a parenthesized string representation of the expression.
macro_rules! parenthesize {
    ( $self:ident, $reporter:ident, $name:expr, $( $x:expr ),+ ) => {
        {
            let mut string = String::new();
            string += "(";
            string += $name;
            $(
                string += " ";
                string += &$x.accept($self, $reporter);
            )*
            string += ")";

            string
        }
    };
}

/// Debug pretty-printer for the AST, in the style of the book's
/// `AstPrinter`. Not on the interpreter's hot path; used by tests.
#[derive(Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        let mut sink = RecordingReporter::new();
        expr.accept(self, &mut sink)
    }

    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        let mut sink = RecordingReporter::new();
        stmt.accept(self, &mut sink)
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_literal_expr(&mut self, expr: &Expr, _reporter: &mut dyn Reporter) -> String {
        let Expr::Literal(literal) = expr else { unreachable!() };
        literal.to_string()
    }

    fn visit_grouping_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> String {
        let Expr::Grouping(data) = expr else { unreachable!() };
        parenthesize!(self, reporter, "group", data.expr)
    }

    fn visit_unary_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> String {
        let Expr::Unary(data) = expr else { unreachable!() };
        parenthesize!(self, reporter, &data.operator.lexeme, data.expr)
    }

    fn visit_binary_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> String {
        let Expr::Binary(data) = expr else { unreachable!() };
        parenthesize!(self, reporter, &data.operator.lexeme, data.left, data.right)
    }

    fn visit_logical_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> String {
        let Expr::Logical(data) = expr else { unreachable!() };
        parenthesize!(self, reporter, &data.operator.lexeme, data.left, data.right)
    }

    fn visit_variable_expr(&mut self, expr: &Expr, _reporter: &mut dyn Reporter) -> String {
        let Expr::Variable(data) = expr else { unreachable!() };
        data.name.lexeme.clone()
    }

    fn visit_assign_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> String {
        let Expr::Assign(data) = expr else { unreachable!() };
        parenthesize!(self, reporter, &format!("= {}", data.name.lexeme), data.value)
    }

    fn visit_call_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> String {
        let Expr::Call(data) = expr else { unreachable!() };
        let mut string = data.callee.accept(self, reporter);
        string += "(";
        string += &data.arguments.iter().map(|arg| arg.accept(self, reporter)).collect::<Vec<String>>().join(" ");
        string += ")";
        string
    }

    fn visit_get_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> String {
        let Expr::Get(data) = expr else { unreachable!() };
        format!("(. {} {})", data.object.accept(self, reporter), data.name.lexeme)
    }

    fn visit_set_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> String {
        let Expr::Set(data) = expr else { unreachable!() };
        format!("(= (. {} {}) {})", data.object.accept(self, reporter), data.name.lexeme, data.value.accept(self, reporter))
    }

    fn visit_this_expr(&mut self, _expr: &Expr, _reporter: &mut dyn Reporter) -> String {
        "this".to_string()
    }

    fn visit_super_expr(&mut self, expr: &Expr, _reporter: &mut dyn Reporter) -> String {
        let Expr::Super(data) = expr else { unreachable!() };
        format!("(super {})", data.method.lexeme)
    }

    fn visit_anon_function_expr(&mut self, expr: &Expr, _reporter: &mut dyn Reporter) -> String {
        let Expr::AnonFunction(data) = expr else { unreachable!() };
        format!("(fun ({}))", data.params.iter().map(|p| p.lexeme.as_str()).collect::<Vec<&str>>().join(" "))
    }
}

impl StmtVisitor<String> for AstPrinter {
    fn visit_expression_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> String {
        let Stmt::Expression(data) = stmt else { unreachable!() };
        parenthesize!(self, reporter, "expr", data.expr)
    }

    fn visit_print_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> String {
        let Stmt::Print(data) = stmt else { unreachable!() };
        parenthesize!(self, reporter, "print", data.expr)
    }

    fn visit_var_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> String {
        let Stmt::Var(data) = stmt else { unreachable!() };
        let mut string = format!("(var {}", data.name.lexeme);
        if let Some(initializer) = &data.initializer {
            string += " = ";
            string += &initializer.accept(self, reporter);
        }
        string += ")";
        string
    }

    fn visit_block_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> String {
        let Stmt::Block(data) = stmt else { unreachable!() };
        let mut string = "{".to_string();
        for stmt in &data.statements {
            string += " ";
            string += &stmt.accept(self, reporter);
        }
        string += " }";
        string
    }

    fn visit_if_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> String {
        let Stmt::If(data) = stmt else { unreachable!() };
        let mut string = format!("(if {} {}", data.condition.accept(self, reporter), data.then_branch.accept(self, reporter));
        if let Some(else_branch) = &data.else_branch {
            string += " else ";
            string += &else_branch.accept(self, reporter);
        }
        string += ")";
        string
    }

    fn visit_while_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> String {
        let Stmt::While(data) = stmt else { unreachable!() };
        parenthesize!(self, reporter, "while", data.condition, data.body)
    }

    fn visit_break_stmt(&mut self, _stmt: &Stmt, _reporter: &mut dyn Reporter) -> String {
        "(break)".to_string()
    }

    fn visit_return_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> String {
        let Stmt::Return(data) = stmt else { unreachable!() };
        match &data.value {
            Some(value) => format!("(return {})", value.accept(self, reporter)),
            None => "(return)".to_string(),
        }
    }

    fn visit_function_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> String {
        let Stmt::Function(data) = stmt else { unreachable!() };
        let params = data.params.iter().map(|p| p.lexeme.as_str()).collect::<Vec<&str>>().join(" ");
        let body = data.body.iter().map(|stmt| stmt.accept(self, reporter)).collect::<Vec<String>>().join(" ");
        format!("(fun {}({}) {{ {} }})", data.name.lexeme, params, body)
    }

    fn visit_class_stmt(&mut self, stmt: &Stmt, reporter: &mut dyn Reporter) -> String {
        let Stmt::Class(data) = stmt else { unreachable!() };
        let methods = data.methods.iter().map(|m| m.accept(self, reporter)).collect::<Vec<String>>().join(" ");
        format!("(class {} {{ {} }})", data.name.lexeme, methods)
    }
}
