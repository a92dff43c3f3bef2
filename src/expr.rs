use crate::error::Reporter;
use crate::literal::Literal;
use crate::stmt::Stmt;
use crate::token::Token;

/// An expression node. Each variant wraps a `*Data` struct holding its
/// fields; dispatch goes through [`Expr::accept`] into an [`ExprVisitor`]
/// rather than a `run_against`-style double dispatch.
#[derive(Debug, Clone)]
pub enum Expr {
    Literal(Literal),
    Grouping(GroupingData),
    Unary(UnaryData),
    Binary(BinaryData),
    Logical(LogicalData),
    Variable(VariableData),
    Assign(AssignData),
    Call(CallData),
    Get(GetData),
    Set(SetData),
    This(ThisData),
    Super(SuperData),
    AnonFunction(AnonFunctionData),
}

#[derive(Debug, Clone)]
pub struct GroupingData {
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct UnaryData {
    pub operator: Token,
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct BinaryData {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct LogicalData {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct VariableData {
    pub name: Token,
}

#[derive(Debug, Clone)]
pub struct AssignData {
    pub name: Token,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct CallData {
    pub callee: Box<Expr>,
    pub paren: Token,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct GetData {
    pub object: Box<Expr>,
    pub name: Token,
}

#[derive(Debug, Clone)]
pub struct SetData {
    pub object: Box<Expr>,
    pub name: Token,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct ThisData {
    pub keyword: Token,
}

#[derive(Debug, Clone)]
pub struct SuperData {
    pub keyword: Token,
    pub method: Token,
}

/// A `fun (params) { body }` expression with no name of its own.
#[derive(Debug, Clone)]
pub struct AnonFunctionData {
    pub keyword: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

impl Expr {
    pub fn accept<R>(&self, visitor: &mut dyn ExprVisitor<R>, reporter: &mut dyn Reporter) -> R {
        match self {
            Expr::Literal(_) => visitor.visit_literal_expr(self, reporter),
            Expr::Grouping(_) => visitor.visit_grouping_expr(self, reporter),
            Expr::Unary(_) => visitor.visit_unary_expr(self, reporter),
            Expr::Binary(_) => visitor.visit_binary_expr(self, reporter),
            Expr::Logical(_) => visitor.visit_logical_expr(self, reporter),
            Expr::Variable(_) => visitor.visit_variable_expr(self, reporter),
            Expr::Assign(_) => visitor.visit_assign_expr(self, reporter),
            Expr::Call(_) => visitor.visit_call_expr(self, reporter),
            Expr::Get(_) => visitor.visit_get_expr(self, reporter),
            Expr::Set(_) => visitor.visit_set_expr(self, reporter),
            Expr::This(_) => visitor.visit_this_expr(self, reporter),
            Expr::Super(_) => visitor.visit_super_expr(self, reporter),
            Expr::AnonFunction(_) => visitor.visit_anon_function_expr(self, reporter),
        }
    }
}

pub trait ExprVisitor<R> {
    fn visit_literal_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> R;
    fn visit_grouping_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> R;
    fn visit_unary_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> R;
    fn visit_binary_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> R;
    fn visit_logical_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> R;
    fn visit_variable_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> R;
    fn visit_assign_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> R;
    fn visit_call_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> R;
    fn visit_get_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> R;
    fn visit_set_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> R;
    fn visit_this_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> R;
    fn visit_super_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> R;
    fn visit_anon_function_expr(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> R;
}
