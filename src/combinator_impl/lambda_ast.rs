//! Data structure for parsed lambda calculus expressions, and the formatter
//! that renders them with explicit bracketing.

/// Represents a lambda-calculus expression.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LExpr {
    Variable {
        var_name: String,
    },
    Application {
        fn_expr: Box<LExpr>,
        arg_expr: Box<LExpr>,
    },
    Abstraction {
        bound_var: String,
        body: Box<LExpr>,
    },
}

impl LExpr {
    pub fn variable(var_name: &str) -> LExpr {
        return LExpr::Variable {
            var_name: String::from(var_name),
        };
    }

    pub fn application(fn_expr: LExpr, arg_expr: LExpr) -> LExpr {
        return LExpr::Application {
            fn_expr: Box::new(fn_expr),
            arg_expr: Box::new(arg_expr),
        };
    }

    pub fn abstraction(bound_var: &str, body: LExpr) -> LExpr {
        return LExpr::Abstraction {
            bound_var: String::from(bound_var),
            body: Box::new(body),
        };
    }
}

// Helper function to produce the bracketed string form of an LExpr.
fn format_expr_helper(expr: &LExpr, string_so_far: &mut String) {
    match expr {
        LExpr::Variable { var_name } => {
            string_so_far.push_str(var_name.as_str());
        }
        LExpr::Application { fn_expr, arg_expr } => {
            string_so_far.push_str("({");
            format_expr_helper(fn_expr, string_so_far);
            string_so_far.push_str("} {");
            format_expr_helper(arg_expr, string_so_far);
            string_so_far.push_str("})");
        }
        LExpr::Abstraction { bound_var, body } => {
            string_so_far.push_str(format!("λ {}.[", bound_var.as_str()).as_str());
            format_expr_helper(body, string_so_far);
            string_so_far.push(']');
        }
    };
}

/// Renders an expression so that associativity and binding are visible:
/// application operands in `{}` and abstraction bodies in `[]`.
///
/// The output is meant for inspection and is not parseable again.
pub fn format_expr(expr: &LExpr) -> String {
    let mut out_string = String::new();
    format_expr_helper(expr, &mut out_string);
    return out_string;
}

impl std::fmt::Display for LExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", format_expr(self).as_str());
    }
}
