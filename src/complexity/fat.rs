//! The fat score: an approximation of cyclomatic complexity for one function
//! body. Baseline 1, plus 1 for every branching, looping, or short-circuit
//! construct found anywhere in the subtree. Nested functions and closures
//! accrue to the enclosing function's score on purpose.

use syn::{visit::Visit, Arm, Block, Expr, Pat};

/// Score one function body. Always returns at least 1.
pub fn fat_score(block: &Block) -> u32 {
    let mut visitor = FatVisitor { fat: 1 };
    visitor.visit_block(block);
    visitor.fat
}

struct FatVisitor {
    fat: u32,
}

fn scores_expr(expr: &Expr) -> bool {
    match expr {
        Expr::If(_) | Expr::While(_) | Expr::Loop(_) | Expr::ForLoop(_) => true,
        Expr::Binary(binary) => is_short_circuit(&binary.op),
        _ => false,
    }
}

fn is_short_circuit(op: &syn::BinOp) -> bool {
    matches!(op, syn::BinOp::And(_) | syn::BinOp::Or(_))
}

impl<'ast> Visit<'ast> for FatVisitor {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        if scores_expr(expr) {
            self.fat += 1;
        }
        syn::visit::visit_expr(self, expr);
    }

    // Match arms count individually; the `_` arm is the default case and
    // contributes nothing.
    fn visit_arm(&mut self, arm: &'ast Arm) {
        if !matches!(arm.pat, Pat::Wild(_)) {
            self.fat += 1;
        }
        syn::visit::visit_arm(self, arm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{parse_quote, ItemFn};

    fn score(func: &ItemFn) -> u32 {
        fat_score(&func.block)
    }

    #[test]
    fn branch_free_function_scores_one() {
        let func: ItemFn = parse_quote! {
            fn add(a: u32, b: u32) -> u32 {
                let total = a + b;
                total
            }
        };
        assert_eq!(score(&func), 1);
    }

    #[test]
    fn if_with_and_and_else_if_scores_four() {
        let func: ItemFn = parse_quote! {
            fn check(a: bool, b: bool, c: bool) {
                if a && b {
                } else if c {
                }
            }
        };
        // base + if + && + else-if
        assert_eq!(score(&func), 4);
    }

    #[test]
    fn each_loop_kind_scores_once() {
        let func: ItemFn = parse_quote! {
            fn spin(items: Vec<u32>) {
                while running() {}
                loop {
                    break;
                }
                for item in items {}
            }
        };
        assert_eq!(score(&func), 4);
    }

    #[test]
    fn match_arms_count_without_the_wildcard() {
        let func: ItemFn = parse_quote! {
            fn classify(v: u32) -> &'static str {
                match v {
                    0 => "zero",
                    1 => "one",
                    _ => "many",
                }
            }
        };
        assert_eq!(score(&func), 3);
    }

    #[test]
    fn short_circuit_operators_score_per_occurrence() {
        let func: ItemFn = parse_quote! {
            fn gate(a: bool, b: bool, c: bool) -> bool {
                a && b || c
            }
        };
        assert_eq!(score(&func), 3);
    }

    #[test]
    fn non_short_circuit_binary_does_not_score() {
        let func: ItemFn = parse_quote! {
            fn mask(a: u8, b: u8) -> u8 {
                (a & b) | (a ^ b)
            }
        };
        assert_eq!(score(&func), 1);
    }

    #[test]
    fn nested_function_branches_accrue_to_the_enclosing_score() {
        let func: ItemFn = parse_quote! {
            fn outer(flag: bool) {
                fn inner(x: bool) {
                    if x {}
                }
                inner(flag);
            }
        };
        assert_eq!(score(&func), 2);
    }

    #[test]
    fn closure_branches_accrue_to_the_enclosing_score() {
        let func: ItemFn = parse_quote! {
            fn outer(values: Vec<u32>) -> Vec<u32> {
                values
                    .into_iter()
                    .filter(|v| if *v > 2 { true } else { false })
                    .collect()
            }
        };
        assert_eq!(score(&func), 2);
    }

    #[test]
    fn if_let_counts_as_a_conditional() {
        let func: ItemFn = parse_quote! {
            fn first(values: Vec<u32>) -> u32 {
                if let Some(v) = values.first() {
                    return *v;
                }
                0
            }
        };
        assert_eq!(score(&func), 2);
    }
}
