use dpll_sat::{solve, Clause, DpllSolver, Formula, Literal, SolveStatus, Variable};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn var(name: &str) -> Variable {
    Variable::new(name)
}

fn fm<const N: usize>(clauses: [Clause; N]) -> Formula {
    Formula::from_iter(clauses)
}

fn cl<const N: usize>(lits: [Literal; N]) -> Clause {
    Clause::from_iter(lits)
}

mod scenarios {
    use super::*;

    #[test]
    fn single_positive_unit() {
        init_logger();
        let a = Literal::positive("a");
        let env = solve(&fm([cl([a])])).expect("satisfiable");
        assert_eq!(env.get(&var("a")), Some(true));
    }

    #[test]
    fn unit_and_its_negation() {
        init_logger();
        let a = Literal::positive("a");
        assert!(solve(&fm([cl([a.clone()]), cl([a.negate()])])).is_none());
    }

    #[test]
    fn units_propagate_through_implication() {
        init_logger();
        let (a, b, c) = (
            Literal::positive("a"),
            Literal::positive("b"),
            Literal::positive("c"),
        );
        let f = fm([cl([a]), cl([b.clone()]), cl([b.negate(), c])]);
        let env = solve(&f).expect("satisfiable");
        assert_eq!(env.get(&var("a")), Some(true));
        assert_eq!(env.get(&var("b")), Some(true));
        assert_eq!(env.get(&var("c")), Some(true));
    }

    #[test]
    fn single_negative_unit() {
        init_logger();
        let env = solve(&fm([cl([Literal::negative("a")])])).expect("satisfiable");
        assert_eq!(env.get(&var("a")), Some(false));
    }

    #[test]
    fn all_four_binary_clauses_unsat() {
        init_logger();
        let (a, b) = (Literal::positive("a"), Literal::positive("b"));
        let (na, nb) = (a.negate(), b.negate());
        let f = fm([
            cl([a.clone(), b.clone()]),
            cl([na.clone(), b]),
            cl([a, nb.clone()]),
            cl([na, nb]),
        ]);
        let mut solver = DpllSolver::default();
        assert_eq!(solver.solve(&f), SolveStatus::UNSAT);
        assert!(solver.model().is_none());
        assert!(solver.stats().conflicts >= 2);
    }

    #[test]
    fn built_with_and_or_combinators() {
        init_logger();
        // (a) ∧ (b) ∧ ((~b) ∨ (c))
        let (a, b, c) = (
            Literal::positive("a"),
            Literal::positive("b"),
            Literal::positive("c"),
        );
        let f = Formula::new(Clause::new(a))
            .add_clause(Clause::new(b.clone()))
            .and(&Formula::new(Clause::new(b.negate())).or(&Formula::new(Clause::new(c))));
        assert_eq!(f.len(), 3);
        let env = solve(&f).expect("satisfiable");
        assert_eq!(env.get(&var("c")), Some(true));
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn empty_formula_is_vacuously_true() {
        let env = solve(&Formula::default()).expect("satisfiable");
        assert!(env.is_empty());
    }

    #[test]
    fn empty_clause_is_immediate_conflict() {
        let mut solver = DpllSolver::default();
        let f = fm([cl([Literal::positive("a")]), Clause::default()]);
        assert_eq!(solver.solve(&f), SolveStatus::UNSAT);
        assert_eq!(solver.stats().decisions, 0);
        assert_eq!(solver.stats().propagations, 0);
    }

    #[test]
    fn tautological_clause_is_satisfiable() {
        let a = Literal::positive("a");
        let env = solve(&fm([cl([a.clone(), a.negate()])])).expect("satisfiable");
        assert_eq!(env.get(&var("a")), Some(true));
    }

    #[test]
    fn formula_is_unchanged_by_solving() {
        let (a, b) = (Literal::positive("a"), Literal::positive("b"));
        let f = fm([cl([a.clone(), b.clone()]), cl([a.negate()])]);
        let before = f.to_string();
        let env = solve(&f).expect("satisfiable");
        assert_eq!(f.to_string(), before);
        assert_eq!(env.get(&var("b")), Some(true));
    }

    #[test]
    fn long_implication_chain() {
        init_logger();
        // x0 ∧ (x0 → x1) ∧ ... ∧ (x{n-1} → xn)
        let n = 2_000;
        let x = |i: usize| Literal::positive(format!("x{i}").as_str());
        let mut f = Formula::new(Clause::new(x(0)));
        for i in 0..n {
            f = f.add_clause(Clause::new(x(i).negate()).add(x(i + 1)));
        }
        let mut solver = DpllSolver::default();
        assert_eq!(solver.solve(&f), SolveStatus::SAT);
        let env = solver.model().expect("model");
        assert_eq!(env.len(), n + 1);
        assert!((0..=n).all(|i| env.get(&var(&format!("x{i}"))) == Some(true)));
        assert_eq!(solver.stats().max_depth, n + 1);
    }
}
