use proarg::{
    explanation, questions, Argument, Formula, NoPreference, Ranking, Winner, WinnersLosers,
};

fn var(name: &str) -> Formula<&str> {
    Formula::var(name)
}

fn winner_head<'a>(winner: &'a Winner<&str>) -> Option<&'a Formula<&'a str>> {
    match winner {
        Winner::Assumption(premise) | Winner::Argued(premise, _) => Some(premise),
        Winner::Open(_) => None,
    }
}

#[test]
fn test_empty_information_base() {
    let verdict = explanation(&NoPreference, &var("q"), &[]);
    assert_eq!(WinnersLosers::default(), verdict);
}

#[test]
fn test_modus_ponens_over_a_conjunction() {
    let rule = var("a").and(var("b")).implies(var("c"));
    let information = vec![rule.clone(), var("a"), var("b")];
    let verdict = explanation(&NoPreference, &var("c"), &information);

    assert!(verdict.winners.contra.is_empty());
    assert_eq!(1, verdict.winners.pro.len());
    let sub = match &verdict.winners.pro[0] {
        Winner::Argued(premise, sub) => {
            assert_eq!(&rule, premise);
            sub
        }
        other => panic!("expected an argued winner, got {:?}", other),
    };
    // both remaining facts argue the residual question, each assuming the other
    let heads: Vec<_> = sub.winners.pro.iter().filter_map(winner_head).collect();
    assert_eq!(vec![&var("a"), &var("b")], heads);
    match (&sub.winners.pro[0], &sub.winners.pro[1]) {
        (Winner::Argued(_, sub_a), Winner::Argued(_, sub_b)) => {
            assert_eq!(vec![Winner::Assumption(var("b"))], sub_a.winners.pro);
            assert_eq!(vec![Winner::Assumption(var("a"))], sub_b.winners.pro);
        }
        other => panic!("expected argued winners, got {:?}", other),
    }

    assert!(questions(&verdict).is_empty());
}

#[test]
fn test_double_negated_question() {
    let verdict = explanation(&NoPreference, &var("p").not().not(), &[var("p")]);
    assert_eq!(vec![Winner::Assumption(var("p"))], verdict.winners.pro);
    assert!(verdict.winners.contra.is_empty());
}

#[test]
fn test_contradictory_information_supports_both_sides() {
    let verdict = explanation(&NoPreference, &var("p"), &[var("p"), var("p").not()]);
    assert!(!verdict.winners.pro.is_empty());
    assert!(!verdict.winners.contra.is_empty());
}

#[test]
fn test_mutual_rebuttal_without_preference() {
    let verdict = explanation(&NoPreference, &var("p"), &[var("p"), var("p").not()]);
    assert_eq!(vec![Winner::Assumption(var("p"))], verdict.winners.pro);
    assert_eq!(
        vec![Winner::Assumption(var("p").not())],
        verdict.winners.contra
    );
    assert!(verdict.losers.pro.is_empty());
    assert!(verdict.losers.contra.is_empty());
}

#[test]
fn test_ranked_exception_defeats_the_general_rule() {
    let rule = var("employed").implies(var("mayRequest"));
    let exception = var("employed")
        .and(var("militaryOfficial"))
        .implies(var("mayRequest").not());
    let information = vec![
        rule.clone(),
        exception.clone(),
        var("employed"),
        var("militaryOfficial"),
    ];
    let ranking = Ranking::new(vec![(1, rule.clone()), (2, exception.clone())]);
    let verdict = explanation(&ranking, &var("mayRequest"), &information);

    assert!(verdict.winners.pro.is_empty());
    assert_eq!(1, verdict.winners.contra.len());
    assert_eq!(Some(&exception), winner_head(&verdict.winners.contra[0]));
    assert_eq!(1, verdict.losers.pro.len());
    assert_eq!(Some(&rule), verdict.losers.pro[0].head());
}

#[test]
fn test_outranked_exception_does_not_defeat() {
    let rule = var("employed").implies(var("mayRequest"));
    let exception = var("employed")
        .and(var("militaryOfficial"))
        .implies(var("mayRequest").not());
    let information = vec![
        rule.clone(),
        exception.clone(),
        var("employed"),
        var("militaryOfficial"),
    ];
    let ranking = Ranking::new(vec![(2, rule.clone()), (1, exception.clone())]);
    let verdict = explanation(&ranking, &var("mayRequest"), &information);

    assert_eq!(1, verdict.winners.pro.len());
    assert_eq!(Some(&rule), winner_head(&verdict.winners.pro[0]));
    assert!(verdict.winners.contra.is_empty());
}

#[test]
fn test_adding_a_lesser_ranked_opponent_keeps_the_winner() {
    let rule = var("employed").implies(var("mayRequest"));
    let exception = var("employed")
        .and(var("militaryOfficial"))
        .implies(var("mayRequest").not());

    let base = vec![rule.clone(), var("employed")];
    let base_verdict = explanation(&NoPreference, &var("mayRequest"), &base);
    assert_eq!(Some(&rule), winner_head(&base_verdict.winners.pro[0]));

    let extended = vec![
        rule.clone(),
        exception.clone(),
        var("employed"),
        var("militaryOfficial"),
    ];
    let ranking = Ranking::new(vec![(2, rule.clone()), (1, exception.clone())]);
    let extended_verdict = explanation(&ranking, &var("mayRequest"), &extended);
    assert_eq!(
        Some(&rule),
        winner_head(&extended_verdict.winners.pro[0])
    );
}

#[test]
fn test_winners_and_losers_are_disjoint_by_head() {
    let information = vec![var("p"), var("p").not()];
    let ranking = Ranking::new(vec![(2, var("p")), (1, var("p").not())]);
    let verdict = explanation(&ranking, &var("p"), &information);
    let winner_heads: Vec<String> = verdict
        .winners
        .pro
        .iter()
        .filter_map(winner_head)
        .map(|h| h.to_string())
        .collect();
    let loser_heads: Vec<String> = verdict
        .losers
        .pro
        .iter()
        .filter_map(Argument::head)
        .map(|h| h.to_string())
        .collect();
    assert!(winner_heads.iter().all(|h| !loser_heads.contains(h)));
}

#[test]
fn test_tautological_question_is_decided_by_any_consistent_premise() {
    // the negated question has no consistent case left to defend
    let verdict = explanation(&NoPreference, &var("p").or(var("p").not()), &[var("q")]);
    assert_eq!(vec![Winner::Assumption(var("q"))], verdict.winners.pro);
    assert!(verdict.winners.contra.is_empty());
    assert_eq!(1, verdict.losers.contra.len());
    assert!(verdict.losers.contra[0].is_open());
}
