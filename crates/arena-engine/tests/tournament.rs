use arena_engine::strategies::{AlwaysCooperate, AlwaysDefect, Random, TitForTat};
use arena_engine::{
    assemble_roster, generate_all_pairings, play_pairing, run_match, simulate, ArenaError, ArenaRng,
    MatchConfig, Move, PayoffMatrix, Play, ResultsWriter, RunConfig, Setup, Strategy, StrategyDef,
    StrategyKind, StrategyRegistry, Tournament, Turn,
};
use proptest::prelude::*;

/// Cooperates twice, then returns a value that is not a move
struct ReturnsTwo;

impl Strategy for ReturnsTwo {
    fn decide(&mut self, history: &[Turn]) -> Play {
        if history.len() < 2 {
            Play::from(true)
        } else {
            Play::from(2)
        }
    }
}

impl StrategyKind for ReturnsTwo {
    const NAME: &'static str = "ReturnsTwo";

    fn spawn(_: Setup<'_>) -> Self {
        ReturnsTwo
    }
}

fn classic(round_length: u32) -> MatchConfig {
    MatchConfig { round_length, rounds: 10, payoff: PayoffMatrix::CLASSIC }
}

#[test]
fn cooperator_vs_defector_example() {
    let (coop, defect) = simulate(
        &StrategyDef::of::<AlwaysCooperate>(),
        &StrategyDef::of::<AlwaysDefect>(),
        4,
        &PayoffMatrix::CLASSIC,
        &ArenaRng::new(0),
    )
    .unwrap();

    assert_eq!(coop, vec![Turn::new(Move::Cooperate, Move::Defect); 4]);
    assert_eq!(defect, vec![Turn::new(Move::Defect, Move::Cooperate); 4]);

    let pairing = play_pairing(
        &StrategyDef::of::<AlwaysCooperate>(),
        &StrategyDef::of::<AlwaysDefect>(),
        &classic(4),
        &ArenaRng::new(0),
        0,
    )
    .unwrap();
    assert_eq!(pairing.first.total_score_a, 0);
    assert_eq!(pairing.first.total_score_b, 20);
    assert_eq!((pairing.score_a, pairing.score_b), (0.0, 5.0));
}

#[test]
fn tit_for_tat_vs_defector_transcript() {
    let result = run_match(
        &StrategyDef::of::<TitForTat>(),
        &StrategyDef::of::<AlwaysDefect>(),
        3,
        &PayoffMatrix::CLASSIC,
        &ArenaRng::new(0),
    )
    .unwrap();

    assert_eq!(result.transcript_a(), "CDD");
    assert_eq!(result.transcript_b(), "DDD");
}

#[test]
fn invalid_move_aborts_tournament() {
    let mut registry = StrategyRegistry::new();
    registry.register(StrategyDef::of::<TitForTat>()).unwrap();
    registry.register(StrategyDef::of::<ReturnsTwo>()).unwrap();
    registry.register(StrategyDef::of::<AlwaysDefect>()).unwrap();

    let config = RunConfig { round_length: Some(10), seed: Some(1), ..Default::default() };
    let roster = assemble_roster(&registry, &config.selection()).unwrap();
    let tournament = Tournament::new(roster, config.match_config(10), config.rng()).unwrap();

    let mut written = Vec::new();
    let err = tournament
        .run_with(|pairing| {
            written.push(pairing.index);
            Ok(())
        })
        .unwrap_err();

    match err {
        ArenaError::InvalidMove { strategy, value } => {
            assert_eq!(strategy, "ReturnsTwo");
            assert_eq!(value, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(written.is_empty(), "the failing pairing is the first one");
}

#[test]
fn duplicate_registration_is_configuration_error() {
    let mut registry = StrategyRegistry::with_builtins().unwrap();
    let err = registry.register(StrategyDef::of::<Random>()).unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(err.to_string(), "strategy Random already exists");
}

#[test]
fn repeated_roster_entry_is_configuration_error() {
    let roster = vec![
        StrategyDef::of::<TitForTat>(),
        StrategyDef::of::<TitForTat>(),
        StrategyDef::of::<AlwaysDefect>(),
    ];
    match Tournament::new(roster, classic(10), ArenaRng::new(0)) {
        Err(err) => {
            assert!(err.is_configuration());
            assert_eq!(err.to_string(), "strategy TitForTat already exists");
        }
        Ok(_) => panic!("a roster naming TitForTat twice was accepted"),
    }
}

#[test]
fn full_builtin_tournament() {
    let registry = StrategyRegistry::with_builtins().unwrap();
    let config = RunConfig {
        compare: Some("Detective".into()),
        round_length: Some(100),
        rounds: 3,
        seed: Some(2024),
        ..Default::default()
    };
    let roster = assemble_roster(&registry, &config.selection()).unwrap();
    let n = roster.len();
    let tournament = Tournament::new(roster, config.match_config(100), config.rng()).unwrap();

    let report = tournament.run().unwrap();

    assert_eq!(report.pairings.len(), n * (n - 1) / 2);
    assert_eq!(report.standings.len(), n);
    assert!(report.pairings[..n - 1].iter().all(|p| p.name_a == "Detective"));
    for pairing in &report.pairings {
        assert_eq!(pairing.transcript_a.len(), 100);
        assert_eq!(pairing.transcript_b.len(), 100);
        assert!(pairing.transcript_a.chars().all(|c| c == 'C' || c == 'D'));
    }
    for standing in &report.standings {
        assert_eq!(standing.opponents as usize, n - 1);
        assert!((standing.average - standing.total / (n - 1) as f64).abs() < 1e-12);
    }
    for pair in report.standings.windows(2) {
        assert!(pair[0].average >= pair[1].average);
    }

    let again = Tournament::new(
        assemble_roster(&registry, &config.selection()).unwrap(),
        config.match_config(100),
        config.rng(),
    )
    .unwrap()
    .run()
    .unwrap();
    assert_eq!(report, again);
}

#[test]
fn deterministic_only_tournament_plays_each_pair_once() {
    let registry = StrategyRegistry::with_builtins().unwrap();
    let config = RunConfig { with_stochastic: false, seed: Some(5), ..Default::default() };
    let roster = assemble_roster(&registry, &config.selection()).unwrap();
    let mut rng = config.rng();
    let round_length = config.resolve_round_length(&mut rng);

    let report = Tournament::new(roster, config.match_config(round_length), rng)
        .unwrap()
        .run()
        .unwrap();
    assert!(report.pairings.iter().all(|p| p.repetitions == 1));
    assert_eq!(report.pairings.len(), 16 * 15 / 2);
}

#[test]
fn results_file_starts_with_header_and_first_pairing() {
    let roster = vec![StrategyDef::of::<AlwaysCooperate>(), StrategyDef::of::<AlwaysDefect>()];
    let report = Tournament::new(roster, classic(4), ArenaRng::new(0)).unwrap().run().unwrap();

    let mut writer = ResultsWriter::new(Vec::new());
    writer.write_report(&report).unwrap();
    let text = String::from_utf8(writer.into_inner()).unwrap();

    assert!(text.starts_with("Round length: 4\n\n\nAlwaysCooperate  VS  AlwaysDefect\nCCCC\nDDDD\n"));
    assert!(text.ends_with("AVERAGE SCORES\n#1 AlwaysDefect:    5.0\n#2 AlwaysCooperate: 0.0\n"));
}

fn deterministic_defs() -> Vec<StrategyDef> {
    arena_engine::builtin_strategies()
        .into_iter()
        .filter(|d| !d.is_stochastic())
        .collect()
}

proptest! {
    #[test]
    fn deterministic_pairs_repeat_exactly(a in 0usize..16, b in 0usize..16, turns in 1u32..60, seed: u64) {
        let defs = deterministic_defs();
        let first = run_match(&defs[a], &defs[b], turns, &PayoffMatrix::CLASSIC, &ArenaRng::new(seed)).unwrap();
        let second = run_match(&defs[a], &defs[b], turns, &PayoffMatrix::CLASSIC, &ArenaRng::new(seed ^ 1)).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.normalized(), second.normalized());
    }

    #[test]
    fn histories_always_mirror(a in 0usize..20, b in 0usize..20, turns in 0u32..80, seed: u64) {
        let defs = arena_engine::builtin_strategies();
        let (ha, hb) = simulate(&defs[a], &defs[b], turns, &PayoffMatrix::CLASSIC, &ArenaRng::new(seed)).unwrap();
        prop_assert_eq!(ha.len(), turns as usize);
        prop_assert_eq!(hb.len(), turns as usize);
        for (ta, tb) in ha.iter().zip(hb.iter()) {
            prop_assert_eq!(*tb, ta.mirrored());
        }
    }

    #[test]
    fn schedule_never_self_pairs(n in 0usize..30) {
        for (i, j) in generate_all_pairings(n) {
            prop_assert!(i != j);
        }
    }
}
