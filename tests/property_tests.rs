//! Property tests: random command streams against a live session.

use proptest::prelude::*;

use rust_quoridor::board::{all_players_have_path, is_valid_cell};
use rust_quoridor::core::{GameConfig, PlayerId, Position, WallDirection};
use rust_quoridor::rules::Command;
use rust_quoridor::session::GameSession;

/// One scripted turn. `Legal` picks from the mover's legal targets, which
/// keeps tokens moving; the rest are mostly rejected and exercise the
/// validators.
#[derive(Clone, Debug)]
enum Step {
    Move(i32, i32),
    Legal(usize),
    Build(i32, i32, WallDirection),
    Skip,
    OutOfTurn,
}

fn direction() -> impl Strategy<Value = WallDirection> {
    prop_oneof![
        4 => Just(WallDirection::Horizontal),
        4 => Just(WallDirection::Vertical),
        1 => Just(WallDirection::Center),
    ]
}

/// Mostly near the board, occasionally anywhere in `i32`.
fn coord() -> impl Strategy<Value = i32> {
    prop_oneof![
        8 => -1..10i32,
        1 => Just(i32::MIN),
        1 => Just(i32::MAX),
        1 => any::<i32>(),
    ]
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        1 => (coord(), coord()).prop_map(|(r, c)| Step::Move(r, c)),
        3 => (0..12usize).prop_map(Step::Legal),
        3 => (coord(), coord(), direction()).prop_map(|(r, c, d)| Step::Build(r, c, d)),
        1 => Just(Step::Skip),
        1 => Just(Step::OutOfTurn),
    ]
}

fn config() -> impl Strategy<Value = GameConfig> {
    (2..=4usize, 3..=9usize, 0..=6u32)
        .prop_map(|(players, size, walls)| GameConfig::new(players, size, walls))
}

fn started(config: GameConfig, seed: u64) -> GameSession {
    let mut session = GameSession::with_seed(config, seed).unwrap();
    for i in 0..config.player_count {
        session.join(format!("p{}", i).as_str()).unwrap();
    }
    session
}

fn to_command(session: &GameSession, seat: PlayerId, step: &Step) -> Command {
    match *step {
        Step::Move(r, c) => Command::Move { position: Position::new(r, c) },
        Step::Legal(pick) => {
            let moves = session.legal_moves(seat);
            match moves.get(pick % moves.len().max(1)) {
                Some(&position) => Command::Move { position },
                None => Command::Skip,
            }
        }
        Step::Build(r, c, direction) => Command::Build {
            position: Position::new(r, c),
            direction,
        },
        Step::Skip | Step::OutOfTurn => Command::Skip,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// After every turn: all seated players can still reach their goal,
    /// wall spend matches placed segments, and tokens stay on the board.
    #[test]
    fn prop_invariants_hold_after_every_turn(
        config in config(),
        seed in any::<u64>(),
        steps in prop::collection::vec(step(), 1..80),
    ) {
        let mut session = started(config, seed);
        let budget = config.walls_per_player;

        for step in &steps {
            let Some(active) = session.active_player() else { break };
            let seat = match step {
                Step::OutOfTurn => session.next_seated_after(active).unwrap_or(active),
                _ => active,
            };
            let command = to_command(&session, seat, step);
            let _ = session.command(seat, command);

            let state = session.state();
            prop_assert!(all_players_have_path(state, &[]));

            let spent: u32 = state.players.values().map(|p| budget - p.walls_remaining).sum();
            prop_assert_eq!(state.walls.len(), spent as usize * 3);

            for player in state.seated() {
                let position = player.position.unwrap();
                prop_assert!(is_valid_cell(state.config.size(), position));
            }
        }
    }

    /// A rejected command leaves the snapshot byte-for-byte unchanged.
    #[test]
    fn prop_rejection_changes_nothing(
        config in config(),
        seed in any::<u64>(),
        steps in prop::collection::vec(step(), 1..60),
    ) {
        let mut session = started(config, seed);

        for step in &steps {
            let Some(active) = session.active_player() else { break };
            let seat = match step {
                Step::OutOfTurn => session.next_seated_after(active).unwrap_or(active),
                _ => active,
            };
            let command = to_command(&session, seat, step);
            let before = session.snapshot();

            if session.command(seat, command).is_err() {
                prop_assert_eq!(session.snapshot().encode().unwrap(), before.encode().unwrap());
            } else {
                // Accepted: either someone won or the turn moved on.
                prop_assert!(
                    session.winner().is_some() || session.active_player() != Some(active)
                );
            }
        }
    }

    /// Every move `legal_moves` offers is accepted.
    #[test]
    fn prop_offered_moves_are_accepted(
        config in config(),
        seed in any::<u64>(),
        pick in any::<usize>(),
    ) {
        let mut session = started(config, seed);
        let active = session.active_player().unwrap();
        let moves = session.legal_moves(active);
        prop_assume!(!moves.is_empty());

        let target = moves[pick % moves.len()];
        let moved = session.command(active, Command::Move { position: target }).is_ok();
        prop_assert!(moved);
        prop_assert_eq!(session.state().players[active].position, Some(target));
    }
}
