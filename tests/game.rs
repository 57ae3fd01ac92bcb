use zipgrid::daily::SeededRng;
use zipgrid::game::Game;
use zipgrid::generator;
use zipgrid::grid::GridPoint;
use zipgrid::level::LevelDefinition;
use zipgrid::session::{MemorySink, SummarySink};

fn p(row: usize, col: usize) -> GridPoint {
    GridPoint::new(row, col)
}

// 6x6 level with five waypoints, no reference solution.
fn test_level() -> LevelDefinition {
    LevelDefinition::new(
        6,
        vec![p(0, 0), p(0, 2), p(2, 2), p(2, 0), p(5, 5)],
        None,
    )
}

// 2x2 level: 1 in the top-left corner, 2 in the opposite corner.
fn tiny_level() -> LevelDefinition {
    LevelDefinition::new(2, vec![p(0, 0), p(1, 1)], None)
}

#[test]
fn adjacency_is_orthogonal_only() {
    assert!(p(2, 3).is_adjacent(p(2, 4)));
    assert!(p(2, 3).is_adjacent(p(1, 3)));
    assert!(!p(2, 3).is_adjacent(p(3, 4)), "diagonal cells are not adjacent");
    assert!(!p(2, 3).is_adjacent(p(2, 3)), "a cell is not adjacent to itself");
    assert!(!p(2, 3).is_adjacent(p(2, 5)), "distance two is not adjacent");
}

#[test]
fn fresh_session_sits_on_waypoint_one() {
    let game = Game::new(test_level());

    assert_eq!(game.path(), &[p(0, 0)]);
    assert_eq!(game.current_position(), p(0, 0));
    assert_eq!(game.visited().len(), 1);
    assert!(game.visited().contains(&p(0, 0)));
    assert_eq!(game.current_target(), 2);
    assert!(game.timer_start().is_none());
    assert!(!game.is_complete());
}

#[test]
fn visit_then_backtrack_restores_the_exact_state() {
    let mut game = Game::new(test_level());
    let path_before = game.path().to_vec();
    let target_before = game.current_target();

    assert!(game.visit(p(0, 1)));
    assert_eq!(game.current_position(), p(0, 1));

    // Stepping back onto the previous cell retracts the path
    assert!(game.visit(p(0, 0)));
    assert_eq!(game.path(), &path_before[..]);
    assert_eq!(game.visited().len(), 1);
    assert_eq!(game.current_target(), target_before);
}

#[test]
fn illegal_moves_are_rejected_without_state_change() {
    let mut game = Game::new(test_level());

    assert!(!game.can_visit(p(0, 2)), "two cells away");
    assert!(!game.can_visit(p(1, 1)), "diagonal");
    assert!(!game.can_visit(p(0, 0)), "current position");

    assert!(!game.visit(p(1, 1)));
    assert_eq!(game.path(), &[p(0, 0)]);
    assert!(game.timer_start().is_none(), "rejected moves never start the timer");
}

#[test]
fn waypoints_must_be_taken_in_ascending_order() {
    let mut game = Game::new(test_level());

    // Waypoint 4 sits on (2,0); the next expected waypoint is 2
    assert!(game.visit(p(1, 0)));
    assert!(!game.can_visit(p(2, 0)), "waypoint 4 before waypoint 2");
    assert!(!game.visit(p(2, 0)));
    assert_eq!(game.current_position(), p(1, 0));

    // An unnumbered neighbor stays legal
    assert!(game.visit(p(1, 1)));
}

#[test]
fn reaching_a_waypoint_advances_the_target_and_undoing_rolls_it_back() {
    let mut game = Game::new(test_level());

    assert!(game.visit(p(0, 1)));
    assert_eq!(game.current_target(), 2);
    assert!(game.visit(p(0, 2)), "waypoint 2 is the expected target");
    assert_eq!(game.current_target(), 3);

    // Backtracking off the waypoint restores the target
    assert!(game.visit(p(0, 1)));
    assert_eq!(game.current_target(), 2);
    assert_eq!(game.current_position(), p(0, 1));
}

#[test]
fn already_visited_cells_cannot_be_crossed() {
    let mut game = Game::new(test_level());

    assert!(game.visit(p(1, 0)));
    assert!(game.visit(p(1, 1)));
    assert!(game.visit(p(0, 1)));

    // (0,0) is drawn and is not the previous cell
    assert!(!game.can_visit(p(0, 0)));
    assert!(!game.visit(p(0, 0)));
}

#[test]
fn completing_the_tiny_level() {
    let mut game = Game::new(tiny_level());

    assert!(game.visit(p(0, 1)));
    assert!(game.visit(p(1, 1)), "waypoint 2 may be reached before the grid is full");
    assert_eq!(game.current_target(), 3);
    assert!(
        !game.is_complete(),
        "both waypoints reached but one cell is missing"
    );

    assert!(game.visit(p(1, 0)));
    assert!(game.is_complete());
}

#[test]
fn all_waypoints_reached_is_not_enough_without_full_coverage() {
    // 1:(0,0)  2:(1,0)  3:(1,1)
    let level = LevelDefinition::new(2, vec![p(0, 0), p(1, 0), p(1, 1)], None);
    let mut game = Game::new(level);

    assert!(game.visit(p(1, 0)));
    assert!(game.visit(p(1, 1)));
    assert_eq!(game.current_target(), 4, "every waypoint has been reached");
    assert!(!game.is_complete(), "(0,1) is still blank");

    assert!(game.visit(p(0, 1)));
    assert!(game.is_complete());
}

#[test]
fn skipping_a_waypoint_is_rejected_and_never_completes() {
    // 1:(0,0)  2:(1,0)  3:(1,1)
    let level = LevelDefinition::new(2, vec![p(0, 0), p(1, 0), p(1, 1)], None);
    let mut game = Game::new(level);

    // Drawing around the other way runs into waypoint 3 too early
    assert!(game.visit(p(0, 1)));
    assert!(!game.visit(p(1, 1)), "waypoint 3 before waypoint 2");
    assert!(!game.is_complete());
}

#[test]
fn replaying_a_generated_solution_completes_the_level() {
    let mut rng = SeededRng::new(99);
    let level = generator::generate_level_with_rng(6, 8, &mut rng).expect("valid parameters");
    let solution = level.solution_path().expect("generated levels carry a solution").to_vec();

    let mut game = Game::new(level);
    for (i, point) in solution.iter().enumerate().skip(1) {
        assert!(!game.is_complete(), "not complete before the final cell");
        assert!(game.visit(*point), "solution step {i} to {point} must be legal");
    }

    assert!(game.is_complete());
    assert_eq!(game.visited().len(), 36);
    assert_eq!(game.current_target(), 9);
}

#[test]
fn undo_retracts_one_cell_and_is_a_noop_at_the_start() {
    let mut game = Game::new(test_level());

    game.undo();
    assert_eq!(game.path(), &[p(0, 0)], "undo on a fresh session changes nothing");

    assert!(game.visit(p(0, 1)));
    assert!(game.visit(p(1, 1)));
    game.undo();
    assert_eq!(game.current_position(), p(0, 1));
    assert_eq!(game.visited().len(), 2);
}

#[test]
fn undo_to_rewinds_to_the_given_cell() {
    let mut game = Game::new(test_level());
    assert!(game.visit(p(0, 1)));
    assert!(game.visit(p(1, 1)));
    assert!(game.visit(p(1, 0)));

    game.undo_to(p(0, 1));
    assert_eq!(game.current_position(), p(0, 1));
    assert_eq!(game.path(), &[p(0, 0), p(0, 1)]);

    // Unknown cells and the current position are no-ops
    game.undo_to(p(4, 4));
    assert_eq!(game.current_position(), p(0, 1));
    game.undo_to(p(0, 1));
    assert_eq!(game.path(), &[p(0, 0), p(0, 1)]);
}

#[test]
fn undo_to_previous_waypoint_stops_on_the_last_numbered_cell() {
    let mut game = Game::new(test_level());

    // Reach waypoint 2 on (0,2), then advance two unnumbered cells
    assert!(game.visit(p(0, 1)));
    assert!(game.visit(p(0, 2)));
    assert!(game.visit(p(0, 3)));
    assert!(game.visit(p(0, 4)));
    assert_eq!(game.current_target(), 3);

    game.undo_to_previous_waypoint();
    assert_eq!(game.current_position(), p(0, 2));
    assert_eq!(game.current_target(), 3, "rewinding onto the waypoint keeps it reached");

    // No waypoint left behind the position: rewind to the start
    game.undo_to_previous_waypoint();
    assert_eq!(game.current_position(), p(0, 0));
    assert_eq!(game.current_target(), 2);

    // At the start the operation is a no-op
    game.undo_to_previous_waypoint();
    assert_eq!(game.path(), &[p(0, 0)]);
}

#[test]
fn timer_starts_on_the_first_move_only() {
    let mut game = Game::new(test_level());
    assert!(game.timer_start().is_none());

    assert!(game.visit(p(0, 1)));
    let started = game.timer_start().expect("first move starts the timer");

    assert!(game.visit(p(1, 1)));
    game.undo();
    assert_eq!(game.timer_start(), Some(started), "later moves never restart the timer");
}

#[test]
fn reset_returns_to_a_fresh_session() {
    let mut game = Game::new(test_level());
    assert!(game.visit(p(0, 1)));
    assert!(game.visit(p(0, 2)));

    game.reset();
    assert_eq!(game.path(), &[p(0, 0)]);
    assert_eq!(game.visited().len(), 1);
    assert_eq!(game.current_target(), 2);
    assert!(game.timer_start().is_none());
    assert!(!game.is_complete());
}

#[test]
fn hints_walk_the_solution_past_the_drawn_cells() {
    let mut rng = SeededRng::new(5);
    let level = generator::generate_level_with_rng(6, 8, &mut rng).expect("valid parameters");
    let solution = level.solution_path().expect("generated levels carry a solution").to_vec();

    let mut game = Game::new(level);
    assert_eq!(game.hint_cells(3), &solution[1..4]);

    // Following the first hint shifts the window
    assert!(game.visit(solution[1]));
    assert_eq!(game.hint_cells(2), &solution[2..4]);

    // More hints than remaining cells: the walk stops at the end
    let remaining = solution.len() - 2;
    assert_eq!(game.hint_cells(100).len(), remaining);
}

#[test]
fn hints_require_a_reference_solution() {
    let game = Game::new(test_level());
    assert!(game.hint_cells(3).is_empty());
}

#[test]
fn summary_is_emitted_once_complete() {
    let mut game = Game::new(tiny_level());
    let mut sink = MemorySink::new();

    assert!(game.summary(None).is_none());
    assert!(!game.report(&mut sink, None), "no summary before completion");
    assert!(sink.summaries().is_empty());

    assert!(game.visit(p(0, 1)));
    assert!(game.visit(p(1, 1)));
    assert!(game.visit(p(1, 0)));
    assert!(game.is_complete());

    assert!(game.report(&mut sink, None));
    assert_eq!(sink.summaries().len(), 1);
    let summary = &sink.summaries()[0];
    assert_eq!(summary.grid_size, 2);
    assert_eq!(summary.waypoints, 2);
    assert_eq!(summary.difficulty, None);
}

#[test]
fn summaries_can_be_recorded_through_the_sink_trait() {
    let mut game = Game::new(tiny_level());
    assert!(game.visit(p(0, 1)));
    assert!(game.visit(p(1, 1)));
    assert!(game.visit(p(1, 0)));

    let mut sink = MemorySink::new();
    let summary = game.summary(None).expect("completed sessions summarize");
    sink.record(&summary);
    assert_eq!(sink.summaries(), &[summary]);
}
