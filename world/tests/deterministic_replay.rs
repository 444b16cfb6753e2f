use gridbot_core::{ErrorKind, Event};
use gridbot_world::{self as world, query, SimulatorConfig, World};

const SCRIPT: &[&str] = &[
    "report",
    "obstacle 2 2",
    "obstacle 2 3",
    "forward 2",
    "right",
    "forward",
    "diagonal northeast",
    "forward 9",
    "left",
    "forward",
    "grid",
    "charge 20",
    "d southwest",
    "fly",
    "report",
];

#[derive(Debug, PartialEq)]
struct ReplayOutcome {
    events: Vec<Event>,
    rejections: Vec<(usize, ErrorKind)>,
    history: Vec<String>,
}

fn replay(script: &[&str]) -> ReplayOutcome {
    let mut world = World::with_config(&SimulatorConfig {
        grid_width: 8,
        grid_height: 8,
        battery_level: 100,
        expandable_grid: true,
    });
    let mut events = Vec::new();
    let mut rejections = Vec::new();

    for (index, line) in script.iter().enumerate() {
        if let Err(error) = world::execute(&mut world, line, &mut events) {
            rejections.push((index, error.kind()));
        }
    }

    ReplayOutcome {
        events,
        rejections,
        history: query::history(&world).to_vec(),
    }
}

#[test]
fn replaying_a_script_is_deterministic() {
    let first = replay(SCRIPT);
    let second = replay(SCRIPT);

    assert_eq!(first, second, "replay diverged");
}

#[test]
fn replay_records_every_line_and_rejection() {
    let outcome = replay(SCRIPT);

    assert_eq!(outcome.history.len(), SCRIPT.len());
    assert_eq!(
        outcome.rejections,
        vec![(6, ErrorKind::Obstacle), (13, ErrorKind::InvalidCommand)]
    );
    let expansions = outcome
        .events
        .iter()
        .filter(|event| matches!(event, Event::GridExpanded { .. }))
        .count();
    assert_eq!(expansions, 1, "forward 9 east should widen the grid once");
}
