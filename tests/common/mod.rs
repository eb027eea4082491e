//! Shared fixtures for integration tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use topograph::serialization::{RectangularCharSerializer, TopologySerializer};
use topograph::{KeyTile, RectangularTopology, SimpleRectangularMovement};

/// The 4x5 grid used by the path scenarios
#[allow(dead_code)]
pub const SCENARIO_GRID: &str = "..#..\n.##..\n.....\n.##..\n";

pub fn char_grid(data: &str) -> RectangularTopology<KeyTile<char>> {
    RectangularCharSerializer::default()
        .deserialize(data)
        .expect("fixture grid is rectangular")
}

pub fn open_floor(diagonal: bool) -> SimpleRectangularMovement<char> {
    SimpleRectangularMovement::new(diagonal, [(('.', '.'), 1.0)]).expect("floor weight is positive")
}

/// Movement over floor `.`, mud `,` and walls `#` with asymmetric costs
#[allow(dead_code)]
pub fn mixed_terrain(diagonal: bool) -> SimpleRectangularMovement<char> {
    SimpleRectangularMovement::new(
        diagonal,
        [
            (('.', '.'), 1.0),
            (('.', ','), 2.0),
            ((',', '.'), 1.5),
            ((',', ','), 3.0),
        ],
    )
    .expect("terrain weights are positive")
}

/// Deterministic random grid of `.`, `,` and `#` tiles
#[allow(dead_code)]
pub fn random_grid(seed: u64, rows: usize, cols: usize) -> RectangularTopology<KeyTile<char>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let matrix = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    let key = match rng.random_range(0..10) {
                        0..=5 => '.',
                        6..=7 => ',',
                        _ => '#',
                    };
                    KeyTile::from_key(key)
                })
                .collect()
        })
        .collect();
    RectangularTopology::new(matrix).expect("generated grid is rectangular")
}
