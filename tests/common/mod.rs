use std::sync::{LazyLock, Mutex};

use classic_structures::{MatrixGraph, Weight};
use flexi_logger::{Logger, LoggerHandle};
use rand::Rng;

pub mod slow_map;
pub mod slow_paths;

#[allow(dead_code)]
pub static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("info")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .set_palette("196;208;3;7;8".to_owned())
            .format(|w, now, record| {
                let style = flexi_logger::style(record.level());
                write!(
                    w,
                    "{} {pref}[{}] {}{suf}",
                    now.format("%H:%M:%S"),
                    &record.level().as_str()[0..1],
                    record.args(),
                    pref = style.prefix(),
                    suf = style.suffix(),
                )
            })
            .start()
            .unwrap(),
    )
});

#[allow(dead_code)]
pub fn init_logger() {
    let _ = &*LOGGER;
}

/// The 7 vertex graph used throughout the tests.
#[allow(dead_code)]
pub fn example_graph() -> MatrixGraph {
    MatrixGraph::from_edges(
        7,
        [
            (0, 1, 2),
            (0, 3, 1),
            (1, 4, 10),
            (1, 3, 3),
            (2, 0, 4),
            (2, 5, 5),
            (3, 2, 2),
            (3, 4, 2),
            (3, 5, 8),
            (3, 6, 4),
            (6, 5, 1),
        ],
    )
}

/// Random directed graph where each ordered pair (self loops included) is an edge with
/// probability `density`.
#[allow(dead_code)]
pub fn random_graph(
    rng: &mut impl Rng,
    n: usize,
    density: f64,
    weights: std::ops::Range<Weight>,
) -> MatrixGraph {
    let mut g = MatrixGraph::new(n);
    for u in 0..n {
        for v in 0..n {
            if rng.gen_bool(density) {
                g.link(u, v, rng.gen_range(weights.clone()));
            }
        }
    }
    g
}
