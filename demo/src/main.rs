//! Compare BFS, uniform-cost and A* on the reference minimax tour instance.
//!
//! Run: cargo run --bin minimax-tour
//! Set `RUST_LOG=debug` to see per-search statistics on stderr.

use minimax_core::DistanceTable;
use minimax_search::{SearchResult, Solver, Strategy};

/// Label of the city every tour starts from.
const START: &str = "A";

/// One console line: `<Strategy> Path: <city> <city> ... Cost: <cost>`.
fn report(table: &DistanceTable, strategy: Strategy, result: &SearchResult) -> String {
    format!(
        "{strategy} Path: {} Cost: {}",
        result.tour.display(table),
        result.cost
    )
}

fn run(table: &DistanceTable) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let solver = Solver::new(table);
    let start = table
        .city(START)
        .ok_or_else(|| format!("start city \u{201c}{START}\u{201d} is not in the distance table"))?;
    let mut lines = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let result = solver.solve(strategy, start)?;
        lines.push(report(table, strategy, &result));
    }
    Ok(lines)
}

fn main() {
    env_logger::init();

    let table = DistanceTable::reference();
    log::debug!("searching {} cities from {START}", table.len());

    match run(&table) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_output() {
        let lines = run(&DistanceTable::reference()).unwrap();
        assert_eq!(
            lines,
            [
                "BFS Path: A B D C A Cost: 30",
                "UCS Path: A B D C A Cost: 30",
                "A* Path: A B D C A Cost: 30",
            ]
        );
    }

    #[test]
    fn report_line_format() {
        let table = DistanceTable::reference();
        let result = Solver::new(&table).bfs(table.city("C").unwrap()).unwrap();
        let line = report(&table, Strategy::Bfs, &result);
        assert!(line.starts_with("BFS Path: C "));
        assert!(line.ends_with(&format!("C Cost: {}", result.cost)));
        assert_eq!(line.matches(' ').count(), 2 + table.len() + 1 + 1);
    }

    #[test]
    fn missing_start_city_is_an_error() {
        let table = DistanceTable::builder().city("B").build().unwrap();
        let err = run(&table).unwrap_err();
        assert!(err.to_string().contains("is not in the distance table"));
    }
}
