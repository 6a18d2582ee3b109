//! End-to-end checks of all strategies on the reference instance.

use minimax_core::{City, DistanceTable, Tour};
use minimax_search::{Heuristic, SearchConfig, Solver, Strategy};

fn all_cycle_costs(table: &DistanceTable, start: City) -> Vec<u32> {
    let others: Vec<City> = table.cities().filter(|&c| c != start).collect();
    let mut costs = Vec::new();
    for &x in &others {
        for &y in &others {
            for &z in &others {
                if x != y && y != z && x != z {
                    costs.push(Tour::new(vec![start, x, y, z, start]).cost(table));
                }
            }
        }
    }
    costs
}

#[test]
fn optimum_from_a_is_thirty() {
    let t = DistanceTable::reference();
    let a = t.city("A").unwrap();
    let costs = all_cycle_costs(&t, a);
    assert_eq!(costs.len(), 6);
    assert_eq!(costs.iter().copied().min(), Some(30));

    let solver = Solver::new(&t);
    for strategy in Strategy::ALL {
        let r = solver.solve(strategy, a).unwrap();
        assert_eq!(r.cost, 30);
        assert_eq!(r.tour.len(), t.len() + 1);
    }
}

#[test]
fn every_start_every_heuristic() {
    let t = DistanceTable::reference();
    for heuristic in [Heuristic::NearestUnvisited, Heuristic::FarthestUnvisited] {
        let solver = Solver::with_config(&t, SearchConfig { heuristic });
        for start in t.cities() {
            let min = all_cycle_costs(&t, start).into_iter().min().unwrap();
            for strategy in Strategy::ALL {
                let r = solver.solve(strategy, start).unwrap();
                assert_eq!(r.cost, min);
                assert!(r.tour.is_closed_over(&t));
                assert_eq!(r.tour.start(), Some(start));
                assert_eq!(r.tour.cities().last(), Some(&start));
            }
        }
    }
}

#[test]
fn asymmetric_table_is_searched_as_given() {
    // X->Y->Z->X is cheap one way round and expensive the other.
    let t = DistanceTable::builder()
        .city("X")
        .city("Y")
        .city("Z")
        .edge("X", "Y", 1)
        .edge("Y", "Z", 2)
        .edge("Z", "X", 3)
        .edge("Y", "X", 50)
        .edge("Z", "Y", 60)
        .edge("X", "Z", 70)
        .build()
        .unwrap();
    let solver = Solver::new(&t);
    for strategy in Strategy::ALL {
        let r = solver.solve(strategy, City::new(0)).unwrap();
        assert_eq!(r.tour.display(&t).to_string(), "X Y Z X");
        assert_eq!(r.cost, 3);
    }
}
