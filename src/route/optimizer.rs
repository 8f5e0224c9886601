//! Nearest-neighbor route construction.
//!
//! # Algorithm
//!
//! 1. Fix the first input element as the start
//! 2. While unvisited waypoints remain:
//!    a. Scan them in input order for the one closest to the last visited
//!    b. Append it to the route and remove it from the unvisited set
//! 3. Append the start again to close the loop (unless disabled)
//!
//! Ties go to the earliest candidate in input order. Each step rescans every
//! unvisited waypoint, so a route over `n` waypoints costs O(n²) distance
//! evaluations. Inputs are expected to be tens of points.

use super::config::{RouteConfig, ShortInputPolicy};
use super::types::Route;
use crate::geo::{distance_km, Located};
use crate::{Error, Result};

/// Fewest waypoints a route can be built from.
pub const MIN_WAYPOINTS: usize = 2;

/// Nearest-neighbor route optimizer.
///
/// Stateless: every call is a pure function of its arguments, so the
/// optimizer can be used from any number of threads at once.
pub struct RouteOptimizer;

impl RouteOptimizer {
    /// Builds a closed route with the default [`RouteConfig`].
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint_route::{RouteOptimizer, Waypoint};
    ///
    /// let waypoints = vec![
    ///     Waypoint::new("A", 0.0, 0.0),
    ///     Waypoint::new("B", 0.0, 10.0),
    ///     Waypoint::new("C", 0.0, 5.0),
    /// ];
    ///
    /// let route = RouteOptimizer::compute_route(&waypoints).unwrap();
    /// let labels: Vec<&str> = route.iter().map(|w| w.label()).collect();
    /// assert_eq!(labels, ["A", "C", "B", "A"]);
    /// ```
    pub fn compute_route<T: Located + Clone>(waypoints: &[T]) -> Result<Route<T>> {
        Self::compute_route_with(waypoints, &RouteConfig::default())
    }

    /// Builds a route using the given configuration.
    ///
    /// Inputs shorter than [`MIN_WAYPOINTS`] are rejected with
    /// [`Error::InsufficientInput`] or returned unchanged as an open route,
    /// depending on [`RouteConfig::short_input`].
    pub fn compute_route_with<T: Located + Clone>(
        waypoints: &[T],
        config: &RouteConfig,
    ) -> Result<Route<T>> {
        if waypoints.len() < MIN_WAYPOINTS {
            return match config.short_input {
                ShortInputPolicy::Reject => Err(Error::InsufficientInput {
                    required: MIN_WAYPOINTS,
                    actual: waypoints.len(),
                }),
                ShortInputPolicy::PassThrough => Ok(Route::new(waypoints.to_vec(), false)),
            };
        }

        let order = Self::visiting_order(waypoints);
        let mut stops = Vec::with_capacity(order.len() + 1);
        stops.extend(order.iter().map(|&i| waypoints[i].clone()));
        if config.close_loop {
            stops.push(waypoints[0].clone());
        }

        Ok(Route::new(stops, config.close_loop))
    }

    /// Returns the nearest-neighbor visiting order as indices into
    /// `waypoints`, starting at index 0 and without a closing index.
    ///
    /// Empty input yields an empty order.
    pub fn visiting_order<T: Located>(waypoints: &[T]) -> Vec<usize> {
        if waypoints.is_empty() {
            return Vec::new();
        }

        let mut order = Vec::with_capacity(waypoints.len());
        order.push(0);
        // Kept in input order so the first minimum found is the earliest one.
        let mut unvisited: Vec<usize> = (1..waypoints.len()).collect();
        let mut current = 0;

        while !unvisited.is_empty() {
            let from = &waypoints[current];
            let mut nearest_pos = 0;
            let mut nearest_dist = f64::INFINITY;

            for (pos, &candidate) in unvisited.iter().enumerate() {
                let d = distance_km(from, &waypoints[candidate]);
                if d < nearest_dist {
                    nearest_dist = d;
                    nearest_pos = pos;
                }
            }

            current = unvisited.remove(nearest_pos);
            order.push(current);
        }

        order
    }

    /// Builds routes for independent inputs in parallel.
    ///
    /// Results are returned in input order; each entry fails or succeeds on
    /// its own.
    #[cfg(feature = "parallel")]
    pub fn compute_routes<T>(batches: &[Vec<T>], config: &RouteConfig) -> Vec<Result<Route<T>>>
    where
        T: Located + Clone + Send + Sync,
    {
        use rayon::prelude::*;

        batches
            .par_iter()
            .map(|waypoints| Self::compute_route_with(waypoints, config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Waypoint;
    use proptest::prelude::*;

    fn labels<T: AsRef<[Waypoint]>>(stops: T) -> Vec<String> {
        stops
            .as_ref()
            .iter()
            .map(|w| w.label().to_string())
            .collect()
    }

    fn line() -> Vec<Waypoint> {
        vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("B", 0.0, 10.0),
            Waypoint::new("C", 0.0, 5.0),
        ]
    }

    // ---- Core scenario ----

    #[test]
    fn test_nearest_first_on_a_line() {
        let route = RouteOptimizer::compute_route(&line()).unwrap();

        assert_eq!(labels(route.stops()), ["A", "C", "B", "A"]);
        assert!(route.is_closed());
    }

    #[test]
    fn test_nearest_first_leg_lengths() {
        let route = RouteOptimizer::compute_route(&line()).unwrap();
        let legs = route.legs_km();

        assert!((legs[0] - 555.97).abs() < 1.0, "A->C was {}", legs[0]);
        assert!((legs[1] - 555.97).abs() < 1.0, "C->B was {}", legs[1]);
        assert!((legs[2] - 1111.95).abs() < 1.0, "B->A was {}", legs[2]);
    }

    #[test]
    fn test_two_waypoints() {
        let input = vec![Waypoint::new("A", 1.0, 1.0), Waypoint::new("B", 2.0, 2.0)];
        let route = RouteOptimizer::compute_route(&input).unwrap();
        assert_eq!(labels(route.stops()), ["A", "B", "A"]);
    }

    #[test]
    fn test_start_is_not_searched_for() {
        // Starting at B would give a shorter tour; the first input is kept.
        let input = vec![
            Waypoint::new("B", 0.0, 5.0),
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("C", 0.0, 10.0),
        ];
        let route = RouteOptimizer::compute_route(&input).unwrap();
        assert_eq!(route.start().map(|w| w.label()), Some("B"));
    }

    #[test]
    fn test_greedy_is_not_improved_afterwards() {
        // Greedy from A: A -> B(0,1) -> C(0,3) -> D(0,-4) -> A.
        let input = vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("D", 0.0, -4.0),
            Waypoint::new("B", 0.0, 1.0),
            Waypoint::new("C", 0.0, 3.0),
        ];
        let route = RouteOptimizer::compute_route(&input).unwrap();
        assert_eq!(labels(route.stops()), ["A", "B", "C", "D", "A"]);
    }

    // ---- Tie-breaking ----

    #[test]
    fn test_ties_go_to_earliest_input() {
        // B and C are exactly equidistant from A; B comes first in the input.
        let input = vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("B", 0.0, 1.0),
            Waypoint::new("C", 0.0, -1.0),
        ];
        let route = RouteOptimizer::compute_route(&input).unwrap();
        assert_eq!(labels(route.stops()), ["A", "B", "C", "A"]);

        let swapped = vec![input[0].clone(), input[2].clone(), input[1].clone()];
        let route = RouteOptimizer::compute_route(&swapped).unwrap();
        assert_eq!(labels(route.stops()), ["A", "C", "B", "A"]);
    }

    #[test]
    fn test_duplicate_points_are_all_visited() {
        let input = vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("X1", 1.0, 1.0),
            Waypoint::new("A2", 0.0, 0.0),
            Waypoint::new("X2", 1.0, 1.0),
        ];
        let route = RouteOptimizer::compute_route(&input).unwrap();
        assert_eq!(labels(route.stops()), ["A", "A2", "X1", "X2", "A"]);
    }

    // ---- Configuration ----

    #[test]
    fn test_open_route() {
        let config = RouteConfig::default().with_close_loop(false);
        let route = RouteOptimizer::compute_route_with(&line(), &config).unwrap();

        assert_eq!(labels(route.stops()), ["A", "C", "B"]);
        assert!(!route.is_closed());
    }

    #[test]
    fn test_insufficient_input_is_rejected() {
        let empty: Vec<Waypoint> = Vec::new();
        assert_eq!(
            RouteOptimizer::compute_route(&empty),
            Err(Error::InsufficientInput {
                required: 2,
                actual: 0
            })
        );

        let single = vec![Waypoint::new("A", 0.0, 0.0)];
        assert_eq!(
            RouteOptimizer::compute_route(&single),
            Err(Error::InsufficientInput {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_insufficient_input_pass_through() {
        let config = RouteConfig::default().with_short_input(ShortInputPolicy::PassThrough);

        let single = vec![Waypoint::new("A", 0.0, 0.0)];
        let route = RouteOptimizer::compute_route_with(&single, &config).unwrap();
        assert_eq!(route.stops(), single.as_slice());
        assert!(!route.is_closed());

        let empty: Vec<Waypoint> = Vec::new();
        let route = RouteOptimizer::compute_route_with(&empty, &config).unwrap();
        assert!(route.is_empty());
    }

    // ---- Permissive inputs ----

    #[test]
    fn test_out_of_range_coordinates_are_routed() {
        let input = vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("far", 120.0, 400.0),
            Waypoint::new("near", 0.0, 1.0),
        ];
        let route = RouteOptimizer::compute_route(&input).unwrap();
        assert_eq!(route.len(), 4);
        assert_eq!(route.stops()[1].label(), "near");
    }

    #[test]
    fn test_nan_coordinates_do_not_panic() {
        let input = vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("nan", f64::NAN, 0.0),
            Waypoint::new("B", 0.0, 1.0),
        ];
        let route = RouteOptimizer::compute_route(&input).unwrap();
        assert_eq!(labels(route.stops()), ["A", "B", "nan", "A"]);
    }

    #[test]
    fn test_routes_tuples_and_references() {
        let points = [(0.0, 0.0), (0.0, 10.0), (0.0, 5.0)];
        let route = RouteOptimizer::compute_route(&points).unwrap();
        assert_eq!(route.into_stops(), vec![(0.0, 0.0), (0.0, 5.0), (0.0, 10.0), (0.0, 0.0)]);

        let input = line();
        let refs: Vec<&Waypoint> = input.iter().collect();
        let route = RouteOptimizer::compute_route(&refs).unwrap();
        assert!(std::ptr::eq(route.stops()[1], &input[2]));
    }

    // ---- visiting_order ----

    #[test]
    fn test_visiting_order_indices() {
        assert_eq!(RouteOptimizer::visiting_order(&line()), vec![0, 2, 1]);
        assert_eq!(RouteOptimizer::visiting_order::<Waypoint>(&[]), Vec::<usize>::new());
        assert_eq!(RouteOptimizer::visiting_order(&[(5.0, 5.0)]), vec![0]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_compute_routes_in_parallel() {
        let batches = vec![line(), vec![Waypoint::new("solo", 0.0, 0.0)], line()];
        let results = RouteOptimizer::compute_routes(&batches, &RouteConfig::default());

        assert_eq!(results.len(), 3);
        assert_eq!(labels(results[0].as_ref().unwrap().stops()), ["A", "C", "B", "A"]);
        assert!(matches!(results[1], Err(Error::InsufficientInput { actual: 1, .. })));
        assert_eq!(results[0], results[2]);
    }

    // ---- Properties ----

    fn waypoints(min: usize, max: usize) -> impl Strategy<Value = Vec<Waypoint>> {
        prop::collection::vec((-90.0f64..=90.0, -180.0f64..=180.0), min..=max).prop_map(|coords| {
            coords
                .into_iter()
                .enumerate()
                .map(|(i, (lat, lon))| Waypoint::new(format!("p{i}"), lat, lon))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_route_is_a_closed_permutation(input in waypoints(2, 40)) {
            let route = RouteOptimizer::compute_route(&input).unwrap();

            prop_assert_eq!(route.len(), input.len() + 1);
            prop_assert_eq!(&route.stops()[0], &input[0]);
            prop_assert_eq!(&route.stops()[route.len() - 1], &input[0]);

            let mut visited = labels(route.distinct_stops());
            let mut expected = labels(&input);
            visited.sort();
            expected.sort();
            prop_assert_eq!(visited, expected);
        }

        #[test]
        fn prop_open_route_is_a_permutation(input in waypoints(2, 40)) {
            let config = RouteConfig::default().with_close_loop(false);
            let route = RouteOptimizer::compute_route_with(&input, &config).unwrap();

            prop_assert_eq!(route.len(), input.len());
            let mut order = RouteOptimizer::visiting_order(&input);
            order.sort_unstable();
            prop_assert_eq!(order, (0..input.len()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_each_step_takes_a_nearest_candidate(input in waypoints(2, 25)) {
            let order = RouteOptimizer::visiting_order(&input);
            for step in 1..order.len() {
                let from = &input[order[step - 1]];
                let taken = distance_km(from, &input[order[step]]);
                for &later in &order[step + 1..] {
                    prop_assert!(taken <= distance_km(from, &input[later]));
                }
            }
        }

        #[test]
        fn prop_route_is_deterministic(input in waypoints(2, 30)) {
            let first = RouteOptimizer::compute_route(&input).unwrap();
            let second = RouteOptimizer::compute_route(&input).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_short_input_is_rejected(input in waypoints(0, 1)) {
            let result = RouteOptimizer::compute_route(&input);
            prop_assert_eq!(
                result,
                Err(Error::InsufficientInput { required: MIN_WAYPOINTS, actual: input.len() })
            );
        }
    }
}
