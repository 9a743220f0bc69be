//! Unit tests for lift-route.

use lift_core::{Floor, FloorRange};

use crate::{RouteError, TargetQueue, best_order, exact_order, greedy_order, path_length};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn queue(min: Floor, max: Floor) -> TargetQueue {
    TargetQueue::new(FloorRange::new(min, max), 8)
}

fn stops(q: &TargetQueue) -> Vec<Floor> {
    q.stops().collect()
}

// ── Search ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use super::*;

    #[test]
    fn path_length_sums_segments() {
        assert_eq!(path_length(5, [8, 2, 9]), 3 + 6 + 7);
        assert_eq!(path_length(5, []), 0);
    }

    #[test]
    fn two_stops_compares_both_orders() {
        assert_eq!(exact_order(5, &[2, 6]), (5, vec![6, 2]));
        assert_eq!(exact_order(5, &[6, 2]), (5, vec![6, 2]));
    }

    #[test]
    fn ties_keep_the_given_order() {
        // 5→8→2 and 5→2→8 are both 9 floors.
        assert_eq!(exact_order(5, &[8, 2]), (9, vec![8, 2]));
        assert_eq!(exact_order(5, &[2, 8]), (9, vec![2, 8]));
    }

    #[test]
    fn three_stops_finds_the_shortest_sweep() {
        let (cost, order) = exact_order(5, &[8, 2, 9]);
        assert_eq!(cost, 10);
        assert_eq!(order, vec![2, 8, 9]);
    }

    #[test]
    fn greedy_goes_to_the_nearest_stop_first() {
        assert_eq!(greedy_order(5, &[9, 4, 1]), vec![4, 1, 9]);
    }

    #[test]
    fn best_order_falls_back_above_the_limit() {
        let points = [9, 4, 1, 7];
        assert_eq!(best_order(5, &points, 3), greedy_order(5, &points));
        assert_eq!(best_order(5, &points, 4), exact_order(5, &points).1);
    }
}

// ── TargetQueue ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod target_queue {
    use super::*;

    #[test]
    fn empty_queue_visits_only_current_floor() {
        let q = queue(1, 10);
        assert!(q.will_visit(5, 5));
        assert!(!q.will_visit(5, 6));
        assert!(q.is_empty());
    }

    #[test]
    fn out_of_range_stop_is_rejected() {
        let mut q = queue(6, 10);
        assert_eq!(
            q.request_stop(10, 3),
            Err(RouteError::FloorOutOfRange { floor: 3, min: 6, max: 10 })
        );
        assert!(q.is_empty());
        assert!(!q.will_visit(10, 3));
    }

    #[test]
    fn current_floor_is_never_committed() {
        let mut q = queue(1, 10);
        assert_eq!(q.request_stop(5, 5), Ok(false));
        assert!(q.is_empty());
    }

    #[test]
    fn floor_on_the_path_is_not_committed() {
        let mut q = queue(1, 10);
        assert_eq!(q.request_stop(5, 9), Ok(true));
        assert_eq!(q.request_stop(5, 7), Ok(false));
        assert_eq!(stops(&q), vec![9]);
    }

    #[test]
    fn farther_floor_extends_the_last_segment() {
        let mut q = queue(1, 10);
        q.request_stop(5, 7).unwrap();
        q.request_stop(5, 9).unwrap();
        assert_eq!(stops(&q), vec![9]);
        assert!(q.will_visit(5, 7));
    }

    #[test]
    fn reversal_appends_a_new_stop() {
        let mut q = queue(1, 10);
        q.request_stop(5, 8).unwrap();
        q.request_stop(5, 2).unwrap();
        assert_eq!(stops(&q), vec![8, 2]);
    }

    #[test]
    fn zig_zag_requests_are_reordered() {
        let mut q = queue(1, 10);
        q.request_stop(5, 8).unwrap();
        q.request_stop(5, 2).unwrap();
        q.request_stop(5, 9).unwrap();

        let naive = path_length(5, [8, 2, 9]);
        assert!(q.path_length(5) <= naive);
        assert_eq!(q.path_length(5), 10);
        assert_eq!(stops(&q), vec![2, 8, 9]);
    }

    #[test]
    fn requested_floor_is_visited_afterwards() {
        let mut q = queue(1, 20);
        for floor in [14, 3, 17, 1, 9, 20, 6] {
            q.request_stop(10, floor).unwrap();
            assert!(q.will_visit(10, floor), "floor {floor} dropped from {:?}", stops(&q));
        }
    }

    #[test]
    fn remove_head_pops_in_order() {
        let mut q = queue(1, 10);
        q.request_stop(5, 8).unwrap();
        q.request_stop(5, 2).unwrap();
        assert_eq!(q.remove_head(), Some(8));
        assert_eq!(q.head(), Some(2));
        assert_eq!(q.remove_head(), Some(2));
        assert_eq!(q.remove_head(), None);
    }

    #[test]
    fn committed_floor_stops_being_potential() {
        let mut q = queue(1, 10);
        q.add_potential(7);
        q.request_stop(5, 7).unwrap();
        assert_eq!(q.potential().count(), 0);
    }

    #[test]
    fn potential_outside_range_is_clamped() {
        let mut q = queue(1, 5);
        q.add_potential(8);
        assert_eq!(q.potential().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    #[should_panic(expected = "head equals the current floor")]
    fn head_on_current_floor_is_a_defect() {
        let mut q = queue(1, 10);
        q.request_stop(5, 8).unwrap();
        // Pretend the car reached 8 without consuming the stop.
        q.request_stop(8, 2).unwrap();
    }
}

// ── turns_to_visit ────────────────────────────────────────────────────────────

#[cfg(test)]
mod turns {
    use super::*;

    #[test]
    fn idle_elevator_travels_straight_there() {
        let q = queue(1, 10);
        assert_eq!(q.turns_to_visit(5, &[1, 6]), Some(4 + 5));
    }

    #[test]
    fn empty_query_costs_nothing() {
        assert_eq!(queue(1, 10).turns_to_visit(5, &[]), Some(0));
    }

    #[test]
    fn out_of_range_floor_has_no_path() {
        let q = queue(1, 5);
        assert_eq!(q.turns_to_visit(5, &[1, 6]), None);
        assert_eq!(q.turns_to_visit(5, &[7]), None);
    }

    #[test]
    fn zero_cost_is_distinct_from_no_path() {
        let q = queue(1, 5);
        assert_eq!(q.turns_to_visit(3, &[3]), Some(0));
    }

    #[test]
    fn floors_on_the_path_are_reached_in_passing() {
        let mut q = queue(1, 10);
        q.request_stop(2, 9).unwrap();
        // 4 and then 7 both lie on 2→9.
        assert_eq!(q.turns_to_visit(2, &[4, 7]), Some(5));
    }

    #[test]
    fn floor_behind_the_path_waits_for_the_queue() {
        let mut q = queue(1, 10);
        q.request_stop(5, 9).unwrap();
        // Up to 9 first, then down to 3.
        assert_eq!(q.turns_to_visit(5, &[3]), Some(4 + 6));
    }

    #[test]
    fn chained_floors_reuse_later_segments() {
        let mut q = queue(1, 10);
        q.request_stop(5, 9).unwrap();
        q.request_stop(5, 1).unwrap();
        // 3 lies on 9→1 (cost 4 + 6), then 2 continues on the same segment.
        assert_eq!(q.turns_to_visit(5, &[3, 2]), Some(4 + 6 + 1));
    }

    #[test]
    fn potential_targets_extend_the_path() {
        let mut q = queue(1, 10);
        q.request_stop(5, 6).unwrap();
        q.add_potential(9);
        // 8 is now on the soft path 6→9.
        assert_eq!(q.turns_to_visit(5, &[8]), Some(3));
        q.clear_potential();
        assert_eq!(q.turns_to_visit(5, &[8]), Some(3));
        assert_eq!(q.turns_to_visit(5, &[6, 4]), Some(1 + 2));
    }

    #[test]
    fn potential_target_is_honoured_before_new_floors() {
        let mut q = queue(1, 10);
        q.request_stop(5, 6).unwrap();
        assert_eq!(q.turns_to_visit(5, &[2, 9]), Some(1 + 4 + 7));
        q.add_potential(1);
        // Soft path 5→6→1 reaches 2 on the way down, but 9 now waits
        // until the car has been to 1.
        assert_eq!(q.turns_to_visit(5, &[2, 9]), Some(1 + 4 + 1 + 8));
        q.forget_potential(1);
        assert_eq!(q.potential().count(), 0);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    fn distinct_floors(max_len: usize) -> impl Strategy<Value = Vec<Floor>> {
        proptest::collection::btree_set(1u32..=30, 0..=max_len)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    }

    proptest! {
        #[test]
        fn exact_order_is_a_shorter_permutation(start in 1u32..=30, points in distinct_floors(6)) {
            let (cost, order) = exact_order(start, &points);
            prop_assert!(cost <= path_length(start, points.iter().copied()));
            prop_assert_eq!(cost, path_length(start, order.iter().copied()));

            let mut sorted_in = points.clone();
            let mut sorted_out = order.clone();
            sorted_in.sort_unstable();
            sorted_out.sort_unstable();
            prop_assert_eq!(sorted_in, sorted_out);
        }

        #[test]
        fn exact_order_never_loses_to_greedy(start in 1u32..=30, points in distinct_floors(6)) {
            let (cost, _) = exact_order(start, &points);
            let greedy = greedy_order(start, &points);
            prop_assert!(cost <= path_length(start, greedy.iter().copied()));
        }

        #[test]
        fn turns_grow_with_more_floors(
            start in 1u32..=20,
            requests in proptest::collection::vec(1u32..=20, 0..5),
            wanted in proptest::collection::vec(1u32..=20, 1..5),
        ) {
            let mut q = queue(1, 20);
            for floor in requests {
                q.request_stop(start, floor).unwrap();
            }
            let mut last = 0;
            for n in 1..=wanted.len() {
                let turns = q.turns_to_visit(start, &wanted[..n]).unwrap();
                prop_assert!(turns >= last);
                last = turns;
            }
        }

        #[test]
        fn stepping_never_leaves_head_on_current_floor(
            start in 1u32..=20,
            ops in proptest::collection::vec(proptest::option::of(1u32..=20), 1..40),
        ) {
            // `Some(floor)` requests a stop, `None` moves the car one floor.
            let mut q = queue(1, 20);
            let mut current = start;
            for op in ops {
                match op {
                    Some(floor) => {
                        q.request_stop(current, floor).unwrap();
                    }
                    None => {
                        if let Some(head) = q.head() {
                            current = if head > current { current + 1 } else { current - 1 };
                            if current == head {
                                q.remove_head();
                            }
                        }
                    }
                }
                prop_assert_ne!(q.head(), Some(current));
            }
        }

        #[test]
        fn requested_stop_is_on_the_path(
            start in 1u32..=20,
            requests in proptest::collection::vec(1u32..=20, 1..8),
        ) {
            let mut q = queue(1, 20);
            for floor in requests {
                q.request_stop(start, floor).unwrap();
                prop_assert!(q.will_visit(start, floor));
                prop_assert_ne!(q.head(), Some(start));
            }
        }
    }
}
