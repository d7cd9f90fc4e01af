use crate::flight::Flight;
use crate::registry::Registry;
use crate::scheduler::tests::utils::{add_aircraft, add_airport, add_flight, arb_distances};
use crate::scheduler::{DEPARTURE_SPACING, TURNAROUND_BUFFER, flight_duration, schedule_flights};
use crate::time::Time;
use proptest::prelude::*;
use proptest::proptest;

proptest! {
    #[test]
    fn test_timeline_invariants(distances in arb_distances(), start in 0..10_000u64) {
        let mut registry = Registry::new();
        let mut flights = Vec::new();
        let krk = add_airport(&mut registry, "KRK", 1, 1);
        let waw = add_airport(&mut registry, "WAW", 1, 1);
        let plane = add_aircraft(&mut registry, "PLANE_1", 1000, krk);
        for (i, distance) in distances.iter().enumerate() {
            add_flight(&mut flights, &format!("FL_{}", i), krk, waw, *distance, plane);
        }

        let start = Time(start);
        let scheduled = schedule_flights(flights, registry.airport(krk).unwrap(), start);
        prop_assert_eq!(distances.len(), scheduled.len());

        for (i, flight) in scheduled.iter().enumerate() {
            let departure = flight.scheduled_departure.unwrap();
            prop_assert!(departure >= start);
            prop_assert!(departure.0 >= start.0 + DEPARTURE_SPACING.0 * i as u64);
        }

        for pair in scheduled.windows(2) {
            let first = &pair[0];
            let second = &pair[1];
            prop_assert!(
                first.distance > second.distance
                    || (first.distance == second.distance
                        && input_index(first) < input_index(second)),
                "\nOrder broken: {} ({}) before {} ({})",
                first.id, first.distance, second.id, second.distance
            );

            let runway_free = first.scheduled_departure.unwrap()
                + flight_duration(first.distance)
                + TURNAROUND_BUFFER;
            prop_assert_eq!(Some(runway_free), second.scheduled_departure);
        }
    }
}

fn input_index(flight: &Flight) -> usize {
    flight.id.trim_start_matches("FL_").parse().unwrap()
}
