use super::*;

fn track(len: usize) -> Track {
    Track {
        len,
        loop_index: 0,
        skip_index: None,
    }
}

#[test]
fn wraps_at_both_ends() {
    let track = track(4);
    assert_eq!(track.next(Some(0), Direction::Left).unwrap(), Some(3));
    assert_eq!(track.next(Some(3), Direction::Right).unwrap(), Some(0));
}

#[test]
fn full_lap_returns_to_start() {
    for len in 1..8 {
        let track = track(len);
        for start in 0..len {
            let mut index = Some(start);
            for _ in 0..len {
                index = track.next(index, Direction::Right).unwrap();
            }
            assert_eq!(index, Some(start));
        }
    }
}

#[test]
fn skips_skip_index() {
    let track = Track {
        len: 3,
        loop_index: 0,
        skip_index: Some(1),
    };
    assert_eq!(track.next(Some(0), Direction::Right).unwrap(), Some(2));
    assert_eq!(track.next(Some(2), Direction::Left).unwrap(), Some(0));
}

#[test]
fn never_rests_on_skip_index() {
    for len in 2..7 {
        for skip in 0..len {
            let track = Track {
                len,
                loop_index: 0,
                skip_index: Some(skip),
            };
            let mut index = Some((skip + 1) % len);
            for _ in 0..(2 * len) {
                index = track.next(index, Direction::Right).unwrap();
                assert_ne!(index, Some(skip));
            }
            for _ in 0..(2 * len) {
                index = track.next(index, Direction::Left).unwrap();
                assert_ne!(index, Some(skip));
            }
        }
    }
}

#[test]
fn single_skipped_slide_is_an_infinite_loop() {
    let track = Track {
        len: 1,
        loop_index: 0,
        skip_index: Some(0),
    };
    match track.next(Some(0), Direction::Right) {
        Err(NavigationError::InfiniteLoop { skip_index }) => assert_eq!(skip_index, 0),
        other => panic!("Unexpected step result: {:?}", other),
    }
    assert!(track.next(Some(0), Direction::Left).is_err());
}

#[test]
fn loop_index_is_the_wrap_target() {
    let track = Track {
        len: 5,
        loop_index: 2,
        skip_index: None,
    };
    assert_eq!(track.next(Some(4), Direction::Right).unwrap(), Some(2));
    assert_eq!(track.next(Some(2), Direction::Left).unwrap(), Some(4));
    assert_eq!(track.next(Some(0), Direction::Left).unwrap(), Some(4));
    assert_eq!(track.next(Some(3), Direction::Left).unwrap(), Some(2));
}

#[test]
fn empty_track_has_no_index() {
    let track = track(0);
    assert_eq!(track.next(None, Direction::Right).unwrap(), None);
    assert_eq!(track.next(Some(0), Direction::Left).unwrap(), None);
}

#[test]
fn unset_index_enters_from_the_edges() {
    let track = track(3);
    assert_eq!(track.next(None, Direction::Right).unwrap(), Some(0));
    assert_eq!(track.next(None, Direction::Left).unwrap(), Some(2));
}
