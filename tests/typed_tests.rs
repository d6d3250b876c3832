use bytemuck::{Pod, Zeroable};
use slackvec::{SlackVec, SlackVecError};

#[derive(Debug, PartialEq, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn test_buffer_initialization() {
    let vec: SlackVec<u32> = SlackVec::new();
    assert_eq!(vec.len(), 0);
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
    assert_eq!(vec.as_raw().capacity(), 0);
}

#[test]
fn test_with_capacity() {
    let vec: SlackVec<u64> = SlackVec::with_capacity(20).unwrap();
    assert!(vec.capacity() >= 20);
    assert!(vec.is_empty());
}

#[test]
fn test_stack_push_pop_operations() {
    let mut vec: SlackVec<u32> = SlackVec::new();

    vec.push(1).unwrap();
    vec.push(2).unwrap();
    vec.push(3).unwrap();
    assert_eq!(vec.len(), 3);

    assert_eq!(vec.pop(), Some(3));
    assert_eq!(vec.pop(), Some(2));
    assert_eq!(vec.pop(), Some(1));
    assert_eq!(vec.pop(), None);
    assert!(vec.is_empty());
}

#[test]
fn test_queue_operations() {
    let mut vec: SlackVec<u32> = SlackVec::new();
    for v in 0..32 {
        vec.push(v).unwrap();
    }
    for v in 0..32 {
        assert_eq!(vec.shift(), Some(v));
    }
    assert_eq!(vec.shift(), None);
}

#[test]
fn test_struct_elements() {
    let mut vec: SlackVec<Point> = SlackVec::new();
    vec.push(Point { x: 1, y: 2 }).unwrap();
    vec.unshift(Point { x: -1, y: -2 }).unwrap();
    vec.insert(1, Point { x: 0, y: 0 }).unwrap();

    assert_eq!(
        vec.to_vec(),
        [
            Point { x: -1, y: -2 },
            Point { x: 0, y: 0 },
            Point { x: 1, y: 2 }
        ]
    );
    assert_eq!(vec.remove(1).unwrap(), Point { x: 0, y: 0 });
    assert_eq!(vec.len(), 2);
}

#[test]
fn test_slice_operations() {
    let mut vec: SlackVec<u16> = SlackVec::new();
    vec.push_slice(&[4, 5, 6]).unwrap();
    vec.unshift_slice(&[1, 2]).unwrap();
    vec.insert_slice(2, &[3]).unwrap();
    assert_eq!(vec.to_vec(), [1, 2, 3, 4, 5, 6]);

    let mut front = [0u16; 2];
    vec.shift_into(&mut front).unwrap();
    assert_eq!(front, [1, 2]);

    let mut back = [0u16; 2];
    vec.pop_into(&mut back).unwrap();
    assert_eq!(back, [5, 6]);

    assert_eq!(vec.to_vec(), [3, 4]);
}

#[test]
fn test_remove_into_captures_range() {
    let mut vec = SlackVec::try_from(&[1u32, 2, 3][..]).unwrap();
    vec.insert(1, 0).unwrap();
    assert_eq!(vec.to_vec(), [1, 0, 2, 3]);

    let mut removed = [0u32; 2];
    vec.remove_into(1, &mut removed).unwrap();
    assert_eq!(vec.to_vec(), [1, 3]);
    assert_eq!(removed, [0, 2]);
}

#[test]
fn test_remove_range() {
    let mut vec = SlackVec::try_from(&[1u8, 2, 3, 4, 5][..]).unwrap();
    vec.remove_range(1, 3).unwrap();
    assert_eq!(vec.to_vec(), [1, 5]);
    assert_eq!(
        vec.remove_range(1, 2),
        Err(SlackVecError::OutOfRange {
            index: 1,
            len: 2,
            size: 2
        })
    );
}

#[test]
fn test_set_and_assign() {
    let mut vec = SlackVec::try_from(&[0i64; 4][..]).unwrap();
    vec.set(0, -5).unwrap();
    vec.assign(2, &[7, 8]).unwrap();
    assert_eq!(vec.to_vec(), [-5, 0, 7, 8]);
    assert!(vec.set(4, 1).is_err());
    assert!(vec.assign(3, &[1, 2]).is_err());
}

#[test]
fn test_first_last_get() {
    let mut vec: SlackVec<u32> = SlackVec::new();
    assert_eq!(vec.first(), None);
    assert_eq!(vec.last(), None);

    vec.push_slice(&[10, 20, 30]).unwrap();
    assert_eq!(vec.first(), Some(10));
    assert_eq!(vec.last(), Some(30));
    assert_eq!(vec.get(1), Some(20));
    assert_eq!(vec.get(3), None);
}

#[test]
fn test_sort_and_swap() {
    let mut vec = SlackVec::try_from(&[3i32, -1, 2, 0][..]).unwrap();
    vec.sort().unwrap();
    assert_eq!(vec.to_vec(), [-1, 0, 2, 3]);

    vec.swap(0, 3).unwrap();
    assert_eq!(vec.to_vec(), [3, 0, 2, -1]);

    vec.sort_by(|a, b| b.cmp(a)).unwrap();
    assert_eq!(vec.to_vec(), [3, 2, 0, -1]);
}

#[test]
fn test_sort_floats_with_partial_order() {
    let mut vec = SlackVec::try_from(&[2.5f64, -1.0, 0.5][..]).unwrap();
    vec.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal))
        .unwrap();
    assert_eq!(vec.to_vec(), [-1.0, 0.5, 2.5]);
}

#[test]
fn test_shrink_and_release() {
    let mut vec: SlackVec<u32> = SlackVec::new();
    vec.push_slice(&(0..40).collect::<Vec<_>>()).unwrap();
    vec.remove_range(0, 30).unwrap();
    vec.shrink_to_fit().unwrap();
    assert_eq!(vec.capacity(), 10);
    assert_eq!(vec.front_slack(), 0);
    assert_eq!(vec.back_slack(), 0);

    vec.release();
    assert_eq!(vec.capacity(), 0);
    assert!(vec.is_empty());
}

#[test]
fn test_clear_keeps_capacity() {
    let mut vec = SlackVec::try_from(&[1u32, 2, 3][..]).unwrap();
    let capacity = vec.capacity();
    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), capacity);
}

#[test]
fn test_clone_is_independent() {
    let mut vec = SlackVec::try_from(&[1u32, 2][..]).unwrap();
    let copy = vec.clone();
    vec.push(3).unwrap();
    assert_eq!(copy.to_vec(), [1, 2]);
    assert_eq!(vec.to_vec(), [1, 2, 3]);
}

#[test]
fn test_debug_lists_values() {
    let vec = SlackVec::try_from(&[1u8, 2][..]).unwrap();
    assert_eq!(format!("{vec:?}"), "[1, 2]");
}
