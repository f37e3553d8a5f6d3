#![no_main]

use libfuzzer_sys::fuzz_target;

use algolab_core::quicksort::quicksort;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First two bytes pick the range, the rest is the sequence
    let values: Vec<i16> = data[2..]
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect();
    if values.is_empty() {
        return;
    }
    let start = usize::from(data[0]) % values.len();
    let end = usize::from(data[1]) % values.len();

    let mut sorted = values.clone();
    quicksort(&mut sorted, start, end);

    assert_eq!(sorted[..start], values[..start]);
    assert_eq!(sorted[end.max(start) + 1..], values[end.max(start) + 1..]);
    if start < end {
        let mut expected = values[start..=end].to_vec();
        expected.sort_unstable();
        assert_eq!(sorted[start..=end], expected[..]);
    } else {
        assert_eq!(sorted, values);
    }
});
