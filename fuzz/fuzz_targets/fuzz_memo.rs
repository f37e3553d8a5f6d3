#![no_main]

use libfuzzer_sys::fuzz_target;

use algolab_core::calculator::FibError;
use algolab_core::constants::{FIB_TABLE, MAX_FIB_U64};
use algolab_core::memo::fibonacci_memoized_counted;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let n = i64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);

    match fibonacci_memoized_counted(n) {
        Ok((value, stats)) => {
            let index = usize::try_from(n).unwrap();
            assert_eq!(value, FIB_TABLE[index]);
            assert!(stats.each_index_once());
        }
        Err(FibError::InvalidArgument(got)) => assert!(got < 0 && got == n),
        Err(FibError::Overflow(got)) => assert!(got > MAX_FIB_U64),
        Err(e) => panic!("unexpected error for {n}: {e}"),
    }
});
