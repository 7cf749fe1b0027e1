#![no_main]

use libfuzzer_sys::fuzz_target;
use propdf::app::split_drop_list;
use propdf::queue::MergeQueue;

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");

    let paths = split_drop_list(s);

    // Every item is non-empty and the queue never holds duplicates
    let mut queue = MergeQueue::new();
    for path in &paths {
        assert!(!path.as_os_str().is_empty());
        queue.add_if_absent(path.clone());
    }
    assert!(queue.len() <= paths.len());
});
