//! First access from many threads at once must build exactly one registry

use std::sync::{Arc, Barrier};
use std::thread;

use httpc_errno::{message_of, name_of, registry, ErrorRegistry};

#[test]
fn test_concurrent_first_access() {
    const THREADS: usize = 16;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let registry: &'static ErrorRegistry = registry();
                let answers: Vec<(String, String)> = (-2..150)
                    .map(|code| (name_of(code).into_owned(), message_of(code).into_owned()))
                    .collect();
                (registry as *const ErrorRegistry as usize, registry.len(), answers)
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let (address, len, answers) = &results[0];
    for (other_address, other_len, other_answers) in &results[1..] {
        assert_eq!(address, other_address);
        assert_eq!(len, other_len);
        assert_eq!(answers, other_answers);
    }
}

#[test]
fn test_shared_registry_across_threads() {
    let registry = Arc::new(ErrorRegistry::for_platform(httpc_errno::Platform::Linux).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.message_of(2).into_owned())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "No such file or directory");
    }
}
