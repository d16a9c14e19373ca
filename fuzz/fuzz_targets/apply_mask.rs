#![no_main]

use libfuzzer_sys::fuzz_target;
use netprefix::Prefix;

fuzz_target!(|prefix: Prefix| {
    let mut once = prefix.clone();
    once.apply_mask();
    assert_eq!(once.octets().len(), prefix.octets().len());
    assert_eq!(once.len(), prefix.len());

    let mut twice = once.clone();
    twice.apply_mask();
    assert_eq!(once.octets(), twice.octets());

    if prefix.is_valid() {
        let bits = usize::from(prefix.len());
        for (i, octet) in once.octets().iter().enumerate() {
            if i * 8 >= bits {
                assert_eq!(*octet, 0);
            }
        }
    }
});
