#![no_main]

use libfuzzer_sys::fuzz_target;
use netprefix::Prefix;

fuzz_target!(|data: &str| {
    if let Ok(prefix) = data.parse::<Prefix>() {
        assert!(prefix.is_valid());
        assert_eq!(prefix.to_string().parse::<Prefix>(), Ok(prefix));
    }
});
