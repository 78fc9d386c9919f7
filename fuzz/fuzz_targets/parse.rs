#![no_main]

use libfuzzer_sys::fuzz_target;

use decint::BigInt;

fuzz_target!(|data: &[u8]| {
    if data.len() > 16 * 1024 {
        return;
    }
    let Ok(src) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(value) = src.parse::<BigInt>() else {
        return;
    };

    // Accepted input must render canonically and survive a round trip.
    let rendered = value.to_string();
    let reparsed: BigInt = rendered.parse().expect("canonical strings reparse");
    assert_eq!(reparsed, value);
    assert_eq!(reparsed.to_string(), rendered);
    assert!(!(rendered == "0" && value.is_negative()));
});
