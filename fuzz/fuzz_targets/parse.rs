#![no_main]
use libfuzzer_sys::fuzz_target;

use ical_tz::Timezone;

fuzz_target!(|data: &[u8]| {
    if let Ok(ics) = std::str::from_utf8(data) {
        let _ = Timezone::from_ics("fuzz", ics);
    }
});
