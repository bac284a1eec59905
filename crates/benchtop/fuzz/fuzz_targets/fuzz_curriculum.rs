//! Fuzz target for curriculum parsing and probe resolution.
//!
//! Any curriculum that parses must validate and resolve every element
//! without panicking.

#![no_main]

use benchtop::{build_probe_info, Curriculum, ProbeRequest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(curriculum) = Curriculum::from_json_str(input) else {
        return;
    };

    let _ = curriculum.validate();

    for (category, module, element) in curriculum.elements() {
        let request = ProbeRequest::new("node")
            .with_category(category)
            .with_module(module)
            .with_element(element);
        let bundle = build_probe_info(&request);
        assert!(!bundle.icon.is_empty());
        assert!(!bundle.title.is_empty());
    }
});
