#![no_main]

use filemap_core::{rewrite_text, ApplyOrder, MappingTable, RenameTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First lines are candidate filenames, the whole input is the document
    let input = String::from_utf8_lossy(data);
    let mapping = MappingTable::default();
    let mut table = RenameTable::new();
    for name in input.lines().take(20) {
        let name: String = name.chars().take(100).collect();
        if let Some(new_name) = mapping.rename(&name) {
            table.insert(new_name, name);
        }
    }

    for order in [ApplyOrder::LongestFirst, ApplyOrder::Table] {
        let (rewritten, replacements) = rewrite_text(data, &table, order);
        if replacements.is_empty() {
            assert_eq!(rewritten, data);
        }
    }
});
