#![no_main]

use launchboard::catalog::Catalog;
use launchboard::record::{AppRecord, Icon};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text as both application names and the search query
    let text = String::from_utf8_lossy(data);
    let (names, query) = text.split_once('\n').unwrap_or((text.as_ref(), ""));

    let records = names
        .split(',')
        .enumerate()
        .map(|(i, name)| {
            AppRecord::new(format!("/Applications/{i}.app"), name, Icon::placeholder(1))
        })
        .collect();

    let mut catalog = Catalog::with_page_size(7);
    catalog.populate(records);
    catalog.set_filter(query);

    let pages = catalog.paged_view().pages();
    assert!(pages.iter().all(|page| !page.is_empty() && page.len() <= 7));
    catalog.move_entry(0, 0, usize::from(data.first().copied().unwrap_or(0)));
});
